/// Neon Clicker game state definitions.

use crate::achievement::{Achievement, HasAchievements, Unlocked};
use crate::economy::CostCurve;

/// Purchasable shop items, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickerItem {
    ClickPower,
    AutoClicker,
    Multiplier,
}

impl ClickerItem {
    pub fn all() -> &'static [ClickerItem] {
        &[
            ClickerItem::ClickPower,
            ClickerItem::AutoClicker,
            ClickerItem::Multiplier,
        ]
    }

    /// Stable id, matching the legacy page's shop ids.
    pub fn id(&self) -> &'static str {
        match self {
            ClickerItem::ClickPower => "clickPower",
            ClickerItem::AutoClicker => "autoClicker",
            ClickerItem::Multiplier => "multiplier",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ClickerItem::ClickPower => "Click Power",
            ClickerItem::AutoClicker => "Auto Clicker",
            ClickerItem::Multiplier => "Multiplier",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ClickerItem::ClickPower => "Increase points per click by 1",
            ClickerItem::AutoClicker => "Adds 1 auto click per second",
            ClickerItem::Multiplier => "Double your click power",
        }
    }

    pub fn curve(&self) -> CostCurve {
        match self {
            ClickerItem::ClickPower => CostCurve::Scaling { base: 10.0, growth: 1.7 },
            ClickerItem::AutoClicker => CostCurve::Scaling { base: 50.0, growth: 1.6 },
            ClickerItem::Multiplier => CostCurve::OneShot { cost: 400.0 },
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ClickerItem::ClickPower => 0,
            ClickerItem::AutoClicker => 1,
            ClickerItem::Multiplier => 2,
        }
    }
}

/// Log entry for the Clicker game.
#[derive(Clone, Debug)]
pub struct ClickerLogEntry {
    pub text: String,
    pub is_important: bool,
}

/// Full state of a Neon Clicker game.
#[derive(Clone, Debug)]
pub struct ClickerState {
    pub score: f64,
    /// Total score earned all-time. Only ever increases.
    pub score_all_time: f64,
    pub total_clicks: u64,
    /// Points per click. Derived from the levels below.
    pub per_click: f64,
    /// Auto clicks per tick. Derived from `auto_level`.
    pub autos: u32,
    pub click_power_level: u32,
    pub auto_level: u32,
    pub multiplier_bought: bool,
    pub achievements: Unlocked,
    pub log: Vec<ClickerLogEntry>,
    /// Set by purchases; cleared by the session once persisted.
    pub dirty: bool,
}

impl ClickerState {
    pub fn new() -> Self {
        Self {
            score: 0.0,
            score_all_time: 0.0,
            total_clicks: 0,
            per_click: 1.0,
            autos: 0,
            click_power_level: 0,
            auto_level: 0,
            multiplier_bought: false,
            achievements: Unlocked::default(),
            log: vec![ClickerLogEntry {
                text: "Welcome to Neon Clicker!".into(),
                is_important: true,
            }],
            dirty: false,
        }
    }

    /// Purchase level of an item (0 or 1 for the one-shot multiplier).
    pub fn level(&self, item: ClickerItem) -> u32 {
        match item {
            ClickerItem::ClickPower => self.click_power_level,
            ClickerItem::AutoClicker => self.auto_level,
            ClickerItem::Multiplier => self.multiplier_bought as u32,
        }
    }

    pub fn cost(&self, item: ClickerItem) -> f64 {
        item.curve().cost_at(self.level(item))
    }

    /// Recompute `per_click` and `autos` from the stored levels.
    pub fn recompute_derived(&mut self) {
        let base = 1.0 + self.click_power_level as f64;
        self.per_click = if self.multiplier_bought { base * 2.0 } else { base };
        self.autos = self.auto_level;
    }

    /// Credit score and the all-time counter together.
    pub fn earn(&mut self, amount: f64) {
        self.score += amount;
        self.score_all_time += amount;
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(ClickerLogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > 50 {
            self.log.remove(0);
        }
    }
}

impl Default for ClickerState {
    fn default() -> Self {
        Self::new()
    }
}

impl HasAchievements for ClickerState {
    fn unlocked(&self) -> &Unlocked {
        &self.achievements
    }

    fn unlocked_mut(&mut self) -> &mut Unlocked {
        &mut self.achievements
    }
}

/// Achievement list, evaluated in this order.
pub static ACHIEVEMENTS: &[Achievement<ClickerState>] = &[
    Achievement {
        id: "first_click",
        name: "Hello, Neon",
        description: "Click once (+5 points)",
        condition: |s| s.total_clicks >= 1,
        reward: |s| s.earn(5.0),
    },
    Achievement {
        id: "century",
        name: "Century",
        description: "Earn 100 points in total (+10 points)",
        condition: |s| s.score_all_time >= 100.0,
        reward: |s| s.earn(10.0),
    },
    Achievement {
        id: "hands_free",
        name: "Hands Free",
        description: "Own 5 auto clickers (+50 points)",
        condition: |s| s.autos >= 5,
        reward: |s| s.earn(50.0),
    },
    Achievement {
        id: "doubled",
        name: "Doubled Up",
        description: "Buy the multiplier (+100 points)",
        condition: |s| s.multiplier_bought,
        reward: |s| s.earn(100.0),
    },
    Achievement {
        id: "high_score",
        name: "High Score",
        description: "Earn 10,000 points in total (+500 points)",
        condition: |s| s.score_all_time >= 10_000.0,
        reward: |s| s.earn(500.0),
    },
];
