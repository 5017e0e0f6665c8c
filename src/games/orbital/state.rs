/// Orbital Works game state definitions.

use crate::achievement::{Achievement, HasAchievements, Unlocked};
use crate::economy::CostCurve;

/// Tradeable resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Ore,
    Alloy,
    Fuel,
    Parts,
}

/// Kinds of buildings, in tick order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildingKind {
    Mine,
    Smelter,
    Refinery,
    Assembler,
    Launchpad,
}

impl BuildingKind {
    /// All building kinds in tick/display order.
    pub fn all() -> &'static [BuildingKind] {
        &[
            BuildingKind::Mine,
            BuildingKind::Smelter,
            BuildingKind::Refinery,
            BuildingKind::Assembler,
            BuildingKind::Launchpad,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            BuildingKind::Mine => 0,
            BuildingKind::Smelter => 1,
            BuildingKind::Refinery => 2,
            BuildingKind::Assembler => 3,
            BuildingKind::Launchpad => 4,
        }
    }

    pub fn base_cost(&self) -> f64 {
        match self {
            BuildingKind::Mine => 15.0,
            BuildingKind::Smelter => 100.0,
            BuildingKind::Refinery => 250.0,
            BuildingKind::Assembler => 800.0,
            BuildingKind::Launchpad => 2_000.0,
        }
    }

    pub fn growth(&self) -> f64 {
        match self {
            BuildingKind::Launchpad => 1.5,
            _ => 1.15,
        }
    }

    /// Per-unit, per-tick inputs.
    pub fn inputs(&self) -> &'static [(Resource, f64)] {
        match self {
            BuildingKind::Mine => &[],
            BuildingKind::Smelter => &[(Resource::Ore, 2.0)],
            BuildingKind::Refinery => &[(Resource::Ore, 1.0)],
            BuildingKind::Assembler => &[(Resource::Alloy, 2.0), (Resource::Fuel, 1.0)],
            BuildingKind::Launchpad => &[],
        }
    }

    /// Per-unit, per-tick output. Launch pads produce nothing.
    pub fn output(&self) -> Option<(Resource, f64)> {
        match self {
            BuildingKind::Mine => Some((Resource::Ore, 1.0)),
            BuildingKind::Smelter => Some((Resource::Alloy, 1.0)),
            BuildingKind::Refinery => Some((Resource::Fuel, 1.0)),
            BuildingKind::Assembler => Some((Resource::Parts, 1.0)),
            BuildingKind::Launchpad => None,
        }
    }
}

/// Everything the shop sells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitalItem {
    Building(BuildingKind),
    /// +10% global throughput per level.
    Throughput,
    /// One-shot: enables auto-purchasing.
    Automation,
}

impl OrbitalItem {
    /// Shop order.
    pub fn all() -> &'static [OrbitalItem] {
        &[
            OrbitalItem::Building(BuildingKind::Mine),
            OrbitalItem::Building(BuildingKind::Smelter),
            OrbitalItem::Building(BuildingKind::Refinery),
            OrbitalItem::Building(BuildingKind::Assembler),
            OrbitalItem::Building(BuildingKind::Launchpad),
            OrbitalItem::Throughput,
            OrbitalItem::Automation,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            OrbitalItem::Building(BuildingKind::Mine) => "mine",
            OrbitalItem::Building(BuildingKind::Smelter) => "smelter",
            OrbitalItem::Building(BuildingKind::Refinery) => "refinery",
            OrbitalItem::Building(BuildingKind::Assembler) => "assembler",
            OrbitalItem::Building(BuildingKind::Launchpad) => "launchpad",
            OrbitalItem::Throughput => "throughput",
            OrbitalItem::Automation => "automation",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OrbitalItem::Building(BuildingKind::Mine) => "Ore Mine",
            OrbitalItem::Building(BuildingKind::Smelter) => "Smelter",
            OrbitalItem::Building(BuildingKind::Refinery) => "Fuel Refinery",
            OrbitalItem::Building(BuildingKind::Assembler) => "Assembler",
            OrbitalItem::Building(BuildingKind::Launchpad) => "Launch Pad",
            OrbitalItem::Throughput => "Throughput Tuning",
            OrbitalItem::Automation => "Automation Suite",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OrbitalItem::Building(BuildingKind::Mine) => "Digs 1 ore per second",
            OrbitalItem::Building(BuildingKind::Smelter) => "Turns 2 ore into 1 alloy",
            OrbitalItem::Building(BuildingKind::Refinery) => "Turns 1 ore into 1 fuel",
            OrbitalItem::Building(BuildingKind::Assembler) => "Turns 2 alloy + 1 fuel into 1 part",
            OrbitalItem::Building(BuildingKind::Launchpad) => "Bigger missions, bigger payouts",
            OrbitalItem::Throughput => "+10% throughput for every building",
            OrbitalItem::Automation => "Buys one building per second",
        }
    }

    pub fn curve(&self) -> CostCurve {
        match self {
            OrbitalItem::Building(kind) => CostCurve::Scaling {
                base: kind.base_cost(),
                growth: kind.growth(),
            },
            OrbitalItem::Throughput => CostCurve::Scaling { base: 500.0, growth: 2.0 },
            OrbitalItem::Automation => CostCurve::OneShot { cost: 5_000.0 },
        }
    }

    pub fn index(&self) -> usize {
        match self {
            OrbitalItem::Building(kind) => kind.index(),
            OrbitalItem::Throughput => 5,
            OrbitalItem::Automation => 6,
        }
    }
}

/// Order the automation suite tries purchases in; the first affordable wins.
pub const AUTOBUY_PRIORITY: &[BuildingKind] = &[
    BuildingKind::Launchpad,
    BuildingKind::Assembler,
    BuildingKind::Refinery,
    BuildingKind::Smelter,
    BuildingKind::Mine,
];

/// Share of the parts stock exported each tick (floored to whole parts).
pub const EXPORT_FRACTION: f64 = 0.1;
/// Credits paid per exported part.
pub const PART_PRICE: f64 = 25.0;
/// Global multiplier gained per throughput level.
pub const THROUGHPUT_STEP: f64 = 0.1;

// Mission tuning.
pub const MISSION_FUEL_BASE: f64 = 100.0;
pub const MISSION_FUEL_PER_PAD: f64 = 50.0;
pub const MISSION_PARTS_BASE: f64 = 10.0;
pub const MISSION_PARTS_PER_PAD: f64 = 5.0;
pub const MISSION_REWARD_BASE: f64 = 200.0;
pub const MISSION_REWARD_SPREAD: f64 = 300.0;
pub const MISSION_REWARD_PER_PAD: f64 = 50.0;

/// Log entry for the Orbital game.
#[derive(Clone, Debug)]
pub struct OrbitalLogEntry {
    pub text: String,
    pub is_important: bool,
}

/// Monotonic counters used for achievement thresholds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Totals {
    pub ore_mined: f64,
    pub alloy_smelted: f64,
    pub fuel_refined: f64,
    pub parts_built: f64,
    pub credits_earned: f64,
    pub missions_launched: u64,
}

/// Full state of an Orbital Works game.
#[derive(Clone, Debug)]
pub struct OrbitalState {
    pub credits: f64,
    pub ore: f64,
    pub alloy: f64,
    pub fuel: f64,
    pub parts: f64,
    /// Owned count per building, indexed by `BuildingKind::index`.
    pub buildings: [u32; 5],
    pub throughput_level: u32,
    pub automation: bool,
    pub totals: Totals,
    pub achievements: Unlocked,
    pub log: Vec<OrbitalLogEntry>,
    /// Set by purchases and missions; cleared once persisted.
    pub dirty: bool,
}

impl OrbitalState {
    pub fn new() -> Self {
        Self {
            credits: 50.0,
            ore: 0.0,
            alloy: 0.0,
            fuel: 0.0,
            parts: 0.0,
            buildings: [0; 5],
            throughput_level: 0,
            automation: false,
            totals: Totals::default(),
            achievements: Unlocked::default(),
            log: vec![OrbitalLogEntry {
                text: "Welcome to Orbital Works!".into(),
                is_important: true,
            }],
            dirty: false,
        }
    }

    pub fn count(&self, kind: BuildingKind) -> u32 {
        self.buildings[kind.index()]
    }

    pub fn launchpads(&self) -> u32 {
        self.count(BuildingKind::Launchpad)
    }

    pub fn level(&self, item: OrbitalItem) -> u32 {
        match item {
            OrbitalItem::Building(kind) => self.count(kind),
            OrbitalItem::Throughput => self.throughput_level,
            OrbitalItem::Automation => self.automation as u32,
        }
    }

    pub fn cost(&self, item: OrbitalItem) -> f64 {
        item.curve().cost_at(self.level(item))
    }

    /// `1 + 0.1 * level`: levels add linearly rather than compounding.
    pub fn multiplier(&self) -> f64 {
        1.0 + THROUGHPUT_STEP * self.throughput_level as f64
    }

    pub fn stock(&self, resource: Resource) -> f64 {
        match resource {
            Resource::Ore => self.ore,
            Resource::Alloy => self.alloy,
            Resource::Fuel => self.fuel,
            Resource::Parts => self.parts,
        }
    }

    pub fn stock_mut(&mut self, resource: Resource) -> &mut f64 {
        match resource {
            Resource::Ore => &mut self.ore,
            Resource::Alloy => &mut self.alloy,
            Resource::Fuel => &mut self.fuel,
            Resource::Parts => &mut self.parts,
        }
    }

    /// Credits earned from any source (exports, missions, rewards).
    pub fn earn_credits(&mut self, amount: f64) {
        self.credits += amount;
        self.totals.credits_earned += amount;
    }

    pub fn mission_fuel_cost(&self) -> f64 {
        MISSION_FUEL_BASE + MISSION_FUEL_PER_PAD * self.launchpads() as f64
    }

    pub fn mission_parts_cost(&self) -> f64 {
        MISSION_PARTS_BASE + MISSION_PARTS_PER_PAD * self.launchpads() as f64
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(OrbitalLogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > 50 {
            self.log.remove(0);
        }
    }
}

impl Default for OrbitalState {
    fn default() -> Self {
        Self::new()
    }
}

impl HasAchievements for OrbitalState {
    fn unlocked(&self) -> &Unlocked {
        &self.achievements
    }

    fn unlocked_mut(&mut self) -> &mut Unlocked {
        &mut self.achievements
    }
}

/// Achievement list, evaluated in this order.
pub static ACHIEVEMENTS: &[Achievement<OrbitalState>] = &[
    Achievement {
        id: "first_mine",
        name: "Breaking Ground",
        description: "Build your first mine (+10 credits)",
        condition: |s| s.count(BuildingKind::Mine) >= 1,
        reward: |s| s.earn_credits(10.0),
    },
    Achievement {
        id: "ore_1k",
        name: "Deep Core",
        description: "Mine 1,000 ore (+50 credits)",
        condition: |s| s.totals.ore_mined >= 1_000.0,
        reward: |s| s.earn_credits(50.0),
    },
    Achievement {
        id: "parts_100",
        name: "Assembly Line",
        description: "Build 100 parts (+250 credits)",
        condition: |s| s.totals.parts_built >= 100.0,
        reward: |s| s.earn_credits(250.0),
    },
    Achievement {
        id: "first_mission",
        name: "Liftoff",
        description: "Launch a mission (+100 fuel)",
        condition: |s| s.totals.missions_launched >= 1,
        reward: |s| s.fuel += 100.0,
    },
    Achievement {
        id: "missions_10",
        name: "Frequent Flyer",
        description: "Launch 10 missions (+1,000 credits)",
        condition: |s| s.totals.missions_launched >= 10,
        reward: |s| s.earn_credits(1_000.0),
    },
    Achievement {
        id: "credits_100k",
        name: "Space Baron",
        description: "Earn 100,000 credits (+5,000 credits)",
        condition: |s| s.totals.credits_earned >= 100_000.0,
        reward: |s| s.earn_credits(5_000.0),
    },
];
