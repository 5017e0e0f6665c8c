//! Threshold achievements, evaluated in a fixed list order.
//!
//! Rewards are applied the moment an achievement unlocks, so a later entry
//! in the same pass sees the resources granted by an earlier one. The list
//! order is therefore part of the game's behaviour.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Static definition of one achievement over game state `S`.
pub struct Achievement<S> {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub condition: fn(&S) -> bool,
    pub reward: fn(&mut S),
}

/// Display status for the render collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AchievementStatus {
    Locked,
    /// Condition holds but the next evaluation has not run yet.
    Ready,
    Unlocked,
}

/// Ids of unlocked achievements. Entries are only added, except on reset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unlocked(BTreeMap<String, bool>);

impl Unlocked {
    pub fn contains(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    pub fn insert(&mut self, id: &str) {
        self.0.insert(id.to_string(), true);
    }

    pub fn len(&self) -> usize {
        self.0.values().filter(|v| **v).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep only ids that exist in `defs`; unknown keys from a snapshot are dropped.
    pub fn retain_known<S>(&mut self, defs: &[Achievement<S>]) {
        self.0.retain(|id, unlocked| *unlocked && defs.iter().any(|d| d.id == id));
    }
}

/// Projection from a game state onto its unlocked set.
pub trait HasAchievements {
    fn unlocked(&self) -> &Unlocked;
    fn unlocked_mut(&mut self) -> &mut Unlocked;
}

/// Evaluate every locked achievement in order, unlocking and rewarding the
/// ones whose condition now holds. Returns the definitions unlocked in this
/// pass, in order. Already-unlocked entries are skipped, so calling this
/// twice never pays a reward twice.
pub fn evaluate<S: HasAchievements + 'static>(
    state: &mut S,
    defs: &'static [Achievement<S>],
) -> Vec<&'static Achievement<S>> {
    let mut newly = Vec::new();
    for def in defs {
        if state.unlocked().contains(def.id) {
            continue;
        }
        if (def.condition)(state) {
            state.unlocked_mut().insert(def.id);
            (def.reward)(state);
            tracing::debug!(achievement = def.id, "achievement unlocked");
            newly.push(def);
        }
    }
    newly
}

pub fn status<S: HasAchievements>(state: &S, def: &Achievement<S>) -> AchievementStatus {
    if state.unlocked().contains(def.id) {
        AchievementStatus::Unlocked
    } else if (def.condition)(state) {
        AchievementStatus::Ready
    } else {
        AchievementStatus::Locked
    }
}
