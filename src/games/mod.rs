/// Game trait and game selection logic.

pub mod clicker;
pub mod orbital;

use crate::achievement::AchievementStatus;
use crate::error::SnapshotError;
use crate::storage::Storage;

/// Read-only view of one shop entry, for the render collaborator.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemView {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub level: u32,
    /// `None` once a one-shot item is sold out.
    pub cost: Option<u64>,
    pub affordable: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AchievementView {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub status: AchievementStatus,
}

/// Mission requirements and payout range, for display.
#[derive(Clone, Debug, PartialEq)]
pub struct MissionView {
    pub fuel_cost: f64,
    pub parts_cost: f64,
    pub affordable: bool,
    pub min_reward: f64,
    pub max_reward: f64,
}

/// Trait that all games implement.
///
/// Every entry point runs to completion; the driver serializes calls.
pub trait Game {
    /// Fixed identifier the snapshot is stored under.
    fn storage_key(&self) -> &'static str;

    /// Handle a semantic action id. Returns true if the id was recognized.
    fn handle_action(&mut self, action: u16) -> bool;

    /// Advance game logic by `delta_ticks` discrete ticks.
    fn tick(&mut self, delta_ticks: u32);

    /// Whether state changed in a way worth persisting now; clears the flag.
    fn take_dirty(&mut self) -> bool;

    fn save(&self, storage: &mut dyn Storage, key: &str) -> Result<(), SnapshotError>;

    /// Remove the stored snapshot, logging on failure.
    fn delete_save(&self, storage: &mut dyn Storage, key: &str);

    /// Merge a stored snapshot into the current state. Returns false when
    /// nothing usable was found.
    fn load(&mut self, storage: &mut dyn Storage, key: &str) -> bool;

    /// Restore initial values.
    fn reset(&mut self);

    fn items(&self) -> Vec<ItemView>;

    fn achievements(&self) -> Vec<AchievementView>;

    /// Current resource counters as `(id, amount)`, primary currency first.
    fn resources(&self) -> Vec<(&'static str, f64)>;

    /// The mission action, for games that have one.
    fn mission(&self) -> Option<MissionView>;
}

/// Which game the player has selected.
#[derive(Clone, Debug, PartialEq)]
pub enum GameChoice {
    Clicker,
    Orbital,
}

/// Create a game instance from a choice.
pub fn create_game(choice: &GameChoice) -> Box<dyn Game> {
    match choice {
        GameChoice::Clicker => Box::new(clicker::ClickerGame::new()),
        GameChoice::Orbital => Box::new(orbital::OrbitalGame::from_entropy()),
    }
}
