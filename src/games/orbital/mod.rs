/// Orbital Works: mine ore, build rocket parts, launch missions.

pub mod actions;
pub mod logic;
pub mod save;
pub mod state;

mod simulator;

use crate::error::SnapshotError;
use crate::games::{AchievementView, Game, ItemView, MissionView};
use crate::rng::{RandomSource, SeededRng};
use crate::storage::Storage;

use state::{OrbitalItem, OrbitalState};

pub struct OrbitalGame {
    pub state: OrbitalState,
    rng: Box<dyn RandomSource>,
    save_requested: bool,
}

impl OrbitalGame {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            state: OrbitalState::new(),
            rng,
            save_requested: false,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(Box::new(SeededRng::new(seed)))
    }

    pub fn from_entropy() -> Self {
        Self::new(Box::new(SeededRng::from_entropy()))
    }
}

impl Game for OrbitalGame {
    fn storage_key(&self) -> &'static str {
        save::STORAGE_KEY
    }

    fn handle_action(&mut self, action: u16) -> bool {
        match action {
            actions::LAUNCH_MISSION => {
                if let Err(e) = logic::launch_mission(&mut self.state, self.rng.as_mut()) {
                    tracing::debug!(error = %e, "mission rejected");
                    self.state.add_log("Not enough fuel or parts for a mission", false);
                }
                true
            }
            actions::SAVE => {
                self.save_requested = true;
                self.state.add_log("Saved", false);
                true
            }
            actions::RESET => {
                self.reset();
                // Overwrite the stored snapshot with the fresh state.
                self.save_requested = true;
                true
            }
            id if id >= actions::BUY_ITEM_BASE => {
                let idx = (id - actions::BUY_ITEM_BASE) as usize;
                let Some(&item) = OrbitalItem::all().get(idx) else {
                    return false;
                };
                if let Err(e) = logic::purchase(&mut self.state, item) {
                    tracing::debug!(error = %e, "purchase rejected");
                    self.state
                        .add_log(&format!("Not enough credits for {}", item.name()), false);
                }
                true
            }
            _ => false,
        }
    }

    fn tick(&mut self, delta_ticks: u32) {
        for _ in 0..delta_ticks {
            logic::tick(&mut self.state);
        }
    }

    fn take_dirty(&mut self) -> bool {
        let dirty = self.state.dirty || self.save_requested;
        self.state.dirty = false;
        self.save_requested = false;
        dirty
    }

    fn save(&self, storage: &mut dyn Storage, key: &str) -> Result<(), SnapshotError> {
        save::save_game(storage, key, &self.state)
    }

    fn delete_save(&self, storage: &mut dyn Storage, key: &str) {
        save::delete_save(storage, key);
    }

    fn load(&mut self, storage: &mut dyn Storage, key: &str) -> bool {
        save::load_game(storage, key, &mut self.state)
    }

    fn reset(&mut self) {
        logic::reset(&mut self.state);
    }

    fn items(&self) -> Vec<ItemView> {
        logic::item_views(&self.state)
    }

    fn achievements(&self) -> Vec<AchievementView> {
        logic::achievement_views(&self.state)
    }

    fn resources(&self) -> Vec<(&'static str, f64)> {
        logic::resource_views(&self.state)
    }

    fn mission(&self) -> Option<MissionView> {
        Some(logic::mission_view(&self.state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedRoll;
    use state::BuildingKind;

    fn buy_action(item: OrbitalItem) -> u16 {
        actions::BUY_ITEM_BASE + item.index() as u16
    }

    #[test]
    fn buy_mine_via_action() {
        let mut game = OrbitalGame::with_seed(1);
        assert!(game.handle_action(buy_action(OrbitalItem::Building(BuildingKind::Mine))));
        assert_eq!(game.state.count(BuildingKind::Mine), 1);
        assert!(game.take_dirty());
    }

    #[test]
    fn mission_via_action_uses_injected_rng() {
        let mut game = OrbitalGame::new(Box::new(FixedRoll(0.0)));
        game.state.fuel = 100.0;
        game.state.parts = 10.0;
        game.state.credits = 0.0;
        game.handle_action(actions::LAUNCH_MISSION);
        // 200 payout; the first-mission reward is fuel, not credits.
        assert_eq!(game.state.credits, 200.0);
        assert_eq!(game.state.totals.missions_launched, 1);
    }

    #[test]
    fn rejected_mission_logs_and_stays_clean() {
        let mut game = OrbitalGame::with_seed(1);
        let logs_before = game.state.log.len();
        assert!(game.handle_action(actions::LAUNCH_MISSION));
        assert_eq!(game.state.log.len(), logs_before + 1);
        assert!(!game.take_dirty());
    }

    #[test]
    fn tick_runs_each_period() {
        let mut game = OrbitalGame::with_seed(1);
        game.state.buildings[BuildingKind::Mine.index()] = 3;
        game.tick(4);
        assert_eq!(game.state.ore, 12.0);
    }

    #[test]
    fn unknown_action_not_consumed() {
        let mut game = OrbitalGame::with_seed(1);
        assert!(!game.handle_action(buy_action(OrbitalItem::Automation) + 1));
        assert!(!game.handle_action(42));
    }

    #[test]
    fn reset_via_action() {
        let mut game = OrbitalGame::with_seed(1);
        game.state.credits = 1e6;
        game.handle_action(actions::RESET);
        assert_eq!(game.state.credits, 50.0);
        assert!(game.take_dirty());
    }
}
