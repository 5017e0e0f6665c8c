/// Neon Clicker, a retro clicker with upgrades and auto clickers.

pub mod actions;
pub mod logic;
pub mod save;
pub mod state;

use crate::error::SnapshotError;
use crate::games::{AchievementView, Game, ItemView, MissionView};
use crate::storage::Storage;

use state::{ClickerItem, ClickerState};

pub struct ClickerGame {
    pub state: ClickerState,
    /// Set by the SAVE action; the session performs the write.
    save_requested: bool,
}

impl ClickerGame {
    pub fn new() -> Self {
        Self {
            state: ClickerState::new(),
            save_requested: false,
        }
    }
}

impl Default for ClickerGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for ClickerGame {
    fn storage_key(&self) -> &'static str {
        save::STORAGE_KEY
    }

    fn handle_action(&mut self, action: u16) -> bool {
        match action {
            actions::CLICK => {
                logic::click(&mut self.state);
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
                let Some(&item) = ClickerItem::all().get(idx) else {
                    return false;
                };
                if let Err(e) = logic::purchase(&mut self.state, item) {
                    tracing::debug!(error = %e, "purchase rejected");
                    self.state
                        .add_log(&format!("Not enough points for {}", item.name()), false);
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
        None
    }
}
