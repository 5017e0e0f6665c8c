//! Driver glue between a `Game`, its storage and the wall clock.
//!
//! A page's frame callback calls `update(performance.now())`; buttons call
//! `handle_action`. Every call runs to completion before the next, so the
//! session owns the game exclusively.

use crate::config::SessionConfig;
use crate::error::SnapshotError;
use crate::games::{AchievementView, Game, ItemView, MissionView};
use crate::storage::Storage;
use crate::time::GameTime;

pub struct Session<G: Game, S: Storage> {
    game: G,
    storage: S,
    time: GameTime,
    config: SessionConfig,
    key: String,
    ticks_since_save: u32,
}

impl<G: Game, S: Storage> Session<G, S> {
    /// Build a session and merge any stored snapshot into the game.
    pub fn start(mut game: G, mut storage: S, config: SessionConfig) -> Self {
        let key = config.resolved_key(game.storage_key()).to_string();
        if game.load(&mut storage, &key) {
            tracing::info!(key = %key, "restored saved game");
        }
        // Loading is not a change worth writing back.
        game.take_dirty();
        let time = GameTime::new(config.ticks_per_sec, config.max_frame_ms);
        Self {
            game,
            storage,
            time,
            config,
            key,
            ticks_since_save: 0,
        }
    }

    /// Feed a wall-clock timestamp; runs one game tick per elapsed period.
    /// Returns the number of ticks run.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let ticks = self.time.update(now_ms);
        if ticks == 0 {
            return 0;
        }
        self.game.tick(ticks);

        self.ticks_since_save = self.ticks_since_save.saturating_add(ticks);
        let interval = self.config.autosave_interval_ticks;
        if interval > 0 && self.ticks_since_save >= interval {
            self.persist();
        } else if self.game.take_dirty() {
            // Automated purchases or unlocks during the tick.
            self.persist();
        }
        ticks
    }

    /// Dispatch a semantic action id; saves right away if it changed state.
    pub fn handle_action(&mut self, action: u16) -> bool {
        let handled = self.game.handle_action(action);
        if self.game.take_dirty() {
            self.persist();
        }
        handled
    }

    /// Write a snapshot now.
    pub fn save(&mut self) -> Result<(), SnapshotError> {
        self.game.save(&mut self.storage, &self.key)?;
        self.ticks_since_save = 0;
        Ok(())
    }

    /// Drop the stored snapshot and restore initial values.
    pub fn reset(&mut self) {
        self.game.delete_save(&mut self.storage, &self.key);
        self.game.reset();
        self.game.take_dirty();
        self.ticks_since_save = 0;
    }

    /// Stop counting time, e.g. while the page is hidden.
    pub fn pause(&mut self) {
        self.time.pause();
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn total_ticks(&self) -> u64 {
        self.time.total_ticks
    }

    pub fn items(&self) -> Vec<ItemView> {
        self.game.items()
    }

    pub fn achievements(&self) -> Vec<AchievementView> {
        self.game.achievements()
    }

    pub fn resources(&self) -> Vec<(&'static str, f64)> {
        self.game.resources()
    }

    pub fn mission(&self) -> Option<MissionView> {
        self.game.mission()
    }

    fn persist(&mut self) {
        self.game.take_dirty();
        if let Err(e) = self.save() {
            tracing::warn!(key = %self.key, error = %e, "autosave failed");
        }
    }
}

impl<T: Game + ?Sized> Game for Box<T> {
    fn storage_key(&self) -> &'static str {
        (**self).storage_key()
    }

    fn handle_action(&mut self, action: u16) -> bool {
        (**self).handle_action(action)
    }

    fn tick(&mut self, delta_ticks: u32) {
        (**self).tick(delta_ticks)
    }

    fn take_dirty(&mut self) -> bool {
        (**self).take_dirty()
    }

    fn save(&self, storage: &mut dyn Storage, key: &str) -> Result<(), SnapshotError> {
        (**self).save(storage, key)
    }

    fn delete_save(&self, storage: &mut dyn Storage, key: &str) {
        (**self).delete_save(storage, key)
    }

    fn load(&mut self, storage: &mut dyn Storage, key: &str) -> bool {
        (**self).load(storage, key)
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn items(&self) -> Vec<ItemView> {
        (**self).items()
    }

    fn achievements(&self) -> Vec<AchievementView> {
        (**self).achievements()
    }

    fn resources(&self) -> Vec<(&'static str, f64)> {
        (**self).resources()
    }

    fn mission(&self) -> Option<MissionView> {
        (**self).mission()
    }
}
