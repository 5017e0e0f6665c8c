//! Incremental "clicker" games as a UI-less library.
//!
//! Each game keeps its rules in `state.rs` / `logic.rs` and its persistence in
//! `save.rs`. A page drives a [`Session`] with frame timestamps and action ids.

pub mod achievement;
pub mod config;
pub mod economy;
pub mod error;
pub mod games;
pub mod rng;
pub mod session;
pub mod storage;
pub mod time;

pub use config::SessionConfig;
pub use error::{ConfigError, MissionError, PurchaseError, SnapshotError, StorageError};
pub use games::{create_game, AchievementView, Game, GameChoice, ItemView, MissionView};
pub use session::Session;
pub use storage::{MemoryStorage, Storage};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
