//! Semantic action IDs for Neon Clicker.
//!
//! The driver maps its buttons/keys onto these IDs and forwards them to
//! `Game::handle_action`.

// ── Core actions ────────────────────────────────────────────────
pub const CLICK: u16 = 0;
pub const SAVE: u16 = 1;
pub const RESET: u16 = 2;

// ── Shop purchase (base + ClickerItem::index) ───────────────────
pub const BUY_ITEM_BASE: u16 = 100;
