//! Semantic action IDs for Orbital Works.

// ── Core actions ────────────────────────────────────────────────
pub const LAUNCH_MISSION: u16 = 0;
pub const SAVE: u16 = 1;
pub const RESET: u16 = 2;

// ── Shop purchase (base + OrbitalItem::index) ───────────────────
pub const BUY_ITEM_BASE: u16 = 100;
