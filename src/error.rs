//! Error taxonomy shared by both games.
//!
//! None of these are fatal. Purchase and mission errors are reported to the
//! caller with the state untouched; snapshot and storage errors are logged
//! by the loaders, which then keep the in-memory state.

use thiserror::Error;

/// A purchase was attempted without an adequate balance.
///
/// Sold-out one-shot items report `cost = f64::INFINITY`, which no balance
/// can reach.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PurchaseError {
    #[error("insufficient funds for {item}: cost {cost}, balance {balance}")]
    InsufficientFunds {
        item: &'static str,
        cost: f64,
        balance: f64,
    },
}

/// A mission launch was attempted without enough fuel or parts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MissionError {
    #[error(
        "insufficient resources for mission: fuel {fuel}/{fuel_needed}, parts {parts}/{parts_needed}"
    )]
    InsufficientResources {
        fuel_needed: f64,
        fuel: f64,
        parts_needed: f64,
        parts: f64,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("storage backend error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("snapshot storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
