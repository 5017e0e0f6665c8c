//! Orbital Works セーブ/ロード機能。
//!
//! ## 互換性方針
//!
//! 明示的なバージョン番号は持たない。全フィールドを `Option` にして
//! `#[serde(default)]` で読み、存在するフィールドだけを現在の状態へ
//! マージする。フィールド追加は後方互換、未知のキーは無視される。

use serde::{Deserialize, Serialize};

use super::logic;
use super::state::{BuildingKind, OrbitalState, Totals, ACHIEVEMENTS};
use crate::achievement::Unlocked;
use crate::error::SnapshotError;
use crate::storage::Storage;

/// localStorage のキー。
pub const STORAGE_KEY: &str = "orbital-works-v1";

#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
#[serde(default)]
struct TotalsSave {
    ore_mined: Option<f64>,
    alloy_smelted: Option<f64>,
    fuel_refined: Option<f64>,
    parts_built: Option<f64>,
    credits_earned: Option<f64>,
    missions_launched: Option<u64>,
}

/// シリアライズ用のスナップショット。ログやダーティフラグは含まない。
#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
#[serde(default)]
struct Snapshot {
    credits: Option<f64>,
    ore: Option<f64>,
    alloy: Option<f64>,
    fuel: Option<f64>,
    parts: Option<f64>,
    /// 各建物の所有数。BuildingKind::all() の順。
    buildings: Option<Vec<u32>>,
    throughput_level: Option<u32>,
    automation: Option<bool>,
    totals: Option<TotalsSave>,
    achievements: Option<Unlocked>,
}

fn extract_snapshot(state: &OrbitalState) -> Snapshot {
    let t = &state.totals;
    Snapshot {
        credits: Some(state.credits),
        ore: Some(state.ore),
        alloy: Some(state.alloy),
        fuel: Some(state.fuel),
        parts: Some(state.parts),
        buildings: Some(state.buildings.to_vec()),
        throughput_level: Some(state.throughput_level),
        automation: Some(state.automation),
        totals: Some(TotalsSave {
            ore_mined: Some(t.ore_mined),
            alloy_smelted: Some(t.alloy_smelted),
            fuel_refined: Some(t.fuel_refined),
            parts_built: Some(t.parts_built),
            credits_earned: Some(t.credits_earned),
            missions_launched: Some(t.missions_launched),
        }),
        achievements: Some(state.achievements.clone()),
    }
}

fn merge(target: &mut f64, value: Option<f64>) {
    if let Some(v) = value {
        *target = v;
    }
}

fn apply_totals(totals: &mut Totals, save: &TotalsSave) {
    merge(&mut totals.ore_mined, save.ore_mined);
    merge(&mut totals.alloy_smelted, save.alloy_smelted);
    merge(&mut totals.fuel_refined, save.fuel_refined);
    merge(&mut totals.parts_built, save.parts_built);
    merge(&mut totals.credits_earned, save.credits_earned);
    if let Some(v) = save.missions_launched {
        totals.missions_launched = v;
    }
}

/// スナップショットをフィールド単位で state にマージする。
/// 建物数の配列が短い/長い場合は、存在するインデックスだけを使う。
fn apply_snapshot(state: &mut OrbitalState, snap: &Snapshot) {
    merge(&mut state.credits, snap.credits);
    merge(&mut state.ore, snap.ore);
    merge(&mut state.alloy, snap.alloy);
    merge(&mut state.fuel, snap.fuel);
    merge(&mut state.parts, snap.parts);

    if let Some(counts) = &snap.buildings {
        for (i, &count) in counts.iter().enumerate().take(BuildingKind::all().len()) {
            state.buildings[i] = count;
        }
    }
    if let Some(v) = snap.throughput_level {
        state.throughput_level = v;
    }
    if let Some(v) = snap.automation {
        state.automation = v;
    }
    if let Some(t) = &snap.totals {
        apply_totals(&mut state.totals, t);
    }
    if let Some(unlocked) = &snap.achievements {
        let mut unlocked = unlocked.clone();
        unlocked.retain_known(ACHIEVEMENTS);
        state.achievements = unlocked;
    }

    logic::sanitize(state);
}

pub fn to_json(state: &OrbitalState) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(&extract_snapshot(state))?)
}

/// Merge a JSON snapshot into `state`. On a parse error `state` is untouched.
pub fn merge_json(state: &mut OrbitalState, json: &str) -> Result<(), SnapshotError> {
    let snap: Snapshot = serde_json::from_str(json)?;
    apply_snapshot(state, &snap);
    Ok(())
}

/// ゲーム状態をストレージに保存する。
pub fn save_game(
    storage: &mut dyn Storage,
    key: &str,
    state: &OrbitalState,
) -> Result<(), SnapshotError> {
    let json = to_json(state)?;
    storage.save(key, &json)?;
    Ok(())
}

/// ストレージからゲーム状態を復元する。
/// パースエラーの場合は警告を出して壊れたデータを破棄し、現在の状態を維持する。
pub fn load_game(storage: &mut dyn Storage, key: &str, state: &mut OrbitalState) -> bool {
    let json = match storage.load(key) {
        Ok(Some(j)) => j,
        Ok(None) => return false,
        Err(e) => {
            tracing::warn!(key, error = %e, "Orbital Works: failed to read save");
            return false;
        }
    };

    if let Err(e) = merge_json(state, &json) {
        tracing::warn!(key, error = %e, "Orbital Works: failed to load save, discarding it");
        let _ = storage.remove(key);
        return false;
    }
    true
}

/// セーブデータを削除する。
pub fn delete_save(storage: &mut dyn Storage, key: &str) {
    if let Err(e) = storage.remove(key) {
        tracing::warn!(key, error = %e, "Orbital Works: failed to delete save");
    }
}
