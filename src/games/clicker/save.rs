//! Neon Clicker セーブ/ロード機能。
//!
//! 保存形式は旧 Web 版 (`neon-clicker-v1`) と同じ JSON 形状を保ち、
//! 旧ページが書いたセーブもそのまま読める。スキーマのバージョンは
//! フィールドの有無で暗黙に表す: 欠けているフィールドは現在値のまま残る。
//!
//! `perClick` と `autos` は派生値なので、読み込み時は無視してレベルから再計算する。

use serde::{Deserialize, Serialize};

use super::logic;
use super::state::{ClickerState, ACHIEVEMENTS};
use crate::achievement::Unlocked;
use crate::error::SnapshotError;
use crate::storage::Storage;

/// localStorage のキー。
pub const STORAGE_KEY: &str = "neon-clicker-v1";

#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
struct UpgradeLevels {
    #[serde(skip_serializing_if = "Option::is_none")]
    click_power_level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_level: Option<u32>,
}

/// シリアライズ用のスナップショット。全フィールドが省略可能。
#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
struct Snapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
    /// 派生値。旧ページとの互換のためだけに書き出す。
    #[serde(skip_serializing_if = "Option::is_none")]
    per_click: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    autos: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    upgrades: Option<UpgradeLevels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    multiplier_bought: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_clicks: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    score_all_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    achievements: Option<Unlocked>,
}

fn extract_snapshot(state: &ClickerState) -> Snapshot {
    Snapshot {
        score: Some(state.score),
        per_click: Some(state.per_click),
        autos: Some(state.autos),
        upgrades: Some(UpgradeLevels {
            click_power_level: Some(state.click_power_level),
            auto_level: Some(state.auto_level),
        }),
        multiplier_bought: Some(state.multiplier_bought),
        total_clicks: Some(state.total_clicks),
        score_all_time: Some(state.score_all_time),
        achievements: Some(state.achievements.clone()),
    }
}

/// スナップショットをフィールド単位で state にマージし、派生値を再計算する。
fn apply_snapshot(state: &mut ClickerState, snap: &Snapshot) {
    if let Some(v) = snap.score {
        state.score = v;
    }
    if let Some(levels) = &snap.upgrades {
        if let Some(v) = levels.click_power_level {
            state.click_power_level = v;
        }
        if let Some(v) = levels.auto_level {
            state.auto_level = v;
        }
    }
    if let Some(v) = snap.multiplier_bought {
        state.multiplier_bought = v;
    }
    if let Some(v) = snap.total_clicks {
        state.total_clicks = v;
    }
    if let Some(v) = snap.score_all_time {
        state.score_all_time = v;
    }
    if let Some(unlocked) = &snap.achievements {
        let mut unlocked = unlocked.clone();
        unlocked.retain_known(ACHIEVEMENTS);
        state.achievements = unlocked;
    }

    // 旧セーブには累計が無いので、少なくとも現在のスコア分は稼いだとみなす。
    if state.score_all_time < state.score {
        state.score_all_time = state.score;
    }

    logic::sanitize(state);
    state.recompute_derived();
}

pub fn to_json(state: &ClickerState) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(&extract_snapshot(state))?)
}

/// Merge a JSON snapshot into `state`. On a parse error `state` is untouched.
pub fn merge_json(state: &mut ClickerState, json: &str) -> Result<(), SnapshotError> {
    let snap: Snapshot = serde_json::from_str(json)?;
    apply_snapshot(state, &snap);
    Ok(())
}

/// ゲーム状態をストレージに保存する。
pub fn save_game(
    storage: &mut dyn Storage,
    key: &str,
    state: &ClickerState,
) -> Result<(), SnapshotError> {
    let json = to_json(state)?;
    storage.save(key, &json)?;
    Ok(())
}

/// ストレージからゲーム状態を復元する。
/// パースエラーの場合は警告を出して壊れたデータを破棄し、現在の状態を維持する。
pub fn load_game(storage: &mut dyn Storage, key: &str, state: &mut ClickerState) -> bool {
    let json = match storage.load(key) {
        Ok(Some(j)) => j,
        Ok(None) => return false,
        Err(e) => {
            tracing::warn!(key, error = %e, "Neon Clicker: failed to read save");
            return false;
        }
    };

    if let Err(e) = merge_json(state, &json) {
        tracing::warn!(key, error = %e, "Neon Clicker: failed to load save, discarding it");
        let _ = storage.remove(key);
        return false;
    }
    true
}

/// セーブデータを削除する。
pub fn delete_save(storage: &mut dyn Storage, key: &str) {
    if let Err(e) = storage.remove(key) {
        tracing::warn!(key, error = %e, "Neon Clicker: failed to delete save");
    }
}
