//! Validation and repair of reward documents that crossed a serialization
//! boundary (JSONB columns, client payloads).

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::types::{RewardPosition, SpecialAward, TournamentRewards};

pub fn create_empty_rewards() -> TournamentRewards {
    TournamentRewards::empty()
}

// ── Validation ──

fn is_optional_string(obj: &Map<String, Value>, key: &str) -> bool {
    matches!(obj.get(key), None | Some(Value::Null) | Some(Value::String(_)))
}

fn is_valid_position(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    ["position", "eloPoints", "spaPoints", "cashPrize"]
        .iter()
        .all(|key| obj.get(*key).is_some_and(Value::is_number))
        && obj.get("name").is_some_and(Value::is_string)
        && obj.get("items").is_some_and(Value::is_array)
        && obj.get("isVisible").is_some_and(Value::is_boolean)
}

fn is_valid_award(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    obj.get("id").is_some_and(Value::is_string)
        && obj.get("name").is_some_and(Value::is_string)
        && obj.get("cashPrize").is_some_and(Value::is_number)
        && is_optional_string(obj, "description")
        && is_optional_string(obj, "criteria")
}

/// Structural check of a reward document. Never panics; any deviation from
/// the canonical shape yields `false`.
pub fn validate_rewards(rewards: &Value) -> bool {
    let Some(obj) = rewards.as_object() else {
        return false;
    };

    let header_ok = obj.get("totalPrize").is_some_and(Value::is_number)
        && obj.get("showPrizes").is_some_and(Value::is_boolean);
    if !header_ok {
        return false;
    }

    let positions_ok = obj
        .get("positions")
        .and_then(Value::as_array)
        .is_some_and(|positions| positions.iter().all(is_valid_position));
    let awards_ok = obj
        .get("specialAwards")
        .and_then(Value::as_array)
        .is_some_and(|awards| awards.iter().all(is_valid_award));

    positions_ok && awards_ok
}

// ── Normalization ──

/// Best-effort integer read: numbers and numeric strings, floored.
fn read_number(value: Option<&Value>) -> Option<i64> {
    let raw = match value? {
        Value::Number(n) => match n.as_i64() {
            Some(v) => return Some(v),
            None => n.as_f64()?,
        },
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !raw.is_finite() {
        return None;
    }
    // `as` saturates at the i64 bounds.
    Some(raw.floor() as i64)
}

fn read_non_negative(value: Option<&Value>) -> i64 {
    read_number(value).unwrap_or(0).max(0)
}

fn read_points(value: Option<&Value>) -> i32 {
    read_non_negative(value).min(i64::from(i32::MAX)) as i32
}

fn read_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn normalize_position(value: &Value, index: usize) -> RewardPosition {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    let position = read_number(obj.get("position"))
        .filter(|p| *p > 0)
        .map(|p| p.min(i64::from(i32::MAX)) as i32)
        .unwrap_or(index as i32 + 1);

    let items: Vec<String> = obj
        .get("items")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    RewardPosition {
        position,
        name: read_string(obj.get("name")).unwrap_or_else(|| format!("Position {position}")),
        elo_points: read_points(obj.get("eloPoints")),
        spa_points: read_points(obj.get("spaPoints")),
        cash_prize: read_non_negative(obj.get("cashPrize")),
        items,
        is_visible: obj
            .get("isVisible")
            .and_then(Value::as_bool)
            .unwrap_or(true),
    }
}

fn normalize_award(value: &Value, index: usize, stamp: i64) -> SpecialAward {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    SpecialAward {
        id: read_string(obj.get("id")).unwrap_or_else(|| format!("award_{stamp}_{index}")),
        name: read_string(obj.get("name"))
            .unwrap_or_else(|| format!("Special Award {}", index + 1)),
        description: obj
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
        criteria: obj
            .get("criteria")
            .and_then(Value::as_str)
            .map(str::to_string),
        cash_prize: read_non_negative(obj.get("cashPrize")),
    }
}

/// Rebuild a canonical [`TournamentRewards`] from arbitrary JSON.
///
/// Missing or malformed fields fall back to safe defaults; non-object input
/// yields [`create_empty_rewards`]. The result always passes
/// [`validate_rewards`] once serialized.
pub fn normalize_rewards(raw: &Value) -> TournamentRewards {
    let Some(obj) = raw.as_object() else {
        return create_empty_rewards();
    };

    let total_prize = read_non_negative(obj.get("totalPrize"));
    let show_prizes = total_prize > 0;
    let stamp = chrono::Utc::now().timestamp_millis();

    let mut seen = HashSet::new();
    let mut positions: Vec<RewardPosition> = obj
        .get("positions")
        .and_then(Value::as_array)
        .map(|raw| {
            raw.iter()
                .enumerate()
                .map(|(i, p)| normalize_position(p, i))
                .filter(|p| seen.insert(p.position))
                .collect()
        })
        .unwrap_or_default();

    let mut special_awards: Vec<SpecialAward> = obj
        .get("specialAwards")
        .and_then(Value::as_array)
        .map(|raw| {
            raw.iter()
                .enumerate()
                .map(|(i, a)| normalize_award(a, i, stamp))
                .collect()
        })
        .unwrap_or_default();

    // Cash never exceeds the pool: each entry is capped at what is still
    // unallocated, positions first, then special awards, in document order.
    let mut unallocated = total_prize;
    let cash_fields = positions
        .iter_mut()
        .map(|p| &mut p.cash_prize)
        .chain(special_awards.iter_mut().map(|a| &mut a.cash_prize));
    for cash in cash_fields {
        *cash = (*cash).min(unallocated);
        unallocated -= *cash;
    }

    TournamentRewards {
        total_prize,
        show_prizes,
        positions,
        special_awards,
    }
}
