use serde::{Deserialize, Serialize};

/// Reward granted for finishing at a given placement tier.
///
/// `position` is the placement itself for the podium, or the tier ceiling for
/// bucketed tiers (e.g. "Top 8" is stored as position 8).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardPosition {
    pub position: i32,
    pub name: String,
    pub elo_points: i32,
    pub spa_points: i32,
    pub cash_prize: i64,
    pub items: Vec<String>,
    pub is_visible: bool,
}

/// Discretionary award not tied to a finishing position (e.g. "Fair Play").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialAward {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<String>,
    pub cash_prize: i64,
}

/// Full reward schedule for a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRewards {
    pub total_prize: i64,
    pub show_prizes: bool,
    pub positions: Vec<RewardPosition>,
    pub special_awards: Vec<SpecialAward>,
}

impl TournamentRewards {
    /// The "no rewards configured" value: zero pool, nothing shown.
    pub fn empty() -> Self {
        Self {
            total_prize: 0,
            show_prizes: false,
            positions: Vec::new(),
            special_awards: Vec::new(),
        }
    }

    pub fn position(&self, position: i32) -> Option<&RewardPosition> {
        self.positions.iter().find(|p| p.position == position)
    }

    /// Sum of every cash prize in the schedule, special awards included.
    pub fn total_cash_awarded(&self) -> i64 {
        let positions: i64 = self.positions.iter().map(|p| p.cash_prize).sum();
        let awards: i64 = self.special_awards.iter().map(|a| a.cash_prize).sum();
        positions + awards
    }

    pub fn to_json(&self) -> serde_json::Value {
        // Plain structs with string keys; serialization cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Default for TournamentRewards {
    fn default() -> Self {
        Self::empty()
    }
}
