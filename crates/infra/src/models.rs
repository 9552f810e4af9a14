use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::rewards::{normalize_rewards, TournamentRewards};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TournamentRewardsRow {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub rank_code: Option<String>,
    pub max_participants: Option<i32>,
    pub rewards: serde_json::Value, // JSONB field
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TournamentRewardsRow {
    /// Stored document in canonical form, repaired if it was edited by hand
    /// or written by an older schema.
    pub fn rewards(&self) -> TournamentRewards {
        normalize_rewards(&self.rewards)
    }
}
