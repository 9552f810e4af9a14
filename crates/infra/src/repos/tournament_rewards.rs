use sqlx::{PgExecutor, Result};
use uuid::Uuid;

use crate::models::TournamentRewardsRow;
use crate::rewards::TournamentRewards;

#[derive(Debug, Clone)]
pub struct UpsertTournamentRewards {
    pub tournament_id: Uuid,
    pub rank_code: Option<String>,
    pub max_participants: Option<i32>,
    pub rewards: TournamentRewards,
}

pub async fn get_by_tournament<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
) -> Result<Option<TournamentRewardsRow>> {
    let row = sqlx::query_as::<_, TournamentRewardsRow>(
        r#"
        SELECT id, tournament_id, rank_code, max_participants, rewards, created_at, updated_at
        FROM tournament_rewards
        WHERE tournament_id = $1
        "#,
    )
    .bind(tournament_id)
    .fetch_optional(executor)
    .await?;

    Ok(row)
}

pub async fn list_recent<'e>(
    executor: impl PgExecutor<'e>,
    limit: i64,
) -> Result<Vec<TournamentRewardsRow>> {
    let rows = sqlx::query_as::<_, TournamentRewardsRow>(
        r#"
        SELECT id, tournament_id, rank_code, max_participants, rewards, created_at, updated_at
        FROM tournament_rewards
        ORDER BY updated_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(executor)
    .await?;

    Ok(rows)
}

/// Insert or replace the reward schedule of a tournament.
///
/// `rank_code` / `max_participants` left as `None` keep the stored values.
pub async fn upsert<'e>(
    executor: impl PgExecutor<'e>,
    data: UpsertTournamentRewards,
) -> Result<TournamentRewardsRow> {
    let row = sqlx::query_as::<_, TournamentRewardsRow>(
        r#"
        INSERT INTO tournament_rewards (tournament_id, rank_code, max_participants, rewards)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (tournament_id) DO UPDATE
        SET rank_code = COALESCE(EXCLUDED.rank_code, tournament_rewards.rank_code),
            max_participants = COALESCE(EXCLUDED.max_participants, tournament_rewards.max_participants),
            rewards = EXCLUDED.rewards,
            updated_at = NOW()
        RETURNING id, tournament_id, rank_code, max_participants, rewards, created_at, updated_at
        "#,
    )
    .bind(data.tournament_id)
    .bind(data.rank_code)
    .bind(data.max_participants)
    .bind(data.rewards.to_json())
    .fetch_one(executor)
    .await?;

    Ok(row)
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, tournament_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM tournament_rewards WHERE tournament_id = $1")
        .bind(tournament_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
