use serde_json::Value;
use uuid::Uuid;

use infra::models::TournamentRewardsRow;
use infra::repos::{tournament_rewards, UpsertTournamentRewards};
use infra::rewards::{self, RewardsRequest};

/// Parameters for generating and storing a tournament's reward schedule.
pub struct GenerateRewardsParams {
    pub tournament_id: Uuid,
    pub rank: String,
    pub max_participants: i32,
    pub prize_pool: i64,
}

/// Calculate the reward schedule for a tournament and store it, replacing any
/// previous schedule.
pub async fn generate_and_store(
    pool: &sqlx::PgPool,
    params: GenerateRewardsParams,
) -> Result<TournamentRewardsRow, sqlx::Error> {
    let request = RewardsRequest {
        rank: params.rank,
        max_participants: params.max_participants,
        prize_pool: params.prize_pool,
        ..Default::default()
    };
    let schedule = rewards::calculate_tournament_rewards(&request);

    let row = tournament_rewards::upsert(
        pool,
        UpsertTournamentRewards {
            tournament_id: params.tournament_id,
            rank_code: Some(request.rank),
            max_participants: Some(request.max_participants),
            rewards: schedule,
        },
    )
    .await?;

    tracing::info!(
        tournament_id = %params.tournament_id,
        max_participants = request.max_participants,
        prize_pool = request.prize_pool,
        "Tournament rewards generated"
    );

    Ok(row)
}

/// Store a client-supplied reward document in canonical form.
///
/// Documents failing validation are repaired field by field rather than
/// rejected.
pub async fn save_normalized(
    pool: &sqlx::PgPool,
    tournament_id: Uuid,
    raw: &Value,
) -> Result<TournamentRewardsRow, sqlx::Error> {
    if !rewards::validate_rewards(raw) {
        tracing::warn!(
            tournament_id = %tournament_id,
            "Reward document failed validation; storing normalized copy"
        );
    }

    // `None` keeps the rank and field size already stored for the tournament.
    tournament_rewards::upsert(
        pool,
        UpsertTournamentRewards {
            tournament_id,
            rank_code: None,
            max_participants: None,
            rewards: rewards::normalize_rewards(raw),
        },
    )
    .await
}
