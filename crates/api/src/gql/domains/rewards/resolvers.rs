use async_graphql::{Context, Json, Object, Result, ID};
use serde_json::Value;
use uuid::Uuid;

use crate::gql::error::{GqlError, ResultExt};
use crate::state::AppState;
use infra::repos::tournament_rewards;
use infra::rewards::{self as engine, RewardsRequest};

use super::service::{self, GenerateRewardsParams};
use super::types::{
    GenerateTournamentRewardsInput, PrizeDistribution, StoredTournamentRewards, TierPoints,
    TournamentRewards,
};

fn json_or_null(value: Option<Json<Value>>) -> Value {
    value.map(|Json(v)| v).unwrap_or(Value::Null)
}

fn parse_tournament_id(id: &ID) -> Result<Uuid> {
    Uuid::parse_str(id.as_str()).gql_err("Invalid tournament ID")
}

#[derive(Default)]
pub struct RewardsQuery;

#[Object]
impl RewardsQuery {
    /// Reward schedule (points, cash and special awards) for a tournament
    async fn calculate_tournament_rewards(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] position: String,
        rank: String,
        #[graphql(
            desc = "Field size; defaults to REWARDS_DEFAULT_MAX_PARTICIPANTS (16 unless configured)"
        )]
        max_participants: Option<i32>,
        #[graphql(default)] prize_pool: i64,
    ) -> Result<TournamentRewards> {
        let state = ctx.data::<AppState>()?;

        let request = RewardsRequest {
            position,
            rank,
            max_participants: max_participants.unwrap_or(state.config().default_max_participants),
            prize_pool,
        };

        Ok(engine::calculate_tournament_rewards(&request).into())
    }

    /// Whether a reward document has the canonical shape
    async fn validate_rewards(&self, rewards: Option<Json<Value>>) -> bool {
        engine::validate_rewards(&json_or_null(rewards))
    }

    /// Repair a reward document into canonical form
    async fn normalize_rewards(&self, rewards: Option<Json<Value>>) -> TournamentRewards {
        engine::normalize_rewards(&json_or_null(rewards)).into()
    }

    /// The "no rewards configured" schedule
    async fn empty_rewards(&self) -> TournamentRewards {
        engine::create_empty_rewards().into()
    }

    /// 50/30/15/5 cash split of a prize pool
    async fn prize_distribution(&self, total_prize: i64) -> PrizeDistribution {
        PrizeDistribution::new(engine::distribute(total_prize), total_prize)
    }

    /// ELO and SPA points per tier for players of the given rank
    async fn rank_reward_table(&self, rank: String) -> Vec<TierPoints> {
        engine::rank_points(&rank)
            .into_iter()
            .map(Into::into)
            .collect()
    }

    async fn tournament_rewards(
        &self,
        ctx: &Context<'_>,
        tournament_id: ID,
    ) -> Result<Option<StoredTournamentRewards>> {
        let state = ctx.data::<AppState>()?;
        let tournament_id = parse_tournament_id(&tournament_id)?;

        let row = tournament_rewards::get_by_tournament(&state.db, tournament_id)
            .await
            .map_err(GqlError::from)?;

        Ok(row.map(Into::into))
    }

    async fn recent_tournament_rewards(
        &self,
        ctx: &Context<'_>,
        limit: Option<i64>,
    ) -> Result<Vec<StoredTournamentRewards>> {
        let state = ctx.data::<AppState>()?;
        let limit = limit.unwrap_or(20).clamp(1, 100);

        let rows = tournament_rewards::list_recent(&state.db, limit)
            .await
            .map_err(GqlError::from)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[derive(Default)]
pub struct RewardsMutation;

#[Object]
impl RewardsMutation {
    /// Calculate a tournament's reward schedule and store it
    async fn generate_tournament_rewards(
        &self,
        ctx: &Context<'_>,
        input: GenerateTournamentRewardsInput,
    ) -> Result<StoredTournamentRewards> {
        let state = ctx.data::<AppState>()?;
        let tournament_id = parse_tournament_id(&input.tournament_id)?;

        let max_participants = input
            .max_participants
            .unwrap_or(state.config().default_max_participants);
        if max_participants <= 0 {
            return Err(GqlError::new("maxParticipants must be positive").into());
        }

        let row = service::generate_and_store(
            &state.db,
            GenerateRewardsParams {
                tournament_id,
                rank: input.rank,
                max_participants,
                prize_pool: input.prize_pool.unwrap_or(0),
            },
        )
        .await
        .map_err(GqlError::from)?;

        Ok(row.into())
    }

    /// Store an arbitrary reward document after normalizing it
    async fn save_tournament_rewards(
        &self,
        ctx: &Context<'_>,
        tournament_id: ID,
        rewards: Json<Value>,
    ) -> Result<StoredTournamentRewards> {
        let state = ctx.data::<AppState>()?;
        let tournament_id = parse_tournament_id(&tournament_id)?;

        let row = service::save_normalized(&state.db, tournament_id, &rewards.0)
            .await
            .map_err(GqlError::from)?;

        Ok(row.into())
    }

    async fn delete_tournament_rewards(&self, ctx: &Context<'_>, tournament_id: ID) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        let tournament_id = parse_tournament_id(&tournament_id)?;

        let deleted = tournament_rewards::delete(&state.db, tournament_id)
            .await
            .map_err(GqlError::from)?;

        Ok(deleted)
    }
}
