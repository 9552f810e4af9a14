use async_graphql::{Enum, InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};

use infra::models::TournamentRewardsRow;
use infra::rewards;

// ── Output types ──

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum PositionTier {
    Champion,
    RunnerUp,
    ThirdPlace,
    Top4,
    Top8,
    Participation,
}

impl From<rewards::PositionTier> for PositionTier {
    fn from(tier: rewards::PositionTier) -> Self {
        match tier {
            rewards::PositionTier::Champion => PositionTier::Champion,
            rewards::PositionTier::RunnerUp => PositionTier::RunnerUp,
            rewards::PositionTier::ThirdPlace => PositionTier::ThirdPlace,
            rewards::PositionTier::Top4 => PositionTier::Top4,
            rewards::PositionTier::Top8 => PositionTier::Top8,
            rewards::PositionTier::Participation => PositionTier::Participation,
        }
    }
}

/// Reward for finishing at a given placement tier
#[derive(SimpleObject, Clone)]
pub struct RewardPosition {
    pub position: i32,
    pub name: String,
    pub elo_points: i32,
    pub spa_points: i32,
    pub cash_prize: i64,
    pub items: Vec<String>,
    pub is_visible: bool,
}

impl From<rewards::RewardPosition> for RewardPosition {
    fn from(p: rewards::RewardPosition) -> Self {
        Self {
            position: p.position,
            name: p.name,
            elo_points: p.elo_points,
            spa_points: p.spa_points,
            cash_prize: p.cash_prize,
            items: p.items,
            is_visible: p.is_visible,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct SpecialAward {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub criteria: Option<String>,
    pub cash_prize: i64,
}

impl From<rewards::SpecialAward> for SpecialAward {
    fn from(a: rewards::SpecialAward) -> Self {
        Self {
            id: a.id,
            name: a.name,
            description: a.description,
            criteria: a.criteria,
            cash_prize: a.cash_prize,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct TournamentRewards {
    pub total_prize: i64,
    pub show_prizes: bool,
    pub positions: Vec<RewardPosition>,
    pub special_awards: Vec<SpecialAward>,
}

impl From<rewards::TournamentRewards> for TournamentRewards {
    fn from(r: rewards::TournamentRewards) -> Self {
        Self {
            total_prize: r.total_prize,
            show_prizes: r.show_prizes,
            positions: r.positions.into_iter().map(Into::into).collect(),
            special_awards: r.special_awards.into_iter().map(Into::into).collect(),
        }
    }
}

/// Cash split between the top four finishers
#[derive(SimpleObject, Clone)]
pub struct PrizeDistribution {
    pub champion: i64,
    pub runner_up: i64,
    pub third_place: i64,
    pub fourth_place: i64,
    /// Sum of the four shares
    pub distributed: i64,
    /// Part of the pool left over after flooring each share
    pub remainder: i64,
}

impl PrizeDistribution {
    pub fn new(split: rewards::PrizeDistribution, total_prize: i64) -> Self {
        Self {
            champion: split.champion,
            runner_up: split.runner_up,
            third_place: split.third_place,
            fourth_place: split.fourth_place,
            distributed: split.total(),
            remainder: split.remainder(total_prize),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct TierPoints {
    pub tier: PositionTier,
    pub elo_points: i32,
    pub spa_points: i32,
}

impl From<rewards::TierPoints> for TierPoints {
    fn from(t: rewards::TierPoints) -> Self {
        Self {
            tier: t.tier.into(),
            elo_points: t.elo_points,
            spa_points: t.spa_points,
        }
    }
}

/// Reward schedule persisted for a tournament
#[derive(SimpleObject, Clone)]
pub struct StoredTournamentRewards {
    pub id: ID,
    pub tournament_id: ID,
    pub rank_code: Option<String>,
    pub max_participants: Option<i32>,
    pub rewards: TournamentRewards,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TournamentRewardsRow> for StoredTournamentRewards {
    fn from(row: TournamentRewardsRow) -> Self {
        Self {
            id: row.id.into(),
            tournament_id: row.tournament_id.into(),
            rewards: row.rewards().into(),
            rank_code: row.rank_code,
            max_participants: row.max_participants,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// ── Input types ──

#[derive(InputObject)]
pub struct GenerateTournamentRewardsInput {
    pub tournament_id: ID,
    pub rank: String,
    pub max_participants: Option<i32>,
    pub prize_pool: Option<i64>,
}
