//! Tournament reward engine: ELO / SPA point tables, cash prize splitting,
//! reward schedule generation and normalization of stored reward documents.
//!
//! Everything in here is pure and synchronous. Persistence of the produced
//! schedules lives in [`crate::repos::tournament_rewards`].

pub mod calculator;
pub mod distributor;
pub mod normalize;
pub mod tables;
pub mod types;

pub use calculator::{calculate, calculate_tournament_rewards, RewardsRequest};
pub use distributor::{distribute, PrizeDistribution};
pub use normalize::{create_empty_rewards, normalize_rewards, validate_rewards};
pub use tables::{elo_points, rank_points, spa_points, PositionTier, RankCode, TierPoints};
pub use types::{RewardPosition, SpecialAward, TournamentRewards};
