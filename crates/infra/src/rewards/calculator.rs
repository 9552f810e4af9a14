use super::distributor::distribute;
use super::tables::{elo_points, spa_points, PositionTier};
use super::types::{RewardPosition, SpecialAward, TournamentRewards};

pub const DEFAULT_MAX_PARTICIPANTS: i32 = 16;

/// Smallest field that also pays out a fourth-place tier.
pub const FOURTH_PLACE_MIN_PARTICIPANTS: i32 = 8;

/// Smallest field that also carries a "Top 8" tier.
pub const TOP_8_MIN_PARTICIPANTS: i32 = 16;

pub const FAIR_PLAY_AWARD_ID: &str = "fair_play";

/// Inputs for a reward schedule calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardsRequest {
    /// Finishing position the caller is asking about. Informational only: the
    /// schedule always covers every tier.
    pub position: String,
    pub rank: String,
    pub max_participants: i32,
    pub prize_pool: i64,
}

impl Default for RewardsRequest {
    fn default() -> Self {
        Self {
            position: String::new(),
            rank: String::new(),
            max_participants: DEFAULT_MAX_PARTICIPANTS,
            prize_pool: 0,
        }
    }
}

pub fn calculate_tournament_rewards(request: &RewardsRequest) -> TournamentRewards {
    tracing::debug!(
        position = %request.position,
        rank = %request.rank,
        "Calculating tournament rewards"
    );
    calculate(&request.rank, request.max_participants, request.prize_pool)
}

fn tier_position(
    tier: PositionTier,
    position: i32,
    name: &str,
    rank: &str,
    cash_prize: i64,
    items: &[&str],
) -> RewardPosition {
    RewardPosition {
        position,
        name: name.to_string(),
        elo_points: elo_points(tier, rank),
        spa_points: spa_points(tier, rank),
        cash_prize,
        items: items.iter().map(|item| item.to_string()).collect(),
        is_visible: true,
    }
}

fn fair_play_award() -> SpecialAward {
    SpecialAward {
        id: FAIR_PLAY_AWARD_ID.to_string(),
        name: "Fair Play".to_string(),
        description: Some("Awarded to the player showing the best sportsmanship".to_string()),
        criteria: Some("Chosen by the tournament organizers".to_string()),
        cash_prize: 0,
    }
}

/// Build the reward schedule for a tournament of `max_participants` players
/// at `rank`, splitting `prize_pool` between the top four.
///
/// Never fails: unknown ranks score 0 points and non-positive pools pay no
/// cash.
pub fn calculate(rank: &str, max_participants: i32, prize_pool: i64) -> TournamentRewards {
    let prize_pool = prize_pool.max(0);
    let cash = distribute(prize_pool);

    let mut positions = vec![
        tier_position(
            PositionTier::Champion,
            1,
            "Champion",
            rank,
            cash.champion,
            &["Champion Cup", "Gold Medal"],
        ),
        tier_position(
            PositionTier::RunnerUp,
            2,
            "Runner-up",
            rank,
            cash.runner_up,
            &["Silver Medal"],
        ),
        tier_position(
            PositionTier::ThirdPlace,
            3,
            "Third Place",
            rank,
            cash.third_place,
            &["Bronze Medal"],
        ),
    ];

    if max_participants >= FOURTH_PLACE_MIN_PARTICIPANTS {
        positions.push(tier_position(
            PositionTier::Top4,
            4,
            "Top 4",
            rank,
            cash.fourth_place,
            &[],
        ));
    }

    if max_participants >= TOP_8_MIN_PARTICIPANTS {
        // Cash only reaches the top four.
        positions.push(tier_position(PositionTier::Top8, 8, "Top 8", rank, 0, &[]));
    }

    // Keyed by field size, kept past the podium so positions stay unique.
    positions.push(tier_position(
        PositionTier::Participation,
        max_participants.max(4),
        "Participation",
        rank,
        0,
        &[],
    ));

    let special_awards = if prize_pool > 0 {
        vec![fair_play_award()]
    } else {
        Vec::new()
    };

    tracing::debug!(
        rank,
        max_participants,
        prize_pool,
        positions = positions.len(),
        "Tournament rewards calculated"
    );

    TournamentRewards {
        total_prize: prize_pool,
        show_prizes: prize_pool > 0,
        positions,
        special_awards,
    }
}
