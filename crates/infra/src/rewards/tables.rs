use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Finishing-position bucket used as the key into the point tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionTier {
    Champion,
    RunnerUp,
    ThirdPlace,
    Top4,
    Top8,
    Participation,
}

impl PositionTier {
    /// Best to worst.
    pub const ALL: [PositionTier; 6] = [
        PositionTier::Champion,
        PositionTier::RunnerUp,
        PositionTier::ThirdPlace,
        PositionTier::Top4,
        PositionTier::Top8,
        PositionTier::Participation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PositionTier::Champion => "champion",
            PositionTier::RunnerUp => "runner_up",
            PositionTier::ThirdPlace => "third_place",
            PositionTier::Top4 => "top_4",
            PositionTier::Top8 => "top_8",
            PositionTier::Participation => "participation",
        }
    }
}

impl fmt::Display for PositionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skill rank of a player, weakest (`K`) to strongest (`E+`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RankCode {
    #[serde(rename = "K")]
    K,
    #[serde(rename = "K+")]
    KPlus,
    #[serde(rename = "I")]
    I,
    #[serde(rename = "I+")]
    IPlus,
    #[serde(rename = "H")]
    H,
    #[serde(rename = "H+")]
    HPlus,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "G+")]
    GPlus,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "F+")]
    FPlus,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "E+")]
    EPlus,
}

impl RankCode {
    /// Weakest to strongest; also the column order of the point tables.
    pub const ALL: [RankCode; 12] = [
        RankCode::K,
        RankCode::KPlus,
        RankCode::I,
        RankCode::IPlus,
        RankCode::H,
        RankCode::HPlus,
        RankCode::G,
        RankCode::GPlus,
        RankCode::F,
        RankCode::FPlus,
        RankCode::E,
        RankCode::EPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RankCode::K => "K",
            RankCode::KPlus => "K+",
            RankCode::I => "I",
            RankCode::IPlus => "I+",
            RankCode::H => "H",
            RankCode::HPlus => "H+",
            RankCode::G => "G",
            RankCode::GPlus => "G+",
            RankCode::F => "F",
            RankCode::FPlus => "F+",
            RankCode::E => "E",
            RankCode::EPlus => "E+",
        }
    }
}

impl fmt::Display for RankCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rank code: {0:?}")]
pub struct UnknownRankCode(pub String);

impl FromStr for RankCode {
    type Err = UnknownRankCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        RankCode::ALL
            .into_iter()
            .find(|rank| rank.as_str() == code)
            .ok_or_else(|| UnknownRankCode(s.to_string()))
    }
}

// Rows follow `PositionTier::ALL`, columns follow `RankCode::ALL`.
// Each column must stay non-increasing down the tiers and each row
// non-decreasing across the ranks.
const ELO_ROWS: [[i32; 12]; 6] = [
    [100, 105, 110, 115, 120, 125, 130, 135, 140, 145, 150, 155],
    [75, 79, 83, 87, 91, 95, 99, 103, 107, 111, 115, 119],
    [50, 53, 56, 59, 62, 65, 68, 71, 74, 77, 80, 83],
    [40, 42, 44, 46, 48, 50, 52, 54, 56, 58, 60, 62],
    [25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36],
    [10, 10, 11, 11, 12, 12, 13, 13, 14, 14, 15, 15],
];

const SPA_ROWS: [[i32; 12]; 6] = [
    [900, 1000, 1100, 1200, 1300, 1400, 1500, 1600, 1700, 1800, 1900, 2000],
    [700, 775, 850, 925, 1000, 1075, 1150, 1225, 1300, 1375, 1450, 1525],
    [500, 550, 600, 650, 700, 750, 800, 850, 900, 950, 1000, 1050],
    [400, 440, 480, 520, 560, 600, 640, 680, 720, 760, 800, 840],
    [250, 275, 300, 325, 350, 375, 400, 425, 450, 475, 500, 525],
    [100, 110, 120, 130, 140, 150, 160, 170, 180, 190, 200, 210],
];

type PointsTable = HashMap<PositionTier, HashMap<RankCode, i32>>;

fn build_table(rows: &[[i32; 12]; 6]) -> PointsTable {
    PositionTier::ALL
        .into_iter()
        .zip(rows.iter())
        .map(|(tier, row)| {
            let by_rank: HashMap<RankCode, i32> =
                RankCode::ALL.into_iter().zip(row.iter().copied()).collect();
            (tier, by_rank)
        })
        .collect()
}

static ELO_TABLE: Lazy<PointsTable> = Lazy::new(|| build_table(&ELO_ROWS));
static SPA_TABLE: Lazy<PointsTable> = Lazy::new(|| build_table(&SPA_ROWS));

fn lookup(table: &PointsTable, tier: PositionTier, rank: &str) -> i32 {
    let Ok(rank) = rank.parse::<RankCode>() else {
        return 0;
    };
    table
        .get(&tier)
        .and_then(|row| row.get(&rank))
        .copied()
        .unwrap_or(0)
}

/// ELO delta for finishing in `tier` at `rank`; 0 for unknown ranks.
pub fn elo_points(tier: PositionTier, rank: &str) -> i32 {
    lookup(&ELO_TABLE, tier, rank)
}

/// SPA bonus points for finishing in `tier` at `rank`; 0 for unknown ranks.
pub fn spa_points(tier: PositionTier, rank: &str) -> i32 {
    lookup(&SPA_TABLE, tier, rank)
}

/// One row of the reward table as shown to players of a given rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierPoints {
    pub tier: PositionTier,
    pub elo_points: i32,
    pub spa_points: i32,
}

/// Points for every tier at `rank`, best tier first.
pub fn rank_points(rank: &str) -> Vec<TierPoints> {
    PositionTier::ALL
        .into_iter()
        .map(|tier| TierPoints {
            tier,
            elo_points: elo_points(tier, rank),
            spa_points: spa_points(tier, rank),
        })
        .collect()
}
