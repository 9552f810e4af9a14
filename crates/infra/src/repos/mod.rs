pub mod tournament_rewards;

pub use tournament_rewards::UpsertTournamentRewards;
