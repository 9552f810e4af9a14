use anyhow::{Context, Result};
use std::env;

use infra::rewards::calculator::DEFAULT_MAX_PARTICIPANTS;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub skip_migrations: bool,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub gql_introspection: bool,
    /// Field size assumed when a caller does not pass `maxParticipants`.
    pub default_max_participants: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            database_max_connections: 30,
            skip_migrations: false,
            port: 8080,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:3001".to_string(),
            ],
            gql_introspection: false,
            default_max_participants: DEFAULT_MAX_PARTICIPANTS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.database_max_connections),
            skip_migrations: env::var("SKIP_MIGRATIONS")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .context("PORT must be a valid port number")?,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or(defaults.allowed_origins),
            gql_introspection: env::var("GQL_INTROSPECTION")
                .map(|v| v == "true")
                .unwrap_or(false),
            default_max_participants: env::var("REWARDS_DEFAULT_MAX_PARTICIPANTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|n: &i32| *n > 0)
                .unwrap_or(defaults.default_max_participants),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(" https://a.example , ,https://b.example"),
            vec!["https://a.example", "https://b.example"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.default_max_participants, 16);
        assert_eq!(config.port, 8080);
        assert!(!config.gql_introspection);
    }
}
