use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE_NAME: &str = "final-project";

/// Storage backend selected by the scheme of `database_url`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Mongo,
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub database_name: String,
    pub rng_seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("MONGO_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
        let database_name =
            std::env::var("MONGO_DB").unwrap_or_else(|_| DEFAULT_DATABASE_NAME.into());
        // A fixed seed replays the same usernames and emails on every run,
        // which collides with the backend's unique index on users.email.
        let rng_seed = parse_seed(std::env::var("SEEDER_RNG_SEED").ok().as_deref())?;
        Ok(Self {
            database_url,
            database_name,
            rng_seed,
        })
    }

    pub fn backend(&self) -> anyhow::Result<Backend> {
        let scheme = self
            .database_url
            .split_once("://")
            .map(|(scheme, _)| scheme)
            .with_context(|| format!("database url {:?} has no scheme", self.database_url))?;
        match scheme {
            "mongodb" | "mongodb+srv" => Ok(Backend::Mongo),
            "postgres" | "postgresql" => Ok(Backend::Postgres),
            "memory" => Ok(Backend::Memory),
            other => anyhow::bail!("unsupported database scheme {other:?}"),
        }
    }
}

fn parse_seed(raw: Option<&str>) -> anyhow::Result<Option<u64>> {
    raw.map(|v| {
        v.trim()
            .parse::<u64>()
            .with_context(|| format!("SEEDER_RNG_SEED must be an unsigned integer, got {v:?}"))
    })
    .transpose()
}
