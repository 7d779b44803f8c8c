use crate::config::{AppConfig, Backend};
use crate::db::MongoStore;
use crate::memory::InMemoryStore;
use crate::postgres::PgDocumentStore;
use crate::storage::DocumentStore;
use std::sync::Arc;

/// Everything a seeding run needs: configuration and one open store.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let store = open_store(&config).await?;
        Ok(Self::from_parts(config, store))
    }

    pub fn from_parts(config: Arc<AppConfig>, store: Arc<dyn DocumentStore>) -> Self {
        Self { config, store }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            database_url: "memory://".into(),
            database_name: "test".into(),
            rng_seed: Some(42),
        });
        let store = Arc::new(InMemoryStore::new()) as Arc<dyn DocumentStore>;
        Self::from_parts(config, store)
    }
}

async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn DocumentStore>> {
    let store = match config.backend()? {
        Backend::Mongo => Arc::new(
            MongoStore::connect(&config.database_url, &config.database_name).await?,
        ) as Arc<dyn DocumentStore>,
        Backend::Postgres => {
            Arc::new(PgDocumentStore::connect(&config.database_url).await?) as Arc<dyn DocumentStore>
        }
        Backend::Memory => {
            tracing::warn!("memory:// backend selected; nothing will be persisted");
            Arc::new(InMemoryStore::new()) as Arc<dyn DocumentStore>
        }
    };
    Ok(store)
}
