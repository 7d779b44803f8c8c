use anyhow::Context;
use tracing::debug;

use crate::portfolios::repo_types::Portfolio;
use crate::storage::{DocumentId, DocumentStore};

impl Portfolio {
    /// Persist the portfolio, returning the id the store assigned.
    pub async fn create(&self, store: &dyn DocumentStore) -> anyhow::Result<DocumentId> {
        let id = store
            .insert_portfolio(self)
            .await
            .with_context(|| format!("insert portfolio {:?}", self.title))?;
        debug!(portfolio_id = %id, created_by = %self.created_by, "portfolio inserted");
        Ok(id)
    }
}
