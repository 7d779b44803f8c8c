use anyhow::Context;
use tracing::debug;

use crate::storage::{DocumentId, DocumentStore};
use crate::users::repo_types::User;

impl User {
    /// Persist the user, returning the id the store assigned.
    pub async fn create(&self, store: &dyn DocumentStore) -> anyhow::Result<DocumentId> {
        let id = store
            .insert_user(self)
            .await
            .with_context(|| format!("insert user {}", self.username))?;
        debug!(user_id = %id, username = %self.username, "user inserted");
        Ok(id)
    }
}
