use std::fmt;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::portfolios::repo_types::Portfolio;
use crate::users::repo_types::User;

pub const USERS: &str = "users";
pub const PORTFOLIOS: &str = "portfolios";

/// Identifier assigned by the storage backend on insert.
///
/// Serialised untagged so that a portfolio's `createdBy` lands in the
/// database as the backend's native id type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum DocumentId {
    Object(ObjectId),
    Uuid(Uuid),
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentId::Object(id) => write!(f, "{}", id.to_hex()),
            DocumentId::Uuid(id) => write!(f, "{}", id),
        }
    }
}

/// What a store holding its documents in-process can report after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub users: usize,
    pub portfolios: usize,
    /// Portfolios whose `createdBy` matches no stored user.
    pub dangling_portfolios: usize,
    pub first_insert: Option<OffsetDateTime>,
    pub last_insert: Option<OffsetDateTime>,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document into `users`, returning its id.
    async fn insert_user(&self, user: &User) -> anyhow::Result<DocumentId>;
    /// Insert one document into `portfolios`, returning its id.
    async fn insert_portfolio(&self, portfolio: &Portfolio) -> anyhow::Result<DocumentId>;

    /// `None` for stores backed by an external database.
    fn snapshot(&self) -> Option<StoreSnapshot> {
        None
    }
}
