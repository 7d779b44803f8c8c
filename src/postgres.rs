use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, types::Json, PgPool};
use tracing::{debug, info};
use uuid::Uuid;

use crate::portfolios::repo_types::Portfolio;
use crate::storage::{DocumentId, DocumentStore};
use crate::users::repo_types::User;

/// Documents kept as JSONB rows, one table per collection.
#[derive(Clone)]
pub struct PgDocumentStore {
    db: PgPool,
}

impl PgDocumentStore {
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await
            .context("connect to database")?;
        sqlx::migrate!("./migrations")
            .run(&db)
            .await
            .context("run document migrations")?;
        info!("connected to postgres");
        Ok(Self { db })
    }
}

fn owner_uuid(portfolio: &Portfolio) -> anyhow::Result<Uuid> {
    match portfolio.created_by {
        DocumentId::Uuid(id) => Ok(id),
        DocumentId::Object(id) => {
            anyhow::bail!("portfolio owner {} is not a postgres user id", id.to_hex())
        }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert_user(&self, user: &User) -> anyhow::Result<DocumentId> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO users (doc)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(Json(user))
        .fetch_one(&self.db)
        .await
        .context("insert users row")?;
        debug!(user_id = %id, "user row inserted");
        Ok(DocumentId::Uuid(id))
    }

    async fn insert_portfolio(&self, portfolio: &Portfolio) -> anyhow::Result<DocumentId> {
        let created_by = owner_uuid(portfolio)?;
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO portfolios (created_by, doc)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(created_by)
        .bind(Json(portfolio))
        .fetch_one(&self.db)
        .await
        .context("insert portfolios row")?;
        debug!(portfolio_id = %id, created_by = %created_by, "portfolio row inserted");
        Ok(DocumentId::Uuid(id))
    }
}
