use anyhow::Context;
use async_trait::async_trait;
use mongodb::bson::{self, doc, DateTime, Document};
use mongodb::{options::ClientOptions, Client, Database};
use serde::Serialize;
use tracing::{debug, info};

use crate::portfolios::repo_types::Portfolio;
use crate::storage::{DocumentId, DocumentStore, PORTFOLIOS, USERS};
use crate::users::repo_types::User;

/// MongoDB-backed store writing into the `users` and `portfolios` collections.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn connect(url: &str, database: &str) -> anyhow::Result<Self> {
        let options = ClientOptions::parse(url).await.context("parse mongodb url")?;
        let client = Client::with_options(options).context("build mongodb client")?;
        let db = client.database(database);
        // the driver connects lazily; fail here rather than on the first insert
        db.run_command(doc! { "ping": 1 }, None)
            .await
            .context("connect to database")?;
        info!(database, "connected to mongodb");
        Ok(Self { db })
    }

    async fn insert_document<T>(&self, collection: &str, value: &T) -> anyhow::Result<DocumentId>
    where
        T: Serialize + Sync,
    {
        let document = with_timestamps(value, DateTime::now())
            .with_context(|| format!("encode {} document", collection))?;
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document, None)
            .await
            .with_context(|| format!("insert_one into {}", collection))?;
        let id = result
            .inserted_id
            .as_object_id()
            .with_context(|| format!("{} insert returned non-ObjectId id", collection))?;
        debug!(collection, id = %id, "document inserted");
        Ok(DocumentId::Object(id))
    }
}

/// Encode `value` and add the `createdAt`/`updatedAt` pair the web backend's models carry.
fn with_timestamps<T: Serialize>(value: &T, now: DateTime) -> anyhow::Result<Document> {
    let mut document = bson::to_document(value)?;
    document.insert("createdAt", now);
    document.insert("updatedAt", now);
    Ok(document)
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_user(&self, user: &User) -> anyhow::Result<DocumentId> {
        self.insert_document(USERS, user).await
    }

    async fn insert_portfolio(&self, portfolio: &Portfolio) -> anyhow::Result<DocumentId> {
        self.insert_document(PORTFOLIOS, portfolio).await
    }
}
