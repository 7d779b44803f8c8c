use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use time::OffsetDateTime;
use tracing::debug;

use crate::portfolios::repo_types::Portfolio;
use crate::storage::{DocumentId, DocumentStore, StoreSnapshot, PORTFOLIOS, USERS};
use crate::users::repo_types::User;

/// A document held by [`InMemoryStore`] together with its assigned id.
#[derive(Debug, Clone)]
pub struct Stored<T> {
    pub id: DocumentId,
    pub created_at: OffsetDateTime,
    pub doc: T,
}

#[derive(Default)]
struct Collections {
    users: Vec<Stored<User>>,
    portfolios: Vec<Stored<Portfolio>>,
}

/// Process-local store. Backs `memory://` dry runs and tests.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Collections>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        // plain Vec pushes cannot leave the data half-written
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Users in insertion order.
    #[cfg(test)]
    pub fn users(&self) -> Vec<Stored<User>> {
        self.lock().users.clone()
    }

    /// Portfolios in insertion order.
    #[cfg(test)]
    pub fn portfolios(&self) -> Vec<Stored<Portfolio>> {
        self.lock().portfolios.clone()
    }
}

fn stamp<T>(doc: &T) -> Stored<T>
where
    T: Clone,
{
    Stored {
        id: DocumentId::Object(ObjectId::new()),
        created_at: OffsetDateTime::now_utc(),
        doc: doc.clone(),
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn insert_user(&self, user: &User) -> anyhow::Result<DocumentId> {
        let stored = stamp(user);
        let id = stored.id;
        self.lock().users.push(stored);
        debug!(collection = USERS, %id, "stored in memory");
        Ok(id)
    }

    async fn insert_portfolio(&self, portfolio: &Portfolio) -> anyhow::Result<DocumentId> {
        let stored = stamp(portfolio);
        let id = stored.id;
        self.lock().portfolios.push(stored);
        debug!(collection = PORTFOLIOS, %id, "stored in memory");
        Ok(id)
    }

    fn snapshot(&self) -> Option<StoreSnapshot> {
        let c = self.lock();
        let user_ids: HashSet<DocumentId> = c.users.iter().map(|u| u.id).collect();
        let dangling_portfolios = c
            .portfolios
            .iter()
            .filter(|p| !user_ids.contains(&p.doc.created_by))
            .count();
        let stamps = c
            .users
            .iter()
            .map(|s| s.created_at)
            .chain(c.portfolios.iter().map(|s| s.created_at));
        Some(StoreSnapshot {
            users: c.users.len(),
            portfolios: c.portfolios.len(),
            dangling_portfolios,
            first_insert: stamps.clone().min(),
            last_insert: stamps.max(),
        })
    }
}

#[cfg(test)]
mod memory_tests {
    use super::*;
    use crate::fake_data::FakeData;
    use crate::portfolios::services::generate_portfolio;
    use crate::users::services::generate_user;

    #[tokio::test]
    async fn assigns_distinct_ids_and_keeps_order() {
        let store = InMemoryStore::new();
        let mut fake = FakeData::seeded(21);
        assert_eq!(store.snapshot().unwrap().users, 0);

        let first = generate_user(&mut fake);
        let second = generate_user(&mut fake);
        let a = store.insert_user(&first).await.unwrap();
        let b = store.insert_user(&second).await.unwrap();
        assert_ne!(a, b);

        let users = store.users();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, a);
        assert_eq!(users[0].doc, first);
        assert_eq!(users[1].doc, second);

        let portfolio = generate_portfolio(&mut fake, a);
        store.insert_portfolio(&portfolio).await.unwrap();
        assert_eq!(store.portfolios()[0].doc.created_by, a);

        let snapshot = store.snapshot().unwrap();
        assert_eq!((snapshot.users, snapshot.portfolios), (2, 1));
        assert_eq!(snapshot.dangling_portfolios, 0);
    }

    #[tokio::test]
    async fn timestamps_follow_insertion_order() {
        let store = InMemoryStore::new();
        let mut fake = FakeData::seeded(22);
        for _ in 0..5 {
            let id = store.insert_user(&generate_user(&mut fake)).await.unwrap();
            store
                .insert_portfolio(&generate_portfolio(&mut fake, id))
                .await
                .unwrap();
        }

        let users = store.users();
        let portfolios = store.portfolios();
        let mut stamps = Vec::new();
        for (user, portfolio) in users.iter().zip(&portfolios) {
            stamps.push(user.created_at);
            stamps.push(portfolio.created_at);
        }
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]), "{stamps:?}");

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.first_insert, Some(users[0].created_at));
        assert_eq!(snapshot.last_insert, Some(portfolios[4].created_at));
    }

    #[tokio::test]
    async fn snapshot_counts_portfolios_without_owner() {
        let store = InMemoryStore::new();
        let mut fake = FakeData::seeded(23);
        assert_eq!(store.snapshot().unwrap().first_insert, None);

        let orphan = generate_portfolio(&mut fake, DocumentId::Object(ObjectId::new()));
        store.insert_portfolio(&orphan).await.unwrap();

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.users, 0);
        assert_eq!(snapshot.dangling_portfolios, 1);
    }
}
