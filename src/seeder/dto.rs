use crate::storage::DocumentId;

/// One iteration's output: a user and the portfolio that references it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeededPair {
    pub user_id: DocumentId,
    pub portfolio_id: DocumentId,
    pub username: String,
    pub title: String,
}

/// Pairs in the order they were inserted.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub pairs: Vec<SeededPair>,
}

impl SeedReport {
    /// Documents written during the run, users and portfolios together.
    pub fn documents_inserted(&self) -> usize {
        self.pairs.len() * 2
    }
}
