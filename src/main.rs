mod config;
mod db;
mod fake_data;
mod memory;
mod portfolios;
mod postgres;
mod seeder;
mod state;
mod storage;
mod users;
mod validation;

use crate::fake_data::FakeData;
use crate::seeder::services::{seed_users_and_portfolios, DEFAULT_SEED_COUNT};
use crate::state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "portfolio_seeder=info,mongodb=warn,sqlx=warn".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    // stdout is reserved for progress lines
    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let state = AppState::init().await?;
    let mut fake = match state.config.rng_seed {
        Some(seed) => {
            tracing::info!(seed, "using fixed rng seed");
            FakeData::seeded(seed)
        }
        None => FakeData::from_entropy(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = seed_users_and_portfolios(&state, &mut fake, DEFAULT_SEED_COUNT, &mut out).await?;
    for pair in &report.pairs {
        tracing::debug!(
            user_id = %pair.user_id,
            portfolio_id = %pair.portfolio_id,
            username = %pair.username,
            title = %pair.title,
            "seeded pair"
        );
    }
    if let Some(snapshot) = state.store.snapshot() {
        tracing::info!(
            users = snapshot.users,
            portfolios = snapshot.portfolios,
            dangling = snapshot.dangling_portfolios,
            first_insert = ?snapshot.first_insert,
            last_insert = ?snapshot.last_insert,
            "dry run finished, nothing persisted"
        );
    }
    tracing::info!(
        documents = report.documents_inserted(),
        database = %state.config.database_name,
        "done"
    );

    Ok(())
}
