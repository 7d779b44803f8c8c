use std::io::Write;

use anyhow::Context;
use tracing::{error, info};

use super::dto::{SeedReport, SeededPair};
use crate::fake_data::FakeData;
use crate::portfolios::services::generate_portfolio;
use crate::state::AppState;
use crate::users::services::generate_user;
use crate::validation::{validate_portfolio, validate_user};

pub const DEFAULT_SEED_COUNT: usize = 20;

/// Insert `count` users, each followed by a portfolio that references it.
///
/// Runs strictly in order: user, then its portfolio, then the next user.
/// The first failure ends the run; documents already written stay written.
/// Progress lines go to `out`, two per iteration.
pub async fn seed_users_and_portfolios<W: Write>(
    state: &AppState,
    fake: &mut FakeData,
    count: usize,
    out: &mut W,
) -> anyhow::Result<SeedReport> {
    let store = state.store.as_ref();
    let mut report = SeedReport {
        pairs: Vec::with_capacity(count),
    };

    for i in 0..count {
        let user = generate_user(fake);
        validate_user(&user).with_context(|| format!("generated user #{}", i + 1))?;
        let user_id = user.create(store).await.map_err(|e| {
            error!(error = %e, iteration = i + 1, "user insert failed");
            e
        })?;
        writeln!(out, "User {} created!", user.username).context("write progress")?;

        let portfolio = generate_portfolio(fake, user_id);
        validate_portfolio(&portfolio)
            .with_context(|| format!("generated portfolio #{}", i + 1))?;
        let portfolio_id = portfolio.create(store).await.map_err(|e| {
            error!(error = %e, iteration = i + 1, user_id = %user_id, "portfolio insert failed");
            e
        })?;
        writeln!(
            out,
            "Portfolio '{}' created for user {}!",
            portfolio.title, user.username
        )
        .context("write progress")?;

        report.pairs.push(SeededPair {
            user_id,
            portfolio_id,
            username: user.username,
            title: portfolio.title,
        });
    }

    info!(
        users = report.pairs.len(),
        portfolios = report.pairs.len(),
        "seeding finished"
    );
    Ok(report)
}
