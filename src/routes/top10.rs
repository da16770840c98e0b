use anyhow::Context;
use axum::extract::State;

use crate::database;
use crate::domain::Leaderboard;
use crate::startup::AppState;
use crate::utils::InternalServerError;

#[tracing::instrument(name = "Listing top visitors", skip(state))]
pub async fn top10(State(state): State<AppState>) -> Result<String, InternalServerError> {
    let entries = database::select_top10(&state.db_pool)
        .await
        .context("Failed to fetch top visitors from the database")?;

    Ok(Leaderboard::render(&entries))
}
