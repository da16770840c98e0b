use anyhow::Context;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::database;
use crate::domain::{say_hello_to, UserType};
use crate::startup::AppState;
use crate::utils::InternalServerError;

#[derive(Debug, Deserialize)]
pub struct Parameters {
    #[serde(default)]
    name: String,
}

#[tracing::instrument(
    name = "Greeting a visitor",
    skip(state, params),
    fields(visitor_name = %params.name)
)]
pub async fn hello(
    State(state): State<AppState>,
    Query(params): Query<Parameters>,
) -> Result<String, InternalServerError> {
    // Anonymous visitors are greeted but never counted
    if params.name.is_empty() {
        return Ok(say_hello_to(&params.name, UserType::FirstTime));
    }

    let mut transaction = state
        .db_pool
        .begin()
        .await
        .context("Failed to acquire Postgres connection from the pool")?;

    let count = database::record_visit(&mut transaction, &params.name)
        .await
        .context("Failed to record a visit in the database")?;

    transaction
        .commit()
        .await
        .context("Failed to commit SQL transaction to record a visit")?;

    Ok(say_hello_to(&params.name, UserType::from_visit_count(count)))
}

#[tracing::instrument(
    name = "Greeting a visitor (v2)",
    skip(state, params),
    fields(visitor_name = %params.name)
)]
pub async fn hello_v2(
    State(state): State<AppState>,
    Query(params): Query<Parameters>,
) -> Result<String, InternalServerError> {
    if params.name.is_empty() {
        return Ok(say_hello_to(&params.name, UserType::FirstTime));
    }

    let user_type = database::record_visit_returning_type(&state.db_pool, &params.name).await?;

    Ok(say_hello_to(&params.name, user_type))
}
