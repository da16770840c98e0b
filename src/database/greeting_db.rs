use anyhow::Context;
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::{Leaderboard, LeaderboardEntry, UserType};

#[tracing::instrument(name = "Record a visit", skip(transaction))]
pub async fn record_visit(
    transaction: &mut Transaction<'_, Postgres>,
    name: &str,
) -> Result<i32, sqlx::Error> {
    let count = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO hello_schema.users(name, count) VALUES ($1, 1)
        ON CONFLICT (name)
        DO UPDATE SET count = users.count + 1
        RETURNING users.count
        "#,
    )
    .bind(name)
    .fetch_one(&mut **transaction)
    .await?;

    Ok(count)
}

/// Same upsert as [`record_visit`], but the user type is decided by the
/// database in a single statement.
#[tracing::instrument(name = "Record a visit returning user type", skip(db_pool))]
pub async fn record_visit_returning_type(
    db_pool: &PgPool,
    name: &str,
) -> Result<UserType, anyhow::Error> {
    let user_type = sqlx::query_scalar::<_, String>(
        r#"
        INSERT INTO hello_schema.users(name, count) VALUES ($1, 1)
        ON CONFLICT (name)
        DO UPDATE SET count = users.count + 1
        RETURNING CASE
            WHEN users.count > 1 THEN 'known'
            ELSE 'first_time'
        END AS user_type
        "#,
    )
    .bind(name)
    .fetch_one(db_pool)
    .await
    .context("Failed to perform a query to record a visit")?;

    user_type
        .parse::<UserType>()
        .with_context(|| format!("Unexpected user type `{}` returned", user_type))
}

#[tracing::instrument(name = "Select top visitors", skip(db_pool))]
pub async fn select_top10(db_pool: &PgPool) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
    sqlx::query_as::<_, LeaderboardEntry>(
        r#"
        SELECT name, count
        FROM hello_schema.users
        ORDER BY count DESC, name COLLATE "C" ASC
        LIMIT $1
        "#,
    )
    .bind(Leaderboard::LIMIT)
    .fetch_all(db_pool)
    .await
}
