use axum::http::StatusCode;
use sqlx::PgPool;

use crate::helpers;

#[sqlx::test]
async fn top10_is_empty_without_visits(pool: PgPool) {
    // Arrange
    let test_app = helpers::TestApp::setup(pool).await;

    // Act
    let response = test_app.get_top10().await;

    // Assert
    response.assert_status_ok();
    response.assert_text("");
}

#[sqlx::test]
async fn top10_orders_by_count_then_name(pool: PgPool) {
    // Arrange
    let test_app = helpers::TestApp::setup(pool).await;
    test_app.get_top10().await.assert_text("");

    for n in ["world", "earth", "universe", "userver"] {
        test_app
            .greet_and_expect(n, &format!("Hello, {}!\n", n))
            .await;
    }
    test_app.post_hello("userver").await.assert_status_ok();

    // Act
    let response = test_app.get_top10().await;

    // Assert
    response.assert_status_ok();
    response.assert_text("userver 2\nearth 1\nuniverse 1\nworld 1\n");
}

#[sqlx::test]
async fn top10_is_limited_to_ten_entries(pool: PgPool) {
    // Arrange
    let test_app = helpers::TestApp::setup(pool).await;
    // visitor-00 gets 12 visits, visitor-11 gets one
    for i in 0..12 {
        let name = format!("visitor-{:02}", i);
        for _ in 0..(12 - i) {
            test_app.post_hello(&name).await.assert_status_ok();
        }
    }

    // Act
    let response = test_app.get_top10().await;

    // Assert
    response.assert_status_ok();
    let expected: String = (0..10)
        .map(|i| format!("visitor-{:02} {}\n", i, 12 - i))
        .collect();
    response.assert_text(expected);
}

#[sqlx::test]
async fn top10_breaks_ties_by_byte_order_of_names(pool: PgPool) {
    // Arrange
    let test_app = helpers::TestApp::setup(pool).await;
    for n in ["bob", "Alice", "alice", "Bob", "_bob"] {
        test_app.post_hello(n).await.assert_status_ok();
    }
    test_app.post_hello("zed").await.assert_status_ok();
    test_app.post_hello("zed").await.assert_status_ok();

    // Act
    let response = test_app.get_top10().await;

    // Assert
    response.assert_status_ok();
    response.assert_text("zed 2\nAlice 1\nBob 1\n_bob 1\nalice 1\nbob 1\n");
}

#[sqlx::test(fixtures("initial_data"))]
async fn top10_includes_rows_from_initial_data(pool: PgPool) {
    // Arrange
    let test_app = helpers::TestApp::setup(pool).await;

    // Act
    let response = test_app.get_top10().await;

    // Assert
    response.assert_status_ok();
    response.assert_text("user-from-initial_data.sql 1\n");
}

#[sqlx::test]
async fn top10_returns_500_when_the_database_is_broken(pool: PgPool) {
    // Arrange
    let test_app = helpers::TestApp::setup(pool).await;
    sqlx::query("DROP TABLE hello_schema.users")
        .execute(&test_app.app_state.db_pool)
        .await
        .expect("Failed to drop table");

    // Act
    let response = test_app.get_top10().await;

    // Assert
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_text("Something went wrong");
}
