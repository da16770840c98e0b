use std::net::SocketAddr;

use super::routes;
use axum::{http::Request, routing, Router};
use sqlx::{migrate::MigrateError, PgPool};
use tokio::net::TcpListener;
use tower_http::{
    trace::{DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use crate::configuration::{DatabaseSettings, Settings};

pub struct Application {
    address: SocketAddr,
    router: Router,
}

impl Application {
    pub fn new(addr: SocketAddr, app_state: AppState) -> Self {
        let router = Router::new()
            .route("/health", routing::get(routes::health_check))
            .route("/v1/hello", routing::post(routes::hello))
            .route("/v2/hello", routing::post(routes::hello_v2))
            .route("/v1/top10", routing::get(routes::top10))
            .with_state(app_state)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<_>| {
                        let trace_id = uuid::Uuid::new_v4().to_string();
                        tracing::info_span!(
                            "request",
                            trace_id = trace_id,
                            method = ?request.method(),
                            uri = %request.uri(),
                            version = ?request.version(),
                        )
                    })
                    .on_response(
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .latency_unit(LatencyUnit::Millis),
                    ),
            );

        Self {
            address: addr,
            router,
        }
    }

    pub async fn serve(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.address).await?;
        run(listener, self.router).await
    }

    pub fn router(self) -> Router {
        self.router
    }
}

/// Serve `router` on an already bound listener until the process stops.
pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    tracing::info!("Starting service on {}...", listener.local_addr()?);
    axum::serve(listener, router).await
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

pub fn get_connection_pool(settings: &DatabaseSettings) -> PgPool {
    PgPool::connect_lazy_with(settings.with_db())
}

pub fn default_app_state(settings: &Settings, overwrite_db_pool: Option<PgPool>) -> AppState {
    let db_pool = match overwrite_db_pool {
        Some(p) => p,
        None => get_connection_pool(&settings.database),
    };

    AppState { db_pool }
}

/// Apply the embedded schema migrations.
pub async fn migrate(db_pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(db_pool).await
}
