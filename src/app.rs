/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → 依存生成 (KittenRepo, IdCodec, AuthService) → Router 組み立て
 * - Middleware の適用 (CORS / HTTP / security headers / Bearer)
 * - axum::serve() で起動
 */
use std::{panic, sync::Arc};

use anyhow::{Context, Result};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    config::Config,
    middleware,
    repos::{KittenRepo, MemoryKittenRepo, PgKittenRepo},
    services::{auth::build_auth_service, id_codec::IdCodec},
    state::AppState,
};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,cyber_kittens=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook() {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    // handler 内の panic は CatchPanicLayer が 500 に変換するので、プロセスは止めない
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");
        default_hook(info);
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    init_panic_hook();

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = middleware::cors::apply(router(state), &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn build_kitten_repo(config: &Config) -> Result<Arc<dyn KittenRepo>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL is not set; kittens are kept in memory only");
        return Ok(Arc::new(MemoryKittenRepo::new()));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(database_url)
        .await
        .context("failed to connect to postgres")?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    Ok(Arc::new(PgKittenRepo::new(pool)))
}

pub async fn build_state(config: &Config) -> Result<AppState> {
    // Build process-level services here and inject them into the shared application state.
    let kittens = build_kitten_repo(config).await?;
    let id_codec = IdCodec::new(config.sqids_min_length, &config.sqids_alphabet)?;
    let auth = build_auth_service(config)?;

    tracing::info!(store = kittens.backend_name(), "application state ready");

    Ok(AppState::new(kittens, id_codec, auth))
}

/// Routes + HTTP/security layers. CORS depends on `Config` and is applied by `run`.
pub fn router(state: AppState) -> Router {
    let router = Router::new()
        .merge(api::routes(state.clone()))
        .with_state(state);

    let router = middleware::security_headers::apply(router);
    middleware::http::apply(router)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
