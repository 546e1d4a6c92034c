use crate::{
    cmd,
    modules::handlers::{
        list_bookmarked_contests, list_contests, liveness, readiness, sync_platform,
        toggle_bookmark,
    },
};
use anyhow::{Context, Result};
use axum::{extract::Extension, routing, Router, Server};
use clap::Args;
use contest_tracker_libs::{
    query::QueryService,
    store::{postgres::PgContestStore, ContestStore},
    sync::ContestSyncer,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::CorsLayer;

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(long)]
    port: Option<u16>,
}

pub async fn run(args: ServeArgs) -> Result<()> {
    let pool = cmd::connect_pool().await?;
    let store: Arc<dyn ContestStore> = Arc::new(PgContestStore::new(pool));

    store.ping().await.with_context(|| {
        let message = "contest store is not available. check your database status and the value of the DATABASE_URL environment variable.";
        tracing::error!(message);
        format!("{}", message)
    })?;

    let syncer = Arc::new(ContestSyncer::new(store.clone(), cmd::enabled_sources()?));
    let queries = Arc::new(QueryService::new(store.clone()));

    let app = create_router(store, queries, syncer);
    let port = match args.port {
        Some(port) => port,
        None => {
            tracing::warn!("API server will be launched at default port number 8000");
            8000u16
        }
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server start at port {}", port);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to bind server.");

    Ok(())
}

fn create_router(
    store: Arc<dyn ContestStore>,
    queries: Arc<QueryService>,
    syncer: Arc<ContestSyncer>,
) -> Router {
    // The SPA frontend is served from another origin.
    Router::new()
        .route("/api/contests", routing::get(list_contests))
        .route("/api/bookmarked-contests", routing::get(list_bookmarked_contests))
        .route("/api/contests/:id/bookmark", routing::patch(toggle_bookmark))
        .route("/api/sync/:platform", routing::post(sync_platform))
        .route("/api/liveness", routing::get(liveness))
        .route("/api/readiness", routing::get(readiness))
        .layer(Extension(store))
        .layer(Extension(queries))
        .layer(Extension(syncer))
        .layer(CorsLayer::permissive())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler.");
    };

    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("SIGINT signal received, starting graceful shutdown.");
}
