mod config;
mod db;
mod entities;
mod error;
mod models;
mod omdb;
mod routes;
mod store;

use std::{sync::Arc, time::Duration};

use crate::{config::Config, omdb::OmdbClient, store::MovieStore};

#[derive(Clone)]
pub struct AppState {
    pub store: MovieStore,
    pub omdb: Arc<OmdbClient>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,movieshelf=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let http = reqwest::Client::builder()
        .user_agent("movieshelf/0.1")
        .timeout(Duration::from_secs(30))
        .build()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let store = MovieStore::new(db);

    let omdb = OmdbClient::new(
        http,
        config.omdb_api_key.clone(),
        config.omdb_base_url.clone(),
        config.omdb_rps,
        config.omdb_detail_concurrency,
    );

    let state = Arc::new(AppState { store, omdb: Arc::new(omdb) });
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
