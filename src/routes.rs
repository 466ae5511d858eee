use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::{get, post},
};
use futures::{Stream, StreamExt, stream::BoxStream};
use serde::Deserialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{AppState, entities::movie, error::AppResult, models};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies", get(list_movies).post(upsert_movies))
        .route("/movies/by-actor", get(movies_by_actor))
        .route("/movies/by-actor/live", get(movies_by_actor_live))
        .route("/movies/live", get(movies_live))
        .route("/movies/seed", post(seed_movies))
        .route("/lookup", get(lookup))
        .route("/search", get(search))
        .route("/search/save", post(save_lookup))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

async fn list_movies(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<movie::Model>>> {
    Ok(Json(state.store.get_all().await?))
}

async fn upsert_movies(
    State(state): State<Arc<AppState>>,
    Json(records): Json<Vec<movie::Model>>,
) -> AppResult<StatusCode> {
    state.store.upsert_all(records).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn seed_movies(State(state): State<Arc<AppState>>) -> AppResult<StatusCode> {
    state.store.upsert_all(models::sample_movies()).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
struct ActorQuery {
    actor: String,
}

async fn movies_by_actor(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ActorQuery>,
) -> AppResult<Json<Vec<movie::Model>>> {
    let fragment = q.actor.trim();
    if fragment.is_empty() {
        return Err(anyhow::anyhow!("actor fragment is required").into());
    }
    Ok(Json(state.store.find_by_actor(fragment).await?))
}

async fn movies_live(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    sse_snapshots(state.store.watch_all())
}

async fn movies_by_actor_live(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ActorQuery>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    sse_snapshots(state.store.watch_by_actor(q.actor.trim()))
}

fn sse_snapshots(
    snapshots: BoxStream<'static, AppResult<Vec<movie::Model>>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let events = snapshots.map(|snapshot| match snapshot {
        Ok(movies) => Event::default().json_data(&movies),
        Err(err) => Err(axum::Error::new(err)),
    });
    Sse::new(events).keep_alive(KeepAlive::default())
}

#[derive(Debug, Deserialize)]
struct TitleQuery {
    title: String,
}

async fn lookup(
    State(state): State<Arc<AppState>>,
    Query(q): Query<TitleQuery>,
) -> AppResult<Response> {
    match state.omdb.fetch_by_title(q.title.trim()).await? {
        Some(summary) => Ok(Json(summary).into_response()),
        None => Ok(not_found("no movie matched that title")),
    }
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    query: String,
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SearchQuery>,
) -> AppResult<Json<Vec<models::MovieSummary>>> {
    Ok(Json(state.omdb.search_by_title(q.query.trim()).await?))
}

/// Fetch-then-save: look the title up remotely and persist the result.
async fn save_lookup(
    State(state): State<Arc<AppState>>,
    Query(q): Query<TitleQuery>,
) -> AppResult<Response> {
    let Some(summary) = state.omdb.fetch_by_title(q.title.trim()).await? else {
        return Ok(not_found("no movie matched that title"));
    };
    state.store.upsert_all(vec![summary.clone().into_record()]).await?;
    Ok(Json(summary).into_response())
}

fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": message }))).into_response()
}
