use std::{num::NonZeroU32, sync::Arc};

use futures::{StreamExt, stream};
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{error::AppResult, models::MovieSummary};

/// Client for the OMDb-style metadata provider. Stateless apart from the
/// outbound rate limiter; every call is an independent GET against the
/// configured base URL.
pub struct OmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    detail_concurrency: usize,
}

impl OmdbClient {
    pub fn new(
        client: reqwest::Client,
        api_key: String,
        base_url: String,
        rps: u32,
        detail_concurrency: usize,
    ) -> Self {
        if api_key.trim().is_empty() {
            tracing::warn!("no OMDB_API_KEY provided - provider calls will be rejected");
        }

        let limiter =
            Arc::new(RateLimiter::direct(Quota::per_second(NonZeroU32::new(rps.max(1)).unwrap())));
        Self { client, api_key, base_url, limiter, detail_concurrency }
    }

    /// Exact-title lookup. `Ok(None)` means the provider answered but found
    /// no movie; transport, HTTP and parse failures stay errors so the
    /// caller can tell the two apart.
    pub async fn fetch_by_title(&self, title: &str) -> AppResult<Option<MovieSummary>> {
        let resp: DetailResponse = self.get(&[("t", title)]).await?;
        if resp.response != "True" {
            tracing::debug!(
                title,
                reason = resp.error.as_deref().unwrap_or("unknown"),
                "no exact title match"
            );
            return Ok(None);
        }
        Ok(Some(resp.into_summary()))
    }

    /// Fuzzy search followed by a per-hit detail lookup. The search endpoint
    /// only returns a coarse shape (id, title, year, poster), so each hit is
    /// hydrated with a second call. Hydration runs with bounded concurrency
    /// but the output keeps the coarse list's order; a hit whose detail
    /// lookup fails is skipped.
    pub async fn search_by_title(&self, query: &str) -> AppResult<Vec<MovieSummary>> {
        let resp: SearchResponse = self.get(&[("s", query)]).await?;
        if resp.response != "True" {
            tracing::debug!(
                query,
                reason = resp.error.as_deref().unwrap_or("unknown"),
                "search returned no matches"
            );
            return Ok(Vec::new());
        }

        let details = stream::iter(resp.search)
            .map(|hit| async move {
                let detail = self.fetch_by_id(&hit.imdb_id).await;
                (hit.imdb_id, detail)
            })
            .buffered(self.detail_concurrency.max(1))
            .collect::<Vec<_>>()
            .await;

        let mut movies = Vec::with_capacity(details.len());
        for (imdb_id, detail) in details {
            match detail {
                Ok(Some(summary)) => movies.push(summary),
                Ok(None) => {
                    tracing::warn!(%imdb_id, "detail lookup found nothing, skipping hit");
                }
                Err(err) => {
                    tracing::warn!(%imdb_id, error = %err, "detail lookup failed, skipping hit");
                }
            }
        }
        Ok(movies)
    }

    async fn fetch_by_id(&self, imdb_id: &str) -> AppResult<Option<MovieSummary>> {
        let resp: DetailResponse = self.get(&[("i", imdb_id)]).await?;
        if resp.response != "True" {
            return Ok(None);
        }
        Ok(Some(resp.into_summary()))
    }

    async fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> AppResult<T> {
        self.limiter.until_ready().await;

        let resp = self
            .client
            .get(&self.base_url)
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp)
    }
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Rated")]
    rated: Option<String>,
    #[serde(rename = "Released")]
    released: Option<String>,
    #[serde(rename = "Runtime")]
    runtime: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Writer")]
    writer: Option<String>,
    #[serde(rename = "Actors")]
    actors: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
}

impl DetailResponse {
    // Missing fields become empty strings; a missing rating becomes "N/A".
    fn into_summary(self) -> MovieSummary {
        MovieSummary {
            imdb_id: self.imdb_id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
            rated: self.rated.unwrap_or_default(),
            released: self.released.unwrap_or_default(),
            runtime: self.runtime.unwrap_or_default(),
            genre: self.genre.unwrap_or_default(),
            director: self.director.unwrap_or_default(),
            writer: self.writer.unwrap_or_default(),
            actors: self.actors.unwrap_or_default(),
            plot: self.plot.unwrap_or_default(),
            poster: self.poster.unwrap_or_default(),
            rating_score: self.imdb_rating.unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "Search", default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "imdbID")]
    imdb_id: String,
}
