use std::sync::Arc;

use futures::{StreamExt, stream::BoxStream};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, TransactionTrait,
};
use tokio::sync::watch;

use crate::{entities::movie, error::AppResult};

/// Handle to the movie table. Cheap to clone; every clone shares the same
/// connection pool and change feed.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
    changes: Arc<watch::Sender<u64>>,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        let (changes, _) = watch::channel(0);
        Self { db, changes: Arc::new(changes) }
    }

    /// Inserts the batch in one transaction. A record whose `imdb_id` already
    /// exists replaces the stored row in full; watchers only ever observe the
    /// committed batch, never part of it.
    pub async fn upsert_all(&self, records: Vec<movie::Model>) -> AppResult<()> {
        let txn = self.db.begin().await?;

        for record in records {
            movie::Entity::insert(record.into_active_model())
                .on_conflict(
                    sea_orm::sea_query::OnConflict::column(movie::Column::ImdbId)
                        .update_columns([
                            movie::Column::Title,
                            movie::Column::Year,
                            movie::Column::Rated,
                            movie::Column::Released,
                            movie::Column::Runtime,
                            movie::Column::Genre,
                            movie::Column::Director,
                            movie::Column::Writer,
                            movie::Column::Actors,
                            movie::Column::Plot,
                            movie::Column::Poster,
                        ])
                        .to_owned(),
                )
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        self.changes.send_modify(|generation| *generation += 1);

        Ok(())
    }

    pub async fn get_all(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().all(&self.db).await?)
    }

    /// Substring match over the comma-joined actors column. SQLite `LIKE`
    /// folds ASCII case, so "keanu" and "KEANU" behave the same. No blank
    /// check here; rejecting an empty fragment is the caller's job.
    pub async fn find_by_actor(&self, fragment: &str) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find()
            .filter(movie::Column::Actors.contains(fragment))
            .all(&self.db)
            .await?)
    }

    /// Live view of the full table: the current contents, then a fresh
    /// result set after every committed write. Never ends while the store
    /// is alive.
    pub fn watch_all(&self) -> BoxStream<'static, AppResult<Vec<movie::Model>>> {
        self.watch_query(None)
    }

    /// Live variant of [`find_by_actor`](Self::find_by_actor).
    pub fn watch_by_actor(&self, fragment: &str) -> BoxStream<'static, AppResult<Vec<movie::Model>>> {
        self.watch_query(Some(fragment.to_string()))
    }

    fn watch_query(&self, actor: Option<String>) -> BoxStream<'static, AppResult<Vec<movie::Model>>> {
        let store = self.clone();
        let mut rx = self.changes.subscribe();
        // Deliver the current snapshot before any write lands.
        rx.mark_changed();

        futures::stream::unfold((store, rx, actor), |(store, mut rx, actor)| async move {
            if rx.changed().await.is_err() {
                return None;
            }
            let snapshot = match &actor {
                Some(fragment) => store.find_by_actor(fragment).await,
                None => store.get_all().await,
            };
            Some((snapshot, (store, rx, actor)))
        })
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use migration::Migrator;
    use sea_orm::{ConnectOptions, Database};
    use sea_orm_migration::MigratorTrait;

    use super::*;
    use crate::models::sample_movies;

    async fn test_store() -> MovieStore {
        // A single connection keeps the in-memory database alive and shared.
        let mut opt = ConnectOptions::new("sqlite::memory:".to_string());
        opt.max_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.expect("connect in-memory sqlite");
        Migrator::up(&db, None).await.expect("run migrations");
        MovieStore::new(db)
    }

    fn record(imdb_id: &str, title: &str, actors: &str) -> movie::Model {
        movie::Model {
            imdb_id: imdb_id.to_string(),
            title: title.to_string(),
            year: "1999".to_string(),
            rated: "R".to_string(),
            released: "01 Jan 1999".to_string(),
            runtime: "100 min".to_string(),
            genre: "Drama".to_string(),
            director: "Someone".to_string(),
            writer: "Someone".to_string(),
            actors: actors.to_string(),
            plot: "N/A".to_string(),
            poster: "N/A".to_string(),
        }
    }

    #[tokio::test]
    async fn upsert_replaces_whole_record() {
        let store = test_store().await;

        store.upsert_all(vec![record("tt1", "Old Title", "Old Actor")]).await.unwrap();
        store.upsert_all(vec![record("tt1", "New Title", "New Actor")]).await.unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "New Title");
        assert_eq!(all[0].actors, "New Actor");
    }

    #[tokio::test]
    async fn actor_search_is_case_insensitive_substring() {
        let store = test_store().await;
        store
            .upsert_all(vec![record(
                "tt0111161",
                "The Shawshank Redemption",
                "Tim Robbins, Morgan Freeman",
            )])
            .await
            .unwrap();

        for fragment in ["robbins", "ROBBINS", "obbin"] {
            let hits = store.find_by_actor(fragment).await.unwrap();
            assert_eq!(hits.len(), 1, "fragment {fragment:?} should match");
        }

        assert!(store.find_by_actor("Robert").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seed_set_round_trips() {
        let store = test_store().await;
        store.upsert_all(sample_movies()).await.unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 5);

        let hits = store.find_by_actor("Keanu").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "The Matrix");
    }

    #[tokio::test]
    async fn failed_batch_leaves_no_partial_writes() {
        let store = test_store().await;

        // The empty id violates the table check constraint mid-batch.
        let batch = vec![
            record("tt1", "First", "A"),
            record("", "Broken", "B"),
            record("tt2", "Last", "C"),
        ];

        assert!(store.upsert_all(batch).await.is_err());
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn watch_all_pushes_a_snapshot_per_write() {
        let store = test_store().await;
        let mut live = store.watch_all();

        let initial = live.next().await.unwrap().unwrap();
        assert!(initial.is_empty());

        store.upsert_all(vec![record("tt1", "First", "A")]).await.unwrap();
        let snapshot = live.next().await.unwrap().unwrap();
        assert_eq!(snapshot.len(), 1);

        store.upsert_all(vec![record("tt2", "Second", "B")]).await.unwrap();
        let snapshot = live.next().await.unwrap().unwrap();
        assert_eq!(snapshot.len(), 2);
    }

    #[tokio::test]
    async fn watch_by_actor_tracks_matching_rows_only() {
        let store = test_store().await;
        let mut live = store.watch_by_actor("Keanu");

        assert!(live.next().await.unwrap().unwrap().is_empty());

        store.upsert_all(sample_movies()).await.unwrap();
        let snapshot = live.next().await.unwrap().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].title, "The Matrix");
    }
}
