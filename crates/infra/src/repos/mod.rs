//! Persistence collaborators for organisers and events.
//!
//! Resolvers only see the two repository traits; `PgOrganiserRepo` /
//! `PgEventRepo` back them with Postgres and `crate::memory::MemoryStore`
//! keeps everything in process.

use async_trait::async_trait;
use thiserror::Error;

use crate::filter::{EventField, OrganiserField, Predicate};
use crate::models::{EventRow, NewEvent, NewOrganiser, OrganiserRow};

pub mod events;
pub mod organisers;

pub use events::PgEventRepo;
pub use organisers::PgOrganiserRepo;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("organiser {0} does not exist")]
    MissingOrganiser(i64),

    #[error("row {0} does not exist")]
    NotFound(i64),
}

pub type RepoResult<T> = Result<T, RepoError>;

#[async_trait]
pub trait OrganiserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<OrganiserRow>>;

    /// Batch lookup; ids with no row are left out of the result.
    async fn find_many(&self, ids: &[i64]) -> RepoResult<Vec<OrganiserRow>>;

    async fn find_all(&self, predicate: &Predicate<OrganiserField>)
        -> RepoResult<Vec<OrganiserRow>>;

    async fn insert(&self, organiser: NewOrganiser) -> RepoResult<OrganiserRow>;

    /// Writes every column of an existing row.
    async fn save(&self, organiser: &OrganiserRow) -> RepoResult<OrganiserRow>;

    /// Removes the organiser together with the events that reference it.
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<EventRow>>;

    async fn find_all(&self, predicate: &Predicate<EventField>) -> RepoResult<Vec<EventRow>>;

    /// Events whose organiser is one of `organiser_ids`, ordered by id.
    async fn find_by_organisers(&self, organiser_ids: &[i64]) -> RepoResult<Vec<EventRow>>;

    async fn insert(&self, event: NewEvent) -> RepoResult<EventRow>;

    /// Writes every column of an existing row.
    async fn save(&self, event: &EventRow) -> RepoResult<EventRow>;

    async fn delete(&self, id: i64) -> RepoResult<()>;
}

/// Maps a foreign-key violation on `events.organiser_id` to
/// [`RepoError::MissingOrganiser`].
pub(crate) fn classify(err: sqlx::Error, organiser_id: i64) -> RepoError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            RepoError::MissingOrganiser(organiser_id)
        }
        _ => RepoError::Database(err),
    }
}
