use std::sync::Arc;

use async_graphql::ID;
use infra::repos::RepoError;

/// The entity a lookup was about, used in not-found messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Event,
    Organiser,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Event => write!(f, "Event"),
            EntityKind::Organiser => write!(f, "Organiser"),
        }
    }
}

/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so any type implementing `Display` auto-converts via `?`.
///
/// This enum gives us:
///   - `NotFound` — a strict lookup (update, delete, referenced organiser) missed
///   - `InvalidId` — id text that is not a decimal integer
///   - `From<RepoError>` / `From<Arc<RepoError>>` (DataLoader errors) — logs the
///     store detail, shows a sanitized message to clients
///   - `GqlError::new("…")` — custom one-off messages
#[derive(Debug)]
pub enum GqlError {
    NotFound(EntityKind),
    InvalidId(String),
    Repo(Arc<RepoError>),
    Custom(String),
}

impl GqlError {
    pub fn new(msg: impl Into<String>) -> Self {
        GqlError::Custom(msg.into())
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::NotFound(kind) => write!(f, "{kind} not found"),
            GqlError::InvalidId(msg) => write!(f, "Invalid ID: {msg}"),
            GqlError::Repo(e) => {
                // Log the real error server-side; return a generic message to clients
                tracing::error!("Store error: {e}");
                write!(f, "Internal database error")
            }
            GqlError::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<RepoError> for GqlError {
    fn from(e: RepoError) -> Self {
        Arc::new(e).into()
    }
}

impl From<Arc<RepoError>> for GqlError {
    fn from(e: Arc<RepoError>) -> Self {
        // The organiser vanished between the existence check and the write.
        if matches!(*e, RepoError::MissingOrganiser(_)) {
            GqlError::NotFound(EntityKind::Organiser)
        } else {
            GqlError::Repo(e)
        }
    }
}

/// Parses a GraphQL `ID` into a numeric row id.
pub fn parse_id(id: &ID) -> Result<i64, GqlError> {
    id.as_str()
        .parse::<i64>()
        .map_err(|e| GqlError::InvalidId(format!("{:?}: {e}", id.as_str())))
}
