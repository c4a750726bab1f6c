use async_graphql::dataloader::Loader;
use infra::models::{EventRow, OrganiserRow};
use infra::repos::{EventRepository, OrganiserRepository, RepoError};
use std::{collections::HashMap, future::Future, sync::Arc};

// OrganiserLoader - batch load organisers by id for `Event.organiser`
#[derive(Clone)]
pub struct OrganiserLoader {
    repo: Arc<dyn OrganiserRepository>,
}

impl OrganiserLoader {
    pub fn new(repo: Arc<dyn OrganiserRepository>) -> Self {
        Self { repo }
    }
}

impl Loader<i64> for OrganiserLoader {
    type Value = OrganiserRow;
    type Error = Arc<RepoError>;

    fn load(
        &self,
        keys: &[i64],
    ) -> impl Future<Output = std::result::Result<HashMap<i64, Self::Value>, Self::Error>> + Send
    {
        let repo = self.repo.clone();
        let ids: Vec<i64> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = repo.find_many(&ids).await.map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// OrganiserEventsLoader - batch load the events of several organisers for `Organiser.events`
#[derive(Clone)]
pub struct OrganiserEventsLoader {
    repo: Arc<dyn EventRepository>,
}

impl OrganiserEventsLoader {
    pub fn new(repo: Arc<dyn EventRepository>) -> Self {
        Self { repo }
    }
}

impl Loader<i64> for OrganiserEventsLoader {
    type Value = Vec<EventRow>;
    type Error = Arc<RepoError>;

    fn load(
        &self,
        keys: &[i64],
    ) -> impl Future<Output = std::result::Result<HashMap<i64, Self::Value>, Self::Error>> + Send
    {
        let repo = self.repo.clone();
        let ids: Vec<i64> = keys.to_vec();

        async move {
            // Every requested organiser gets an entry, even with no events.
            let mut grouped: HashMap<i64, Vec<EventRow>> =
                ids.iter().map(|id| (*id, Vec::new())).collect();
            if ids.is_empty() {
                return Ok(grouped);
            }

            let rows = repo.find_by_organisers(&ids).await.map_err(Arc::new)?;
            for row in rows {
                grouped.entry(row.organiser_id).or_default().push(row);
            }

            Ok(grouped)
        }
    }
}
