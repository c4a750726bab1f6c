use std::sync::Arc;

use infra::db::Db;
use infra::memory::MemoryStore;
use infra::repos::{EventRepository, OrganiserRepository, PgEventRepo, PgOrganiserRepo};

#[derive(Clone)]
pub struct AppState {
    organisers: Arc<dyn OrganiserRepository>,
    events: Arc<dyn EventRepository>,
}

impl AppState {
    pub fn new(
        organisers: Arc<dyn OrganiserRepository>,
        events: Arc<dyn EventRepository>,
    ) -> Self {
        Self { organisers, events }
    }

    pub fn postgres(db: Db) -> Self {
        Self::new(
            Arc::new(PgOrganiserRepo::new(db.clone())),
            Arc::new(PgEventRepo::new(db)),
        )
    }

    /// Both repositories backed by one shared in-process store.
    pub fn in_memory() -> Self {
        let store = MemoryStore::new();
        Self::new(Arc::new(store.clone()), Arc::new(store))
    }

    pub fn organisers(&self) -> &dyn OrganiserRepository {
        self.organisers.as_ref()
    }

    pub fn events(&self) -> &dyn EventRepository {
        self.events.as_ref()
    }

    pub fn organiser_repo(&self) -> Arc<dyn OrganiserRepository> {
        self.organisers.clone()
    }

    pub fn event_repo(&self) -> Arc<dyn EventRepository> {
        self.events.clone()
    }
}
