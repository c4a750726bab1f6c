//! In-process store implementing both repository traits.
//!
//! Keeps the same referential rules as the Postgres schema: an event must
//! point at an existing organiser, and deleting an organiser removes its
//! events.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::filter::{EventField, OrganiserField, Predicate};
use crate::models::{EventRow, NewEvent, NewOrganiser, OrganiserRow};
use crate::repos::{EventRepository, OrganiserRepository, RepoError, RepoResult};

#[derive(Default)]
struct Tables {
    organisers: BTreeMap<i64, OrganiserRow>,
    events: BTreeMap<i64, EventRow>,
    next_organiser_id: i64,
    next_event_id: i64,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrganiserRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<OrganiserRow>> {
        Ok(self.tables.read().organisers.get(&id).cloned())
    }

    async fn find_many(&self, ids: &[i64]) -> RepoResult<Vec<OrganiserRow>> {
        let tables = self.tables.read();
        Ok(ids
            .iter()
            .filter_map(|id| tables.organisers.get(id).cloned())
            .collect())
    }

    async fn find_all(
        &self,
        predicate: &Predicate<OrganiserField>,
    ) -> RepoResult<Vec<OrganiserRow>> {
        Ok(self
            .tables
            .read()
            .organisers
            .values()
            .filter(|row| predicate.matches(*row))
            .cloned()
            .collect())
    }

    async fn insert(&self, organiser: NewOrganiser) -> RepoResult<OrganiserRow> {
        let mut tables = self.tables.write();
        tables.next_organiser_id += 1;
        let row = organiser.into_row(tables.next_organiser_id);
        tables.organisers.insert(row.id, row.clone());
        Ok(row)
    }

    async fn save(&self, organiser: &OrganiserRow) -> RepoResult<OrganiserRow> {
        let mut tables = self.tables.write();
        let slot = tables
            .organisers
            .get_mut(&organiser.id)
            .ok_or(RepoError::NotFound(organiser.id))?;
        *slot = organiser.clone();
        Ok(organiser.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tables = self.tables.write();
        tables
            .organisers
            .remove(&id)
            .ok_or(RepoError::NotFound(id))?;
        tables.events.retain(|_, event| event.organiser_id != id);
        Ok(())
    }
}

#[async_trait]
impl EventRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<EventRow>> {
        Ok(self.tables.read().events.get(&id).cloned())
    }

    async fn find_all(&self, predicate: &Predicate<EventField>) -> RepoResult<Vec<EventRow>> {
        Ok(self
            .tables
            .read()
            .events
            .values()
            .filter(|row| predicate.matches(*row))
            .cloned()
            .collect())
    }

    async fn find_by_organisers(&self, organiser_ids: &[i64]) -> RepoResult<Vec<EventRow>> {
        Ok(self
            .tables
            .read()
            .events
            .values()
            .filter(|row| organiser_ids.contains(&row.organiser_id))
            .cloned()
            .collect())
    }

    async fn insert(&self, event: NewEvent) -> RepoResult<EventRow> {
        let mut tables = self.tables.write();
        if !tables.organisers.contains_key(&event.organiser_id) {
            return Err(RepoError::MissingOrganiser(event.organiser_id));
        }
        tables.next_event_id += 1;
        let row = event.into_row(tables.next_event_id);
        tables.events.insert(row.id, row.clone());
        Ok(row)
    }

    async fn save(&self, event: &EventRow) -> RepoResult<EventRow> {
        let mut tables = self.tables.write();
        if !tables.organisers.contains_key(&event.organiser_id) {
            return Err(RepoError::MissingOrganiser(event.organiser_id));
        }
        let slot = tables
            .events
            .get_mut(&event.id)
            .ok_or(RepoError::NotFound(event.id))?;
        *slot = event.clone();
        Ok(event.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.tables
            .write()
            .events
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound(id))
    }
}
