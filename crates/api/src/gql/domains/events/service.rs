//! Event operations over the repository traits.
//!
//! Reads are lenient (a missing event is `Ok(None)`); writes and deletes are
//! strict and fail with `GqlError::NotFound`. The caller (resolver) parses
//! ids and converts rows to GraphQL types.

use async_graphql::MaybeUndefined;
use infra::filter::{event_predicate, EventFilter};
use infra::models::{EventRow, NewEvent};
use infra::repos::{EventRepository, OrganiserRepository};

use crate::gql::error::{EntityKind, GqlError};

/// Field changes for a partial event update.
#[derive(Debug, Default)]
pub struct EventChanges {
    pub name: MaybeUndefined<String>,
    pub description: MaybeUndefined<String>,
    pub venue: MaybeUndefined<String>,
    pub venue_location: MaybeUndefined<String>,
    pub availability: MaybeUndefined<i32>,
    pub date: MaybeUndefined<String>,
    pub image: MaybeUndefined<String>,
    pub price: MaybeUndefined<f64>,
}

impl EventChanges {
    pub fn apply(self, event: &mut EventRow) {
        merge(&mut event.name, self.name);
        merge(&mut event.description, self.description);
        merge(&mut event.venue, self.venue);
        merge(&mut event.venue_location, self.venue_location);
        merge(&mut event.availability, self.availability);
        merge(&mut event.date, self.date);
        merge(&mut event.image, self.image);
        merge(&mut event.price, self.price);
    }
}

fn merge<T>(field: &mut Option<T>, change: MaybeUndefined<T>) {
    match change {
        MaybeUndefined::Undefined => {}
        MaybeUndefined::Null => *field = None,
        MaybeUndefined::Value(value) => *field = Some(value),
    }
}

pub async fn read_event(
    events: &dyn EventRepository,
    id: i64,
) -> Result<Option<EventRow>, GqlError> {
    tracing::debug!(event_id = id, "reading event");
    Ok(events.find_by_id(id).await?)
}

pub async fn list_events(
    events: &dyn EventRepository,
    filter: Option<&EventFilter>,
) -> Result<Vec<EventRow>, GqlError> {
    let predicate = event_predicate(filter);
    tracing::debug!(conditions = predicate.conditions().len(), "listing events");
    Ok(events.find_all(&predicate).await?)
}

pub async fn create_event(
    organisers: &dyn OrganiserRepository,
    events: &dyn EventRepository,
    new_event: NewEvent,
) -> Result<EventRow, GqlError> {
    if organisers.find_by_id(new_event.organiser_id).await?.is_none() {
        return Err(GqlError::NotFound(EntityKind::Organiser));
    }

    let row = events.insert(new_event).await?;
    tracing::info!(event_id = row.id, organiser_id = row.organiser_id, "created event");
    Ok(row)
}

pub async fn update_event(
    organisers: &dyn OrganiserRepository,
    events: &dyn EventRepository,
    id: i64,
    organiser_id: i64,
    changes: EventChanges,
) -> Result<EventRow, GqlError> {
    let mut event = events
        .find_by_id(id)
        .await?
        .ok_or(GqlError::NotFound(EntityKind::Event))?;
    let organiser = organisers
        .find_by_id(organiser_id)
        .await?
        .ok_or(GqlError::NotFound(EntityKind::Organiser))?;

    event.organiser_id = organiser.id;
    changes.apply(&mut event);

    let row = events.save(&event).await?;
    tracing::info!(event_id = row.id, "updated event");
    Ok(row)
}

/// Deletes the event and returns its id.
pub async fn delete_event(events: &dyn EventRepository, id: i64) -> Result<i64, GqlError> {
    if events.find_by_id(id).await?.is_none() {
        return Err(GqlError::NotFound(EntityKind::Event));
    }

    events.delete(id).await?;
    tracing::info!(event_id = id, "deleted event");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra::memory::MemoryStore;
    use infra::models::NewOrganiser;

    async fn seed(store: &MemoryStore) -> (i64, EventRow) {
        let organiser = OrganiserRepository::insert(
            store,
            NewOrganiser {
                name: Some("Foggy Notions".into()),
                logo: Some("foggy.png".into()),
                description: Some("Club nights".into()),
            },
        )
        .await
        .unwrap();

        let event = create_event(
            store,
            store,
            NewEvent {
                organiser_id: organiser.id,
                name: Some("Warehouse Party".into()),
                description: Some("All night long".into()),
                venue: Some("Index".into()),
                venue_location: Some("Dublin 1".into()),
                availability: Some(400),
                date: Some("2024-11-02".into()),
                image: Some("warehouse.jpg".into()),
                price: Some(22.5),
            },
        )
        .await
        .unwrap();

        (organiser.id, event)
    }

    #[test]
    fn apply_distinguishes_undefined_null_and_value() {
        let mut event = EventRow {
            id: 1,
            organiser_id: 1,
            name: Some("Before".into()),
            description: Some("Kept".into()),
            venue: Some("Cleared".into()),
            venue_location: None,
            availability: Some(10),
            date: None,
            image: None,
            price: Some(5.0),
        };

        EventChanges {
            name: MaybeUndefined::Value("After".into()),
            venue: MaybeUndefined::Null,
            ..Default::default()
        }
        .apply(&mut event);

        assert_eq!(event.name.as_deref(), Some("After"));
        assert_eq!(event.description.as_deref(), Some("Kept"));
        assert_eq!(event.venue, None);
        assert_eq!(event.availability, Some(10));
        assert_eq!(event.price, Some(5.0));
    }

    #[tokio::test]
    async fn update_with_only_organiser_changes_nothing_else() {
        let store = MemoryStore::new();
        let (organiser_id, before) = seed(&store).await;

        let after = update_event(
            &store,
            &store,
            before.id,
            organiser_id,
            EventChanges::default(),
        )
        .await
        .unwrap();

        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn update_price_only_touches_price() {
        let store = MemoryStore::new();
        let (organiser_id, before) = seed(&store).await;

        let after = update_event(
            &store,
            &store,
            before.id,
            organiser_id,
            EventChanges {
                price: MaybeUndefined::Value(9.99),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(after.price, Some(9.99));
        assert_eq!(
            EventRow {
                price: before.price,
                ..after.clone()
            },
            before
        );
        assert_eq!(
            EventRepository::find_by_id(&store, before.id).await.unwrap(),
            Some(after)
        );
    }

    #[tokio::test]
    async fn update_reassigns_organiser() {
        let store = MemoryStore::new();
        let (_, before) = seed(&store).await;
        let other = OrganiserRepository::insert(&store, NewOrganiser::default())
            .await
            .unwrap();

        let after = update_event(&store, &store, before.id, other.id, EventChanges::default())
            .await
            .unwrap();

        assert_eq!(after.organiser_id, other.id);
    }

    #[tokio::test]
    async fn update_checks_event_then_organiser() {
        let store = MemoryStore::new();
        let (organiser_id, event) = seed(&store).await;

        let missing_event =
            update_event(&store, &store, 999, organiser_id, EventChanges::default()).await;
        assert!(matches!(
            missing_event,
            Err(GqlError::NotFound(EntityKind::Event))
        ));

        let missing_organiser =
            update_event(&store, &store, event.id, 999, EventChanges::default()).await;
        assert!(matches!(
            missing_organiser,
            Err(GqlError::NotFound(EntityKind::Organiser))
        ));
    }

    #[tokio::test]
    async fn create_with_unknown_organiser_writes_nothing() {
        let store = MemoryStore::new();

        let result = create_event(
            &store,
            &store,
            NewEvent {
                organiser_id: 12,
                name: Some("Ghost gig".into()),
                description: None,
                venue: None,
                venue_location: None,
                availability: None,
                date: None,
                image: None,
                price: None,
            },
        )
        .await;

        assert!(matches!(
            result,
            Err(GqlError::NotFound(EntityKind::Organiser))
        ));
        assert!(list_events(&store, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reads_are_lenient_deletes_are_strict() {
        let store = MemoryStore::new();
        let (_, event) = seed(&store).await;

        assert_eq!(read_event(&store, 404).await.unwrap(), None);
        assert!(matches!(
            delete_event(&store, 404).await,
            Err(GqlError::NotFound(EntityKind::Event))
        ));

        assert_eq!(delete_event(&store, event.id).await.unwrap(), event.id);
        assert_eq!(read_event(&store, event.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_filters_by_substring() {
        let store = MemoryStore::new();
        let (_, event) = seed(&store).await;

        let hits = list_events(
            &store,
            Some(&EventFilter {
                venue_location: Some("Dublin".into()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();
        assert_eq!(hits, vec![event]);

        let misses = list_events(
            &store,
            Some(&EventFilter {
                name: Some("warehouse".into()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();
        assert!(misses.is_empty());
    }
}
