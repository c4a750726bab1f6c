use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, MaybeUndefined, Result, SimpleObject, ID};
use infra::models::{EventRow, NewEvent};

use super::service::EventChanges;
use crate::gql::domains::organisers::types::Organiser;
use crate::gql::error::{parse_id, EntityKind, GqlError};
use crate::gql::loaders::OrganiserLoader;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Event {
    pub id: ID,
    pub name: Option<String>,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub venue_location: Option<String>,
    pub availability: Option<i32>,
    pub date: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    #[graphql(skip)]
    pub organiser_id: i64,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Self {
            id: ID(row.id.to_string()),
            name: row.name,
            description: row.description,
            venue: row.venue,
            venue_location: row.venue_location,
            availability: row.availability,
            date: row.date,
            image: row.image,
            price: row.price,
            organiser_id: row.organiser_id,
        }
    }
}

#[ComplexObject]
impl Event {
    /// The organiser running this event.
    async fn organiser(&self, ctx: &Context<'_>) -> Result<Organiser> {
        let loader = ctx.data::<DataLoader<OrganiserLoader>>()?;

        match loader
            .load_one(self.organiser_id)
            .await
            .map_err(GqlError::from)?
        {
            Some(row) => Ok(row.into()),
            None => Err(GqlError::NotFound(EntityKind::Organiser).into()),
        }
    }
}

#[derive(InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct CreateEventInput {
    pub name: Option<String>,
    /// Id of an existing organiser.
    pub organiser: ID,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub venue_location: Option<String>,
    pub availability: Option<i32>,
    pub date: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
}

impl CreateEventInput {
    pub fn into_new_event(self) -> Result<NewEvent, GqlError> {
        Ok(NewEvent {
            organiser_id: parse_id(&self.organiser)?,
            name: self.name,
            description: self.description,
            venue: self.venue,
            venue_location: self.venue_location,
            availability: self.availability,
            date: self.date,
            image: self.image,
            price: self.price,
        })
    }
}

/// Partial update: omitted fields are left alone, explicit nulls clear the
/// field. `organiser` is required and always reassigned.
#[derive(InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct UpdateEventInput {
    pub id: ID,
    pub organiser: ID,
    pub name: MaybeUndefined<String>,
    pub description: MaybeUndefined<String>,
    pub venue: MaybeUndefined<String>,
    pub venue_location: MaybeUndefined<String>,
    pub availability: MaybeUndefined<i32>,
    pub date: MaybeUndefined<String>,
    pub image: MaybeUndefined<String>,
    pub price: MaybeUndefined<f64>,
}

impl UpdateEventInput {
    pub fn into_changes(self) -> EventChanges {
        EventChanges {
            name: self.name,
            description: self.description,
            venue: self.venue,
            venue_location: self.venue_location,
            availability: self.availability,
            date: self.date,
            image: self.image,
            price: self.price,
        }
    }
}
