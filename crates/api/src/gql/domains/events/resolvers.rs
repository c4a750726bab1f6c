use async_graphql::{Context, Json, Object, Result, ID};
use infra::filter::EventFilter;

use super::service;
use super::types::{CreateEventInput, Event, UpdateEventInput};
use crate::gql::error::parse_id;
use crate::state::AppState;

#[derive(Default)]
pub struct EventQuery;

#[Object]
impl EventQuery {
    /// Event by id, or null when no such event exists.
    async fn event(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Event>> {
        let state = ctx.data::<AppState>()?;
        let id = parse_id(&id)?;

        let row = service::read_event(state.events(), id).await?;
        Ok(row.map(Event::from))
    }

    /// All events matching the optional filter. Recognised keys are `name`,
    /// `description`, `venue` and `venue_location`; each is a substring match.
    async fn events(
        &self,
        ctx: &Context<'_>,
        filter: Option<Json<EventFilter>>,
    ) -> Result<Vec<Event>> {
        let state = ctx.data::<AppState>()?;
        let filter = filter.map(|Json(filter)| filter);

        let rows = service::list_events(state.events(), filter.as_ref()).await?;
        Ok(rows.into_iter().map(Event::from).collect())
    }
}

#[derive(Default)]
pub struct EventMutation;

#[Object]
impl EventMutation {
    async fn create_event(&self, ctx: &Context<'_>, input: CreateEventInput) -> Result<Event> {
        let state = ctx.data::<AppState>()?;
        let new_event = input.into_new_event()?;

        let row = service::create_event(state.organisers(), state.events(), new_event).await?;
        Ok(row.into())
    }

    /// Partial update of an event; see `UpdateEventInput`.
    async fn update_event(&self, ctx: &Context<'_>, input: UpdateEventInput) -> Result<Event> {
        let state = ctx.data::<AppState>()?;
        let id = parse_id(&input.id)?;
        let organiser_id = parse_id(&input.organiser)?;

        let row = service::update_event(
            state.organisers(),
            state.events(),
            id,
            organiser_id,
            input.into_changes(),
        )
        .await?;
        Ok(row.into())
    }

    /// Deletes an event and returns its id.
    async fn delete_event(&self, ctx: &Context<'_>, id: ID) -> Result<ID> {
        let state = ctx.data::<AppState>()?;
        let id = parse_id(&id)?;

        let deleted = service::delete_event(state.events(), id).await?;
        Ok(ID(deleted.to_string()))
    }
}
