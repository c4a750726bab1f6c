use async_graphql::{Context, Json, Object, Result, ID};
use infra::filter::OrganiserFilter;

use super::service;
use super::types::{CreateOrganiserInput, Organiser, UpdateOrganiserInput};
use crate::gql::error::parse_id;
use crate::state::AppState;

#[derive(Default)]
pub struct OrganiserQuery;

#[Object]
impl OrganiserQuery {
    /// Organiser by id, or null when no such organiser exists.
    async fn organiser(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Organiser>> {
        let state = ctx.data::<AppState>()?;
        let id = parse_id(&id)?;

        let row = service::read_organiser(state.organisers(), id).await?;
        Ok(row.map(Organiser::from))
    }

    /// All organisers matching the optional filter (`name`, `description`).
    async fn organisers(
        &self,
        ctx: &Context<'_>,
        filter: Option<Json<OrganiserFilter>>,
    ) -> Result<Vec<Organiser>> {
        let state = ctx.data::<AppState>()?;
        let filter = filter.map(|Json(filter)| filter);

        let rows = service::list_organisers(state.organisers(), filter.as_ref()).await?;
        Ok(rows.into_iter().map(Organiser::from).collect())
    }
}

#[derive(Default)]
pub struct OrganiserMutation;

#[Object]
impl OrganiserMutation {
    async fn create_organiser(
        &self,
        ctx: &Context<'_>,
        input: CreateOrganiserInput,
    ) -> Result<Organiser> {
        let state = ctx.data::<AppState>()?;

        let row = service::create_organiser(state.organisers(), input.into()).await?;
        Ok(row.into())
    }

    /// Overwrites name, logo and description of an organiser.
    async fn update_organiser(
        &self,
        ctx: &Context<'_>,
        input: UpdateOrganiserInput,
    ) -> Result<Organiser> {
        let state = ctx.data::<AppState>()?;
        let id = parse_id(&input.id)?;

        let row = service::update_organiser(state.organisers(), id, input.into_fields()).await?;
        Ok(row.into())
    }

    /// Deletes an organiser along with its events and returns its id.
    async fn delete_organiser(&self, ctx: &Context<'_>, id: ID) -> Result<ID> {
        let state = ctx.data::<AppState>()?;
        let id = parse_id(&id)?;

        let deleted = service::delete_organiser(state.organisers(), id).await?;
        Ok(ID(deleted.to_string()))
    }
}
