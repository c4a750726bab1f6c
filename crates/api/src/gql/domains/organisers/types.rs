use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};
use infra::models::{NewOrganiser, OrganiserRow};

use super::service::OrganiserFields;
use crate::gql::domains::events::types::Event;
use crate::gql::error::GqlError;
use crate::gql::loaders::OrganiserEventsLoader;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Organiser {
    pub id: ID,
    pub name: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    #[graphql(skip)]
    pub pk: i64,
}

impl From<OrganiserRow> for Organiser {
    fn from(row: OrganiserRow) -> Self {
        Self {
            id: ID(row.id.to_string()),
            name: row.name,
            logo: row.logo,
            description: row.description,
            pk: row.id,
        }
    }
}

#[ComplexObject]
impl Organiser {
    /// Events currently referencing this organiser, looked up on demand.
    async fn events(&self, ctx: &Context<'_>) -> Result<Vec<Event>> {
        let loader = ctx.data::<DataLoader<OrganiserEventsLoader>>()?;

        let rows = loader
            .load_one(self.pk)
            .await
            .map_err(GqlError::from)?
            .unwrap_or_default();

        Ok(rows.into_iter().map(Event::from).collect())
    }
}

#[derive(InputObject)]
pub struct CreateOrganiserInput {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
}

impl From<CreateOrganiserInput> for NewOrganiser {
    fn from(input: CreateOrganiserInput) -> Self {
        Self {
            name: input.name,
            logo: input.logo,
            description: input.description,
        }
    }
}

/// Full overwrite: every field is written, and an omitted field becomes null.
#[derive(InputObject)]
pub struct UpdateOrganiserInput {
    pub id: ID,
    pub name: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
}

impl UpdateOrganiserInput {
    pub fn into_fields(self) -> OrganiserFields {
        OrganiserFields {
            name: self.name,
            logo: self.logo,
            description: self.description,
        }
    }
}
