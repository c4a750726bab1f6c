use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema};

use super::loaders::{OrganiserEventsLoader, OrganiserLoader};
use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState, introspection_enabled: bool) -> AppSchema {
    let organiser_loader = DataLoader::new(
        OrganiserLoader::new(state.organiser_repo()),
        tokio::spawn,
    );
    let organiser_events_loader =
        DataLoader::new(OrganiserEventsLoader::new(state.event_repo()), tokio::spawn);

    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state) // AppState is Clone; available in resolvers via ctx.data::<AppState>()
    .data(organiser_loader)
    .data(organiser_events_loader)
    .limit_depth(10)
    .limit_complexity(200);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
