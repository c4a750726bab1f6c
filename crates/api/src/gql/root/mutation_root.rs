use async_graphql::MergedObject;

use crate::gql::domains::events::EventMutation;
use crate::gql::domains::organisers::OrganiserMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(EventMutation, OrganiserMutation);
