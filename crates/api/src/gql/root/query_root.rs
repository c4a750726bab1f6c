use async_graphql::MergedObject;

use crate::gql::domains::events::EventQuery;
use crate::gql::domains::organisers::OrganiserQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(EventQuery, OrganiserQuery);
