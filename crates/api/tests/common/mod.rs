use api::gql::{build_schema, AppSchema};
use api::AppState;
use async_graphql::{Request, Variables};
use infra::models::{NewEvent, NewOrganiser};

pub fn setup_test_state() -> AppState {
    AppState::in_memory()
}

pub fn setup_schema(app_state: &AppState) -> AppSchema {
    build_schema(app_state.clone(), false)
}

/// Helper function to execute GraphQL queries and mutations
pub async fn execute_graphql(
    schema: &AppSchema,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}

/// Runs a document that must succeed and returns its data as JSON.
#[allow(dead_code)]
pub async fn execute_ok(
    schema: &AppSchema,
    query: &str,
    variables: Option<Variables>,
) -> serde_json::Value {
    let response = execute_graphql(schema, query, variables).await;
    assert!(
        response.errors.is_empty(),
        "GraphQL request should succeed: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

/// Runs a document that must fail and returns the first error message.
#[allow(dead_code)]
pub async fn execute_err(schema: &AppSchema, query: &str, variables: Option<Variables>) -> String {
    let response = execute_graphql(schema, query, variables).await;
    assert!(
        !response.errors.is_empty(),
        "GraphQL request should fail, got {:?}",
        response.data
    );
    response.errors[0].message.clone()
}

/// Create test organiser directly in the store and return its ID
#[allow(dead_code)]
pub async fn create_test_organiser(app_state: &AppState, name: &str) -> i64 {
    app_state
        .organisers()
        .insert(NewOrganiser {
            name: Some(name.to_string()),
            logo: Some(format!("https://cdn.example/{}.png", name.to_lowercase())),
            description: Some(format!("{name} puts on live music")),
        })
        .await
        .expect("Failed to create test organiser")
        .id
}

/// Create test event directly in the store and return its ID
#[allow(dead_code)]
pub async fn create_test_event(
    app_state: &AppState,
    organiser_id: i64,
    name: &str,
    venue: &str,
    venue_location: &str,
) -> i64 {
    app_state
        .events()
        .insert(NewEvent {
            organiser_id,
            name: Some(name.to_string()),
            description: Some(format!("{name} at {venue}")),
            venue: Some(venue.to_string()),
            venue_location: Some(venue_location.to_string()),
            availability: Some(150),
            date: Some("2024-10-31".to_string()),
            image: Some("poster.jpg".to_string()),
            price: Some(20.0),
        })
        .await
        .expect("Failed to create test event")
        .id
}
