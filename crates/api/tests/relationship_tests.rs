mod common;

use common::*;
use serde_json::json;

#[tokio::test]
async fn test_organiser_events_and_event_organiser_round_trip() {
    let app_state = setup_test_state();
    let schema = setup_schema(&app_state);

    let data = execute_ok(
        &schema,
        r#"mutation { createOrganiser(input: { name: "Hot Press", logo: "hp.png", description: "Magazine" }) { id } }"#,
        None,
    )
    .await;
    let organiser_id = data["createOrganiser"]["id"].as_str().unwrap().to_string();

    let data = execute_ok(
        &schema,
        &format!(
            r#"mutation {{
                createEvent(input: {{ name: "Awards", organiser: "{organiser_id}", venue: "Olympia" }}) {{ id }}
            }}"#
        ),
        None,
    )
    .await;
    let event_id = data["createEvent"]["id"].as_str().unwrap().to_string();

    let data = execute_ok(
        &schema,
        &format!(r#"query {{ organiser(id: "{organiser_id}") {{ events {{ id name }} }} }}"#),
        None,
    )
    .await;
    assert_eq!(
        data["organiser"]["events"],
        json!([{ "id": event_id, "name": "Awards" }])
    );

    let data = execute_ok(
        &schema,
        &format!(r#"query {{ event(id: "{event_id}") {{ organiser {{ id name }} }} }}"#),
        None,
    )
    .await;
    assert_eq!(
        data["event"]["organiser"],
        json!({ "id": organiser_id, "name": "Hot Press" })
    );
}

#[tokio::test]
async fn test_back_reference_follows_organiser_reassignment() {
    let app_state = setup_test_state();
    let schema = setup_schema(&app_state);
    let first = create_test_organiser(&app_state, "First").await;
    let second = create_test_organiser(&app_state, "Second").await;
    let event_id = create_test_event(&app_state, first, "Moved Gig", "Whelans", "Dublin").await;

    execute_ok(
        &schema,
        &format!(
            r#"mutation {{ updateEvent(input: {{ id: "{event_id}", organiser: "{second}" }}) {{ id }} }}"#
        ),
        None,
    )
    .await;

    let data = execute_ok(
        &schema,
        "query { organisers { name events { name } } }",
        None,
    )
    .await;
    assert_eq!(
        data,
        json!({
            "organisers": [
                { "name": "First", "events": [] },
                { "name": "Second", "events": [{ "name": "Moved Gig" }] }
            ]
        })
    );
}

#[tokio::test]
async fn test_nested_lists_resolve_every_organiser() {
    let app_state = setup_test_state();
    let schema = setup_schema(&app_state);
    let aiken = create_test_organiser(&app_state, "Aiken").await;
    let mcd = create_test_organiser(&app_state, "MCD").await;
    create_test_event(&app_state, aiken, "A1", "Vicar Street", "Dublin").await;
    create_test_event(&app_state, mcd, "M1", "3Arena", "Dublin").await;
    create_test_event(&app_state, aiken, "A2", "Olympia", "Dublin").await;

    let data = execute_ok(
        &schema,
        "query { events { name organiser { name } } }",
        None,
    )
    .await;

    assert_eq!(
        data,
        json!({
            "events": [
                { "name": "A1", "organiser": { "name": "Aiken" } },
                { "name": "M1", "organiser": { "name": "MCD" } },
                { "name": "A2", "organiser": { "name": "Aiken" } }
            ]
        })
    );
}

#[tokio::test]
async fn test_deleting_organiser_removes_its_events() {
    let app_state = setup_test_state();
    let schema = setup_schema(&app_state);
    let organiser_id = create_test_organiser(&app_state, "Gone").await;
    let event_id = create_test_event(&app_state, organiser_id, "Cancelled", "Whelans", "Dublin").await;

    execute_ok(
        &schema,
        &format!(r#"mutation {{ deleteOrganiser(id: "{organiser_id}") }}"#),
        None,
    )
    .await;

    let data = execute_ok(
        &schema,
        &format!(r#"query {{ event(id: "{event_id}") {{ id }} }}"#),
        None,
    )
    .await;
    assert_eq!(data, json!({ "event": null }));
}
