use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use serde_json::json;

use crate::analysis::annotator::test_helpers::FailingAnnotator;
use crate::analysis::suggest::{EMPTY_INPUT_GUIDANCE, FALLBACK_SUGGESTIONS};
use crate::routes::test_support::{post_json, send, test_app};
use crate::state::test_helpers::{test_app_state, test_app_state_with_annotator};

// =========================================================================
// suggest
// =========================================================================

#[tokio::test]
async fn suggest_returns_up_to_three() {
    let app = test_app(test_app_state());
    let (status, body) = send(app, post_json("/api/suggest", &json!({ "text": "Improve Grafana dashboards" }))).await;
    assert_eq!(status, StatusCode::OK);
    let suggestions = body["suggestions"].as_array().unwrap();
    assert!((1..=3).contains(&suggestions.len()));
}

#[tokio::test]
async fn suggest_requires_text() {
    for body in [json!({}), json!({ "text": "" }), json!({ "text": null })] {
        let (status, json) = send(test_app(test_app_state()), post_json("/api/suggest", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "text required");
    }
}

#[tokio::test]
async fn suggest_whitespace_text_gets_guidance() {
    let (status, body) = send(test_app(test_app_state()), post_json("/api/suggest", &json!({ "text": "   " }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestions"], json!([EMPTY_INPUT_GUIDANCE]));
}

#[tokio::test]
async fn suggest_degrades_when_annotator_is_down() {
    let app = test_app(test_app_state_with_annotator(Arc::new(FailingAnnotator::always())));
    let (status, body) = send(app, post_json("/api/suggest", &json!({ "text": "anything" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestions"], json!(FALLBACK_SUGGESTIONS));
}

// =========================================================================
// cluster
// =========================================================================

#[tokio::test]
async fn cluster_partitions_cards() {
    let cards = json!([
        { "id": "a", "text": "Migrate billing to Stripe" },
        { "id": "b", "text": "Review Stripe webhooks" },
        { "id": "c", "text": "" },
        { "id": "d" }
    ]);
    let (status, body) = send(test_app(test_app_state()), post_json("/api/cluster", &json!({ "cards": cards }))).await;
    assert_eq!(status, StatusCode::OK);
    let clusters = body["clusters"].as_array().unwrap();
    assert_eq!(clusters[0], json!({ "label": "Stripe", "ids": ["a", "b"] }));
    assert_eq!(clusters[1], json!({ "label": "Other", "ids": ["c", "d"] }));
}

#[tokio::test]
async fn cluster_requires_cards() {
    let (status, body) = send(test_app(test_app_state()), post_json("/api/cluster", &json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "cards array required");
}

#[tokio::test]
async fn cluster_falls_back_to_all_items() {
    let app = test_app(test_app_state_with_annotator(Arc::new(FailingAnnotator::always())));
    let cards = json!([{ "id": "a", "text": "one" }, { "id": "b", "text": "two" }]);
    let (status, body) = send(app, post_json("/api/cluster", &json!({ "cards": cards }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clusters"], json!([{ "label": "All Items", "ids": ["a", "b"] }]));
}

// =========================================================================
// summarize
// =========================================================================

#[tokio::test]
async fn summarize_returns_camel_case_summary() {
    let board = json!({
        "columns": [
            { "id": "col-1", "title": "To Do", "cards": [
                { "id": "1", "text": "Automate release notes" },
                { "id": "2", "text": "" }
            ]},
            { "id": "col-2", "title": "Done", "cards": [{ "id": "3", "text": "Improve release dashboards" }] }
        ]
    });
    let (status, body) = send(test_app(test_app_state()), post_json("/api/summarize", &json!({ "board": board }))).await;
    assert_eq!(status, StatusCode::OK);
    let summary = &body["summary"];
    assert_eq!(summary["themes"][0], "notes");
    assert_eq!(summary["topIdeas"].as_array().unwrap().len(), 2);
    assert_eq!(summary["nextSteps"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn summarize_requires_board() {
    let (status, body) = send(test_app(test_app_state()), post_json("/api/summarize", &json!({ "cards": [] }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "board required");
}

#[tokio::test]
async fn summarize_fallback_is_still_200() {
    let app = test_app(test_app_state_with_annotator(Arc::new(FailingAnnotator::always())));
    let board = json!({ "columns": [{ "id": "c", "title": "t", "cards": [{ "id": "1", "text": "x" }] }] });
    let (status, body) = send(app, post_json("/api/summarize", &json!({ "board": board }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["themes"], json!(["Innovation", "Efficiency", "Quality"]));
    assert_eq!(body["summary"]["topIdeas"], json!(["x"]));
}

// =========================================================================
// mood / search
// =========================================================================

#[tokio::test]
async fn mood_classifies_text() {
    let (status, body) =
        send(test_app(test_app_state()), post_json("/api/mood", &json!({ "text": "so many errors" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mood"], "negative");
}

#[tokio::test]
async fn search_filters_cards_in_order() {
    let cards = json!([
        { "id": "1", "text": "Onboarding checklist" },
        { "id": "2", "text": "billing" },
        { "id": "3", "text": "new ONBOARDING video" }
    ]);
    let (status, body) =
        send(test_app(test_app_state()), post_json("/api/search", &json!({ "query": "onboarding", "cards": cards }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["results"],
        json!([{ "id": "1", "text": "Onboarding checklist" }, { "id": "3", "text": "new ONBOARDING video" }])
    );
}

#[tokio::test]
async fn search_empty_query_clears_results() {
    let body = json!({ "query": "", "cards": [{ "id": "1", "text": "anything" }] });
    let (status, json) = send(test_app(test_app_state()), post_json("/api/search", &body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["results"], json!([]));
}

#[tokio::test]
async fn search_requires_query_and_cards() {
    let (status, body) = send(test_app(test_app_state()), post_json("/api/search", &json!({ "query": "x" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "query and cards required");
}

// =========================================================================
// mistyped bodies
// =========================================================================

#[tokio::test]
async fn mistyped_fields_get_the_route_validation_error() {
    let cases = [
        ("/api/cluster", json!({ "cards": "nope" }), "cards array required"),
        ("/api/summarize", json!({ "board": ["col"] }), "board required"),
        ("/api/search", json!({ "query": 7, "cards": [] }), "query and cards required"),
        ("/api/search", json!({ "query": "a", "cards": { "id": "1" } }), "query and cards required"),
        ("/api/suggest", json!({ "text": 42 }), "text required"),
        ("/api/mood", json!({ "text": ["so", "good"] }), "text required"),
    ];
    for (uri, body, message) in cases {
        let (status, json) = send(test_app(test_app_state()), post_json(uri, &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} {body}");
        assert_eq!(json, json!({ "error": message }), "{uri} {body}");
    }
}

#[tokio::test]
async fn unparsable_json_is_a_validation_error() {
    let request = Request::post("/api/cluster")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"cards\": ["))
        .unwrap();
    let (status, json) = send(test_app(test_app_state()), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "cards array required");
}
