//! HTTP-level tests for the route handlers.
//!
//! Each test serves the router on an ephemeral port and talks to it with a
//! real HTTP client.

use axum::Router;
use axum::routing::get;
use serde_json::{Value, json};

use super::*;
use crate::domain::{DirectionNames, TimeOfDay};
use crate::stations::{Clock, StationService};
use crate::upstream::{Fetcher, MockFetcher, UpstreamClient, UpstreamConfig};

const PAYLOAD: &str = r#"[
    {"nid": "38", "title": "Lebak Bulus Grab",
     "jadwal_lb_biasa": "08:00,23:59", "jadwal_hi_biasa": "08:30"},
    {"nid": "40", "title": "Cipete Raya",
     "jadwal_lb_biasa": "13:00,1:15", "jadwal_hi_biasa": ""}
]"#;

/// Serve `router` on an ephemeral local port and return its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_app<F: Fetcher + 'static>(fetcher: F, upstream: &UpstreamConfig) -> String {
    let noon = TimeOfDay::parse_hhmm("12:00").unwrap();
    let service = StationService::new(fetcher, upstream, DirectionNames::default())
        .with_clock(Clock::Frozen(noon));
    spawn(create_router(AppState::new(service))).await
}

async fn spawn_mock_app(mock: MockFetcher) -> String {
    spawn_app(mock, &UpstreamConfig::new()).await
}

async fn get_json(url: &str) -> (u16, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn health_check() {
    let base = spawn_mock_app(MockFetcher::failing(500)).await;
    let body = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn list_stations_envelope() {
    let base = spawn_mock_app(MockFetcher::new(PAYLOAD)).await;

    let (status, body) = get_json(&format!("{base}/stations")).await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Success get all stations",
            "data": [
                {"id": "38", "name": "Lebak Bulus Grab"},
                {"id": "40", "name": "Cipete Raya"}
            ]
        })
    );
}

#[tokio::test]
async fn station_schedules_envelope() {
    let base = spawn_mock_app(MockFetcher::new(PAYLOAD)).await;

    let (status, body) = get_json(&format!("{base}/stations/38")).await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Successfully get schedules by station",
            "data": [{"stationName": "Stasiun Lebak Bulus Grab", "time": "23:59"}]
        })
    );
}

#[tokio::test]
async fn unknown_station_is_bad_request() {
    let base = spawn_mock_app(MockFetcher::new(PAYLOAD)).await;

    let (status, body) = get_json(&format!("{base}/stations/99")).await;

    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({"success": false, "message": "Station not found", "data": null})
    );
}

#[tokio::test]
async fn malformed_time_is_bad_request() {
    let base = spawn_mock_app(MockFetcher::new(PAYLOAD)).await;

    let (status, body) = get_json(&format!("{base}/stations/40")).await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "Invalid time format 1:15");
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn malformed_upstream_is_bad_request() {
    let base = spawn_mock_app(MockFetcher::new("not json")).await;

    for path in ["/stations", "/stations/38"] {
        let (status, body) = get_json(&format!("{base}{path}")).await;
        assert_eq!(status, 400, "{path}");
        assert_eq!(body["success"], false);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("invalid upstream data"),
            "{path}: {body}"
        );
    }
}

#[tokio::test]
async fn upstream_failure_is_bad_request() {
    let base = spawn_mock_app(MockFetcher::failing(503)).await;

    let (status, body) = get_json(&format!("{base}/stations")).await;

    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("503"));
}

#[tokio::test]
async fn end_to_end_through_http_upstream() {
    let upstream_base =
        spawn(Router::new().route("/id/val/stasiuns", get(|| async { PAYLOAD }))).await;
    let upstream = UpstreamConfig::new().with_url(format!("{upstream_base}/id/val/stasiuns"));
    let client = UpstreamClient::new(&upstream).unwrap();
    let base = spawn_app(client, &upstream).await;

    let (status, body) = get_json(&format!("{base}/stations")).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, body) = get_json(&format!("{base}/stations/38")).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"][0]["time"], "23:59");
}
