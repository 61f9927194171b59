use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use geo::Point;
use serde_json::Value;
use tower::ServiceExt;

use walkway_core::model::{WalkEdge, WalkNode, WalkwayNetwork};
use walkway_server::routes::{AppState, router};

fn node(id: i64, lat: f64, lon: f64, description: Option<&str>) -> WalkNode {
    WalkNode {
        id,
        geometry: Point::new(lon, lat),
        description: description.map(str::to_string),
    }
}

fn edge(from: i64, to: i64, distance: f64, angle: f64) -> WalkEdge {
    WalkEdge {
        from,
        to,
        distance,
        angle,
        allowed: true,
    }
}

fn test_app() -> Router {
    let nodes = vec![
        node(3, 37.5505, 127.0750, Some("Library")),
        node(1, 37.5500, 127.0730, Some("Main Gate")),
        node(2, 37.5510, 127.0740, None),
    ];
    let edges = vec![
        edge(1, 2, 10.0, 5.0),
        edge(2, 3, 12.0, 35.0),
        edge(1, 3, 30.0, 2.0),
    ];
    let network = WalkwayNetwork::new(nodes, edges).unwrap();

    router(AppState {
        network: Arc::new(network),
        default_max_angle: 1000.0,
    })
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn lists_nodes_sorted_by_id() {
    let (status, body) = get("/api/nodes").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|option| option["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [1, 2, 3]);
    assert_eq!(body[0]["description"], "Main Gate");
    assert_eq!(body[1]["description"], Value::Null);
}

#[tokio::test]
async fn meta_reports_center_and_counts() {
    let (status, body) = get("/api/meta").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nodes"], 3);
    assert_eq!(body["edges"], 3);
    let center = body["center"].as_array().unwrap();
    assert!((center[0].as_f64().unwrap() - 37.5505).abs() < 1e-9);
    assert!((center[1].as_f64().unwrap() - 127.0740).abs() < 1e-9);
}

#[tokio::test]
async fn routes_between_named_locations() {
    let (status, body) = get("/api/route?start=Main%20Gate&end=Library").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_distance_m"], 22.0);
    assert_eq!(body["legs"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn strict_angle_threshold_forces_direct_edge() {
    let (status, body) = get("/api/route?start=1&end=3&max_angle=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_distance_m"], 30.0);
    assert_eq!(body["legs"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn no_feasible_path_is_404() {
    // No edges point back to node 1.
    let (status, body) = get("/api/route?start=3&end=1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No path satisfies the given constraints");
}

#[tokio::test]
async fn unknown_location_is_400() {
    let (status, body) = get("/api/route?start=Cafeteria&end=1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown location: Cafeteria");
}

#[tokio::test]
async fn geojson_endpoint_returns_feature_collection() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/route/geojson?start=1&end=3&max_angle=10")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/geo+json"
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["type"], "FeatureCollection");
    // One leg renders a line plus two markers.
    assert_eq!(body["features"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn index_serves_the_map_page() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("Campus Walkway Router"));
}
