use std::sync::Arc;
use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{BoxError, Json, Router};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use walkway_core::model::WalkwayNetwork;
use walkway_core::routing::{PathQuery, RouteLeg, WalkRoute};
use walkway_core::{Degrees, Meters, NodeId};

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub network: Arc<WalkwayNetwork>,
    pub default_max_angle: Degrees,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/meta", get(meta))
        .route("/api/nodes", get(nodes))
        .route("/api/route", get(route_summary))
        .route("/api/route/geojson", get(route_geojson))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(Duration::from_secs(30))
                .concurrency_limit(64),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn handle_middleware_error(err: BoxError) -> (StatusCode, String) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (StatusCode::REQUEST_TIMEOUT, "Request timed out".to_string())
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Internal error: {err}"),
        )
    }
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

#[derive(Serialize)]
struct MetaResponse {
    /// Map view center as [lat, lon]
    center: Option<[f64; 2]>,
    nodes: usize,
    edges: usize,
}

async fn meta(State(state): State<AppState>) -> Json<MetaResponse> {
    let center = state.network.centroid().map(|p| [p.y(), p.x()]);
    Json(MetaResponse {
        center,
        nodes: state.network.nodes().len(),
        edges: state.network.edges().len(),
    })
}

#[derive(Serialize)]
struct NodeOption {
    id: NodeId,
    description: Option<String>,
}

async fn nodes(State(state): State<AppState>) -> Json<Vec<NodeOption>> {
    let mut options: Vec<NodeOption> = state
        .network
        .nodes()
        .iter()
        .map(|node| NodeOption {
            id: node.id,
            description: node.description.clone(),
        })
        .collect();
    options.sort_by_key(|option| option.id);
    Json(options)
}

#[derive(Deserialize)]
struct RouteParams {
    start: String,
    end: String,
    max_angle: Option<Degrees>,
}

#[derive(Serialize)]
struct RouteResponse {
    total_distance_m: Meters,
    legs: Vec<RouteLeg>,
}

fn solve(state: &AppState, params: &RouteParams) -> Result<WalkRoute, ApiError> {
    let query = PathQuery {
        start: state.network.resolve(&params.start)?,
        end: state.network.resolve(&params.end)?,
        max_angle: params.max_angle.unwrap_or(state.default_max_angle),
    };

    state
        .network
        .shortest_path(&query)
        .map_err(ApiError::from)?
        .ok_or(ApiError::NoPath)
}

async fn route_summary(
    State(state): State<AppState>,
    Query(params): Query<RouteParams>,
) -> Result<Json<RouteResponse>, ApiError> {
    let route = solve(&state, &params)?;
    Ok(Json(RouteResponse {
        total_distance_m: route.total_distance,
        legs: route.legs,
    }))
}

async fn route_geojson(
    State(state): State<AppState>,
    Query(params): Query<RouteParams>,
) -> Result<impl IntoResponse, ApiError> {
    let route = solve(&state, &params)?;
    let body = route.to_geojson_string(&state.network)?;
    Ok(([(header::CONTENT_TYPE, "application/geo+json")], body))
}
