//! JSON API.
//!
//! - `200`: the triangle descriptor
//! - `400`: `{ "errors": [...] }` when the request is out of range or unbound
//! - `422`: `{ "triangle": ..., "errors": [...] }` when inferred vertices do
//!   not form a grid triangle

use crate::params::{self, RawParams};
use crate::server::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use triangles_grid::{Finding, FindTriangleRequest, TriangleDescriptor, ValidationOutcome};

/// API routes, mounted under `/api`.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/trianglefinder/findbycoordinates", get(find_by_coordinates))
        .route("/api/trianglefinder/findbyvertices", get(find_by_vertices))
        .route("/api/health", get(health))
}

pub(crate) async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    errors: ValidationOutcome,
}

#[derive(Debug, Serialize)]
struct InvalidTriangleBody {
    triangle: TriangleDescriptor,
    errors: ValidationOutcome,
}

async fn find_by_coordinates(
    State(state): State<Arc<AppState>>,
    Query(raw): Query<RawParams>,
) -> Response {
    let request = params::coordinates_query(&raw).map(FindTriangleRequest::from);
    answer(&state, request)
}

async fn find_by_vertices(
    State(state): State<Arc<AppState>>,
    Query(raw): Query<RawParams>,
) -> Response {
    let request = params::vertices_query(&raw).map(FindTriangleRequest::from);
    answer(&state, request)
}

fn answer(state: &AppState, request: Result<FindTriangleRequest, ValidationOutcome>) -> Response {
    match request.and_then(|request| state.finder.find(&request)) {
        Ok(finding) => found(finding),
        Err(errors) => {
            tracing::debug!(%errors, "rejected lookup");
            (StatusCode::BAD_REQUEST, Json(ErrorBody { errors })).into_response()
        }
    }
}

fn found(Finding { triangle, outcome }: Finding) -> Response {
    if outcome.is_valid() {
        if !outcome.is_empty() {
            tracing::debug!(%outcome, address = %triangle.address, "lookup notes");
        }
        return Json(triangle).into_response();
    }

    tracing::debug!(%outcome, address = %triangle.address, "vertices do not form a grid triangle");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(InvalidTriangleBody {
            triangle,
            errors: outcome,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use crate::server::{build_router, AppState};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn get(uri: &str) -> (StatusCode, Value) {
        let app = build_router(Arc::new(AppState::default()), true);
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn coordinates_return_descriptor() {
        let (status, body) = get("/api/trianglefinder/findbycoordinates?row=c&column=4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "row": "C", "column": 4,
                "x1": 10, "y1": 10, "x2": 10, "y2": 20, "x3": 20, "y3": 20,
                "isEstimated": false
            })
        );
    }

    #[tokio::test]
    async fn out_of_range_column_is_bad_request() {
        let (status, body) = get("/api/trianglefinder/findbycoordinates?row=A&column=13").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "errors": [{
                "field": "Column",
                "message": "Column must be between 1 and 12",
                "severity": "error"
            }]})
        );
    }

    #[tokio::test]
    async fn noisy_vertices_are_estimated() {
        let (status, body) =
            get("/api/trianglefinder/findbyvertices?x1=11&y1=9&x2=21&y2=12&x3=19&y3=18").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["row"], "C");
        assert_eq!(body["column"], 3);
        assert_eq!(body["isEstimated"], true);
        assert_eq!(body["y3"], 20);
    }

    #[tokio::test]
    async fn malformed_triangle_is_unprocessable_with_best_effort() {
        let (status, body) =
            get("/api/trianglefinder/findbyvertices?x1=0&y1=0&x2=0&y2=10&x3=20&y3=10").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["triangle"]["row"], "C");
        assert_eq!(body["errors"][0]["field"], "Summary");
    }

    #[tokio::test]
    async fn missing_parameters_are_reported_by_field() {
        let (status, body) = get("/api/trianglefinder/findbyvertices?x1=0&y1=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let errors = body["errors"].as_array().unwrap();
        let fields: Vec<_> = errors.iter().map(|e| e["field"].as_str().unwrap()).collect();
        assert_eq!(fields, vec!["X2", "Y2", "X3", "Y3"]);
    }
}
