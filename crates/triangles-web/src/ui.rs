//! Browser front end: one page with both lookup forms.

use crate::params::{self, RawParams};
use crate::server::AppState;
use crate::view::{FinderPage, FormValues};
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use std::sync::Arc;
use triangles_grid::{FindTriangleRequest, ValidationOutcome};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/trianglefinder", get(index))
        .route("/trianglefinder/findbycoordinates", get(find_by_coordinates))
        .route("/trianglefinder/findbyvertices", get(find_by_vertices))
}

async fn index() -> Html<String> {
    Html(FinderPage::default().render())
}

async fn find_by_coordinates(
    State(state): State<Arc<AppState>>,
    Query(raw): Query<RawParams>,
) -> Html<String> {
    let form = FormValues {
        row: submitted(&raw, "row"),
        column: submitted(&raw, "column"),
        ..FormValues::default()
    };
    let request = params::coordinates_query(&raw).map(FindTriangleRequest::from);
    Html(lookup(&state, form, request).render())
}

async fn find_by_vertices(
    State(state): State<Arc<AppState>>,
    Query(raw): Query<RawParams>,
) -> Html<String> {
    let form = FormValues {
        vertices: ["x1", "y1", "x2", "y2", "x3", "y3"].map(|name| submitted(&raw, name)),
        ..FormValues::default()
    };
    let request = params::vertices_query(&raw).map(FindTriangleRequest::from);
    Html(lookup(&state, form, request).render())
}

/// Run the lookup. Rejected requests keep the submitted values on the page.
fn lookup(
    state: &AppState,
    form: FormValues,
    request: Result<FindTriangleRequest, ValidationOutcome>,
) -> FinderPage {
    match request.and_then(|request| state.finder.find(&request)) {
        Ok(finding) => FinderPage {
            form: FormValues::from_triangle(&finding.triangle),
            triangle: Some(finding.triangle),
            outcome: finding.outcome,
        },
        Err(outcome) => {
            tracing::debug!(%outcome, "rejected lookup");
            FinderPage {
                form,
                triangle: None,
                outcome,
            }
        }
    }
}

fn submitted(raw: &RawParams, name: &str) -> String {
    raw.iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}
