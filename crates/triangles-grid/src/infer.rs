//! Vertex inference: three raw points to the nearest grid triangle.
//!
//! # Pipeline
//!
//! 1. Range-check the six coordinates (blocking)
//! 2. Snap each coordinate to the nearest grid line
//! 3. Check the snapped points form a one-cell right triangle (non-blocking)
//! 4. Row from the largest X, column from the repeated Y
//!
//! A shape failure does not stop the lookup. The best-effort triangle is
//! returned together with a `Summary` error so the caller can decide what to
//! show.

use crate::finder::Finding;
use crate::request::VerticesQuery;
use crate::validation::{Validate, ValidationOutcome};
use crate::{GridAddress, TriangleDescriptor, Vertex, CELL_SIZE};

/// Message recorded when the snapped points are not a grid triangle.
pub const INVALID_TRIANGLE_MESSAGE: &str =
    "Entered Triangle Vertices Are Invalid and no triangle could be inferred.";

/// Snap every coordinate, reporting whether any of them moved.
pub fn snap_vertices(vertices: [Vertex; 3]) -> ([Vertex; 3], bool) {
    let snapped = vertices.map(|v| v.snapped());
    let estimated = snapped != vertices;
    (snapped, estimated)
}

/// True when `a` and `b` are exactly one cell apart.
pub fn validate_point_spread(a: i32, b: i32) -> bool {
    (a - b).abs() == CELL_SIZE
}

/// One axis of the shape check: exactly two values equal and the odd one
/// out one cell away.
pub fn validate_point_range(v1: i32, v2: i32, v3: i32) -> bool {
    let all_distinct = v1 != v2 && v2 != v3 && v1 != v3;
    let all_equal = v1 == v2 && v2 == v3;
    if all_distinct || all_equal {
        return false;
    }

    if v1 == v2 || v2 == v3 {
        validate_point_spread(v1, v3)
    } else {
        validate_point_spread(v2, v3)
    }
}

/// True when the points form a one-cell right triangle on both axes.
pub fn is_valid_triangle(vertices: &[Vertex; 3]) -> bool {
    let [a, b, c] = vertices;
    validate_point_range(a.x, b.x, c.x) && validate_point_range(a.y, b.y, c.y)
}

/// Row index holding the triangle: the row whose bottom edge is the largest X.
pub fn identify_row(vertices: &[Vertex; 3]) -> i32 {
    let max_x = vertices.iter().map(|v| v.x).max().unwrap_or_default();
    max_x / CELL_SIZE
}

/// Column from the repeated Y value ("double") and the lone one ("single").
///
/// Pairs are tried in the order Y1/Y2 then Y2/Y3; when neither matches, Y1
/// is taken as the double and Y2 as the single. A double above the single
/// means the pair sits on the right edge (even column).
pub fn identify_column(vertices: &[Vertex; 3]) -> i32 {
    let [y1, y2, y3] = vertices.map(|v| v.y);

    let (double, single) = if y1 == y2 {
        (y1, y3)
    } else if y2 == y3 {
        (y2, y1)
    } else {
        (y1, y2)
    };

    let cell = double / CELL_SIZE;
    if double > single {
        cell * 2
    } else {
        cell * 2 + 1
    }
}

/// Validate a vertices query and infer the nearest grid triangle.
pub fn find_by_vertices(query: &VerticesQuery) -> Result<Finding, ValidationOutcome> {
    let mut outcome = query.validate();
    if !outcome.is_valid() {
        return Err(outcome);
    }

    let (vertices, is_estimated) = snap_vertices(query.vertices);

    if !is_valid_triangle(&vertices) {
        outcome.error("Summary", INVALID_TRIANGLE_MESSAGE);
    }

    let address = GridAddress {
        row: identify_row(&vertices),
        column: identify_column(&vertices),
    };

    if !address.row_on_grid() {
        outcome.warning(
            "Row",
            format!("Inferred row {} lies outside the grid", address.row_label()),
        );
    }
    if !address.column_on_grid() {
        outcome.warning(
            "Column",
            format!("Inferred column {} lies outside the grid", address.column),
        );
    }

    Ok(Finding {
        triangle: TriangleDescriptor {
            address,
            vertices,
            is_estimated,
        },
        outcome,
    })
}
