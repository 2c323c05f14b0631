//! Grid address to triangle vertices.

use crate::finder::Finding;
use crate::request::{CoordinatesQuery, RequestedRow};
use crate::validation::{Validate, ValidationOutcome};
use crate::{GridAddress, TriangleDescriptor, Vertex, CELL_SIZE};

/// Y coordinate of the right-hand edge of a column's cell.
///
/// Columns come in pairs per cell, so odd columns are rounded up to their
/// even partner before halving.
pub fn calculate_right_y(column: i32) -> i32 {
    let paired = if column % 2 == 1 { column + 1 } else { column };
    paired / 2 * CELL_SIZE
}

/// Vertices of the triangle at `address`.
///
/// Row A yields a top edge at X = -10; callers relying on the grid staying
/// inside `[0, 60]` must account for that.
pub fn triangle_at(address: GridAddress) -> TriangleDescriptor {
    let bottom_x = address.row * CELL_SIZE;
    let top_x = bottom_x - CELL_SIZE;
    let right_y = calculate_right_y(address.column);
    let left_y = right_y - CELL_SIZE;

    let vertices = if address.column % 2 == 0 {
        // two on top, vertical edge on the right
        [
            Vertex::new(top_x, left_y),
            Vertex::new(top_x, right_y),
            Vertex::new(bottom_x, right_y),
        ]
    } else {
        // two on the bottom, vertical edge on the left
        [
            Vertex::new(top_x, left_y),
            Vertex::new(bottom_x, left_y),
            Vertex::new(bottom_x, right_y),
        ]
    };

    TriangleDescriptor {
        address,
        vertices,
        is_estimated: false,
    }
}

/// Validate a coordinates query and look up its triangle.
pub fn find_by_coordinates(query: &CoordinatesQuery) -> Result<Finding, ValidationOutcome> {
    let outcome = query.validate();

    match query.row {
        RequestedRow::Known(row) if outcome.is_valid() => Ok(Finding {
            triangle: triangle_at(GridAddress::new(row, query.column)),
            outcome,
        }),
        _ => Err(outcome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Row;

    fn vertices(row: Row, column: i32) -> [(i32, i32); 3] {
        triangle_at(GridAddress::new(row, column))
            .vertices
            .map(|v| (v.x, v.y))
    }

    #[test]
    fn right_y_pairs_columns() {
        assert_eq!(calculate_right_y(1), 10);
        assert_eq!(calculate_right_y(2), 10);
        assert_eq!(calculate_right_y(3), 20);
        assert_eq!(calculate_right_y(11), 60);
        assert_eq!(calculate_right_y(12), 60);
    }

    #[test]
    fn odd_column_shares_left_edge() {
        assert_eq!(vertices(Row::C, 3), [(10, 10), (20, 10), (20, 20)]);
    }

    #[test]
    fn even_column_shares_top_edge() {
        assert_eq!(vertices(Row::C, 4), [(10, 10), (10, 20), (20, 20)]);
    }

    #[test]
    fn row_a_reaches_negative_x() {
        assert_eq!(vertices(Row::A, 1), [(-10, 0), (0, 0), (0, 10)]);
        assert_eq!(vertices(Row::A, 2), [(-10, 0), (-10, 10), (0, 10)]);
    }

    #[test]
    fn far_corner() {
        assert_eq!(vertices(Row::F, 12), [(40, 50), (40, 60), (50, 60)]);
    }

    #[test]
    fn converted_triangles_are_exact() {
        let found = find_by_coordinates(&CoordinatesQuery::parse(Some("e"), 9)).unwrap();
        assert!(!found.triangle.is_estimated);
        assert!(found.outcome.is_empty());
        assert_eq!(found.triangle.address, GridAddress::new(Row::E, 9));
    }

    #[test]
    fn invalid_query_computes_nothing() {
        let err = find_by_coordinates(&CoordinatesQuery::parse(Some("B"), 13)).unwrap_err();
        assert!(err.has_field("Column"));

        let err = find_by_coordinates(&CoordinatesQuery::parse(None, 6)).unwrap_err();
        assert!(err.has_field("Row"));
        assert!(!err.has_field("Column"));
    }
}
