//! Triangular Grid Addressing
//!
//! A fixed 6 x 12 grid of right triangles laid over a 60 x 60 coordinate
//! space. Every 10 x 10 cell is split along its diagonal into two triangles,
//! giving two columns per cell.
//!
//! # Coordinate Model
//!
//! Rows run along X (row `A` ends at X = 0, row `F` at X = 50) and columns run
//! along Y. Column parity decides orientation:
//! - even columns have two vertices on the top edge, the point at bottom-right
//! - odd columns have two vertices on the left edge, the point at top-right
//!
//! # Operations
//!
//! - [`triangle_at`] / [`find_by_coordinates`]: grid address to vertices
//! - [`find_by_vertices`]: three noisy vertices to the nearest grid address,
//!   snapping coordinates and checking the shape on the way
//!
//! Both operations validate their request first and report every violated
//! field together in a [`ValidationOutcome`]. [`TriangleFinder`] routes a
//! tagged [`FindTriangleRequest`] to the right operation.

mod convert;
mod finder;
mod infer;
mod request;
mod row;
mod triangle;
mod validation;
mod vertex;

pub use convert::{calculate_right_y, find_by_coordinates, triangle_at};
pub use finder::{Finding, TriangleFinder};
pub use infer::{
    find_by_vertices, identify_column, identify_row, is_valid_triangle, snap_vertices,
    validate_point_range, validate_point_spread, INVALID_TRIANGLE_MESSAGE,
};
pub use request::{CoordinatesQuery, FindTriangleRequest, RequestedRow, VerticesQuery};
pub use row::{Row, RowParseError};
pub use triangle::{GridAddress, TriangleDescriptor};
pub use validation::{Severity, Validate, ValidationFailure, ValidationOutcome};
pub use vertex::{snap_to_nearest_vertex, Vertex};

/// Number of rows in the grid.
pub const GRID_ROWS: i32 = 6;

/// Number of triangle columns in the grid (two per cell).
pub const GRID_COLUMNS: i32 = 12;

/// Side length of one grid cell in coordinate units.
pub const CELL_SIZE: i32 = 10;

/// Largest coordinate accepted on either axis.
pub const COORDINATE_MAX: i32 = 60;

/// Smallest coordinate accepted on either axis.
pub const COORDINATE_MIN: i32 = 0;

const _: () = assert!(GRID_ROWS * CELL_SIZE == COORDINATE_MAX);
const _: () = assert!(GRID_COLUMNS * CELL_SIZE == 2 * COORDINATE_MAX);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dimensions_cover_coordinate_space() {
        assert_eq!(GRID_ROWS * CELL_SIZE, COORDINATE_MAX);
        assert_eq!(GRID_COLUMNS / 2 * CELL_SIZE, COORDINATE_MAX);
        assert_eq!(Row::ALL.len() as i32, GRID_ROWS);
    }

    #[test]
    fn every_address_survives_a_trip_through_its_vertices() {
        for row in Row::ALL {
            for column in 1..=GRID_COLUMNS {
                let triangle = triangle_at(GridAddress::new(row, column));
                assert_eq!(identify_row(&triangle.vertices), row.index());
                assert_eq!(identify_column(&triangle.vertices), column);
                assert!(is_valid_triangle(&triangle.vertices));
            }
        }
    }

    #[test]
    fn finder_routes_both_request_kinds() {
        let finder = TriangleFinder::new();

        let by_coords = finder
            .find(&FindTriangleRequest::ByCoordinates(CoordinatesQuery::parse(Some("d"), 7)))
            .expect("valid coordinates");
        let by_vertices = finder
            .find(&FindTriangleRequest::ByVertices(VerticesQuery::from_vertices(
                by_coords.triangle.vertices,
            )))
            .expect("valid vertices");

        assert_eq!(by_coords.triangle, by_vertices.triangle);
    }
}
