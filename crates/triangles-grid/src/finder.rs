//! Request routing.

use crate::request::{CoordinatesQuery, FindTriangleRequest, VerticesQuery};
use crate::validation::ValidationOutcome;
use crate::{convert, infer, TriangleDescriptor};

/// A located triangle plus any non-blocking validation entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub triangle: TriangleDescriptor,
    /// Entries that did not block the lookup (shape errors, off-grid notes)
    pub outcome: ValidationOutcome,
}

impl Finding {
    /// False when the inferred triangle failed the shape check.
    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }
}

/// Dispatches lookup requests to the conversion or inference routine.
///
/// Holds no state; one instance can serve any number of concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleFinder;

impl TriangleFinder {
    pub const fn new() -> Self {
        Self
    }

    /// Validate and answer a request.
    ///
    /// Returns the validation outcome instead of a triangle when the request
    /// is out of range.
    pub fn find(&self, request: &FindTriangleRequest) -> Result<Finding, ValidationOutcome> {
        match request {
            FindTriangleRequest::ByCoordinates(query) => convert::find_by_coordinates(query),
            FindTriangleRequest::ByVertices(query) => infer::find_by_vertices(query),
        }
    }

    /// Look up a triangle from a raw row token and column.
    pub fn find_by_coordinates(
        &self,
        row: Option<&str>,
        column: i32,
    ) -> Result<Finding, ValidationOutcome> {
        self.find(&CoordinatesQuery::parse(row, column).into())
    }

    /// Infer a triangle from three raw vertices.
    pub fn find_by_vertices(
        &self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
    ) -> Result<Finding, ValidationOutcome> {
        self.find(&VerticesQuery::new(x1, y1, x2, y2, x3, y3).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridAddress, Row};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn finder_is_shareable() {
        assert_send_sync::<TriangleFinder>();
        assert_send_sync::<Finding>();
    }

    #[test]
    fn coordinates_lookup() {
        let found = TriangleFinder::new().find_by_coordinates(Some("b"), 2).unwrap();
        assert_eq!(found.triangle.address, GridAddress::new(Row::B, 2));
        assert!(found.is_valid());
    }

    #[test]
    fn vertices_lookup() {
        let found = TriangleFinder::new()
            .find_by_vertices(0, 0, 10, 0, 10, 10)
            .unwrap();
        assert_eq!(found.triangle.address, GridAddress::new(Row::B, 1));
    }

    #[test]
    fn rejected_requests_return_outcome() {
        let finder = TriangleFinder::new();
        assert!(finder.find_by_coordinates(Some("Z"), 0).unwrap_err().len() == 2);
        assert!(!finder
            .find_by_vertices(0, 0, 0, 0, 0, -1)
            .unwrap_err()
            .is_valid());
    }

    #[test]
    fn concurrent_callers_do_not_interfere() {
        let finder = TriangleFinder::new();
        let handles: Vec<_> = (1..=12)
            .map(|column| {
                std::thread::spawn(move || {
                    let found = finder.find_by_coordinates(Some("D"), column).unwrap();
                    let back = finder
                        .find(&VerticesQuery::from_vertices(found.triangle.vertices).into())
                        .unwrap();
                    back.triangle.column()
                })
            })
            .collect();

        for (column, handle) in (1..=12).zip(handles) {
            assert_eq!(handle.join().unwrap(), column);
        }
    }
}
