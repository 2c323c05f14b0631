//! Lookup requests and their rule sets.

use crate::validation::{Validate, ValidationOutcome};
use crate::{Row, RowParseError, Vertex, COORDINATE_MAX, COORDINATE_MIN, GRID_COLUMNS};

const ROW_REQUIRED: &str = "Please Specify Row";
const ROW_UNKNOWN: &str = "Specified Row Does Not Exist";
const COLUMN_RANGE: &str = "Column must be between 1 and 12";
const BELOW_MIN: &str = "Value Cannot Be Below 0";
const ABOVE_MAX: &str = "Value Cannot Exceed 60";

/// Vertex coordinate field names in rule order.
const VERTEX_FIELDS: [(&str, &str); 3] = [("X1", "Y1"), ("X2", "Y2"), ("X3", "Y3")];

/// The row as the caller supplied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedRow {
    /// No row, or a token that is not a row at all
    Unset,
    /// A numeric row index that names no row
    Unknown(i64),
    Known(Row),
}

impl RequestedRow {
    /// Interpret a raw row token. Unrecognized tokens count as unset.
    pub fn parse(token: Option<&str>) -> Self {
        match token.map(str::parse::<Row>) {
            Some(Ok(row)) => Self::Known(row),
            Some(Err(RowParseError::OutOfRange(index))) => Self::Unknown(index),
            Some(Err(_)) | None => Self::Unset,
        }
    }
}

impl From<Row> for RequestedRow {
    fn from(row: Row) -> Self {
        Self::Known(row)
    }
}

/// Find a triangle by its grid address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatesQuery {
    pub row: RequestedRow,
    pub column: i32,
}

impl CoordinatesQuery {
    pub fn new(row: impl Into<RequestedRow>, column: i32) -> Self {
        Self {
            row: row.into(),
            column,
        }
    }

    /// Build a query from an untrusted row token.
    pub fn parse(row: Option<&str>, column: i32) -> Self {
        Self {
            row: RequestedRow::parse(row),
            column,
        }
    }
}

impl Validate for CoordinatesQuery {
    fn validate(&self) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();

        match self.row {
            RequestedRow::Unset => outcome.error("Row", ROW_REQUIRED),
            RequestedRow::Unknown(_) => outcome.error("Row", ROW_UNKNOWN),
            RequestedRow::Known(_) => {}
        }

        outcome.check_range(
            "Column",
            self.column,
            (1, COLUMN_RANGE),
            (GRID_COLUMNS, COLUMN_RANGE),
        );

        outcome
    }
}

/// Find the triangle nearest to three raw vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticesQuery {
    pub vertices: [Vertex; 3],
}

impl VerticesQuery {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32) -> Self {
        Self {
            vertices: [Vertex::new(x1, y1), Vertex::new(x2, y2), Vertex::new(x3, y3)],
        }
    }

    pub fn from_vertices(vertices: [Vertex; 3]) -> Self {
        Self { vertices }
    }
}

impl Validate for VerticesQuery {
    fn validate(&self) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();
        let min = (COORDINATE_MIN, BELOW_MIN);
        let max = (COORDINATE_MAX, ABOVE_MAX);

        for (vertex, (x_field, y_field)) in self.vertices.iter().zip(VERTEX_FIELDS) {
            outcome.check_range(x_field, vertex.x, min, max);
            outcome.check_range(y_field, vertex.y, min, max);
        }

        outcome
    }
}

/// Either kind of lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindTriangleRequest {
    ByCoordinates(CoordinatesQuery),
    ByVertices(VerticesQuery),
}

impl Validate for FindTriangleRequest {
    fn validate(&self) -> ValidationOutcome {
        match self {
            Self::ByCoordinates(query) => query.validate(),
            Self::ByVertices(query) => query.validate(),
        }
    }
}

impl From<CoordinatesQuery> for FindTriangleRequest {
    fn from(query: CoordinatesQuery) -> Self {
        Self::ByCoordinates(query)
    }
}

impl From<VerticesQuery> for FindTriangleRequest {
    fn from(query: VerticesQuery) -> Self {
        Self::ByVertices(query)
    }
}
