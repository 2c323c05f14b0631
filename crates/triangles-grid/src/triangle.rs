//! Grid addresses and triangle descriptors.

use crate::{Row, Vertex, GRID_COLUMNS, GRID_ROWS};

/// A (row, column) cell address.
///
/// The row is held as its numeric index so that an address inferred from
/// malformed vertices can still be reported when it falls off the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridAddress {
    /// Zero-based row index (0 = row A)
    pub row: i32,
    /// One-based column
    pub column: i32,
}

impl GridAddress {
    pub const fn new(row: Row, column: i32) -> Self {
        Self {
            row: row.index(),
            column,
        }
    }

    /// The named row, if the index is one of A-F.
    pub fn named_row(&self) -> Option<Row> {
        Row::from_index(self.row)
    }

    /// Row letter, or the bare index for rows past the grid edge.
    pub fn row_label(&self) -> String {
        self.named_row()
            .map(|row| row.label().to_string())
            .unwrap_or_else(|| self.row.to_string())
    }

    pub fn row_on_grid(&self) -> bool {
        (0..GRID_ROWS).contains(&self.row)
    }

    pub fn column_on_grid(&self) -> bool {
        (1..=GRID_COLUMNS).contains(&self.column)
    }

    pub fn is_on_grid(&self) -> bool {
        self.row_on_grid() && self.column_on_grid()
    }
}

impl std::fmt::Display for GridAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row_label(), self.column)
    }
}

/// A triangle located on the grid.
///
/// Produced fresh by each lookup and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "wire::TriangleWire", try_from = "wire::TriangleWire")
)]
pub struct TriangleDescriptor {
    pub address: GridAddress,
    pub vertices: [Vertex; 3],
    /// Set when at least one input coordinate had to be snapped.
    pub is_estimated: bool,
}

impl TriangleDescriptor {
    pub fn row(&self) -> i32 {
        self.address.row
    }

    pub fn column(&self) -> i32 {
        self.address.column
    }

    pub fn vertex1(&self) -> Vertex {
        self.vertices[0]
    }

    pub fn vertex2(&self) -> Vertex {
        self.vertices[1]
    }

    pub fn vertex3(&self) -> Vertex {
        self.vertices[2]
    }
}

#[cfg(feature = "serde")]
mod wire {
    use super::*;
    use crate::RowParseError;

    /// Flat JSON form: `row`, `column`, `x1`..`y3`, `isEstimated`.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct TriangleWire {
        row: String,
        column: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        is_estimated: bool,
    }

    impl From<TriangleDescriptor> for TriangleWire {
        fn from(t: TriangleDescriptor) -> Self {
            let [v1, v2, v3] = t.vertices;
            Self {
                row: t.address.row_label(),
                column: t.address.column,
                x1: v1.x,
                y1: v1.y,
                x2: v2.x,
                y2: v2.y,
                x3: v3.x,
                y3: v3.y,
                is_estimated: t.is_estimated,
            }
        }
    }

    impl TryFrom<TriangleWire> for TriangleDescriptor {
        type Error = RowParseError;

        fn try_from(w: TriangleWire) -> Result<Self, Self::Error> {
            // Off-grid rows travel as their bare index.
            let row = match w.row.parse::<Row>() {
                Ok(row) => row.index(),
                Err(RowParseError::OutOfRange(index)) => {
                    i32::try_from(index).map_err(|_| RowParseError::OutOfRange(index))?
                }
                Err(e) => return Err(e),
            };

            Ok(Self {
                address: GridAddress {
                    row,
                    column: w.column,
                },
                vertices: [
                    Vertex::new(w.x1, w.y1),
                    Vertex::new(w.x2, w.y2),
                    Vertex::new(w.x3, w.y3),
                ],
                is_estimated: w.is_estimated,
            })
        }
    }
}
