//! Grid vertices and snapping.

use crate::CELL_SIZE;

/// An (x, y) point in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    /// Row axis
    pub x: i32,
    /// Column axis
    pub y: i32,
}

impl Vertex {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when both coordinates sit on a grid line.
    pub const fn is_grid_aligned(&self) -> bool {
        self.x % CELL_SIZE == 0 && self.y % CELL_SIZE == 0
    }

    /// The nearest grid-aligned vertex.
    pub fn snapped(&self) -> Self {
        Self {
            x: snap_to_nearest_vertex(self.x),
            y: snap_to_nearest_vertex(self.y),
        }
    }
}

impl From<(i32, i32)> for Vertex {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Round a coordinate to the nearest multiple of [`CELL_SIZE`].
///
/// Halfway values round up, so 25 snaps to 30. Aligned values are returned
/// unchanged.
pub fn snap_to_nearest_vertex(value: i32) -> i32 {
    let offset = value.rem_euclid(CELL_SIZE);
    if offset * 2 >= CELL_SIZE {
        value + (CELL_SIZE - offset)
    } else {
        value - offset
    }
}
