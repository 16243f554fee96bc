use std::fmt;

use serde::{Deserialize, Serialize};

/// A single map cell, addressed by row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: i32,
    pub column: i32,
}

impl Point {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Extent of a map plus the format version that decides which terrain
/// vocabulary is legal on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapDimensions {
    pub rows: i32,
    pub columns: i32,
    pub version: u8,
}

impl MapDimensions {
    pub const CURRENT_VERSION: u8 = 2;

    pub fn new(rows: i32, columns: i32, version: u8) -> Self {
        Self {
            rows: rows.max(0),
            columns: columns.max(0),
            version,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        (0..self.rows).contains(&point.row) && (0..self.columns).contains(&point.column)
    }

    pub fn point_count(&self) -> usize {
        self.rows.max(0) as usize * self.columns.max(0) as usize
    }

    /// Row-major index of `point`, if it lies on the map.
    #[inline]
    pub fn index(&self, point: Point) -> Option<usize> {
        if self.contains(point) {
            Some(point.row as usize * self.columns as usize + point.column as usize)
        } else {
            None
        }
    }

    /// Every point on the map in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + Clone {
        let columns = self.columns.max(0);
        (0..self.rows.max(0))
            .flat_map(move |row| (0..columns).map(move |column| Point::new(row, column)))
    }
}

impl fmt::Display for MapDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} (v{})", self.rows, self.columns, self.version)
    }
}
