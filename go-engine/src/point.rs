use serde::{Deserialize, Serialize};
use std::fmt;

/// An intersection on the board, addressed by row then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: u8,
    pub col: u8,
}

impl Point {
    pub const fn new(row: u8, col: u8) -> Self {
        Point { row, col }
    }

    /// Manhattan distance to another point.
    pub fn distance(self, other: Point) -> u32 {
        self.row.abs_diff(other.row) as u32 + self.col.abs_diff(other.col) as u32
    }
}

impl From<(u8, u8)> for Point {
    fn from((row, col): (u8, u8)) -> Self {
        Point { row, col }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl std::str::FromStr for Point {
    type Err = String;

    /// Parses `"row,col"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| format!("invalid point: {s}"))?;
        let row = row
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("invalid row: {row}"))?;
        let col = col
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("invalid col: {col}"))?;
        Ok(Point { row, col })
    }
}
