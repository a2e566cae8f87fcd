use std::collections::VecDeque;
use std::fmt;

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::Point;
use crate::error::GoError;
use crate::stone::Stone;

/// Largest supported board edge.
pub const MAX_BOARD_SIZE: usize = 25;

/// A square Go board stored as a flat array, `row * size + col`.
///
/// Boards are values: rule operations clone and return a new board instead
/// of mutating the one they were given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    cells: Vec<i8>,
    size: u8,
}

/// A maximal set of connected same-colored stones and its liberties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub stone: Stone,
    pub stones: Vec<Point>,
    pub liberties: Vec<Point>,
}

impl Group {
    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    pub fn is_dead(&self) -> bool {
        self.liberties.is_empty()
    }
}

impl Board {
    /// Create an empty board with `size` rows and columns.
    pub fn new(size: usize) -> Result<Self, GoError> {
        Ok(Self::blank(Self::check_size(size)?))
    }

    /// Create a board from a square matrix of cell values (1 Black, -1 White, 0 empty).
    pub fn from_rows(rows: Vec<Vec<i8>>) -> Result<Self, GoError> {
        let size = Self::check_size(rows.len())?;
        if rows.iter().any(|row| row.len() != size as usize) {
            return Err(GoError::MalformedBoard);
        }

        Ok(Board {
            cells: rows
                .into_iter()
                .flatten()
                .map(|v| Stone::from_int(v).map_or(0, Stone::to_int))
                .collect(),
            size,
        })
    }

    /// Build a board from an ASCII layout. `B`/`X` = Black, `W`/`O` = White, anything else = empty.
    pub fn from_layout(layout: &[&str]) -> Result<Self, GoError> {
        let rows = layout
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| Stone::from_char(c).map_or(0, Stone::to_int))
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Empty board for a size already validated elsewhere.
    pub(crate) fn blank(size: u8) -> Self {
        Board {
            cells: vec![0; size as usize * size as usize],
            size,
        }
    }

    fn check_size(size: usize) -> Result<u8, GoError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GoError::InvalidSize(size));
        }
        Ok(size as u8)
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn center(&self) -> Point {
        Point::new(self.size / 2, self.size / 2)
    }

    pub fn on_board(&self, point: Point) -> bool {
        point.row < self.size && point.col < self.size
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_int(self.cells[self.idx(point)])
        } else {
            None
        }
    }

    pub fn is_empty_at(&self, point: Point) -> bool {
        self.on_board(point) && self.cells[self.idx(point)] == 0
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == 0)
    }

    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&v| v == stone.to_int()).count()
    }

    /// Every intersection in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Point::new(row, col)))
    }

    /// Empty intersections in row-major order.
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(|&p| self.cells[self.idx(p)] == 0)
    }

    // -- Graph algorithms --

    /// Orthogonal neighbors that are on the board.
    pub fn neighbors(&self, Point { row, col }: Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if row > 0 {
            result.push(Point::new(row - 1, col));
        }
        if row + 1 < self.size {
            result.push(Point::new(row + 1, col));
        }
        if col > 0 {
            result.push(Point::new(row, col - 1));
        }
        if col + 1 < self.size {
            result.push(Point::new(row, col + 1));
        }
        result
    }

    /// Breadth-first search from `point` over same-colored neighbors,
    /// collecting the group and its distinct liberties. `None` on an empty point.
    pub fn group(&self, point: Point) -> Option<Group> {
        let stone = self.stone_at(point)?;

        let mut visited = vec![false; self.cells.len()];
        let mut stones = Vec::new();
        let mut liberties = Vec::new();
        let mut queue = VecDeque::from([point]);
        visited[self.idx(point)] = true;

        while let Some(p) = queue.pop_front() {
            stones.push(p);
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if visited[ni] {
                    continue;
                }
                match self.stone_at(n) {
                    None => {
                        visited[ni] = true;
                        liberties.push(n);
                    }
                    Some(s) if s == stone => {
                        visited[ni] = true;
                        queue.push_back(n);
                    }
                    Some(_) => {}
                }
            }
        }

        Some(Group {
            stone,
            stones,
            liberties,
        })
    }

    /// Liberty count of the group at `point`, zero for an empty point.
    pub fn liberties(&self, point: Point) -> usize {
        self.group(point).map_or(0, |g| g.liberty_count())
    }

    // -- Internal helpers --

    #[inline]
    fn idx(&self, Point { row, col }: Point) -> usize {
        row as usize * self.size as usize + col as usize
    }

    pub(crate) fn set_stone(&mut self, point: Point, stone: Stone) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.cells[i] = stone.to_int();
        }
    }

    pub(crate) fn clear_stones(&mut self, points: &[Point]) {
        for &p in points {
            if self.on_board(p) {
                let i = self.idx(p);
                self.cells[i] = 0;
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                let ch = self
                    .stone_at(Point::new(row, col))
                    .map_or('.', Stone::symbol);
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
