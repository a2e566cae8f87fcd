use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::{Board, MAX_BOARD_SIZE};
use crate::error::GoError;
use crate::hoshi;

/// Scoring weights used by the move selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Per captured stone.
    pub capture: f64,
    /// Flat score when the placed group is left with a single liberty.
    pub self_atari: f64,
    /// Per liberty of the placed group, when it has more than one.
    pub liberty: f64,
    pub star_point: f64,
    /// Upper bound (exclusive) of the uniform random bonus.
    pub jitter: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            capture: 1000.0,
            self_atari: -200.0,
            liberty: 10.0,
            star_point: 50.0,
            jitter: 5.0,
        }
    }
}

/// Board dimension and star points, fixed for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameConfig {
    size: u8,
    star_points: Vec<Point>,
    weights: Weights,
}

#[derive(Deserialize)]
struct RawConfig {
    size: usize,
    #[serde(default)]
    star_points: Option<Vec<Point>>,
    #[serde(default)]
    weights: Weights,
}

impl GameConfig {
    /// A `size` x `size` board with the standard star points and default weights.
    pub fn standard(size: usize) -> Result<Self, GoError> {
        Self::validated(size, None, Weights::default())
    }

    /// Use caller-supplied star points instead of the standard layout.
    pub fn with_star_points(size: usize, star_points: Vec<Point>) -> Result<Self, GoError> {
        Self::validated(size, Some(star_points), Weights::default())
    }

    pub fn with_weights(mut self, weights: Weights) -> Result<Self, GoError> {
        Self::check_weights(&weights)?;
        self.weights = weights;
        Ok(self)
    }

    /// Parse a JSON config. Missing star points fall back to the standard layout
    /// and missing weights to their defaults.
    ///
    /// ```json
    /// { "size": 9, "star_points": [{ "row": 4, "col": 4 }], "weights": { "jitter": 0 } }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, GoError> {
        let raw: RawConfig =
            serde_json::from_str(json).map_err(|e| GoError::InvalidConfig(e.to_string()))?;
        Self::validated(raw.size, raw.star_points, raw.weights)
    }

    fn validated(
        size: usize,
        star_points: Option<Vec<Point>>,
        weights: Weights,
    ) -> Result<Self, GoError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GoError::InvalidSize(size));
        }
        let size = size as u8;

        let mut star_points = star_points.unwrap_or_else(|| hoshi::star_points(size));
        if let Some(&bad) = star_points
            .iter()
            .find(|p| p.row >= size || p.col >= size)
        {
            return Err(GoError::InvalidStarPoint(bad));
        }
        star_points.sort();
        star_points.dedup();

        Self::check_weights(&weights)?;

        Ok(GameConfig {
            size,
            star_points,
            weights,
        })
    }

    fn check_weights(weights: &Weights) -> Result<(), GoError> {
        let all_finite = [
            weights.capture,
            weights.self_atari,
            weights.liberty,
            weights.star_point,
            weights.jitter,
        ]
        .iter()
        .all(|w| w.is_finite());

        if !all_finite {
            return Err(GoError::InvalidConfig("weights must be finite".into()));
        }
        if weights.jitter < 0.0 {
            return Err(GoError::InvalidConfig("jitter must not be negative".into()));
        }
        Ok(())
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn star_points(&self) -> &[Point] {
        &self.star_points
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn is_star_point(&self, point: Point) -> bool {
        self.star_points.binary_search(&point).is_ok()
    }

    /// A fresh empty board of the configured size.
    pub fn empty_board(&self) -> Board {
        Board::blank(self.size)
    }
}
