use serde::{Deserialize, Serialize};

use crate::Point;

/// The single point forbidden for the next placement after a ko capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ko(pub Point);

impl Ko {
    pub fn point(self) -> Point {
        self.0
    }

    pub fn forbids(self, point: Point) -> bool {
        self.0 == point
    }

    /// Exactly one stone captured and the capturing group left with one liberty.
    pub fn detect(captured: &[Point], own_liberties: usize) -> Option<Ko> {
        match captured {
            [single] if own_liberties == 1 => Some(Ko(*single)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_capture_in_atari_is_ko() {
        let p = Point::new(2, 2);
        assert_eq!(Ko::detect(&[p], 1), Some(Ko(p)));
    }

    #[test]
    fn no_ko_otherwise() {
        let p = Point::new(2, 2);
        assert_eq!(Ko::detect(&[], 1), None);
        assert_eq!(Ko::detect(&[p], 2), None);
        assert_eq!(Ko::detect(&[p, Point::new(2, 3)], 1), None);
    }

    #[test]
    fn forbids_only_its_point() {
        let ko = Ko(Point::new(1, 1));
        assert!(ko.forbids(Point::new(1, 1)));
        assert!(!ko.forbids(Point::new(1, 2)));
    }
}
