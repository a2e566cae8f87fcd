use std::fmt;

use crate::Point;

/// Why a placement was refused. These are legal game states, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    AlreadyOccupied,
    KoViolation,
    Suicide,
}

impl Rejection {
    /// Text to surface to the player, if any. Occupied points are ignored silently.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Rejection::AlreadyOccupied => None,
            Rejection::KoViolation => {
                Some("Ko violation: the captured point cannot be retaken immediately.")
            }
            Rejection::Suicide => Some("Suicide: this point has no liberties."),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::AlreadyOccupied => write!(f, "already occupied"),
            Rejection::KoViolation => write!(f, "ko violation"),
            Rejection::Suicide => write!(f, "suicide"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    NotOnBoard(Point),
    InvalidSize(usize),
    MalformedBoard,
    InvalidStarPoint(Point),
    InvalidConfig(String),
    OutOfTurn,
    GameOver,
    Rejected(Rejection),
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::NotOnBoard(p) => write!(f, "point {p} is not on the board"),
            GoError::InvalidSize(n) => write!(f, "invalid board size {n}"),
            GoError::MalformedBoard => write!(f, "malformed board matrix"),
            GoError::InvalidStarPoint(p) => write!(f, "star point {p} is not on the board"),
            GoError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            GoError::OutOfTurn => write!(f, "out of turn"),
            GoError::GameOver => write!(f, "game over"),
            GoError::Rejected(r) => write!(f, "illegal move: {r}"),
        }
    }
}

impl std::error::Error for GoError {}

impl From<Rejection> for GoError {
    fn from(r: Rejection) -> Self {
        GoError::Rejected(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupied_has_no_message() {
        assert!(Rejection::AlreadyOccupied.message().is_none());
        assert!(Rejection::KoViolation.message().is_some());
        assert!(Rejection::Suicide.message().is_some());
    }

    #[test]
    fn display() {
        assert_eq!(
            GoError::NotOnBoard(Point::new(9, 0)).to_string(),
            "point (9, 0) is not on the board"
        );
        assert_eq!(
            GoError::from(Rejection::Suicide).to_string(),
            "illegal move: suicide"
        );
    }
}
