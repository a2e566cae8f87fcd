pub mod board;
pub mod config;
pub mod error;
pub mod hoshi;
pub mod ko;
pub mod point;
pub mod rules;
pub mod selector;
pub mod session;
pub mod stone;
pub mod turn;

pub use board::{Board, Group, MAX_BOARD_SIZE};
pub use config::{GameConfig, Weights};
pub use error::{GoError, Rejection};
pub use ko::Ko;
pub use point::Point;
pub use rules::{MoveOutcome, Placement, attempt_placement, has_any_legal_move, legal_moves};
pub use selector::MoveSelector;
pub use session::{Captures, Session, Stage};
pub use stone::Stone;
pub use turn::{Move, Turn};
