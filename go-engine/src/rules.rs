use tracing::debug;

use crate::Point;
use crate::board::Board;
use crate::error::{GoError, Rejection};
use crate::ko::Ko;
use crate::stone::Stone;

/// A placement that passed every rule check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Board after the stone is placed and captures are removed.
    pub board: Board,
    /// Opposing stones removed by this placement.
    pub captured: Vec<Point>,
    /// Liberties of the placed stone's group after captures.
    pub liberties: usize,
    /// Point forbidden for the next placement, if this was a ko capture.
    pub ko: Option<Ko>,
}

impl Placement {
    pub fn captured_count(&self) -> usize {
        self.captured.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted(Placement),
    Rejected(Rejection),
}

impl MoveOutcome {
    pub fn is_legal(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }

    pub fn accepted(self) -> Option<Placement> {
        match self {
            MoveOutcome::Accepted(p) => Some(p),
            MoveOutcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Accepted(_) => None,
            MoveOutcome::Rejected(r) => Some(*r),
        }
    }

    pub fn into_result(self) -> Result<Placement, Rejection> {
        match self {
            MoveOutcome::Accepted(p) => Ok(p),
            MoveOutcome::Rejected(r) => Err(r),
        }
    }
}

/// Try to place `stone` at `point`. The input board is never modified; an
/// accepted placement carries a fresh board.
///
/// Off-board points are a caller error and return `Err`; rule violations are
/// reported as `MoveOutcome::Rejected`.
pub fn attempt_placement(
    point: Point,
    board: &Board,
    stone: Stone,
    ko: Option<Ko>,
) -> Result<MoveOutcome, GoError> {
    if !board.on_board(point) {
        return Err(GoError::NotOnBoard(point));
    }

    let outcome = place_on_board(point, board, stone, ko);
    if let MoveOutcome::Accepted(placed) = &outcome {
        debug!(
            %point,
            %stone,
            captured = placed.captured_count(),
            liberties = placed.liberties,
            ko = ?placed.ko.map(Ko::point),
            "placement accepted"
        );
    }
    Ok(outcome)
}

/// Whether `stone` has at least one legal placement. Scans row-major and stops at the first.
pub fn has_any_legal_move(board: &Board, stone: Stone, ko: Option<Ko>) -> bool {
    board
        .empty_points()
        .any(|p| place_on_board(p, board, stone, ko).is_legal())
}

/// Every legal placement for `stone`, row-major.
pub fn legal_moves(board: &Board, stone: Stone, ko: Option<Ko>) -> Vec<Point> {
    board
        .empty_points()
        .filter(|&p| place_on_board(p, board, stone, ko).is_legal())
        .collect()
}

/// Rule evaluation for an on-board point: captures, then suicide, then ko.
/// Does not log.
pub(crate) fn place_on_board(
    point: Point,
    board: &Board,
    stone: Stone,
    ko: Option<Ko>,
) -> MoveOutcome {
    if board.stone_at(point).is_some() {
        return MoveOutcome::Rejected(Rejection::AlreadyOccupied);
    }

    if ko.is_some_and(|k| k.forbids(point)) {
        return MoveOutcome::Rejected(Rejection::KoViolation);
    }

    let mut next = board.clone();
    next.set_stone(point, stone);

    // Opposing neighbors left without liberties are removed.
    let mut captured: Vec<Point> = Vec::new();
    for n in next.neighbors(point) {
        if next.stone_at(n) != Some(stone.opp()) || captured.contains(&n) {
            continue;
        }
        if let Some(group) = next.group(n) {
            if group.is_dead() {
                captured.extend(group.stones);
            }
        }
    }
    next.clear_stones(&captured);

    let liberties = next.liberties(point);
    if liberties == 0 {
        return MoveOutcome::Rejected(Rejection::Suicide);
    }

    MoveOutcome::Accepted(Placement {
        board: next,
        ko: Ko::detect(&captured, liberties),
        captured,
        liberties,
    })
}
