use std::fmt;

use rand::RngExt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Point;
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GoError;
use crate::ko::Ko;
use crate::rules::{self, Placement};
use crate::selector::MoveSelector;
use crate::stone::Stone;
use crate::turn::Turn;

/// Prisoners taken, indexed by the capturing color.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    BlackToPlay,
    WhiteToPlay,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::BlackToPlay => write!(f, "black_to_play"),
            Stage::WhiteToPlay => write!(f, "white_to_play"),
            Stage::Done => write!(f, "done"),
        }
    }
}

/// One game: the board, ko point and prisoners threaded through the rule engine.
///
/// A side left without any legal placement loses. Rejected moves leave the
/// session untouched.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    board: Board,
    ko: Option<Ko>,
    to_play: Stone,
    captures: Captures,
    moves: Vec<Turn>,
    winner: Option<Stone>,
}

impl Session {
    /// Empty board, Black to play.
    pub fn new(config: GameConfig) -> Self {
        let board = config.empty_board();
        Session {
            config,
            board,
            ko: None,
            to_play: Stone::Black,
            captures: Captures::default(),
            moves: Vec::new(),
            winner: None,
        }
    }

    /// Resume from an arbitrary position. Whether `to_play` can still move is
    /// decided when it next tries to.
    pub fn from_position(
        config: GameConfig,
        board: Board,
        to_play: Stone,
        ko: Option<Ko>,
    ) -> Result<Self, GoError> {
        if board.size() != config.size() {
            return Err(GoError::InvalidConfig(format!(
                "board is {0}x{0} but config expects {1}x{1}",
                board.size(),
                config.size()
            )));
        }
        if let Some(k) = ko {
            if !board.is_empty_at(k.point()) {
                return Err(GoError::InvalidConfig(format!(
                    "ko point {} must be an empty point",
                    k.point()
                )));
            }
        }

        Ok(Session {
            config,
            board,
            ko,
            to_play,
            captures: Captures::default(),
            moves: Vec::new(),
            winner: None,
        })
    }

    // -- Accessors --

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ko(&self) -> Option<Ko> {
        self.ko
    }

    pub fn to_play(&self) -> Stone {
        self.to_play
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn moves(&self) -> &[Turn] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<Point> {
        self.moves.last().and_then(|t| t.pos)
    }

    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    pub fn stage(&self) -> Stage {
        if self.winner.is_some() {
            return Stage::Done;
        }
        match self.to_play {
            Stone::Black => Stage::BlackToPlay,
            Stone::White => Stage::WhiteToPlay,
        }
    }

    // -- Game actions --

    pub fn try_play(&mut self, stone: Stone, point: Point) -> Result<Placement, GoError> {
        if self.winner.is_some() {
            return Err(GoError::GameOver);
        }
        if stone != self.to_play {
            return Err(GoError::OutOfTurn);
        }

        let placed =
            rules::attempt_placement(point, &self.board, stone, self.ko)?.into_result()?;

        self.board = placed.board.clone();
        self.ko = placed.ko;
        self.captures.add(stone, placed.captured_count() as u32);
        self.moves.push(Turn::play(stone, point));
        self.to_play = stone.opp();

        if !rules::has_any_legal_move(&self.board, self.to_play, self.ko) {
            debug!(stone = %self.to_play, "no legal move left");
            self.finish(stone);
        }

        Ok(placed)
    }

    pub fn resign(&mut self, stone: Stone) -> Result<Stage, GoError> {
        if self.winner.is_some() {
            return Err(GoError::GameOver);
        }
        self.moves.push(Turn::resign(stone));
        self.finish(stone.opp());
        Ok(self.stage())
    }

    /// Let `selector` move for the side to play. `Ok(None)` means it found no
    /// legal placement and resigned.
    pub fn play_selected<R: RngExt>(
        &mut self,
        selector: &MoveSelector,
        rng: &mut R,
    ) -> Result<Option<Point>, GoError> {
        if self.winner.is_some() {
            return Err(GoError::GameOver);
        }

        let stone = self.to_play;
        match selector.select_move(&self.board, stone, self.ko, rng) {
            Some(point) => {
                self.try_play(stone, point)?;
                Ok(Some(point))
            }
            None => {
                self.resign(stone)?;
                Ok(None)
            }
        }
    }

    fn finish(&mut self, winner: Stone) {
        debug!(%winner, moves = self.moves.len(), "game over");
        self.winner = Some(winner);
    }
}
