use rand::RngExt;
use tracing::{debug, trace};

use crate::Point;
use crate::board::Board;
use crate::config::GameConfig;
use crate::ko::Ko;
use crate::rules::place_on_board;
use crate::stone::Stone;

/// Scores every empty point by simulating the placement and picks one of the best.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    config: GameConfig,
}

impl MoveSelector {
    pub fn new(config: GameConfig) -> Self {
        MoveSelector { config }
    }

    /// Heuristic value of placing `stone` at `point`.
    ///
    /// `None` for illegal, occupied and off-board points. A legal point always
    /// gets a value, even one that overflows to an infinity.
    pub fn score<R: RngExt>(
        &self,
        board: &Board,
        point: Point,
        stone: Stone,
        ko: Option<Ko>,
        rng: &mut R,
    ) -> Option<f64> {
        if !board.on_board(point) {
            return None;
        }
        let placed = place_on_board(point, board, stone, ko).accepted()?;

        let w = self.config.weights();
        let mut score = w.capture * placed.captured_count() as f64;

        score += if placed.liberties == 1 {
            w.self_atari
        } else {
            w.liberty * placed.liberties as f64
        };

        if self.config.is_star_point(point) {
            score += w.star_point;
        }

        score -= point.distance(board.center()) as f64;

        if w.jitter > 0.0 {
            score += rng.random_range(0.0..w.jitter);
        }

        // Opposite overflows cancel to NaN; rank those last.
        Some(if score.is_nan() { f64::NEG_INFINITY } else { score })
    }

    /// Pick a move for `stone`, or `None` when it has no legal placement.
    ///
    /// All points sharing the top score are kept and one is drawn uniformly,
    /// so board order never biases the choice. The first legal point always
    /// seeds the set, so `None` means no legal placement exists.
    pub fn select_move<R: RngExt>(
        &self,
        board: &Board,
        stone: Stone,
        ko: Option<Ko>,
        rng: &mut R,
    ) -> Option<Point> {
        let mut best_score: Option<f64> = None;
        let mut best: Vec<Point> = Vec::new();

        for point in board.empty_points() {
            let Some(score) = self.score(board, point, stone, ko, rng) else {
                continue;
            };
            trace!(%point, score, "candidate");

            match best_score {
                Some(top) if score < top => {}
                Some(top) if score == top => best.push(point),
                _ => {
                    best_score = Some(score);
                    best.clear();
                    best.push(point);
                }
            }
        }

        let Some(score) = best_score else {
            debug!(%stone, "no legal move");
            return None;
        };

        let choice = best[rng.random_range(0..best.len())];
        debug!(%stone, point = %choice, score, ties = best.len(), "selected move");
        Some(choice)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::config::Weights;

    fn p(row: u8, col: u8) -> Point {
        Point::new(row, col)
    }

    fn steady(config: GameConfig) -> MoveSelector {
        let weights = Weights {
            jitter: 0.0,
            ..Weights::default()
        };
        MoveSelector::new(config.with_weights(weights).unwrap())
    }

    #[test]
    fn opens_on_centre_star_point() {
        let selector = steady(GameConfig::standard(9).unwrap());
        let board = Board::new(9).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            selector.select_move(&board, Stone::Black, None, &mut rng),
            Some(p(4, 4))
        );
        assert_eq!(
            selector.score(&board, p(4, 4), Stone::Black, None, &mut rng),
            Some(90.0)
        );
        assert_eq!(
            selector.score(&board, p(2, 2), Stone::Black, None, &mut rng),
            Some(86.0)
        );
    }

    #[test]
    fn takes_the_capture() {
        let selector = MoveSelector::new(GameConfig::standard(5).unwrap());
        let board = Board::from_layout(&["+++++", "++B++", "+BW++", "++B++", "+++++"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            selector.select_move(&board, Stone::Black, None, &mut rng),
            Some(p(2, 3))
        );
    }

    #[test]
    fn penalises_self_atari() {
        let selector = steady(GameConfig::standard(5).unwrap());
        let board = Board::from_layout(&["+W+++", "+++++", "+++++", "+++++", "+++++"]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        // One liberty left, four steps from the centre.
        assert_eq!(
            selector.score(&board, p(0, 0), Stone::Black, None, &mut rng),
            Some(-204.0)
        );
    }

    #[test]
    fn illegal_points_have_no_score() {
        let selector = MoveSelector::new(GameConfig::standard(5).unwrap());
        let board = Board::from_layout(&["+B+++", "B++++", "+++++", "+++++", "+++W+"]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let occupied = selector.score(&board, p(4, 3), Stone::Black, None, &mut rng);
        let suicide = selector.score(&board, p(0, 0), Stone::White, None, &mut rng);
        let ko = selector.score(&board, p(2, 2), Stone::White, Some(Ko(p(2, 2))), &mut rng);
        let off_board = selector.score(&board, p(5, 5), Stone::White, None, &mut rng);

        assert_eq!(occupied, None);
        assert_eq!(suicide, None);
        assert_eq!(ko, None);
        assert_eq!(off_board, None);
    }

    #[test]
    fn jitter_stays_below_its_bound() {
        let selector = MoveSelector::new(GameConfig::standard(9).unwrap());
        let board = Board::new(9).unwrap();
        for seed in 0..2000 {
            let mut rng = StdRng::seed_from_u64(seed);
            let s = selector
                .score(&board, p(4, 4), Stone::Black, None, &mut rng)
                .unwrap();
            assert!((90.0..95.0).contains(&s), "seed {seed} scored {s}");
        }
    }

    #[test]
    fn overflowing_weights_still_pick_a_legal_move() {
        let weights = Weights {
            liberty: -f64::MAX,
            ..Weights::default()
        };
        let config = GameConfig::standard(9)
            .unwrap()
            .with_weights(weights)
            .unwrap();
        let selector = MoveSelector::new(config);
        let board = Board::new(9).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        assert_eq!(
            selector.score(&board, p(4, 4), Stone::Black, None, &mut rng),
            Some(f64::NEG_INFINITY)
        );
        let choice = selector
            .select_move(&board, Stone::Black, None, &mut rng)
            .unwrap();
        assert!(board.is_empty_at(choice));
    }

    #[test]
    fn nan_scores_do_not_hide_legal_moves() {
        let weights = Weights {
            capture: f64::MAX,
            liberty: -f64::MAX,
            jitter: 0.0,
            ..Weights::default()
        };
        let config = GameConfig::standard(3)
            .unwrap()
            .with_weights(weights)
            .unwrap();
        let selector = MoveSelector::new(config);
        // (0,2) captures two stones and keeps two liberties: inf - inf.
        let board = Board::from_layout(&["WW+", "BB+", "+++"]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            selector.score(&board, p(0, 2), Stone::Black, None, &mut rng),
            Some(f64::NEG_INFINITY)
        );
        let choice = selector
            .select_move(&board, Stone::Black, None, &mut rng)
            .unwrap();
        assert!(board.is_empty_at(choice));
    }

    #[test]
    fn never_picks_ko_point() {
        let selector = MoveSelector::new(GameConfig::standard(3).unwrap());
        let board = Board::new(3).unwrap();
        let ko = Some(Ko(p(1, 1)));
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let choice = selector.select_move(&board, Stone::White, ko, &mut rng);
            assert_ne!(choice, Some(p(1, 1)));
            assert!(choice.is_some());
        }
    }

    #[test]
    fn none_without_legal_moves() {
        let selector = MoveSelector::new(GameConfig::standard(2).unwrap());
        let board = Board::from_layout(&["+B", "BB"]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(selector.select_move(&board, Stone::Black, None, &mut rng), None);

        let full = Board::from_layout(&["BW", "WB"]).unwrap();
        assert_eq!(selector.select_move(&full, Stone::White, None, &mut rng), None);
    }

    #[test]
    fn ties_are_drawn_uniformly() {
        // Four edge midpoints tie at 2 liberties, distance 1.
        let selector = steady(GameConfig::with_star_points(3, Vec::new()).unwrap());
        let board = Board::from_layout(&["+++", "+B+", "+++"]).unwrap();
        let edges: HashSet<Point> = [p(0, 1), p(1, 0), p(1, 2), p(2, 1)].into();

        let mut seen = HashSet::new();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let choice = selector
                .select_move(&board, Stone::White, None, &mut rng)
                .unwrap();
            assert!(edges.contains(&choice), "unexpected pick {choice}");
            seen.insert(choice);
        }
        assert_eq!(seen, edges);
    }

    #[test]
    fn same_seed_same_choice() {
        let selector = MoveSelector::new(GameConfig::standard(9).unwrap());
        let board = Board::from_layout(&[
            "+++++++++",
            "+++++++++",
            "++B++++++",
            "+++W+++++",
            "++++B++++",
            "+++++W+++",
            "+++++++++",
            "+++++++++",
            "+++++++++",
        ])
        .unwrap();

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..5 {
            assert_eq!(
                selector.select_move(&board, Stone::White, None, &mut a),
                selector.select_move(&board, Stone::White, None, &mut b)
            );
        }
    }
}
