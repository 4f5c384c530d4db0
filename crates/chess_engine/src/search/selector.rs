//! Root move selection
//!
//! Turns a position and a difficulty (depth plus randomness) into one move.
//! With probability `randomness` the selector skips the search entirely and
//! returns a uniformly chosen legal move; otherwise every root move is searched
//! to `depth - 1` with the opponent to move and the strictly best score wins.
//! Ties keep the move generated first, so a zero-randomness selection is fully
//! deterministic.

use super::alphabeta::AlphaBeta;
use super::make_unmake::with_move;
use crate::constants::AB_INF;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::rules::Rules;
use crate::types::{ChessMove, Score, SearchStats};
use rand::Rng;
use tracing::{debug, info};

/// Outcome of one root selection
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub mv: ChessMove,
    /// Search score of `mv`, `None` when it was picked at random
    pub score: Option<Score>,
    pub randomized: bool,
    pub stats: SearchStats,
}

/// Pick a move for the side to move, returning the score and counters too
///
/// # Errors
///
/// - [`ChessEngineError::InvalidDepth`] if `depth` is zero
/// - [`ChessEngineError::NoLegalMoves`] if the side to move cannot move
/// - any rules-engine error raised while searching
pub fn choose_move<R, G>(
    rules: &mut R,
    depth: u8,
    randomness: f64,
    rng: &mut G,
) -> ChessEngineResult<Selection>
where
    R: Rules + ?Sized,
    G: Rng + ?Sized,
{
    if depth == 0 {
        return Err(ChessEngineError::InvalidDepth { depth });
    }

    let moves = rules.annotated_moves();
    if moves.is_empty() {
        return Err(ChessEngineError::NoLegalMoves);
    }

    if randomness > 0.0 && rng.random::<f64>() < randomness {
        let mv = moves[rng.random_range(0..moves.len())].clone();
        info!("[SEARCH] Random pick {} out of {} legal moves", mv, moves.len());
        return Ok(Selection {
            mv,
            score: None,
            randomized: true,
            stats: SearchStats::default(),
        });
    }

    let mut searcher = AlphaBeta::new(rules.side_to_move());
    let mut best: Option<(usize, Score)> = None;

    for (index, mv) in moves.iter().enumerate() {
        let score = with_move(rules, mv, |child| {
            searcher.search(child, depth - 1, -AB_INF, AB_INF, false)
        })?;
        debug!("[SEARCH] {} -> {}", mv, score);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    let (index, score) = best.ok_or(ChessEngineError::NoLegalMoves)?;
    let stats = searcher.stats();
    let mv = moves[index].clone();
    info!(
        "[SEARCH] Best move {} (score {}, depth {}, {} nodes, {} cutoffs)",
        mv, score, depth, stats.nodes, stats.cutoffs
    );

    Ok(Selection {
        mv,
        score: Some(score),
        randomized: false,
        stats,
    })
}

/// Pick a move for the side to move
///
/// Thin wrapper over [`choose_move`] for callers that only need the move.
pub fn select_move<R, G>(
    rules: &mut R,
    depth: u8,
    randomness: f64,
    rng: &mut G,
) -> ChessEngineResult<ChessMove>
where
    R: Rules + ?Sized,
    G: Rng + ?Sized,
{
    choose_move(rules, depth, randomness, rng).map(|selection| selection.mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ShakmatyBoard;
    use crate::evaluation::Evaluator;
    use crate::search::tree::TreeGame;
    use crate::types::Side;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_zero_randomness_is_deterministic() {
        //! Same position, same depth, no randomness: the same move every time
        let mut board = ShakmatyBoard::new();
        let first = select_move(&mut board, 2, 0.0, &mut rng()).unwrap();
        for seed in 0..5 {
            let mut other = StdRng::seed_from_u64(seed);
            let again = select_move(&mut board, 2, 0.0, &mut other).unwrap();
            assert_eq!(first, again);
        }
        assert_eq!(board.ply(), 0);
    }

    #[test]
    fn test_start_position_depth_one_maximizes_immediate_eval() {
        //! At depth 1 the chosen move is the first move with the best static eval
        let mut board = ShakmatyBoard::new();
        let selection = choose_move(&mut board, 1, 0.0, &mut rng()).unwrap();

        let evaluator = Evaluator::new(Side::White);
        let mut expected: Option<(ChessMove, Score)> = None;
        for mv in board.legal_moves() {
            board.apply(&mv).unwrap();
            let score = evaluator.evaluate(&board);
            board.unmake().unwrap();
            if expected.as_ref().map_or(true, |(_, best)| score > *best) {
                expected = Some((mv, score));
            }
        }
        let (expected_move, expected_score) = expected.unwrap();

        assert_eq!(selection.mv, expected_move);
        assert_eq!(selection.score, Some(expected_score));
        assert!(!selection.randomized);
        assert!(!selection.mv.notation.is_empty());
    }

    #[test]
    fn test_single_legal_move_is_returned() {
        //! Forced positions return the only move whatever the difficulty
        // Rook covers the g-file and the king covers g7/g8, leaving only Kh7
        let fen = "7k/5K2/8/8/8/8/8/6R1 b - - 0 1";
        for (depth, randomness) in [(1, 0.0), (3, 0.0), (2, 1.0)] {
            let mut board = ShakmatyBoard::from_fen(fen).unwrap();
            assert_eq!(board.legal_moves().len(), 1);
            let only = board.legal_moves().remove(0);
            let chosen = select_move(&mut board, depth, randomness, &mut rng()).unwrap();
            assert_eq!(chosen, only);
        }
    }

    #[test]
    fn test_no_legal_moves() {
        let mut board = ShakmatyBoard::from_fen(FOOLS_MATE).unwrap();
        let result = select_move(&mut board, 2, 0.0, &mut rng());
        assert_eq!(result, Err(ChessEngineError::NoLegalMoves));
    }

    #[test]
    fn test_zero_depth_rejected() {
        let mut board = ShakmatyBoard::new();
        let result = select_move(&mut board, 0, 0.0, &mut rng());
        assert_eq!(result, Err(ChessEngineError::InvalidDepth { depth: 0 }));
    }

    #[test]
    fn test_full_randomness_always_skips_search() {
        //! Randomness 1.0 never searches and only ever returns legal moves
        let mut board = ShakmatyBoard::new();
        let legal = board.legal_moves();
        let mut rng = rng();
        for _ in 0..50 {
            let selection = choose_move(&mut board, 3, 1.0, &mut rng).unwrap();
            assert!(selection.randomized);
            assert_eq!(selection.score, None);
            assert_eq!(selection.stats.nodes, 0);
            assert!(legal.contains(&selection.mv));
        }
    }

    #[test]
    fn test_seeded_random_branch_is_reproducible() {
        let mut board = ShakmatyBoard::new();
        let picks = |seed: u64, board: &mut ShakmatyBoard| -> Vec<ChessMove> {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| select_move(board, 1, 0.5, &mut rng).unwrap())
                .collect()
        };
        assert_eq!(picks(42, &mut board), picks(42, &mut board));
    }

    #[test]
    fn test_takes_hanging_queen() {
        //! Depth 1 captures an undefended queen
        let mut board =
            ShakmatyBoard::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").unwrap();
        let chosen = select_move(&mut board, 1, 0.0, &mut rng()).unwrap();
        assert_eq!(chosen.uci(), "d2d5");
    }

    #[test]
    fn test_plays_mate_in_one() {
        let mut board = ShakmatyBoard::from_fen("6k1/5ppp/8/8/8/8/5PPP/3R2K1 w - - 0 1").unwrap();
        for depth in 1..=2 {
            let selection = choose_move(&mut board, depth, 0.0, &mut rng()).unwrap();
            assert_eq!(selection.mv.uci(), "d1d8");
            assert_eq!(selection.mv.notation, "Rd8");
        }
    }

    #[test]
    fn test_ties_keep_first_generated_move() {
        //! Every leaf scores the same, so the first root move must win
        let mut tree = TreeGame::uniform(2, 3, &[1]);
        let selection = choose_move(&mut tree, 2, 0.0, &mut rng()).unwrap();
        assert_eq!(selection.mv, tree.legal_moves()[0]);
    }

    #[test]
    fn test_picks_best_subtree() {
        //! Minimax over a 3x3 tree: min(1,4,7)=1, min(6,5,8)=5, min(2,9,3)=2
        let mut tree = TreeGame::uniform(2, 3, &[1, 4, 7, 6, 5, 8, 2, 9, 3]);
        let selection = choose_move(&mut tree, 2, 0.0, &mut rng()).unwrap();
        assert_eq!(selection.mv, tree.legal_moves()[1]);
        assert_eq!(selection.score, Some(500));
        assert_eq!(tree.depth(), 0);
    }
}
