//! Synthetic game trees for search tests
//!
//! A [`TreeGame`] is an explicit tree walked with make/unmake. Each node holds
//! a signed pawn count that `piece_at` exposes as pawns on the first squares
//! (positive for white, negative for black), so the stock evaluator scores it
//! as `100 * pawns` plus the usual mobility term.

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::rules::Rules;
use crate::types::{ChessMove, Piece, PieceKind, Side, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
struct Node {
    children: Vec<usize>,
    pawns: i8,
}

#[derive(Debug, Clone)]
pub(crate) struct TreeGame {
    nodes: Vec<Node>,
    path: Vec<usize>,
}

impl TreeGame {
    /// Uniform tree: every inner node has `branching` children
    pub(crate) fn uniform(depth: u8, branching: usize, leaf_pawns: &[i8]) -> Self {
        let mut game = Self::empty();
        let mut next_leaf = 0;
        game.grow(0, depth, &mut |_, remaining| {
            if remaining == 0 {
                let pawns = leaf_pawns[next_leaf % leaf_pawns.len()];
                next_leaf += 1;
                (0, pawns)
            } else {
                (branching, 0)
            }
        });
        game
    }

    /// Random tree with 1..=max_branching children per inner node
    pub(crate) fn random(seed: u64, depth: u8, max_branching: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Self::empty();
        game.grow(0, depth, &mut |_, _| {
            let children = rng.random_range(1..=max_branching);
            let pawns = rng.random_range(-12..=12);
            (children, pawns)
        });
        game
    }

    fn empty() -> Self {
        Self {
            nodes: vec![Node {
                children: Vec::new(),
                pawns: 0,
            }],
            path: vec![0],
        }
    }

    fn grow(&mut self, node: usize, remaining: u8, shape: &mut dyn FnMut(usize, u8) -> (usize, i8)) {
        let (children, pawns) = shape(node, remaining);
        self.nodes[node].pawns = pawns;
        if remaining == 0 {
            return;
        }
        for _ in 0..children {
            let child = self.nodes.len();
            self.nodes.push(Node {
                children: Vec::new(),
                pawns: 0,
            });
            self.nodes[node].children.push(child);
            self.grow(child, remaining - 1, shape);
        }
    }

    fn current(&self) -> &Node {
        &self.nodes[*self.path.last().unwrap_or(&0)]
    }

    pub(crate) fn depth(&self) -> usize {
        self.path.len() - 1
    }

    fn child_move(position: usize) -> ChessMove {
        let from = Square::new(0).unwrap();
        let to = Square::new(position as u8).unwrap();
        ChessMove::new(from, to, None, format!("c{}", position))
    }
}

impl Rules for TreeGame {
    fn legal_moves(&self) -> Vec<ChessMove> {
        (0..self.current().children.len()).map(Self::child_move).collect()
    }

    fn apply(&mut self, mv: &ChessMove) -> ChessEngineResult<()> {
        let position = mv.to.index() as usize;
        let child = self
            .current()
            .children
            .get(position)
            .copied()
            .ok_or_else(|| ChessEngineError::IllegalMove {
                uci: mv.uci(),
                position: format!("tree node at depth {}", self.depth()),
            })?;
        self.path.push(child);
        Ok(())
    }

    fn unmake(&mut self) -> ChessEngineResult<()> {
        if self.path.len() <= 1 {
            return Err(ChessEngineError::UnbalancedUnmake);
        }
        self.path.pop();
        Ok(())
    }

    fn side_to_move(&self) -> Side {
        if self.depth() % 2 == 0 {
            Side::White
        } else {
            Side::Black
        }
    }

    fn is_checkmate(&self) -> bool {
        false
    }

    fn is_draw(&self) -> bool {
        false
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        let pawns = self.current().pawns;
        if (square.index() as i32) < (pawns as i32).abs() {
            let side = if pawns > 0 { Side::White } else { Side::Black };
            Some(Piece::new(side, PieceKind::Pawn))
        } else {
            None
        }
    }
}
