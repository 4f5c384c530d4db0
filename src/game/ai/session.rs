//! Bot session controller
//!
//! [`BotSession`] owns the difficulty configuration and serializes move
//! requests. A request that arrives while the bot is thinking is rejected on
//! the spot with [`BotError::Busy`]; nothing is queued.
//!
//! # Request Lifecycle
//!
//! 1. `request_move` checks and sets the busy flag under the session mutex
//!    and captures the active profile
//! 2. A tokio task sleeps for the thinking delay (pacing only, it never
//!    bounds the search)
//! 3. The search runs to completion on the blocking pool, owning the position
//! 4. The busy flag is cleared, whatever the outcome
//! 5. On success the continuation receives the move
//! 6. [`PendingBotMove::wait`] hands the position back with the outcome
//!
//! The flag is cleared by a drop guard owned by the task, so a panicking
//! search or a dropped runtime cannot leave the session stuck in Thinking.
//!
//! # Position Ownership
//!
//! The position is always handed back unless the task is cancelled, e.g. by
//! a runtime shutdown. A rejected request returns it inside [`Rejected`]. A search that
//! panics halfway down the tree is unwound with `unmake` until every applied
//! move is reverted, then returned with [`BotError::InternalSearchFailure`].

use super::resource::{DifficultyProfile, DifficultyTable};
use crate::core::{BotConfig, CoreResult};
use crate::game::error::{BotError, BotResult};
use chess_engine::{
    select_move, ChessEngineResult, ChessMove, Piece, Rules, Side, Square,
};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Mutable per-session state, guarded by one mutex
#[derive(Debug)]
struct SessionState {
    difficulty: String,
    busy: bool,
}

/// Clears the busy flag when the request finishes, panics included
struct BusyGuard {
    state: Arc<Mutex<SessionState>>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.state.lock().busy = false;
    }
}

/// A request that was not admitted, with the caller's position
#[derive(Debug)]
pub struct Rejected<P> {
    pub error: BotError,
    /// The position passed to `request_move`, untouched
    pub position: P,
}

/// Counts net applies so a panicking search can be rolled back
struct Balanced<'a, P> {
    inner: &'a mut P,
    applied: usize,
}

impl<P: Rules> Balanced<'_, P> {
    /// Unmake everything still applied
    fn rewind(&mut self) -> BotResult<()> {
        while self.applied > 0 {
            self.inner.unmake()?;
            self.applied -= 1;
        }
        Ok(())
    }
}

impl<P: Rules> Rules for Balanced<'_, P> {
    fn legal_moves(&self) -> Vec<ChessMove> {
        self.inner.legal_moves()
    }

    fn annotated_moves(&self) -> Vec<ChessMove> {
        self.inner.annotated_moves()
    }

    fn legal_move_count(&self) -> usize {
        self.inner.legal_move_count()
    }

    fn apply(&mut self, mv: &ChessMove) -> ChessEngineResult<()> {
        self.inner.apply(mv)?;
        self.applied += 1;
        Ok(())
    }

    fn unmake(&mut self) -> ChessEngineResult<()> {
        self.inner.unmake()?;
        self.applied = self.applied.saturating_sub(1);
        Ok(())
    }

    fn side_to_move(&self) -> Side {
        self.inner.side_to_move()
    }

    fn is_checkmate(&self) -> bool {
        self.inner.is_checkmate()
    }

    fn is_draw(&self) -> bool {
        self.inner.is_draw()
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.inner.piece_at(square)
    }
}

/// Run the selector, turning a panic into an error after rolling back
fn search_balanced<P: Rules>(
    position: &mut P,
    profile: &DifficultyProfile,
    rng: &Mutex<StdRng>,
) -> BotResult<ChessMove> {
    let mut balanced = Balanced {
        inner: position,
        applied: 0,
    };

    let result = catch_unwind(AssertUnwindSafe(|| {
        let mut rng = rng.lock();
        select_move(&mut balanced, profile.depth, profile.randomness, &mut *rng)
    }));

    match result {
        Ok(outcome) => outcome.map_err(BotError::from),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "search panicked".to_string());
            error!("[AI] Search panicked: {}", message);
            balanced.rewind()?;
            Err(BotError::InternalSearchFailure { message })
        }
    }
}

/// Result of one finished request
#[derive(Debug)]
pub struct BotReply<P> {
    /// The position passed to `request_move`, unchanged
    pub position: P,
    pub outcome: BotResult<ChessMove>,
}

/// Handle on an in-flight move request
#[derive(Debug)]
pub struct PendingBotMove<P> {
    handle: JoinHandle<BotResult<BotReply<P>>>,
}

impl<P> PendingBotMove<P> {
    /// Wait for the request to finish
    ///
    /// # Errors
    ///
    /// [`BotError::InternalSearchFailure`] if the task was cancelled before it
    /// finished, e.g. by a runtime shutdown. The position is lost in that case;
    /// a panicking search is reported through [`BotReply::outcome`] instead.
    pub async fn wait(self) -> BotResult<BotReply<P>> {
        match self.handle.await {
            Ok(reply) => reply,
            Err(e) => {
                error!("[AI] Bot task failed: {}", e);
                Err(BotError::InternalSearchFailure {
                    message: e.to_string(),
                })
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// One bot opponent: difficulty settings plus the busy guard
///
/// Cloning yields another handle on the same session.
#[derive(Debug, Clone)]
pub struct BotSession {
    table: Arc<DifficultyTable>,
    think_delay: Duration,
    state: Arc<Mutex<SessionState>>,
    rng: Arc<Mutex<StdRng>>,
}

impl BotSession {
    /// Session from a configuration
    ///
    /// # Errors
    ///
    /// Returns the validation error of [`BotConfig::difficulty_table`].
    pub fn new(config: BotConfig) -> CoreResult<Self> {
        let table = config.difficulty_table()?;
        Ok(Self::from_parts(table, config))
    }

    fn from_parts(table: DifficultyTable, config: BotConfig) -> Self {
        Self {
            table: Arc::new(table),
            think_delay: config.think_delay(),
            state: Arc::new(Mutex::new(SessionState {
                difficulty: config.default_difficulty,
                busy: false,
            })),
            rng: Arc::new(Mutex::new(StdRng::from_os_rng())),
        }
    }

    /// Replace the random source with a seeded one
    pub fn with_seed(self, seed: u64) -> Self {
        *self.rng.lock() = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// Name of the active difficulty
    pub fn difficulty(&self) -> String {
        self.state.lock().difficulty.clone()
    }

    /// The active difficulty profile
    pub fn profile(&self) -> DifficultyProfile {
        let state = self.state.lock();
        self.active_profile(&state.difficulty)
    }

    pub fn profiles(&self) -> &DifficultyTable {
        &self.table
    }

    pub fn think_delay(&self) -> Duration {
        self.think_delay
    }

    /// Whether a request is in flight
    pub fn is_thinking(&self) -> bool {
        self.state.lock().busy
    }

    /// Switch the active difficulty
    ///
    /// A request already in flight keeps the profile it started with.
    ///
    /// # Errors
    ///
    /// [`BotError::UnknownDifficulty`] if `name` is not in the table; the
    /// active difficulty is left unchanged.
    pub fn set_difficulty(&self, name: &str) -> BotResult<()> {
        if !self.table.contains(name) {
            warn!("[AI] Unknown difficulty '{}', keeping current level", name);
            return Err(BotError::UnknownDifficulty {
                name: name.to_string(),
            });
        }

        let mut state = self.state.lock();
        info!("[AI] Difficulty {} -> {}", state.difficulty, name);
        state.difficulty = name.to_string();
        Ok(())
    }

    /// Ask the bot for a move in `position`
    ///
    /// Returns immediately. After the thinking delay the active profile is
    /// searched and, on success, `on_move` receives the chosen move. The
    /// busy flag is already cleared when `on_move` runs, so it may request
    /// the next move itself.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] carrying the untouched `position` and
    /// - [`BotError::Busy`] if a request is in flight
    /// - [`BotError::InternalSearchFailure`] if there is no tokio runtime
    ///
    /// Search outcomes (`NoLegalMoves`, engine failures, panics) are reported
    /// through the returned [`PendingBotMove`], never to `on_move`.
    pub fn request_move<P, F>(
        &self,
        position: P,
        on_move: F,
    ) -> Result<PendingBotMove<P>, Rejected<P>>
    where
        P: Rules + Send + 'static,
        F: FnOnce(&ChessMove) + Send + 'static,
    {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                return Err(Rejected {
                    error: BotError::InternalSearchFailure {
                        message: e.to_string(),
                    },
                    position,
                })
            }
        };

        let profile = {
            let mut state = self.state.lock();
            if state.busy {
                warn!("[AI] Move requested while thinking, request dropped");
                return Err(Rejected {
                    error: BotError::Busy,
                    position,
                });
            }
            state.busy = true;
            self.active_profile(&state.difficulty)
        };
        let guard = BusyGuard {
            state: Arc::clone(&self.state),
        };

        info!(
            "[AI] Thinking for {} | Difficulty: {} (depth {}, randomness {:.2})",
            position.side_to_move(),
            profile.name,
            profile.depth,
            profile.randomness
        );

        let delay = self.think_delay;
        let rng = Arc::clone(&self.rng);
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;

            let search = tokio::task::spawn_blocking(move || {
                let mut position = position;
                let outcome = search_balanced(&mut position, &profile, &rng);
                (position, outcome)
            })
            .await;

            drop(guard);

            let (position, outcome) = match search {
                Ok(finished) => finished,
                Err(e) => {
                    error!("[AI] Search task failed: {}", e);
                    return Err(BotError::InternalSearchFailure {
                        message: e.to_string(),
                    });
                }
            };

            let outcome = match outcome {
                Ok(mv) => {
                    info!("[AI] Bot plays {}", mv);
                    on_move(&mv);
                    Ok(mv)
                }
                Err(e) => {
                    match e {
                        BotError::NoLegalMoves => warn!("[AI] No legal moves for the bot"),
                        _ => error!("[AI] Move selection failed: {}", e),
                    }
                    Err(e)
                }
            };

            Ok(BotReply { position, outcome })
        });

        Ok(PendingBotMove { handle })
    }

    fn active_profile(&self, name: &str) -> DifficultyProfile {
        // The active name is only ever set to a table entry
        self.table
            .get(name)
            .cloned()
            .unwrap_or_else(DifficultyProfile::medium)
    }
}

impl Default for BotSession {
    /// Built-in difficulty table, medium active, 500 ms delay
    fn default() -> Self {
        Self::from_parts(DifficultyTable::default(), BotConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::ShakmatyBoard;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    fn quick_session() -> BotSession {
        BotSession::default()
            .with_seed(1)
            .with_think_delay(Duration::from_millis(0))
    }

    #[test]
    fn test_session_defaults() {
        //! Verifies a fresh session is idle on medium with a 500 ms delay
        let session = BotSession::default();
        assert_eq!(session.difficulty(), "medium");
        assert_eq!(session.profile(), DifficultyProfile::medium());
        assert_eq!(session.think_delay(), Duration::from_millis(500));
        assert!(!session.is_thinking());
    }

    #[test]
    fn test_set_difficulty() {
        let session = BotSession::default();
        session.set_difficulty("hard").unwrap();
        assert_eq!(session.profile(), DifficultyProfile::hard());
    }

    #[test]
    fn test_unknown_difficulty_keeps_previous() {
        //! A bogus name is rejected and the active level does not move
        let session = BotSession::default();
        session.set_difficulty("easy").unwrap();
        let result = session.set_difficulty("bogus");
        assert_eq!(
            result,
            Err(BotError::UnknownDifficulty {
                name: "bogus".to_string()
            })
        );
        assert_eq!(session.difficulty(), "easy");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = BotConfig {
            default_difficulty: "nope".to_string(),
            ..BotConfig::default()
        };
        assert!(BotSession::new(config).is_err());
    }

    #[test]
    fn test_request_outside_runtime_fails_cleanly() {
        //! Without a runtime the request fails and the session stays idle
        let session = quick_session();
        let board = ShakmatyBoard::from_fen(KIWIPETE).unwrap();
        let Err(rejected) = session.request_move(board, |_| {}) else {
            panic!("request admitted without a runtime");
        };
        assert!(matches!(
            rejected.error,
            BotError::InternalSearchFailure { .. }
        ));
        assert_eq!(rejected.position.fen(), KIWIPETE);
        assert_eq!(rejected.position.ply(), 0);
        assert!(!session.is_thinking());
    }

    #[tokio::test]
    async fn test_guard_set_while_in_flight() {
        let session = quick_session().with_think_delay(Duration::from_millis(50));
        let pending = session.request_move(ShakmatyBoard::new(), |_| {}).unwrap();
        assert!(session.is_thinking());
        assert!(!pending.is_finished());
        let reply = pending.wait().await.unwrap();
        assert!(reply.outcome.is_ok());
        assert!(!session.is_thinking());
    }

    #[test]
    fn test_panic_mid_search_rewinds_position() {
        //! Applied moves are unmade before a panicking search reports back
        struct Fragile {
            board: ShakmatyBoard,
            applies_left: usize,
        }

        impl Rules for Fragile {
            fn legal_moves(&self) -> Vec<ChessMove> {
                self.board.legal_moves()
            }
            fn apply(&mut self, mv: &ChessMove) -> ChessEngineResult<()> {
                if self.applies_left == 0 {
                    panic!("rules engine gave up");
                }
                self.applies_left -= 1;
                self.board.apply(mv)
            }
            fn unmake(&mut self) -> ChessEngineResult<()> {
                self.board.unmake()
            }
            fn side_to_move(&self) -> Side {
                self.board.side_to_move()
            }
            fn is_checkmate(&self) -> bool {
                self.board.is_checkmate()
            }
            fn is_draw(&self) -> bool {
                self.board.is_draw()
            }
            fn piece_at(&self, square: Square) -> Option<Piece> {
                self.board.piece_at(square)
            }
        }

        // Two plies deep when the third apply panics
        let mut position = Fragile {
            board: ShakmatyBoard::from_fen(KIWIPETE).unwrap(),
            applies_left: 2,
        };
        let rng = Mutex::new(StdRng::seed_from_u64(3));

        let outcome = search_balanced(&mut position, &DifficultyProfile::hard(), &rng);

        assert!(matches!(
            outcome,
            Err(BotError::InternalSearchFailure { message }) if message == "rules engine gave up"
        ));
        assert_eq!(position.board.ply(), 0);
        assert_eq!(position.board.fen(), KIWIPETE);
    }
}
