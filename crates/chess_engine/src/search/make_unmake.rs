//! Move making and unmaking for search
//!
//! Every child search runs between one `apply` and one `unmake`. The unmake
//! happens before the child's result is inspected, so an error coming up from
//! deeper in the tree still leaves the position balanced at this level.

use crate::error::ChessEngineResult;
use crate::rules::Rules;
use crate::types::ChessMove;

/// Apply `mv`, run `f` on the child position, then unmake
pub(crate) fn with_move<R, T, F>(rules: &mut R, mv: &ChessMove, f: F) -> ChessEngineResult<T>
where
    R: Rules + ?Sized,
    F: FnOnce(&mut R) -> ChessEngineResult<T>,
{
    rules.apply(mv)?;
    let result = f(rules);
    rules.unmake()?;
    result
}
