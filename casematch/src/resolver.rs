//! Resolution policies: folding pairwise rankings into one winning index.
//!
//! The default policy is a single left-to-right fold: keep the current best
//! and replace it whenever a later candidate ranks strictly better. This is
//! order-dependent by design; declaration order is the documented tie-break.
//! The strict policy runs the fold twice, forward and reversed, and treats
//! disagreement as proof of ambiguity.

use tracing::{debug, trace};

use crate::candidate::Signature;
use crate::error::MatchError;
use crate::rank::is_better_match;
use crate::shape::viability;
use crate::types::Type;

/// A pluggable resolution strategy.
///
/// `Ok(Some(index))` names the winning candidate, `Ok(None)` means no
/// candidate is viable (the dispatcher then falls back to the base case),
/// and `Err` is a hard failure such as detected ambiguity.
pub trait ResolvePolicy {
    fn resolve(
        &self,
        arg: &Type,
        candidates: &[Signature],
    ) -> Result<Option<usize>, MatchError>;
}

/// Fold the candidate list in the given visit order, returning the winner's
/// index if the fold ends on a viable candidate.
fn scan(
    arg: &Type,
    candidates: &[Signature],
    mut order: impl Iterator<Item = usize>,
) -> Option<usize> {
    let mut best = order.next()?;
    for i in order {
        if is_better_match(&candidates[best], &candidates[i], arg) {
            trace!(from = best, to = i, "challenger ranked strictly better");
            best = i;
        }
    }
    viability(&candidates[best], arg).map(|_| best)
}

/// The default policy: first viable candidate wins ties, left to right.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstViable;

impl ResolvePolicy for FirstViable {
    fn resolve(
        &self,
        arg: &Type,
        candidates: &[Signature],
    ) -> Result<Option<usize>, MatchError> {
        trace!(value_type = %arg, candidates = candidates.len(), "resolving case list");
        let winner = scan(arg, candidates, 0..candidates.len());
        debug!(value_type = %arg, ?winner, "case resolution finished");
        Ok(winner)
    }
}

/// The ambiguity-checked policy: scans forward and reversed, and fails if
/// the two folds disagree on the winner.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strict;

impl ResolvePolicy for Strict {
    fn resolve(
        &self,
        arg: &Type,
        candidates: &[Signature],
    ) -> Result<Option<usize>, MatchError> {
        trace!(value_type = %arg, candidates = candidates.len(), "resolving case list (strict)");
        let forward = scan(arg, candidates, 0..candidates.len());
        let reverse = scan(arg, candidates, (0..candidates.len()).rev());
        match (forward, reverse) {
            (Some(f), Some(r)) if f != r => Err(MatchError::Ambiguous {
                value_type: arg.clone(),
                first: f.min(r),
                second: f.max(r),
            }),
            (winner, _) => {
                debug!(value_type = %arg, ?winner, "strict case resolution finished");
                Ok(winner)
            }
        }
    }
}
