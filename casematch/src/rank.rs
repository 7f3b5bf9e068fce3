//! Pairwise ranking of two candidates against one argument type.
//!
//! Within one call form the comparison is Pareto dominance over per-position
//! conversion ranks: the challenger wins only if it is at least as good in
//! every position and strictly better in at least one. Being better in some
//! positions never buys back a loss in another; this is deliberately not a
//! sum-of-ranks comparison. Across different call forms the cheaper total
//! conversion level wins, with ties left to the resolver's
//! first-declared-wins rule.

use crate::candidate::Signature;
use crate::convert::ConvRank;
use crate::shape::viability;
use crate::types::Type;

/// Whether the challenger's parameter is a strictly better fit for the
/// argument than the incumbent's.
pub fn is_better_arg(incumbent: ConvRank, challenger: ConvRank) -> bool {
    challenger < incumbent
}

/// Whether both parameters fit the argument equally well.
pub fn is_eq_arg(incumbent: ConvRank, challenger: ConvRank) -> bool {
    challenger == incumbent
}

/// Whether the challenger's parameter fits at least as well as the
/// incumbent's.
pub fn is_better_or_eq_arg(incumbent: ConvRank, challenger: ConvRank) -> bool {
    is_better_arg(incumbent, challenger) || is_eq_arg(incumbent, challenger)
}

/// Whether `challenger` is a strictly better match than `incumbent` for a
/// value of type `arg`.
///
/// Ties in every position report false in both directions; the resolver's
/// left-to-right fold then keeps the earlier candidate.
pub fn is_better_match(incumbent: &Signature, challenger: &Signature, arg: &Type) -> bool {
    let challenger_call = match viability(challenger, arg) {
        Some(v) => v,
        None => return false,
    };
    let incumbent_call = match viability(incumbent, arg) {
        Some(v) => v,
        // A viable challenger beats a non-viable incumbent unconditionally.
        None => return true,
    };

    if incumbent_call.form == challenger_call.form {
        let all_at_least = incumbent_call
            .ranks
            .iter()
            .zip(&challenger_call.ranks)
            .all(|(&i, &c)| is_better_or_eq_arg(i, c));
        let some_strictly = incumbent_call
            .ranks
            .iter()
            .zip(&challenger_call.ranks)
            .any(|(&i, &c)| is_better_arg(i, c));
        all_at_least && some_strictly
    } else {
        challenger_call.level < incumbent_call.level
    }
}
