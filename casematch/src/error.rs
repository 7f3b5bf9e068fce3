//! Match failure types.

use thiserror::Error;

use crate::types::Type;

/// Unrecoverable failures of a match expression.
///
/// There is no retry or partial-result concept: a match either selects and
/// invokes exactly one case or fails whole with one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// No case accepts the value's shape and no fallback case exists.
    #[error(
        "non-exhaustive match: no case accepts a value of type `{value_type}` \
         and no fallback case exists among the {candidate_count} candidates"
    )]
    NonExhaustive {
        /// The semantic type of the matched value.
        value_type: Type,
        /// How many candidates were considered.
        candidate_count: usize,
    },

    /// The strict policy's forward and reverse scans disagreed, proving the
    /// winner was order-dependent rather than a true best match.
    #[error(
        "ambiguous match for a value of type `{value_type}`: \
         cases {first} and {second} are equally ranked"
    )]
    Ambiguous {
        /// The semantic type of the matched value.
        value_type: Type,
        /// Index of the forward scan's winner.
        first: usize,
        /// Index of the reverse scan's winner.
        second: usize,
    },
}
