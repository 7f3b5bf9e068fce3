//! Type-directed case dispatch.
//!
//! Given a value and an ordered list of case functions, `casematch` selects
//! the single case whose parameter types best fit the value's type and
//! invokes it, approximating a host language's overload-resolution
//! preference order: exact match over promotion over standard conversion
//! over user conversion, with aggregate values optionally decomposed into
//! positional arguments as a last resort.
//!
//! # Algorithm Overview
//!
//! 1. **Introspect candidates**: each case closure's parameter types are
//!    captured statically when the case is built
//! 2. **Classify viability**: determine how each candidate can receive the
//!    value (flat, whole aggregate, or decomposed) and at what conversion
//!    cost
//! 3. **Rank pairwise**: a challenger beats the incumbent only by Pareto
//!    dominance over per-parameter conversion ranks
//! 4. **Fold to a winner**: a left-to-right fold keeps the best candidate;
//!    ties keep the earlier one, and the strict policy instead rejects
//!    order-dependent outcomes as ambiguous
//! 5. **Invoke**: the winning case is called with the coerced value, or the
//!    zero-parameter fallback case runs when nothing is viable
//!
//! Resolution is a pure function of the value's semantic type and the
//! candidate list; dispatch metadata is fixed when the case list completes,
//! and no reflection happens at run time.
//!
//! # Example
//!
//! ```
//! use casematch::{case, match_on};
//!
//! let selected = (match_on("Hello")
//!     | case(|name: &'static str| println!("a string: {name}"))
//!     | case(|n: i32| println!("an int: {n}")))
//!     .finish(case(|| println!("nothing matched")))?;
//!
//! // The string literal is an exact match for the first case.
//! assert_eq!(selected, 0);
//! # Ok::<(), casematch::MatchError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`types`] - The semantic type model resolution ranks against
//! - [`value`] - Runtime values and the static-type bridge for closures
//! - [`convert`] - Conversion rank classification and value coercion
//! - [`candidate`] - Case candidates and callable introspection
//! - [`shape`] - Argument shape analysis (flat, aggregate, decomposed)
//! - [`rank`] - Pairwise better-match comparison
//! - [`resolver`] - Resolution policies folding rankings to one index
//! - [`matcher`] - The case accumulator and dispatcher surface

pub mod candidate;
pub mod convert;
pub mod error;
pub mod matcher;
pub mod rank;
pub mod resolver;
pub mod shape;
pub mod types;
pub mod value;

pub use candidate::{case, value_case, Candidate, IntoCase, Signature};
pub use convert::{conv_rank, ConvRank};
pub use error::MatchError;
pub use matcher::{cases, match_on, CaseSet, MatchExpr, Matcher};
pub use rank::is_better_match;
pub use resolver::{FirstViable, ResolvePolicy, Strict};
pub use shape::{viability, CallForm, Viability};
pub use types::{PrimitiveTy, Type, TypeKind};
pub use value::{FromValue, StaticType, Value};
