//! The case accumulator and dispatcher surface.
//!
//! [`CaseSet`] accumulates cases with `|` (or [`CaseSet::case`]) and is
//! deliberately inert: it has no way to be applied to a value, so a chain
//! that never reaches the terminal [`CaseSet::complete`] call is rejected by
//! the type system rather than discovered at run time. [`Matcher`] is the
//! finalized, reusable dispatcher; [`MatchExpr`] is the one-shot at-site
//! form whose terminal [`MatchExpr::finish`] resolves and invokes exactly
//! once.

use std::ops::BitOr;

use tracing::trace;

use crate::candidate::{Candidate, CaseBody, Signature};
use crate::convert::coerce;
use crate::error::MatchError;
use crate::resolver::{FirstViable, ResolvePolicy, Strict};
use crate::shape::{viability, CallForm};
use crate::types::Type;
use crate::value::Value;

/// Start an empty, reusable case accumulator.
pub fn cases() -> CaseSet<FirstViable> {
    CaseSet::new()
}

/// Start a one-shot match of `value` at the call site.
pub fn match_on<T>(value: T) -> MatchExpr<FirstViable>
where
    T: Into<Value>,
{
    MatchExpr {
        value: value.into(),
        set: CaseSet::new(),
    }
}

/// An ordered, growing list of case candidates.
///
/// Candidate metadata and bodies are stored in two parallel, contiguous
/// lists; resolution works on the metadata alone and addresses winners by
/// plain index. Declaration order is preserved and is the tie-break.
#[must_use = "a case set does nothing until completed into a matcher"]
pub struct CaseSet<P = FirstViable> {
    signatures: Vec<Signature>,
    bodies: Vec<CaseBody>,
    policy: P,
}

impl CaseSet<FirstViable> {
    /// Create an empty accumulator with the default resolution policy.
    pub fn new() -> Self {
        Self {
            signatures: Vec::new(),
            bodies: Vec::new(),
            policy: FirstViable,
        }
    }
}

impl Default for CaseSet<FirstViable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> CaseSet<P> {
    /// Append a case, preserving declaration order.
    pub fn case(mut self, candidate: Candidate) -> Self {
        let (signature, body) = candidate.into_parts();
        self.signatures.push(signature);
        self.bodies.push(body);
        self
    }

    /// Switch to the ambiguity-checked resolution policy.
    pub fn strict(self) -> CaseSet<Strict> {
        self.with_policy(Strict)
    }

    /// Replace the resolution policy.
    pub fn with_policy<Q: ResolvePolicy>(self, policy: Q) -> CaseSet<Q> {
        CaseSet {
            signatures: self.signatures,
            bodies: self.bodies,
            policy,
        }
    }

    /// Append the final case and fix the candidate list into a [`Matcher`].
    ///
    /// This is the only way to obtain an applicable dispatcher; an
    /// accumulator that never completes cannot be applied to anything.
    pub fn complete(self, last: Candidate) -> Matcher<P> {
        let set = self.case(last);
        Matcher {
            signatures: set.signatures,
            bodies: set.bodies,
            policy: set.policy,
        }
    }
}

impl<P> BitOr<Candidate> for CaseSet<P> {
    type Output = Self;

    fn bitor(self, candidate: Candidate) -> Self {
        self.case(candidate)
    }
}

/// A finalized, reusable dispatcher over a fixed candidate list.
///
/// Applying a matcher never consumes it: resolution depends only on the
/// value's type and is re-derived on every application, so one matcher can
/// serve values of different types.
pub struct Matcher<P = FirstViable> {
    signatures: Vec<Signature>,
    bodies: Vec<CaseBody>,
    policy: P,
}

impl<P: ResolvePolicy> Matcher<P> {
    /// The number of cases in the fixed candidate list.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Resolve the best case for `value` and invoke it.
    ///
    /// Returns the index of the invoked case. Falls back to the first
    /// zero-parameter case when no typed case is viable; later fallback
    /// cases are dead code.
    pub fn try_apply<T>(&mut self, value: T) -> Result<usize, MatchError>
    where
        T: Into<Value>,
    {
        let value = value.into();
        let value_type = value.ty();

        let resolved = self.policy.resolve(&value_type, &self.signatures)?;
        let index = match resolved {
            Some(index) => index,
            None => self
                .base_case_index()
                .ok_or_else(|| MatchError::NonExhaustive {
                    value_type: value_type.clone(),
                    candidate_count: self.signatures.len(),
                })?,
        };

        let args = build_args(&self.signatures[index], &value, &value_type);
        trace!(index, value_type = %value_type, "invoking selected case");
        self.bodies[index].call(args);
        Ok(index)
    }

    /// Like [`Matcher::try_apply`], but raises the failure immediately.
    ///
    /// A failed match is never skipped: if no case is viable and no
    /// fallback exists, this panics at the point resolution is attempted.
    pub fn apply<T>(&mut self, value: T) -> usize
    where
        T: Into<Value>,
    {
        match self.try_apply(value) {
            Ok(index) => index,
            Err(err) => panic!("{err}"),
        }
    }

    fn base_case_index(&self) -> Option<usize> {
        self.signatures.iter().position(Signature::is_base_case)
    }
}

/// Build the coerced argument list for the selected case.
fn build_args(signature: &Signature, value: &Value, value_type: &Type) -> Vec<Value> {
    if signature.is_base_case() {
        return Vec::new();
    }

    let call = viability(signature, value_type)
        .expect("selected case ranked viable during resolution");
    let params = signature.param_types();
    match call.form {
        CallForm::Flat | CallForm::Aggregate => {
            let coerced = coerce(value, &params[0])
                .expect("conversion ranked viable during resolution");
            vec![coerced]
        }
        CallForm::Decomposed => {
            let elements = match value {
                Value::Tuple(elements) => elements,
                _ => unreachable!("decomposed call implies an aggregate value"),
            };
            elements
                .iter()
                .zip(params)
                .map(|(element, param)| {
                    coerce(element, param)
                        .expect("conversion ranked viable during resolution")
                })
                .collect()
        }
    }
}

/// A one-shot match expression bound to a value at the call site.
#[must_use = "a match expression does nothing until finished"]
pub struct MatchExpr<P = FirstViable> {
    value: Value,
    set: CaseSet<P>,
}

impl<P: ResolvePolicy> MatchExpr<P> {
    /// Append a case, preserving declaration order.
    pub fn case(mut self, candidate: Candidate) -> Self {
        self.set = self.set.case(candidate);
        self
    }

    /// Switch to the ambiguity-checked resolution policy.
    pub fn strict(self) -> MatchExpr<Strict> {
        MatchExpr {
            value: self.value,
            set: self.set.strict(),
        }
    }

    /// Append the final case, then resolve and invoke exactly once.
    ///
    /// Consumes the expression; the chain cannot be applied twice, and a
    /// chain that never calls this cannot be applied at all.
    pub fn finish(self, last: Candidate) -> Result<usize, MatchError> {
        let mut matcher = self.set.complete(last);
        matcher.try_apply(self.value)
    }
}

impl<P> BitOr<Candidate> for MatchExpr<P> {
    type Output = Self;

    fn bitor(mut self, candidate: Candidate) -> Self {
        self.set = self.set.case(candidate);
        self
    }
}
