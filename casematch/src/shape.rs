//! Argument shape analysis: can a candidate be invoked with a value of a
//! given type, and in which form.
//!
//! An aggregate value can reach a candidate two ways: whole, as a single
//! tuple argument, or decomposed into positional arguments. Decomposition
//! that needs no conversion is the straight call and carries no penalty; a
//! decomposition that also converts is a last resort and its level is bumped
//! by one, so a direct aggregate match beats it whenever both are offered.

use crate::candidate::Signature;
use crate::convert::{conv_rank, ConvRank};
use crate::types::Type;

/// How a candidate receives the matched value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallForm {
    /// Non-aggregate value passed as the single argument.
    Flat,
    /// Aggregate value passed whole as a single tuple argument.
    Aggregate,
    /// Aggregate value split into positional arguments.
    Decomposed,
}

/// A viable way of calling a candidate with a value of some type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viability {
    /// The form the call takes.
    pub form: CallForm,
    /// Per-parameter conversion ranks, in parameter order.
    pub ranks: Vec<ConvRank>,
    /// Total conversion cost, including the decomposition penalty.
    pub level: u32,
}

/// Determine whether and how a candidate can be called with a value of type
/// `arg`, picking the candidate's cheapest form when several apply.
///
/// Thunks and constants are never viable here; the zero-argument fallback is
/// substituted by the dispatcher only after resolution reports no match.
pub fn viability(signature: &Signature, arg: &Type) -> Option<Viability> {
    let params = match signature {
        Signature::Params(params) => params,
        Signature::Thunk | Signature::Constant(_) => return None,
    };

    match arg.tuple_elements() {
        Some(elements) => {
            let aggregate = aggregate_call(params, arg);
            let decomposed = decomposed_call(params, elements);
            match (aggregate, decomposed) {
                (Some(a), Some(d)) => Some(if d.level < a.level { d } else { a }),
                (a, d) => a.or(d),
            }
        }
        None => flat_call(params, arg),
    }
}

fn flat_call(params: &[Type], arg: &Type) -> Option<Viability> {
    if params.len() != 1 {
        return None;
    }
    let rank = conv_rank(arg, &params[0]);
    rank.is_viable().then(|| Viability {
        form: CallForm::Flat,
        level: rank.cost(),
        ranks: vec![rank],
    })
}

fn aggregate_call(params: &[Type], arg: &Type) -> Option<Viability> {
    if params.len() != 1 {
        return None;
    }
    let rank = conv_rank(arg, &params[0]);
    rank.is_viable().then(|| Viability {
        form: CallForm::Aggregate,
        level: rank.cost(),
        ranks: vec![rank],
    })
}

fn decomposed_call(params: &[Type], elements: &[Type]) -> Option<Viability> {
    if params.len() != elements.len() {
        return None;
    }
    let ranks: Vec<ConvRank> = elements
        .iter()
        .zip(params)
        .map(|(e, p)| conv_rank(e, p))
        .collect();
    if ranks.iter().any(|r| !r.is_viable()) {
        return None;
    }
    let conversions: u32 = ranks.iter().map(|r| r.cost()).sum();
    // All-exact decomposition is the straight call; only a converting
    // decomposition pays the last-resort penalty.
    let level = if conversions == 0 { 0 } else { conversions + 1 };
    Some(Viability {
        form: CallForm::Decomposed,
        ranks,
        level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(types: Vec<Type>) -> Signature {
        Signature::Params(types)
    }

    #[test]
    fn test_flat_call() {
        let sig = params(vec![Type::i32()]);
        let v = viability(&sig, &Type::i32()).unwrap();
        assert_eq!(v.form, CallForm::Flat);
        assert_eq!(v.ranks, vec![ConvRank::Exact]);
        assert_eq!(v.level, 0);

        let v = viability(&sig, &Type::i16()).unwrap();
        assert_eq!(v.ranks, vec![ConvRank::Promotion]);
        assert_eq!(v.level, 1);

        assert_eq!(viability(&sig, &Type::str()), None);
    }

    #[test]
    fn test_arity_mismatch_not_viable() {
        let sig = params(vec![Type::i32(), Type::i32()]);
        assert_eq!(viability(&sig, &Type::i32()), None);
    }

    #[test]
    fn test_aggregate_call() {
        let arg = Type::tuple(vec![Type::i32(), Type::str()]);
        let sig = params(vec![arg.clone()]);
        let v = viability(&sig, &arg).unwrap();
        assert_eq!(v.form, CallForm::Aggregate);
        assert_eq!(v.level, 0);
    }

    #[test]
    fn test_exact_decomposition_has_no_penalty() {
        let arg = Type::tuple(vec![Type::i32(), Type::str()]);
        let sig = params(vec![Type::i32(), Type::str()]);
        let v = viability(&sig, &arg).unwrap();
        assert_eq!(v.form, CallForm::Decomposed);
        assert_eq!(v.level, 0);
        assert_eq!(v.ranks, vec![ConvRank::Exact, ConvRank::Exact]);
    }

    #[test]
    fn test_converting_decomposition_is_penalized() {
        let arg = Type::tuple(vec![Type::i32(), Type::str()]);
        let sig = params(vec![Type::i64(), Type::str()]);
        let v = viability(&sig, &arg).unwrap();
        assert_eq!(v.form, CallForm::Decomposed);
        // One standard conversion (2) plus the decomposition penalty.
        assert_eq!(v.level, 3);
    }

    #[test]
    fn test_qualifier_free_aggregate_equivalence() {
        // A candidate declaring the aggregate parameter and one declaring
        // the matching positional parameters are equally direct when exact.
        let arg = Type::tuple(vec![Type::i32(), Type::str()]);
        let whole = viability(&params(vec![arg.clone()]), &arg).unwrap();
        let split = viability(&params(vec![Type::i32(), Type::str()]), &arg).unwrap();
        assert_eq!(whole.level, split.level);
    }

    #[test]
    fn test_single_element_tuple_prefers_aggregate() {
        let arg = Type::tuple(vec![Type::i32()]);
        let sig = params(vec![arg.clone()]);
        let v = viability(&sig, &arg).unwrap();
        assert_eq!(v.form, CallForm::Aggregate);

        // Positional match against the lone element is still decomposition.
        let sig = params(vec![Type::i32()]);
        let v = viability(&sig, &arg).unwrap();
        assert_eq!(v.form, CallForm::Decomposed);
        assert_eq!(v.level, 0);
    }

    #[test]
    fn test_thunk_and_constant_not_viable() {
        assert_eq!(viability(&Signature::Thunk, &Type::i32()), None);
        assert_eq!(
            viability(&Signature::Constant(Type::i32()), &Type::i32()),
            None
        );
    }
}
