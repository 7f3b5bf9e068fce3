//! Case candidates and callable introspection.
//!
//! A [`Candidate`] pairs a [`Signature`] (the metadata resolution ranks) with
//! the erased case body that is invoked if the candidate wins. Signatures are
//! captured statically through the [`IntoCase`] trait: each supported closure
//! arity has an impl that reads the parameter types off the closure's bound
//! and records them as semantic [`Type`]s.

use std::fmt;

use crate::convert::conv_rank;
use crate::types::Type;
use crate::value::{FromValue, StaticType, Value};

/// The callable surface of one case, as seen by resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signature {
    /// A zero-parameter callable: the fallback (base) case.
    Thunk,
    /// A callable with the given parameter types, in declaration order.
    Params(Vec<Type>),
    /// A non-callable constant that produces a value of the given type.
    ///
    /// Constants never win resolution; they exist for the `can_produce`
    /// query and future value-returning matches.
    Constant(Type),
}

impl Signature {
    /// Whether this candidate can be called at all.
    pub fn is_callable(&self) -> bool {
        !matches!(self, Signature::Constant(_))
    }

    /// The number of declared parameters, or `None` for non-callables.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Signature::Thunk => Some(0),
            Signature::Params(params) => Some(params.len()),
            Signature::Constant(_) => None,
        }
    }

    /// The declared parameter types; empty for thunks and constants.
    pub fn param_types(&self) -> &[Type] {
        match self {
            Signature::Params(params) => params,
            Signature::Thunk | Signature::Constant(_) => &[],
        }
    }

    /// Whether this is the designated zero-parameter fallback case.
    pub fn is_base_case(&self) -> bool {
        matches!(self, Signature::Thunk)
    }

    /// Whether this candidate can produce a value convertible to `result`.
    ///
    /// Only constants produce values today; callables run for effect and
    /// produce nothing.
    pub fn can_produce(&self, result: &Type) -> bool {
        match self {
            Signature::Constant(ty) => conv_rank(ty, result).is_viable(),
            Signature::Thunk | Signature::Params(_) => false,
        }
    }
}

pub(crate) enum CaseBody {
    Thunk(Box<dyn FnMut()>),
    /// Receives the coerced arguments, one per declared parameter.
    Args(Box<dyn FnMut(Vec<Value>)>),
    Constant(#[allow(dead_code)] Value),
}

impl CaseBody {
    pub(crate) fn call(&mut self, args: Vec<Value>) {
        match self {
            CaseBody::Thunk(f) => f(),
            CaseBody::Args(f) => f(args),
            CaseBody::Constant(_) => {
                unreachable!("constant cases are never selected by resolution")
            }
        }
    }
}

/// One case in a match expression: a signature plus the erased body.
pub struct Candidate {
    signature: Signature,
    body: CaseBody,
}

impl Candidate {
    pub(crate) fn new(signature: Signature, body: CaseBody) -> Self {
        Self { signature, body }
    }

    /// The signature resolution ranks this candidate by.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub(crate) fn into_parts(self) -> (Signature, CaseBody) {
        (self.signature, self.body)
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Conversion of a closure into a [`Candidate`], keyed by parameter tuple.
///
/// The `Args` parameter exists only to keep the impls coherent; it is
/// inferred from the closure's own signature.
pub trait IntoCase<Args> {
    fn into_case(self) -> Candidate;
}

impl<F> IntoCase<()> for F
where
    F: FnMut() + 'static,
{
    fn into_case(self) -> Candidate {
        Candidate::new(Signature::Thunk, CaseBody::Thunk(Box::new(self)))
    }
}

impl<F, A> IntoCase<(A,)> for F
where
    F: FnMut(A) + 'static,
    A: FromValue + StaticType,
{
    fn into_case(mut self) -> Candidate {
        let signature = Signature::Params(vec![A::static_type()]);
        let body = CaseBody::Args(Box::new(move |args: Vec<Value>| {
            let mut args = args.into_iter();
            let a = args
                .next()
                .and_then(A::from_value)
                .expect("argument coerced to declared parameter type");
            self(a)
        }));
        Candidate::new(signature, body)
    }
}

impl<F, A, B> IntoCase<(A, B)> for F
where
    F: FnMut(A, B) + 'static,
    A: FromValue + StaticType,
    B: FromValue + StaticType,
{
    fn into_case(mut self) -> Candidate {
        let signature = Signature::Params(vec![A::static_type(), B::static_type()]);
        let body = CaseBody::Args(Box::new(move |args: Vec<Value>| {
            let mut args = args.into_iter();
            let a = args
                .next()
                .and_then(A::from_value)
                .expect("argument coerced to declared parameter type");
            let b = args
                .next()
                .and_then(B::from_value)
                .expect("argument coerced to declared parameter type");
            self(a, b)
        }));
        Candidate::new(signature, body)
    }
}

impl<F, A, B, C> IntoCase<(A, B, C)> for F
where
    F: FnMut(A, B, C) + 'static,
    A: FromValue + StaticType,
    B: FromValue + StaticType,
    C: FromValue + StaticType,
{
    fn into_case(mut self) -> Candidate {
        let signature = Signature::Params(vec![
            A::static_type(),
            B::static_type(),
            C::static_type(),
        ]);
        let body = CaseBody::Args(Box::new(move |args: Vec<Value>| {
            let mut args = args.into_iter();
            let a = args
                .next()
                .and_then(A::from_value)
                .expect("argument coerced to declared parameter type");
            let b = args
                .next()
                .and_then(B::from_value)
                .expect("argument coerced to declared parameter type");
            let c = args
                .next()
                .and_then(C::from_value)
                .expect("argument coerced to declared parameter type");
            self(a, b, c)
        }));
        Candidate::new(signature, body)
    }
}

/// Turn a closure into a case candidate.
///
/// Parameter types must be concrete: they are what resolution ranks the
/// case by. A fully generic closure has no recorded parameter type and is
/// rejected when the case is built:
///
/// ```compile_fail
/// use casematch::case;
///
/// // The parameter type must be annotated; `|x| ...` cannot be ranked.
/// let c = case(|x| drop(x));
/// ```
///
/// A zero-parameter closure is the fallback (base) case:
///
/// ```
/// use casematch::case;
///
/// let fallback = case(|| println!("nothing matched"));
/// assert!(fallback.signature().is_base_case());
/// ```
pub fn case<Args, F>(f: F) -> Candidate
where
    F: IntoCase<Args>,
{
    f.into_case()
}

/// Turn a plain value into a non-callable constant candidate.
///
/// Constant candidates fail every match test; they answer only the
/// `can_produce` query used by value-returning matches.
pub fn value_case<T>(value: T) -> Candidate
where
    T: Into<Value>,
{
    let value = value.into();
    let signature = Signature::Constant(value.ty());
    Candidate::new(signature, CaseBody::Constant(value))
}
