//! Runtime values and the bridge between Rust types and the semantic model.
//!
//! [`StaticType`] reports the semantic [`Type`] of a Rust type at
//! monomorphization time; it is how case closures declare their parameter
//! types to the engine without any runtime reflection. [`Value`] carries the
//! matched value through coercion and into the winning case body.

use crate::types::{PrimitiveTy, Type, TypeKind};

/// A value presented to a match expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Char(char),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    /// A borrowed string slice; string literals enter the engine as this.
    Str(&'static str),
    /// An owning string.
    String(String),
    /// An aggregate of element values.
    Tuple(Vec<Value>),
    Unit,
}

impl Value {
    /// The semantic type of this value.
    pub fn ty(&self) -> Type {
        match self {
            Value::Bool(_) => Type::bool(),
            Value::Char(_) => Type::char(),
            Value::I16(_) => Type::i16(),
            Value::I32(_) => Type::i32(),
            Value::I64(_) => Type::i64(),
            Value::U8(_) => Type::u8(),
            Value::U32(_) => Type::u32(),
            Value::U64(_) => Type::u64(),
            Value::F32(_) => Type::f32(),
            Value::F64(_) => Type::f64(),
            Value::Str(_) => Type::str(),
            Value::String(_) => Type::string(),
            Value::Tuple(elements) => Type::tuple(elements.iter().map(Value::ty).collect()),
            Value::Unit => Type::unit(),
        }
    }
}

/// Rust types whose semantic [`Type`] is known statically.
///
/// Case parameters must implement this trait; it is the engine's callable
/// introspection. A fully generic closure parameter has no `StaticType` and
/// is rejected when the case is constructed (see [`crate::case`]).
pub trait StaticType {
    /// The semantic type describing `Self`.
    fn static_type() -> Type;
}

/// Conversion out of a [`Value`] into a concrete case parameter.
///
/// Extraction is exact: the engine coerces the value to the parameter's
/// declared type first, then pulls the matching variant out.
pub trait FromValue: Sized {
    /// Extract `Self` if `value` is exactly of the matching variant.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! primitive_value_impls {
    ($($rust:ty => $variant:ident, $prim:ident;)*) => {
        $(
            impl StaticType for $rust {
                fn static_type() -> Type {
                    Type::new(TypeKind::Primitive(PrimitiveTy::$prim))
                }
            }

            impl FromValue for $rust {
                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }

            impl From<$rust> for Value {
                fn from(v: $rust) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

primitive_value_impls! {
    bool => Bool, Bool;
    char => Char, Char;
    i16 => I16, I16;
    i32 => I32, I32;
    i64 => I64, I64;
    u8 => U8, U8;
    u32 => U32, U32;
    u64 => U64, U64;
    f32 => F32, F32;
    f64 => F64, F64;
}

impl StaticType for &'static str {
    fn static_type() -> Type {
        Type::str()
    }
}

impl FromValue for &'static str {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&'static str> for Value {
    fn from(s: &'static str) -> Self {
        Value::Str(s)
    }
}

impl StaticType for String {
    fn static_type() -> Type {
        Type::string()
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl StaticType for () {
    fn static_type() -> Type {
        Type::unit()
    }
}

impl FromValue for () {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Unit => Some(()),
            _ => None,
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Unit
    }
}

macro_rules! tuple_value_impls {
    ($(($($name:ident),+);)*) => {
        $(
            impl<$($name: StaticType),+> StaticType for ($($name,)+) {
                fn static_type() -> Type {
                    Type::tuple(vec![$($name::static_type()),+])
                }
            }

            impl<$($name: FromValue),+> FromValue for ($($name,)+) {
                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::Tuple(elements) => {
                            let mut elements = elements.into_iter();
                            let result = ($($name::from_value(elements.next()?)?,)+);
                            match elements.next() {
                                None => Some(result),
                                Some(_) => None,
                            }
                        }
                        _ => None,
                    }
                }
            }

            impl<$($name: Into<Value>),+> From<($($name,)+)> for Value {
                #[allow(non_snake_case)]
                fn from(($($name,)+): ($($name,)+)) -> Self {
                    Value::Tuple(vec![$($name.into()),+])
                }
            }
        )*
    };
}

tuple_value_impls! {
    (A, B);
    (A, B, C);
}
