//! Type relation classification and value coercion.
//!
//! The relation between an argument type and a parameter type is classified
//! into a [`ConvRank`]; lower ranks are strictly preferred during resolution.
//! [`coerce`] performs the conversion a rank promises, so a candidate that
//! ranked viable can always be invoked.

use crate::types::{PrimitiveTy, Type, TypeKind};
use crate::value::Value;

/// How an argument type relates to a parameter type.
///
/// The variants are ordered: `Exact < Promotion < Standard < User <
/// Impossible`. `Impossible` makes a candidate non-viable for the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConvRank {
    /// Same type.
    Exact,
    /// One of the enumerated numeric widenings.
    Promotion,
    /// A general implicit numeric conversion.
    Standard,
    /// A conversion that constructs a new value, e.g. `&str` to `String`.
    User,
    /// No implicit conversion exists.
    Impossible,
}

impl ConvRank {
    /// Whether a candidate with this rank can be called at all.
    pub fn is_viable(self) -> bool {
        self != ConvRank::Impossible
    }

    /// The numeric cost of this rank, used when summing conversion levels.
    pub fn cost(self) -> u32 {
        match self {
            ConvRank::Exact => 0,
            ConvRank::Promotion => 1,
            ConvRank::Standard => 2,
            ConvRank::User => 3,
            ConvRank::Impossible => u32::MAX,
        }
    }
}

/// Whether `from` and `to` denote the same semantic type.
pub fn is_exact(from: &Type, to: &Type) -> bool {
    from == to
}

/// The fixed table of numeric promotions.
///
/// Maintained as an explicit enumeration; there is no portable way to derive
/// "the next wider type", and resolution must not invent widenings the table
/// does not name.
pub fn is_promotion(from: PrimitiveTy, to: PrimitiveTy) -> bool {
    use PrimitiveTy::*;
    matches!(
        (from, to),
        (F32, F64) | (Char, I32) | (I16, I32) | (Bool, I32) | (U8, U32)
    )
}

/// Whether a value of `from` implicitly converts to `to` by a general
/// numeric conversion.
///
/// Narrowing is allowed, mirroring implicit conversion at a call boundary.
/// `char` converts out to any numeric type but nothing converts into it;
/// a coercion into `char` could land outside the valid scalar range.
pub fn is_standard_conversion(from: &Type, to: &Type) -> bool {
    let to = match (from.kind.as_ref(), to.kind.as_ref()) {
        (TypeKind::Primitive(_), TypeKind::Primitive(t)) => *t,
        _ => return false,
    };
    to != PrimitiveTy::Char
}

/// Whether `from` converts to `to` by constructing a new value.
///
/// This is a best-effort enumeration, not an emulation of full user-defined
/// conversion lookup: the only case the engine's value model supports is
/// building an owning string from a borrowed slice. The reverse direction is
/// impossible; a borrow of the coerced value would not outlive the call.
pub fn is_user_conversion(from: &Type, to: &Type) -> bool {
    matches!(
        (from.kind.as_ref(), to.kind.as_ref()),
        (TypeKind::Str, TypeKind::String)
    )
}

/// Classify the relation from an argument type to a parameter type.
///
/// Exactness is tested before the promotion table, and the promotion table
/// before general convertibility; general convertibility would otherwise
/// swallow both and collapse the ordering that ranking depends on. User
/// conversion is the last positive classification.
pub fn conv_rank(from: &Type, to: &Type) -> ConvRank {
    // Aggregates relate elementwise; the whole relation is as bad as the
    // worst element, and any impossible element poisons it.
    if let (TypeKind::Tuple(from_elems), TypeKind::Tuple(to_elems)) =
        (from.kind.as_ref(), to.kind.as_ref())
    {
        if from_elems.len() != to_elems.len() {
            return ConvRank::Impossible;
        }
        return from_elems
            .iter()
            .zip(to_elems)
            .map(|(f, t)| conv_rank(f, t))
            .max()
            .unwrap_or(ConvRank::Exact);
    }

    if is_exact(from, to) {
        ConvRank::Exact
    } else if matches!(
        (from.kind.as_ref(), to.kind.as_ref()),
        (TypeKind::Primitive(f), TypeKind::Primitive(t)) if is_promotion(*f, *t)
    ) {
        ConvRank::Promotion
    } else if is_standard_conversion(from, to) {
        ConvRank::Standard
    } else if is_user_conversion(from, to) {
        ConvRank::User
    } else {
        ConvRank::Impossible
    }
}

/// Materialize the conversion promised by [`conv_rank`].
///
/// Returns `None` exactly when the rank is [`ConvRank::Impossible`].
pub fn coerce(value: &Value, to: &Type) -> Option<Value> {
    if &value.ty() == to {
        return Some(value.clone());
    }

    match to.kind.as_ref() {
        TypeKind::Primitive(p) => coerce_numeric(value, *p),
        TypeKind::String => match value {
            Value::Str(s) => Some(Value::String((*s).to_string())),
            _ => None,
        },
        TypeKind::Tuple(element_types) => {
            let elements = match value {
                Value::Tuple(elements) => elements,
                _ => return None,
            };
            if elements.len() != element_types.len() {
                return None;
            }
            let coerced = elements
                .iter()
                .zip(element_types)
                .map(|(v, t)| coerce(v, t))
                .collect::<Option<Vec<_>>>()?;
            Some(Value::Tuple(coerced))
        }
        // Str, Unit and Char accept only exact values, handled above.
        _ => None,
    }
}

enum Num {
    Int(i128),
    Float(f64),
}

fn numeric_parts(value: &Value) -> Option<Num> {
    Some(match value {
        Value::Bool(b) => Num::Int(i128::from(*b)),
        Value::Char(c) => Num::Int(i128::from(u32::from(*c))),
        Value::I16(v) => Num::Int(i128::from(*v)),
        Value::I32(v) => Num::Int(i128::from(*v)),
        Value::I64(v) => Num::Int(i128::from(*v)),
        Value::U8(v) => Num::Int(i128::from(*v)),
        Value::U32(v) => Num::Int(i128::from(*v)),
        Value::U64(v) => Num::Int(i128::from(*v)),
        Value::F32(v) => Num::Float(f64::from(*v)),
        Value::F64(v) => Num::Float(*v),
        _ => return None,
    })
}

fn coerce_numeric(value: &Value, to: PrimitiveTy) -> Option<Value> {
    let num = numeric_parts(value)?;
    Some(match to {
        PrimitiveTy::Bool => match num {
            Num::Int(i) => Value::Bool(i != 0),
            Num::Float(f) => Value::Bool(f != 0.0),
        },
        // Nothing converts into `char` implicitly.
        PrimitiveTy::Char => return None,
        PrimitiveTy::I16 => match num {
            Num::Int(i) => Value::I16(i as i16),
            Num::Float(f) => Value::I16(f as i16),
        },
        PrimitiveTy::I32 => match num {
            Num::Int(i) => Value::I32(i as i32),
            Num::Float(f) => Value::I32(f as i32),
        },
        PrimitiveTy::I64 => match num {
            Num::Int(i) => Value::I64(i as i64),
            Num::Float(f) => Value::I64(f as i64),
        },
        PrimitiveTy::U8 => match num {
            Num::Int(i) => Value::U8(i as u8),
            Num::Float(f) => Value::U8(f as u8),
        },
        PrimitiveTy::U32 => match num {
            Num::Int(i) => Value::U32(i as u32),
            Num::Float(f) => Value::U32(f as u32),
        },
        PrimitiveTy::U64 => match num {
            Num::Int(i) => Value::U64(i as u64),
            Num::Float(f) => Value::U64(f as u64),
        },
        PrimitiveTy::F32 => match num {
            Num::Int(i) => Value::F32(i as f32),
            Num::Float(f) => Value::F32(f as f32),
        },
        PrimitiveTy::F64 => match num {
            Num::Int(i) => Value::F64(i as f64),
            Num::Float(f) => Value::F64(f),
        },
    })
}
