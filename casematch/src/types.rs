//! The semantic type model used for case resolution.
//!
//! Resolution never inspects Rust types directly; every supported value type
//! is described by a small structural [`Type`] so that ranking and
//! applicability checks are plain data comparisons. Borrowed string slices
//! ([`TypeKind::Str`]) and owning strings ([`TypeKind::String`]) are kept
//! distinct so that string-literal ranking stays expressible.

use std::fmt;
use std::sync::Arc;

/// A semantic type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type {
    /// The kind of this type.
    pub kind: Arc<TypeKind>,
}

/// The structural kind of a [`Type`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A primitive scalar type.
    Primitive(PrimitiveTy),
    /// A borrowed string slice (`&str`); string literals classify here.
    Str,
    /// An owning string (`String`).
    String,
    /// A fixed-arity aggregate of element types.
    Tuple(Vec<Type>),
    /// The unit type.
    Unit,
}

/// Primitive scalar types known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTy {
    Bool,
    Char,
    I16,
    I32,
    I64,
    U8,
    U32,
    U64,
    F32,
    F64,
}

impl Type {
    /// Create a type from a kind.
    pub fn new(kind: TypeKind) -> Self {
        Self { kind: Arc::new(kind) }
    }

    pub fn bool() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::Bool))
    }

    pub fn char() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::Char))
    }

    pub fn i16() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::I16))
    }

    pub fn i32() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::I32))
    }

    pub fn i64() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::I64))
    }

    pub fn u8() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::U8))
    }

    pub fn u32() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::U32))
    }

    pub fn u64() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::U64))
    }

    pub fn f32() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::F32))
    }

    pub fn f64() -> Self {
        Self::new(TypeKind::Primitive(PrimitiveTy::F64))
    }

    /// A borrowed string slice.
    pub fn str() -> Self {
        Self::new(TypeKind::Str)
    }

    /// An owning string.
    pub fn string() -> Self {
        Self::new(TypeKind::String)
    }

    pub fn unit() -> Self {
        Self::new(TypeKind::Unit)
    }

    /// An aggregate of the given element types.
    pub fn tuple(elements: Vec<Type>) -> Self {
        Self::new(TypeKind::Tuple(elements))
    }

    /// The element types if this is an aggregate type.
    pub fn tuple_elements(&self) -> Option<&[Type]> {
        match self.kind.as_ref() {
            TypeKind::Tuple(elements) => Some(elements),
            _ => None,
        }
    }

    /// Whether this type is an aggregate.
    pub fn is_tuple(&self) -> bool {
        matches!(self.kind.as_ref(), TypeKind::Tuple(_))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind.as_ref() {
            TypeKind::Primitive(p) => write!(f, "{p}"),
            TypeKind::Str => write!(f, "&str"),
            TypeKind::String => write!(f, "String"),
            TypeKind::Tuple(elements) => {
                write!(f, "(")?;
                for (i, e) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{e}")?;
                }
                write!(f, ")")
            }
            TypeKind::Unit => write!(f, "()"),
        }
    }
}

impl fmt::Display for PrimitiveTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveTy::Bool => "bool",
            PrimitiveTy::Char => "char",
            PrimitiveTy::I16 => "i16",
            PrimitiveTy::I32 => "i32",
            PrimitiveTy::I64 => "i64",
            PrimitiveTy::U8 => "u8",
            PrimitiveTy::U32 => "u32",
            PrimitiveTy::U64 => "u64",
            PrimitiveTy::F32 => "f32",
            PrimitiveTy::F64 => "f64",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Type::i32(), Type::i32());
        assert_ne!(Type::i32(), Type::i64());
        assert_ne!(Type::str(), Type::string());

        let t1 = Type::tuple(vec![Type::i32(), Type::str()]);
        let t2 = Type::tuple(vec![Type::i32(), Type::str()]);
        let t3 = Type::tuple(vec![Type::i32()]);
        assert_eq!(t1, t2);
        assert_ne!(t1, t3);
    }

    #[test]
    fn test_display() {
        assert_eq!(Type::i32().to_string(), "i32");
        assert_eq!(Type::str().to_string(), "&str");
        assert_eq!(Type::string().to_string(), "String");
        assert_eq!(Type::unit().to_string(), "()");
        assert_eq!(
            Type::tuple(vec![Type::i32(), Type::str()]).to_string(),
            "(i32, &str)"
        );
    }

    #[test]
    fn test_tuple_elements() {
        let t = Type::tuple(vec![Type::i32(), Type::f64()]);
        assert_eq!(t.tuple_elements(), Some(&[Type::i32(), Type::f64()][..]));
        assert!(t.is_tuple());
        assert_eq!(Type::i32().tuple_elements(), None);
    }
}
