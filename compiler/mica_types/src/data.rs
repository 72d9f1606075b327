//! Internal type representation stored in the pool.

use mica_ir::{Name, TypeId};

/// A named field of a struct or union type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeField {
    pub name: Name,
    pub ty: TypeId,
}

/// Type representation stored in the [`TypePool`](crate::TypePool).
///
/// Children are `TypeId` handles into the same pool, never boxes, so two
/// structurally equal pointer/array/function entries hash and compare equal
/// and the pool can deduplicate them. Aggregates also derive `Eq`/`Hash`,
/// but the pool never consults the dedup index for them (nominal identity).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeData {
    // Primitives, pre-interned at fixed ids.
    /// 64-bit signed integer.
    Int,
    /// 64-bit IEEE 754 float.
    Float,

    /// Pointer type: `T*`
    Ptr(TypeId),

    /// Fixed-size array type: `T[n]`
    Array { elem: TypeId, len: u64 },

    /// Struct type. Nominal: field-list equality does not imply type
    /// equality.
    Struct(Box<[TypeField]>),

    /// Union type. Nominal, like `Struct`.
    Union(Box<[TypeField]>),

    /// Function type: `(params) -> ret`. Parameter order is significant.
    Func { params: Box<[TypeId]>, ret: TypeId },
}

impl TypeData {
    /// Fields of an aggregate type, if this is one.
    pub fn fields(&self) -> Option<&[TypeField]> {
        match self {
            TypeData::Struct(fields) | TypeData::Union(fields) => Some(fields),
            _ => None,
        }
    }

    /// Whether this entry is an aggregate (struct or union).
    pub fn is_aggregate(&self) -> bool {
        matches!(self, TypeData::Struct(_) | TypeData::Union(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality_of_data() {
        // TypeData itself is structural; nominal identity for aggregates is
        // enforced by the pool, not by this type.
        let a = TypeData::Ptr(TypeId::INT);
        let b = TypeData::Ptr(TypeId::INT);
        assert_eq!(a, b);

        let f = TypeData::Func {
            params: Box::new([TypeId::INT]),
            ret: TypeId::FLOAT,
        };
        let g = TypeData::Func {
            params: Box::new([]),
            ret: TypeId::FLOAT,
        };
        assert_ne!(f, g);
    }

    #[test]
    fn test_fields_accessor() {
        let fields: Box<[TypeField]> = Box::new([TypeField {
            name: Name::from_raw(1),
            ty: TypeId::INT,
        }]);
        let s = TypeData::Struct(fields);
        assert!(s.is_aggregate());
        assert_eq!(s.fields().map(<[TypeField]>::len), Some(1));
        assert!(TypeData::Int.fields().is_none());
    }
}
