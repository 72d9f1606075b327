//! Type pool with interning for structural types.
//!
//! The pool is pass-scoped and single-threaded; it is threaded by reference
//! like the other front-end state. Handles stay valid and identity-comparable
//! until the pool drops - storage is never cleared or relocated mid-pass.

use mica_ir::{Name, TypeId};
use rustc_hash::FxHashMap;

use crate::data::{TypeData, TypeField};

/// Interning pool for canonical types.
///
/// Pointer, array, and function types are deduplicated through a hash index:
/// constructing the same shape from the same child ids returns the existing
/// handle. Struct and union types bypass the index entirely - two aggregates
/// are distinct types no matter how alike their fields are.
pub struct TypePool {
    /// Storage for type data, indexed by `TypeId`.
    types: Vec<TypeData>,
    /// Dedup index for structural types. Aggregates are never inserted.
    dedup: FxHashMap<TypeData, u32>,
}

impl TypePool {
    /// Create a pool with the primitives pre-interned at their fixed ids.
    pub fn new() -> Self {
        let mut pool = Self {
            types: Vec::with_capacity(64),
            dedup: FxHashMap::default(),
        };
        // Pre-intern primitives at the indices the TypeId constants name.
        for data in [TypeData::Int, TypeData::Float] {
            let id = pool.push(data.clone());
            pool.dedup.insert(data, id.raw());
        }
        debug_assert_eq!(pool.types.len(), TypeId::PRIMITIVE_COUNT as usize);
        pool
    }

    fn push(&mut self, data: TypeData) -> TypeId {
        let raw = u32::try_from(self.types.len())
            .unwrap_or_else(|_| panic!("type pool overflow: too many types"));
        tracing::trace!(id = raw, ?data, "new type pool entry");
        self.types.push(data);
        TypeId::from_raw(raw)
    }

    /// Intern a structural type: return the existing handle for this exact
    /// shape, or allocate a fresh one.
    fn intern(&mut self, data: TypeData) -> TypeId {
        debug_assert!(!data.is_aggregate(), "aggregates are not interned");
        if let Some(&raw) = self.dedup.get(&data) {
            return TypeId::from_raw(raw);
        }
        let id = self.push(data.clone());
        self.dedup.insert(data, id.raw());
        id
    }

    /// The `int` primitive.
    pub fn int(&self) -> TypeId {
        TypeId::INT
    }

    /// The `float` primitive.
    pub fn float(&self) -> TypeId {
        TypeId::FLOAT
    }

    /// The unique pointer type over `base`.
    pub fn ptr_to(&mut self, base: TypeId) -> TypeId {
        self.intern(TypeData::Ptr(base))
    }

    /// The unique array type over `(elem, len)`.
    pub fn array_of(&mut self, elem: TypeId, len: u64) -> TypeId {
        self.intern(TypeData::Array { elem, len })
    }

    /// The unique function type over the ordered parameter ids and return id.
    pub fn func(&mut self, params: &[TypeId], ret: TypeId) -> TypeId {
        self.intern(TypeData::Func {
            params: params.into(),
            ret,
        })
    }

    /// A fresh struct type. Never deduplicated: structurally identical
    /// declarations are still distinct nominal types.
    pub fn struct_type(&mut self, fields: &[TypeField]) -> TypeId {
        self.push(TypeData::Struct(fields.into()))
    }

    /// A fresh union type. Nominal, like [`struct_type`](Self::struct_type).
    pub fn union_type(&mut self, fields: &[TypeField]) -> TypeId {
        self.push(TypeData::Union(fields.into()))
    }

    /// Look up the data for a handle.
    ///
    /// # Panics
    /// Panics if the handle was not created by this pool.
    pub fn get(&self, id: TypeId) -> &TypeData {
        &self.types[id.index()]
    }

    /// Field lookup on an aggregate type by field name.
    pub fn field(&self, id: TypeId, name: Name) -> Option<TypeField> {
        self.get(id)
            .fields()
            .and_then(|fields| fields.iter().find(|f| f.name == name).copied())
    }

    /// Number of pool entries, pre-interned primitives included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the pool holds only the pre-interned primitives.
    pub fn is_empty(&self) -> bool {
        self.types.len() <= TypeId::PRIMITIVE_COUNT as usize
    }
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
