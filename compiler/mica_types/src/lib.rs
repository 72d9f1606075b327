//! Canonical type representation for Mica.
//!
//! Resolved types live in a [`TypePool`] and are referenced by
//! [`TypeId`](mica_ir::TypeId) handles. Structural types (pointer, array,
//! function) are interned: constructing the same shape twice yields the same
//! handle, so type equality is an integer comparison everywhere downstream.
//! Aggregate types (struct, union) are nominal: every construction yields a
//! fresh handle, even for identical field lists.

mod data;
mod pool;

pub use data::{TypeData, TypeField};
pub use pool::TypePool;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::TypeField;
    mica_ir::static_assert_size!(TypeField, 8);
}
