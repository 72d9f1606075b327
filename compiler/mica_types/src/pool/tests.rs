use super::*;
use pretty_assertions::assert_eq;

#[test]
fn primitives_at_fixed_ids() {
    let pool = TypePool::new();
    assert_eq!(pool.int(), TypeId::INT);
    assert_eq!(pool.float(), TypeId::FLOAT);
    assert_eq!(*pool.get(TypeId::INT), TypeData::Int);
    assert_eq!(*pool.get(TypeId::FLOAT), TypeData::Float);
    assert!(pool.is_empty());
}

#[test]
fn ptr_interning_is_idempotent() {
    let mut pool = TypePool::new();
    let int_ptr = pool.ptr_to(TypeId::INT);
    assert_eq!(pool.ptr_to(TypeId::INT), int_ptr);

    let float_ptr = pool.ptr_to(TypeId::FLOAT);
    assert_eq!(pool.ptr_to(TypeId::FLOAT), float_ptr);
    assert_ne!(int_ptr, float_ptr);

    let int_ptr_ptr = pool.ptr_to(int_ptr);
    let again = pool.ptr_to(TypeId::INT);
    assert_eq!(pool.ptr_to(again), int_ptr_ptr);
    assert_ne!(int_ptr_ptr, int_ptr);
}

#[test]
fn array_interning_keyed_on_elem_and_len() {
    let mut pool = TypePool::new();
    let float4 = pool.array_of(TypeId::FLOAT, 4);
    assert_eq!(pool.array_of(TypeId::FLOAT, 4), float4);

    let float3 = pool.array_of(TypeId::FLOAT, 3);
    assert_eq!(pool.array_of(TypeId::FLOAT, 3), float3);
    assert_ne!(float3, float4);

    let int4 = pool.array_of(TypeId::INT, 4);
    assert_ne!(int4, float4);
}

#[test]
fn func_interning_respects_param_order_and_arity() {
    let mut pool = TypePool::new();
    let int_int = pool.func(&[TypeId::INT], TypeId::INT);
    assert_eq!(pool.func(&[TypeId::INT], TypeId::INT), int_int);

    let nullary = pool.func(&[], TypeId::INT);
    assert_ne!(int_int, nullary);
    assert_eq!(pool.func(&[], TypeId::INT), nullary);

    let if_ = pool.func(&[TypeId::INT, TypeId::FLOAT], TypeId::INT);
    let fi = pool.func(&[TypeId::FLOAT, TypeId::INT], TypeId::INT);
    assert_ne!(if_, fi);
}

#[test]
fn aggregates_are_never_interned() {
    let mut pool = TypePool::new();
    let fields = [
        TypeField {
            name: Name::from_raw(1),
            ty: TypeId::INT,
        },
        TypeField {
            name: Name::from_raw(2),
            ty: TypeId::FLOAT,
        },
    ];
    let a = pool.struct_type(&fields);
    let b = pool.struct_type(&fields);
    assert_ne!(a, b);
    assert_eq!(pool.get(a), pool.get(b));

    let u = pool.union_type(&fields);
    let v = pool.union_type(&fields);
    assert_ne!(u, v);
    assert_ne!(u, a);
}

#[test]
fn aggregates_do_not_pollute_the_dedup_index() {
    let mut pool = TypePool::new();
    let fields = [TypeField {
        name: Name::from_raw(1),
        ty: TypeId::INT,
    }];
    let s1 = pool.struct_type(&fields);
    // A structural type built after the aggregate still interns correctly,
    // and a second identical aggregate still comes out fresh.
    let p1 = pool.ptr_to(s1);
    assert_eq!(pool.ptr_to(s1), p1);
    let s2 = pool.struct_type(&fields);
    assert_ne!(s1, s2);
    assert_ne!(pool.ptr_to(s2), p1);
}

#[test]
fn nested_structural_types_stay_canonical() {
    let mut pool = TypePool::new();
    // float*[8]* built twice from scratch must converge on one handle.
    let build = |pool: &mut TypePool| {
        let fp = pool.ptr_to(TypeId::FLOAT);
        let arr = pool.array_of(fp, 8);
        pool.ptr_to(arr)
    };
    let a = build(&mut pool);
    let b = build(&mut pool);
    assert_eq!(a, b);
}

#[test]
fn field_lookup_by_name() {
    let mut pool = TypePool::new();
    let x = Name::from_raw(1);
    let y = Name::from_raw(2);
    let s = pool.struct_type(&[
        TypeField {
            name: x,
            ty: TypeId::INT,
        },
        TypeField {
            name: y,
            ty: TypeId::FLOAT,
        },
    ]);
    assert_eq!(pool.field(s, y).map(|f| f.ty), Some(TypeId::FLOAT));
    assert_eq!(pool.field(s, Name::from_raw(3)), None);
    assert_eq!(pool.field(TypeId::INT, x), None);
}
