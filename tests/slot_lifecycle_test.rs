//! Lifecycle tests: storage policy, allocation accounting and value semantics.

use genslot::alloc::CountingAlloc;
use genslot::slot::{self, CastKind, SizeClass, Slot};
use genslot::ParamSlot;
use std::cell::Cell;

thread_local! {
    static CONSTRUCTED: Cell<usize> = const { Cell::new(0) };
    static DESTROYED: Cell<usize> = const { Cell::new(0) };
}

fn reset_counts() {
    CONSTRUCTED.set(0);
    DESTROYED.set(0);
}

fn counts() -> (usize, usize) {
    (CONSTRUCTED.get(), DESTROYED.get())
}

/// A value that records every construction and destruction on this thread.
#[derive(Debug, PartialEq)]
struct Tracked<P> {
    payload: P,
}

impl<P> Tracked<P> {
    fn new(payload: P) -> Self {
        CONSTRUCTED.set(CONSTRUCTED.get() + 1);
        Self { payload }
    }
}

impl<P: Default> Default for Tracked<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P: Clone> Clone for Tracked<P> {
    fn clone(&self) -> Self {
        Self::new(self.payload.clone())
    }
}

impl<P> Drop for Tracked<P> {
    fn drop(&mut self) {
        DESTROYED.set(DESTROYED.get() + 1);
    }
}

type SmallTracked = Tracked<u16>;
type BigTracked = Tracked<[u64; 4]>;

#[test]
fn test_scalar_create_yields_zero() {
    unsafe {
        let mut s = slot::create::<i8>();
        assert_eq!(*slot::access::<i8>(&mut s), 0);
        slot::clear::<i8>(&mut s);

        let mut s = slot::create::<i16>();
        assert_eq!(*slot::access::<i16>(&mut s), 0);
        slot::clear::<i16>(&mut s);

        let mut s = slot::create::<i32>();
        assert_eq!(*slot::access::<i32>(&mut s), 0);
        slot::clear::<i32>(&mut s);

        let mut s = slot::create::<i64>();
        assert_eq!(*slot::access::<i64>(&mut s), 0);
        slot::clear::<i64>(&mut s);

        let mut s = slot::create::<f32>();
        assert_eq!(*slot::access::<f32>(&mut s), 0.0);
        slot::clear::<f32>(&mut s);

        let mut s = slot::create::<f64>();
        assert_eq!(*slot::access::<f64>(&mut s), 0.0);
        slot::clear::<f64>(&mut s);
    }
}

#[test]
fn test_int_scenario() {
    let counter = CountingAlloc::new();
    unsafe {
        let mut a = slot::create_in::<i32, _>(&counter);
        assert_eq!(*slot::const_access::<i32>(&a), 0);

        let mut b = slot::copy_in(&42i32, &counter);
        assert_eq!(*slot::access::<i32>(&mut b), 42);

        slot::clear_in::<i32, _>(&mut b, &counter);
        slot::clear_in::<i32, _>(&mut a, &counter);
    }
    assert_eq!(counter.stats().allocations, 0);
    assert_eq!(counter.stats().deallocations, 0);
}

#[test]
fn test_small_type_never_allocates() {
    reset_counts();
    let counter = CountingAlloc::new();
    unsafe {
        let mut created = slot::create_in::<SmallTracked, _>(&counter);
        let mut copied = slot::copy_in(&Tracked::new(9u16), &counter);
        assert_eq!(slot::const_access::<SmallTracked>(&copied).payload, 9);
        slot::clear_in::<SmallTracked, _>(&mut created, &counter);
        slot::clear_in::<SmallTracked, _>(&mut copied, &counter);
    }
    assert_eq!(counter.stats().allocations, 0);
    // default + temporary + its clone
    assert_eq!(counts(), (3, 3));
}

#[test]
fn test_big_type_allocates_once_per_value() {
    reset_counts();
    let counter = CountingAlloc::new();
    let original = BigTracked::new([1, 2, 3, 4]);
    unsafe {
        let mut s = slot::copy_in(&original, &counter);
        assert_eq!(counter.stats().allocations, 1);
        assert_eq!(counts(), (2, 0));

        assert_eq!(slot::const_access::<BigTracked>(&s), &original);
        slot::access::<BigTracked>(&mut s).payload[0] = 10;
        assert_eq!(original.payload[0], 1);

        slot::clear_in::<BigTracked, _>(&mut s, &counter);
    }
    let stats = counter.stats();
    assert_eq!(stats.allocations, 1);
    assert_eq!(stats.deallocations, 1);
    assert_eq!(stats.allocated_bytes, std::mem::size_of::<BigTracked>());
    assert!(stats.is_balanced());
    assert_eq!(counts(), (2, 1));
}

#[test]
fn test_big_user_type_scenario() {
    reset_counts();
    let counter = CountingAlloc::new();
    unsafe {
        let mut s = slot::create_in::<BigTracked, _>(&counter);
        assert_eq!(counts(), (1, 0));
        slot::clear_in::<BigTracked, _>(&mut s, &counter);
    }
    assert_eq!(counts(), (1, 1));
    assert_eq!(counter.stats().allocations, 1);
    assert_eq!(counter.stats().deallocations, 1);
}

#[test]
fn test_distinct_copies_do_not_alias() {
    let counter = CountingAlloc::new();
    let value = vec![1u32, 2, 3];
    unsafe {
        let mut a = slot::copy_in(&value, &counter);
        let mut b = slot::copy_in(&value, &counter);
        assert!(!std::ptr::eq(
            slot::const_access::<Vec<u32>>(&a),
            slot::const_access::<Vec<u32>>(&b)
        ));
        slot::access::<Vec<u32>>(&mut a).push(4);
        assert_eq!(slot::const_access::<Vec<u32>>(&b).len(), 3);
        slot::clear_in::<Vec<u32>, _>(&mut a, &counter);
        slot::clear_in::<Vec<u32>, _>(&mut b, &counter);
    }
    assert_eq!(counter.stats().allocations, 2);
    assert!(counter.stats().is_balanced());
}

#[test]
fn test_param_slot_balances() {
    reset_counts();
    let counter = CountingAlloc::new();
    {
        let a: ParamSlot<BigTracked, _> = ParamSlot::new_in(&counter);
        let b = a.clone();
        let c = ParamSlot::copy_in(&Tracked::new(5u16), &counter);
        assert_eq!(a.size_class(), SizeClass::Big);
        assert!(c.is_inline());
        assert_eq!(*a, *b);
        assert_eq!(counter.stats().allocations, 2);
    }
    let (constructed, destroyed) = counts();
    assert_eq!(constructed, destroyed);
    assert!(counter.stats().is_balanced());
}

#[test]
fn test_param_slot_into_inner_moves_value() {
    reset_counts();
    let counter = CountingAlloc::new();
    let p = ParamSlot::from_value_in(BigTracked::new([7; 4]), &counter);
    let value = p.into_inner();
    assert_eq!(value.payload, [7; 4]);
    assert_eq!(counts(), (1, 0));
    assert!(counter.stats().is_balanced());
    drop(value);
    assert_eq!(counts(), (1, 1));
}

#[test]
fn test_cast_views_match_cast_kind() {
    let small = 3u8;
    let word = 0x55usize;
    let big = [1u64, 2, 3];

    let v = slot::cast(&small);
    assert_eq!(v.kind(), slot::cast_kind::<u8>());
    assert_eq!(v.kind(), CastKind::Copy);
    assert_eq!(*v.get(), 3);

    let v = slot::cast(&word);
    assert_eq!(v.kind(), CastKind::Bits);
    assert_eq!(*v.get(), 0x55);

    let v = slot::cast(&big);
    assert_eq!(v.kind(), CastKind::Address);
    assert!(std::ptr::eq(v.get(), &big));
}

#[test]
fn test_owned_cast_view_clears_copy() {
    reset_counts();
    let value = SmallTracked::new(4);
    {
        let view = slot::cast(&value);
        assert!(view.is_owned());
        assert_eq!(view.get().payload, 4);
        assert_eq!(counts(), (2, 0));
    }
    assert_eq!(counts(), (2, 1));
}

#[test]
fn test_borrowed_cast_view_never_drops() {
    reset_counts();
    let value = BigTracked::new([0; 4]);
    {
        let view = slot::cast(&value);
        assert!(!view.is_owned());
    }
    assert_eq!(counts(), (1, 0));
}

#[test]
fn test_slot_is_reusable_storage() {
    let mut storage = [Slot::uninit(), Slot::uninit(), Slot::uninit()];
    for (i, s) in storage.iter_mut().enumerate() {
        *s = slot::copy(&format!("item-{i}"));
    }
    unsafe {
        assert_eq!(slot::const_access::<String>(&storage[1]), "item-1");
        for s in &mut storage {
            slot::clear::<String>(s);
        }
        for (i, s) in storage.iter_mut().enumerate() {
            *s = slot::copy(&(i as i32));
        }
        assert_eq!(*slot::const_access::<i32>(&storage[2]), 2);
        for s in &mut storage {
            slot::clear::<i32>(s);
        }
    }
}
