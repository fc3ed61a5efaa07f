//! # `genslot` - Parameterized Value Slots
//!
//! A pointer-sized storage cell that can hold a value of any type, used as the
//! element building block of generic containers (lists, dictionaries, trees).
//!
//! ## Storage Policy
//!
//! The strategy for a type `T` is chosen at compile time from its layout:
//!
//! - **Small** (`size_of::<T>() <= size_of::<*mut ()>()`, alignment no larger
//!   than a pointer's): the value is constructed directly in the slot's bytes.
//!   No allocation, no indirection.
//! - **Big**: the slot stores a pointer to one heap block holding the value.
//!
//! A type exactly as wide as a pointer is small. Every operation reads the
//! same compile-time constant, so creation and destruction always agree.
//!
//! ## Layers
//!
//! 1. **Raw slots** ([`Slot`], [`slot::create`], [`slot::copy`],
//!    [`slot::clear`], [`slot::access`], [`slot::const_access`],
//!    [`slot::cast`]): the caller tracks which type lives in which slot and
//!    pairs every create/copy with one clear.
//! 2. **Owned slots** ([`ParamSlot`]): the type parameter is the tag; the value
//!    is cleared exactly once by `Drop`.
//! 3. **Checked slots** ([`CheckedSlot`]): a liveness flag turns misuse into a
//!    reported failure.
//!
//! Alongside the slots:
//!
//! - [`types`]: tags, names, default values, three-way `compare`, `hash`
//!   and `id_number`.
//! - [`order`]: strict-weak-order predicates and a dynamically dispatched
//!   comparator holder.
//! - [`alloc`]: the allocator trait behind big values, plus a counting
//!   decorator.
//!
//! ## Example
//!
//! ```rust
//! use genslot::slot::{self, Slot};
//! use genslot::ParamSlot;
//!
//! // Raw: the caller names the type at every call.
//! let mut s: Slot = slot::copy(&42i32);
//! unsafe {
//!     assert_eq!(*slot::access::<i32>(&mut s), 42);
//!     slot::clear::<i32>(&mut s);
//! }
//!
//! // Owned: cleared on drop.
//! let name = ParamSlot::from_value(String::from("slot"));
//! assert_eq!(name.len(), 4);
//! assert!(!name.is_inline());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod alloc;
pub mod error;
pub mod io;
pub mod order;
pub mod slot;
pub mod types;

pub use alloc::{AllocError, CountingAlloc, Global, SlotAlloc};
pub use error::{undefined_operation, SlotError};
pub use order::{
    Comparator, DynComparator, SmallerCmpFn, SmallerCmpObj, SmallerDefault, StrictOrder,
};
pub use slot::{CheckedSlot, ParamSlot, SizeClass, Slot, SlotView};
pub use types::{
    compare, hash, id_number, init_default, type_id, type_name, ParamHash, ParamType, TypeKind,
};

// Compile-time assertions for the slot layout.
const _: () = {
    use core::mem;

    // A slot is exactly one pointer.
    assert!(mem::size_of::<Slot>() == mem::size_of::<*mut ()>());
    assert!(mem::align_of::<Slot>() == mem::align_of::<*mut ()>());

    // The owning handle adds nothing when the allocator is zero-sized.
    assert!(mem::size_of::<ParamSlot<u8>>() == mem::size_of::<Slot>());
    assert!(mem::size_of::<ParamSlot<[u64; 8]>>() == mem::size_of::<Slot>());

    // Pointer-sized types sit on the small side of the boundary.
    assert!(slot::is_small::<usize>());
    assert!(slot::is_small::<*const u8>());
    assert!(!slot::is_small::<[usize; 2]>());
};
