//! The type registry: tags, names, defaults, ordering, hashing and identities.
//!
//! Everything here is resolved at compile time. Tags, names and defaults
//! answer for every type, with fallbacks for unregistered ones; [`ParamType`]
//! adds custom registrations. Hashing lives on [`ParamHash`], which has no
//! fallback. Three-way comparison is available for every `PartialOrd` type.

/// Three-way comparison.
pub mod compare;
/// Serializable type descriptors.
pub mod descriptor;
/// Hash codes.
pub mod hash;
pub mod id;
/// Type tags.
pub mod kind;
pub mod param_type;

pub use compare::{compare, ordering_of};
pub use descriptor::{descriptor, TypeDescriptor};
pub use hash::{hash, ParamHash};
pub use id::{id_number, IdNumber, IdWord};
pub use kind::TypeKind;
pub use param_type::{init_default, type_id, type_name, value_init, ParamType};
