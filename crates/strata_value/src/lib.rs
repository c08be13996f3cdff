//! Strata Value - the value graph walked by `strata_walk`.
//!
//! This crate provides:
//! - The `Value` enum: scalars, callables, the four container shapes
//!   (record, sequence, map, set) and opaque built-ins
//! - `Shared<T>`, the lock-protected allocation behind every container
//! - The `Container` interface and its `ContainerRef` handle, which is all
//!   the walker ever sees of a concrete container
//! - Integrity levels (extensible, non-extensible, sealed, frozen)
//!
//! # Allocation
//!
//! Containers are shared, interior-mutable allocations. Cloning a `Value`
//! clones the handle, so two clones observe each other's writes and locks.
//! Allocation goes through `Value` factories and `ContainerRef::new`; the
//! `Shared` constructor is private to this crate.
//!
//! # Identity
//!
//! Map keys and set members compare by SameValueZero (`Identity`): scalars by
//! value, everything else by allocation. `PartialEq` on `Value` is
//! structural instead.

mod callable;
mod class;
mod collections;
mod container;
mod error;
mod integrity;
mod key;
mod opaque;
mod shared;
mod value;

pub use callable::{Callable, CallableBody, CallableKind};
pub use class::ValueClass;
pub use collections::{AssocMap, Record, Sequence, UniqueSet, MAX_INDEX};
pub use container::{Container, ContainerKind, ContainerRef};
pub use error::{CallableError, WriteError};
pub use integrity::Integrity;
pub use key::{Identity, Key};
pub use opaque::Opaque;
pub use shared::Shared;
pub use value::Value;
