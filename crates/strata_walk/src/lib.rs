//! Strata Walk - breadth-first traversal of value graphs.
//!
//! This crate provides:
//! - `classify`: maps a value to the walker's node `Category`
//! - `Walker`: the iterative breadth-first driver, in iterator form
//!   (`walk` + `WalkHooks`) and predicate form (`exists` + `ExistsHooks`)
//! - Deep operations built purely from hooks: `deep_copy`, the deep lock
//!   family, and the deep predicate family
//! - Shallow conveniences: `copy`, `assign`, `to_record`/`to_map`/`to_set`
//!
//! # Cycles
//!
//! The walker keeps no identity set. Cyclic input does not terminate under
//! the default, unbounded [`WalkConfig`]; set `max_depth` or `max_visits`
//! on a [`Walker`] to turn that into a [`WalkError`].
//!
//! # Tracing
//!
//! Walks emit `tracing` events. Call [`init_tracing`] once to print them,
//! filtered by `RUST_LOG`.

mod classify;
mod config;
mod deep;
mod error;
mod shallow;
mod walker;

use std::sync::Once;

pub use classify::{classify, Category};
pub use config::WalkConfig;
pub use deep::{
    deep_copy, deep_copy_with, deep_freeze, deep_has_extensible, deep_has_frozen,
    deep_has_instance_of, deep_has_prop, deep_has_sealed, deep_prevent_extensions, deep_seal,
    CopyHooks, LockHooks,
};
pub use error::{WalkError, WalkResult};
pub use shallow::{assign, copy, entries, has_instance_of, has_prop, size, to_map, to_record, to_set};
pub use walker::{exists, walk, ContainerPredicate, ExistsHooks, WalkHooks, Walker, WorkItem};

// Re-export the value model so callers need one dependency
pub use strata_value::{
    Callable, CallableError, CallableKind, ContainerKind, ContainerRef, Integrity, Key, Value,
    ValueClass, WriteError,
};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for walk diagnostics.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
