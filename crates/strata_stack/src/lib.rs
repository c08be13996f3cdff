//! Stack growth guard for recursive value helpers.
//!
//! The walker in `strata_walk` is iterative and never needs this. The
//! helpers that stay naturally recursive (structural equality, `Display`
//! and `Debug` of nested values) wrap each level in
//! [`ensure_sufficient_stack`] so a value nested a hundred thousand levels
//! deep can still be compared and printed.
//!
//! On native targets the stack is grown with `stacker`. On `wasm32` the
//! guard is a passthrough.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```text
/// fn depth(value: &Value) -> usize {
///     ensure_sufficient_stack(|| match value {
///         Value::Sequence(items) => 1 + items.read().iter().map(depth).max().unwrap_or(0),
///         _ => 0,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
