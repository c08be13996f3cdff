//! Breadth-first walker.
//!
//! Two forms share one queue discipline:
//!
//! - [`Walker::walk`] visits every node, dispatching by [`Category`] to a
//!   [`WalkHooks`] implementation that writes results into an output tree.
//!   The output root is read back from a sentinel sequence.
//! - [`Walker::exists`] evaluates an [`ExistsHooks`] predicate on every
//!   node and stops at the first hit.
//!
//! Both pop from the front and push children to the back, so nodes are
//! visited in level order. Neither recurses, and neither remembers what it
//! has seen: cyclic input never drains unless a [`WalkConfig`] limit is set.

use std::collections::VecDeque;

use strata_value::{Callable, ContainerKind, ContainerRef, Key, Value};

use crate::classify::{classify, Category};
use crate::config::{Budget, WalkConfig};
use crate::error::WalkResult;

/// One pending node.
#[derive(Clone, Debug)]
pub struct WorkItem {
    /// Output node the processed value belongs to.
    pub container: ContainerRef,
    /// Key of the value inside `container`.
    pub key: Key,
    pub value: Value,
    /// Distance from the root; the root is 0.
    pub depth: usize,
}

/// Callbacks for [`Walker::walk`]. Every method defaults to a no-op.
///
/// Hooks write their own results into `container` with
/// [`ContainerRef::write_at`]. `container` is the output node the visited
/// value belongs to; for the root it is the sentinel.
pub trait WalkHooks {
    /// Primitives, `Null` and `Undefined`.
    fn on_scalar(&mut self, _value: &Value, _key: &Key, _container: &ContainerRef) -> WalkResult<()> {
        Ok(())
    }

    /// Callables. Their properties are not descended.
    fn on_callable(
        &mut self,
        _callable: &Callable,
        _key: &Key,
        _container: &ContainerRef,
    ) -> WalkResult<()> {
        Ok(())
    }

    /// Records, sequences, maps and sets, before any of their children.
    ///
    /// Returns the output node the children are written into; `None` means
    /// the children target `node` itself.
    fn on_container(
        &mut self,
        _node: &ContainerRef,
        _key: &Key,
        _container: &ContainerRef,
    ) -> WalkResult<Option<ContainerRef>> {
        Ok(None)
    }

    /// Object-like values with no walkable structure.
    fn on_unclassified(
        &mut self,
        _value: &Value,
        _key: &Key,
        _container: &ContainerRef,
    ) -> WalkResult<()> {
        Ok(())
    }
}

/// Predicates for [`Walker::exists`].
///
/// Only two shapes are distinguished: primitives, and everything else.
/// Callables are searched like containers with their own properties as
/// children; opaque values are containers without children.
pub trait ExistsHooks {
    fn on_scalar(&mut self, _value: &Value) -> bool {
        false
    }

    fn on_container(&mut self, _value: &Value) -> bool {
        false
    }
}

/// [`ExistsHooks`] testing a predicate on every object node.
pub struct ContainerPredicate<F>(F);

impl<F> ContainerPredicate<F>
where
    F: FnMut(&Value) -> bool,
{
    pub fn new(predicate: F) -> Self {
        ContainerPredicate(predicate)
    }
}

impl<F> ExistsHooks for ContainerPredicate<F>
where
    F: FnMut(&Value) -> bool,
{
    fn on_container(&mut self, value: &Value) -> bool {
        (self.0)(value)
    }
}

/// Breadth-first driver carrying its limits.
#[derive(Clone, Copy, Debug, Default)]
pub struct Walker {
    config: WalkConfig,
}

impl Walker {
    pub fn new(config: WalkConfig) -> Self {
        Walker { config }
    }

    pub fn config(&self) -> WalkConfig {
        self.config
    }

    /// Walk `root`, returning whatever the hooks wrote for it.
    ///
    /// The queue is seeded with the root under `Index(0)` of an empty
    /// sentinel sequence; the result is that slot, or `Undefined` when no
    /// hook wrote it.
    ///
    /// # Errors
    ///
    /// Propagates the first hook error, or a limit error from the config.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn walk<H: WalkHooks + ?Sized>(&self, root: &Value, hooks: &mut H) -> WalkResult<Value> {
        let sentinel = ContainerRef::new(ContainerKind::Sequence);
        let mut queue = VecDeque::from([WorkItem {
            container: sentinel.clone(),
            key: Key::Index(0),
            value: root.clone(),
            depth: 0,
        }]);
        let mut budget = Budget::new(self.config);

        while let Some(item) = queue.pop_front() {
            budget.admit(item.depth)?;
            let WorkItem {
                container,
                key,
                value,
                depth,
            } = item;

            match classify(&value) {
                Category::NotObject => hooks.on_scalar(&value, &key, &container)?,
                Category::Callable => {
                    if let Some(callable) = value.as_callable() {
                        hooks.on_callable(callable, &key, &container)?;
                    }
                }
                Category::Record | Category::Sequence | Category::AssocOrSet => {
                    if let Some(node) = value.as_container() {
                        let target = hooks
                            .on_container(&node, &key, &container)?
                            .unwrap_or_else(|| node.clone());
                        queue.extend(node.entries().into_iter().map(|(key, value)| {
                            WorkItem {
                                container: target.clone(),
                                key,
                                value,
                                depth: depth + 1,
                            }
                        }));
                    }
                }
                Category::Unclassified => hooks.on_unclassified(&value, &key, &container)?,
            }
        }

        tracing::debug!(
            visited = budget.visited(),
            max_depth = budget.deepest(),
            "walk drained"
        );
        Ok(sentinel.get(&Key::Index(0)).unwrap_or_default())
    }

    /// Whether any node of `root` satisfies the hooks. Stops at the first
    /// hit.
    ///
    /// # Errors
    ///
    /// Only a limit error from the config; unbounded walkers never fail.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn exists<H: ExistsHooks + ?Sized>(&self, root: &Value, hooks: &mut H) -> WalkResult<bool> {
        let mut queue = VecDeque::from([(root.clone(), 0usize)]);
        let mut budget = Budget::new(self.config);

        while let Some((value, depth)) = queue.pop_front() {
            budget.admit(depth)?;

            let is_object = classify(&value).is_object();
            let found = if is_object {
                hooks.on_container(&value)
            } else {
                hooks.on_scalar(&value)
            };
            if found {
                tracing::trace!(visited = budget.visited(), depth, "predicate matched");
                return Ok(true);
            }
            if is_object {
                queue.extend(
                    value
                        .own_entries()
                        .into_iter()
                        .map(|(_, child)| (child, depth + 1)),
                );
            }
        }

        tracing::debug!(
            visited = budget.visited(),
            max_depth = budget.deepest(),
            "search drained without a match"
        );
        Ok(false)
    }
}

/// Walk `root` with an unbounded [`Walker`].
///
/// # Errors
///
/// Propagates the first hook error.
pub fn walk<H: WalkHooks + ?Sized>(root: &Value, hooks: &mut H) -> WalkResult<Value> {
    Walker::default().walk(root, hooks)
}

/// Search `root` with an unbounded [`Walker`].
pub fn exists<H: ExistsHooks + ?Sized>(root: &Value, hooks: &mut H) -> bool {
    // Unbounded walkers have no failure path.
    Walker::default().exists(root, hooks).unwrap_or(false)
}
