//! Walk limits.

use crate::error::{WalkError, WalkResult};

/// Opt-in traversal limits.
///
/// The walker keeps no identity set, so cyclic input never drains the
/// queue. The default config is unbounded; set a depth or visit limit to
/// turn runaway traversal into an error instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkConfig {
    /// Deepest allowed node; the root is depth 0.
    pub max_depth: Option<usize>,
    /// Most nodes processed in one walk, the root included.
    pub max_visits: Option<usize>,
}

impl WalkConfig {
    /// Unbounded.
    pub fn new() -> Self {
        WalkConfig::default()
    }

    #[must_use]
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    #[must_use]
    pub fn with_max_visits(mut self, limit: usize) -> Self {
        self.max_visits = Some(limit);
        self
    }

    pub fn is_bounded(&self) -> bool {
        self.max_depth.is_some() || self.max_visits.is_some()
    }
}

/// Per-walk counters checked against a [`WalkConfig`].
pub(crate) struct Budget {
    config: WalkConfig,
    visited: usize,
    deepest: usize,
}

impl Budget {
    pub(crate) fn new(config: WalkConfig) -> Self {
        Budget {
            config,
            visited: 0,
            deepest: 0,
        }
    }

    /// Count one node at `depth`, failing once a limit is crossed.
    pub(crate) fn admit(&mut self, depth: usize) -> WalkResult<()> {
        self.visited += 1;
        self.deepest = self.deepest.max(depth);

        if let Some(limit) = self.config.max_depth.filter(|limit| depth > *limit) {
            tracing::warn!(limit, depth, "walk depth limit exceeded");
            return Err(WalkError::DepthLimit { limit });
        }
        if let Some(limit) = self.config.max_visits.filter(|limit| self.visited > *limit) {
            tracing::warn!(limit, visited = self.visited, "walk visit limit exceeded");
            return Err(WalkError::VisitLimit { limit });
        }
        Ok(())
    }

    pub(crate) fn visited(&self) -> usize {
        self.visited
    }

    pub(crate) fn deepest(&self) -> usize {
        self.deepest
    }
}
