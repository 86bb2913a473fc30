//! Parameters for exhaustive path enumeration.

use serde::{Deserialize, Serialize};

/// Caps for exhaustive simple-path enumeration.
///
/// The number of simple paths between two vertices grows factorially with
/// vertex count on dense graphs. The default places no cap (the search is
/// exhaustive); either limit can be set to keep a query bounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationLimits {
    /// Stop after this many paths have been recorded (None = unlimited).
    pub max_paths: Option<usize>,

    /// Do not extend paths beyond this many vertices (None = unlimited).
    /// Paths of exactly this length are still recorded when they reach the
    /// target.
    pub max_len: Option<usize>,
}

impl EnumerationLimits {
    /// Builder: cap the number of recorded paths.
    #[must_use]
    pub fn max_paths(mut self, max: usize) -> Self {
        self.max_paths = Some(max);
        self
    }

    /// Builder: cap path length, in vertices.
    #[must_use]
    pub fn max_len(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }
}
