//! Outcome types for bottleneck analysis.

use serde::{Deserialize, Serialize};

use waygraph_core::VertexId;

/// Outcome of cut-vertex detection for a source/target pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutVertices {
    /// Interior vertices whose removal leaves the target unreachable from
    /// the source, in order along the route from source to target.
    Found(Vec<VertexId>),

    /// A route exists and survives the removal of any single interior
    /// vertex.
    NoCutVertex,

    /// The target is not reachable from the source at all.
    Unreachable,
}

impl CutVertices {
    /// The indispensable vertices, if any were found.
    #[must_use]
    pub fn vertices(&self) -> Option<&[VertexId]> {
        match self {
            CutVertices::Found(vs) => Some(vs),
            _ => None,
        }
    }

    /// Whether the pair is disconnected.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, CutVertices::Unreachable)
    }
}

/// Outcome of shared-vertex detection across all shortest paths of a
/// source/target pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommonVertices {
    /// More than one shortest path exists; these interior vertices appear on
    /// every one of them, in the order they occur along any shortest path.
    /// Empty when the paths share no interior vertex.
    Shared(Vec<VertexId>),

    /// Exactly one shortest path connects the pair.
    SinglePath,

    /// The target is not reachable from the source at all.
    Unreachable,
}

impl CommonVertices {
    /// The shared interior vertices, if multiple shortest paths exist.
    #[must_use]
    pub fn vertices(&self) -> Option<&[VertexId]> {
        match self {
            CommonVertices::Shared(vs) => Some(vs),
            _ => None,
        }
    }

    /// Whether the pair is disconnected.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, CommonVertices::Unreachable)
    }
}
