//! Route bottleneck analysis.
//!
//! Two analyses over a source/target pair, both built on the BFS
//! shortest-path primitive:
//!
//! - [`cut_vertices`]: which intermediate vertices are indispensable: remove
//!   one and no route from source to target survives
//! - [`common_vertices`]: which vertices lie on *every* shortest path between
//!   the pair
//!
//! Outcomes that are not vertex collections ("unreachable", "only one
//! shortest path", "no cut vertex") are explicit enum variants, never
//! sentinel values mixed into the collection.

mod common;
mod cut;
mod types;

#[cfg(test)]
mod tests;

pub use self::common::common_vertices;
pub use self::cut::cut_vertices;
pub use self::types::{CommonVertices, CutVertices};
