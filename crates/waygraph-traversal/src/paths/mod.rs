//! Path discovery between two vertices.
//!
//! - [`all_simple_paths`]: every simple path from source to target, found by
//!   backtracking DFS in adjacency order
//! - [`all_simple_paths_with`]: the same search under [`EnumerationLimits`]
//!   caps, for graphs dense enough that exhaustive enumeration explodes
//! - [`shortest_path`]: one fewest-edge path via BFS with predecessor
//!   tracking, optionally treating one vertex as removed
//!
//! Unreachability is data, not an error: the enumeration returns an empty
//! collection and the shortest-path query an empty path.

mod enumerate;
mod shortest;
mod types;

#[cfg(test)]
mod tests;

pub use self::enumerate::{all_simple_paths, all_simple_paths_with};
pub use self::shortest::shortest_path;
pub use self::types::EnumerationLimits;
