//! Text export of graph structure.
//!
//! Read-only rendering over the [`Graph`](waygraph_core::Graph) contract:
//! GraphViz DOT ([`to_dot`]) and a bare edge-list text form
//! ([`to_edge_list_text`]). No graph state is touched or cached.

mod dot;

pub use self::dot::{to_dot, to_edge_list_text};
