//! Core identifier types.

/// Vertex ID type: a dense index in `[0, vertex_count)`.
///
/// Vertices have no separate object identity; the index is the vertex.
pub type VertexId = usize;
