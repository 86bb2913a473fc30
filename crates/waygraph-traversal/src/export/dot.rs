//! DOT and edge-list rendering.

use waygraph_core::Graph;

/// Render the graph in GraphViz DOT format.
///
/// Directed graphs render as `digraph` with `->` edges; undirected graphs as
/// `strict graph` with `--` edges. Undirected adjacency stores each edge at
/// both endpoints, so each undirected edge is emitted twice; `strict` makes
/// GraphViz collapse the duplicates. Vertices with no adjacencies are
/// emitted as bare vertex lines so they still appear in the drawing.
pub fn to_dot<G>(graph: &G) -> String
where
    G: Graph + ?Sized,
{
    let directed = graph.is_directed();
    let (header, arrow) = if directed {
        ("digraph", "->")
    } else {
        ("strict graph", "--")
    };

    let mut out = String::new();
    out.push_str(header);
    out.push_str(" {\n");
    for v1 in 0..graph.vertex_count() {
        let mut degree = 0;
        for v2 in graph.adjacencies(v1) {
            out.push_str(&format!("  {} {} {}\n", v1, arrow, v2));
            degree += 1;
        }
        if degree == 0 {
            out.push_str(&format!("{}\n", v1));
        }
    }
    out.push_str("}\n");
    out
}

/// Render the graph as plain edge-list text, one line per adjacency entry.
///
/// `directed` selects the separator (`->` or `--`); the adjacency walk is
/// the same either way, so undirected representations emit each edge once
/// per endpoint.
pub fn to_edge_list_text<G>(graph: &G, directed: bool) -> String
where
    G: Graph + ?Sized,
{
    let arrow = if directed { "->" } else { "--" };
    let mut out = String::new();
    for v1 in 0..graph.vertex_count() {
        for v2 in graph.adjacencies(v1) {
            out.push_str(&format!("{} {} {}\n", v1, arrow, v2));
        }
    }
    out
}
