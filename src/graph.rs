use rustc_hash::FxHashMap;

use crate::types::{Edge, TokenPair};

/// Directed adjacency index over a set of pairs
///
/// Each token maps to the pairs it can be swapped out of, kept in the
/// order the pairs were supplied. That order is what fixes the order of
/// the routes found over this graph.
pub struct PairGraph<'a> {
    adjacency: FxHashMap<&'a str, Vec<Edge<'a>>>,
}

impl<'a> PairGraph<'a> {
    // Build the graph from the working set of pairs
    pub fn build_graph(pairs: &'a [TokenPair]) -> Self {
        let mut adjacency: FxHashMap<&'a str, Vec<Edge<'a>>> = FxHashMap::default();
        for pair in pairs {
            let edge = pair.edge();
            adjacency.entry(edge.token_in).or_default().push(edge);
        }
        Self { adjacency }
    }

    /// Outgoing edges of a token, empty for tokens the graph has never seen
    pub fn edges(&self, token: &str) -> &[Edge<'a>] {
        self.adjacency.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn token_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
