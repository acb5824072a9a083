use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use crate::FlowMatrix;

/// A directed-graph view of a [`FlowMatrix`].
///
/// Nodes are the matrix indices `0..N`. Every non-zero entry `(i, j)`
/// becomes one directed edge `i → j` whose weight attribute is exactly
/// that entry. Zero entries are left unrepresented: the view is sparse
/// by design, and an absent edge round-trips to a zero entry.
#[derive(Debug, Clone)]
pub struct FlowGraph {
    graph: DiGraph<usize, f64>,
}

impl FlowGraph {
    /// Builds the graph view of a matrix.
    ///
    /// Self-loops are emitted for non-zero diagonal entries. The input
    /// matrix is never mutated, and building twice from the same matrix
    /// yields identical node and edge sets.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_matrix(matrix: &FlowMatrix) -> Self {
        let order = matrix.order();
        let mut graph = DiGraph::with_capacity(order, 0);

        for node in 0..order {
            graph.add_node(node);
        }

        for from in 0..order {
            for to in 0..order {
                let weight = matrix[(from, to)];
                if weight != 0.0 {
                    graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), weight);
                }
            }
        }

        Self { graph }
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the weight of the edge `from → to`, if present.
    #[must_use]
    pub fn weight(&self, from: usize, to: usize) -> Option<f64> {
        self.graph
            .find_edge(NodeIndex::new(from), NodeIndex::new(to))
            .map(|edge| self.graph[edge])
    }

    #[must_use]
    pub fn contains_edge(&self, from: usize, to: usize) -> bool {
        self.weight(from, to).is_some()
    }

    /// Iterates over all edges as `(from, to, weight)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.source().index(), edge.target().index(), *edge.weight()))
    }

    /// Iterates over node identifiers in index order.
    pub fn nodes(&self) -> impl Iterator<Item = usize> {
        0..self.graph.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_edge_matrix_maps_to_single_edge() {
        let matrix = FlowMatrix::from_rows(vec![vec![0.0, 1.0], vec![0.0, 0.0]]).unwrap();

        let graph = FlowGraph::from_matrix(&matrix);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight(0, 1), Some(1.0));
        assert!(!graph.contains_edge(1, 0));
        assert!(!graph.contains_edge(0, 0));
        assert!(!graph.contains_edge(1, 1));
    }

    #[test]
    fn edges_exist_exactly_where_entries_are_non_zero() {
        let matrix = FlowMatrix::from_rows(vec![
            vec![0.0, 2.5, 0.0],
            vec![0.0, 0.0, -1.0],
            vec![4.0, 0.0, 0.0],
        ])
        .unwrap();

        let graph = FlowGraph::from_matrix(&matrix);

        for from in 0..3 {
            for to in 0..3 {
                let entry = matrix[(from, to)];
                if entry == 0.0 {
                    assert_eq!(graph.weight(from, to), None);
                } else {
                    assert_eq!(graph.weight(from, to), Some(entry));
                }
            }
        }
    }

    #[test]
    fn diagonal_entries_become_self_loops() {
        let matrix = FlowMatrix::from_rows(vec![vec![3.0, 0.0], vec![0.0, 0.0]]).unwrap();

        let graph = FlowGraph::from_matrix(&matrix);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight(0, 0), Some(3.0));
    }

    #[test]
    fn derivation_is_repeatable() {
        let matrix = FlowMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![0.0, 0.0, 0.0],
            vec![3.0, 0.0, 0.5],
        ])
        .unwrap();

        let first = FlowGraph::from_matrix(&matrix);
        let second = FlowGraph::from_matrix(&matrix);

        assert_eq!(first.node_count(), second.node_count());

        let mut first_edges: Vec<_> = first.edges().collect();
        let mut second_edges: Vec<_> = second.edges().collect();
        first_edges.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        second_edges.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        assert_eq!(first_edges, second_edges);
    }

    #[test]
    fn empty_matrix_maps_to_empty_graph() {
        let graph = FlowGraph::from_matrix(&FlowMatrix::zeros(0));

        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.nodes().count(), 0);
    }

    #[test]
    fn nodes_are_listed_in_index_order() {
        let graph = FlowGraph::from_matrix(&FlowMatrix::zeros(4));

        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }
}
