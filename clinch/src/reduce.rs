//! Greedy reduction of an interaction graph to a clique.

use crate::graph::InteractionGraph;

/// The outcome of reducing an interaction graph to a clique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduction {
    /// Surviving chains, in insertion order. Every pair interacts.
    pub clique: Vec<String>,
    /// Chains deleted on the way, in removal order.
    pub removed: Vec<String>,
}

impl InteractionGraph {
    /// Reduce the graph in place to a mutually-interacting chain set.
    ///
    /// Repeatedly deletes the surviving chain with the fewest interactions
    /// until the least-connected survivor interacts with every other
    /// survivor, at which point the survivors form a clique. Ties for fewest
    /// interactions go to the chain inserted earliest. Empty and
    /// single-chain graphs are returned unchanged.
    ///
    /// The result is maximal under this deletion order, not necessarily the
    /// largest clique the graph contains — finding that is NP-hard.
    ///
    /// The graph is left holding only the surviving chains; callers that
    /// need the original keep a clone. Each deletion is logged on stderr.
    pub fn reduce_to_clique(&mut self) -> Reduction {
        let mut removed = Vec::new();

        loop {
            let n = self.len();

            let candidate = self
                .graph()
                .node_indices()
                .map(|node| (node, self.degree(node)))
                .min_by_key(|&(node, degree)| (degree, node));

            let Some((node, degree)) = candidate else {
                break;
            };

            // The least-connected survivor touches all others, so every
            // survivor does: the graph is complete.
            if degree == n - 1 {
                break;
            }

            if let Some(name) = self.remove(node) {
                eprintln!("{}: {} of {} interactions, deleting", name, degree, n - 1);
                removed.push(name);
            }
        }

        debug_assert!(self.is_complete());

        Reduction {
            clique: self.members(),
            removed,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::graph::InteractionGraph;

    fn graph_of(edges: &[(&str, &str)]) -> InteractionGraph {
        let mut graph = InteractionGraph::new();
        for (a, b) in edges {
            graph.add_interaction(a, b);
        }
        graph
    }

    #[test]
    fn worked_example() {
        // Chains 1-5 with {2, 3, 4} pairwise interacting, 1 touching 2, 3
        // and 5, and 5 touching only 1. The two least-connected chains go
        // first: 5 (one interaction), then 1 (two, tied with 4 but inserted
        // earlier), leaving the triangle.
        let mut graph = graph_of(&[
            ("1", "2"),
            ("1", "3"),
            ("2", "3"),
            ("2", "4"),
            ("3", "4"),
            ("5", "1"),
        ]);

        let reduction = graph.reduce_to_clique();

        assert_eq!(reduction.removed, vec!["5", "1"]);
        assert_eq!(reduction.clique, vec!["2", "3", "4"]);
        assert!(graph.is_complete());
    }

    #[test]
    fn already_complete_graph_loses_nothing() {
        let mut graph = graph_of(&[("a", "b"), ("b", "c"), ("a", "c")]);

        let reduction = graph.reduce_to_clique();

        assert_eq!(reduction.removed, Vec::<String>::new());
        assert_eq!(reduction.clique, vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_graph_reduces_to_an_empty_clique() {
        let mut graph = InteractionGraph::new();

        let reduction = graph.reduce_to_clique();

        assert!(reduction.clique.is_empty());
        assert!(reduction.removed.is_empty());
    }

    #[test]
    fn single_chain_survives() {
        let mut graph = InteractionGraph::new();
        let _ = graph.add_chain("1abc_A");

        let reduction = graph.reduce_to_clique();

        assert_eq!(reduction.clique, vec!["1abc_A"]);
        assert!(reduction.removed.is_empty());
    }

    #[test]
    fn disconnected_pair_keeps_the_later_chain() {
        // Two chains with no interaction: neither dominates, so the tie
        // falls to insertion order and the earlier chain is deleted.
        let mut graph = InteractionGraph::new();
        let _ = graph.add_chain("a");
        let _ = graph.add_chain("b");

        let reduction = graph.reduce_to_clique();

        assert_eq!(reduction.removed, vec!["a"]);
        assert_eq!(reduction.clique, vec!["b"]);
    }

    #[test]
    fn members_interact_in_the_original_graph() {
        // A path A_x - B_y - C_z: the endpoints never interact, so at most
        // one of them survives, and every surviving pair must already have
        // interacted before the reduction.
        let mut graph = graph_of(&[("A_x", "B_y"), ("B_y", "C_z")]);
        let original = graph.clone();

        let reduction = graph.reduce_to_clique();

        for (i, a) in reduction.clique.iter().enumerate() {
            for b in &reduction.clique[i + 1..] {
                assert!(original.contains_interaction(a, b));
            }
        }
        assert!(
            !(reduction.clique.contains(&"A_x".to_string())
                && reduction.clique.contains(&"C_z".to_string()))
        );
        assert_eq!(
            reduction.clique.len() + reduction.removed.len(),
            original.len()
        );
    }

    #[test]
    fn reduces_a_validated_adjacency_mapping() {
        // Same shape as the worked example, entering through the raw
        // adjacency constructor: the declared order drives the tie-break.
        let nodes = ["1", "2", "3", "4", "5"]
            .iter()
            .map(|name| (*name).to_string())
            .collect::<Vec<_>>();
        let adjacency = [
            ("1", vec!["2", "3", "5"]),
            ("2", vec!["1", "3", "4"]),
            ("3", vec!["1", "2", "4"]),
            ("4", vec!["2", "3"]),
            ("5", vec!["1"]),
        ]
        .iter()
        .map(|(node, neighbours)| {
            (
                (*node).to_string(),
                neighbours.iter().map(|n| (*n).to_string()).collect(),
            )
        })
        .collect::<HashMap<String, Vec<String>>>();

        let mut graph = InteractionGraph::from_adjacency(&nodes, &adjacency)
            .expect("the mapping is symmetric");

        let reduction = graph.reduce_to_clique();

        assert_eq!(reduction.removed, vec!["5", "1"]);
        assert_eq!(reduction.clique, vec!["2", "3", "4"]);
    }
}
