//! The working chain-interaction graph.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use petgraph::prelude::*;
use thiserror::Error;

/// A malformed caller-supplied adjacency mapping.
///
/// [`InteractionGraph::from_adjacency`] checks the whole mapping before
/// building anything, so a reduction never runs over a half-consistent graph.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidGraph {
    /// An adjacency key does not appear in the declared chain set.
    #[error("adjacency key {0} is not a declared chain")]
    UnknownKey(String),
    /// A neighbour list references a chain outside the declared chain set.
    #[error("{node} lists unknown neighbour {neighbour}")]
    DanglingNeighbour {
        /// The chain whose neighbour list is at fault.
        node: String,
        /// The undeclared neighbour it lists.
        neighbour: String,
    },
    /// A chain lists a neighbour that does not list it back.
    #[error("{a} lists {b}, but {b} does not list {a}")]
    Asymmetric {
        /// The chain listing the interaction.
        a: String,
        /// The chain that fails to reciprocate it.
        b: String,
    },
    /// A chain lists itself as a neighbour.
    #[error("{0} lists itself as a neighbour")]
    SelfLoop(String),
}

/// An undirected graph of interacting chains.
///
/// Chain names are interned into stable node indices, so names can be looked
/// up in either direction and surviving indices keep their insertion order
/// across removals. Interactions are symmetric by construction; duplicates
/// and self pairs never produce a second node or a stray edge.
#[derive(Clone, Debug, Default)]
pub struct InteractionGraph {
    graph: StableUnGraph<String, ()>,
    names: HashMap<String, NodeIndex>,
}

/// Equality by logical content: the same set of chain names and the same set
/// of interactions, independent of the interned node indices.
///
/// `StableUnGraph` does not implement `PartialEq`, so the comparison is done
/// over chain names rather than raw indices.
impl PartialEq for InteractionGraph {
    fn eq(&self, other: &Self) -> bool {
        let self_names: HashSet<&String> = self.names.keys().collect();
        let other_names: HashSet<&String> = other.names.keys().collect();
        if self_names != other_names {
            return false;
        }
        let edges = |g: &InteractionGraph| -> HashSet<(String, String)> {
            g.graph
                .edge_indices()
                .filter_map(|e| g.graph.edge_endpoints(e))
                .map(|(a, b)| {
                    let (a, b) = (g.graph[a].clone(), g.graph[b].clone());
                    if a <= b {
                        (a, b)
                    } else {
                        (b, a)
                    }
                })
                .collect()
        };
        edges(self) == edges(other)
    }
}

impl InteractionGraph {
    /// Create an empty interaction graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a chain, returning its node index.
    ///
    /// Adding a chain that is already present returns the existing index.
    #[must_use]
    pub fn add_chain(&mut self, name: &str) -> NodeIndex {
        if let Some(&node) = self.names.get(name) {
            return node;
        }
        let node = self.graph.add_node(name.to_string());
        self.names.insert(name.to_string(), node);
        node
    }

    /// Record an interaction between `a` and `b`.
    ///
    /// Both chains are interned. An interaction that is already present is
    /// not re-added. A chain paired with itself contributes the chain but no
    /// edge, since a self loop would count towards its own degree.
    pub fn add_interaction(&mut self, a: &str, b: &str) {
        let a = self.add_chain(a);
        let b = self.add_chain(b);
        if a != b && self.graph.find_edge(a, b).is_none() {
            self.graph.add_edge(a, b, ());
        }
    }

    /// Build a graph from a declared chain set and an adjacency mapping.
    ///
    /// The mapping is validated in full before anything is built: every
    /// adjacency key must be a declared chain, every listed neighbour must be
    /// a declared chain, every listed neighbour must list the chain back, and
    /// no chain may list itself. A declared chain with no mapping entry is
    /// isolated. Duplicate names and duplicate neighbour entries collapse
    /// into one.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGraph`] describing the first violation found.
    pub fn from_adjacency(
        nodes: &[String],
        adjacency: &HashMap<String, Vec<String>>,
    ) -> Result<Self, InvalidGraph> {
        let declared = nodes.iter().map(String::as_str).collect::<HashSet<_>>();

        for key in adjacency.keys() {
            if !declared.contains(key.as_str()) {
                return Err(InvalidGraph::UnknownKey(key.clone()));
            }
        }

        for (node, neighbours) in adjacency {
            for neighbour in neighbours {
                if neighbour == node {
                    return Err(InvalidGraph::SelfLoop(node.clone()));
                }
                if !declared.contains(neighbour.as_str()) {
                    return Err(InvalidGraph::DanglingNeighbour {
                        node: node.clone(),
                        neighbour: neighbour.clone(),
                    });
                }
                let reciprocated = adjacency
                    .get(neighbour)
                    .map_or(false, |back| back.contains(node));
                if !reciprocated {
                    return Err(InvalidGraph::Asymmetric {
                        a: node.clone(),
                        b: neighbour.clone(),
                    });
                }
            }
        }

        let mut graph = Self::new();
        for name in nodes {
            let _ = graph.add_chain(name);
        }
        for (node, neighbours) in adjacency {
            for neighbour in neighbours {
                graph.add_interaction(node, neighbour);
            }
        }

        Ok(graph)
    }

    /// Number of chains currently in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns true if the graph holds no chains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Number of surviving chains this chain interacts with.
    #[must_use]
    pub fn degree(&self, node: NodeIndex) -> usize {
        self.graph.neighbors(node).count()
    }

    /// The chain name held at `node`.
    #[must_use]
    pub fn name(&self, node: NodeIndex) -> &str {
        &self.graph[node]
    }

    /// Look up a chain's node index by name.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.names.get(name).copied()
    }

    /// Returns true if `a` and `b` interact.
    #[must_use]
    pub fn contains_interaction(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(a), Some(b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Chain names, in insertion order.
    #[must_use]
    pub fn members(&self) -> Vec<String> {
        self.graph
            .node_indices()
            .map(|node| self.graph[node].clone())
            .collect()
    }

    /// Returns true if every pair of chains interacts.
    ///
    /// Empty and single-chain graphs are trivially complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let nodes = self.graph.node_indices().collect::<Vec<_>>();
        nodes
            .into_iter()
            .tuple_combinations()
            .all(|(a, b)| self.graph.find_edge(a, b).is_some())
    }

    /// Remove a chain, purging it from every survivor's adjacency.
    pub fn remove(&mut self, node: NodeIndex) -> Option<String> {
        let name = self.graph.remove_node(node)?;
        self.names.remove(&name);
        Some(name)
    }

    /// The underlying graph structure.
    #[must_use]
    pub fn graph(&self) -> &StableUnGraph<String, ()> {
        &self.graph
    }
}
