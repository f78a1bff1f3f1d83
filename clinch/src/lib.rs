//! Utilities for working with chain-interaction graphs.
//!
//! Structural biology pipelines produce lists of pairwise interactions between
//! protein chains, each chain named by a structure identifier plus a chain
//! letter (`1abc_A`). A common preparation step is to boil such a list down to
//! a set of chains that all interact with one another — a clique of the
//! interaction graph — so that every member of the set can be compared against
//! every other member.
//!
//! Finding the largest such clique is NP-hard, so this crate does not try.
//! Instead it uses a greedy heuristic: repeatedly delete the chain with the
//! fewest surviving interactions until the least-connected survivor interacts
//! with every other survivor. What remains is a clique by construction —
//! maximal under this deletion order, though not necessarily the largest one
//! the graph contains.
//!
//! The [`graph`] module holds the working graph, [`records`] parses
//! interaction record files into it, [`reduce`] runs the reduction, and
//! [`list`] writes the surviving members out.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(missing_docs)]

pub mod graph;
pub mod list;
pub mod records;
pub mod reduce;
