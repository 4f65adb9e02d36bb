#![warn(missing_docs)]

//! # `fulkerson`
//!
//! Maximum integral flow and minimum cut in a directed network with non-negative integer capacities, using the
//! [Edmonds-Karp](https://en.wikipedia.org/wiki/Edmonds%E2%80%93Karp_algorithm) variant of Ford-Fulkerson.
//! Begin by describing the network with a [`NetworkBuilder`], convert it into a [`FlowNetwork`], then call
//! [`max_flow()`](FlowNetwork::max_flow), which leaves a maximum flow on the network and reports its value, the
//! flow on every arc, and the source side of a minimum cut.
//!
//! # Internals
//! Each round derives a fresh [`ResidualGraph`](residual::ResidualGraph) from the network: an arc `u -> v` with
//! capacity `c` carrying flow `f` contributes a forward arc `u -> v` of residual `c - f` and a backward arc `v -> u`
//! of residual `f`, dropping whichever is zero. Every residual arc remembers which network arc it came from and in
//! which [`Orientation`](residual::Orientation).
//!
//! A breadth-first search then looks for the sink. If found, the parent pointers give a path with the fewest
//! possible arcs; its smallest residual, the bottleneck, is added to the flow of forward arcs and removed from the
//! flow of backward arcs. Always picking a shortest path bounds the number of rounds by `O(VE)`, however large the
//! capacities are.
//!
//! If the sink is not found, the flow is maximum and the vertices the search did reach form the source side of a
//! minimum cut, whose capacity equals the flow value.
//!
//! [`Solver`](solver::Solver) exposes these rounds one at a time for callers that want to observe them.

pub use builder::NetworkBuilder;
pub use error::{NetworkInvalidReason, SolverFailure};
pub use network::{Arc, ArcId, Capacity, FlowNetwork, Vertex};
pub use solver::{MaxFlow, Solver, SolverConfig};

pub mod augment;
pub mod builder;
pub mod cut;
pub(crate) mod error;
pub(crate) mod network;
pub mod residual;
pub mod search;
pub mod solver;
#[cfg(feature = "wasm")]
pub mod wasm;
