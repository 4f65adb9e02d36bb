use thiserror::Error;

use crate::network::{ArcId, Capacity};

/// Reasons a [`NetworkBuilder`](crate::builder::NetworkBuilder) may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum NetworkInvalidReason {
    /// A vertex (terminal or arc endpoint) lies outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a network of {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex.
        vertex: usize,
        /// Number of vertices the network was declared with.
        vertex_count: usize,
    },
    /// An arc was given a capacity below zero.
    #[error("arc {arc} has negative capacity {capacity}")]
    NegativeCapacity {
        /// Zero-based position of the arc in input order.
        arc: usize,
        /// The rejected capacity.
        capacity: Capacity,
    },
    /// Adding this arc pushed the total capacity of the network past [`Capacity::MAX`], so flow values could not
    /// be represented.
    #[error("arc {arc} brings the total capacity past {}", Capacity::MAX)]
    CapacityOverflow {
        /// Zero-based position of the arc in input order.
        arc: usize,
    },
    /// Source and sink name the same vertex.
    #[error("source and sink are both vertex {vertex}")]
    SourceIsSink {
        /// The shared vertex.
        vertex: usize,
    },
    /// The number of arcs supplied differs from the number declared up front.
    #[error("declared {declared} arcs but {supplied} were supplied")]
    ArcCountMismatch {
        /// Count passed to [`declare_arc_count`](crate::builder::NetworkBuilder::declare_arc_count).
        declared: usize,
        /// Count actually added.
        supplied: usize,
    },
}

/// Reasons a [`Solver`](crate::solver::Solver) may fail.
///
/// Every variant except [`AugmentationLimit`](Self::AugmentationLimit) means the residual graph, the
/// search and the augmentation disagree with each other. None of them should ever happen on a network
/// produced by [`NetworkBuilder`](crate::builder::NetworkBuilder), and the solver makes no attempt to
/// recover from them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum SolverFailure {
    /// A discovered path had a bottleneck of zero or less.
    #[error("augmenting path has non-positive bottleneck {bottleneck}")]
    NonPositiveBottleneck {
        /// The computed bottleneck.
        bottleneck: Capacity,
    },
    /// A residual arc refers to an arc the flow network does not have.
    #[error("residual arc refers to missing arc {arc:?}")]
    DanglingResidualArc {
        /// The unresolved arc identity.
        arc: ArcId,
    },
    /// Parent pointers left by the search do not lead back to the source.
    #[error("search tree is broken at vertex {vertex}")]
    BrokenSearchTree {
        /// Vertex whose parent pointer is missing or cyclic.
        vertex: usize,
    },
    /// The search reported a path without any arcs.
    #[error("augmenting path is empty")]
    EmptyPath,
    /// Applying an augmentation would push an arc outside `0..=capacity`.
    #[error("arc {arc:?} would carry flow {flow} outside capacity {capacity}")]
    CapacityViolated {
        /// The arc that would be violated.
        arc: ArcId,
        /// The flow it would carry.
        flow: Capacity,
        /// Its capacity.
        capacity: Capacity,
    },
    /// The configured augmentation limit was reached before the flow became maximum.
    #[error("gave up after {limit} augmentations")]
    AugmentationLimit {
        /// The configured limit.
        limit: usize,
    },
}
