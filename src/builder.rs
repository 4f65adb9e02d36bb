use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::NetworkInvalidReason;
use crate::network::{Arc, Capacity, FlowNetwork};

/// A builder for [`FlowNetwork`]s.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Invalid input does not fail immediately; it puts the builder into an invalid state, which [`build()`](Self::build)
/// then reports. Once invalid, further calls do nothing.
#[derive(Clone, Debug)]
pub struct NetworkBuilder {
    vertex_count: usize,
    source: usize,
    sink: usize,
    declared_arcs: Option<usize>,
    // (tail, head, capacity) in input order
    arcs: Vec<(usize, usize, Capacity)>,
    // sum of every capacity in `arcs`; bounds every flow value, excess and cut capacity
    total_capacity: Capacity,
    invalid_reasons: Vec<NetworkInvalidReason>,
}

impl NetworkBuilder {
    /// Start a network on vertices `0..vertex_count` with the given terminals.
    ///
    /// May cause the builder to enter an invalid state if either terminal is out of range
    /// ([`VertexOutOfRange`](NetworkInvalidReason::VertexOutOfRange)) or if they coincide
    /// ([`SourceIsSink`](NetworkInvalidReason::SourceIsSink)).
    pub fn new(vertex_count: usize, source: usize, sink: usize) -> Self {
        let mut builder = Self {
            vertex_count,
            source,
            sink,
            declared_arcs: None,
            arcs: Default::default(),
            total_capacity: 0,
            invalid_reasons: Default::default(),
        };

        for terminal in [source, sink] {
            if terminal >= vertex_count {
                builder.invalid_reasons.push(NetworkInvalidReason::VertexOutOfRange { vertex: terminal, vertex_count });
                return builder;
            }
        }

        if source == sink {
            builder.invalid_reasons.push(NetworkInvalidReason::SourceIsSink { vertex: source });
        }

        builder
    }

    /// Promise that exactly `count` arcs will be added. [`build()`](Self::build) checks the promise.
    pub fn declare_arc_count(&mut self, count: usize) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.declared_arcs = Some(count);
        self.arcs.reserve(count.saturating_sub(self.arcs.len()));
        self
    }

    /// Add an arc `tail -> head`. Parallel arcs are kept apart; self-loops are accepted and never carry flow.
    ///
    /// May cause the builder to enter an invalid state if an endpoint is out of range
    /// ([`VertexOutOfRange`](NetworkInvalidReason::VertexOutOfRange)), `capacity` is negative
    /// ([`NegativeCapacity`](NetworkInvalidReason::NegativeCapacity)), or the capacities added so far no longer sum
    /// to a [`Capacity`] ([`CapacityOverflow`](NetworkInvalidReason::CapacityOverflow)).
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_arc(&mut self, tail: usize, head: usize, capacity: Capacity) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        for vertex in [tail, head] {
            if vertex >= self.vertex_count {
                self.invalid_reasons.push(NetworkInvalidReason::VertexOutOfRange { vertex, vertex_count: self.vertex_count });
                return self;
            }
        }

        if capacity < 0 {
            self.invalid_reasons.push(NetworkInvalidReason::NegativeCapacity { arc: self.arcs.len(), capacity });
            return self;
        }

        let Some(total_capacity) = self.total_capacity.checked_add(capacity) else {
            self.invalid_reasons.push(NetworkInvalidReason::CapacityOverflow { arc: self.arcs.len() });
            return self;
        };

        self.total_capacity = total_capacity;
        self.arcs.push((tail, head, capacity));
        self
    }

    /// Shorthand for repeated calls to [`Self::add_arc`], with the same conditions.
    pub fn add_arcs(&mut self, arcs: impl IntoIterator<Item = (usize, usize, Capacity)>) -> &mut Self {
        for (tail, head, capacity) in arcs {
            self.add_arc(tail, head, capacity);
        }

        self
    }

    /// Remove the most recently added arc.
    ///
    /// If the builder is in an invalid state or no arcs are present, this function does nothing.
    pub fn pop_arc(&mut self) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if let Some((.., capacity)) = self.arcs.pop() {
            self.total_capacity -= capacity;
        }
        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<NetworkInvalidReason>)` otherwise.
    /// An arc count mismatch is only detected by [`build()`](Self::build), since more arcs may still follow.
    pub fn is_valid(&self) -> Option<&Vec<NetworkInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`FlowNetwork`] carrying zero flow.
    /// If the builder is invalid for any reason, a [`Vec`] of [`NetworkInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<FlowNetwork, Vec<NetworkInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(self.invalid_reasons.clone());
        }

        if let Some(declared) = self.declared_arcs {
            if declared != self.arcs.len() {
                return Err(vec![NetworkInvalidReason::ArcCountMismatch { declared, supplied: self.arcs.len() }]);
            }
        }

        let mut graph = DiGraph::with_capacity(self.vertex_count, self.arcs.len());
        for _ in 0..self.vertex_count {
            graph.add_node(());
        }
        for (tail, head, capacity) in self.arcs.iter().copied() {
            graph.add_edge(NodeIndex::new(tail), NodeIndex::new(head), Arc::with_capacity(capacity));
        }

        Ok(FlowNetwork {
            graph,
            source: NodeIndex::new(self.source),
            sink: NodeIndex::new(self.sink),
        })
    }
}
