use std::fmt::{Display, Formatter};

use itertools::Itertools;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::cut::MinCut;
use crate::residual::ResidualGraph;
use crate::search::reachable_from_source;

/// Integral capacity and flow amounts.
///
/// Signed so that flows can be reported relative to an arc's declared direction and so that negative input
/// is representable (and rejected by the builder).
pub type Capacity = i64;

/// A vertex of a [`FlowNetwork`], indexed `0..vertex_count`.
pub type Vertex = NodeIndex;

/// Stable identity of an arc; arcs are numbered in the order they were added.
pub type ArcId = EdgeIndex;

/// Capacity and current flow of one arc of a [`FlowNetwork`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Arc {
    pub(crate) capacity: Capacity,
    pub(crate) flow: Capacity,
}

impl Arc {
    pub(crate) fn with_capacity(capacity: Capacity) -> Self {
        Self { capacity, flow: 0 }
    }

    /// The capacity this arc was declared with.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// The flow currently on this arc.
    pub fn flow(&self) -> Capacity {
        self.flow
    }

    /// How much more flow may be pushed along this arc.
    #[inline]
    pub fn forward_residual(&self) -> Capacity {
        self.capacity - self.flow
    }

    /// How much flow may be cancelled on this arc.
    #[inline]
    pub fn backward_residual(&self) -> Capacity {
        self.flow
    }

    /// Whether flow equals capacity.
    pub fn is_saturated(&self) -> bool {
        self.flow == self.capacity
    }
}

/// A directed network with integral capacities, a current flow, and designated source and sink.
///
/// Build one with a [`NetworkBuilder`](crate::builder::NetworkBuilder), then call [`max_flow()`](Self::max_flow)
/// or drive a [`Solver`](crate::solver::Solver) yourself. The network is mutated in place, so after solving it
/// carries a maximum flow.
#[derive(Clone, Debug)]
pub struct FlowNetwork {
    pub(crate) graph: DiGraph<(), Arc>,
    pub(crate) source: Vertex,
    pub(crate) sink: Vertex,
}

impl FlowNetwork {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of arcs, parallel arcs and self-loops included.
    pub fn arc_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The designated source.
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// The designated sink.
    pub fn sink(&self) -> Vertex {
        self.sink
    }

    /// The arc with identity `id`, if there is one.
    pub fn arc(&self, id: ArcId) -> Option<&Arc> {
        self.graph.edge_weight(id)
    }

    pub(crate) fn arc_mut(&mut self, id: ArcId) -> Option<&mut Arc> {
        self.graph.edge_weight_mut(id)
    }

    /// Tail and head of the arc with identity `id`.
    pub fn endpoints(&self, id: ArcId) -> Option<(Vertex, Vertex)> {
        self.graph.edge_endpoints(id)
    }

    /// All arcs in input order as `(id, tail, head, arc)`.
    pub fn arcs(&self) -> impl Iterator<Item = (ArcId, Vertex, Vertex, &Arc)> + '_ {
        self.graph.edge_references().map(|e| (e.id(), e.source(), e.target(), e.weight()))
    }

    /// Flow on every arc, in input order.
    pub fn arc_flows(&self) -> Vec<Capacity> {
        self.graph.edge_weights().map(Arc::flow).collect_vec()
    }

    /// Flow entering `vertex` minus flow leaving it. Self-loops cancel out.
    pub fn excess(&self, vertex: Vertex) -> Capacity {
        self.graph.edge_references()
            .map(|e| {
                let inflow = if e.target() == vertex { e.weight().flow } else { 0 };
                let outflow = if e.source() == vertex { e.weight().flow } else { 0 };
                inflow - outflow
            })
            .sum()
    }

    /// Net flow leaving the source, which is the value of the current flow.
    pub fn flow_value(&self) -> Capacity {
        -self.excess(self.source)
    }

    /// Whether every arc satisfies `0 <= flow <= capacity`.
    pub fn respects_capacities(&self) -> bool {
        self.graph.edge_weights().all(|arc| (0..=arc.capacity).contains(&arc.flow))
    }

    /// Whether flow is conserved at every vertex other than the source and sink.
    pub fn is_conserving(&self) -> bool {
        let mut excess = vec![0; self.vertex_count()];
        for e in self.graph.edge_references() {
            excess[e.target().index()] += e.weight().flow;
            excess[e.source().index()] -= e.weight().flow;
        }

        self.graph.node_indices()
            .filter(|v| *v != self.source && *v != self.sink)
            .all(|v| excess[v.index()] == 0)
    }

    /// Vertices reachable from the source in the residual graph of the current flow.
    ///
    /// When the current flow is maximum this is the source side of a minimum cut. Querying repeatedly without
    /// changing the flow gives the same set.
    pub fn min_cut(&self) -> MinCut {
        reachable_from_source(&ResidualGraph::from(self))
    }
}

impl Display for FlowNetwork {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} -> {}", self.source.index(), self.sink.index())?;
        for (id, tail, head, arc) in self.arcs() {
            writeln!(f, "#{} {} -> {}: {}/{}", id.index(), tail.index(), head.index(), arc.flow, arc.capacity)?;
        }
        Ok(())
    }
}
