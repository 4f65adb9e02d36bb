use petgraph::graph::{DiGraph, EdgeIndex};
use petgraph::visit::EdgeRef;
use strum::Display;

use crate::network::{ArcId, Capacity, FlowNetwork, Vertex};

/// Which way a residual arc runs relative to the arc it came from.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Same direction as the original arc; using it pushes more flow.
    Forward,
    /// Opposite direction; using it cancels flow already on the original arc.
    Backward,
}

impl Orientation {
    /// `1` for [`Forward`](Self::Forward), `-1` for [`Backward`](Self::Backward).
    pub fn sign(self) -> Capacity {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// An arc of a [`ResidualGraph`], linked back to the [`FlowNetwork`] arc it was derived from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ResidualArc {
    /// Remaining capacity; always positive.
    pub residual: Capacity,
    /// The originating arc.
    pub origin: ArcId,
    /// How this arc relates to `origin`.
    pub orientation: Orientation,
}

/// Identity of an arc within one [`ResidualGraph`]. Meaningless once that graph is dropped.
pub type ResidualEdge = EdgeIndex;

/// The residual graph of a [`FlowNetwork`] under its current flow.
///
/// For an arc `u -> v` with capacity `c` and flow `f` it holds a forward arc `u -> v` of residual `c - f` when that
/// is positive, and a backward arc `v -> u` of residual `f` when that is positive. It is rebuilt from scratch for
/// every search and never written back.
#[derive(Clone, Debug)]
pub struct ResidualGraph {
    pub(crate) graph: DiGraph<(), ResidualArc>,
    pub(crate) source: Vertex,
    pub(crate) sink: Vertex,
}

impl From<&FlowNetwork> for ResidualGraph {
    fn from(network: &FlowNetwork) -> Self {
        let mut graph = DiGraph::with_capacity(network.vertex_count(), 2 * network.arc_count());
        for _ in 0..network.vertex_count() {
            graph.add_node(());
        }

        for e in network.graph.edge_references() {
            let (tail, head, arc) = (e.source(), e.target(), e.weight());

            if arc.forward_residual() > 0 {
                graph.add_edge(tail, head, ResidualArc {
                    residual: arc.forward_residual(),
                    origin: e.id(),
                    orientation: Orientation::Forward,
                });
            }

            if arc.backward_residual() > 0 {
                graph.add_edge(head, tail, ResidualArc {
                    residual: arc.backward_residual(),
                    origin: e.id(),
                    orientation: Orientation::Backward,
                });
            }
        }

        log::trace!("residual graph has {} arcs for {} original arcs", graph.edge_count(), network.arc_count());

        Self {
            graph,
            source: network.source,
            sink: network.sink,
        }
    }
}

impl ResidualGraph {
    /// Number of vertices; always that of the network it was built from.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of residual arcs.
    pub fn residual_arc_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The source of the underlying network.
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// The sink of the underlying network.
    pub fn sink(&self) -> Vertex {
        self.sink
    }

    /// The residual arc with identity `edge`.
    pub fn arc(&self, edge: ResidualEdge) -> Option<&ResidualArc> {
        self.graph.edge_weight(edge)
    }

    /// Map a residual arc back to the network arc it came from and the way it runs along it.
    pub fn origin(&self, edge: ResidualEdge) -> Option<(ArcId, Orientation)> {
        self.arc(edge).map(|arc| (arc.origin, arc.orientation))
    }

    /// All residual arcs as `(id, tail, head, arc)`.
    pub fn arcs(&self) -> impl Iterator<Item = (ResidualEdge, Vertex, Vertex, &ResidualArc)> + '_ {
        self.graph.edge_references().map(|e| (e.id(), e.source(), e.target(), e.weight()))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::builder::NetworkBuilder;
    use crate::network::ArcId;

    use super::{Orientation, ResidualGraph};

    #[test]
    fn orientations_cancel() {
        assert_eq!([Orientation::Forward, Orientation::Backward].iter().map(|o| o.sign()).sum::<i64>(), 0);
        assert_eq!(Orientation::Backward.to_string(), "Backward");
    }

    #[test]
    fn one_or_two_arcs_per_original() {
        let mut network = NetworkBuilder::new(3, 0, 2)
            .add_arcs([(0, 1, 5), (1, 2, 2), (0, 2, 0)])
            .build()
            .unwrap();
        network.arc_mut(ArcId::new(0)).unwrap().flow = 2;
        network.arc_mut(ArcId::new(1)).unwrap().flow = 2;

        let residual = ResidualGraph::from(&network);
        // 0 -> 1 partially used: both directions; 1 -> 2 saturated: backward only; 0 -> 2 has no capacity: nothing
        assert_eq!(residual.residual_arc_count(), 3);
        assert_eq!(
            residual.arcs()
                .map(|(_, tail, head, arc)| (tail.index(), head.index(), arc.residual, arc.origin.index(), arc.orientation))
                .collect_vec(),
            vec![
                (0, 1, 3, 0, Orientation::Forward),
                (1, 0, 2, 0, Orientation::Backward),
                (2, 1, 2, 1, Orientation::Backward),
            ]
        );

        for (edge, ..) in residual.arcs() {
            let (origin, orientation) = residual.origin(edge).unwrap();
            let (tail, head) = network.endpoints(origin).unwrap();
            let (residual_tail, residual_head) = residual.graph.edge_endpoints(edge).unwrap();
            match orientation {
                Orientation::Forward => assert_eq!((tail, head), (residual_tail, residual_head)),
                Orientation::Backward => assert_eq!((tail, head), (residual_head, residual_tail)),
            }
        }
    }

    #[test]
    fn untouched_network_has_only_forward_arcs() {
        let network = NetworkBuilder::new(2, 0, 1)
            .add_arcs([(0, 1, 1), (1, 0, 1)])
            .build()
            .unwrap();

        let residual = ResidualGraph::from(&network);
        assert!(residual.arcs().all(|(.., arc)| arc.orientation == Orientation::Forward));
        assert_eq!(residual.source().index(), 0);
        assert_eq!(residual.sink().index(), 1);
    }
}
