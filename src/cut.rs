use petgraph::graph::NodeIndex;

use crate::network::{ArcId, Capacity, FlowNetwork, Vertex};

/// The vertices reachable from the source in a residual graph.
///
/// Once the flow is maximum, this set and its complement form a minimum cut: every arc leaving the set is
/// saturated and every arc entering it is empty.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MinCut {
    reachable: Vec<bool>,
}

impl MinCut {
    pub(crate) fn new(reachable: Vec<bool>) -> Self {
        Self { reachable }
    }

    /// Whether `vertex` is on the source side.
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.reachable.get(vertex.index()).copied().unwrap_or(false)
    }

    /// Membership of every vertex, indexed by vertex.
    pub fn membership(&self) -> &[bool] {
        &self.reachable
    }

    /// The source-side vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.reachable.iter()
            .enumerate()
            .filter(|(_, reached)| **reached)
            .map(|(i, _)| NodeIndex::new(i))
    }

    /// Number of source-side vertices.
    pub fn len(&self) -> usize {
        self.reachable.iter().filter(|reached| **reached).count()
    }

    /// Whether no vertex is on the source side. Never true for a cut produced by a search, which always reaches the source.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Arcs of `network` leaving the source side.
    pub fn crossing_arcs<'a>(&'a self, network: &'a FlowNetwork) -> impl Iterator<Item = ArcId> + 'a {
        network.arcs()
            .filter(|(_, tail, head, _)| self.contains(*tail) && !self.contains(*head))
            .map(|(id, ..)| id)
    }

    /// Arcs of `network` entering the source side.
    pub fn returning_arcs<'a>(&'a self, network: &'a FlowNetwork) -> impl Iterator<Item = ArcId> + 'a {
        network.arcs()
            .filter(|(_, tail, head, _)| !self.contains(*tail) && self.contains(*head))
            .map(|(id, ..)| id)
    }

    /// Total capacity of the arcs leaving the source side.
    pub fn capacity(&self, network: &FlowNetwork) -> Capacity {
        network.arcs()
            .filter(|(_, tail, head, _)| self.contains(*tail) && !self.contains(*head))
            .map(|(.., arc)| arc.capacity())
            .sum()
    }
}
