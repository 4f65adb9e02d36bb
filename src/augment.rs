use itertools::Itertools;

use crate::error::SolverFailure;
use crate::network::{ArcId, Capacity, FlowNetwork, Vertex};
use crate::residual::Orientation;

/// One residual arc along an [`AugmentingPath`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PathArc {
    /// Where the residual arc starts.
    pub tail: Vertex,
    /// Where it ends.
    pub head: Vertex,
    /// Its residual capacity when the path was found.
    pub residual: Capacity,
    /// The network arc it was derived from.
    pub origin: ArcId,
    /// Whether traversing it pushes or cancels flow on `origin`.
    pub orientation: Orientation,
}

impl PathArc {
    /// 1-based arc number, negated for backward traversal.
    pub fn signed_number(&self) -> i64 {
        (self.origin.index() as i64 + 1) * self.orientation.sign()
    }
}

/// A source-to-sink walk through a residual graph, in order from the source, with no repeated vertex.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AugmentingPath {
    arcs: Vec<PathArc>,
}

impl AugmentingPath {
    pub(crate) fn new(arcs: Vec<PathArc>) -> Self {
        Self { arcs }
    }

    /// The arcs of this path, source first.
    pub fn arcs(&self) -> &[PathArc] {
        &self.arcs
    }

    /// Number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Whether the path has no arcs at all.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Vertices visited, source first and sink last.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.arcs.first()
            .map(|first| first.tail)
            .into_iter()
            .chain(self.arcs.iter().map(|arc| arc.head))
            .collect_vec()
    }

    /// Smallest residual capacity along the path, or `None` if the path is empty.
    pub fn bottleneck(&self) -> Option<Capacity> {
        self.arcs.iter().map(|arc| arc.residual).min()
    }
}

impl FlowNetwork {
    /// Push the bottleneck of `path` through this network and return it.
    ///
    /// Forward arcs gain the bottleneck, backward arcs lose it. Either every arc is updated or, on failure, none is.
    pub fn augment(&mut self, path: &AugmentingPath) -> Result<Capacity, SolverFailure> {
        let bottleneck = path.bottleneck().ok_or(SolverFailure::EmptyPath)?;
        if bottleneck <= 0 {
            return Err(SolverFailure::NonPositiveBottleneck { bottleneck });
        }

        // stage every update before touching the network
        let updates = path.arcs()
            .iter()
            .map(|step| {
                let arc = self.arc(step.origin).ok_or(SolverFailure::DanglingResidualArc { arc: step.origin })?;
                let flow = arc.flow + step.orientation.sign() * bottleneck;
                if !(0..=arc.capacity).contains(&flow) {
                    return Err(SolverFailure::CapacityViolated { arc: step.origin, flow, capacity: arc.capacity });
                }
                Ok((step.origin, flow))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for ((id, flow), step) in updates.into_iter().zip(path.arcs()) {
            log::trace!("{} arc {}: flow now {}", step.orientation, id.index(), flow);
            if let Some(arc) = self.arc_mut(id) {
                arc.flow = flow;
            }
        }

        Ok(bottleneck)
    }
}

#[cfg(test)]
mod tests {
    use petgraph::graph::NodeIndex;

    use crate::builder::NetworkBuilder;
    use crate::error::SolverFailure;
    use crate::network::ArcId;
    use crate::residual::{Orientation, ResidualGraph};
    use crate::search::{shortest_path, SearchOutcome};

    use super::{AugmentingPath, PathArc};

    #[test]
    fn bottleneck_is_smallest_residual() {
        let mut network = NetworkBuilder::new(3, 0, 2)
            .add_arc(0, 1, 7)
            .add_arc(1, 2, 3)
            .build()
            .unwrap();

        let residual = ResidualGraph::from(&network);
        let SearchOutcome::Path(path) = shortest_path(&residual).unwrap() else {
            panic!("sink should be reachable");
        };
        assert_eq!(path.bottleneck(), Some(3));
        assert_eq!(path.vertices().iter().map(|v| v.index()).collect::<Vec<_>>(), vec![0, 1, 2]);

        assert_eq!(network.augment(&path), Ok(3));
        assert_eq!(network.arc_flows(), vec![3, 3]);
    }

    #[test]
    fn empty_path_is_rejected() {
        let mut network = NetworkBuilder::new(2, 0, 1).add_arc(0, 1, 1).build().unwrap();
        assert_eq!(network.augment(&AugmentingPath::new(vec![])), Err(SolverFailure::EmptyPath));
    }

    #[test]
    fn failed_augmentation_leaves_network_untouched() {
        let mut network = NetworkBuilder::new(3, 0, 2)
            .add_arc(0, 1, 4)
            .add_arc(1, 2, 4)
            .build()
            .unwrap();

        // the second step claims a backward residual on an arc that carries no flow
        let path = AugmentingPath::new(vec![
            PathArc { tail: NodeIndex::new(0), head: NodeIndex::new(1), residual: 2, origin: ArcId::new(0), orientation: Orientation::Forward },
            PathArc { tail: NodeIndex::new(1), head: NodeIndex::new(2), residual: 2, origin: ArcId::new(1), orientation: Orientation::Backward },
        ]);

        assert_eq!(
            network.augment(&path),
            Err(SolverFailure::CapacityViolated { arc: ArcId::new(1), flow: -2, capacity: 4 })
        );
        assert_eq!(network.arc_flows(), vec![0, 0]);
    }

    #[test]
    fn dangling_origin_is_fatal() {
        let mut network = NetworkBuilder::new(2, 0, 1).add_arc(0, 1, 1).build().unwrap();
        let path = AugmentingPath::new(vec![
            PathArc { tail: NodeIndex::new(0), head: NodeIndex::new(1), residual: 1, origin: ArcId::new(9), orientation: Orientation::Forward },
        ]);

        assert_eq!(network.augment(&path), Err(SolverFailure::DanglingResidualArc { arc: ArcId::new(9) }));
    }

    #[test]
    fn zero_bottleneck_is_fatal() {
        let mut network = NetworkBuilder::new(2, 0, 1).add_arc(0, 1, 1).build().unwrap();
        let path = AugmentingPath::new(vec![
            PathArc { tail: NodeIndex::new(0), head: NodeIndex::new(1), residual: 0, origin: ArcId::new(0), orientation: Orientation::Forward },
        ]);

        assert_eq!(network.augment(&path), Err(SolverFailure::NonPositiveBottleneck { bottleneck: 0 }));
    }
}
