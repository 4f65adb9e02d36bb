use std::collections::VecDeque;

use petgraph::visit::EdgeRef;

use crate::augment::{AugmentingPath, PathArc};
use crate::cut::MinCut;
use crate::error::SolverFailure;
use crate::network::Vertex;
use crate::residual::{ResidualEdge, ResidualGraph};

/// What a breadth-first search over a [`ResidualGraph`] found.
#[derive(Clone, Debug)]
pub enum SearchOutcome {
    /// The sink is reachable; this is a path to it with the fewest possible arcs.
    Path(AugmentingPath),
    /// The sink is unreachable; these are the vertices that are reachable.
    Exhausted(MinCut),
}

/// Breadth-first search from the source of `residual`.
///
/// Vertices are marked when they are enqueued, never when dequeued, so each is discovered exactly once and the
/// parent pointers form a tree. Expansion stops as soon as the sink is discovered.
///
/// Fails only if the search tree it built is inconsistent, which would be a defect rather than bad input.
pub fn shortest_path(residual: &ResidualGraph) -> Result<SearchOutcome, SolverFailure> {
    let bfs = Bfs::run(residual, true);

    if bfs.discovered[residual.sink.index()] {
        Ok(SearchOutcome::Path(bfs.path_to(residual, residual.sink)?))
    } else {
        Ok(SearchOutcome::Exhausted(bfs.into_cut()))
    }
}

/// Every vertex reachable from the source of `residual`, whether or not the sink is among them.
pub(crate) fn reachable_from_source(residual: &ResidualGraph) -> MinCut {
    Bfs::run(residual, false).into_cut()
}

// scratch for a single search; built and dropped inside one call
struct Bfs {
    discovered: Vec<bool>,
    // residual arc through which each vertex was discovered, with its tail; None for the source and unvisited vertices
    parent: Vec<Option<(ResidualEdge, Vertex)>>,
}

impl Bfs {
    fn run(residual: &ResidualGraph, stop_at_sink: bool) -> Self {
        let mut discovered = vec![false; residual.vertex_count()];
        let mut parent = vec![None; residual.vertex_count()];
        let mut queue = VecDeque::with_capacity(residual.vertex_count());

        discovered[residual.source.index()] = true;
        queue.push_back(residual.source);

        'search: while let Some(current) = queue.pop_front() {
            for e in residual.graph.edges(current) {
                let next = e.target();
                if discovered[next.index()] {
                    continue;
                }

                discovered[next.index()] = true;
                parent[next.index()] = Some((e.id(), current));
                if stop_at_sink && next == residual.sink {
                    break 'search;
                }
                queue.push_back(next);
            }
        }

        Self { discovered, parent }
    }

    fn path_to(&self, residual: &ResidualGraph, target: Vertex) -> Result<AugmentingPath, SolverFailure> {
        let mut arcs = Vec::new();
        let mut current = target;
        while current != residual.source {
            let (edge, tail) = self.parent[current.index()]
                .ok_or(SolverFailure::BrokenSearchTree { vertex: current.index() })?;
            let arc = residual.arc(edge)
                .ok_or(SolverFailure::BrokenSearchTree { vertex: current.index() })?;
            if arcs.len() >= residual.vertex_count() {
                // a parent cycle would never reach the source
                return Err(SolverFailure::BrokenSearchTree { vertex: current.index() });
            }
            arcs.push(PathArc {
                tail,
                head: current,
                residual: arc.residual,
                origin: arc.origin,
                orientation: arc.orientation,
            });
            current = tail;
        }
        arcs.reverse();

        Ok(AugmentingPath::new(arcs))
    }

    fn into_cut(self) -> MinCut {
        MinCut::new(self.discovered)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::builder::NetworkBuilder;
    use crate::residual::ResidualGraph;

    use super::{reachable_from_source, shortest_path, SearchOutcome};

    #[test]
    fn prefers_fewest_arcs() {
        // 0-1-2-3-5 is added first, but 0-4-5 is shorter
        let network = NetworkBuilder::new(6, 0, 5)
            .add_arcs([(0, 1, 9), (1, 2, 9), (2, 3, 9), (3, 5, 9), (0, 4, 1), (4, 5, 1)])
            .build()
            .unwrap();

        let SearchOutcome::Path(path) = shortest_path(&ResidualGraph::from(&network)).unwrap() else {
            panic!("sink should be reachable");
        };
        assert_eq!(path.vertices().iter().map(|v| v.index()).collect_vec(), vec![0, 4, 5]);
        assert_eq!(path.arcs().iter().map(|arc| arc.origin.index()).collect_vec(), vec![4, 5]);
    }

    #[test]
    fn exhausted_search_reports_every_reachable_vertex() {
        let network = NetworkBuilder::new(5, 0, 4)
            .add_arcs([(0, 1, 1), (1, 2, 1), (2, 0, 1), (3, 4, 1)])
            .build()
            .unwrap();

        let SearchOutcome::Exhausted(cut) = shortest_path(&ResidualGraph::from(&network)).unwrap() else {
            panic!("sink should be unreachable");
        };
        assert_eq!(cut.membership(), &[true, true, true, false, false]);
        assert_eq!(cut.len(), 3);
    }

    #[test]
    fn reachable_set_ignores_sink() {
        let network = NetworkBuilder::new(4, 0, 1)
            .add_arcs([(0, 1, 1), (1, 2, 1)])
            .build()
            .unwrap();

        // the sink is reached, and search continues past it
        let cut = reachable_from_source(&ResidualGraph::from(&network));
        assert_eq!(cut.vertices().map(|v| v.index()).collect_vec(), vec![0, 1, 2]);
    }
}
