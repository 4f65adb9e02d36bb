use std::mem;

use crate::augment::AugmentingPath;
use crate::cut::MinCut;
use crate::error::SolverFailure;
use crate::network::{Capacity, FlowNetwork};
use crate::residual::ResidualGraph;
use crate::search::{shortest_path, SearchOutcome};

/// Knobs for a [`Solver`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SolverConfig {
    /// Give up with [`SolverFailure::AugmentationLimit`] rather than perform more than this many augmentations.
    pub augmentation_limit: Option<usize>,
    /// Keep every [`Augmentation`] in the final [`MaxFlow`].
    pub record_augmentations: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            augmentation_limit: None,
            record_augmentations: true,
        }
    }
}

/// One completed augmentation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Augmentation {
    /// The path flow was pushed along.
    pub path: AugmentingPath,
    /// How much flow was pushed.
    pub bottleneck: Capacity,
    /// Flow value once this augmentation was applied.
    pub value: Capacity,
}

/// Outcome of a single [`Solver::step`].
#[derive(Clone, Debug)]
pub enum Step {
    /// A shortest augmenting path was found and applied.
    Augmented(Augmentation),
    /// No augmenting path remains; the flow is maximum and this is the source side of a minimum cut.
    Done(MinCut),
}

/// The result of running a [`Solver`] to completion.
#[derive(Clone, Debug)]
pub struct MaxFlow {
    /// Value of the maximum flow.
    pub value: Capacity,
    /// Flow on every arc in input order, relative to the arc's direction.
    pub arc_flows: Vec<Capacity>,
    /// Source side of a minimum cut.
    pub min_cut: MinCut,
    /// Every augmentation performed, in order. Empty unless [`SolverConfig::record_augmentations`] is set.
    pub augmentations: Vec<Augmentation>,
}

enum State {
    Searching,
    Augmenting(AugmentingPath),
    Done(MinCut),
}

/// Edmonds-Karp: repeatedly build the residual graph, find a shortest augmenting path by breadth-first search, and
/// push its bottleneck, until the sink becomes unreachable.
///
/// Shortest paths bound the number of augmentations by `O(VE)` regardless of capacities.
/// Use [`Self::solve`] to run to completion or [`Self::step`] to watch each augmentation.
pub struct Solver<'a> {
    network: &'a mut FlowNetwork,
    config: SolverConfig,
    state: State,
    augmentations: usize,
    value: Capacity,
}

impl<'a> From<&'a mut FlowNetwork> for Solver<'a> {
    fn from(network: &'a mut FlowNetwork) -> Self {
        let value = network.flow_value();
        Self {
            network,
            config: Default::default(),
            state: State::Searching,
            augmentations: 0,
            value,
        }
    }
}

impl Solver<'_> {
    /// Replace the configuration.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// The network as it stands between steps.
    pub fn network(&self) -> &FlowNetwork {
        &*self.network
    }

    /// Current flow value.
    pub fn value(&self) -> Capacity {
        self.value
    }

    /// Augmentations performed so far.
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    /// Search for a shortest augmenting path and apply it, or report that none exists.
    ///
    /// Once [`Step::Done`] has been returned, further calls return it again without searching.
    pub fn step(&mut self) -> Result<Step, SolverFailure> {
        loop {
            match mem::replace(&mut self.state, State::Searching) {
                State::Searching => {
                    let residual = ResidualGraph::from(&*self.network);
                    self.state = match shortest_path(&residual)? {
                        SearchOutcome::Path(path) => State::Augmenting(path),
                        SearchOutcome::Exhausted(cut) => State::Done(cut),
                    };
                    // residual graph dropped here; the next search starts over
                }
                State::Augmenting(path) => {
                    if let Some(limit) = self.config.augmentation_limit {
                        if self.augmentations >= limit {
                            return Err(SolverFailure::AugmentationLimit { limit });
                        }
                    }

                    let bottleneck = self.network.augment(&path)?;
                    self.augmentations += 1;
                    self.value += bottleneck;
                    log::debug!("augmentation {}: pushed {} along {} arcs, value now {}",
                        self.augmentations, bottleneck, path.len(), self.value);

                    return Ok(Step::Augmented(Augmentation { path, bottleneck, value: self.value }));
                }
                State::Done(cut) => {
                    self.state = State::Done(cut.clone());
                    return Ok(Step::Done(cut));
                }
            }
        }
    }

    /// Augment until no path remains and report the maximum flow.
    ///
    /// Returns [`Err`] with a [`SolverFailure`] if the configured augmentation limit is hit or an internal
    /// inconsistency is detected; in the latter case the network is left as it was after the last good augmentation.
    pub fn solve(mut self) -> Result<MaxFlow, SolverFailure> {
        let mut augmentations = Vec::new();

        let min_cut = loop {
            match self.step()? {
                Step::Augmented(augmentation) => {
                    if self.config.record_augmentations {
                        augmentations.push(augmentation);
                    }
                }
                Step::Done(cut) => break cut,
            }
        };

        let value = self.network.flow_value();
        debug_assert_eq!(value, self.value);
        debug_assert_eq!(value, min_cut.capacity(&*self.network));
        log::info!("maximum flow {} after {} augmentations; {} vertices on the source side",
            value, self.augmentations, min_cut.len());

        Ok(MaxFlow {
            value,
            arc_flows: self.network.arc_flows(),
            min_cut,
            augmentations,
        })
    }
}

impl FlowNetwork {
    /// Solve this network with default settings, deferring to a [`Solver`] and leaving a maximum flow in `self`.
    ///
    /// Every augmentation is kept in [`MaxFlow::augmentations`], which may hold `O(VE)` paths of up to `V` arcs
    /// each. Run a [`Solver`] with [`SolverConfig::record_augmentations`] unset to skip that.
    ///
    /// Returns according to the result of [`Solver::solve`].
    pub fn max_flow(&mut self) -> Result<MaxFlow, SolverFailure> {
        Solver::from(self).solve()
    }
}
