//! The output of one simulation run
//!
//! A `Trajectory` is append-only while the engine builds it and read-only
//! afterwards: the only mutator is crate-private.

use std::ops::Index;

use super::states::{NVec, SimulationState};

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    StepLimit, // max_steps reached
    TimeLimit, // max_time reached
    BoundaryStop { body: usize, step: usize }, // stop rule fired under HaltPolicy::Run
    AllHalted, // every body was halted by per-body stop rules
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<const D: usize> {
    time_step: f64,
    states: Vec<SimulationState<D>>,
    stop_reason: StopReason,
}

impl<const D: usize> Trajectory<D> {
    pub(crate) fn start(time_step: f64, initial: SimulationState<D>, capacity: usize) -> Self {
        let mut states = Vec::with_capacity(capacity);
        states.push(initial);
        Self {
            time_step,
            states,
            stop_reason: StopReason::StepLimit,
        }
    }

    pub(crate) fn push(&mut self, state: SimulationState<D>) {
        self.states.push(state);
    }

    pub(crate) fn finish(&mut self, reason: StopReason) {
        self.stop_reason = reason;
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn stop_reason(&self) -> StopReason {
        self.stop_reason
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Never true for a trajectory returned by the engine: the initial state is always recorded
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of bodies in every state
    pub fn body_count(&self) -> usize {
        self.states.first().map_or(0, |s| s.bodies.len())
    }

    pub fn states(&self) -> &[SimulationState<D>] {
        &self.states
    }

    pub fn get(&self, step: usize) -> Option<&SimulationState<D>> {
        self.states.get(step)
    }

    pub fn first(&self) -> Option<&SimulationState<D>> {
        self.states.first()
    }

    pub fn last(&self) -> Option<&SimulationState<D>> {
        self.states.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimulationState<D>> {
        self.states.iter()
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.states.iter().map(|s| s.time)
    }

    /// Positions of one body across all states, the trail a renderer draws
    pub fn path(&self, body: usize) -> Option<Vec<NVec<D>>> {
        if body >= self.body_count() {
            return None;
        }
        Some(self.states.iter().map(|s| s.bodies[body].x).collect())
    }
}

impl<const D: usize> Index<usize> for Trajectory<D> {
    type Output = SimulationState<D>;

    fn index(&self, step: usize) -> &Self::Output {
        &self.states[step]
    }
}

impl<'a, const D: usize> IntoIterator for &'a Trajectory<D> {
    type Item = &'a SimulationState<D>;
    type IntoIter = std::slice::Iter<'a, SimulationState<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
