//! Core state types for the trajectory simulation.
//!
//! Bodies and states are generic over the spatial dimension `D` (2 or 3):
//! - `Body<D>` holds position and velocity together, so a body's vectors
//!   can never drift out of step with each other
//! - `SimulationState<D>` is one recorded step: index, time, and all bodies

use nalgebra::{SVector, Vector2, Vector3};

pub type NVec<const D: usize> = SVector<f64, D>;
pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body<const D: usize> {
    pub x: NVec<D>, // position
    pub v: NVec<D>, // velocity
    pub halted: bool, // set once a per-body stop rule fired
}

impl<const D: usize> Body<D> {
    pub fn new(x: NVec<D>, v: NVec<D>) -> Self {
        Self { x, v, halted: false }
    }

    /// A body at rest at `x`
    pub fn at_rest(x: NVec<D>) -> Self {
        Self::new(x, NVec::<D>::zeros())
    }

    pub fn speed(&self) -> f64 {
        self.v.norm()
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }
}

pub type Body2 = Body<2>;
pub type Body3 = Body<3>;

/// Snapshot of every body at one discrete step
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState<const D: usize> {
    pub step: usize, // step index, 0 = initial state
    pub time: f64, // elapsed time, always step * time_step
    pub bodies: Vec<Body<D>>,
}

impl<const D: usize> SimulationState<D> {
    pub fn positions(&self) -> impl Iterator<Item = &NVec<D>> + '_ {
        self.bodies.iter().map(|b| &b.x)
    }

    pub fn all_halted(&self) -> bool {
        self.bodies.iter().all(|b| b.halted)
    }
}
