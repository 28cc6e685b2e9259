//! Build fully-initialized simulation scenarios
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario<D>`
//! containing:
//! - numerical parameters (`Parameters`)
//! - the initial bodies at t = 0
//! - the active boundary rules (`BoundarySet`)
//!
//! Also provides the three ready-made scenarios: the thrown ball on a
//! rotating station, two balls bouncing off a wall, and two balls crossing.

use crate::configuration::config::{BodyConfig, BoundaryConfig, ScenarioConfig, ShapeConfig};
use crate::simulation::boundary::{BoundarySet, Facing, Plane, Sphere};
use crate::simulation::engine::simulate;
use crate::simulation::error::SimError;
use crate::simulation::params::{HaltPolicy, Parameters, StopCondition};
use crate::simulation::states::{Body, NVec, NVec2, NVec3};
use crate::simulation::trajectory::Trajectory;

/// A fully-initialized simulation, ready to run any number of times
///
/// Running never mutates the scenario, so repeated runs are identical
pub struct Scenario<const D: usize> {
    pub parameters: Parameters,
    pub bodies: Vec<Body<D>>,
    pub boundaries: BoundarySet<D>,
}

pub type Scenario2D = Scenario<2>;
pub type Scenario3D = Scenario<3>;

impl<const D: usize> Scenario<D> {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, SimError> {
        let declared = cfg.engine.dimension.components();
        if declared != D {
            return Err(SimError::invalid(format!(
                "scenario declares {declared} dimensions but a {}D run was requested",
                D
            )));
        }

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| body_from_config(i, bc))
            .collect::<Result<Vec<_>, _>>()?;

        // Parameters: explicit step, or the rotation-period default
        let p_cfg = &cfg.parameters;
        let time_step = match (p_cfg.time_step, p_cfg.angular_speed) {
            (Some(dt), _) => dt,
            (None, Some(w)) => Parameters::period_time_step(w)?,
            (None, None) => {
                return Err(SimError::invalid(
                    "time_step is required when no angular_speed is given",
                ))
            }
        };
        let parameters = Parameters {
            time_step,
            stop: StopCondition {
                max_time: p_cfg.t_end,
                max_steps: p_cfg.max_steps,
                halt: p_cfg.halt,
            },
            angular_speed: p_cfg.angular_speed,
        };

        // Boundaries, in file order
        let boundaries = cfg
            .boundaries
            .iter()
            .fold(BoundarySet::new(), |set, bc: &BoundaryConfig| match bc.shape {
                ShapeConfig::Sphere { radius } => set.with(Sphere { radius }, bc.effect.into()),
                ShapeConfig::Plane { axis, offset, facing } => set.with(
                    Plane {
                        axis,
                        offset,
                        facing: facing.into(),
                    },
                    bc.effect.into(),
                ),
            });
        boundaries.validate()?;

        Ok(Self {
            parameters,
            bodies,
            boundaries,
        })
    }

    /// Run the scenario from its initial bodies
    pub fn run(&self) -> Result<Trajectory<D>, SimError> {
        simulate(
            self.bodies.clone(),
            &self.boundaries,
            self.parameters.time_step,
            &self.parameters.stop,
        )
    }
}

fn vector_from_config<const D: usize>(
    values: &[f64],
    body: usize,
    what: &str,
) -> Result<NVec<D>, SimError> {
    if values.len() != D {
        return Err(SimError::invalid(format!(
            "body {body}: {what} has {} components, expected {}",
            values.len(),
            D
        )));
    }
    Ok(NVec::<D>::from_column_slice(values))
}

fn body_from_config<const D: usize>(index: usize, bc: &BodyConfig) -> Result<Body<D>, SimError> {
    let x = vector_from_config::<D>(&bc.x, index, "position")?;
    let v = match &bc.v {
        Some(v) => vector_from_config::<D>(v, index, "velocity")?,
        None => NVec::<D>::zeros(),
    };
    Ok(Body::new(x, v))
}

// =========================================================================================
// ready-made scenarios
// =========================================================================================

/// A ball released inside a station spinning at `angular_speed`
///
/// The station is a ring of radius `inner_radius`; the ball starts
/// `release_height` above the floor, directly "below" the centre, and moves
/// in a straight line (inertial frame) until it reaches the floor.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub angular_speed: f64,
    pub inner_radius: f64,
    pub release_height: f64,
    pub initial_velocity: NVec2,
    pub time_step: Option<f64>, // rotation-period default when None
    pub max_steps: usize,
}

impl Default for Station {
    fn default() -> Self {
        Self {
            angular_speed: 1.0,
            inner_radius: 10.0,
            release_height: 2.0,
            initial_velocity: NVec2::zeros(),
            time_step: None,
            max_steps: 20_000,
        }
    }
}

impl Scenario<2> {
    pub fn station(station: &Station) -> Result<Self, SimError> {
        let time_step = match station.time_step {
            Some(dt) => dt,
            None => Parameters::period_time_step(station.angular_speed)?,
        };
        let release = NVec2::new(0.0, -station.inner_radius + station.release_height);

        Ok(Self {
            parameters: Parameters {
                time_step,
                stop: StopCondition::after_steps(station.max_steps).with_halt(HaltPolicy::Run),
                angular_speed: Some(station.angular_speed),
            },
            bodies: vec![Body::new(release, station.initial_velocity)],
            boundaries: BoundarySet::new().stop(Sphere {
                radius: station.inner_radius,
            }),
        })
    }
}

impl Scenario<3> {
    /// Two balls thrown at a wall at x = 0; both bounce back
    pub fn two_balls_bounce() -> Self {
        Self {
            parameters: Parameters {
                time_step: 0.01,
                stop: StopCondition::after_time(1.0),
                angular_speed: None,
            },
            bodies: vec![
                Body::new(NVec3::new(-10.0, 0.0, 0.0), NVec3::new(25.0, 0.0, 0.0)),
                Body::new(NVec3::new(-8.0, 1.5, 0.0), NVec3::new(18.0, 0.0, 0.0)),
            ],
            boundaries: BoundarySet::new().reflect(Plane {
                axis: 0,
                offset: 0.0,
                facing: Facing::Positive,
            }),
        }
    }

    /// Two balls on straight lines whose paths cross; no boundaries
    pub fn two_balls_cross() -> Self {
        Self {
            parameters: Parameters {
                time_step: 0.05,
                stop: StopCondition::after_time(10.0),
                angular_speed: None,
            },
            bodies: vec![
                Body::new(NVec3::new(-1.0, 0.0, 0.0), NVec3::new(0.3, 0.3, 0.0)),
                Body::new(NVec3::new(1.0, 0.0, 0.0), NVec3::new(-0.3, 0.3, 0.0)),
            ],
            boundaries: BoundarySet::new(),
        }
    }
}
