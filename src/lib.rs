pub mod simulation;
pub mod configuration;
pub mod output;

pub use simulation::error::SimError;
pub use simulation::states::{Body, Body2, Body3, SimulationState, NVec, NVec2, NVec3};
pub use simulation::boundary::{Boundary, BoundaryRule, BoundarySet, Effect, Facing, Plane, Sphere};
pub use simulation::params::{HaltPolicy, Parameters, StopCondition};
pub use simulation::trajectory::{StopReason, Trajectory};
pub use simulation::engine::simulate;
pub use simulation::integrator::euler_step;
pub use simulation::scenario::{Scenario, Scenario2D, Scenario3D, Station};
pub use simulation::frame::{rotate_xy, RotatingFrame};
pub use simulation::sweep::{velocity_grid, velocity_sweep, DEFAULT_SWEEP_SPEEDS};

pub use configuration::config::{BodyConfig, BoundaryConfig, DimensionConfig, EngineConfig, ParametersConfig, ScenarioConfig};

pub use output::export::TrajectoryRecord;
