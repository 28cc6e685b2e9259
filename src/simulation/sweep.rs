//! Families of trajectories from one scenario
//!
//! Each run is independent of the others; they are executed one after the
//! other and every result is kept, failures included.

use super::engine::simulate;
use super::error::SimError;
use super::scenario::Scenario;
use super::states::{NVec, NVec2};
use super::trajectory::Trajectory;

/// Default per-axis launch speeds for the station sweep
pub const DEFAULT_SWEEP_SPEEDS: [f64; 7] = [-6.0, -4.0, -2.0, 0.0, 2.0, 4.0, 6.0];

/// One sweep entry: the launch velocity used and what the run produced
pub type SweepResult<const D: usize> = (NVec<D>, Result<Trajectory<D>, SimError>);

/// Cartesian product of `vx` and `vy`, `vx` varying slowest
pub fn velocity_grid(vx: &[f64], vy: &[f64]) -> Vec<NVec2> {
    vx.iter()
        .flat_map(|&x| vy.iter().map(move |&y| NVec2::new(x, y)))
        .collect()
}

/// Re-run `scenario` once per entry of `velocities`, replacing the initial
/// velocity of body 0. The scenario itself is left untouched
pub fn velocity_sweep<const D: usize>(
    scenario: &Scenario<D>,
    velocities: &[NVec<D>],
) -> Vec<SweepResult<D>> {
    velocities
        .iter()
        .map(|v0| {
            let mut bodies = scenario.bodies.clone();
            if let Some(first) = bodies.first_mut() {
                first.v = *v0;
            }
            let result = simulate(
                bodies,
                &scenario.boundaries,
                scenario.parameters.time_step,
                &scenario.parameters.stop,
            );
            if let Err(e) = &result {
                log::warn!("sweep run with v0 = {:?} failed: {e}", v0.as_slice());
            }
            (*v0, result)
        })
        .collect()
}
