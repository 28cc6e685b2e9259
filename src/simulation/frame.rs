//! Rotating reference frame
//!
//! The station ball moves in a straight line in the inertial frame. Seen from
//! the station, which spins at `angular_speed` about the origin, the same
//! path curls. Rotation is always in the x-y plane; z is left unchanged in 3D.

use super::error::SimError;
use super::states::NVec;
use super::trajectory::Trajectory;

/// Rotate the x-y components of `v` by `angle` radians about the origin.
///
/// # Panics
/// When `D < 2`; there is no x-y plane to rotate in
pub fn rotate_xy<const D: usize>(v: &NVec<D>, angle: f64) -> NVec<D> {
    assert!(D >= 2, "rotate_xy needs at least 2 dimensions, got {}", D);
    let (sin, cos) = angle.sin_cos();
    let mut out = *v;
    out[0] = cos * v[0] - sin * v[1];
    out[1] = sin * v[0] + cos * v[1];
    out
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatingFrame {
    pub angular_speed: f64, // rad per unit time, positive = counter-clockwise
}

impl RotatingFrame {
    pub fn new(angular_speed: f64) -> Result<Self, SimError> {
        if !angular_speed.is_finite() {
            return Err(SimError::invalid(format!(
                "angular_speed must be finite, got {angular_speed}"
            )));
        }
        Ok(Self { angular_speed })
    }

    /// Angle the frame has turned through at time `t`.
    /// Renderers rotate the station hull by this in the inertial view
    pub fn boundary_angle(&self, t: f64) -> f64 {
        self.angular_speed * t
    }

    /// Inertial position `x` at time `t`, expressed in the rotating frame
    pub fn to_rotating<const D: usize>(&self, x: &NVec<D>, t: f64) -> NVec<D> {
        rotate_xy(x, -self.boundary_angle(t))
    }

    /// Every body position of every state, expressed in the rotating frame.
    /// Outer index is the step, inner index the body
    pub fn trajectory_in_frame<const D: usize>(&self, trajectory: &Trajectory<D>) -> Vec<Vec<NVec<D>>> {
        trajectory
            .iter()
            .map(|s| s.positions().map(|x| self.to_rotating(x, s.time)).collect())
            .collect()
    }
}
