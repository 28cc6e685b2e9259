//! Fixed-step explicit Euler integrator
//!
//! Bodies move in straight lines between boundary events, so a single drift
//! per step is the whole update: x_n+1 = x_n + dt v_n

use super::states::Body;

/// Advance every non-halted body by one step of size `dt`.
/// Halted bodies keep their clamped position
pub fn euler_step<const D: usize>(bodies: &mut [Body<D>], dt: f64) {
    for b in bodies.iter_mut().filter(|b| !b.halted) {
        b.x += b.v * dt;
    }
}
