//! The trajectory simulator
//!
//! Runs explicit Euler steps, applies boundary rules to every post-step
//! position, and records one `SimulationState` per step until the stop
//! condition is met

use super::boundary::BoundarySet;
use super::error::SimError;
use super::integrator::euler_step;
use super::params::{HaltPolicy, StepBound, StopCondition};
use super::states::{Body, SimulationState};
use super::trajectory::{StopReason, Trajectory};

/// Outcome of applying the rule set to one body at one step
enum BoundaryEvent {
    None,
    Reflected(&'static str),
    Stopped(&'static str),
}

/// Run a simulation from `bodies` to completion.
///
/// All inputs are checked before the first step. Stop rules take precedence
/// over reflect rules when a body crosses both in the same step.
pub fn simulate<const D: usize>(
    bodies: Vec<Body<D>>,
    rules: &BoundarySet<D>,
    time_step: f64,
    stop: &StopCondition,
) -> Result<Trajectory<D>, SimError> {
    validate_inputs(&bodies, rules, time_step, stop)?;

    let (limit, bound) = stop.step_limit(time_step);
    log::debug!(
        "simulate: {} bodies, {} rules, dt = {time_step}, up to {limit} steps ({}D)",
        bodies.len(),
        rules.len(),
        D
    );

    let initial = SimulationState {
        step: 0,
        time: 0.0,
        bodies,
    };
    let mut trajectory = Trajectory::start(time_step, initial, limit.saturating_add(1).min(1 << 16));
    let mut reason = match bound {
        StepBound::Steps => StopReason::StepLimit,
        StepBound::Time => StopReason::TimeLimit,
    };

    for step in 1..=limit {
        let mut next = match trajectory.last() {
            Some(prev) => prev.bodies.clone(),
            None => break,
        };

        // Drift
        euler_step(&mut next, time_step);
        let time = step as f64 * time_step;

        // Boundary events on the post-drift positions
        let mut run_stopped_by = None;
        for (i, body) in next.iter_mut().enumerate() {
            if body.halted {
                continue;
            }
            match apply_rules(body, rules, i, step)? {
                BoundaryEvent::Stopped(name) => {
                    log::debug!("step {step}: body {i} stopped on {name} at {:?}", body.x.as_slice());
                    if stop.halt == HaltPolicy::Run && run_stopped_by.is_none() {
                        run_stopped_by = Some(i);
                    }
                }
                BoundaryEvent::Reflected(name) => {
                    log::debug!("step {step}: body {i} reflected off {name}, v = {:?}", body.v.as_slice());
                }
                BoundaryEvent::None => {}
            }
        }

        let state = SimulationState {
            step,
            time,
            bodies: next,
        };
        let all_halted = state.all_halted();
        trajectory.push(state);

        if let Some(body) = run_stopped_by {
            reason = StopReason::BoundaryStop { body, step };
            break;
        }
        if all_halted {
            reason = StopReason::AllHalted;
            break;
        }
    }

    trajectory.finish(reason);
    log::info!(
        "simulation finished: {} states, t = {:.6}, {:?}",
        trajectory.len(),
        trajectory.last().map_or(0.0, |s| s.time),
        reason
    );
    Ok(trajectory)
}

/// Evaluate the rule set for one body: stop rules first, then reflect rules
fn apply_rules<const D: usize>(
    body: &mut Body<D>,
    rules: &BoundarySet<D>,
    index: usize,
    step: usize,
) -> Result<BoundaryEvent, SimError> {
    let degenerate = || SimError::DegenerateState { body: index, step };

    if let Some(rule) = rules.stop_rules().find(|r| r.boundary.crossed(&body.x)) {
        body.x = rule.boundary.clamp(&body.x).ok_or_else(degenerate)?;
        body.halted = true;
        return Ok(BoundaryEvent::Stopped(rule.boundary.name()));
    }

    let mut event = BoundaryEvent::None;
    for rule in rules.reflect_rules() {
        if rule.boundary.crossed(&body.x) {
            let v = rule.boundary.reflect(&body.x, &body.v).ok_or_else(degenerate)?;
            if v != body.v {
                body.v = v;
                event = BoundaryEvent::Reflected(rule.boundary.name());
            }
        }
    }
    Ok(event)
}

fn validate_inputs<const D: usize>(
    bodies: &[Body<D>],
    rules: &BoundarySet<D>,
    time_step: f64,
    stop: &StopCondition,
) -> Result<(), SimError> {
    if D != 2 && D != 3 {
        return Err(SimError::invalid(format!(
            "only 2D and 3D runs are supported, got {} dimensions",
            D
        )));
    }
    if !time_step.is_finite() || time_step <= 0.0 {
        return Err(SimError::invalid(format!(
            "time_step must be finite and strictly positive, got {time_step}"
        )));
    }
    if bodies.is_empty() {
        return Err(SimError::invalid("at least one body is required"));
    }
    if let Some(i) = bodies.iter().position(|b| !b.is_finite()) {
        return Err(SimError::invalid(format!(
            "body {i} has a non-finite position or velocity"
        )));
    }
    rules.validate()?;
    stop.validate()
}
