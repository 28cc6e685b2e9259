//! Numerical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size,
//! - the stop condition (time bound, step bound, halt policy),
//! - angular speed of the reference frame, when the scenario has one

use std::f64::consts::TAU;

use serde::Deserialize;

use super::error::SimError;

/// Fraction of one rotation period used as the default step for rotating scenarios
pub const PERIOD_STEP_FRACTION: f64 = 0.001;

/// Slack applied when turning a time bound into a whole number of steps,
/// so `1.0 / 0.01` still yields 100 steps
const STEP_COUNT_SLACK: f64 = 1e-9;

/// What a boundary stop event halts
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HaltPolicy {
    #[serde(rename = "run")] // first stop event ends the whole run
    #[default]
    Run,

    #[serde(rename = "body")] // only the crossing body halts, the others keep moving
    Body,
}

/// When a run ends. Whichever bound triggers first wins
#[derive(Debug, Clone, PartialEq)]
pub struct StopCondition {
    pub max_time: Option<f64>, // elapsed-time bound
    pub max_steps: Option<usize>, // integration-step bound
    pub halt: HaltPolicy, // how stop rules end the run
}

/// The bound that limits a run before any boundary event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepBound {
    Steps,
    Time,
}

impl StopCondition {
    pub fn after_steps(max_steps: usize) -> Self {
        Self {
            max_time: None,
            max_steps: Some(max_steps),
            halt: HaltPolicy::Run,
        }
    }

    pub fn after_time(max_time: f64) -> Self {
        Self {
            max_time: Some(max_time),
            max_steps: None,
            halt: HaltPolicy::Run,
        }
    }

    pub fn with_halt(mut self, halt: HaltPolicy) -> Self {
        self.halt = halt;
        self
    }

    /// Check the bounds on their own, independent of the time step
    pub fn validate(&self) -> Result<(), SimError> {
        if self.max_time.is_none() && self.max_steps.is_none() {
            return Err(SimError::invalid(
                "stop condition needs max_time or max_steps so the run terminates",
            ));
        }
        if let Some(t) = self.max_time {
            if !t.is_finite() || t < 0.0 {
                return Err(SimError::invalid(format!(
                    "max_time must be finite and non-negative, got {t}"
                )));
            }
        }
        Ok(())
    }

    /// Largest number of integration steps the run may take, and which bound set it
    pub fn step_limit(&self, time_step: f64) -> (usize, StepBound) {
        let from_time = self
            .max_time
            .map(|t| (t / time_step + STEP_COUNT_SLACK).floor() as usize);

        match (self.max_steps, from_time) {
            (Some(s), Some(t)) if t < s => (t, StepBound::Time),
            (Some(s), _) => (s, StepBound::Steps),
            (None, Some(t)) => (t, StepBound::Time),
            // validate() rules this out
            (None, None) => (0, StepBound::Steps),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub time_step: f64, // step size dt
    pub stop: StopCondition,
    pub angular_speed: Option<f64>, // rotation rate of the reference frame, if any
}

impl Parameters {
    /// Default step for a frame rotating at `angular_speed`: a fixed fraction of one period
    pub fn period_time_step(angular_speed: f64) -> Result<f64, SimError> {
        if !angular_speed.is_finite() || angular_speed <= 0.0 {
            return Err(SimError::invalid(format!(
                "angular_speed must be finite and positive, got {angular_speed}"
            )));
        }
        Ok(PERIOD_STEP_FRACTION * TAU / angular_speed)
    }
}
