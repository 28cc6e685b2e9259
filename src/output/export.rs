//! Serializable trajectory records for rendering tools
//!
//! Flattens a `Trajectory<D>` into plain vectors so the YAML stays readable
//! and independent of nalgebra's storage layout. Positions can optionally be
//! written in a rotating frame alongside the inertial ones.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::simulation::frame::RotatingFrame;
use crate::simulation::trajectory::{StopReason, Trajectory};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BodyRecord {
    pub x: Vec<f64>,
    pub v: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_rotating: Option<Vec<f64>>,
    pub halted: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StateRecord {
    pub step: usize,
    pub time: f64,
    pub bodies: Vec<BodyRecord>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TrajectoryRecord {
    pub dimension: usize,
    pub time_step: f64,
    pub stop_reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angular_speed: Option<f64>,
    pub states: Vec<StateRecord>,
}

impl TrajectoryRecord {
    pub fn from_trajectory<const D: usize>(trajectory: &Trajectory<D>, frame: Option<RotatingFrame>) -> Self {
        let states = trajectory
            .iter()
            .map(|s| StateRecord {
                step: s.step,
                time: s.time,
                bodies: s
                    .bodies
                    .iter()
                    .map(|b| BodyRecord {
                        x: b.x.as_slice().to_vec(),
                        v: b.v.as_slice().to_vec(),
                        x_rotating: frame.map(|f| f.to_rotating(&b.x, s.time).as_slice().to_vec()),
                        halted: b.halted,
                    })
                    .collect(),
            })
            .collect();

        Self {
            dimension: D,
            time_step: trajectory.time_step(),
            stop_reason: describe(trajectory.stop_reason()),
            angular_speed: frame.map(|f| f.angular_speed),
            states,
        }
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).context("failed to serialize trajectory")
    }

    pub fn write_yaml(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_yaml::to_writer(&mut writer, self)
            .with_context(|| format!("failed to write trajectory to {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("failed to flush trajectory to {}", path.display()))
    }
}

fn describe(reason: StopReason) -> String {
    match reason {
        StopReason::StepLimit => "step_limit".to_string(),
        StopReason::TimeLimit => "time_limit".to_string(),
        StopReason::BoundaryStop { body, step } => format!("boundary_stop(body {body}, step {step})"),
        StopReason::AllHalted => "all_halted".to_string(),
    }
}
