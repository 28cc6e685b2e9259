//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – global engine options (dimension)
//! - [`ParametersConfig`] – time step, stop condition, reference frame
//! - [`BodyConfig`]       – initial state for each body
//! - [`BoundaryConfig`]   – boundary rules applied after every step
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The rotating-station scenario in these types:
//!
//! ```yaml
//! engine:
//!   dimension: "2d"          # "2d" or "3d"
//!
//! parameters:
//!   max_steps: 20000         # step bound (t_end is the time bound, either or both)
//!   halt: "run"              # "run": first stop ends the run, "body": only that body halts
//!   angular_speed: 1.0       # station rotation rate; time_step defaults to 0.001 of a period
//!
//! bodies:
//!   - x: [ 0.0, -8.0 ]
//!     v: [ 3.0,  0.0 ]
//!
//! boundaries:
//!   - shape: { sphere: { radius: 10.0 } }
//!     effect: "stop"
//! ```
//!
//! The scenario builder maps this configuration into the runtime types,
//! checking vector lengths and plane axes against the declared dimension.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::boundary::{Effect, Facing};
use crate::simulation::params::HaltPolicy;

/// Spatial dimension of every vector in the scenario
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionConfig {
    #[serde(rename = "2d")]
    Two,

    #[serde(rename = "3d")]
    Three,
}

impl DimensionConfig {
    pub fn components(self) -> usize {
        match self {
            DimensionConfig::Two => 2,
            DimensionConfig::Three => 3,
        }
    }
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub dimension: DimensionConfig, // 2D or 3D run
}

/// Numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ParametersConfig {
    pub time_step: Option<f64>, // fixed step size; falls back to the rotation-period default
    pub t_end: Option<f64>, // time bound
    pub max_steps: Option<usize>, // step bound
    #[serde(default)]
    pub halt: HaltPolicy, // what a boundary stop halts
    pub angular_speed: Option<f64>, // rotation rate of the reference frame
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position, one entry per dimension
    #[serde(default)]
    pub v: Option<Vec<f64>>, // initial velocity, at rest when omitted
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacingConfig {
    #[serde(rename = "positive")] // crossed at x[axis] >= offset
    #[default]
    Positive,

    #[serde(rename = "negative")] // crossed at x[axis] <= offset
    Negative,
}

impl From<FacingConfig> for Facing {
    fn from(f: FacingConfig) -> Self {
        match f {
            FacingConfig::Positive => Facing::Positive,
            FacingConfig::Negative => Facing::Negative,
        }
    }
}

/// Geometry of one boundary
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub enum ShapeConfig {
    #[serde(rename = "sphere")] // origin-centred container
    Sphere { radius: f64 },

    #[serde(rename = "plane")] // axis-aligned wall
    Plane {
        axis: usize,
        offset: f64,
        #[serde(default)]
        facing: FacingConfig,
    },
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectConfig {
    #[serde(rename = "reflect")]
    Reflect,

    #[serde(rename = "stop")]
    Stop,
}

impl From<EffectConfig> for Effect {
    fn from(e: EffectConfig) -> Self {
        match e {
            EffectConfig::Reflect => Effect::Reflect,
            EffectConfig::Stop => Effect::Stop,
        }
    }
}

/// One boundary rule: a shape and what crossing it does
#[derive(Deserialize, Debug, Clone)]
pub struct BoundaryConfig {
    #[serde(with = "serde_yaml::with::singleton_map")] // `{ sphere: { .. } }` rather than `!sphere { .. }`
    pub shape: ShapeConfig,
    pub effect: EffectConfig,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration (dimension)
    pub parameters: ParametersConfig, // step size and stop condition
    pub bodies: Vec<BodyConfig>, // initial state of the system
    #[serde(default)]
    pub boundaries: Vec<BoundaryConfig>, // rules checked after every step
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).context("failed to parse scenario YAML")
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario file {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario file {}", path.display()))
    }
}
