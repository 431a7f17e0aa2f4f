//! Run configuration, loadable from YAML.
//!
//! Every field has a default, so an empty document yields the reference
//! setup: 750 discs of mass 1 and radius 2 in a 640x480 viewport.
//!
//! ```yaml
//! particles: 750
//! capacity: 2000
//! width: 640
//! height: 480
//! seed: 42                  # omit for a different run every time
//! mass: 1.0
//! radius: 2.0
//! velocity_scale: 8.0       # components drawn from [-scale/2, scale/2)
//! pass_mode: double_visit   # or single_visit_symmetric
//! response_mode: axis_aligned  # or normal_projected
//! apply_acceleration: false
//! filled: false             # draw filled discs instead of outlines
//! ```

use crate::core::init::DEFAULT_VELOCITY_SCALE;
use crate::core::particle::{DEFAULT_MASS, DEFAULT_RADIUS};
use crate::core::population::DEFAULT_CAPACITY;
use crate::core::viewport::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::core::{
    CollisionPassMode, CollisionResponseMode, Initializer, Simulation, StepConfig, Viewport,
};
use crate::error::{Error, Result};
use crate::render::MidpointCircle;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reference particle count.
pub const DEFAULT_PARTICLES: usize = 750;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub particles: usize,
    pub capacity: usize,
    pub width: u32,
    pub height: u32,
    pub seed: Option<u64>,
    pub mass: f64,
    pub radius: f64,
    pub velocity_scale: f64,
    pub pass_mode: CollisionPassMode,
    pub response_mode: CollisionResponseMode,
    pub apply_acceleration: bool,
    pub filled: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particles: DEFAULT_PARTICLES,
            capacity: DEFAULT_CAPACITY,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            mass: DEFAULT_MASS,
            radius: DEFAULT_RADIUS,
            velocity_scale: DEFAULT_VELOCITY_SCALE,
            pass_mode: CollisionPassMode::default(),
            response_mode: CollisionResponseMode::default(),
            apply_acceleration: false,
            filled: false,
        }
    }
}

impl SimConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let cfg: Self = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.particles > self.capacity {
            return Err(Error::CapacityExceeded {
                requested: self.particles,
                capacity: self.capacity,
            });
        }
        Viewport::new(self.width, self.height)?;
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(Error::InvalidMass(self.mass));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !self.velocity_scale.is_finite() || self.velocity_scale < 0.0 {
            return Err(Error::InvalidParam(
                "velocity_scale must be finite and >= 0".into(),
            ));
        }
        Ok(())
    }

    pub fn viewport(&self) -> Result<Viewport> {
        Viewport::new(self.width, self.height)
    }

    pub fn initializer(&self) -> Initializer {
        Initializer {
            mass: self.mass,
            radius: self.radius,
            velocity_scale: self.velocity_scale,
        }
    }

    pub fn step_config(&self) -> StepConfig {
        StepConfig {
            pass_mode: self.pass_mode,
            response_mode: self.response_mode,
            apply_acceleration: self.apply_acceleration,
        }
    }

    pub fn rasterizer(&self) -> MidpointCircle {
        MidpointCircle {
            filled: self.filled,
        }
    }

    /// Validate and build the simulation this config describes.
    pub fn build(&self) -> Result<Simulation> {
        self.validate()?;
        Simulation::with_options(
            self.particles,
            self.capacity,
            self.viewport()?,
            self.seed,
            self.initializer(),
            self.step_config(),
        )
    }
}
