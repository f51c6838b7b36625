//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario plus its startup validation. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   G: 6.67428e-11          # gravitational constant
//!   dt: 43200.0             # fixed step size in seconds
//!   scale: 2.6894e-9        # world-to-screen distance scale
//!   trail_cap: 100          # orbit trail length cap
//!   distance_interval: 100  # steps between distance recomputes
//!
//! bodies:
//!   - name: "Sol"
//!     x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.98892e30
//!     radius: 30.0
//!     color: [ 255, 255, 0 ]
//!     primary: true
//!   - name: "Terra"
//!     x: [ -9.2957e10, 0.0 ]
//!     v: [ 0.0, 29783.0 ]
//!     m: 5.9742e24
//!     radius: 16.0
//!     color: [ 100, 149, 237 ]
//! ```
//!
//! All `parameters` fields are optional and default to the solar-system
//! constants in [`crate::simulation::params`]. Validation runs once at
//! startup; a bad configuration aborts before the first step.

use anyhow::{bail, ensure, Result};
use serde::Deserialize;

use crate::simulation::params::{
    Parameters, DEFAULT_DISTANCE_INTERVAL, DEFAULT_DT, DEFAULT_G, DEFAULT_SCALE, DEFAULT_TRAIL_CAP,
};

/// Global numerical and physical parameters for a scenario
/// Every field falls back to the solar-system defaults when omitted
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default = "default_dt")]
    pub dt: f64, // fixed step size in seconds
    #[serde(default = "default_scale")]
    pub scale: f64, // world-to-screen distance scale
    #[serde(default = "default_trail_cap")]
    pub trail_cap: usize, // orbit trail length cap
    #[serde(default = "default_distance_interval")]
    pub distance_interval: u32, // steps between distance recomputes
}

fn default_g() -> f64 {
    DEFAULT_G
}
fn default_dt() -> f64 {
    DEFAULT_DT
}
fn default_scale() -> f64 {
    DEFAULT_SCALE
}
fn default_trail_cap() -> usize {
    DEFAULT_TRAIL_CAP
}
fn default_distance_interval() -> u32 {
    DEFAULT_DISTANCE_INTERVAL
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: DEFAULT_G,
            dt: DEFAULT_DT,
            scale: DEFAULT_SCALE,
            trail_cap: DEFAULT_TRAIL_CAP,
            distance_interval: DEFAULT_DISTANCE_INTERVAL,
        }
    }
}

impl ParametersConfig {
    /// Map into the runtime [`Parameters`] struct
    pub fn to_parameters(&self) -> Parameters {
        Parameters {
            G: self.G,
            dt: self.dt,
            scale: self.scale,
            trail_cap: self.trail_cap,
            distance_interval: self.distance_interval,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: String, // display name
    pub x: Vec<f64>, // initial position, two components
    pub v: Vec<f64>, // initial velocity, two components
    pub m: f64, // mass, strictly positive
    pub radius: f64, // draw radius in pixels
    #[serde(default = "default_color")]
    pub color: [u8; 3], // draw color
    #[serde(default)]
    pub primary: bool, // exactly one body carries this in a non-empty system
}

fn default_color() -> [u8; 3] {
    [255, 255, 255]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // global numerical and physical parameters
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // initial state of the system
}

impl ScenarioConfig {
    /// Reject bad configurations once, before the first step
    ///
    /// Checks masses, vector arities, the primary flag, coincident
    /// positions, and parameter signs. A zero-body scenario is valid
    /// (the step driver is then a no-op on bodies).
    pub fn validate(&self) -> Result<()> {
        let p = &self.parameters;
        ensure!(p.G > 0.0, "gravitational constant must be positive, got {}", p.G);
        ensure!(p.dt > 0.0, "step size dt must be positive, got {}", p.dt);
        ensure!(p.scale > 0.0, "distance scale must be positive, got {}", p.scale);
        ensure!(p.trail_cap > 0, "trail cap must be at least 1");
        ensure!(p.distance_interval > 0, "distance interval must be at least 1");

        let mut primaries = 0usize;
        for (i, b) in self.bodies.iter().enumerate() {
            let label = if b.name.is_empty() {
                format!("body {i}")
            } else {
                format!("body {i} ({})", b.name)
            };
            ensure!(b.m > 0.0, "{label}: mass must be strictly positive, got {}", b.m);
            ensure!(b.x.len() == 2, "{label}: position must have 2 components, got {}", b.x.len());
            ensure!(b.v.len() == 2, "{label}: velocity must have 2 components, got {}", b.v.len());
            if b.primary {
                primaries += 1;
            }
        }

        if !self.bodies.is_empty() {
            match primaries {
                0 => bail!("no body is marked primary"),
                1 => {}
                n => bail!("{n} bodies are marked primary, expected exactly one"),
            }
        }

        // Coincident positions would make the force computation divide by
        // zero; degenerate geometry is rejected here rather than handled
        // at runtime.
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let a = &self.bodies[i];
                let b = &self.bodies[j];
                if a.x == b.x {
                    bail!(
                        "bodies {i} and {j} start at the same position {:?}",
                        a.x
                    );
                }
            }
        }

        Ok(())
    }
}
