//! Build fully-initialized simulation scenarios
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems. `solar_system` builds the
//! default sun-and-planets configuration without going through YAML.

use anyhow::Result;
use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::params::{Parameters, AU, DEFAULT_SCALE, KM_TO_MILES};
use crate::simulation::states::{Body, NVec2, System};

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// numerical parameters plus the current system state. In Bevy terms it is
/// inserted as a `Resource` and then read by the systems responsible for
/// integration and visualization.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    /// Validate `cfg` and map it into a runtime scenario
    ///
    /// Configuration errors (bad mass, duplicate/absent primary, coincident
    /// positions) are reported here and abort startup.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        cfg.validate()?;

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                let mut body = Body::new(
                    NVec2::new(bc.x[0], bc.x[1]),
                    NVec2::new(bc.v[0], bc.v[1]),
                    bc.m,
                    bc.radius,
                    bc.color,
                    &bc.name,
                );
                body.primary = bc.primary;
                body
            })
            .collect();

        // Initial system state: bodies at t = 0
        let system = System { bodies, t: 0.0 };

        Ok(Self {
            parameters: cfg.parameters.to_parameters(),
            system,
        })
    }

    /// The built-in sun / mercury / venus / earth / moon / mars scenario
    ///
    /// Positions are along the x-axis in simulation units (miles), masses
    /// in kilograms, tangential velocities from mean orbital speeds. The
    /// moon's offset from earth is derived from the screen scale, matching
    /// the distances the default scenario has always used.
    pub fn solar_system() -> Self {
        let parameters = Parameters::default();

        let yellow = [255, 255, 0];
        let blue = [100, 149, 237];
        let red = [188, 39, 50];
        let dark_grey = [80, 78, 81];
        let grey = [128, 128, 128];
        let white = [255, 255, 255];

        let mut sun = Body::new(
            NVec2::new(0.0, 0.0),
            NVec2::new(0.0, 0.0),
            1.98892e30,
            30.0,
            yellow,
            "Sun",
        );
        sun.primary = true;

        let earth = Body::new(
            NVec2::new(-1.0 * AU, 0.0),
            NVec2::new(0.0, 29.783 * 1000.0),
            5.9742e24,
            16.0,
            blue,
            "Earth",
        );

        let moon_offset = 384.4e3 * KM_TO_MILES / DEFAULT_SCALE;
        let moon = Body::new(
            NVec2::new(earth.x.x - moon_offset, 0.0),
            NVec2::new(0.0, earth.v.y + 1.022 * 1000.0),
            7.342e22,
            4.0,
            grey,
            "Moon",
        );

        let mars = Body::new(
            NVec2::new(-1.524 * AU, 0.0),
            NVec2::new(0.0, 24.077 * 1000.0),
            6.39e23,
            12.0,
            red,
            "Mars",
        );

        let mercury = Body::new(
            NVec2::new(0.387 * AU, 0.0),
            NVec2::new(0.0, -47.4 * 1000.0),
            3.30e23,
            8.0,
            dark_grey,
            "Mercury",
        );

        let venus = Body::new(
            NVec2::new(0.723 * AU, 0.0),
            NVec2::new(0.0, -35.02 * 1000.0),
            4.8685e24,
            14.0,
            white,
            "Venus",
        );

        let system = System {
            bodies: vec![sun, mercury, venus, earth, moon, mars],
            t: 0.0,
        };

        Self { parameters, system }
    }
}
