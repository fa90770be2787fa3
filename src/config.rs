//! Scenario files: bodies, area and constants loaded from YAML.
//!
//! ```yaml
//! bounds:
//!   width: 1280.0
//!   height: 720.0
//!
//! physics:            # optional, every field defaults
//!   g: 1.8
//!   separation_buffer: 50.0
//!
//! frames: 600         # optional, used by the runner
//!
//! bodies:
//!   - x: [640.0, 360.0]
//!     v: [0.0, 0.0]
//!     m: 1500.0
//!   - x: [300.0, 200.0]
//!     v: [0.5, -0.5]
//!     m: 600.0
//!     max_speed: 4.5  # optional, defaults to physics.initial_max_speed
//!
//! orbiting_pairs:     # optional, indices into `bodies`
//!   - [0, 1]
//! ```

use std::io::Read;

use serde::Deserialize;
use ultraviolet::DVec2;

use crate::body::Body;
use crate::error::Error;
use crate::params::{Bounds, Physics};
use crate::simulation::{OrbitingPair, Simulation};

/// Initial state of one body.
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // position
    pub v: [f64; 2], // velocity per frame
    pub m: f64,      // mass, radius is sqrt(m)
    pub max_speed: Option<f64>,
}

/// Top-level scenario loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub bounds: Bounds,
    #[serde(default)]
    pub physics: Physics,
    pub frames: Option<usize>,
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub orbiting_pairs: Vec<[usize; 2]>,
}

impl ScenarioConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Validates the scenario and turns it into a ready-to-step simulation.
    pub fn build(self) -> Result<Simulation, Error> {
        let bounds = Bounds::new(self.bounds.width, self.bounds.height)?;
        self.physics.validate()?;

        let bodies = self
            .bodies
            .iter()
            .map(|cfg| -> Result<Body, Error> {
                let [x, y] = cfg.x;
                let [vx, vy] = cfg.v;
                let mut body = Body::new(DVec2::new(x, y), DVec2::new(vx, vy), cfg.m)?;
                body.max_speed = match cfg.max_speed {
                    Some(speed) if !speed.is_finite() || speed < 0.0 => {
                        return Err(Error::InvalidMaxSpeed(speed));
                    }
                    Some(speed) => speed,
                    None => self.physics.initial_max_speed,
                };
                Ok(body)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut sim = Simulation::with_bodies(bodies, bounds, self.physics);
        sim.set_orbiting_pairs(
            self.orbiting_pairs
                .iter()
                .map(|&[a, b]| OrbitingPair(a, b))
                .collect(),
        )?;
        Ok(sim)
    }
}
