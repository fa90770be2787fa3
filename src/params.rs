//! Physical constants and area bounds used by every update.
//!
//! `Physics` holds the tuning constants of the step:
//! - gravitational constant and force softening floor,
//! - the visual buffer added to the minimum separation,
//! - the proximity radius and the two speed caps it selects between.

use serde::Deserialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Physics {
    pub g: f64, // gravitational constant, raised for fast orbits at pixel scale
    pub softening_sq: f64, // floor on squared distance in the force law
    pub separation_buffer: f64, // added to r1 + r2 for the minimum separation
    pub proximity_radius: f64, // distance to a pair centroid that counts as near
    pub near_max_speed: f64, // speed cap while near an orbiting pair
    pub far_max_speed: f64, // speed cap otherwise
    pub initial_max_speed: f64, // speed cap of a freshly built body
}

impl Physics {
    pub const G: f64 = 1.8;
    pub const SOFTENING_SQ: f64 = 25.0;
    pub const SEPARATION_BUFFER: f64 = 50.0;
    pub const PROXIMITY_RADIUS: f64 = 300.0;
    pub const NEAR_MAX_SPEED: f64 = 2.5;
    pub const FAR_MAX_SPEED: f64 = 4.5;
    pub const INITIAL_MAX_SPEED: f64 = 2.5;

    /// Checks every constant against the range the update relies on.
    /// Speed caps and radii must be finite and non-negative, the softening floor positive.
    pub fn validate(&self) -> Result<(), Error> {
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;
        let checks = [
            ("g", self.g, self.g.is_finite()),
            (
                "softening_sq",
                self.softening_sq,
                self.softening_sq.is_finite() && self.softening_sq > 0.0,
            ),
            ("separation_buffer", self.separation_buffer, self.separation_buffer.is_finite()),
            ("proximity_radius", self.proximity_radius, non_negative(self.proximity_radius)),
            ("near_max_speed", self.near_max_speed, non_negative(self.near_max_speed)),
            ("far_max_speed", self.far_max_speed, non_negative(self.far_max_speed)),
            ("initial_max_speed", self.initial_max_speed, non_negative(self.initial_max_speed)),
        ];

        match checks.into_iter().find(|&(_, _, ok)| !ok) {
            Some((field, value, _)) => Err(Error::InvalidPhysics { field, value }),
            None => Ok(()),
        }
    }
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            g: Self::G,
            softening_sq: Self::SOFTENING_SQ,
            separation_buffer: Self::SEPARATION_BUFFER,
            proximity_radius: Self::PROXIMITY_RADIUS,
            near_max_speed: Self::NEAR_MAX_SPEED,
            far_max_speed: Self::FAR_MAX_SPEED,
            initial_max_speed: Self::INITIAL_MAX_SPEED,
        }
    }
}

/// Extent of the simulated area; bodies are kept inside `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Result<Self, Error> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(Error::InvalidBounds { width, height });
        }
        Ok(Self { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(Physics::default().validate(), Ok(()));
    }

    #[test]
    fn validate_names_the_bad_field() {
        let physics = Physics {
            far_max_speed: -1.0,
            ..Physics::default()
        };
        assert_eq!(
            physics.validate(),
            Err(Error::InvalidPhysics { field: "far_max_speed", value: -1.0 })
        );

        let physics = Physics {
            softening_sq: 0.0,
            ..Physics::default()
        };
        assert!(matches!(
            physics.validate(),
            Err(Error::InvalidPhysics { field: "softening_sq", .. })
        ));

        let physics = Physics {
            g: f64::INFINITY,
            ..Physics::default()
        };
        assert!(physics.validate().is_err());
    }
}
