use ultraviolet::DVec2;

use crate::error::Error;
use crate::params::{Bounds, Physics};
use crate::vector::{constrain, VecExt};

/// A point mass in the simulated area.
///
/// The radius is not stored: it is `sqrt(mass)` on every read, so it can never
/// drift from the mass when the mass is changed between frames.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Position of the centre.
    pub pos: DVec2,
    /// Velocity, in distance per frame.
    pub vel: DVec2,
    /// Speed cap applied by the next update.
    pub max_speed: f64,
    pub(crate) mass: f64,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            pos: DVec2::zero(),
            vel: DVec2::zero(),
            max_speed: Physics::INITIAL_MAX_SPEED,
            mass: 1.0,
        }
    }
}

impl Body {
    /// Creates a body with the baseline speed cap.
    ///
    /// Fails with [`Error::InvalidMass`] unless `mass` is finite and positive.
    pub fn new(pos: DVec2, vel: DVec2, mass: f64) -> Result<Self, Error> {
        Ok(Self {
            pos,
            vel,
            max_speed: Physics::INITIAL_MAX_SPEED,
            mass: validate_mass(mass)?,
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Replaces the mass. Velocity is left untouched; the radius follows.
    pub fn set_mass(&mut self, mass: f64) -> Result<(), Error> {
        self.mass = validate_mass(mass)?;
        Ok(())
    }

    pub fn radius(&self) -> f64 {
        self.mass.sqrt()
    }

    /// Explicit Euler position step with dt = 1.
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Applies the softened pull of a mass at `other_pos` to the velocity.
    pub fn attract(&mut self, other_pos: DVec2, other_mass: f64, physics: &Physics) {
        let displacement = other_pos - self.pos;
        let distance_sq = displacement.mag_sq();
        let strength = physics.g * self.mass * other_mass / distance_sq.max(physics.softening_sq);
        let force = displacement.with_mag(strength);
        self.vel += force / self.mass;
    }

    pub fn limit_speed(&mut self) {
        self.vel = self.vel.limited(self.max_speed);
    }

    /// Bounces off the area edges. Each axis is checked on its own.
    pub fn reflect(&mut self, bounds: Bounds) {
        let r = self.radius();

        if self.pos.x - r < 0.0 || self.pos.x + r > bounds.width {
            self.vel.x *= -1.0;
            self.pos.x = constrain(self.pos.x, r, bounds.width - r);
        }
        if self.pos.y - r < 0.0 || self.pos.y + r > bounds.height {
            self.vel.y *= -1.0;
            self.pos.y = constrain(self.pos.y, r, bounds.height - r);
        }
    }

    /// Picks the speed cap for the next update from the orbiting-pair centroids.
    /// Stops at the first centroid within the proximity radius.
    pub fn adjust_max_speed<I>(&mut self, centroids: I, physics: &Physics)
    where
        I: IntoIterator<Item = DVec2>,
    {
        let near = centroids
            .into_iter()
            .any(|c| (self.pos - c).mag() < physics.proximity_radius);

        self.max_speed = if near {
            physics.near_max_speed
        } else {
            physics.far_max_speed
        };
    }
}

fn validate_mass(mass: f64) -> Result<f64, Error> {
    if mass.is_finite() && mass > 0.0 {
        Ok(mass)
    } else {
        Err(Error::InvalidMass(mass))
    }
}
