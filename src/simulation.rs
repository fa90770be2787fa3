use log::{debug, trace};
use ultraviolet::DVec2;

use crate::{
    body::Body,
    error::Error,
    params::{Bounds, Physics},
    utils,
    vector::VecExt,
};

/// Two bodies treated as orbiting each other, by index.
///
/// A third body near the centroid of any such pair is held to the lower speed cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrbitingPair(pub usize, pub usize);

/// A fixed set of bodies stepped frame by frame inside a bounded area.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Current frame count.
    pub frame: usize,
    /// Collection of all bodies; the index is the body's identity.
    pub bodies: Vec<Body>,
    /// Constants used by every update.
    pub physics: Physics,
    bounds: Bounds,
    orbiting_pairs: Vec<OrbitingPair>,
}

impl Simulation {
    /// Canvas used when no size is given, matching a common window size.
    pub const DEFAULT_WIDTH: f64 = 1280.0;
    pub const DEFAULT_HEIGHT: f64 = 720.0;

    /// Builds the randomized three-body demo on a default-sized canvas.
    pub fn new(seed: u64) -> Self {
        let bounds = Bounds {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        };
        Self::demo(bounds, seed)
    }

    /// Builds the randomized three-body demo on a `bounds`-sized canvas.
    pub fn demo(bounds: Bounds, seed: u64) -> Self {
        let physics = Physics::default();
        Self::with_bodies(utils::three_body_demo(bounds, &physics, seed), bounds, physics)
    }

    /// Wraps the given bodies. No orbiting pairs are set.
    pub fn with_bodies(bodies: Vec<Body>, bounds: Bounds, physics: Physics) -> Self {
        Self {
            frame: 0,
            bodies,
            physics,
            bounds,
            orbiting_pairs: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Replaces the area bounds, e.g. after the host window was resized.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), Error> {
        self.bounds = Bounds::new(width, height)?;
        debug!("bounds set to {width}x{height}");
        Ok(())
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Changes one body's mass between frames.
    pub fn set_mass(&mut self, index: usize, mass: f64) -> Result<(), Error> {
        let count = self.bodies.len();
        let body = self
            .bodies
            .get_mut(index)
            .ok_or(Error::UnknownBody { index, count })?;
        body.set_mass(mass)?;
        debug!("body {index} mass set to {mass}");
        Ok(())
    }

    pub fn orbiting_pairs(&self) -> &[OrbitingPair] {
        &self.orbiting_pairs
    }

    /// Replaces the whole list of orbiting pairs used by [`Simulation::step`].
    pub fn set_orbiting_pairs(&mut self, pairs: Vec<OrbitingPair>) -> Result<(), Error> {
        let count = self.bodies.len();
        if let Some(index) = pairs.iter().flat_map(|p| [p.0, p.1]).find(|&i| i >= count) {
            return Err(Error::UnknownBody { index, count });
        }
        debug!("{} orbiting pair(s) set", pairs.len());
        self.orbiting_pairs = pairs;
        Ok(())
    }

    /// Advances the simulation by one frame.
    /// Bodies are updated once each in index order, every other body acting as a perturber.
    /// The order is observable through the separation step and must stay fixed.
    pub fn step(&mut self) {
        let pairs = std::mem::take(&mut self.orbiting_pairs);
        let n = self.bodies.len();
        let mut others = Vec::with_capacity(n.saturating_sub(1));

        for index in 0..n {
            others.clear();
            others.extend((0..n).filter(|&j| j != index));
            self.update(index, &others, &pairs);
        }

        self.orbiting_pairs = pairs;
        self.frame += 1;
        trace!("frame {} done", self.frame);
    }

    /// Advances body `index` by one frame against the bodies listed in `others`.
    ///
    /// In order: Euler position step, gravity from `others`, speed clamp,
    /// boundary reflection, minimum separation against `others` (which also moves
    /// them), and finally the speed cap for the next frame from `pairs`.
    /// `index` itself is skipped if it shows up in `others`.
    ///
    /// # Panics
    /// If `index`, an entry of `others` or a body of `pairs` is out of range.
    pub fn update(&mut self, index: usize, others: &[usize], pairs: &[OrbitingPair]) {
        let physics = self.physics;

        self.bodies[index].integrate();

        for &j in others.iter().filter(|&&j| j != index) {
            let other = self.bodies[j];
            self.bodies[index].attract(other.pos, other.mass(), &physics);
        }

        let body = &mut self.bodies[index];
        body.limit_speed();
        body.reflect(self.bounds);

        for &j in others.iter().filter(|&&j| j != index) {
            self.separate(index, j);
        }

        // Centroids read the positions as left by the separation pass.
        let mut body = self.bodies[index];
        let bodies = &self.bodies;
        body.adjust_max_speed(
            pairs
                .iter()
                .map(|&OrbitingPair(a, b)| (bodies[a].pos + bodies[b].pos) * 0.5),
            &physics,
        );
        self.bodies[index] = body;
    }

    /// Pushes bodies `i` and `j` apart when closer than their minimum separation.
    /// Each moves by half the overlap along the line between their centres.
    /// Coincident centres give no direction and are left as they are.
    fn separate(&mut self, i: usize, j: usize) {
        let b1 = &self.bodies[i];
        let b2 = &self.bodies[j];

        let d: DVec2 = b1.pos - b2.pos;
        let distance = d.mag();
        let min_sep = b1.radius() + b2.radius() + self.physics.separation_buffer;

        if distance < min_sep {
            let push = d.with_mag((min_sep - distance) / 2.0);
            self.bodies[i].pos += push;
            self.bodies[j].pos -= push;
        }
    }
}
