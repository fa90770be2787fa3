use std::ops::RangeInclusive;

use ultraviolet::DVec2;

use crate::body::Body;
use crate::params::{Bounds, Physics};

/// Range a host UI should offer when letting the user change a body's mass.
pub const MASS_CONTROL_RANGE: RangeInclusive<f64> = 100.0..=2000.0;

/// Size of the region the demo orbits are laid out in, centred on the canvas.
pub const DEMO_AREA_WIDTH: f64 = 720.0;
pub const DEMO_AREA_HEIGHT: f64 = 480.0;

/// Generates the three-body demo layout on a `canvas`-sized area.
/// - Body 0 is the heavy primary, at rest.
/// - Bodies 1 and 2 get circular-orbit speeds around the demo area's upper-third centre,
///   sized by the distance from that point to the bottom-right and bottom-left corners.
/// - All three start at random canvas positions; `seed` makes the layout reproducible.
pub fn three_body_demo(canvas: Bounds, physics: &Physics, seed: u64) -> Vec<Body> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut random = |low: f64, high: f64| low + rng.f64() * (high - low);

    let area_x = (canvas.width - DEMO_AREA_WIDTH) / 2.0;
    let area_y = (canvas.height - DEMO_AREA_HEIGHT) / 2.0;

    let center = DVec2::new(area_x + DEMO_AREA_WIDTH / 2.0, area_y + DEMO_AREA_HEIGHT / 3.0);
    let bottom_right = DVec2::new(area_x + DEMO_AREA_WIDTH, area_y + DEMO_AREA_HEIGHT);
    let bottom_left = DVec2::new(area_x, area_y + DEMO_AREA_HEIGHT);

    let mut spawn = |low: f64, high: f64| {
        let pos = DVec2::new(random(0.0, canvas.width), random(0.0, canvas.height));
        Body {
            pos,
            vel: DVec2::zero(),
            max_speed: physics.initial_max_speed,
            mass: random(low, high),
        }
    };

    let primary = spawn(1000.0, 2000.0);
    let mut second = spawn(500.0, 800.0);
    let mut third = spawn(200.0, 400.0);

    // Speed for a circular orbit: v = sqrt(G * M / r)
    let orbit_velocity = |corner: DVec2| {
        let offset = center - corner;
        let speed = (physics.g * primary.mass() / offset.mag()).sqrt();
        let angle = offset.y.atan2(offset.x);
        DVec2::new(angle.cos(), angle.sin()) * speed
    };

    second.vel = orbit_velocity(bottom_right);
    third.vel = orbit_velocity(bottom_left);

    vec![primary, second, third]
}
