use crate::{
    body::Body,
    params::{Bounds, Physics},
    simulation::{OrbitingPair, Simulation},
};
use ultraviolet::DVec2;

/// Creates the three-body demo on a `width` x `height` canvas.
/// Returns null if the size is not positive.
#[unsafe(no_mangle)]
pub extern "C" fn Simulation_Create(width: f64, height: f64, seed: u64) -> *mut Simulation {
    match Bounds::new(width, height) {
        Ok(bounds) => Box::into_raw(Box::new(Simulation::demo(bounds, seed))),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Creates an empty simulation; fill it with `Simulation_AddBody`.
#[unsafe(no_mangle)]
pub extern "C" fn Simulation_CreateEmpty(width: f64, height: f64) -> *mut Simulation {
    match Bounds::new(width, height) {
        Ok(bounds) => Box::into_raw(Box::new(Simulation::with_bodies(
            Vec::new(),
            bounds,
            Physics::default(),
        ))),
        Err(_) => std::ptr::null_mut(),
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_Destroy(handle: *mut Simulation) {
    if !handle.is_null() {
        unsafe { drop(Box::from_raw(handle)) };
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_Step(handle: *mut Simulation) {
    if let Some(sim) = unsafe { handle.as_mut() } {
        sim.step();
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_Resize(handle: *mut Simulation, width: f64, height: f64) -> bool {
    unsafe { handle.as_mut() }.is_some_and(|sim| sim.resize(width, height).is_ok())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_GetBodyCount(handle: *const Simulation) -> usize {
    unsafe { handle.as_ref() }.map_or(0, |sim| sim.bodies.len())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_GetBodies(handle: *const Simulation) -> *const Body {
    unsafe { handle.as_ref() }.map_or(std::ptr::null(), |sim| sim.bodies.as_ptr())
}

/// Radius for drawing body `index`, or 0 if there is no such body.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_GetBodyRadius(handle: *const Simulation, index: usize) -> f64 {
    unsafe { handle.as_ref() }
        .and_then(|sim| sim.body(index))
        .map_or(0.0, Body::radius)
}

/// Appends a body. Returns false if the mass is not positive.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_AddBody(
    handle: *mut Simulation,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    mass: f64,
) -> bool {
    let Some(sim) = (unsafe { handle.as_mut() }) else {
        return false;
    };
    match Body::new(DVec2::new(x, y), DVec2::new(vx, vy), mass) {
        Ok(mut body) => {
            body.max_speed = sim.physics.initial_max_speed;
            sim.bodies.push(body);
            true
        }
        Err(_) => false,
    }
}

/// Mass control for a host UI. Returns false for an unknown body or a bad mass.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_SetBodyMass(handle: *mut Simulation, index: usize, mass: f64) -> bool {
    unsafe { handle.as_mut() }.is_some_and(|sim| sim.set_mass(index, mass).is_ok())
}

/// Replaces the orbiting pairs with `count` pairs read from `indices`
/// as `[a0, b0, a1, b1, ...]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_SetOrbitingPairs(
    handle: *mut Simulation,
    indices: *const usize,
    count: usize,
) -> bool {
    let Some(sim) = (unsafe { handle.as_mut() }) else {
        return false;
    };
    let Some(len) = count.checked_mul(2) else {
        return false;
    };
    let pairs = if count == 0 {
        Vec::new()
    } else if indices.is_null() {
        return false;
    } else {
        // SAFETY: caller passes `2 * count` readable indices.
        let raw = unsafe { std::slice::from_raw_parts(indices, len) };
        raw.chunks_exact(2).map(|p| OrbitingPair(p[0], p[1])).collect()
    };
    sim.set_orbiting_pairs(pairs).is_ok()
}
