pub mod body;
pub mod c_api;
pub mod config;
pub mod error;
pub mod params;
pub mod simulation;
pub mod utils;
pub mod vector;

pub use body::Body;
pub use config::{BodyConfig, ScenarioConfig};
pub use error::Error;
pub use params::{Bounds, Physics};
pub use simulation::{OrbitingPair, Simulation};
pub use ultraviolet;
