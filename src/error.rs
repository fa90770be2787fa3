use std::fmt;

/// Errors raised when building or reconfiguring a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Mass must be finite and strictly positive.
    InvalidMass(f64),
    /// Area extents must be finite and strictly positive.
    InvalidBounds { width: f64, height: f64 },
    /// A physics constant is out of its allowed range.
    InvalidPhysics { field: &'static str, value: f64 },
    /// A speed cap must be finite and not negative.
    InvalidMaxSpeed(f64),
    /// A body index does not name a body of the simulation.
    UnknownBody { index: usize, count: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMass(mass) => write!(f, "invalid mass {mass}: must be finite and > 0"),
            Error::InvalidBounds { width, height } => {
                write!(f, "invalid bounds {width}x{height}: extents must be finite and > 0")
            }
            Error::InvalidPhysics { field, value } => {
                write!(f, "invalid physics.{field} = {value}")
            }
            Error::InvalidMaxSpeed(speed) => {
                write!(f, "invalid max speed {speed}: must be finite and >= 0")
            }
            Error::UnknownBody { index, count } => {
                write!(f, "body index {index} out of range ({count} bodies)")
            }
        }
    }
}

impl std::error::Error for Error {}
