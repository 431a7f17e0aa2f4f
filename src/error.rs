use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core and its surrounding layers.
///
/// Every variant is a precondition failure or an I/O failure outside the core.
/// The physics step itself validates up front, so an `Err` never leaves a
/// population half-stepped.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Viewport dimensions must both be strictly positive.
    #[error("invalid viewport {width}x{height}: both dimensions must be > 0")]
    InvalidViewport { width: u32, height: u32 },

    /// A mass (or the sum of two masses) was zero, negative or not finite.
    #[error("invalid mass: {0} (masses must be finite and > 0)")]
    InvalidMass(f64),

    /// More particles requested than the population can hold.
    #[error("capacity exceeded: requested {requested} particles, capacity is {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    /// Malformed YAML configuration.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Propagated I/O errors (config files, frame dumps).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
