//! # discsim
//!
//! Bounded 2-D simulation of circular particles that move in straight lines,
//! bounce off the viewport edges and exchange momentum through elastic
//! collisions.
//!
//! - `core`: particle data, population, seeding and the per-tick physics step
//! - `render`: software canvas and circle rasterization
//! - `frame`: the frame loop and FPS meter
//! - `config`: YAML run configuration
//!
//! ```no_run
//! use discsim::core::{Simulation, Viewport};
//!
//! # fn main() -> discsim::error::Result<()> {
//! let mut sim = Simulation::new(750, Viewport::default(), Some(7))?;
//! sim.advance(60)?;
//! println!("KE after 60 ticks: {}", sim.kinetic_energy());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod frame;
pub mod render;

#[cfg(feature = "python")]
mod python;

pub use crate::config::SimConfig;
pub use crate::core::Simulation;
pub use crate::error::{Error, Result};
