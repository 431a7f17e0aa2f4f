//! Simulation core: particle data, population, seeding and the per-tick
//! physics step.

pub mod collision;
pub mod init;
pub mod particle;
pub mod population;
pub mod sim;
pub mod stepper;
pub mod viewport;

pub use collision::{is_touching, CollisionResponseMode};
pub use init::Initializer;
pub use particle::Particle;
pub use population::Population;
pub use sim::Simulation;
pub use stepper::{CollisionPassMode, PhysicsStepper, StepConfig};
pub use viewport::Viewport;
