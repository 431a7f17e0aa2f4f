use crate::core::init::Initializer;
use crate::core::particle::{Particle, DIM};
use crate::core::population::{Population, DEFAULT_CAPACITY};
use crate::core::stepper::{PhysicsStepper, StepConfig};
use crate::core::viewport::Viewport;
use crate::error::Result;
use rand::{rng, rngs::StdRng, Rng, SeedableRng};

/// A seeded population of discs bouncing around a viewport.
///
/// Owns the population, the stepper configuration and the random source used
/// to seed it, so one seed fully determines the trajectory.
#[derive(Debug)]
pub struct Simulation {
    frame: u64,
    viewport: Viewport,
    population: Population,
    stepper: PhysicsStepper,
    rng: StdRng,
}

impl Simulation {
    /// Create a simulation with `num_particles` reference discs (mass 1, radius 2)
    /// scattered over `viewport`, using the default capacity and stepper.
    ///
    /// `seed` makes the run reproducible; `None` draws a seed from the thread RNG.
    pub fn new(num_particles: usize, viewport: Viewport, seed: Option<u64>) -> Result<Self> {
        Self::with_options(
            num_particles,
            DEFAULT_CAPACITY,
            viewport,
            seed,
            Initializer::default(),
            StepConfig::default(),
        )
    }

    /// Fully parameterized constructor.
    pub fn with_options(
        num_particles: usize,
        capacity: usize,
        viewport: Viewport,
        seed: Option<u64>,
        initializer: Initializer,
        step: StepConfig,
    ) -> Result<Self> {
        let seed = seed.unwrap_or_else(|| rng().random());
        let mut rng: StdRng = SeedableRng::seed_from_u64(seed);

        let mut population = Population::with_capacity(capacity);
        initializer.populate(&mut population, num_particles, viewport, &mut rng)?;

        log::debug!(
            "simulation seeded: {} particles (capacity {}), {}x{}, seed {}, pass {}, response {}",
            num_particles,
            capacity,
            viewport.width(),
            viewport.height(),
            seed,
            step.pass_mode,
            step.response_mode
        );

        Ok(Self {
            frame: 0,
            viewport,
            population,
            stepper: PhysicsStepper::new(step),
            rng,
        })
    }

    /// Wrap an existing population, e.g. a hand-built test scene.
    pub fn from_population(population: Population, viewport: Viewport, step: StepConfig) -> Self {
        Self {
            frame: 0,
            viewport,
            population,
            stepper: PhysicsStepper::new(step),
            rng: SeedableRng::seed_from_u64(0),
        }
    }

    /// Number of completed steps.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Change the walls used by subsequent steps (the window was resized).
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn stepper(&self) -> &PhysicsStepper {
        &self.stepper
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    pub fn particles(&self) -> &[Particle] {
        self.population.as_slice()
    }

    /// Number of particles.
    pub fn num_particles(&self) -> usize {
        self.population.len()
    }

    /// Advance one tick inside the current viewport.
    pub fn step(&mut self) -> Result<()> {
        self.stepper.step(&mut self.population, self.viewport)?;
        self.frame += 1;
        Ok(())
    }

    /// Adopt `viewport` and advance one tick inside it.
    pub fn step_in(&mut self, viewport: Viewport) -> Result<()> {
        self.viewport = viewport;
        self.step()
    }

    /// Advance `frames` ticks.
    pub fn advance(&mut self, frames: u64) -> Result<()> {
        for _ in 0..frames {
            self.step()?;
        }
        Ok(())
    }

    /// Re-seed the population in place with `num_particles` fresh discs drawn
    /// from this simulation's random stream.
    pub fn repopulate(&mut self, num_particles: usize, initializer: &Initializer) -> Result<()> {
        initializer.populate(
            &mut self.population,
            num_particles,
            self.viewport,
            &mut self.rng,
        )?;
        self.frame = 0;
        Ok(())
    }

    /// Positions as a Vec of fixed-size arrays.
    pub fn positions(&self) -> Vec<[f64; DIM]> {
        self.population.iter().map(|p| p.r).collect()
    }

    /// Velocities as a Vec of fixed-size arrays.
    pub fn velocities(&self) -> Vec<[f64; DIM]> {
        self.population.iter().map(|p| p.v).collect()
    }

    /// Total kinetic energy (diagnostic).
    pub fn kinetic_energy(&self) -> f64 {
        self.population.kinetic_energy()
    }

    /// Total momentum (diagnostic).
    pub fn momentum(&self) -> [f64; DIM] {
        self.population.momentum()
    }
}
