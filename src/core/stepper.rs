use crate::core::collision::{is_touching, resolve, CollisionResponseMode};
use crate::core::particle::{Particle, DIM};
use crate::core::population::Population;
use crate::core::viewport::Viewport;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Order in which contacting pairs are visited during one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPassMode {
    /// For each i in order: move i, reflect i, then test i against every j != i.
    ///
    /// Particles after i have not moved yet when i scans them, and a touching
    /// pair is resolved once from each side within the same step, the second
    /// time from the already-updated velocities.
    #[default]
    DoubleVisit,
    /// Move and reflect every particle first, then resolve each unordered pair once.
    SingleVisitSymmetric,
}

impl FromStr for CollisionPassMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "double_visit" | "double-visit" => Ok(Self::DoubleVisit),
            "single_visit_symmetric" | "single-visit-symmetric" | "single" => {
                Ok(Self::SingleVisitSymmetric)
            }
            other => Err(Error::InvalidParam(format!(
                "unknown pass mode '{other}' (expected double_visit or single_visit_symmetric)"
            ))),
        }
    }
}

impl fmt::Display for CollisionPassMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DoubleVisit => f.write_str("double_visit"),
            Self::SingleVisitSymmetric => f.write_str("single_visit_symmetric"),
        }
    }
}

/// Knobs for [`PhysicsStepper`]. The default reproduces the reference behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepConfig {
    pub pass_mode: CollisionPassMode,
    pub response_mode: CollisionResponseMode,
    /// Add each particle's acceleration to its velocity after moving it.
    /// Off by default: the acceleration field is carried but inert.
    pub apply_acceleration: bool,
}

/// Advances a population by one fixed tick.
///
/// Each step moves every particle by its velocity, flips any velocity
/// component whose coordinate left `[0, W]` or `[0, H]`, and resolves every
/// overlapping pair with an elastic response. The stepper holds no state
/// between calls and does not allocate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhysicsStepper {
    config: StepConfig,
}

impl PhysicsStepper {
    pub fn new(config: StepConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StepConfig {
        &self.config
    }

    /// Advance `population` one tick inside `viewport`.
    ///
    /// Errors with `Error::InvalidMass`, before anything moves, if any
    /// particle's mass is not finite and > 0. A `Viewport` is non-empty by
    /// construction.
    pub fn step(&self, population: &mut Population, viewport: Viewport) -> Result<()> {
        population.validate_masses()?;

        let bounds = viewport.extent();
        let particles = population.as_mut_slice();
        let n = particles.len();

        match self.config.pass_mode {
            CollisionPassMode::DoubleVisit => {
                for i in 0..n {
                    self.advance(&mut particles[i], bounds);
                    for j in 0..n {
                        if j == i {
                            continue;
                        }
                        let (this, other) = pair_mut(particles, i, j);
                        if is_touching(other, this) {
                            resolve(this, other, self.config.response_mode)?;
                        }
                    }
                }
            }
            CollisionPassMode::SingleVisitSymmetric => {
                for p in particles.iter_mut() {
                    self.advance(p, bounds);
                }
                for i in 0..n {
                    for j in (i + 1)..n {
                        let (this, other) = pair_mut(particles, i, j);
                        if is_touching(this, other) {
                            resolve(this, other, self.config.response_mode)?;
                        }
                    }
                }
            }
        }

        log::trace!("stepped {n} particles in {}x{}", viewport.width(), viewport.height());
        Ok(())
    }

    /// Euler move plus wall reflection for one particle.
    #[inline]
    fn advance(&self, p: &mut Particle, bounds: [f64; DIM]) {
        for k in 0..DIM {
            p.r[k] += p.v[k];
            if self.config.apply_acceleration {
                p.v[k] += p.a[k];
            }
            // Sign flip only; the particle may sit outside for a few ticks.
            if p.r[k] > bounds[k] || p.r[k] < 0.0 {
                p.v[k] = -p.v[k];
            }
        }
    }
}

/// Two distinct mutable particles, returned in the order asked for.
#[inline]
fn pair_mut(particles: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    debug_assert_ne!(i, j);
    if i < j {
        let (lo, hi) = particles.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = particles.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}
