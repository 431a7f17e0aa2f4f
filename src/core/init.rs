use crate::core::particle::{Particle, DEFAULT_MASS, DEFAULT_RADIUS};
use crate::core::population::Population;
use crate::core::viewport::Viewport;
use crate::error::{Error, Result};
use rand::Rng;

/// Full width of the per-axis velocity range; components land in [-scale/2, scale/2).
pub const DEFAULT_VELOCITY_SCALE: f64 = 8.0;

/// Seeds a population with uniformly scattered, randomly moving discs.
///
/// Positions are whole pixels drawn from `[0, W) x [0, H)`; each velocity
/// component is `velocity_scale * (U[0,1) - 0.5)`. All particles share `mass`
/// and `radius`. Randomness comes only from the generator handed in, so a
/// seeded generator reproduces the same population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Initializer {
    pub mass: f64,
    pub radius: f64,
    pub velocity_scale: f64,
}

impl Default for Initializer {
    fn default() -> Self {
        Self {
            mass: DEFAULT_MASS,
            radius: DEFAULT_RADIUS,
            velocity_scale: DEFAULT_VELOCITY_SCALE,
        }
    }
}

impl Initializer {
    /// Replace the contents of `population` with `count` fresh particles.
    ///
    /// Every check runs before the population is cleared, so on any error the
    /// population is left exactly as it was, whatever `count` is.
    ///
    /// Errors:
    /// - `Error::CapacityExceeded` if `count` exceeds the population's capacity.
    /// - `Error::InvalidParam` if mass, radius or velocity scale are unusable.
    pub fn populate<R: Rng + ?Sized>(
        &self,
        population: &mut Population,
        count: usize,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<()> {
        if count > population.capacity() {
            return Err(Error::CapacityExceeded {
                requested: count,
                capacity: population.capacity(),
            });
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(Error::InvalidParam("mass must be finite and > 0".into()));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !self.velocity_scale.is_finite() || self.velocity_scale < 0.0 {
            return Err(Error::InvalidParam(
                "velocity_scale must be finite and >= 0".into(),
            ));
        }

        population.clear();
        for _ in 0..count {
            let x = rng.random_range(0..viewport.width()) as f64;
            let y = rng.random_range(0..viewport.height()) as f64;
            let vx = self.velocity_scale * (rng.random::<f64>() - 0.5);
            let vy = self.velocity_scale * (rng.random::<f64>() - 0.5);
            population.push(Particle::new([x, y], [vx, vy], self.radius, self.mass)?)?;
        }
        Ok(())
    }
}
