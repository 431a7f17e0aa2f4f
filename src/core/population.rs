use crate::core::particle::{Particle, DIM};
use crate::error::{Error, Result};

/// Reference upper bound on the number of live particles.
pub const DEFAULT_CAPACITY: usize = 2000;

/// Ordered, capacity-bounded collection of particles.
///
/// Indices `[0, len)` are the live particles. The count can only change through
/// [`Population::push`] and [`Population::clear`]; stepping mutates positions
/// and velocities in place through [`Population::as_mut_slice`].
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    particles: Vec<Particle>,
    capacity: usize,
}

impl Population {
    /// An empty population that will hold at most `capacity` particles.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Build a population from existing particles, checking the bound.
    pub fn from_particles(particles: Vec<Particle>, capacity: usize) -> Result<Self> {
        if particles.len() > capacity {
            return Err(Error::CapacityExceeded {
                requested: particles.len(),
                capacity,
            });
        }
        Ok(Self {
            particles,
            capacity,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Append a particle; fails with `CapacityExceeded` when full.
    pub fn push(&mut self, particle: Particle) -> Result<()> {
        if self.particles.len() >= self.capacity {
            return Err(Error::CapacityExceeded {
                requested: self.particles.len() + 1,
                capacity: self.capacity,
            });
        }
        self.particles.push(particle);
        Ok(())
    }

    /// Drop every particle, keeping the capacity.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    #[inline]
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Fail with `InvalidMass` on the first particle whose mass is not finite and positive.
    pub fn validate_masses(&self) -> Result<()> {
        match self
            .particles
            .iter()
            .find(|p| !p.mass.is_finite() || p.mass <= 0.0)
        {
            Some(p) => Err(Error::InvalidMass(p.mass)),
            None => Ok(()),
        }
    }

    /// Total kinetic energy (diagnostic).
    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    /// Total linear momentum (diagnostic).
    pub fn momentum(&self) -> [f64; DIM] {
        self.particles.iter().fold([0.0; DIM], |mut acc, p| {
            let m = p.momentum();
            acc[0] += m[0];
            acc[1] += m[1];
            acc
        })
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Particle;

    fn index(&self, i: usize) -> &Particle {
        &self.particles[i]
    }
}

impl std::ops::IndexMut<usize> for Population {
    fn index_mut(&mut self, i: usize) -> &mut Particle {
        &mut self.particles[i]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disc(x: f64) -> Result<Particle> {
        Particle::new([x, 0.0], [1.0, -2.0], 2.0, 1.0)
    }

    #[test]
    fn push_respects_capacity() -> Result<()> {
        let mut pop = Population::with_capacity(2);
        pop.push(disc(0.0)?)?;
        pop.push(disc(1.0)?)?;
        let err = pop.push(disc(2.0)?).unwrap_err();
        assert!(matches!(
            err,
            Error::CapacityExceeded {
                requested: 3,
                capacity: 2
            }
        ));
        assert_eq!(pop.len(), 2);
        Ok(())
    }

    #[test]
    fn from_particles_over_capacity_rejected() -> Result<()> {
        let ps = vec![disc(0.0)?, disc(1.0)?, disc(2.0)?];
        assert!(Population::from_particles(ps, 2).is_err());
        Ok(())
    }

    #[test]
    fn zero_mass_detected() -> Result<()> {
        let mut pop = Population::with_capacity(4);
        pop.push(disc(0.0)?)?;
        pop.push(disc(5.0)?)?;
        pop[1].mass = 0.0;
        assert!(matches!(pop.validate_masses(), Err(Error::InvalidMass(m)) if m == 0.0));
        Ok(())
    }

    #[test]
    fn totals_sum_over_particles() -> Result<()> {
        let mut pop = Population::with_capacity(4);
        pop.push(disc(0.0)?)?;
        pop.push(disc(5.0)?)?;
        assert_eq!(pop.momentum(), [2.0, -4.0]);
        assert!((pop.kinetic_energy() - 5.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_panics() {
        let pop = Population::with_capacity(4);
        let _ = &pop[0];
    }
}
