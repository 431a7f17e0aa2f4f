use crate::error::{Error, Result};

/// Fixed spatial dimension (2D).
pub const DIM: usize = 2;

/// Reference mass given to every seeded particle.
pub const DEFAULT_MASS: f64 = 1.0;

/// Reference radius given to every seeded particle.
pub const DEFAULT_RADIUS: f64 = 2.0;

/// A circular particle in the plane.
///
/// Fields:
/// - `r`: position [x, y]
/// - `v`: velocity [vx, vy], in units per tick
/// - `a`: acceleration [ax, ay]; inert unless the stepper is told to apply it
/// - `mass`: particle mass (> 0)
/// - `radius`: disc radius (> 0)
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position (x, y).
    pub r: [f64; DIM],
    /// Velocity (vx, vy).
    pub v: [f64; DIM],
    /// Acceleration (ax, ay).
    pub a: [f64; DIM],
    /// Mass (> 0).
    pub mass: f64,
    /// Disc radius (> 0).
    pub radius: f64,
}

impl Particle {
    /// Create a new particle at rest acceleration after validating invariants.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `radius` or `mass` is non-positive or any component is NaN/inf.
    pub fn new(r: [f64; DIM], v: [f64; DIM], radius: f64, mass: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidParam("mass must be finite and > 0".into()));
        }
        if !r.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !v.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(Self {
            r,
            v,
            a: [0.0; DIM],
            mass,
            radius,
        })
    }

    /// Replace the acceleration (validated as finite).
    pub fn with_acceleration(mut self, a: [f64; DIM]) -> Result<Self> {
        if !a.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidParam("acceleration must be finite".into()));
        }
        self.a = a;
        Ok(self)
    }

    /// Returns the particle's kinetic energy: 1/2 m |v|^2.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        let vsq: f64 = self.v.iter().map(|&c| c * c).sum();
        0.5 * self.mass * vsq
    }

    /// Returns the linear momentum m·v.
    #[inline]
    pub fn momentum(&self) -> [f64; DIM] {
        [self.mass * self.v[0], self.mass * self.v[1]]
    }

    /// Set position (validated as finite).
    pub fn set_position(&mut self, r: [f64; DIM]) -> Result<()> {
        if !r.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        self.r = r;
        Ok(())
    }

    /// Set velocity (validated as finite).
    pub fn set_velocity(&mut self, v: [f64; DIM]) -> Result<()> {
        if !v.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        self.v = v;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_particle_ok() -> Result<()> {
        let p = Particle::new([0.0, 1.0], [2.0, -3.0], 0.5, 2.0)?;
        assert_eq!(p.r, [0.0, 1.0]);
        assert_eq!(p.v, [2.0, -3.0]);
        assert_eq!(p.a, [0.0, 0.0]);
        assert_eq!(p.radius, 0.5);
        assert_eq!(p.mass, 2.0);
        Ok(())
    }

    #[test]
    fn invalid_radius_rejected() {
        let err = Particle::new([0.0, 0.0], [0.0, 0.0], 0.0, 1.0).unwrap_err();
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn invalid_mass_rejected() {
        let err = Particle::new([0.0, 0.0], [0.0, 0.0], 1.0, -1.0).unwrap_err();
        assert!(err.to_string().contains("mass"));
    }

    #[test]
    fn non_finite_velocity_rejected() {
        let err = Particle::new([0.0, 0.0], [f64::NAN, 0.0], 1.0, 1.0).unwrap_err();
        assert!(err.to_string().contains("velocity"));
    }

    #[test]
    fn kinetic_energy_and_momentum() -> Result<()> {
        // v = (3,4), |v|^2 = 25; KE = 0.5 * 2 * 25
        let p = Particle::new([0.0, 0.0], [3.0, 4.0], 1.0, 2.0)?;
        assert!((p.kinetic_energy() - 25.0).abs() < 1e-12);
        assert_eq!(p.momentum(), [6.0, 8.0]);
        Ok(())
    }

    #[test]
    fn acceleration_must_be_finite() -> Result<()> {
        let p = Particle::new([0.0, 0.0], [0.0, 0.0], 1.0, 1.0)?;
        assert!(p.clone().with_acceleration([0.0, f64::INFINITY]).is_err());
        let p = p.with_acceleration([0.0, 0.1])?;
        assert_eq!(p.a, [0.0, 0.1]);
        Ok(())
    }
}
