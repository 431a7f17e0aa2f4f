//! Contact test and elastic collision response between two discs.

use crate::core::particle::{Particle, DIM};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Below this center distance the line of centers is treated as undefined.
const EPS_DIST: f64 = 1e-12;

/// How a detected contact changes the two velocities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionResponseMode {
    /// Treat x and y as two independent 1-D elastic collisions.
    #[default]
    AxisAligned,
    /// Exchange only the velocity component along the line of centers.
    NormalProjected,
}

impl FromStr for CollisionResponseMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "axis_aligned" | "axis-aligned" => Ok(Self::AxisAligned),
            "normal_projected" | "normal-projected" => Ok(Self::NormalProjected),
            other => Err(Error::InvalidParam(format!(
                "unknown response mode '{other}' (expected axis_aligned or normal_projected)"
            ))),
        }
    }
}

impl fmt::Display for CollisionResponseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AxisAligned => f.write_str("axis_aligned"),
            Self::NormalProjected => f.write_str("normal_projected"),
        }
    }
}

/// True when the two discs overlap: center distance strictly below the radius sum.
///
/// Depends only on the distance and the radius sum, so argument order never matters.
#[inline]
pub fn is_touching(a: &Particle, b: &Particle) -> bool {
    let dx = b.r[0] - a.r[0];
    let dy = b.r[1] - a.r[1];
    (dx * dx + dy * dy).sqrt() < a.radius + b.radius
}

/// One-dimensional elastic collision of (m1, v1) with (m2, v2).
///
/// Returns the post-collision velocities `(v1', v2')`.
///
/// Errors: `Error::InvalidMass` when `m1 + m2` is not a finite positive number.
#[inline]
pub fn elastic_1d(m1: f64, v1: f64, m2: f64, v2: f64) -> Result<(f64, f64)> {
    let total = m1 + m2;
    if !total.is_finite() || total <= 0.0 {
        return Err(Error::InvalidMass(total));
    }
    let v1_final = ((m1 - m2) * v1 + 2.0 * m2 * v2) / total;
    let v2_final = ((m2 - m1) * v2 + 2.0 * m1 * v1) / total;
    Ok((v1_final, v2_final))
}

/// Apply the elastic response to `this` (self) and `other` in place.
///
/// Does not test for contact; callers decide that with [`is_touching`].
pub fn resolve(this: &mut Particle, other: &mut Particle, mode: CollisionResponseMode) -> Result<()> {
    match mode {
        CollisionResponseMode::AxisAligned => {
            for k in 0..DIM {
                let (v1, v2) = elastic_1d(this.mass, this.v[k], other.mass, other.v[k])?;
                this.v[k] = v1;
                other.v[k] = v2;
            }
            Ok(())
        }
        CollisionResponseMode::NormalProjected => resolve_along_normal(this, other),
    }
}

fn resolve_along_normal(this: &mut Particle, other: &mut Particle) -> Result<()> {
    let (mi, mj) = (this.mass, other.mass);
    let total = mi + mj;
    if !total.is_finite() || total <= 0.0 {
        return Err(Error::InvalidMass(total));
    }

    // Unit normal from this -> other
    let mut n = [0.0_f64; DIM];
    for (k, nk) in n.iter_mut().enumerate() {
        *nk = other.r[k] - this.r[k];
    }
    let dist = dot(&n, &n).sqrt();
    if dist <= EPS_DIST {
        log::trace!("coincident centers, no collision normal; velocities unchanged");
        return Ok(());
    }
    for nk in &mut n {
        *nk /= dist;
    }

    let mut u = [0.0_f64; DIM];
    for (k, uk) in u.iter_mut().enumerate() {
        *uk = other.v[k] - this.v[k];
    }
    let u_n = dot(&u, &n);
    if u_n >= 0.0 {
        // Already separating along the normal.
        return Ok(());
    }

    // Only the normal component changes
    let fi = (2.0 * mj / total) * u_n;
    let fj = (2.0 * mi / total) * u_n;
    for (k, &nk) in n.iter().enumerate() {
        this.v[k] += fi * nk;
        other.v[k] -= fj * nk;
    }
    Ok(())
}

#[inline]
fn dot(a: &[f64; DIM], b: &[f64; DIM]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disc(r: [f64; 2], v: [f64; 2], mass: f64) -> Result<Particle> {
        Particle::new(r, v, 2.0, mass)
    }

    #[test]
    fn touching_is_strict() -> Result<()> {
        let a = disc([0.0, 0.0], [0.0, 0.0], 1.0)?;
        let b = disc([4.0, 0.0], [0.0, 0.0], 1.0)?;
        // distance == radius sum is not contact
        assert!(!is_touching(&a, &b));
        let c = disc([3.999, 0.0], [0.0, 0.0], 1.0)?;
        assert!(is_touching(&a, &c));
        Ok(())
    }

    #[test]
    fn touching_is_symmetric() -> Result<()> {
        let cases = [
            ([0.0, 0.0], [1.0, 1.0]),
            ([10.0, -3.0], [12.5, -1.0]),
            ([5.0, 5.0], [100.0, 5.0]),
            ([-2.0, 7.0], [1.0, 3.0]),
        ];
        for (ra, rb) in cases {
            let a = Particle::new(ra, [0.0, 0.0], 1.5, 1.0)?;
            let b = Particle::new(rb, [0.0, 0.0], 2.5, 1.0)?;
            assert_eq!(is_touching(&a, &b), is_touching(&b, &a));
        }
        Ok(())
    }

    #[test]
    fn equal_masses_exchange_velocities() -> Result<()> {
        let mut a = disc([0.0, 0.0], [2.0, 0.0], 1.0)?;
        let mut b = disc([3.0, 0.0], [-2.0, 0.0], 1.0)?;
        resolve(&mut a, &mut b, CollisionResponseMode::AxisAligned)?;
        assert_eq!(a.v, [-2.0, 0.0]);
        assert_eq!(b.v, [2.0, 0.0]);
        Ok(())
    }

    #[test]
    fn momentum_conserved_for_unequal_masses() -> Result<()> {
        let cases = [(1.0, 3.0, 2.5, -0.5), (0.2, -1.0, 7.0, 4.0), (5.0, 0.0, 1.0, 3.0)];
        for (m1, v1, m2, v2) in cases {
            let (w1, w2) = elastic_1d(m1, v1, m2, v2)?;
            let before = m1 * v1 + m2 * v2;
            let after = m1 * w1 + m2 * w2;
            assert!((before - after).abs() < 1e-12, "{before} vs {after}");
            // elastic: kinetic energy also conserved
            let ke0 = 0.5 * (m1 * v1 * v1 + m2 * v2 * v2);
            let ke1 = 0.5 * (m1 * w1 * w1 + m2 * w2 * w2);
            assert!((ke0 - ke1).abs() < 1e-9);
        }
        Ok(())
    }

    #[test]
    fn non_positive_mass_sum_rejected() {
        assert!(matches!(
            elastic_1d(1.0, 1.0, -1.0, 0.0),
            Err(Error::InvalidMass(_))
        ));
        assert!(matches!(
            elastic_1d(0.0, 1.0, 0.0, 0.0),
            Err(Error::InvalidMass(_))
        ));
    }

    #[test]
    fn normal_projected_head_on_matches_axis_aligned() -> Result<()> {
        let mut a = disc([0.0, 0.0], [2.0, 0.0], 1.0)?;
        let mut b = disc([3.0, 0.0], [-2.0, 0.0], 1.0)?;
        resolve(&mut a, &mut b, CollisionResponseMode::NormalProjected)?;
        assert!((a.v[0] + 2.0).abs() < 1e-12 && a.v[1].abs() < 1e-12);
        assert!((b.v[0] - 2.0).abs() < 1e-12 && b.v[1].abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn normal_projected_keeps_tangential_component() -> Result<()> {
        // Contact normal along x; y velocities are tangential and must survive.
        let mut a = disc([0.0, 0.0], [1.0, 0.5], 1.0)?;
        let mut b = disc([3.0, 0.0], [0.0, -0.25], 1.0)?;
        resolve(&mut a, &mut b, CollisionResponseMode::NormalProjected)?;
        assert!((a.v[0] - 0.0).abs() < 1e-12);
        assert!((b.v[0] - 1.0).abs() < 1e-12);
        assert!((a.v[1] - 0.5).abs() < 1e-12);
        assert!((b.v[1] + 0.25).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn normal_projected_ignores_separating_pair() -> Result<()> {
        let mut a = disc([100.0, 100.0], [-1.0, 0.0], 1.0)?;
        let mut b = disc([101.0, 100.0], [1.0, 0.0], 1.0)?;
        assert!(is_touching(&a, &b));
        resolve(&mut a, &mut b, CollisionResponseMode::NormalProjected)?;
        assert_eq!(a.v, [-1.0, 0.0]);
        assert_eq!(b.v, [1.0, 0.0]);
        Ok(())
    }

    #[test]
    fn coincident_centers_leave_velocities() -> Result<()> {
        let mut a = disc([1.0, 1.0], [1.0, 0.0], 1.0)?;
        let mut b = disc([1.0, 1.0], [-1.0, 0.0], 1.0)?;
        resolve(&mut a, &mut b, CollisionResponseMode::NormalProjected)?;
        assert_eq!(a.v, [1.0, 0.0]);
        assert_eq!(b.v, [-1.0, 0.0]);
        Ok(())
    }

    #[test]
    fn response_mode_parses() -> Result<()> {
        assert_eq!(
            "normal-projected".parse::<CollisionResponseMode>()?,
            CollisionResponseMode::NormalProjected
        );
        assert!("sideways".parse::<CollisionResponseMode>().is_err());
        Ok(())
    }
}
