use discsim::core::{CollisionPassMode, CollisionResponseMode, Viewport};
use discsim::frame::FrameLoop;
use discsim::render::FrameBuffer;
use discsim::{SimConfig, Simulation};

/// Same seed, same trajectory: two runs of the reference setup agree bit for bit.
#[test]
fn seeded_runs_are_identical() -> discsim::error::Result<()> {
    let mut a = Simulation::new(750, Viewport::default(), Some(2024))?;
    let mut b = Simulation::new(750, Viewport::default(), Some(2024))?;
    assert_eq!(a.positions(), b.positions());

    for _ in 0..120 {
        a.step()?;
        b.step()?;
    }
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.velocities(), b.velocities());

    let fresh = Simulation::new(750, Viewport::default(), Some(2024))?;
    let other = Simulation::new(750, Viewport::default(), Some(2025))?;
    assert_ne!(fresh.velocities(), other.velocities());
    Ok(())
}

/// Wall flips and elastic responses both preserve kinetic energy, in every mode.
#[test]
fn kinetic_energy_conserved() -> discsim::error::Result<()> {
    for pass_mode in [CollisionPassMode::DoubleVisit, CollisionPassMode::SingleVisitSymmetric] {
        for response_mode in [
            CollisionResponseMode::AxisAligned,
            CollisionResponseMode::NormalProjected,
        ] {
            let cfg = SimConfig {
                particles: 400,
                seed: Some(77),
                pass_mode,
                response_mode,
                ..SimConfig::default()
            };
            let mut sim = cfg.build()?;
            let e0 = sim.kinetic_energy();
            sim.advance(200)?;
            let e1 = sim.kinetic_energy();
            let rel = ((e1 - e0) / e0).abs();
            assert!(
                rel < 1e-8,
                "{pass_mode}/{response_mode}: relative energy drift {rel} (E0={e0}, E1={e1})"
            );
        }
    }
    Ok(())
}

/// Particles may stray past the walls for a few ticks, but the bulk stays inside.
#[test]
fn population_stays_in_viewport() -> discsim::error::Result<()> {
    let mut sim = Simulation::new(300, Viewport::default(), Some(5))?;
    sim.advance(500)?;
    let inside = sim
        .particles()
        .iter()
        .filter(|p| (0.0..=640.0).contains(&p.r[0]) && (0.0..=480.0).contains(&p.r[1]))
        .count();
    assert!(sim.particles().iter().all(|p| p.r.iter().all(|x| x.is_finite())));
    assert!(inside >= 270, "only {inside} of 300 particles inside the viewport");
    Ok(())
}

/// The full headless loop: step, draw and present on a frame buffer.
#[test]
fn headless_loop_draws_particles() -> discsim::error::Result<()> {
    let cfg = SimConfig {
        particles: 50,
        seed: Some(9),
        ..SimConfig::default()
    };
    let mut sim = cfg.build()?;
    let mut fb = FrameBuffer::new(cfg.width, cfg.height);
    let stats = FrameLoop::default().with_max_frames(30).run(&mut sim, &mut fb)?;

    assert_eq!(stats.frames, 30);
    let lit = fb
        .pixels()
        .iter()
        .filter(|px| **px == discsim::render::PARTICLE_COLOR)
        .count();
    assert!(lit > 0, "no particle pixels drawn");
    Ok(())
}
