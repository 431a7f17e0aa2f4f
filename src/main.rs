use discsim::core::{CollisionPassMode, CollisionResponseMode};
use discsim::frame::FrameLoop;
use discsim::render::{FrameBuffer, Renderer};
use discsim::SimConfig;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Run the disc simulation headless and report what happened.
#[derive(Parser, Debug)]
#[command(name = "discsim", version)]
struct Args {
    /// YAML run configuration; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short = 'n', long)]
    particles: Option<usize>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    #[arg(short, long)]
    seed: Option<u64>,

    /// Frames to run.
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// double_visit or single_visit_symmetric
    #[arg(long)]
    pass_mode: Option<CollisionPassMode>,

    /// axis_aligned or normal_projected
    #[arg(long)]
    response_mode: Option<CollisionResponseMode>,

    /// Write the last frame to this PPM file.
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut cfg = match &args.config {
        Some(path) => SimConfig::from_yaml_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(n) = args.particles {
        cfg.particles = n;
    }
    if let Some(w) = args.width {
        cfg.width = w;
    }
    if let Some(h) = args.height {
        cfg.height = h;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if let Some(mode) = args.pass_mode {
        cfg.pass_mode = mode;
    }
    if let Some(mode) = args.response_mode {
        cfg.response_mode = mode;
    }
    cfg.validate().context("invalid configuration")?;
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let cfg = load_config(&args)?;

    let mut sim = cfg.build().context("failed to seed simulation")?;
    let mut surface = FrameBuffer::new(cfg.width, cfg.height);
    let frame_loop = FrameLoop::new(Renderer::new(cfg.rasterizer())).with_max_frames(args.frames);

    let ke0 = sim.kinetic_energy();
    let p0 = sim.momentum();
    log::info!(
        "running {} particles in {}x{} for {} frames",
        sim.num_particles(),
        cfg.width,
        cfg.height,
        args.frames
    );

    let stats = frame_loop.run(&mut sim, &mut surface)?;

    let ke1 = sim.kinetic_energy();
    let p1 = sim.momentum();
    log::info!(
        "finished {} frames; KE {:.3} -> {:.3}; momentum ({:.3}, {:.3}) -> ({:.3}, {:.3})",
        stats.frames,
        ke0,
        ke1,
        p0[0],
        p0[1],
        p1[0],
        p1[1]
    );

    if let Some(path) = &args.snapshot {
        surface
            .save_ppm(path)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}
