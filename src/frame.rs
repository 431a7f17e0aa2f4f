//! The per-frame driver: read the surface size, step, draw, present, repeat.

use crate::core::{Simulation, Viewport};
use crate::error::Result;
use crate::render::{Canvas, CircleRasterizer, FrameBuffer, MidpointCircle, Renderer};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A canvas that can show a finished frame.
pub trait Surface: Canvas {
    /// Make the frame drawn since the last call visible.
    fn present(&mut self) -> Result<()>;
}

impl Surface for FrameBuffer {
    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Counts frames and yields a frames-per-second figure once per elapsed second.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
    last: Option<u32>,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
            last: None,
        }
    }

    /// Record a frame finished at `now`; returns the rate when a window closes.
    pub fn tick(&mut self, now: Instant) -> Option<u32> {
        self.frames += 1;
        if now.duration_since(self.window_start) >= Duration::from_secs(1) {
            let fps = self.frames;
            self.frames = 0;
            self.window_start = now;
            self.last = Some(fps);
            return Some(fps);
        }
        None
    }

    /// Rate from the most recently closed window.
    pub fn last(&self) -> Option<u32> {
        self.last
    }
}

/// Summary of a finished [`FrameLoop::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub frames: u64,
    pub last_fps: Option<u32>,
}

/// Runs frames until the quit flag is raised or the frame limit is hit.
///
/// The quit flag is only read between frames, so a step is never cut short.
#[derive(Debug)]
pub struct FrameLoop<R = MidpointCircle> {
    renderer: Renderer<R>,
    quit: Arc<AtomicBool>,
    max_frames: Option<u64>,
}

impl<R: CircleRasterizer> FrameLoop<R> {
    pub fn new(renderer: Renderer<R>) -> Self {
        Self {
            renderer,
            quit: Arc::new(AtomicBool::new(false)),
            max_frames: None,
        }
    }

    /// Stop after `frames` iterations.
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Handle another thread (or a signal handler) can set to stop the loop.
    pub fn quit_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.quit)
    }

    pub fn run<S: Surface>(&self, sim: &mut Simulation, surface: &mut S) -> Result<FrameStats> {
        let mut fps = FpsCounter::new(Instant::now());
        let mut frames = 0u64;

        loop {
            if self.quit.load(Ordering::Relaxed) {
                log::debug!("quit requested after {frames} frames");
                break;
            }
            if self.max_frames.is_some_and(|max| frames >= max) {
                break;
            }

            let (width, height) = surface.size();
            match Viewport::new(width, height) {
                Ok(viewport) => sim.step_in(viewport)?,
                Err(_) => log::warn!("surface is {width}x{height}; skipping physics this frame"),
            }

            self.renderer.draw(surface, sim.population());
            surface.present()?;
            frames += 1;

            if let Some(rate) = fps.tick(Instant::now()) {
                log::info!("FPS: {rate}");
            }
        }

        Ok(FrameStats {
            frames,
            last_fps: fps.last(),
        })
    }
}

impl Default for FrameLoop<MidpointCircle> {
    fn default() -> Self {
        Self::new(Renderer::default())
    }
}
