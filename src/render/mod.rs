//! Software rendering of a population onto a pixel surface.
//!
//! The renderer owns no simulation state. For every live particle it hands an
//! integer center and radius to a [`CircleRasterizer`], which plots pixels on
//! a [`Canvas`].

pub mod framebuffer;
pub mod raster;

pub use framebuffer::{FrameBuffer, Rgba};
pub use raster::{CircleRasterizer, MidpointCircle};

use crate::core::Population;

/// Background color (black).
pub const CLEAR_COLOR: Rgba = [0, 0, 0, 255];
/// Particle color.
pub const PARTICLE_COLOR: Rgba = [100, 200, 200, 255];

/// Anything pixels can be plotted on.
pub trait Canvas {
    /// Drawable size in pixels (width, height).
    fn size(&self) -> (u32, u32);

    /// Set the color used by subsequent [`Canvas::plot`] calls.
    fn set_color(&mut self, color: Rgba);

    /// Fill the whole surface with the current color.
    fn clear(&mut self);

    /// Plot one pixel in the current color. Points off the surface are ignored.
    fn plot(&mut self, x: i32, y: i32);
}

/// Draws every live particle of a population as a circle.
#[derive(Debug, Clone, Default)]
pub struct Renderer<R = MidpointCircle> {
    rasterizer: R,
}

impl<R: CircleRasterizer> Renderer<R> {
    pub fn new(rasterizer: R) -> Self {
        Self { rasterizer }
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Clear the canvas and draw `population` on it.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, population: &Population) {
        canvas.set_color(CLEAR_COLOR);
        canvas.clear();
        canvas.set_color(PARTICLE_COLOR);
        for p in population {
            // Float to int conversion truncates toward zero.
            let cx = p.r[0] as i32;
            let cy = p.r[1] as i32;
            let radius = p.radius as i32;
            self.rasterizer.draw(canvas, cx, cy, radius);
        }
    }
}
