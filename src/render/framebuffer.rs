use crate::error::Result;
use crate::render::Canvas;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One RGBA pixel.
pub type Rgba = [u8; 4];

/// In-memory RGBA surface, row-major with the origin at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    color: Rgba,
    pixels: Vec<Rgba>,
}

impl FrameBuffer {
    /// A black buffer of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            color: [255, 255, 255, 255],
            pixels: vec![[0, 0, 0, 255]; width as usize * height as usize],
        }
    }

    /// Change the surface size. Contents are reset to black.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![[0, 0, 0, 255]; width as usize * height as usize];
    }

    /// Pixel at (x, y), or `None` off the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Write the surface as a binary PPM (P6); alpha is dropped.
    pub fn write_ppm<W: Write>(&self, mut out: W) -> Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        for px in &self.pixels {
            out.write_all(&px[..3])?;
        }
        out.flush()?;
        Ok(())
    }

    /// Write the surface to `path` as PPM.
    pub fn save_ppm<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_ppm(BufWriter::new(file))
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl Canvas for FrameBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn clear(&mut self) {
        let color = self.color;
        self.pixels.iter_mut().for_each(|p| *p = color);
    }

    #[inline]
    fn plot(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = self.color;
        }
    }
}
