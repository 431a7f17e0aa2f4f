use crate::error::{Error, Result};

/// Reference drawable width in pixels.
pub const DEFAULT_WIDTH: u32 = 640;
/// Reference drawable height in pixels.
pub const DEFAULT_HEIGHT: u32 = 480;

/// Drawable area the particles bounce inside, in pixels.
///
/// Walls sit at x = 0, x = width, y = 0 and y = height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Errors with `Error::InvalidViewport` unless both dimensions are > 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Wall coordinates as floats: (W, H).
    #[inline]
    pub fn extent(&self) -> [f64; 2] {
        [self.width as f64, self.height as f64]
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}
