use crate::render::Canvas;

/// Strategy for turning a (center, radius) pair into pixels.
pub trait CircleRasterizer {
    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, cx: i32, cy: i32, radius: i32);
}

/// Midpoint circle algorithm, outlined or filled.
///
/// Walks one octant from (r, 0) towards the diagonal and mirrors each step
/// into the other seven.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MidpointCircle {
    pub filled: bool,
}

impl MidpointCircle {
    pub fn outline() -> Self {
        Self { filled: false }
    }

    pub fn filled() -> Self {
        Self { filled: true }
    }
}

impl CircleRasterizer for MidpointCircle {
    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, cx: i32, cy: i32, radius: i32) {
        if radius < 0 {
            return;
        }
        let (w, h) = canvas.size();
        if w == 0 || h == 0 {
            return;
        }
        // Widened so center +- radius cannot overflow.
        let clip = Clip {
            w: i64::from(w),
            h: i64::from(h),
        };
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));

        // Bounding box misses the canvas.
        if cx + r < 0 || cy + r < 0 || cx - r >= clip.w || cy - r >= clip.h {
            return;
        }
        // Circle encloses every pixel: an outline shows nothing, a disc covers all.
        let dx = cx.abs().max((cx - (clip.w - 1)).abs());
        let dy = cy.abs().max((cy - (clip.h - 1)).abs());
        let (r2, d2) = (i128::from(r), i128::from(dx) * i128::from(dx) + i128::from(dy) * i128::from(dy));
        if r2 * r2 > d2 {
            if self.filled {
                for y in 0..clip.h {
                    clip.span(canvas, 0, clip.w - 1, y);
                }
            }
            return;
        }
        if r == 0 {
            clip.plot(canvas, cx, cy);
            return;
        }

        let mut x = r;
        let mut y = 0;
        let mut err = 1 - x;

        while x >= y {
            if self.filled {
                clip.span(canvas, cx - x, cx + x, cy + y);
                clip.span(canvas, cx - x, cx + x, cy - y);
                clip.span(canvas, cx - y, cx + y, cy + x);
                clip.span(canvas, cx - y, cx + y, cy - x);
            } else {
                for (px, py) in [
                    (cx + x, cy + y),
                    (cx + y, cy + x),
                    (cx - y, cy + x),
                    (cx - x, cy + y),
                    (cx - x, cy - y),
                    (cx - y, cy - x),
                    (cx + y, cy - x),
                    (cx + x, cy - y),
                ] {
                    clip.plot(canvas, px, py);
                }
            }

            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x + 1);
            }
        }
    }
}

/// Canvas bounds in widened coordinates; only in-bounds points reach `Canvas::plot`.
struct Clip {
    w: i64,
    h: i64,
}

impl Clip {
    #[inline]
    fn plot<C: Canvas + ?Sized>(&self, canvas: &mut C, x: i64, y: i64) {
        if (0..self.w).contains(&x) && (0..self.h).contains(&y) {
            canvas.plot(x as i32, y as i32);
        }
    }

    fn span<C: Canvas + ?Sized>(&self, canvas: &mut C, x0: i64, x1: i64, y: i64) {
        if !(0..self.h).contains(&y) {
            return;
        }
        for x in x0.max(0)..=x1.min(self.w - 1) {
            canvas.plot(x as i32, y as i32);
        }
    }
}
