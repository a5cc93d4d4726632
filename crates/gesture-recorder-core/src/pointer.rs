/// Pointer state sampled by the host at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSnapshot {
    /// Horizontal position in canvas space.
    pub x: f64,
    /// Vertical position in canvas space.
    pub y: f64,
    /// Whether the capture button is currently held.
    pub is_active: bool,
}

impl PointerSnapshot {
    /// Pointer at `(x, y)` with the capture button held.
    pub fn pressed(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            is_active: true,
        }
    }

    /// Pointer at `(x, y)` with the capture button up.
    pub fn released(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            is_active: false,
        }
    }
}

/// Drawable canvas area; capture is limited to `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    /// Drawable width.
    pub width: f64,
    /// Drawable height.
    pub height: f64,
}

impl CanvasBounds {
    /// Bounds of a `width` x `height` canvas.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether `(x, y)` lies inside the half-open canvas rectangle.
    ///
    /// NaN coordinates are never inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..self.width).contains(&x) && (0.0..self.height).contains(&y)
    }
}
