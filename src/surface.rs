use crate::particle::Rgba;

/// Drawing buffer size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where a [`Trail`](crate::Trail) draws each frame.
///
/// The browser build implements this over a 2D canvas context; tests
/// implement it with a recorder.
pub trait Surface {
    /// Clears the region `(0, 0)`..`(width, height)`.
    fn clear(&mut self, viewport: Viewport);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);
}
