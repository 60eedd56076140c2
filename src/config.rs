//! Constants that shape the trail.

use std::ops::Range;

/// Spawn and decay parameters for trail particles.
///
/// The page always runs with [`TrailConfig::default`]. Every range must be
/// non-empty; sampling from an empty range panics.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailConfig {
    /// Initial radius, in CSS pixels.
    pub radius: Range<f64>,
    /// Each velocity component is sampled from `-drift..drift`.
    pub drift: f64,
    /// Initial remaining life, in frames.
    pub life: Range<i32>,
    /// Radius lost per frame while above `shrink_floor`.
    pub shrink: f64,
    pub shrink_floor: f64,
    /// A particle at or below this radius is removed.
    pub expire_radius: f64,
    /// Fixed RGB hue shared by every particle.
    pub hue: [u8; 3],
    /// Opacity sampled once per particle.
    pub alpha: Range<f64>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            radius: 1.0..4.0,
            drift: 0.5,
            life: 120..180,
            shrink: 0.02,
            shrink_floor: 0.2,
            expire_radius: 0.1,
            hue: [142, 224, 0],
            alpha: 0.4..0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ranges_are_sampleable() {
        let c = TrailConfig::default();
        assert!(!c.radius.is_empty());
        assert!(!c.life.is_empty());
        assert!(!c.alpha.is_empty());
        assert!(c.drift > 0.0);
        // particles must outlive one frame
        assert!(c.life.start > 1);
        assert!(c.expire_radius < c.shrink_floor);
    }
}
