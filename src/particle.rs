use std::fmt;

use rand::Rng;

use crate::config::TrailConfig;
use crate::surface::Point;

/// Fill colour as a CSS `rgba()` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A single decaying dot of the trail.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: Point,
    velocity: Point,
    radius: f64,
    color: Rgba,
    life: i32,
}

impl Particle {
    pub fn new(position: Point, velocity: Point, radius: f64, color: Rgba, life: i32) -> Self {
        Self {
            position,
            velocity,
            radius,
            color,
            life,
        }
    }

    /// Samples radius, drift, opacity and lifetime once; only position and
    /// the decaying fields change afterwards.
    pub fn spawn<R: Rng + ?Sized>(at: Point, config: &TrailConfig, rng: &mut R) -> Self {
        let velocity = Point::new(
            rng.gen_range(-config.drift..config.drift),
            rng.gen_range(-config.drift..config.drift),
        );
        let [r, g, b] = config.hue;
        let color = Rgba {
            r,
            g,
            b,
            a: rng.gen_range(config.alpha.clone()),
        };
        Self::new(
            at,
            velocity,
            rng.gen_range(config.radius.clone()),
            color,
            rng.gen_range(config.life.clone()),
        )
    }

    /// Advances one frame: drift, shrink while above the floor, age.
    pub fn update(&mut self, config: &TrailConfig) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
        if self.radius > config.shrink_floor {
            self.radius -= config.shrink;
        }
        self.life -= 1;
    }

    pub fn is_expired(&self, config: &TrailConfig) -> bool {
        self.life <= 0 || self.radius <= config.expire_radius
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Remaining life in frames.
    pub fn life(&self) -> i32 {
        self.life
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_samples_within_config() {
        let config = TrailConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::spawn(Point::new(3.0, 4.0), &config, &mut rng);
            assert_eq!(p.position(), Point::new(3.0, 4.0));
            assert!(config.radius.contains(&p.radius()));
            assert!(config.life.contains(&p.life()));
            assert!(config.alpha.contains(&p.color().a));
            assert!(p.velocity().x.abs() <= config.drift);
            assert!(p.velocity().y.abs() <= config.drift);
            assert_eq!((p.color().r, p.color().g, p.color().b), (142, 224, 0));
        }
    }

    #[test]
    fn radius_stops_shrinking_at_floor() {
        let config = TrailConfig::default();
        let color = Rgba { r: 0, g: 0, b: 0, a: 1.0 };
        let mut p = Particle::new(Point::default(), Point::default(), 0.21, color, 100);
        p.update(&config);
        let after_one = p.radius();
        assert!((after_one - 0.19).abs() < 1e-9);
        p.update(&config);
        assert_eq!(p.radius(), after_one);
        assert_eq!(p.life(), 98);
    }

    #[test]
    fn expires_on_life_or_radius() {
        let config = TrailConfig::default();
        let color = Rgba { r: 0, g: 0, b: 0, a: 1.0 };
        let mut dying = Particle::new(Point::default(), Point::default(), 2.0, color, 1);
        assert!(!dying.is_expired(&config));
        dying.update(&config);
        assert!(dying.is_expired(&config));

        let tiny = Particle::new(Point::default(), Point::default(), 0.1, color, 50);
        assert!(tiny.is_expired(&config));
    }

    #[test]
    fn css_color() {
        let c = Rgba { r: 142, g: 224, b: 0, a: 0.5 };
        assert_eq!(c.to_string(), "rgba(142, 224, 0, 0.5)");
    }
}
