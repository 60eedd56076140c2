//! The effect controller: live particles, cached viewport, last pointer.

use rand::Rng;

use crate::config::TrailConfig;
use crate::particle::Particle;
use crate::surface::{Point, Surface, Viewport};

/// State shared by the resize, input and frame callbacks.
pub struct Trail<R> {
    config: TrailConfig,
    particles: Vec<Particle>,
    viewport: Viewport,
    pointer: Option<Point>,
    rng: R,
}

impl<R: Rng> Trail<R> {
    pub fn new(config: TrailConfig, viewport: Viewport, rng: R) -> Self {
        Self {
            config,
            particles: Vec::new(),
            viewport,
            pointer: None,
            rng,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    /// Records the pointer and appends exactly one particle there.
    ///
    /// Movement is not throttled: fast strokes leave a denser trail.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        let at = Point::new(x, y);
        self.pointer = Some(at);
        self.particles
            .push(Particle::spawn(at, &self.config, &mut self.rng));
    }

    /// Handles a touch move given its first touch point, if any.
    ///
    /// Returns whether a particle was spawned.
    pub fn touch_moved(&mut self, first_touch: Option<Point>) -> bool {
        match first_touch {
            Some(at) => {
                self.pointer_moved(at.x, at.y);
                true
            }
            None => false,
        }
    }

    /// Clears the surface, advances and draws every particle in insertion
    /// order, then drops the ones that expired this frame.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.viewport);
        for particle in &mut self.particles {
            particle.update(&self.config);
            surface.fill_circle(particle.position(), particle.radius(), particle.color());
        }
        let config = &self.config;
        self.particles.retain(|p| !p.is_expired(config));
    }

    /// Drops every live particle.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Last sampled pointer or first-touch position.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }
}
