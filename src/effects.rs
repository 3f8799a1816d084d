use rand::Rng;
use raylib::prelude::*;

use crate::constants::*;
use crate::slide::Slide;

struct Particle {
    position: Vector2,
    velocity: Vector2,
    size: f32,
    alpha: f32,
    color: Color,
}

/// Decorative drifting particles behind the slide text. Purely cosmetic:
/// seeded once per slide, advanced by the frame clock, never read back.
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vector2,
}

impl ParticleField {
    pub fn new(count: usize, tinted: bool, width: f32, height: f32) -> Self {
        let mut rng = rand::rng();
        let particles = (0..count)
            .map(|_| {
                let color = if tinted {
                    // Cool blue-white tint for the opening slide
                    Color::new(
                        rng.random_range(155..=255),
                        rng.random_range(155..=255),
                        255,
                        255,
                    )
                } else {
                    Color::WHITE
                };
                Particle {
                    position: Vector2::new(
                        rng.random_range(0.0..width),
                        rng.random_range(0.0..height),
                    ),
                    velocity: Vector2::new(
                        rng.random_range(-8.0..8.0),
                        rng.random_range(-30.0..-8.0),
                    ),
                    size: rng.random_range(1.0..5.0),
                    alpha: rng.random_range(0.2..0.7),
                    color,
                }
            })
            .collect();
        Self {
            particles,
            bounds: Vector2::new(width, height),
        }
    }

    pub fn update(&mut self, dt: f32) {
        for p in self.particles.iter_mut() {
            p.position.x += p.velocity.x * dt;
            p.position.y += p.velocity.y * dt;

            // Wrap around the screen edges so the field never thins out
            if p.position.y < -p.size {
                p.position.y = self.bounds.y + p.size;
            }
            if p.position.x < -p.size {
                p.position.x = self.bounds.x + p.size;
            } else if p.position.x > self.bounds.x + p.size {
                p.position.x = -p.size;
            }
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for p in self.particles.iter() {
            let mut color = p.color;
            color.a = (p.alpha * 255.0) as u8;
            d.draw_circle_v(p.position, p.size, color);
        }
    }
}

struct Glint {
    position: Vector2,
    period: f32,
    phase: f32,
}

/// Pulsing pinpoints of light used on mirror-effect slides.
pub struct GlintField {
    glints: Vec<Glint>,
    clock: f32,
}

impl GlintField {
    pub fn new(count: usize, width: f32, height: f32) -> Self {
        let mut rng = rand::rng();
        let glints = (0..count)
            .map(|_| Glint {
                position: Vector2::new(
                    rng.random_range(0.0..width),
                    rng.random_range(height * 0.5..height),
                ),
                period: rng.random_range(2.0..5.0),
                phase: rng.random_range(0.0..5.0),
            })
            .collect();
        Self { glints, clock: 0.0 }
    }

    pub fn update(&mut self, dt: f32) {
        self.clock += dt;
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for g in self.glints.iter() {
            let t = ((self.clock + g.phase) / g.period).fract();
            // Triangle wave: fade in to full brightness at the half period, back out
            let brightness = if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
            let alpha = (brightness * 0.8 * 255.0) as u8;
            d.draw_circle_v(g.position, 1.5, Color::new(255, 255, 255, alpha));
        }
    }
}

/// The decorative layer for one slide, built once at startup from its flags.
pub struct SlideEffects {
    particles: ParticleField,
    glints: Option<GlintField>,
}

impl SlideEffects {
    pub fn for_slide(slide: &Slide, width: f32, height: f32) -> Self {
        let count = if slide.is_first_slide {
            FIRST_SLIDE_PARTICLES
        } else {
            SLIDE_PARTICLES
        };
        let particles = ParticleField::new(count, slide.is_first_slide, width, height);
        let glints = slide
            .is_mirror_effect
            .then(|| GlintField::new(MIRROR_GLINTS, width, height));
        Self { particles, glints }
    }

    pub fn update(&mut self, dt: f32) {
        self.particles.update(dt);
        if let Some(glints) = &mut self.glints {
            glints.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        self.particles.draw(d);
        if let Some(glints) = &self.glints {
            glints.draw(d);
        }
    }
}
