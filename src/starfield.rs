// The fixed set of stars and the surface they drift across.
// Knows nothing about the DOM so it can be stepped and inspected in tests.

use crate::color::Color;
use crate::config::StarsConfig;
use crate::particle::Particle;
use rand::Rng;

pub struct Starfield {
    width: f64,
    height: f64,
    speed_increment: f64,
    particles: Vec<Particle>,
}

impl Starfield {
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        stars: &StarsConfig,
        speed_increment: f64,
    ) -> Starfield {
        let mut particles = Vec::with_capacity(stars.count);
        for _ in 0..stars.count {
            let pos_x = random_between(rng, 0.0, width);
            let pos_y = random_between(rng, 0.0, height);
            let vel_x = random_between(rng, -stars.max_speed, stars.max_speed);
            let vel_y = random_between(rng, -stars.max_speed, stars.max_speed);
            let size = random_between(rng, stars.min_size, stars.max_size);
            let color = Color::from_hsl(random_between(rng, 0.0, 360.0), 1.0, 0.5);
            particles.push(Particle::new(pos_x, pos_y, vel_x, vel_y, size, color));
        }

        Starfield {
            width,
            height,
            speed_increment,
            particles,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    // Advances every particle by one frame
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    // Keypress: every particle speeds up by the same increment
    pub fn boost(&mut self) {
        for particle in &mut self.particles {
            particle.speed_multiplier += self.speed_increment;
        }
    }

    // Only the bounds change; stars outside a smaller surface wrap back
    // in on their next step
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

fn random_between<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.gen::<f64>() * (max - min) + min
}
