// Simple particle struct to keep track of individual position, velocity,
// size, color and the speed multiplier applied on top of its base velocity

use crate::color::Color;
use glm::DVec2;

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: f64,
    pub color: Color,
    pub speed_multiplier: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, size: f64, color: Color) -> Particle {
        Particle {
            pos: glm::vec2(pos_x, pos_y),
            vel: glm::vec2(vel_x, vel_y),
            size,
            color,
            speed_multiplier: 1.0,
        }
    }

    // Moves one frame along the base velocity scaled by the multiplier,
    // coming back in on the opposite edge when leaving the surface
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos += self.vel * self.speed_multiplier;
        self.pos.x = wrap(self.pos.x, width);
        self.pos.y = wrap(self.pos.y, height);
    }
}

// Wraps `value` into `[0, extent)`. A surface with no extent pins the
// coordinate to 0.
pub fn wrap(value: f64, extent: f64) -> f64 {
    if !(extent > 0.0) || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid rounds tiny negatives up to extent itself
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white() -> Color {
        Color::from_u32(0xffffffff)
    }

    #[test]
    fn new_particle_starts_at_base_speed() {
        let p = Particle::new(1.0, 2.0, 0.25, -0.25, 2.0, white());
        assert_eq!(p.speed_multiplier, 1.0);
        assert_eq!(p.pos, glm::vec2(1.0, 2.0));
        assert_eq!(p.vel, glm::vec2(0.25, -0.25));
    }

    #[test]
    fn advance_scales_velocity_by_multiplier() {
        let mut p = Particle::new(10.0, 10.0, 0.5, -0.25, 1.0, white());
        p.speed_multiplier = 4.0;
        p.advance(100.0, 100.0);
        assert_eq!(p.pos, glm::vec2(12.0, 9.0));
    }

    #[test]
    fn advance_wraps_to_opposite_edge() {
        let mut p = Particle::new(99.8, 0.1, 0.5, -0.5, 1.0, white());
        p.advance(100.0, 50.0);
        assert!((p.pos.x - 0.3).abs() < 1e-9);
        assert!((p.pos.y - 49.6).abs() < 1e-9);
    }

    #[test]
    fn wrap_keeps_values_in_half_open_range() {
        assert_eq!(wrap(0.0, 10.0), 0.0);
        assert_eq!(wrap(10.0, 10.0), 0.0);
        assert_eq!(wrap(-0.5, 10.0), 9.5);
        assert_eq!(wrap(25.0, 10.0), 5.0);
        assert_eq!(wrap(-1e-20, 10.0), 0.0);
    }

    #[test]
    fn wrap_on_empty_surface_pins_to_origin() {
        assert_eq!(wrap(5.0, 0.0), 0.0);
        assert_eq!(wrap(5.0, -3.0), 0.0);
        assert_eq!(wrap(f64::NAN, 10.0), 0.0);
    }
}
