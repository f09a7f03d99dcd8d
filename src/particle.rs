// Simple particle struct to keep track of individual position, velocity,
// and the draw attributes that stay fixed after seeding

use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub opacity: f64,
}

impl Particle {
    pub const MAX_VELOCITY: f64 = 0.4;
    pub const MIN_RADIUS: f64 = 0.5;
    pub const MAX_RADIUS: f64 = 3.0;
    pub const MIN_OPACITY: f64 = 0.3;
    pub const MAX_OPACITY: f64 = 0.8;

    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, opacity: f64) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            opacity,
        }
    }

    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        let min_vel = -Particle::MAX_VELOCITY;
        let max_vel = Particle::MAX_VELOCITY;
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = rng.gen::<f64>() * (max_vel - min_vel) + min_vel;
        let vel_y = rng.gen::<f64>() * (max_vel - min_vel) + min_vel;
        let radius =
            rng.gen::<f64>() * (Particle::MAX_RADIUS - Particle::MIN_RADIUS) + Particle::MIN_RADIUS;
        let opacity = rng.gen::<f64>() * (Particle::MAX_OPACITY - Particle::MIN_OPACITY)
            + Particle::MIN_OPACITY;
        Particle::new([pos_x, pos_y], [vel_x, vel_y], radius, opacity)
    }

    // Advance one frame and reflect off the field edges. Crossing an edge
    // only flips the velocity sign; the overshooting position is kept, so
    // the next step heads back inside on its own.
    pub fn step(&mut self, width: f64, height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }
}
