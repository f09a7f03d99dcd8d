// Owns the particle population and the bounds they bounce inside. The
// population is decided once from the viewport width and never changes
// afterwards; resizing only moves the walls.

use crate::particle::Particle;
use rand::Rng;

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub const WIDTH_BREAKPOINT: f64 = 768.0;
    pub const SPARSE_POPULATION: u32 = 60;
    pub const DENSE_POPULATION: u32 = 120;

    // Narrow viewports get the sparse field, the breakpoint itself and
    // everything wider get the dense one
    pub fn population_for_width(width: f64) -> u32 {
        if width < ParticleField::WIDTH_BREAKPOINT {
            ParticleField::SPARSE_POPULATION
        } else {
            ParticleField::DENSE_POPULATION
        }
    }

    pub fn new<R: Rng>(width: f64, height: f64, population: u32, rng: &mut R) -> ParticleField {
        let mut particles = Vec::with_capacity(population as usize);
        for _ in 0..population {
            particles.push(Particle::random(rng, width, height));
        }
        ParticleField {
            width,
            height,
            particles,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_particles(width: f64, height: f64, particles: Vec<Particle>) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
        }
    }

    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.step(self.width, self.height);
        }
    }

    // Existing particles keep their absolute coordinates; ones left outside
    // the new bounds bounce on the reflection rule like everything else
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn population(&self) -> usize {
        self.particles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_field(width: f64, height: f64, population: u32) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(42);
        ParticleField::new(width, height, population, &mut rng)
    }

    #[test]
    fn test_population_tiers() {
        assert_eq!(ParticleField::population_for_width(500.0), 60);
        assert_eq!(ParticleField::population_for_width(1200.0), 120);
        assert_eq!(ParticleField::population_for_width(768.0), 120);
        assert_eq!(ParticleField::population_for_width(767.9), 60);
    }

    #[test]
    fn test_population_survives_stepping_and_resizing() {
        let mut field = seeded_field(1000.0, 800.0, 120);
        for i in 0..50 {
            field.step();
            if i % 10 == 0 {
                field.resize(640.0, 480.0);
                field.resize(1000.0, 800.0);
            }
            assert_eq!(field.population(), 120);
        }
    }

    #[test]
    fn test_resize_keeps_particle_coordinates() {
        let mut field = seeded_field(1000.0, 800.0, 60);
        let before: Vec<[f64; 2]> = field.particles().iter().map(|p| p.pos).collect();
        field.resize(500.0, 400.0);
        let after: Vec<[f64; 2]> = field.particles().iter().map(|p| p.pos).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_thousand_steps_stay_near_bounds() {
        let mut field = seeded_field(1000.0, 800.0, 120);
        for _ in 0..1000 {
            field.step();
        }
        assert_eq!(field.population(), 120);
        for particle in field.particles() {
            assert!(particle.pos[0] >= -1.0 && particle.pos[0] <= 1001.0);
            assert!(particle.pos[1] >= -1.0 && particle.pos[1] <= 801.0);
        }
    }
}
