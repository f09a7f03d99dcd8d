// The pairwise connection pass, kept apart from update and draw so a
// spatial index could replace the O(n^2) scan without touching either. A
// link records the two particle indices and the stroke alpha for the line
// between them.

use crate::particle::Particle;
use nalgebra_glm as glm;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f64,
}

impl Link {
    pub const THRESHOLD: f64 = 120.0;
    pub const BASE_ALPHA: f64 = 0.2;
}

// Fades linearly from the base alpha at zero distance down to nothing at
// the threshold; at or past the threshold there is no link at all
pub fn link_alpha(distance: f64) -> Option<f64> {
    if distance < Link::THRESHOLD {
        Some(Link::BASE_ALPHA * (1.0 - distance / Link::THRESHOLD))
    } else {
        None
    }
}

// Scans every unordered pair once, reusing the caller's buffer across
// frames instead of reallocating
pub fn collect_links_into(particles: &[Particle], links: &mut Vec<Link>) {
    links.clear();
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let a = particles[i].pos;
            let b = particles[j].pos;
            let distance = glm::distance(&glm::vec2(a[0], a[1]), &glm::vec2(b[0], b[1]));
            if let Some(alpha) = link_alpha(distance) {
                links.push(Link { a: i, b: j, alpha });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_particle(x: f64, y: f64) -> Particle {
        Particle::new([x, y], [0.0, 0.0], 1.0, 0.5)
    }

    fn collect_links(particles: &[Particle]) -> Vec<Link> {
        let mut links = Vec::new();
        collect_links_into(particles, &mut links);
        links
    }

    #[test]
    fn test_alpha_fades_linearly_with_distance() {
        assert_eq!(link_alpha(0.0), Some(Link::BASE_ALPHA));
        assert_eq!(link_alpha(Link::THRESHOLD / 2.0), Some(Link::BASE_ALPHA / 2.0));
        assert_eq!(link_alpha(Link::THRESHOLD), None);
        assert_eq!(link_alpha(Link::THRESHOLD + 40.0), None);
    }

    #[test]
    fn test_pairs_inside_threshold_only() {
        let particles = vec![
            still_particle(0.0, 0.0),
            still_particle(50.0, 0.0),
            still_particle(300.0, 0.0),
        ];
        let links = collect_links(&particles);
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        let expected = Link::BASE_ALPHA * (1.0 - 50.0 / Link::THRESHOLD);
        assert!((links[0].alpha - expected).abs() < 1e-12);
    }

    #[test]
    fn test_distance_exactly_at_threshold_draws_nothing() {
        let particles = vec![still_particle(0.0, 0.0), still_particle(Link::THRESHOLD, 0.0)];
        assert!(collect_links(&particles).is_empty());
    }

    #[test]
    fn test_diagonal_distance_is_euclidean() {
        // 3-4-5 triangle scaled by 20 puts the pair exactly 100 apart
        let particles = vec![still_particle(0.0, 0.0), still_particle(60.0, 80.0)];
        let links = collect_links(&particles);
        assert_eq!(links.len(), 1);
        let expected = Link::BASE_ALPHA * (1.0 - 100.0 / Link::THRESHOLD);
        assert!((links[0].alpha - expected).abs() < 1e-12);
    }

    #[test]
    fn test_buffer_reuse_clears_the_previous_pass() {
        let mut links = Vec::new();
        let near = vec![still_particle(0.0, 0.0), still_particle(10.0, 0.0)];
        collect_links_into(&near, &mut links);
        assert_eq!(links.len(), 1);
        let far = vec![still_particle(0.0, 0.0), still_particle(500.0, 0.0)];
        collect_links_into(&far, &mut links);
        assert!(links.is_empty());
    }
}
