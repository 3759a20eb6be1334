//! Per-frame animation driver
//!
//! Two states: Idle before the first tick, Running afterwards for the rest
//! of the session. Each tick advances the single shared clock and integrates
//! the particle field; the caller then uploads buffers and draws. Everything
//! runs on one thread, one tick at a time.

use rand::Rng;

use crate::scene::SceneGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    Idle,
    Running,
}

pub struct Animator {
    state: AnimatorState,
    time: f32,
}

impl Animator {
    pub fn new() -> Self {
        Self {
            state: AnimatorState::Idle,
            time: 0.0,
        }
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    /// The shared clock; every time uniform reads this one value so the
    /// object animations stay phase-consistent.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance one frame: bump the clock and integrate the particles.
    /// Returns the new clock sample.
    pub fn tick(&mut self, dt: f32, scene: &mut SceneGraph, rng: &mut impl Rng) -> f32 {
        if self.state == AnimatorState::Idle {
            self.state = AnimatorState::Running;
            log::info!("animation loop started");
        }

        self.time += dt;
        scene
            .particles
            .step(rng, scene.params.horizon_radius);
        self.time
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::BlackHoleParams;
    use crate::scene::ESCAPE_RADIUS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_idle_until_first_tick() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut scene = SceneGraph::build(&BlackHoleParams::default(), &mut rng);
        let mut animator = Animator::new();

        assert_eq!(animator.state(), AnimatorState::Idle);
        animator.tick(0.016, &mut scene, &mut rng);
        assert_eq!(animator.state(), AnimatorState::Running);

        // No transition back
        for _ in 0..10 {
            animator.tick(0.016, &mut scene, &mut rng);
            assert_eq!(animator.state(), AnimatorState::Running);
        }
    }

    #[test]
    fn test_clock_monotone() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut scene = SceneGraph::build(&BlackHoleParams::default(), &mut rng);
        let mut animator = Animator::new();

        let mut prev = animator.time();
        for _ in 0..50 {
            let t = animator.tick(0.016, &mut scene, &mut rng);
            assert!(t > prev);
            prev = t;
        }
    }

    #[test]
    fn test_tick_enforces_respawn_invariant() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut scene = SceneGraph::build(&BlackHoleParams::default(), &mut rng);
        let mut animator = Animator::new();

        scene.particles.positions[0] = glam::Vec3::new(500.0, 0.0, 0.0);
        animator.tick(0.016, &mut scene, &mut rng);
        assert!(scene
            .particles
            .positions
            .iter()
            .all(|p| p.length() <= ESCAPE_RADIUS + 1e-3));
    }
}
