//! Scene graph construction and the Hawking radiation particle field
//!
//! The scene is built once at startup from the current parameters. After
//! that only shader uniform values and the particle buffer change; mass
//! edits rescale the horizon mesh through a scale factor instead of
//! rebuilding geometry.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

use crate::physics::{schwarzschild_radius_km, BlackHoleParams};

/// Number of Hawking radiation particles
pub const PARTICLE_COUNT: usize = 5000;

/// Number of background stars
pub const STAR_COUNT: usize = 10_000;

/// Particles beyond this distance from the origin are recycled
pub const ESCAPE_RADIUS: f32 = 50.0;

/// Jets are flagged invisible at or below this spin
pub const JET_SPIN_THRESHOLD: f64 = 0.1;

/// Jets stay constructed regardless of spin; only the flag changes.
pub fn jets_visible(spin: f64) -> bool {
    spin > JET_SPIN_THRESHOLD
}

/// Geometry sizing derived from the physics parameters.
///
/// Scene units are kilometers, the same unit the readout panel displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    pub horizon_radius: f32,
    pub disk_inner: f32,
    pub disk_outer: f32,
    pub lens_radius: f32,
    pub jet_offset: f32,
    pub jet_length: f32,
}

impl SceneParams {
    pub fn from_mass(mass_solar: f64) -> Self {
        let r = schwarzschild_radius_km(mass_solar) as f32;
        let disk_inner = 3.0 * r;
        Self {
            horizon_radius: r,
            disk_inner,
            disk_outer: 8.0 * disk_inner,
            lens_radius: 5.0 * r,
            jet_offset: 12.0,
            jet_length: 20.0,
        }
    }
}

/// Fixed-count particle field, mutated in place every tick.
///
/// Entries are recycled rather than reallocated: a particle past
/// [`ESCAPE_RADIUS`] is reset to a random point in a shell around the
/// horizon.
pub struct ParticleField {
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    pub colors: Vec<[f32; 3]>,
}

impl ParticleField {
    pub fn new(rng: &mut impl Rng, horizon_radius: f32) -> Self {
        let mut positions = Vec::with_capacity(PARTICLE_COUNT);
        let mut velocities = Vec::with_capacity(PARTICLE_COUNT);
        let mut colors = Vec::with_capacity(PARTICLE_COUNT);

        for _ in 0..PARTICLE_COUNT {
            positions.push(random_shell_point(rng, horizon_radius, 10.0));
            velocities.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * 0.02,
                (rng.gen::<f32>() - 0.5) * 0.02,
                (rng.gen::<f32>() - 0.5) * 0.02,
            ));

            // Energy-graded color (Hawking radiation spectrum)
            let energy = rng.gen::<f32>();
            colors.push([energy, energy * 0.5, 1.0]);
        }

        Self {
            positions,
            velocities,
            colors,
        }
    }

    /// One Euler integration step plus recycling of escaped particles.
    ///
    /// After this returns every particle is within [`ESCAPE_RADIUS`] of the
    /// origin.
    pub fn step(&mut self, rng: &mut impl Rng, horizon_radius: f32) {
        for (pos, vel) in self.positions.iter_mut().zip(&self.velocities) {
            *pos += *vel;
            if pos.length() > ESCAPE_RADIUS {
                *pos = random_shell_point(rng, horizon_radius, 5.0);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Random point in a spherical shell of radius `r0 + U[0, spread)`
fn random_shell_point(rng: &mut impl Rng, r0: f32, spread: f32) -> Vec3 {
    let radius = r0 + rng.gen::<f32>() * spread;
    let theta = rng.gen::<f32>() * 2.0 * PI;
    let phi = rng.gen::<f32>() * PI;

    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Generate the static starfield, uniform in a cube
pub fn generate_starfield(rng: &mut impl Rng, count: usize, extent: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * extent,
                (rng.gen::<f32>() - 0.5) * 2.0 * extent,
                (rng.gen::<f32>() - 0.5) * 2.0 * extent,
            )
        })
        .collect()
}

/// The full scene: static object parameters plus the mutable particle field.
pub struct SceneGraph {
    pub params: SceneParams,
    /// Horizon radius at build time; mass changes rescale relative to this.
    pub built_radius: f32,
    pub jets_visible: bool,
    pub particles: ParticleField,
    pub stars: Vec<Vec3>,
}

impl SceneGraph {
    /// Build the scene once from the current parameters.
    pub fn build(params: &BlackHoleParams, rng: &mut impl Rng) -> Self {
        let scene_params = SceneParams::from_mass(params.mass);
        log::debug!(
            "building scene: horizon {:.1} km, disk {:.1}..{:.1} km",
            scene_params.horizon_radius,
            scene_params.disk_inner,
            scene_params.disk_outer
        );

        Self {
            params: scene_params,
            built_radius: scene_params.horizon_radius,
            jets_visible: jets_visible(params.spin),
            particles: ParticleField::new(rng, scene_params.horizon_radius),
            stars: generate_starfield(rng, STAR_COUNT, 1000.0),
        }
    }

    /// Scale factor that resizes the built horizon mesh to a new radius.
    pub fn horizon_scale(&self, new_radius: f32) -> f32 {
        new_radius / self.built_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_jet_visibility_threshold() {
        assert!(!jets_visible(0.0));
        assert!(!jets_visible(0.1));
        assert!(jets_visible(0.100001));
        assert!(jets_visible(0.5));
        assert!(jets_visible(1.0));
    }

    #[test]
    fn test_scene_params_ratios() {
        let p = SceneParams::from_mass(10.0);
        assert!((p.disk_inner / p.horizon_radius - 3.0).abs() < 1e-5);
        assert!((p.disk_outer / p.disk_inner - 8.0).abs() < 1e-5);
        assert!((p.lens_radius / p.horizon_radius - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_particle_count_fixed() {
        let mut rng = rng();
        let mut field = ParticleField::new(&mut rng, 29.5);
        assert_eq!(field.len(), PARTICLE_COUNT);
        for _ in 0..100 {
            field.step(&mut rng, 29.5);
        }
        assert_eq!(field.len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_respawn_invariant() {
        let mut rng = rng();
        let mut field = ParticleField::new(&mut rng, 29.5);

        // Force some particles far out; the next step must recycle them.
        field.positions[0] = Vec3::new(100.0, 0.0, 0.0);
        field.positions[1] = Vec3::new(0.0, -200.0, 0.0);

        for _ in 0..2000 {
            field.step(&mut rng, 29.5);
            assert!(field
                .positions
                .iter()
                .all(|p| p.length() <= ESCAPE_RADIUS + 1e-3));
        }
    }

    #[test]
    fn test_respawned_particles_near_horizon() {
        let mut rng = rng();
        let mut field = ParticleField::new(&mut rng, 29.5);
        field.positions[0] = Vec3::splat(100.0);
        field.velocities[0] = Vec3::ZERO;
        field.step(&mut rng, 29.5);

        let r = field.positions[0].length();
        assert!(r >= 29.5 && r < 34.5 + 1e-3);
    }

    #[test]
    fn test_horizon_rescale_deliberate() {
        let params = BlackHoleParams::default();
        let mut rng = rng();
        let scene = SceneGraph::build(&params, &mut rng);

        // Unchanged mass keeps the mesh at unit scale.
        assert!((scene.horizon_scale(scene.built_radius) - 1.0).abs() < 1e-6);

        // Six times the mass scales the horizon mesh by six.
        let r60 = SceneParams::from_mass(60.0).horizon_radius;
        assert!((scene.horizon_scale(r60) - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_starfield_extent() {
        let mut rng = rng();
        let stars = generate_starfield(&mut rng, STAR_COUNT, 1000.0);
        assert_eq!(stars.len(), STAR_COUNT);
        assert!(stars
            .iter()
            .all(|s| s.x.abs() <= 1000.0 && s.y.abs() <= 1000.0 && s.z.abs() <= 1000.0));
    }
}
