//! Parameter controller
//!
//! Maps control changes onto the parameter record, recomputes the derived
//! quantities for the readout panel, and produces the lightweight uniform
//! update for the renderer. A control change never rebuilds the scene.

use crate::physics::{schwarzschild_radius_km, BlackHoleParams, Derived};
use crate::scene::jets_visible;

/// Formatted readout strings for the physics panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    pub radius: String,
    pub area: String,
    pub temperature: String,
    pub lifetime: String,
    pub tidal: String,
}

impl Readout {
    pub fn from_derived(d: &Derived) -> Self {
        Self {
            radius: format!("{:.1} km", d.radius_km),
            area: format!("{:.2e} km²", d.area_km2),
            temperature: format!("{:.2e} K", d.temperature_k),
            lifetime: format!("{:.2e} years", d.lifetime_years),
            tidal: d.tidal.to_string(),
        }
    }
}

/// Uniform-level update pushed onto the existing scene objects
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualUpdate {
    /// Scale factor applied to the horizon mesh built at startup
    pub horizon_scale: f32,
    pub spin: f32,
    pub accretion_rate: f32,
    pub jets_visible: bool,
}

/// Owns the single parameter record and translates control events into
/// readout refreshes and uniform updates.
pub struct ParameterController {
    params: BlackHoleParams,
    /// Horizon radius the mesh was tessellated with
    built_radius_km: f64,
}

impl ParameterController {
    pub fn new(params: BlackHoleParams) -> Self {
        Self {
            params,
            built_radius_km: schwarzschild_radius_km(params.mass),
        }
    }

    pub fn params(&self) -> &BlackHoleParams {
        &self.params
    }

    pub fn set_mass(&mut self, mass: f64) -> VisualUpdate {
        self.params.mass = mass;
        log::debug!("mass -> {mass} M☉");
        self.visual_update()
    }

    pub fn set_spin(&mut self, spin: f64) -> VisualUpdate {
        self.params.spin = spin;
        self.visual_update()
    }

    pub fn set_accretion_rate(&mut self, rate: f64) -> VisualUpdate {
        self.params.accretion_rate = rate;
        self.visual_update()
    }

    /// Current uniform values for the existing scene objects.
    ///
    /// The horizon scale divides the new radius by the radius the mesh was
    /// built with, so mass changes genuinely resize the rendered horizon.
    pub fn visual_update(&self) -> VisualUpdate {
        VisualUpdate {
            horizon_scale: (schwarzschild_radius_km(self.params.mass) / self.built_radius_km)
                as f32,
            spin: self.params.spin as f32,
            accretion_rate: self.params.accretion_rate as f32,
            jets_visible: jets_visible(self.params.spin),
        }
    }

    pub fn derived(&self) -> Derived {
        Derived::from_params(&self.params)
    }

    pub fn readout(&self) -> Readout {
        Readout::from_derived(&self.derived())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readout_idempotent() {
        let controller = ParameterController::new(BlackHoleParams::default());
        assert_eq!(controller.readout(), controller.readout());
    }

    #[test]
    fn test_default_scenario_readout() {
        let controller = ParameterController::new(BlackHoleParams::default());
        let readout = controller.readout();
        assert_eq!(readout.radius, "29.5 km");
        assert_eq!(readout.tidal, "High");
        assert!(controller.visual_update().jets_visible);
    }

    #[test]
    fn test_extreme_mass_scenario() {
        let mut controller = ParameterController::new(BlackHoleParams::default());
        let update = controller.set_mass(60.0);
        assert_eq!(controller.readout().tidal, "Extreme");
        assert!((update.horizon_scale - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_unchanged_mass_unit_scale() {
        let controller = ParameterController::new(BlackHoleParams::default());
        assert!((controller.visual_update().horizon_scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_spin_controls_jets() {
        let mut controller = ParameterController::new(BlackHoleParams::default());
        assert!(!controller.set_spin(0.05).jets_visible);
        assert!(controller.set_spin(0.8).jets_visible);
    }

    #[test]
    fn test_one_field_per_event() {
        let mut controller = ParameterController::new(BlackHoleParams::default());
        controller.set_accretion_rate(1.7);
        let p = controller.params();
        assert_eq!(p.mass, 10.0);
        assert_eq!(p.spin, 0.5);
        assert_eq!(p.accretion_rate, 1.7);
    }
}
