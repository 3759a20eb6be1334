//! Rectangular-barrier tunneling transmission
//!
//! Closed-form transmission coefficient for a particle of energy E hitting
//! a rectangular barrier of height V₀ and width a:
//!
//!   T = 1 / (1 + V₀² sinh²(κa) / (4E(V₀ − E)))   for E < V₀
//!   κ = √(2m(V₀ − E)) / ħ
//!
//! Inputs use eV for energies, nm for widths, and electron masses, which
//! keeps the slider ranges human-sized.

/// ħc in eV·nm
const HBAR_C_EV_NM: f64 = 197.326_98;
/// Electron rest energy mₑc² in eV
const M_E_C2_EV: f64 = 510_998.95;

/// Barrier and particle parameters in eV / nm / electron masses
#[derive(Debug, Clone, Copy)]
pub struct BarrierSetup {
    /// Particle kinetic energy (eV)
    pub energy_ev: f64,
    /// Barrier height (eV)
    pub height_ev: f64,
    /// Barrier width (nm)
    pub width_nm: f64,
    /// Particle mass in electron masses
    pub mass_me: f64,
}

impl Default for BarrierSetup {
    fn default() -> Self {
        Self {
            energy_ev: 1.0,
            height_ev: 2.0,
            width_nm: 0.5,
            mass_me: 1.0,
        }
    }
}

/// Evanescent decay constant κ inside the barrier, in nm⁻¹.
/// Zero when the particle clears the barrier classically.
pub fn decay_constant_inv_nm(setup: &BarrierSetup) -> f64 {
    if setup.energy_ev >= setup.height_ev {
        return 0.0;
    }
    let deficit_ev = setup.height_ev - setup.energy_ev;
    (2.0 * setup.mass_me * M_E_C2_EV * deficit_ev).sqrt() / HBAR_C_EV_NM
}

/// Transmission probability through the barrier
pub fn transmission(setup: &BarrierSetup) -> f64 {
    if setup.energy_ev <= 0.0 {
        return 0.0;
    }
    if setup.energy_ev >= setup.height_ev {
        return 1.0;
    }

    let kappa = decay_constant_inv_nm(setup);
    let sinh_ka = (kappa * setup.width_nm).sinh();
    let v0 = setup.height_ev;
    let e = setup.energy_ev;

    1.0 / (1.0 + v0 * v0 * sinh_ka * sinh_ka / (4.0 * e * (v0 - e)))
}

/// Reflection probability, R = 1 − T
pub fn reflection(setup: &BarrierSetup) -> f64 {
    1.0 - transmission(setup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classical_limit() {
        // At or above the barrier height the particle always gets through
        let setup = BarrierSetup {
            energy_ev: 2.0,
            height_ev: 2.0,
            ..Default::default()
        };
        assert_eq!(transmission(&setup), 1.0);

        let above = BarrierSetup {
            energy_ev: 5.0,
            ..Default::default()
        };
        assert_eq!(transmission(&above), 1.0);
    }

    #[test]
    fn test_transmission_in_open_interval_below_barrier() {
        let t = transmission(&BarrierSetup::default());
        assert!(t > 0.0 && t < 1.0);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let setup = BarrierSetup::default();
        assert!((transmission(&setup) + reflection(&setup) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_wider_barrier_transmits_less() {
        let thin = BarrierSetup {
            width_nm: 0.2,
            ..Default::default()
        };
        let thick = BarrierSetup {
            width_nm: 1.0,
            ..Default::default()
        };
        assert!(transmission(&thick) < transmission(&thin));
    }

    #[test]
    fn test_heavier_particle_transmits_less() {
        let light = BarrierSetup::default();
        let heavy = BarrierSetup {
            mass_me: 10.0,
            ..Default::default()
        };
        assert!(transmission(&heavy) < transmission(&light));
    }

    #[test]
    fn test_transmission_rises_with_energy() {
        let mut prev = 0.0;
        for i in 1..20 {
            let setup = BarrierSetup {
                energy_ev: 0.1 * i as f64,
                ..Default::default()
            };
            let t = transmission(&setup);
            assert!(t > prev);
            prev = t;
        }
    }

    #[test]
    fn test_zero_energy_never_transmits() {
        let setup = BarrierSetup {
            energy_ev: 0.0,
            ..Default::default()
        };
        assert_eq!(transmission(&setup), 0.0);
    }
}
