//! Black hole physics
//!
//! Closed-form Schwarzschild/Hawking formulas mapping the slider parameters
//! to the quantities shown in the readout panel. All functions are pure and
//! total over the slider-clamped domain; geometry sizing and the textual
//! readouts both call the same functions so the two can never disagree.

use common::constants::{C, G, HBAR, K_B, M_SUN, SECONDS_PER_YEAR};
use std::f64::consts::PI;
use std::fmt;

/// User-controlled black hole parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackHoleParams {
    /// Mass in solar masses
    pub mass: f64,
    /// Dimensionless spin parameter (a/M), in [0, 1]
    pub spin: f64,
    /// Relative accretion rate
    pub accretion_rate: f64,
}

impl Default for BlackHoleParams {
    fn default() -> Self {
        Self {
            mass: 10.0,
            spin: 0.5,
            accretion_rate: 1.0,
        }
    }
}

/// Schwarzschild radius rₛ = 2GM/c², in kilometers
pub fn schwarzschild_radius_km(mass_solar: f64) -> f64 {
    let m = mass_solar * M_SUN;
    2.0 * G * m / (C * C) / 1000.0
}

/// Hawking temperature T = ℏc³/(8πGMk_B), in kelvin
pub fn hawking_temperature_k(mass_solar: f64) -> f64 {
    let m = mass_solar * M_SUN;
    HBAR * C * C * C / (8.0 * PI * G * m * K_B)
}

/// Event horizon area A = 4πrₛ², in km²
pub fn horizon_area_km2(radius_km: f64) -> f64 {
    let r_m = radius_km * 1000.0;
    4.0 * PI * r_m * r_m / 1e6
}

/// Evaporation lifetime t = 5120πG²M³/(ℏc⁴), in years
pub fn evaporation_lifetime_years(mass_solar: f64) -> f64 {
    let m = mass_solar * M_SUN;
    5120.0 * PI * G * G * m * m * m / (HBAR * C * C * C * C) / SECONDS_PER_YEAR
}

/// Qualitative tidal force near the horizon, thresholded on mass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TidalForce {
    High,
    VeryHigh,
    Extreme,
}

impl TidalForce {
    pub fn from_mass(mass_solar: f64) -> Self {
        if mass_solar > 50.0 {
            TidalForce::Extreme
        } else if mass_solar > 20.0 {
            TidalForce::VeryHigh
        } else {
            TidalForce::High
        }
    }
}

impl fmt::Display for TidalForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TidalForce::High => "High",
            TidalForce::VeryHigh => "Very High",
            TidalForce::Extreme => "Extreme",
        };
        f.write_str(s)
    }
}

/// Quantities derived from [`BlackHoleParams`], recomputed on demand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
    pub radius_km: f64,
    pub area_km2: f64,
    pub temperature_k: f64,
    pub lifetime_years: f64,
    pub tidal: TidalForce,
}

impl Derived {
    pub fn from_params(params: &BlackHoleParams) -> Self {
        let radius_km = schwarzschild_radius_km(params.mass);
        Self {
            radius_km,
            area_km2: horizon_area_km2(radius_km),
            temperature_k: hawking_temperature_k(params.mass),
            lifetime_years: evaporation_lifetime_years(params.mass),
            tidal: TidalForce::from_mass(params.mass),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_default_scenario() {
        // mass = 10 M☉ gives rₛ ≈ 29.5 km
        let r = schwarzschild_radius_km(10.0);
        assert!((r - 29.5).abs() < 0.1, "got {r}");
    }

    #[test]
    fn test_radius_scales_linearly() {
        let r10 = schwarzschild_radius_km(10.0);
        let r60 = schwarzschild_radius_km(60.0);
        assert!((r60 / r10 - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_radius_monotone_increasing() {
        let mut prev = 0.0;
        for m in [0.1, 1.0, 5.0, 10.0, 50.0, 100.0] {
            let r = schwarzschild_radius_km(m);
            assert!(r > prev);
            prev = r;
        }
    }

    #[test]
    fn test_temperature_monotone_decreasing() {
        let mut prev = f64::INFINITY;
        for m in [0.1, 1.0, 5.0, 10.0, 50.0, 100.0] {
            let t = hawking_temperature_k(m);
            assert!(t < prev);
            prev = t;
        }
    }

    #[test]
    fn test_lifetime_cubic_scaling() {
        let t1 = evaporation_lifetime_years(10.0);
        let t2 = evaporation_lifetime_years(20.0);
        assert!((t2 / t1 - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_area_formula_exact() {
        let r = schwarzschild_radius_km(10.0);
        let expected = 4.0 * PI * r * r;
        assert!((horizon_area_km2(r) - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_tidal_thresholds() {
        assert_eq!(TidalForce::from_mass(10.0), TidalForce::High);
        assert_eq!(TidalForce::from_mass(20.0), TidalForce::High);
        assert_eq!(TidalForce::from_mass(20.1), TidalForce::VeryHigh);
        assert_eq!(TidalForce::from_mass(50.0), TidalForce::VeryHigh);
        assert_eq!(TidalForce::from_mass(50.1), TidalForce::Extreme);
        assert_eq!(TidalForce::from_mass(60.0), TidalForce::Extreme);
    }

    #[test]
    fn test_derived_consistent_with_params() {
        let params = BlackHoleParams::default();
        let d = Derived::from_params(&params);
        assert_eq!(d.radius_km, schwarzschild_radius_km(params.mass));
        assert_eq!(d.area_km2, horizon_area_km2(d.radius_km));
        assert_eq!(d.tidal, TidalForce::High);
    }
}
