//! Heisenberg position-momentum uncertainty
//!
//! Δx·Δp ≥ ħ/2, with equality for a minimum-uncertainty Gaussian packet.
//! SI units throughout.

use common::constants::HBAR;

/// The lower bound ħ/2 in J·s
pub fn heisenberg_bound() -> f64 {
    HBAR / 2.0
}

/// The uncertainty product Δx·Δp
pub fn uncertainty_product(delta_x: f64, delta_p: f64) -> f64 {
    delta_x * delta_p
}

/// How far above the bound the product sits (1.0 = minimum uncertainty)
pub fn bound_ratio(delta_x: f64, delta_p: f64) -> f64 {
    uncertainty_product(delta_x, delta_p) / heisenberg_bound()
}

/// Whether the pair is physically allowed
pub fn satisfies_bound(delta_x: f64, delta_p: f64) -> bool {
    uncertainty_product(delta_x, delta_p) >= heisenberg_bound() * (1.0 - 1e-12)
}

/// Minimum momentum spread conjugate to a given position spread
pub fn min_momentum_spread(delta_x: f64) -> f64 {
    heisenberg_bound() / delta_x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_uncertainty_pair_sits_on_bound() {
        let dx = 1e-10; // an ångström
        let dp = min_momentum_spread(dx);
        assert!((bound_ratio(dx, dp) - 1.0).abs() < 1e-12);
        assert!(satisfies_bound(dx, dp));
    }

    #[test]
    fn test_squeezing_position_widens_momentum() {
        let wide = min_momentum_spread(1e-9);
        let narrow = min_momentum_spread(1e-12);
        assert!(narrow > wide);
        assert!((narrow / wide - 1e3).abs() < 1e-6);
    }

    #[test]
    fn test_sub_bound_pair_rejected() {
        let dx = 1e-10;
        let dp = min_momentum_spread(dx) * 0.5;
        assert!(!satisfies_bound(dx, dp));
        assert!(bound_ratio(dx, dp) < 1.0);
    }

    #[test]
    fn test_bound_value() {
        assert!((heisenberg_bound() - 5.272_859_085e-35).abs() < 1e-40);
    }
}
