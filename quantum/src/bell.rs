//! Bell state correlations and the CHSH inequality
//!
//! For the singlet state the correlation between measurements at analyzer
//! angles a and b is E(a, b) = −cos(a − b). The CHSH combination of four
//! angle pairs is bounded by 2 for any local hidden-variable model; quantum
//! mechanics reaches 2√2 at the optimal angles.

use rand::Rng;
use std::f64::consts::PI;

/// Singlet-state correlation for analyzer angles in radians
pub fn correlation(a: f64, b: f64) -> f64 {
    -(a - b).cos()
}

/// The four analyzer angles of a CHSH run
#[derive(Debug, Clone, Copy)]
pub struct ChshAngles {
    pub a1: f64,
    pub a2: f64,
    pub b1: f64,
    pub b2: f64,
}

impl ChshAngles {
    /// Angles maximizing the quantum value: 0°, 45°, 22.5°, 67.5°
    pub const OPTIMAL: ChshAngles = ChshAngles {
        a1: 0.0,
        a2: PI / 4.0,
        b1: PI / 8.0,
        b2: 3.0 * PI / 8.0,
    };
}

/// CHSH parameter S = |E(a1,b1) − E(a1,b2) + E(a2,b1) + E(a2,b2)|
pub fn chsh_parameter(angles: &ChshAngles) -> f64 {
    (correlation(angles.a1, angles.b1) - correlation(angles.a1, angles.b2)
        + correlation(angles.a2, angles.b1)
        + correlation(angles.a2, angles.b2))
    .abs()
}

/// True when S exceeds the classical bound of 2
pub fn violates_classical_bound(s: f64) -> bool {
    s > 2.0
}

/// Monte Carlo estimate of E(a, b) from `samples` measurement pairs.
/// Each pair yields a ±1 product with P(+1) = (1 + E)/2.
pub fn estimate_correlation(a: f64, b: f64, samples: u32, rng: &mut impl Rng) -> f64 {
    let e = correlation(a, b);
    let p_agree = (1.0 + e) / 2.0;

    let mut sum = 0i64;
    for _ in 0..samples {
        if rng.gen::<f64>() < p_agree {
            sum += 1;
        } else {
            sum -= 1;
        }
    }
    sum as f64 / samples as f64
}

/// Finite-sample CHSH estimate, `samples` pairs per angle setting
pub fn estimate_chsh(angles: &ChshAngles, samples: u32, rng: &mut impl Rng) -> f64 {
    (estimate_correlation(angles.a1, angles.b1, samples, rng)
        - estimate_correlation(angles.a1, angles.b2, samples, rng)
        + estimate_correlation(angles.a2, angles.b1, samples, rng)
        + estimate_correlation(angles.a2, angles.b2, samples, rng))
    .abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_correlation_extremes() {
        // Aligned analyzers anti-correlate perfectly
        assert!((correlation(0.3, 0.3) + 1.0).abs() < 1e-12);
        // Opposite analyzers correlate perfectly
        assert!((correlation(0.0, PI) - 1.0).abs() < 1e-12);
        // Orthogonal analyzers are uncorrelated
        assert!(correlation(0.0, PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_optimal_angles_reach_tsirelson_bound() {
        let s = chsh_parameter(&ChshAngles::OPTIMAL);
        assert!((s - 2.0 * 2.0_f64.sqrt()).abs() < 1e-12);
        assert!(violates_classical_bound(s));
    }

    #[test]
    fn test_aligned_angles_stay_classical() {
        let angles = ChshAngles {
            a1: 0.0,
            a2: 0.0,
            b1: 0.0,
            b2: 0.0,
        };
        let s = chsh_parameter(&angles);
        assert!(!violates_classical_bound(s));
    }

    #[test]
    fn test_estimator_converges() {
        let mut rng = StdRng::seed_from_u64(42);
        let e = estimate_correlation(0.0, PI / 8.0, 200_000, &mut rng);
        let exact = correlation(0.0, PI / 8.0);
        assert!((e - exact).abs() < 0.01);
    }

    #[test]
    fn test_sampled_chsh_violates_bound() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = estimate_chsh(&ChshAngles::OPTIMAL, 200_000, &mut rng);
        assert!((s - 2.0 * 2.0_f64.sqrt()).abs() < 0.05);
        assert!(violates_classical_bound(s));
    }
}
