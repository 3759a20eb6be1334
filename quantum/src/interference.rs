//! Double-slit interference
//!
//! Fringe intensity on a distant screen, small-angle regime. Turning on
//! which-path detection destroys the interference term and flattens the
//! pattern to the classical average.

use std::f64::consts::PI;

/// Double-slit geometry: wavelength and slit separation in the same length
/// unit, screen distance in that unit too.
#[derive(Debug, Clone, Copy)]
pub struct DoubleSlit {
    pub wavelength: f64,
    pub slit_separation: f64,
    pub screen_distance: f64,
}

impl DoubleSlit {
    /// Path phase difference at screen position x (small angles)
    pub fn phase_at(&self, x: f64) -> f64 {
        2.0 * PI * self.slit_separation * x / (self.wavelength * self.screen_distance)
    }

    /// Spacing between adjacent bright fringes, λL/d
    pub fn fringe_spacing(&self) -> f64 {
        self.wavelength * self.screen_distance / self.slit_separation
    }

    /// Normalized intensity at x. With which-path detection the
    /// interference term vanishes and the screen is uniform at 1/2.
    pub fn intensity_at(&self, x: f64, which_path: bool) -> f64 {
        let v = visibility(which_path);
        (1.0 + v * self.phase_at(x).cos()) / 2.0
    }
}

/// Intensity for a bare phase difference, cos²(φ/2)
pub fn fringe_intensity(phase: f64) -> f64 {
    let half = (phase / 2.0).cos();
    half * half
}

/// Fringe visibility: 1 without which-path information, 0 with it
pub fn visibility(which_path: bool) -> f64 {
    if which_path {
        0.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 500 nm light, 10 µm slits, 1 m screen, all in meters
    fn setup() -> DoubleSlit {
        DoubleSlit {
            wavelength: 500e-9,
            slit_separation: 10e-6,
            screen_distance: 1.0,
        }
    }

    #[test]
    fn test_central_fringe_is_bright() {
        let slit = setup();
        assert!((slit.intensity_at(0.0, false) - 1.0).abs() < 1e-12);
        assert!((fringe_intensity(0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_dark_fringe_between_maxima() {
        let slit = setup();
        let x = slit.fringe_spacing() / 2.0;
        assert!(slit.intensity_at(x, false) < 1e-9);
        assert!(fringe_intensity(PI) < 1e-12);
    }

    #[test]
    fn test_fringe_spacing() {
        let slit = setup();
        // λL/d = 500e-9 / 10e-6 = 5e-2 m
        assert!((slit.fringe_spacing() - 0.05).abs() < 1e-12);
        // Pattern repeats with that period
        let a = slit.intensity_at(0.013, false);
        let b = slit.intensity_at(0.013 + slit.fringe_spacing(), false);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_which_path_detection_flattens_pattern() {
        let slit = setup();
        for i in 0..50 {
            let x = -0.1 + 0.004 * i as f64;
            assert!((slit.intensity_at(x, true) - 0.5).abs() < 1e-12);
        }
        assert_eq!(visibility(true), 0.0);
        assert_eq!(visibility(false), 1.0);
    }

    #[test]
    fn test_half_phase_identity() {
        // (1 + cos φ)/2 = cos²(φ/2)
        for i in 0..20 {
            let phase = 0.37 * i as f64;
            let direct = fringe_intensity(phase);
            let expanded = (1.0 + phase.cos()) / 2.0;
            assert!((direct - expanded).abs() < 1e-12);
        }
    }
}
