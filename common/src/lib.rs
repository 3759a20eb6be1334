//! Common utilities for the physics visualizations
//!
//! This crate provides the shared graphics bootstrap, the orbital camera with
//! its control strategies, and the physical constants used by the individual
//! visualization binaries.

pub mod graphics;
pub mod camera;

pub use graphics::*;
pub use camera::*;

/// Physical constants in SI units
///
/// Geometry sizing and textual readouts both go through these values, so the
/// rendered scale and the displayed numbers cannot diverge.
pub mod constants {
    /// Gravitational constant, m³/(kg·s²)
    pub const G: f64 = 6.6743e-11;

    /// Speed of light, m/s
    pub const C: f64 = 299_792_458.0;

    /// Reduced Planck constant, J·s
    pub const HBAR: f64 = 1.054_571_817e-34;

    /// Boltzmann constant, J/K
    pub const K_B: f64 = 1.380_649e-23;

    /// Solar mass, kg
    pub const M_SUN: f64 = 1.989e30;

    /// Electron volt, J
    pub const EV: f64 = 1.602_176_634e-19;

    /// Electron mass, kg
    pub const M_ELECTRON: f64 = 9.109_383_7015e-31;

    /// Seconds in a Julian year
    pub const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 3600.0;
}
