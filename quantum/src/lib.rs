//! Quantum Mechanics Formulas
//!
//! Closed-form physics behind the quantum demos:
//!
//! - **Qubit gates**: single-qubit states and the H, X, Z gates
//! - **Bell / CHSH**: entanglement correlations and the CHSH inequality
//! - **Tunneling**: rectangular-barrier transmission coefficient
//! - **Uncertainty**: the Heisenberg position-momentum bound
//! - **Interference**: double-slit fringes and which-path visibility

pub mod bell;
pub mod interference;
pub mod qubit;
pub mod tunneling;
pub mod uncertainty;
