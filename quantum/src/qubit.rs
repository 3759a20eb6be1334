//! Single-qubit states and gates
//!
//! States are restricted to real amplitudes, which is enough for the H, X,
//! and Z gates the demo exposes. Amplitudes are kept normalized so the
//! measurement probabilities always sum to one.

use std::f64::consts::FRAC_1_SQRT_2;

/// |ψ⟩ = α|0⟩ + β|1⟩ with real α, β
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Qubit {
    pub alpha: f64,
    pub beta: f64,
}

/// The gates the demo can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Hadamard,
    PauliX,
    PauliZ,
}

impl Qubit {
    /// |0⟩ state
    pub const ZERO: Qubit = Qubit {
        alpha: 1.0,
        beta: 0.0,
    };

    /// |1⟩ state
    pub const ONE: Qubit = Qubit {
        alpha: 0.0,
        beta: 1.0,
    };

    /// |+⟩ = (|0⟩ + |1⟩)/√2
    pub fn plus() -> Self {
        Self {
            alpha: FRAC_1_SQRT_2,
            beta: FRAC_1_SQRT_2,
        }
    }

    /// |−⟩ = (|0⟩ − |1⟩)/√2
    pub fn minus() -> Self {
        Self {
            alpha: FRAC_1_SQRT_2,
            beta: -FRAC_1_SQRT_2,
        }
    }

    /// Probability of measuring |0⟩
    pub fn prob_zero(&self) -> f64 {
        self.alpha * self.alpha
    }

    /// Probability of measuring |1⟩
    pub fn prob_one(&self) -> f64 {
        self.beta * self.beta
    }

    pub fn apply(&mut self, gate: Gate) {
        match gate {
            Gate::Hadamard => {
                let new_alpha = (self.alpha + self.beta) * FRAC_1_SQRT_2;
                let new_beta = (self.alpha - self.beta) * FRAC_1_SQRT_2;
                self.alpha = new_alpha;
                self.beta = new_beta;
            }
            Gate::PauliX => std::mem::swap(&mut self.alpha, &mut self.beta),
            Gate::PauliZ => self.beta = -self.beta,
        }
    }

    /// Run a gate sequence starting from |0⟩
    pub fn from_sequence(gates: &[Gate]) -> Self {
        let mut q = Self::ZERO;
        for &gate in gates {
            q.apply(gate);
        }
        q
    }

    pub fn normalize(&mut self) {
        let norm = (self.alpha * self.alpha + self.beta * self.beta).sqrt();
        if norm > 1e-12 {
            self.alpha /= norm;
            self.beta /= norm;
        }
    }

    /// Human-readable state label for the panel
    pub fn label(&self) -> String {
        let eps = 1e-9;
        if (self.alpha - 1.0).abs() < eps && self.beta.abs() < eps {
            "|0⟩".to_string()
        } else if self.alpha.abs() < eps && (self.beta.abs() - 1.0).abs() < eps {
            "|1⟩".to_string()
        } else if (self.alpha - FRAC_1_SQRT_2).abs() < eps
            && (self.beta - FRAC_1_SQRT_2).abs() < eps
        {
            "|+⟩".to_string()
        } else if (self.alpha - FRAC_1_SQRT_2).abs() < eps
            && (self.beta + FRAC_1_SQRT_2).abs() < eps
        {
            "|−⟩".to_string()
        } else {
            format!("{:.2}|0⟩ + {:.2}|1⟩", self.alpha, self.beta)
        }
    }
}

impl Default for Qubit {
    fn default() -> Self {
        Self::ZERO
    }
}
