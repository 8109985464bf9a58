use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use super::FlatPlateCoefficients;
use crate::error::{require_finite, require_non_negative, require_positive, Result};

/// Fixed wing and fluid constants, supplied independently of the per-run parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WingEnvironment {
    /// Fluid density (kg/m³).
    pub fluid_density: f64,
    /// Mean chord (m).
    pub chord: f64,
    /// Wing length from root to tip (m).
    pub span: f64,
    /// Distance between the pitch axis and the centre of pressure (m).
    pub pivot_offset: f64,
    /// Phase of pitch relative to stroke (rad). A quarter cycle leads by π/2.
    pub pitch_phase: f64,
    pub coefficients: FlatPlateCoefficients,
}

impl WingEnvironment {
    /// Creates a new `WingEnvironment` in sea-level air with a quarter-cycle pitch lead.
    ///
    /// # Arguments
    /// * `chord` - Mean chord (m).
    /// * `span` - Wing length (m).
    /// * `pivot_offset` - Pitch axis to centre of pressure (m).
    pub fn new(chord: f64, span: f64, pivot_offset: f64) -> Self {
        Self {
            fluid_density: 1.225,
            chord,
            span,
            pivot_offset,
            pitch_phase: FRAC_PI_2,
            coefficients: FlatPlateCoefficients::default(),
        }
    }

    pub fn bumblebee() -> Self {
        Self::new(0.004, 0.013, 0.001)
    }

    pub fn hawkmoth() -> Self {
        Self::new(0.018, 0.048, 0.0045)
    }

    pub fn fruit_fly() -> Self {
        Self::new(0.0009, 0.0025, 0.0002)
    }

    pub fn with_fluid_density(self, fluid_density: f64) -> Self {
        Self {
            fluid_density,
            ..self
        }
    }

    pub fn with_pitch_phase(self, pitch_phase: f64) -> Self {
        Self {
            pitch_phase,
            ..self
        }
    }

    pub fn with_coefficients(self, coefficients: FlatPlateCoefficients) -> Self {
        Self {
            coefficients,
            ..self
        }
    }

    /// Planform area `S = chord × span` (m²).
    #[inline]
    pub fn planform_area(&self) -> f64 {
        self.chord * self.span
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("fluid_density", self.fluid_density)?;
        require_positive("chord", self.chord)?;
        require_positive("span", self.span)?;
        require_non_negative("pivot_offset", self.pivot_offset)?;
        require_finite("pitch_phase", self.pitch_phase)?;
        self.coefficients.validate()
    }
}

impl Default for WingEnvironment {
    fn default() -> Self {
        Self::bumblebee()
    }
}
