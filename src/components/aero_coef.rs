use serde::{Deserialize, Serialize};

use crate::error::{require_finite, Result, SimulationError};

/// Flat-plate quasi-steady coefficient fit for high angle-of-attack flapping flight.
///
/// `C_L(α) = a·sin(2α)` and `C_D(α) = b − c·cos(2α)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatPlateCoefficients {
    /// Lift amplitude.
    pub a: f64,
    /// Mean drag coefficient.
    pub b: f64,
    /// Drag modulation with angle of attack.
    pub c: f64,
}

impl FlatPlateCoefficients {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Robotic-wing fit, peak `C_L` 1.8 at 45°, `C_D` spanning 0.4 to 3.4.
    pub fn robofly() -> Self {
        Self::new(1.8, 1.9, 1.5)
    }

    /// Softer fit used for dragonfly-like 2D plates, `C_D` spanning 0.4 to 2.4.
    pub fn thin_plate() -> Self {
        Self::new(1.2, 1.4, 1.0)
    }

    #[inline]
    pub fn lift(&self, alpha: f64) -> f64 {
        self.a * (2.0 * alpha).sin()
    }

    #[inline]
    pub fn drag(&self, alpha: f64) -> f64 {
        self.b - self.c * (2.0 * alpha).cos()
    }

    /// Drag must stay non-negative over every angle of attack, i.e. `b ≥ |c|`.
    pub fn validate(&self) -> Result<()> {
        require_finite("coefficients.a", self.a)?;
        require_finite("coefficients.b", self.b)?;
        require_finite("coefficients.c", self.c)?;
        if self.b < self.c.abs() {
            return Err(SimulationError::parameter(
                "coefficients.b",
                self.b,
                "must be >= |coefficients.c| so drag never goes negative",
            ));
        }
        Ok(())
    }
}

impl Default for FlatPlateCoefficients {
    fn default() -> Self {
        Self::robofly()
    }
}
