use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{
    require_finite, require_non_negative, require_positive, Result, SimulationError,
};

/// Largest accepted `|pitch_amplitude_rad|`. A half turn either way covers every
/// physically distinct wing orientation.
pub const MAX_PITCH_AMPLITUDE_RAD: f64 = PI;

/// Per-run motion parameters of the flapping wing.
///
/// Values are immutable once built; an override produces a new value via the
/// `with_*` methods rather than patching a shared default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Flap frequency (Hz).
    pub frequency_hz: f64,
    /// Peak stroke excursion (m).
    pub stroke_amplitude_m: f64,
    /// Peak pitch excursion (rad).
    pub pitch_amplitude_rad: f64,
    /// Simulation horizon (s).
    pub t_end_s: f64,
}

impl SimulationParameters {
    pub fn new(
        frequency_hz: f64,
        stroke_amplitude_m: f64,
        pitch_amplitude_rad: f64,
        t_end_s: f64,
    ) -> Self {
        Self {
            frequency_hz,
            stroke_amplitude_m,
            pitch_amplitude_rad,
            t_end_s,
        }
    }

    pub fn with_frequency(self, frequency_hz: f64) -> Self {
        Self {
            frequency_hz,
            ..self
        }
    }

    pub fn with_stroke_amplitude(self, stroke_amplitude_m: f64) -> Self {
        Self {
            stroke_amplitude_m,
            ..self
        }
    }

    pub fn with_pitch_amplitude(self, pitch_amplitude_rad: f64) -> Self {
        Self {
            pitch_amplitude_rad,
            ..self
        }
    }

    pub fn with_pitch_amplitude_deg(self, pitch_amplitude_deg: f64) -> Self {
        self.with_pitch_amplitude(pitch_amplitude_deg.to_radians())
    }

    pub fn with_t_end(self, t_end_s: f64) -> Self {
        Self { t_end_s, ..self }
    }

    /// Angular flap frequency ω = 2πf (rad/s).
    #[inline]
    pub fn angular_frequency(&self) -> f64 {
        2.0 * PI * self.frequency_hz
    }

    /// Number of flap cycles spanned by the horizon, possibly fractional.
    #[inline]
    pub fn cycles(&self) -> f64 {
        self.t_end_s * self.frequency_hz
    }

    /// Rejects parameters that would yield a degenerate or non-finite trajectory.
    pub fn validate(&self) -> Result<()> {
        require_positive("frequency_hz", self.frequency_hz)?;
        require_positive("t_end_s", self.t_end_s)?;
        require_non_negative("stroke_amplitude_m", self.stroke_amplitude_m)?;
        require_finite("pitch_amplitude_rad", self.pitch_amplitude_rad)?;
        if self.pitch_amplitude_rad.abs() > MAX_PITCH_AMPLITUDE_RAD {
            return Err(SimulationError::parameter(
                "pitch_amplitude_rad",
                self.pitch_amplitude_rad,
                "must be within [-pi, pi]",
            ));
        }
        Ok(())
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            frequency_hz: 150.0,
            stroke_amplitude_m: 0.01,
            pitch_amplitude_rad: PI / 4.0,
            t_end_s: 0.02,
        }
    }
}
