//! Discrete parameter sweeps around a nominal frequency or pitch amplitude.
//!
//! A sweep only consumes the public [`simulate`](crate::simulate) contract: each member is
//! an independent run with its own freshly built parameters.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::components::SimulationParameters;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::simulation::{SimulationDriver, SimulationRun};

/// Step offsets applied to the base value, in output order.
pub const SWEEP_OFFSETS: [f64; 5] = [-2.0, -1.0, 0.0, 1.0, 2.0];

/// Which quantity is stepped, with the value held fixed for the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum SweepBy {
    Pitch {
        base_deg: f64,
        step_deg: f64,
        frequency_hz: f64,
    },
    Frequency {
        base_hz: f64,
        step_hz: f64,
        pitch_deg: f64,
    },
}

impl SweepBy {
    /// Swept values `base + k·step` for `k = -2..=2`.
    pub fn values(&self) -> [f64; 5] {
        let (base, step) = match *self {
            SweepBy::Pitch {
                base_deg, step_deg, ..
            } => (base_deg, step_deg),
            SweepBy::Frequency {
                base_hz, step_hz, ..
            } => (base_hz, step_hz),
        };
        SWEEP_OFFSETS.map(|k| base + k * step)
    }

    pub fn unit(&self) -> &'static str {
        match self {
            SweepBy::Pitch { .. } => "deg",
            SweepBy::Frequency { .. } => "Hz",
        }
    }

    /// Builds a new parameter set for one swept value.
    fn parameters_for(
        &self,
        value: f64,
        stroke_amplitude_m: f64,
        t_end_s: f64,
    ) -> SimulationParameters {
        match *self {
            SweepBy::Pitch { frequency_hz, .. } => SimulationParameters::new(
                frequency_hz,
                stroke_amplitude_m,
                value.to_radians(),
                t_end_s,
            ),
            SweepBy::Frequency { pitch_deg, .. } => SimulationParameters::new(
                value,
                stroke_amplitude_m,
                pitch_deg.to_radians(),
                t_end_s,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRequest {
    pub sweep: SweepBy,
    pub stroke_amplitude_m: f64,
    pub t_end_s: f64,
}

impl SweepRequest {
    /// One parameter set per swept value, in value order.
    pub fn parameter_sets(&self) -> Vec<(f64, SimulationParameters)> {
        self.sweep
            .values()
            .iter()
            .map(|&value| {
                let params = self
                    .sweep
                    .parameters_for(value, self.stroke_amplitude_m, self.t_end_s);
                (value, params)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepMember {
    pub value: f64,
    pub unit: String,
    pub run: SimulationRun,
}

/// Runs every member of the sweep in parallel and returns them in value order.
///
/// Fails as a whole if any member is rejected; no partial sweep is returned.
pub fn run_sweep(request: &SweepRequest, config: &EngineConfig) -> Result<Vec<SweepMember>> {
    let driver = SimulationDriver::new(config);
    let unit = request.sweep.unit();

    request
        .parameter_sets()
        .into_par_iter()
        .map(|(value, params)| {
            debug!(value, unit, "Running sweep member");
            driver.run(&params).map(|run| SweepMember {
                value,
                unit: unit.to_string(),
                run,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pitch_values() {
        let sweep = SweepBy::Pitch {
            base_deg: 45.0,
            step_deg: 15.0,
            frequency_hz: 150.0,
        };
        assert_eq!(sweep.values(), [15.0, 30.0, 45.0, 60.0, 75.0]);
        assert_eq!(sweep.unit(), "deg");
    }

    #[test]
    fn test_frequency_parameter_sets() {
        let request = SweepRequest {
            sweep: SweepBy::Frequency {
                base_hz: 150.0,
                step_hz: 25.0,
                pitch_deg: 45.0,
            },
            stroke_amplitude_m: 0.01,
            t_end_s: 0.02,
        };
        let sets = request.parameter_sets();

        assert_eq!(sets.len(), 5);
        assert_relative_eq!(sets[0].1.frequency_hz, 100.0);
        assert_relative_eq!(sets[4].1.frequency_hz, 200.0);
        for (_, params) in &sets {
            assert_relative_eq!(
                params.pitch_amplitude_rad,
                std::f64::consts::FRAC_PI_4,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_invalid_member_fails_whole_sweep() {
        let request = SweepRequest {
            sweep: SweepBy::Frequency {
                base_hz: 10.0,
                step_hz: 10.0,
                pitch_deg: 45.0,
            },
            stroke_amplitude_m: 0.01,
            t_end_s: 0.02,
        };
        // Values are -10, 0, 10, 20, 30 Hz.
        let err = run_sweep(&request, &EngineConfig::default()).unwrap_err();
        assert_eq!(err.parameter_name(), Some("frequency_hz"));
    }

    #[test]
    fn test_serde_tag() {
        let sweep: SweepBy = serde_json::from_str(
            r#"{"by":"frequency","base_hz":100.0,"step_hz":10.0,"pitch_deg":30.0}"#,
        )
        .unwrap();
        assert!(matches!(sweep, SweepBy::Frequency { .. }));
    }
}
