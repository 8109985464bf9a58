use serde::{Deserialize, Serialize};

use crate::{
    components::SimulationParameters,
    config::{ConfigError, EngineConfig, RequestDefaults},
    simulation::SimulationRun,
    sweep::{SweepBy, SweepMember, SweepRequest},
};

/// Single-run request as sent by clients. `pitch_amp` is in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimRequest {
    pub f: f64,
    pub pitch_amp: f64,
    pub t_end: f64,
    #[serde(default)]
    pub stroke_amp: Option<f64>,
}

impl SimRequest {
    pub fn to_parameters(&self, defaults: &RequestDefaults) -> SimulationParameters {
        SimulationParameters::new(
            self.f,
            self.stroke_amp.unwrap_or(defaults.stroke_amplitude_m),
            self.pitch_amp,
            self.t_end,
        )
    }
}

/// Sweep request as sent by clients. `sweep_type` is resolved into a [`SweepBy`] here,
/// once, before anything reaches the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepStepsRequest {
    pub sweep_type: String,
    pub base: f64,
    pub freq_hz: f64,
    pub pitch_deg: f64,
    pub step: f64,
    pub t_end: f64,
    #[serde(default)]
    pub stroke_amp: Option<f64>,
}

impl SweepStepsRequest {
    pub fn to_sweep(&self, defaults: &RequestDefaults) -> Result<SweepRequest, ConfigError> {
        let sweep = match self.sweep_type.as_str() {
            "pitch" => SweepBy::Pitch {
                base_deg: self.base,
                step_deg: self.step,
                frequency_hz: self.freq_hz,
            },
            "frequency" => SweepBy::Frequency {
                base_hz: self.base,
                step_hz: self.step,
                pitch_deg: self.pitch_deg,
            },
            other => return Err(ConfigError::InvalidSweepType(other.to_string())),
        };

        Ok(SweepRequest {
            sweep,
            stroke_amplitude_m: self.stroke_amp.unwrap_or(defaults.stroke_amplitude_m),
            t_end_s: self.t_end,
        })
    }
}

/// Enum representing commands sent to the server, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Run a single simulation.
    Simulate(SimRequest),
    /// Run a five-member sweep.
    Sweep(SweepStepsRequest),
    /// Report the engine configuration in use.
    Config,
    /// Close the connection.
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    Error,
}

/// Struct representing the response to a single command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run: Option<SimulationRun>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<Vec<SweepMember>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<EngineConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Response {
    fn ok() -> Self {
        Self {
            status: Status::Ok,
            run: None,
            sweep: None,
            config: None,
            message: None,
        }
    }

    pub fn run(run: SimulationRun) -> Self {
        Self {
            run: Some(run),
            ..Self::ok()
        }
    }

    pub fn sweep(members: Vec<SweepMember>) -> Self {
        Self {
            sweep: Some(members),
            ..Self::ok()
        }
    }

    pub fn config(config: EngineConfig) -> Self {
        Self {
            config: Some(config),
            ..Self::ok()
        }
    }

    pub fn closed() -> Self {
        Self {
            message: Some("closed".to_string()),
            ..Self::ok()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: Some(message.into()),
            ..Self::ok()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}
