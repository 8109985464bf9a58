use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{ConfigError, EngineConfig, RequestDefaults, SamplingLimits, WingPreset};
use crate::components::{FlatPlateCoefficients, WingEnvironment};

/// Flat, all-optional view of an [`EngineConfig`], as written in YAML files or JSON
/// requests. Anything left unset falls back to the preset (or the bumblebee default).
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfigBuilder {
    pub preset: Option<WingPreset>,
    pub fluid_density: Option<f64>,
    pub chord: Option<f64>,
    pub span: Option<f64>,
    pub pivot_offset: Option<f64>,
    pub pitch_phase_deg: Option<f64>,
    pub coefficients: Option<FlatPlateCoefficients>,
    pub samples_per_cycle: Option<usize>,
    pub min_samples: Option<usize>,
    pub max_samples: Option<usize>,
    pub power_floor: Option<f64>,
    pub stroke_amplitude_m: Option<f64>,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preset(mut self, preset: WingPreset) -> Self {
        self.preset = Some(preset);
        self
    }

    pub fn fluid_density(mut self, rho: f64) -> Self {
        self.fluid_density = Some(rho);
        self
    }

    pub fn pitch_phase_deg(mut self, phase: f64) -> Self {
        self.pitch_phase_deg = Some(phase);
        self
    }

    pub fn coefficients(mut self, coefficients: FlatPlateCoefficients) -> Self {
        self.coefficients = Some(coefficients);
        self
    }

    pub fn max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = Some(max_samples);
        self
    }

    pub fn stroke_amplitude_m(mut self, stroke: f64) -> Self {
        self.stroke_amplitude_m = Some(stroke);
        self
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        if !value.is_object() {
            return Err(ConfigError::invalid("config", value));
        }
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        let base = self
            .preset
            .map(WingPreset::environment)
            .unwrap_or_else(WingEnvironment::default);

        let environment = WingEnvironment {
            fluid_density: self.fluid_density.unwrap_or(base.fluid_density),
            chord: self.chord.unwrap_or(base.chord),
            span: self.span.unwrap_or(base.span),
            pivot_offset: self.pivot_offset.unwrap_or(base.pivot_offset),
            pitch_phase: self
                .pitch_phase_deg
                .map(f64::to_radians)
                .unwrap_or(base.pitch_phase),
            coefficients: self.coefficients.unwrap_or(base.coefficients),
        };

        let default_limits = SamplingLimits::default();
        let limits = SamplingLimits {
            samples_per_cycle: self
                .samples_per_cycle
                .unwrap_or(default_limits.samples_per_cycle),
            min_samples: self.min_samples.unwrap_or(default_limits.min_samples),
            max_samples: self.max_samples.unwrap_or(default_limits.max_samples),
            power_floor: self.power_floor.unwrap_or(default_limits.power_floor),
        };

        let defaults = RequestDefaults {
            stroke_amplitude_m: self
                .stroke_amplitude_m
                .unwrap_or(RequestDefaults::default().stroke_amplitude_m),
        };

        let config = EngineConfig {
            environment,
            limits,
            defaults,
        };
        config.validate()?;
        debug!(?config, "Built engine config");
        Ok(config)
    }
}
