use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::WingEnvironment;
use crate::error::{require_non_negative, Result};

mod builder;
mod errors;
mod sampling;

pub use builder::EngineConfigBuilder;
pub use errors::ConfigError;
pub use sampling::{SamplingLimits, MIN_SAMPLES_PER_CYCLE};

/// Named wing/fluid presets selectable from config files and requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WingPreset {
    Bumblebee,
    Hawkmoth,
    FruitFly,
}

impl WingPreset {
    pub fn environment(self) -> WingEnvironment {
        match self {
            WingPreset::Bumblebee => WingEnvironment::bumblebee(),
            WingPreset::Hawkmoth => WingEnvironment::hawkmoth(),
            WingPreset::FruitFly => WingEnvironment::fruit_fly(),
        }
    }
}

/// Values filled in when a request omits them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequestDefaults {
    pub stroke_amplitude_m: f64,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            stroke_amplitude_m: 0.01,
        }
    }
}

/// Immutable engine configuration passed explicitly into every simulation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub environment: WingEnvironment,
    pub limits: SamplingLimits,
    pub defaults: RequestDefaults,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        self.environment.validate()?;
        self.limits.validate()?;
        require_non_negative("defaults.stroke_amplitude_m", self.defaults.stroke_amplitude_m)
    }

    /// Loads a configuration from a YAML file.
    ///
    /// # Arguments
    /// * `path` - Path to the YAML configuration file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&file_contents)
    }

    pub fn from_yaml_str(yaml: &str) -> std::result::Result<Self, ConfigError> {
        EngineConfigBuilder::from_yaml(yaml)?.build()
    }
}
