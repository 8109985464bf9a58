use thiserror::Error;

/// Reasons a simulation is rejected before any sample is computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Invalid parameter '{name}' with value '{value}': {reason}")]
    Parameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("Requested {requested} samples exceeds the limit of {limit}")]
    ResourceLimit { requested: f64, limit: usize },
}

impl SimulationError {
    pub(crate) fn parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        SimulationError::Parameter {
            name,
            value,
            reason,
        }
    }

    /// Name of the offending parameter, if this is a parameter error.
    pub fn parameter_name(&self) -> Option<&'static str> {
        match self {
            SimulationError::Parameter { name, .. } => Some(name),
            SimulationError::ResourceLimit { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;

/// Checks that `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SimulationError::parameter(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(SimulationError::parameter(name, value, "must be > 0"));
    }
    Ok(())
}

/// Checks that `value` is finite and not negative.
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SimulationError::parameter(name, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(SimulationError::parameter(name, value, "must be >= 0"));
    }
    Ok(())
}

pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::parameter(name, value, "must be finite"))
    }
}
