use serde::{Deserialize, Serialize};

use crate::error::{require_positive, Result, SimulationError};

/// Fewest samples per flap cycle that resolve the sinusoidal kinematics without aliasing.
/// Configured values below this are raised to it.
pub const MIN_SAMPLES_PER_CYCLE: usize = 64;

/// Time-grid policy for the driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingLimits {
    pub samples_per_cycle: usize,
    /// Floor on the total sample count for horizons shorter than a few cycles.
    pub min_samples: usize,
    /// Hard cap on the total sample count (N_max).
    pub max_samples: usize,
    /// Lower bound on input power (W), keeps the efficiency ratio defined.
    pub power_floor: f64,
}

impl SamplingLimits {
    /// Per-cycle resolution actually used, never below `MIN_SAMPLES_PER_CYCLE`.
    pub fn effective_samples_per_cycle(&self) -> usize {
        self.samples_per_cycle.max(MIN_SAMPLES_PER_CYCLE)
    }

    /// Number of grid points for a horizon spanning `cycles` flap cycles.
    ///
    /// Evaluated in floating point so that absurd inputs are rejected before any
    /// integer conversion or allocation happens.
    pub fn sample_count(&self, cycles: f64) -> Result<usize> {
        let per_cycle = self.effective_samples_per_cycle() as f64;
        let required = (cycles * per_cycle).ceil() + 1.0;

        // f64::max would swallow a NaN, so the finiteness check comes first.
        if !required.is_finite() {
            return Err(self.over_limit(required));
        }
        let required = required.max(self.min_samples.max(2) as f64);
        if required > self.max_samples as f64 {
            return Err(self.over_limit(required));
        }
        Ok(required as usize)
    }

    fn over_limit(&self, requested: f64) -> SimulationError {
        SimulationError::ResourceLimit {
            requested,
            limit: self.max_samples,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("power_floor", self.power_floor)?;
        if self.max_samples < self.min_samples.max(2) {
            return Err(SimulationError::parameter(
                "max_samples",
                self.max_samples as f64,
                "must be >= min_samples and >= 2",
            ));
        }
        Ok(())
    }
}

impl Default for SamplingLimits {
    fn default() -> Self {
        Self {
            samples_per_cycle: MIN_SAMPLES_PER_CYCLE,
            min_samples: 256,
            max_samples: 1_000_000,
            power_floor: 1e-12,
        }
    }
}
