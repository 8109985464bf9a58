//! Orchestrates kinematics, aerodynamics and power over a uniform time grid.
//!
//! The engine is a pure function of its inputs: no state survives between calls, so
//! independent runs may execute in parallel without synchronization.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::components::{SeriesSummary, SimulationParameters, TimeSeries, WingEnvironment};
use crate::config::{EngineConfig, SamplingLimits};
use crate::error::{Result, SimulationError};
use crate::systems::{calculate_aero_loads, calculate_power, StrokeKinematics};

/// A completed run together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    pub parameters: SimulationParameters,
    pub series: TimeSeries,
    pub summary: SeriesSummary,
}

/// Borrowed view of the constants one simulation needs.
#[derive(Debug, Clone, Copy)]
pub struct SimulationDriver<'a> {
    environment: &'a WingEnvironment,
    limits: &'a SamplingLimits,
}

impl<'a> SimulationDriver<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self {
            environment: &config.environment,
            limits: &config.limits,
        }
    }

    /// Runs one simulation. All-or-nothing: input errors are raised before any array
    /// is allocated and no partial series is ever returned.
    pub fn simulate(&self, params: &SimulationParameters) -> Result<TimeSeries> {
        let samples = self.prepare(params)?;
        let t_end = params.t_end_s;
        let last = (samples - 1) as f64;

        debug!(
            frequency_hz = params.frequency_hz,
            t_end_s = t_end,
            samples,
            dt = t_end / last,
            cycles = params.cycles(),
            "Simulating flapping wing"
        );

        let kinematics = StrokeKinematics::new(params, self.environment);
        let mut series = TimeSeries::with_capacity(samples);

        for i in 0..samples {
            // Scaling by the index keeps t[N-1] == t_end without accumulated drift.
            let t = t_end * (i as f64 / last);
            let state = kinematics.at(t);
            let loads = calculate_aero_loads(self.environment, &state);
            let power =
                calculate_power(self.environment, &state, &loads, self.limits.power_floor);
            series.push(&state, &loads, &power);
        }

        Ok(series)
    }

    /// Runs one simulation and attaches its summary.
    pub fn run(&self, params: &SimulationParameters) -> Result<SimulationRun> {
        let series = self.simulate(params)?;
        let summary = SeriesSummary::from_series(&series, params.frequency_hz);
        Ok(SimulationRun {
            parameters: *params,
            series,
            summary,
        })
    }

    /// Validates inputs and returns the number of grid points.
    fn prepare(&self, params: &SimulationParameters) -> Result<usize> {
        let checked = params
            .validate()
            .and_then(|_| self.environment.validate())
            .and_then(|_| self.limits.validate())
            .and_then(|_| check_peak_loads(params, self.environment))
            .and_then(|_| self.limits.sample_count(params.cycles()));

        checked.map_err(|err| {
            warn!(%err, ?params, "Rejected simulation request");
            err
        })
    }
}

/// Rejects motions whose peak loads or power would overflow `f64`.
///
/// Every sample is bounded by the values at peak stroke speed and peak pitch rate, so
/// a finite peak (with headroom for the pairwise sums in the summary) keeps every
/// output channel finite.
fn check_peak_loads(
    params: &SimulationParameters,
    environment: &WingEnvironment,
) -> Result<()> {
    let omega = params.angular_frequency();
    if !omega.is_finite() {
        return Err(SimulationError::parameter(
            "frequency_hz",
            params.frequency_hz,
            "angular frequency overflows",
        ));
    }

    let coeffs = &environment.coefficients;
    let peak_coefficient = coeffs.a.abs().max(coeffs.b + coeffs.c.abs());
    let peak_speed = omega * params.stroke_amplitude_m;
    let peak_force = 0.5
        * environment.fluid_density
        * peak_speed
        * peak_speed
        * environment.planform_area()
        * peak_coefficient;
    let peak_pitch_rate = omega * params.pitch_amplitude_rad.abs();
    let peak_power = peak_force * (peak_speed + environment.pivot_offset * peak_pitch_rate);

    if !(2.0 * peak_power * params.t_end_s.max(1.0)).is_finite() {
        return Err(SimulationError::parameter(
            "stroke_amplitude_m",
            params.stroke_amplitude_m,
            "peak aerodynamic power overflows at this frequency",
        ));
    }
    Ok(())
}

/// Convenience wrapper for a single run with `config`.
pub fn simulate(params: &SimulationParameters, config: &EngineConfig) -> Result<TimeSeries> {
    SimulationDriver::new(config).simulate(params)
}
