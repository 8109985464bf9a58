use serde::{Deserialize, Serialize};

use super::{AeroLoads, KinematicState, PowerSample};

/// Equal-length output channels sharing the sample index `i = 0..N-1`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub t: Vec<f64>,
    pub x_pos: Vec<f64>,
    pub theta_deg: Vec<f64>,
    #[serde(rename = "L")]
    pub lift: Vec<f64>,
    #[serde(rename = "D")]
    pub drag: Vec<f64>,
    #[serde(rename = "P")]
    pub power: Vec<f64>,
    pub eta: Vec<f64>,
}

impl TimeSeries {
    pub fn with_capacity(samples: usize) -> Self {
        Self {
            t: Vec::with_capacity(samples),
            x_pos: Vec::with_capacity(samples),
            theta_deg: Vec::with_capacity(samples),
            lift: Vec::with_capacity(samples),
            drag: Vec::with_capacity(samples),
            power: Vec::with_capacity(samples),
            eta: Vec::with_capacity(samples),
        }
    }

    /// Appends one sample to every channel. Pitch is stored in degrees.
    pub fn push(&mut self, kin: &KinematicState, loads: &AeroLoads, power: &PowerSample) {
        self.t.push(kin.t);
        self.x_pos.push(kin.x);
        self.theta_deg.push(kin.theta.to_degrees());
        self.lift.push(loads.lift);
        self.drag.push(loads.drag);
        self.power.push(power.total);
        self.eta.push(power.efficiency);
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Uniform sample step, or 0 for fewer than two samples.
    pub fn dt(&self) -> f64 {
        match self.t.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        }
    }

    /// Channels in a fixed order with their display names.
    pub fn channels(&self) -> [(&'static str, &[f64]); 7] {
        [
            ("t", self.t.as_slice()),
            ("x_pos", self.x_pos.as_slice()),
            ("theta_deg", self.theta_deg.as_slice()),
            ("L", self.lift.as_slice()),
            ("D", self.drag.as_slice()),
            ("P", self.power.as_slice()),
            ("eta", self.eta.as_slice()),
        ]
    }

    pub fn all_finite(&self) -> bool {
        self.channels()
            .iter()
            .all(|(_, values)| values.iter().all(|v| v.is_finite()))
    }
}

/// Aggregates over a completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub samples: usize,
    pub completed_cycles: u64,
    pub peak_stroke_m: f64,
    pub peak_pitch_deg: f64,
    pub mean_lift: f64,
    pub mean_drag: f64,
    pub mean_power: f64,
    pub mean_efficiency: f64,
}

impl SeriesSummary {
    /// Time averages use the trapezoidal rule, accumulated in increasing time order.
    pub fn from_series(series: &TimeSeries, frequency_hz: f64) -> Self {
        let duration = series.t.last().copied().unwrap_or(0.0);
        let completed_cycles = (duration * frequency_hz + 1e-9).floor().max(0.0) as u64;

        Self {
            samples: series.len(),
            completed_cycles,
            peak_stroke_m: peak_abs(&series.x_pos),
            peak_pitch_deg: peak_abs(&series.theta_deg),
            mean_lift: time_average(&series.t, &series.lift),
            mean_drag: time_average(&series.t, &series.drag),
            mean_power: time_average(&series.t, &series.power),
            mean_efficiency: time_average(&series.t, &series.eta),
        }
    }
}

fn peak_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
}

fn time_average(t: &[f64], values: &[f64]) -> f64 {
    let duration = match (t.first(), t.last()) {
        (Some(first), Some(last)) if last > first => last - first,
        _ => return values.first().copied().unwrap_or(0.0),
    };

    let area: f64 = t
        .windows(2)
        .zip(values.windows(2))
        .map(|(ts, vs)| 0.5 * (vs[0] + vs[1]) * (ts[1] - ts[0]))
        .sum();
    area / duration
}
