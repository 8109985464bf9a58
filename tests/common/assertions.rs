use approx::assert_relative_eq;
use bumblebee::TimeSeries;

/// Assert that every channel has the same length and only finite values
#[track_caller]
pub fn assert_series_valid(series: &TimeSeries) {
    let n = series.len();
    assert!(n >= 2, "Series has only {} samples", n);

    for (name, values) in series.channels() {
        assert_eq!(values.len(), n, "Channel {} has mismatched length", name);
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            panic!("Channel {} is not finite at sample {}: {}", name, i, values[i]);
        }
    }
}

/// Assert the time grid starts at zero, ends at `t_end` and is strictly increasing
/// with a uniform step
#[track_caller]
pub fn assert_uniform_grid(series: &TimeSeries, t_end: f64) {
    let dt = series.dt();
    assert_eq!(series.t[0], 0.0, "Grid must start at t = 0");
    assert!(
        (series.t[series.len() - 1] - t_end).abs() <= dt,
        "Grid end {} is not within one step of {}",
        series.t[series.len() - 1],
        t_end
    );

    for pair in series.t.windows(2) {
        assert!(pair[1] > pair[0], "Time is not strictly increasing");
        assert_relative_eq!(pair[1] - pair[0], dt, epsilon = 1e-12);
    }
}

/// Assert that efficiency stays inside [0, 1]
#[track_caller]
pub fn assert_efficiency_bounded(series: &TimeSeries) {
    for (i, eta) in series.eta.iter().enumerate() {
        assert!(
            (0.0..=1.0).contains(eta),
            "Efficiency {} out of bounds at sample {}",
            eta,
            i
        );
    }
}
