mod common;

use approx::assert_relative_eq;
use bumblebee::{run_sweep, SweepBy, SweepRequest};

use crate::common::{
    assert_efficiency_bounded, assert_series_valid, assert_uniform_grid, create_test_config,
};

#[test]
fn test_scenario_b_pitch_sweep() {
    let config = create_test_config();
    let request = SweepRequest {
        sweep: SweepBy::Pitch {
            base_deg: 45.0,
            step_deg: 15.0,
            frequency_hz: 150.0,
        },
        stroke_amplitude_m: 0.01,
        t_end_s: 0.02,
    };

    let members = run_sweep(&request, &config).unwrap();
    let values: Vec<f64> = members.iter().map(|m| m.value).collect();
    assert_eq!(values, vec![15.0, 30.0, 45.0, 60.0, 75.0]);

    for member in &members {
        assert_eq!(member.unit, "deg");
        assert_series_valid(&member.run.series);
        assert_uniform_grid(&member.run.series, 0.02);
        assert_efficiency_bounded(&member.run.series);
        assert_relative_eq!(
            member.run.parameters.pitch_amplitude_rad,
            member.value.to_radians(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            member.run.summary.peak_pitch_deg,
            member.value,
            max_relative = 1e-9
        );
    }

    // Lift coefficient peaks at 45°, and 15°/75° are symmetric about it.
    let mean_lift: Vec<f64> = members.iter().map(|m| m.run.summary.mean_lift).collect();
    assert!(mean_lift[2] > mean_lift[0]);
    assert!(mean_lift[2] > mean_lift[4]);
}

#[test]
fn test_frequency_sweep_matches_individual_runs() {
    let config = create_test_config();
    let request = SweepRequest {
        sweep: SweepBy::Frequency {
            base_hz: 150.0,
            step_hz: 20.0,
            pitch_deg: 45.0,
        },
        stroke_amplitude_m: 0.01,
        t_end_s: 0.02,
    };

    let members = run_sweep(&request, &config).unwrap();
    assert_eq!(members.len(), 5);

    for (member, (value, params)) in members.iter().zip(request.parameter_sets()) {
        assert_eq!(member.value, value);
        assert_eq!(member.unit, "Hz");
        let expected = bumblebee::simulate(&params, &config).unwrap();
        assert_eq!(member.run.series, expected);
    }

    // Faster flapping means higher dynamic pressure and more lift.
    for pair in members.windows(2) {
        assert!(pair[1].run.summary.mean_lift > pair[0].run.summary.mean_lift);
    }
}
