use crate::components::{AeroLoads, KinematicState, PowerSample, WingEnvironment};

/// Folds loads and rates into input power and a bounded efficiency.
///
/// Translation costs `D·|ẋ|`. Rotation costs `τ·θ̇`, with the pitching moment taken as
/// drag acting at the pivot offset. Their sum is floored at `power_floor`, so negative
/// instantaneous power counts as work not recovered and the efficiency ratio never
/// divides by zero. Useful power is lift times the vertical component `ẋ·sin θ` of the
/// section velocity, and efficiency outside [0, 1] is clipped.
pub fn calculate_power(
    environment: &WingEnvironment,
    state: &KinematicState,
    loads: &AeroLoads,
    power_floor: f64,
) -> PowerSample {
    let translational = loads.drag * state.x_dot.abs();

    let pitching_moment = loads.drag * environment.pivot_offset;
    let rotational = pitching_moment * state.theta_dot;

    let total = (translational + rotational).max(power_floor);

    let vertical_velocity = state.x_dot * state.theta.sin();
    let useful = (loads.lift * vertical_velocity).max(0.0);

    let ratio = useful / total;
    let efficiency = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };

    PowerSample {
        translational,
        rotational,
        total,
        useful,
        efficiency,
    }
}
