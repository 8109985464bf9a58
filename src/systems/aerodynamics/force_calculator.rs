use crate::components::{AeroLoads, KinematicState, WingEnvironment};

use super::air_data::calculate_air_data;

/// Calculates the quasi-steady lift and drag on the wing section.
///
/// # Arguments
/// * `environment` - Wing geometry, fluid density and coefficient fit.
/// * `state` - Kinematic state at this sample.
///
/// # Returns
/// `AeroLoads` with lift signed by stroke direction and drag as a magnitude.
pub fn calculate_aero_loads(environment: &WingEnvironment, state: &KinematicState) -> AeroLoads {
    let air_data = calculate_air_data(state, environment.fluid_density);
    let coeffs = &environment.coefficients;

    let c_l = coeffs.lift(air_data.alpha);
    let c_d = coeffs.drag(air_data.alpha);

    // At stroke reversal q is exactly zero and so are both forces.
    let q_s = air_data.dynamic_pressure * environment.planform_area();
    let direction = if state.x_dot < 0.0 { -1.0 } else { 1.0 };

    AeroLoads {
        alpha: air_data.alpha,
        dynamic_pressure: air_data.dynamic_pressure,
        c_l,
        c_d,
        lift: direction * q_s * c_l,
        drag: q_s * c_d,
    }
}
