use crate::components::KinematicState;

/// Flow state seen by the lumped wing section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirDataValues {
    /// Angle of attack (rad).
    pub alpha: f64,
    /// `½ρẋ²` (Pa).
    pub dynamic_pressure: f64,
}

/// Flow is taken as purely chordwise from translation, with no induced-velocity
/// correction, so the angle of attack equals the pitch angle.
pub fn calculate_air_data(state: &KinematicState, density: f64) -> AirDataValues {
    AirDataValues {
        alpha: state.theta,
        dynamic_pressure: 0.5 * density * state.x_dot * state.x_dot,
    }
}
