pub mod aerodynamics;
pub mod kinematics;
pub mod power;

pub use aerodynamics::{calculate_aero_loads, calculate_air_data, AirDataValues};
pub use kinematics::StrokeKinematics;
pub use power::calculate_power;
