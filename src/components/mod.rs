pub mod aero_coef;
pub mod params;
pub mod series;
pub mod state;
pub mod wing;

pub use aero_coef::FlatPlateCoefficients;
pub use params::{SimulationParameters, MAX_PITCH_AMPLITUDE_RAD};
pub use series::{SeriesSummary, TimeSeries};
pub use state::{AeroLoads, KinematicState, PowerSample};
pub use wing::WingEnvironment;
