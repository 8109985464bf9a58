//! Quasi-steady kinematics and aerodynamic loads of a rigid flapping wing.
//!
//! [`simulate`] turns a handful of motion parameters into equal-length time series of
//! stroke position, pitch angle, lift, drag, input power and efficiency.

pub mod components;
pub mod config;
pub mod error;
pub mod server;
pub mod simulation;
pub mod sweep;
pub mod systems;

pub use components::{
    FlatPlateCoefficients, SeriesSummary, SimulationParameters, TimeSeries, WingEnvironment,
};
pub use config::{ConfigError, EngineConfig, EngineConfigBuilder, SamplingLimits, WingPreset};
pub use error::SimulationError;
pub use simulation::{simulate, SimulationDriver, SimulationRun};
pub use sweep::{run_sweep, SweepBy, SweepMember, SweepRequest};
