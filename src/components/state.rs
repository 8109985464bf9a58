use serde::{Deserialize, Serialize};

/// Wing motion at a single instant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    pub t: f64,
    /// Stroke position (m).
    pub x: f64,
    /// Stroke velocity (m/s).
    pub x_dot: f64,
    /// Pitch angle (rad).
    pub theta: f64,
    /// Pitch rate (rad/s).
    pub theta_dot: f64,
}

/// Quasi-steady aerodynamic state and loads at a single instant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroLoads {
    /// Effective angle of attack (rad).
    pub alpha: f64,
    /// Dynamic pressure from instantaneous stroke speed (Pa).
    pub dynamic_pressure: f64,
    pub c_l: f64,
    pub c_d: f64,
    /// Lift (N), signed with the stroke direction.
    pub lift: f64,
    /// Drag magnitude (N).
    pub drag: f64,
}

/// Power bookkeeping at a single instant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerSample {
    /// Power to overcome drag in translation (W).
    pub translational: f64,
    /// Power from the aerodynamic pitching moment (W); negative when the flow does work.
    pub rotational: f64,
    /// Input power after flooring (W); always > 0.
    pub total: f64,
    /// Lift power usefully delivered (W); never negative.
    pub useful: f64,
    /// `useful / total`, clipped to [0, 1].
    pub efficiency: f64,
}
