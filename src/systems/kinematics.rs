use crate::components::{KinematicState, SimulationParameters, WingEnvironment};

/// Sinusoidal stroke with a phase-shifted sinusoidal pitch.
///
/// `x(t) = X·sin(ωt)`, `θ(t) = Θ·sin(ωt + φ)`. Rates are the analytic derivatives, so no
/// discretization error reaches the force model. Nothing here divides by an amplitude;
/// either amplitude may be zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeKinematics {
    omega: f64,
    stroke_amplitude: f64,
    pitch_amplitude: f64,
    pitch_phase: f64,
}

impl StrokeKinematics {
    pub fn new(params: &SimulationParameters, environment: &WingEnvironment) -> Self {
        Self {
            omega: params.angular_frequency(),
            stroke_amplitude: params.stroke_amplitude_m,
            pitch_amplitude: params.pitch_amplitude_rad,
            pitch_phase: environment.pitch_phase,
        }
    }

    pub fn at(&self, t: f64) -> KinematicState {
        let stroke_arg = self.omega * t;
        let pitch_arg = stroke_arg + self.pitch_phase;

        KinematicState {
            t,
            x: self.stroke_amplitude * stroke_arg.sin(),
            x_dot: self.omega * self.stroke_amplitude * stroke_arg.cos(),
            theta: self.pitch_amplitude * pitch_arg.sin(),
            theta_dot: self.omega * self.pitch_amplitude * pitch_arg.cos(),
        }
    }
}
