use bumblebee::{EngineConfig, SimulationParameters};

/// Scenario A: three flap cycles of a bumblebee-scale wing
pub fn scenario_a() -> SimulationParameters {
    SimulationParameters::new(150.0, 0.01, 0.785, 0.02)
}

/// Creates a test engine configuration
pub fn create_test_config() -> EngineConfig {
    EngineConfig::default()
}

/// Parameter grid spanning slow to fast flapping, zero amplitudes and long horizons
pub fn parameter_grid() -> Vec<SimulationParameters> {
    let mut grid = Vec::new();
    for &f in &[1.0, 50.0, 150.0, 400.0] {
        for &stroke in &[0.0, 0.005, 0.02] {
            for &pitch in &[0.0, 0.3, 0.785, 1.4, -0.5] {
                for &t_end in &[0.001, 0.02, 0.3] {
                    grid.push(SimulationParameters::new(f, stroke, pitch, t_end));
                }
            }
        }
    }
    grid
}
