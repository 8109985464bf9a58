use std::io::Write;

use approx::assert_relative_eq;
use bumblebee::{
    simulate, ConfigError, EngineConfig, FlatPlateCoefficients, SimulationParameters,
    WingEnvironment,
};
use tempfile::NamedTempFile;

#[test]
fn test_load_yaml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "preset: hawkmoth\n\
         fluid_density: 1.2\n\
         pitch_phase_deg: 90.0\n\
         coefficients:\n  a: 1.2\n  b: 1.4\n  c: 1.0\n\
         max_samples: 20000\n\
         stroke_amplitude_m: 0.04"
    )
    .unwrap();

    let config = EngineConfig::from_yaml_file(file.path()).unwrap();

    assert_relative_eq!(config.environment.chord, WingEnvironment::hawkmoth().chord);
    assert_relative_eq!(config.environment.fluid_density, 1.2);
    assert_eq!(
        config.environment.coefficients,
        FlatPlateCoefficients::thin_plate()
    );
    assert_eq!(config.limits.max_samples, 20000);
    assert_relative_eq!(config.defaults.stroke_amplitude_m, 0.04);

    let params = SimulationParameters::new(25.0, 0.04, 0.8, 0.2);
    let series = simulate(&params, &config).unwrap();
    assert!(series.all_finite());
}

#[test]
fn test_missing_file() {
    let err = EngineConfig::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::FileError(_)));
}

#[test]
fn test_malformed_yaml() {
    let err = EngineConfig::from_yaml_str("fluid_density: [1, 2").unwrap_err();
    assert!(matches!(err, ConfigError::YamlError(_)));
}

#[test]
fn test_invalid_values_fail_validation() {
    let err = EngineConfig::from_yaml_str("coefficients: {a: 1.0, b: 0.2, c: 1.0}").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

#[test]
fn test_config_round_trips_through_yaml_builder() {
    let config = EngineConfig::from_yaml_str("{}").unwrap();
    assert_eq!(config, EngineConfig::default());
}
