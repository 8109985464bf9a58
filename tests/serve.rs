use std::io::Cursor;

use approx::assert_relative_eq;

use bumblebee::{
    server::{Response, ServerState, Status},
    EngineConfig,
};

fn run_session(input: &str) -> Vec<Response> {
    let state = ServerState::new(EngineConfig::default());
    let mut output = Vec::new();
    state.serve(Cursor::new(input), &mut output).unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_session_with_mixed_commands() {
    let input = concat!(
        r#"{"type":"config"}"#,
        "\n",
        r#"{"type":"simulate","f":150.0,"pitch_amp":0.785,"t_end":0.02}"#,
        "\n\n",
        r#"{"type":"sweep","sweep_type":"pitch","base":45.0,"freq_hz":150.0,"pitch_deg":45.0,"step":15.0,"t_end":0.02}"#,
        "\n",
        r#"{"type":"sweep","sweep_type":"wingspan","base":1.0,"freq_hz":150.0,"pitch_deg":45.0,"step":1.0,"t_end":0.02}"#,
        "\n",
        r#"{"type":"close"}"#,
        "\n",
        r#"{"type":"config"}"#,
        "\n",
    );

    let responses = run_session(input);
    // Nothing after close is answered; the blank line is skipped.
    assert_eq!(responses.len(), 5);

    let config = responses[0].config.unwrap();
    assert_eq!(config.limits, EngineConfig::default().limits);
    assert_relative_eq!(config.environment.chord, 0.004);

    let run = responses[1].run.as_ref().unwrap();
    assert_eq!(run.summary.completed_cycles, 3);
    assert!(run.series.all_finite());

    let sweep = responses[2].sweep.as_ref().unwrap();
    assert_eq!(sweep.len(), 5);
    assert_eq!(sweep[0].value, 15.0);

    assert_eq!(responses[3].status, Status::Error);
    assert_eq!(
        responses[3].message.as_deref(),
        Some("Invalid sweep type: wingspan")
    );

    assert_eq!(responses[4].status, Status::Ok);
    assert_eq!(responses[4].message.as_deref(), Some("closed"));
}

#[test]
fn test_rejected_request_returns_no_partial_result() {
    let responses =
        run_session("{\"type\":\"simulate\",\"f\":150.0,\"pitch_amp\":0.785,\"t_end\":0.0}\n");

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].status, Status::Error);
    assert!(responses[0].run.is_none());
    assert!(responses[0].message.as_ref().unwrap().contains("t_end_s"));
}

#[test]
fn test_series_serialized_with_channel_names() {
    let state = ServerState::new(EngineConfig::default());
    let mut output = Vec::new();
    state
        .serve(
            Cursor::new("{\"type\":\"simulate\",\"f\":100.0,\"pitch_amp\":0.5,\"t_end\":0.01}\n"),
            &mut output,
        )
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let series = &value["run"]["series"];
    for key in ["t", "x_pos", "theta_deg", "L", "D", "P", "eta"] {
        assert!(series[key].is_array(), "missing channel {}", key);
    }
}
