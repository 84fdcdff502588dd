//! Integration tests for session config loading and the demo session.

use squaremat::FillConfig;
use squaremat_cli::config::{load_session_config, SessionConfig};
use squaremat_cli::session::Session;

// ---------------------------------------------------------------------------
// SessionConfig defaults & serialization
// ---------------------------------------------------------------------------

#[test]
fn session_config_default_values() {
    let cfg = SessionConfig::default();
    assert_eq!(cfg.demo_size, 3);
    assert_eq!(cfg.fill, FillConfig::default());
    assert_eq!(cfg.fill.min, -10);
    assert_eq!(cfg.fill.max, 10);
    assert!(cfg.fill.seed.is_none());
}

#[test]
fn session_config_serializes_to_json() {
    let json = serde_json::to_string_pretty(&SessionConfig::default()).unwrap();
    assert!(json.contains("demo_size"));
    assert!(json.contains("fill"));
}

#[test]
fn partial_config_uses_defaults() {
    let cfg: SessionConfig = serde_json::from_str(r#"{"fill": {"seed": 3}}"#).unwrap();
    assert_eq!(cfg.demo_size, 3);
    assert_eq!(cfg.fill.min, -10);
    assert_eq!(cfg.fill.seed, Some(3));
}

#[test]
fn session_config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"demo_size": 2, "fill": {"min": 0, "max": 5}}"#).unwrap();

    let cfg = load_session_config(&path).unwrap();
    assert_eq!(cfg.demo_size, 2);
    assert_eq!(cfg.fill.min, 0);
    assert_eq!(cfg.fill.max, 5);
}

#[test]
fn missing_config_file_errors() {
    let err = load_session_config("/nonexistent/session.json").unwrap_err();
    assert!(err.to_string().contains("Failed to read config"));
}

#[test]
fn invalid_config_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "not json").unwrap();
    let err = load_session_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[test]
fn randomize_respects_config() {
    let mut session = Session::new(SessionConfig {
        fill: FillConfig::new(0, 3).with_seed(21),
        demo_size: 2,
    });
    assert_eq!(session.config().demo_size, 2);
    assert_eq!(session.config().fill.seed, Some(21));
    let (a, b) = session.randomize().unwrap();
    assert_eq!(a.size(), 2);
    assert_eq!(b.size(), 2);
    assert!(a.as_slice().iter().chain(b.as_slice()).all(|v| (0..3).contains(v)));
}

#[test]
fn demo_output_is_reproducible() {
    let config = SessionConfig {
        fill: FillConfig::default().with_seed(77),
        demo_size: 3,
    };
    let first = Session::new(config.clone()).run_demo();
    let second = Session::new(config).run_demo();
    assert_eq!(first, second);
    assert!(first.contains("== Random matrices =="));
    assert!(first.contains("det(A) = "));
}
