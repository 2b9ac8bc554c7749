use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.solver.base_url, DEFAULT_SOLVER_URL);
    assert_eq!(
        cfg.solver.timeouts,
        SolverTimeouts {
            request_secs: DEFAULT_SOLVER_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_SOLVER_CONNECT_TIMEOUT_SECS,
        }
    );
    assert_eq!(cfg.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("SOLVER_URL", "https://solver.example.test/api/"),
        ("SOLVER_REQUEST_TIMEOUT_SECS", "42"),
        ("SOLVER_CONNECT_TIMEOUT_SECS", "7"),
        ("MAX_UPLOAD_BYTES", "2048"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.solver.base_url, "https://solver.example.test/api");
    assert_eq!(cfg.solver.timeouts, SolverTimeouts { request_secs: 42, connect_secs: 7 });
    assert_eq!(cfg.max_upload_bytes, 2048);
}

#[test]
fn from_lookup_rejects_invalid_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "not-a-port"));
    assert_eq!(err.to_string(), "invalid PORT: not-a-port");
}

#[test]
fn from_lookup_rejects_non_http_solver_url() {
    let err = HostConfig::from_lookup(lookup_from(&[("SOLVER_URL", "ftp://solver")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSolverUrl(_)));
}

#[test]
fn from_lookup_falls_back_on_unparseable_numbers() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("SOLVER_REQUEST_TIMEOUT_SECS", "soon"),
        ("MAX_UPLOAD_BYTES", "-1"),
    ]))
    .unwrap();
    assert_eq!(cfg.solver.timeouts.request_secs, DEFAULT_SOLVER_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
}
