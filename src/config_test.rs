use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_upstream_is_set() {
    let cfg = Config::from_lookup(lookup(&[("PREDICT_UPSTREAM_URL", "http://127.0.0.1:5000/predict")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream_url, "http://127.0.0.1:5000/predict");
    assert_eq!(cfg.site_root, PathBuf::from(DEFAULT_SITE_ROOT));
    assert_eq!(cfg.timeouts, UpstreamTimeouts::default());
}

#[test]
fn overrides_are_parsed() {
    let cfg = Config::from_lookup(lookup(&[
        ("PREDICT_UPSTREAM_URL", " https://model.internal/api/predict "),
        ("PORT", "8080"),
        ("SITE_ROOT", "/srv/ecopack"),
        ("PREDICT_REQUEST_TIMEOUT_SECS", "12"),
        ("PREDICT_CONNECT_TIMEOUT_SECS", "2"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream_url, "https://model.internal/api/predict");
    assert_eq!(cfg.site_root, PathBuf::from("/srv/ecopack"));
    assert_eq!(cfg.timeouts, UpstreamTimeouts { request_secs: 12, connect_secs: 2 });
}

#[test]
fn missing_upstream_is_an_error() {
    assert_eq!(Config::from_lookup(lookup(&[])), Err(ConfigError::Missing { var: "PREDICT_UPSTREAM_URL" }));
    assert_eq!(
        Config::from_lookup(lookup(&[("PREDICT_UPSTREAM_URL", "   ")])),
        Err(ConfigError::Missing { var: "PREDICT_UPSTREAM_URL" })
    );
}

#[test]
fn upstream_without_http_scheme_is_rejected() {
    let err = Config::from_lookup(lookup(&[("PREDICT_UPSTREAM_URL", "model:5000")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PREDICT_UPSTREAM_URL", .. }));
}

#[test]
fn unparsable_port_is_rejected() {
    let err = Config::from_lookup(lookup(&[("PREDICT_UPSTREAM_URL", "http://x/predict"), ("PORT", "eighty")]))
        .unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
    assert_eq!(err.to_string(), "invalid value for PORT: \"eighty\"");
}

#[test]
fn unparsable_timeout_is_rejected() {
    let err = Config::from_lookup(lookup(&[
        ("PREDICT_UPSTREAM_URL", "http://x/predict"),
        ("PREDICT_CONNECT_TIMEOUT_SECS", "-1"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PREDICT_CONNECT_TIMEOUT_SECS", .. }));
}

#[test]
fn blank_site_root_falls_back_to_default() {
    let cfg = Config::from_lookup(lookup(&[("PREDICT_UPSTREAM_URL", "http://x/predict"), ("SITE_ROOT", "")])).unwrap();
    assert_eq!(cfg.site_root, PathBuf::from(DEFAULT_SITE_ROOT));
}
