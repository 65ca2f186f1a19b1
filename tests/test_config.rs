use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use sharp_shooter::config::ShooterConfig;

fn config_from(vars: &[(&str, &str)]) -> ShooterConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ShooterConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_unset() {
    let c = config_from(&[("HOME", "/home/shooter")]);
    assert_eq!(c.step_delay, Duration::from_millis(25));
    assert_eq!(c.seed, None);
    assert_eq!(c.log_dir, PathBuf::from("/home/shooter/.cache/sharp-shooter/logs"));
}

#[test]
fn xdg_cache_takes_precedence_over_home() {
    let c = config_from(&[("HOME", "/home/shooter"), ("XDG_CACHE_HOME", "/var/cache/u")]);
    assert_eq!(c.log_dir, PathBuf::from("/var/cache/u/sharp-shooter/logs"));
}

#[test]
fn values_are_honored() {
    let c = config_from(&[
        ("SHARP_SHOOTER_STEP_DELAY_MS", "0"),
        ("SHARP_SHOOTER_SEED", " 1234 "),
        ("SHARP_SHOOTER_LOG_DIR", "/tmp/shots"),
    ]);
    assert_eq!(c.step_delay, Duration::ZERO);
    assert_eq!(c.seed, Some(1234));
    assert_eq!(c.log_dir, PathBuf::from("/tmp/shots"));
}

#[test]
fn invalid_values_fall_back_to_defaults() {
    let c = config_from(&[
        ("HOME", "/home/shooter"),
        ("SHARP_SHOOTER_STEP_DELAY_MS", "fast"),
        ("SHARP_SHOOTER_SEED", "-3"),
        ("SHARP_SHOOTER_LOG_DIR", "  "),
    ]);
    assert_eq!(c.step_delay, Duration::from_millis(25));
    assert_eq!(c.seed, None);
    assert_eq!(c.log_dir, PathBuf::from("/home/shooter/.cache/sharp-shooter/logs"));
}
