use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("TASK_LATENCY_MS");
        std::env::remove_var("TASK_SEED");
    }
}

#[test]
fn from_env_uses_defaults() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.task_latency, Duration::from_millis(100));
    assert!(cfg.seed_tasks);
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("TASK_LATENCY_MS", "0");
        std::env::set_var("TASK_SEED", "false");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.task_latency, Duration::ZERO);
    assert!(!cfg.seed_tasks);

    unsafe { clear_server_env() };
}

#[test]
fn unparsable_numbers_fall_back_to_defaults() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("TASK_LATENCY_MS", "-5");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.task_latency, Duration::from_millis(DEFAULT_TASK_LATENCY_MS));

    unsafe { clear_server_env() };
}

#[test]
fn parse_flag_accepts_common_spellings() {
    assert_eq!(parse_flag("X", None, true), Ok(true));
    assert_eq!(parse_flag("X", Some("  "), false), Ok(false));
    assert_eq!(parse_flag("X", Some("TRUE"), false), Ok(true));
    assert_eq!(parse_flag("X", Some("0"), true), Ok(false));
}

#[test]
fn parse_flag_rejects_garbage() {
    let err = parse_flag("TASK_SEED", Some("maybe"), true).unwrap_err();
    assert_eq!(err, ConfigError::InvalidFlag { var: "TASK_SEED", value: "maybe".into() });
    assert!(err.to_string().contains("TASK_SEED"));
}
