use serial_test::serial;

use super::*;

/// # Safety
/// Callers are serialized with `#[serial]` to avoid env races.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("RALLY_ADDR");
        std::env::remove_var("PORT");
        std::env::remove_var("RALLY_SITE_ROOT");
        std::env::remove_var("RALLY_OUTPUT_NAME");
    }
}

#[test]
#[serial]
fn from_env_uses_defaults() {
    unsafe { clear_host_env() };

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, DEFAULT_SITE_ROOT);
    assert_eq!(cfg.output_name, DEFAULT_OUTPUT_NAME);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
#[serial]
fn from_env_reads_overrides() {
    unsafe {
        clear_host_env();
        std::env::set_var("RALLY_ADDR", "127.0.0.1");
        std::env::set_var("PORT", "8081");
        std::env::set_var("RALLY_SITE_ROOT", "/srv/rally");
        std::env::set_var("RALLY_OUTPUT_NAME", "rally-dev");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8081");
    assert_eq!(cfg.site_root, "/srv/rally");
    assert_eq!(cfg.output_name, "rally-dev");

    unsafe { clear_host_env() };
}

#[test]
#[serial]
fn from_env_blank_site_root_falls_back() {
    unsafe {
        clear_host_env();
        std::env::set_var("RALLY_SITE_ROOT", "  ");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.site_root, DEFAULT_SITE_ROOT);

    unsafe { clear_host_env() };
}

#[test]
#[serial]
fn from_env_rejects_invalid_port() {
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = HostConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(err.to_string().starts_with("invalid PORT \"eighty\""));

    unsafe { clear_host_env() };
}

#[test]
#[serial]
fn from_env_rejects_invalid_addr() {
    unsafe {
        clear_host_env();
        std::env::set_var("RALLY_ADDR", "localhost:80");
    }

    let err = HostConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidAddr { .. }));

    unsafe { clear_host_env() };
}
