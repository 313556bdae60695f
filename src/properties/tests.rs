//! Tests for properties module.

use super::*;
use std::env;

// ==================== SystemProperties tests ====================

#[test]
fn test_system_properties_starts_empty() {
    let props = SystemProperties::new();
    assert!(props.is_empty());
    assert_eq!(props.get("db.host").unwrap(), None);
    assert!(!props.contains("db.host").unwrap());
}

#[test]
fn test_system_properties_set_and_get() {
    let mut props = SystemProperties::new();
    props.set("db.host", "10.0.0.5").unwrap();

    assert_eq!(props.get("db.host").unwrap(), Some("10.0.0.5".to_string()));
    assert!(props.contains("db.host").unwrap());
    assert_eq!(props.len(), 1);
}

#[test]
fn test_system_properties_empty_value_counts_as_set() {
    let mut props = SystemProperties::new();
    props.set("db.password", "").unwrap();
    assert!(props.contains("db.password").unwrap());
}

#[test]
fn test_system_properties_rejects_blank_key() {
    let mut props = SystemProperties::new();
    let result = props.set("  ", "value");
    assert!(matches!(result, Err(PropertyError::InvalidKey(_))));
    assert!(props.is_empty());
}

#[test]
fn test_system_properties_from_iter_sorted() {
    let props: SystemProperties = [("db.port", "5432"), ("db.host", "localhost")]
        .into_iter()
        .collect();

    let keys: Vec<&str> = props.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["db.host", "db.port"]);
}

// ==================== SharedProperties tests ====================

#[test]
fn test_shared_properties_clones_share_state() {
    let mut first = SharedProperties::default();
    let second = first.clone();

    first.set("db.name", "orders").unwrap();

    assert_eq!(second.get("db.name").unwrap(), Some("orders".to_string()));
    assert_eq!(second.snapshot().unwrap().len(), 1);
}

#[test]
fn test_shared_properties_keeps_initial_entries() {
    let initial: SystemProperties = [("db.user", "batch")].into_iter().collect();
    let shared = SharedProperties::new(initial.clone());
    assert_eq!(shared.snapshot().unwrap(), initial);
}

#[test]
fn test_shared_properties_poisoned_lock_is_unavailable() {
    let mut shared = SharedProperties::default();
    shared.poison();

    assert!(matches!(
        shared.get("db.host"),
        Err(PropertyError::Unavailable(_))
    ));
    assert!(matches!(
        shared.set("db.host", "x"),
        Err(PropertyError::Unavailable(_))
    ));
    assert!(shared.snapshot().is_err());
}

// ==================== Environment tests ====================

#[test]
fn test_map_environment_lookup() {
    let env = MapEnvironment::new().with("POSTGRESQL_USER", "batch");
    assert_eq!(env.var("POSTGRESQL_USER"), Some("batch".to_string()));
    assert_eq!(env.var("POSTGRESQL_PASSWORD"), None);
}

#[test]
fn test_map_environment_from_iter() {
    let env: MapEnvironment = [("A", "1"), ("B", "2")].into_iter().collect();
    assert_eq!(env.var("B"), Some("2".to_string()));
}

#[test]
fn test_process_environment_reads_real_variables() {
    // Unique name to avoid conflicts with parallel tests
    let name = "ENV_PROPERTY_BRIDGE_TEST_PROCESS_VAR";
    unsafe {
        env::set_var(name, "present");
    }

    assert_eq!(ProcessEnvironment.var(name), Some("present".to_string()));

    unsafe {
        env::remove_var(name);
    }
    assert_eq!(ProcessEnvironment.var(name), None);
}

#[cfg(unix)]
#[test]
fn test_process_environment_non_utf8_is_absent() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    // Unique name to avoid conflicts with parallel tests
    let name = "ENV_PROPERTY_BRIDGE_TEST_NON_UTF8_VAR";
    unsafe {
        env::set_var(name, OsStr::from_bytes(b"\xff"));
    }

    assert_eq!(ProcessEnvironment.var(name), None);

    unsafe {
        env::remove_var(name);
    }
}
