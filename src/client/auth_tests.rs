//! Tests for credential normalization.

use std::collections::HashMap;

use super::{BasicAuth, Credentials};

#[test]
fn none_normalizes_to_no_auth() {
    assert!(Credentials::None.normalize().is_none());
}

#[test]
fn basic_is_passed_through() {
    let auth = BasicAuth::new("alice", "s3cret");

    let normalized = Credentials::from(auth.clone()).normalize();

    assert_eq!(normalized, Some(auth));
}

#[test]
fn raw_mapping_builds_basic_auth() {
    let creds = Credentials::raw("bob", "hunter2");

    let normalized = creds.normalize().unwrap();

    assert_eq!(normalized.username(), "bob");
    assert_eq!(normalized.password(), "hunter2");
}

#[test]
fn raw_mapping_defaults_missing_keys_to_empty() {
    let creds = Credentials::from(HashMap::from([(
        "username".to_string(),
        "carol".to_string(),
    )]));

    let normalized = creds.normalize().unwrap();

    assert_eq!(normalized.username(), "carol");
    assert_eq!(normalized.password(), "");
}

#[test]
fn empty_raw_mapping_still_yields_credentials() {
    let normalized = Credentials::Raw(HashMap::new()).normalize().unwrap();

    assert_eq!(normalized, BasicAuth::new("", ""));
}

#[test]
fn raw_mapping_ignores_unrelated_keys() {
    let creds = Credentials::from(HashMap::from([
        ("username".to_string(), "dave".to_string()),
        ("token".to_string(), "abc".to_string()),
    ]));

    assert_eq!(creds.normalize(), Some(BasicAuth::new("dave", "")));
}

#[test]
fn optional_auth_converts() {
    assert_eq!(Credentials::from(None), Credentials::None);
    assert_eq!(
        Credentials::from(Some(BasicAuth::new("a", "b"))),
        Credentials::Basic(BasicAuth::new("a", "b"))
    );
}

#[test]
fn default_is_none() {
    assert_eq!(Credentials::default(), Credentials::None);
}

#[test]
fn debug_hides_password() {
    let debug = format!("{:?}", BasicAuth::new("erin", "topsecret"));

    assert!(debug.contains("erin"));
    assert!(!debug.contains("topsecret"));
}
