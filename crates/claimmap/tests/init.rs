use claimmap::prelude::*;
use serde_json::json;

#[test]
fn init_builds_resolver_from_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("identity.toml");
    std::fs::write(&path, "[mapping]\nEmail = \"user.email_address\"\n").expect("write config");

    let resolver = claimmap::init(Some(&path)).expect("init should succeed");
    let payload = json!({ "user": { "email_address": "a@b.com" }, "email_verified": true });
    let claims = resolver.resolve(&payload).expect("resolve");

    assert_eq!(claims.email, "a@b.com");
    assert!(claims.email_verified);
}

#[test]
fn init_fails_without_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");

    assert!(claimmap::init(Some(dir.path().join("missing.toml"))).is_err());
}

#[test]
fn prelude_covers_end_to_end_flow() {
    let mapping: ClaimMapping = [("Email", "")].into_iter().collect();
    let path = get_mapping_field(&*mapping, StandardClaim::Email.as_ref());

    assert_eq!(path, "email");
    assert_eq!(get_string_field_by_path(&json!({ "email": "x@y.z" }), &path, "").unwrap(), "x@y.z");
}
