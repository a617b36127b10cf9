use claimmap_domain::claims::{StandardClaim, UserClaims};
use claimmap_domain::config::{ClaimMapping, IdentityConfig};
use claimmap_identity::{ClaimResolver, IdentityError};
use serde_json::{Value, json};

fn userinfo() -> Value {
    json!({
        "sub": "248289761001",
        "iss": "https://idp.example.com",
        "name": "Jane Doe",
        "given_name": "Jane",
        "family_name": "Doe",
        "email": "jane@example.com",
        "email_verified": true,
        "zone_info": "Europe/Kyiv",
        "updated_at": 1_700_000_000,
        "phone": null
    })
}

#[test]
fn default_paths_are_snake_case_names() {
    let resolver = ClaimResolver::default();

    assert_eq!(resolver.path_for(StandardClaim::EmailVerified), "email_verified");
    assert_eq!(resolver.path_for(StandardClaim::PreferredUsername), "preferred_username");
    assert_eq!(resolver.path_for(StandardClaim::Subject), "subject");
}

#[test]
fn resolves_all_claims_with_defaults() {
    let claims = ClaimResolver::default().resolve(&userinfo()).expect("resolve");

    assert_eq!(claims.name, "Jane Doe");
    assert_eq!(claims.given_name, "Jane");
    assert_eq!(claims.family_name, "Doe");
    assert_eq!(claims.email, "jane@example.com");
    assert!(claims.email_verified);
    assert_eq!(claims.zone_info, "Europe/Kyiv");
    assert_eq!(claims.updated_at, "1700000000");
    assert_eq!(claims.phone, "");
    assert!(!claims.phone_verified);
    // `sub`/`iss` are not the snake_case names of Subject/Issuer
    assert_eq!(claims.subject, "");
    assert_eq!(claims.issuer, "");
}

#[test]
fn mapping_overrides_paths() {
    let mapping: ClaimMapping = [
        ("Subject", "sub"),
        ("Issuer", "iss"),
        ("Email", "contact.primary_email"),
        ("EmailVerified", "contact.verified"),
        ("Name", ""),
    ]
    .into_iter()
    .collect();
    let payload = json!({
        "sub": "42",
        "iss": "https://idp.example.com",
        "name": "Jane Doe",
        "contact": { "primary_email": "jane@corp.example", "verified": true }
    });

    let claims = ClaimResolver::new(mapping).resolve(&payload).expect("resolve");

    assert_eq!(claims.subject, "42");
    assert_eq!(claims.issuer, "https://idp.example.com");
    assert_eq!(claims.email, "jane@corp.example");
    assert!(claims.email_verified);
    assert_eq!(claims.name, "Jane Doe");
}

#[test]
fn single_claim_helpers_use_fallbacks() {
    let resolver = ClaimResolver::default();
    let payload = json!({ "locale": { "unexpected": "object" } });

    assert_eq!(resolver.resolve_string(&payload, StandardClaim::Locale, "en").unwrap(), "en");
    assert_eq!(resolver.resolve_string(&payload, StandardClaim::Email, "none").unwrap(), "none");
    assert!(resolver.resolve_boolean(&payload, StandardClaim::PhoneVerified, true).unwrap());
}

#[test]
fn built_from_config() {
    let cfg: IdentityConfig =
        serde_json::from_value(json!({ "mapping": { "Picture": "avatar.url" } })).unwrap();
    let resolver = ClaimResolver::from_config(&cfg);

    assert_eq!(resolver.path_for(StandardClaim::Picture), "avatar.url");
    assert_eq!(resolver.mapping().len(), 1);

    let payload = json!({ "avatar": { "url": "https://cdn.example.com/j.png" } });
    let claims = resolver.resolve(&payload).unwrap();
    assert_eq!(claims.picture, "https://cdn.example.com/j.png");
}

#[test]
fn empty_payload_resolves_to_default_claims() {
    let claims = ClaimResolver::default().resolve(&json!({})).unwrap();

    assert_eq!(claims, UserClaims::default());
}

#[test]
fn malformed_mapping_entry_fails_with_claim_context() {
    let mapping: ClaimMapping = [("Email", "user..email")].into_iter().collect();

    let err = ClaimResolver::from(mapping).resolve(&userinfo()).unwrap_err();

    assert!(matches!(
        err,
        IdentityError::MalformedPath { context: Some(ref c), .. } if c == "resolving Email"
    ));
}

#[test]
fn non_object_payload_fails() {
    let err = ClaimResolver::default().resolve(&json!(["not", "an", "object"])).unwrap_err();

    assert!(matches!(err, IdentityError::InvalidRoot { .. }));
}

#[test]
fn boolean_claim_faults_name_the_claim() {
    let mapping: ClaimMapping = [("PhoneVerified", "phone.")].into_iter().collect();

    let err = ClaimResolver::new(mapping).resolve(&userinfo()).unwrap_err();

    assert!(matches!(
        err,
        IdentityError::MalformedPath { context: Some(ref c), .. } if c == "resolving PhoneVerified"
    ));
    assert_eq!(
        err.to_string(),
        "Malformed claim path (resolving PhoneVerified): empty segment in 'phone.'"
    );
}
