/// Converts a `PascalCase` or `camelCase` identifier into its snake_case field key.
///
/// Every uppercase letter except the first character gets a single underscore
/// in front of it. Acronyms are not special: `"ID"` becomes `"i_d"`.
///
/// ```rust
/// use claimmap_identity::to_snake_case;
///
/// assert_eq!(to_snake_case("EmailVerified"), "email_verified");
/// assert_eq!(to_snake_case("ZoneInfo"), "zone_info");
/// assert_eq!(to_snake_case("Email"), "email");
/// ```
#[must_use]
pub fn to_snake_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + identifier.len() / 2);

    for (i, ch) in identifier.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}
