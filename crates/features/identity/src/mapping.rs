use crate::canonical::to_snake_case;
use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::BuildHasher;
use tracing::debug;

/// Returns the payload path for `logical_name`.
///
/// A non-empty entry in `mapping` is returned verbatim, dots included. A missing or
/// empty entry falls back to [`to_snake_case`] of the logical name. The configured
/// value is not checked for being a well-formed path.
///
/// ```rust
/// use claimmap_identity::get_mapping_field;
/// use std::collections::HashMap;
///
/// let mapping = HashMap::from([("Email".to_owned(), "user.email_address".to_owned())]);
/// assert_eq!(get_mapping_field(&mapping, "Email"), "user.email_address");
/// assert_eq!(get_mapping_field(&mapping, "EmailVerified"), "email_verified");
/// ```
#[must_use]
pub fn get_mapping_field<'a, S: BuildHasher>(
    mapping: &'a HashMap<String, String, S>,
    logical_name: &str,
) -> Cow<'a, str> {
    match mapping.get(logical_name) {
        Some(path) if !path.is_empty() => {
            debug!(claim = logical_name, path = %path, "Using configured claim path");
            Cow::Borrowed(path.as_str())
        },
        _ => Cow::Owned(to_snake_case(logical_name)),
    }
}
