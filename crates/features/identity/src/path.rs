//! Dotted-path traversal and typed extraction over decoded JSON payloads.
//!
//! A path such as `user.profile.email` is split on `.` and every segment is looked up as an
//! object key one level deeper. Array indices are not supported: an array on the way is
//! simply not traversable.

use crate::error::IdentityError;
use serde_json::{Number, Value};
use tracing::trace;

const SEPARATOR: char = '.';

/// Walks `path` from `root`.
///
/// `Ok(None)` means the path does not lead to a value: a key is absent or an intermediate
/// value is not an object. `Err` is reserved for a malformed path or a non-object root.
pub(crate) fn lookup<'a>(root: &'a Value, path: &str) -> Result<Option<&'a Value>, IdentityError> {
    if path.is_empty() {
        return Err(IdentityError::MalformedPath { message: "empty path".into(), context: None });
    }
    if path.split(SEPARATOR).any(str::is_empty) {
        return Err(IdentityError::MalformedPath {
            message: format!("empty segment in '{path}'").into(),
            context: None,
        });
    }
    if !root.is_object() {
        return Err(IdentityError::InvalidRoot {
            message: format!("expected an object, found {}", kind_of(root)).into(),
            context: Some(path.to_owned().into()),
        });
    }

    let mut current = root;
    for segment in path.split(SEPARATOR) {
        let Some(object) = current.as_object() else {
            trace!(path, segment, found = kind_of(current), "Claim path is not traversable");
            return Ok(None);
        };
        let Some(next) = object.get(segment) else {
            trace!(path, segment, "Claim path segment is absent");
            return Ok(None);
        };
        current = next;
    }

    Ok(Some(current))
}

/// Reads a boolean at `path`, or `fallback` if it is absent or not a boolean.
///
/// # Errors
/// [`IdentityError::MalformedPath`] for an empty path or empty segment and
/// [`IdentityError::InvalidRoot`] when `obj` is not an object. Absence is never an error.
///
/// ```rust
/// use claimmap_identity::get_boolean_field_by_path;
/// use serde_json::json;
///
/// let obj = json!({ "data": { "email_verified": true } });
/// assert!(get_boolean_field_by_path(&obj, "data.email_verified", false)?);
/// assert!(get_boolean_field_by_path(&obj, "data.missing", true)?);
/// # Ok::<(), claimmap_identity::IdentityError>(())
/// ```
pub fn get_boolean_field_by_path(
    obj: &Value,
    path: &str,
    fallback: bool,
) -> Result<bool, IdentityError> {
    Ok(match lookup(obj, path)? {
        Some(Value::Bool(value)) => *value,
        Some(other) => {
            trace!(path, found = kind_of(other), "Claim is not a boolean, using fallback");
            fallback
        },
        None => fallback,
    })
}

/// Reads a string at `path`, coercing numbers, or `fallback` if nothing usable is there.
///
/// Terminal values are converted as follows:
/// * `null` becomes `""`, so a present null is distinguishable from an absent key;
/// * strings are returned as they are;
/// * integers are rendered in base 10;
/// * floats are rounded half away from zero and rendered without a fractional part;
/// * objects, arrays and booleans yield `fallback`.
///
/// # Errors
/// Same as [`get_boolean_field_by_path`].
///
/// ```rust
/// use claimmap_identity::get_string_field_by_path;
/// use serde_json::json;
///
/// let obj = json!({ "score": 95.7, "nullable": null });
/// assert_eq!(get_string_field_by_path(&obj, "score", "")?, "96");
/// assert_eq!(get_string_field_by_path(&obj, "nullable", "n/a")?, "");
/// assert_eq!(get_string_field_by_path(&obj, "missing", "n/a")?, "n/a");
/// # Ok::<(), claimmap_identity::IdentityError>(())
/// ```
pub fn get_string_field_by_path(
    obj: &Value,
    path: &str,
    fallback: &str,
) -> Result<String, IdentityError> {
    let Some(value) = lookup(obj, path)? else {
        return Ok(fallback.to_owned());
    };

    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => render_number(n),
        other => {
            trace!(path, found = kind_of(other), "Claim is not a scalar, using fallback");
            fallback.to_owned()
        },
    })
}

fn render_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    n.as_f64().map_or_else(|| n.to_string(), render_rounded)
}

fn render_rounded(f: f64) -> String {
    let rounded = f.round();
    // -0.4 rounds to -0.0
    if rounded == 0.0 { "0".to_owned() } else { format!("{rounded:.0}") }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
