//! Identity feature slice: resolving claim fields from untyped provider payloads.
//!
//! Three small pieces compose, leaves first:
//!
//! 1. [`to_snake_case`] turns a logical claim name (`EmailVerified`) into its default key.
//! 2. [`get_mapping_field`] picks the configured path for a claim, or that default.
//! 3. [`get_boolean_field_by_path`] and [`get_string_field_by_path`] walk a dotted path through
//!    a decoded JSON payload and coerce what they find, falling back to a caller default.
//!
//! [`ClaimResolver`] ties them together for the [`StandardClaim`](claimmap_domain::claims::StandardClaim) set.
//!
//! ```rust
//! use claimmap_identity::{get_boolean_field_by_path, get_mapping_field};
//! use serde_json::json;
//! use std::collections::HashMap;
//!
//! let mapping = HashMap::new();
//! let path = get_mapping_field(&mapping, "EmailVerified");
//! let payload = json!({ "email_verified": true });
//!
//! assert!(get_boolean_field_by_path(&payload, &path, false)?);
//! # Ok::<(), claimmap_identity::IdentityError>(())
//! ```

mod canonical;
mod error;
mod mapping;
mod path;
mod resolver;

pub use crate::canonical::to_snake_case;
pub use crate::error::{IdentityError, IdentityErrorExt};
pub use crate::mapping::get_mapping_field;
pub use crate::path::{get_boolean_field_by_path, get_string_field_by_path};
pub use crate::resolver::ClaimResolver;
pub use serde_json::Value;
