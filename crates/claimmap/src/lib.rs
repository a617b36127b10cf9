//! Facade crate for claim mapping.
//! Re-exports domain/kernel primitives and the identity slice.
//! Keep this crate thin: it should compose other crates, not implement business logic.

use claimmap_identity::ClaimResolver;
use claimmap_kernel::config::{ConfigError, load_identity_config};
use std::path::Path;

pub use claimmap_domain as domain;
pub use claimmap_identity as identity;
pub use claimmap_kernel as kernel;

pub mod prelude {
    pub use claimmap_domain::claims::{ClaimKind, StandardClaim, UserClaims};
    pub use claimmap_domain::config::{ClaimMapping, IdentityConfig};
    pub use claimmap_identity::{
        ClaimResolver, IdentityError, IdentityErrorExt, Value, get_boolean_field_by_path,
        get_mapping_field, get_string_field_by_path, to_snake_case,
    };
}

/// Builds a [`ClaimResolver`] from the mapping table in the config file at `path`.
///
/// # Errors
/// Returns [`ConfigError`] if the configuration cannot be loaded.
pub fn init(path: Option<impl AsRef<Path>>) -> Result<ClaimResolver, ConfigError> {
    let cfg = load_identity_config(path)?;
    tracing::info!("Identity claim resolver initialized");
    Ok(ClaimResolver::from_config(&cfg))
}
