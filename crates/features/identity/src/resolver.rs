use crate::error::{IdentityError, IdentityErrorExt};
use crate::mapping::get_mapping_field;
use crate::path::{get_boolean_field_by_path, get_string_field_by_path};
use claimmap_domain::claims::{ClaimKind, StandardClaim, UserClaims};
use claimmap_domain::config::{ClaimMapping, IdentityConfig};
use serde_json::Value;
use std::borrow::Cow;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Resolves [`StandardClaim`]s from provider payloads through a mapping table.
///
/// Cloning is cheap: the mapping table is shared.
#[derive(Debug, Clone, Default)]
pub struct ClaimResolver {
    mapping: ClaimMapping,
}

impl ClaimResolver {
    #[must_use]
    pub fn new(mapping: impl Into<ClaimMapping>) -> Self {
        Self { mapping: mapping.into() }
    }

    #[must_use]
    pub fn from_config(config: &IdentityConfig) -> Self {
        Self { mapping: config.mapping.clone() }
    }

    #[must_use]
    pub const fn mapping(&self) -> &ClaimMapping {
        &self.mapping
    }

    /// Payload path the claim is read from: the configured override or its snake_case name.
    #[must_use]
    pub fn path_for(&self, claim: StandardClaim) -> Cow<'_, str> {
        get_mapping_field(&*self.mapping, claim.as_ref())
    }

    /// Extracts `claim` as a string.
    ///
    /// # Errors
    /// Structural faults from [`get_string_field_by_path`].
    pub fn resolve_string(
        &self,
        obj: &Value,
        claim: StandardClaim,
        fallback: &str,
    ) -> Result<String, IdentityError> {
        get_string_field_by_path(obj, &self.path_for(claim), fallback)
    }

    /// Extracts `claim` as a boolean.
    ///
    /// # Errors
    /// Structural faults from [`get_boolean_field_by_path`].
    pub fn resolve_boolean(
        &self,
        obj: &Value,
        claim: StandardClaim,
        fallback: bool,
    ) -> Result<bool, IdentityError> {
        get_boolean_field_by_path(obj, &self.path_for(claim), fallback)
    }

    /// Resolves every standard claim from `obj`.
    ///
    /// Absent claims keep their defaults (`""` and `false`).
    ///
    /// # Errors
    /// The first structural fault, with the offending claim name as context. A mapping entry
    /// such as `"user..email"` or a non-object payload ends up here.
    #[instrument(skip_all, fields(overrides = self.mapping.len()))]
    pub fn resolve(&self, obj: &Value) -> Result<UserClaims, IdentityError> {
        let mut claims = UserClaims::default();

        for claim in StandardClaim::iter() {
            let stored = match claim.kind() {
                ClaimKind::Boolean => {
                    let value = with_claim(self.resolve_boolean(obj, claim, false), claim)?;
                    claims.set_boolean(claim, value)
                },
                ClaimKind::String => {
                    let value = with_claim(self.resolve_string(obj, claim, ""), claim)?;
                    claims.set_string(claim, value)
                },
            };
            debug_assert!(stored, "{claim} was resolved as the wrong kind");
        }

        Ok(claims)
    }
}

impl From<ClaimMapping> for ClaimResolver {
    fn from(mapping: ClaimMapping) -> Self {
        Self { mapping }
    }
}

fn with_claim<T>(res: Result<T, IdentityError>, claim: StandardClaim) -> Result<T, IdentityError> {
    res.or_else(|e| Err(e).context(format!("resolving {claim}")))
}
