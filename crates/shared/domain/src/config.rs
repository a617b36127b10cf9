use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Identity provider settings that affect claim extraction.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Overrides of the default claim paths, keyed by logical claim name.
    pub mapping: ClaimMapping,
}

/// Logical claim name (`EmailVerified`) to dotted payload path (`user.is_verified`).
///
/// An entry mapped to an empty string counts as not configured. The table is
/// Arc-wrapped so resolvers can clone it freely; mutation goes through
/// copy-on-write.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimMapping {
    inner: Arc<HashMap<String, String>>,
}

impl ClaimMapping {
    #[must_use]
    pub fn new(table: HashMap<String, String>) -> Self {
        Self { inner: Arc::new(table) }
    }
}

impl Deref for ClaimMapping {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ClaimMapping {
    fn deref_mut(&mut self) -> &mut HashMap<String, String> {
        Arc::make_mut(&mut self.inner)
    }
}

impl From<HashMap<String, String>> for ClaimMapping {
    fn from(table: HashMap<String, String>) -> Self {
        Self::new(table)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ClaimMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
