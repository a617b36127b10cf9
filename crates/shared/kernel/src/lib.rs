//! Kernel utilities shared across slices.
//! Keep this crate lightweight: today it only owns configuration loading.
//!
//! ## Config loading (non-wasm)
//! ```rust,no_run
//! use claimmap_kernel::config::load_identity_config;
//!
//! let cfg = load_identity_config(Some("config/identity.toml")).unwrap_or_default();
//! assert!(cfg.mapping.get("Email").is_none_or(|path| !path.is_empty()));
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use claimmap_domain as domain;
