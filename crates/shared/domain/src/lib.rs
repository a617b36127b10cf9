//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O or path logic, just claim names, mapping tables and resolved claims.

pub mod claims;
pub mod config;
