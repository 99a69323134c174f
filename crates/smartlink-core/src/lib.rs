//! # smartlink-core
//!
//! Shared domain types for the Smartlink SMART-on-FHIR gateway.
//!
//! This crate provides:
//! - The authenticated session record stored (encrypted) in the browser cookie
//! - Role and scope-mode variants with the SMART scope lookup table
//! - FHIR `Bundle` search-set types and their flattened projection
//!
//! ## Modules
//!
//! - [`session`] - `SessionRecord` and the role/scope-mode variants
//! - [`scopes`] - SMART App Launch scope strings per role and scope mode
//! - [`bundle`] - FHIR search-set Bundle parsing and projection

pub mod bundle;
pub mod scopes;
pub mod session;

pub use bundle::{Bundle, BundleEntry, ProjectedBundle};
pub use scopes::ScopeTable;
pub use session::{ScopeMode, SessionRecord, SessionRecordError, UserRole};
