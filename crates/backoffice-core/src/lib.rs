//! # backoffice-core
//!
//! Core crate for the logistics back-office console. Contains configuration
//! schemas, typed identifiers, list query / page types, sorting, reporting
//! date ranges, the [`traits::ApiTransport`] seam, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other console crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
