//! # backoffice-entity
//!
//! Resource records for the logistics back-office console. Every struct in
//! this crate is a transient copy of a backend record or a form payload
//! sent back to it. Records decode through one explicit step into a
//! canonical typed shape: aliased wire names are folded, statuses and
//! roles become closed enums with an `Unknown` fallback, and anything of
//! the wrong shape is a decode error rather than a silent default.

#[macro_use]
mod macros;

pub mod contract;
pub mod delivery_record;
pub mod document;
pub mod item;
pub mod media;
pub mod ordering;
pub mod package;
pub mod post;
pub mod report;
pub mod term;
pub mod timestamp;
pub mod transaction;
pub mod trip;
pub mod user;
pub mod validation;
pub mod vehicle;

/// Decode a list that the backend may send as `null`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    Ok(<Option<Vec<T>> as serde::Deserialize>::deserialize(deserializer)?.unwrap_or_default())
}
