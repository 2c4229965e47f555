//! Core type definitions used across the console workspace.

pub mod id;
pub mod pagination;
pub mod range;
pub mod sorting;

pub use id::*;
pub use pagination::{ListQuery, Page, SortKeys};
pub use range::{DateRange, GroupBy};
pub use sorting::{SortDirection, SortField};
