//! Identity and vehicle verification documents.

pub mod model;
pub mod review;

pub use model::{AggregateStatus, DocumentStatus, UserDocument, UserDocumentList, VehicleDocument};
pub use review::{ReviewDecision, ReviewPayload};
