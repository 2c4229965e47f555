//! One module per backend resource group.

pub mod catalog;
pub mod children;
pub mod contract;
pub mod delivery_record;
pub mod document;
pub mod post;
pub mod report;
pub mod user;

pub use catalog::{Items, Packages, Transactions, Trips, Vehicles};
pub use children::ChildService;
pub use contract::{ContractTemplates, ContractTermService};
pub use delivery_record::{DeliveryRecordTemplates, DeliveryRecordTermService};
pub use document::{Reviewable, UserDocuments, VehicleDocuments};
pub use post::{PostPackages, PostTrips};
pub use report::ReportService;
pub use user::Users;

use backoffice_core::AppResult;
use backoffice_core::error::ErrorKind;
use backoffice_core::traits::RequestBody;
use serde::Serialize;

/// Serialize a payload as a JSON request body.
pub(crate) fn json_body<T: Serialize>(payload: &T) -> AppResult<RequestBody> {
    serde_json::to_value(payload)
        .map(RequestBody::Json)
        .map_err(|e| {
            backoffice_core::AppError::with_source(
                ErrorKind::Serialization,
                format!("Failed to encode request body: {e}"),
                e,
            )
        })
}
