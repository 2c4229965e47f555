//! Delivery-record templates (pickup and drop-off checklists) and their
//! terms.

pub mod template;
pub mod term;

pub use template::{DeliveryRecordTemplate, DeliveryRecordTemplateForm, DeliveryRecordType, TemplateStatus};
pub use term::{DeliveryRecordTerm, DeliveryRecordTermBody};
