//! Contract templates and their terms.

pub mod template;
pub mod term;

pub use template::{ContractTemplate, ContractTemplateForm, ContractType};
pub use term::ContractTerm;
