//! Editable text clauses shared by contract and delivery-record templates.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ordering::Ordered;

/// Field values of the term editor.
///
/// The order is assigned by the editor (one past the highest sibling on
/// create, the stored value on edit) and is not user-editable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TermDraft {
    /// Clause text.
    #[validate(custom(function = "crate::validation::not_blank", message = "Term content is required"))]
    pub content: String,
    /// Position within the template.
    #[validate(range(min = 1, message = "Order must be a positive number"))]
    pub order: i32,
}

impl TermDraft {
    /// A draft with the given text and position.
    pub fn new(content: impl Into<String>, order: i32) -> Self {
        Self {
            content: content.into(),
            order,
        }
    }

    /// A draft copying an existing child, keeping its position.
    pub fn from_child<T: Ordered + TermText>(child: &T) -> Self {
        Self::new(child.text(), child.order())
    }
}

/// Children whose body is a single clause of text.
pub trait TermText {
    /// The clause text.
    fn text(&self) -> &str;
}
