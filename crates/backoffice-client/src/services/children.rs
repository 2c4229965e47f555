//! Child collections edited under a selected parent.

use std::fmt::{Debug, Display};

use async_trait::async_trait;
use backoffice_core::AppResult;
use backoffice_entity::ordering::Ordered;
use backoffice_entity::term::{TermDraft, TermText};

use crate::client::Outcome;

/// Source of a parent's ordered children.
///
/// Children may come embedded in the parent's detail or from a nested
/// endpoint; either way the editor sees the same operations.
#[async_trait]
pub trait ChildService: Send + Sync + Debug + 'static {
    /// Parent key.
    type ParentId: Copy + Eq + Debug + Display + Send + Sync + 'static;
    /// Child key.
    type ChildId: Copy + Eq + Debug + Display + Send + Sync + 'static;
    /// Child record.
    type Child: Ordered + TermText + Clone + Debug + Send + Sync + 'static;

    /// Key of a child.
    fn child_id(child: &Self::Child) -> Self::ChildId;

    /// All children of `parent`, in server order.
    async fn children(&self, parent: Self::ParentId) -> AppResult<Vec<Self::Child>>;

    /// Add a child under `parent`.
    async fn create_child(&self, parent: Self::ParentId, draft: &TermDraft) -> AppResult<Outcome>;

    /// Replace a child's text and position.
    async fn update_child(
        &self,
        parent: Self::ParentId,
        id: Self::ChildId,
        draft: &TermDraft,
    ) -> AppResult<Outcome>;

    /// Remove a child.
    async fn delete_child(&self, id: Self::ChildId) -> AppResult<Outcome>;
}
