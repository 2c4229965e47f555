//! Editor for the ordered children of a selected parent.

use backoffice_client::client::Outcome;
use backoffice_client::services::ChildService;
use backoffice_core::{AppError, AppResult};
use backoffice_entity::ordering::{self, Ordered};
use backoffice_entity::term::TermDraft;
use backoffice_entity::validation;
use tracing::{debug, warn};

use crate::list::Confirmation;
use crate::panel::Panel;

/// What the open editor writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildMode<Id> {
    /// Editor closed.
    Closed,
    /// Adding a child.
    Create,
    /// Changing an existing child.
    Edit(Id),
}

/// Lists, adds, edits, and removes the children of one parent.
///
/// Orders are assigned here, never typed in: a new child goes one past the
/// highest sibling and an edited child keeps its position.
#[derive(Debug)]
pub struct ChildEditor<S: ChildService> {
    service: S,
    parent: Option<S::ParentId>,
    children: Panel<Vec<S::Child>>,
    mode: ChildMode<S::ChildId>,
    draft: TermDraft,
    error: Option<String>,
}

impl<S: ChildService> ChildEditor<S> {
    /// An editor with no parent.
    pub fn new(service: S) -> Self {
        Self {
            service,
            parent: None,
            children: Panel::new(),
            mode: ChildMode::Closed,
            draft: TermDraft::default(),
            error: None,
        }
    }

    /// Current parent.
    pub fn parent(&self) -> Option<S::ParentId> {
        self.parent
    }

    /// Children panel.
    pub fn panel(&self) -> &Panel<Vec<S::Child>> {
        &self.children
    }

    /// Children ascending by order.
    pub fn children(&self) -> Vec<&S::Child> {
        self.children
            .value()
            .map(|children| ordering::sorted_by_order(children))
            .unwrap_or_default()
    }

    /// Editor mode.
    pub fn mode(&self) -> ChildMode<S::ChildId> {
        self.mode
    }

    /// Draft being edited.
    pub fn draft(&self) -> &TermDraft {
        &self.draft
    }

    /// Last failure message.
    pub fn error(&self) -> Option<String> {
        self.error.clone().or_else(|| self.children.error())
    }

    /// Order the next new child receives.
    pub fn next_order(&self) -> i32 {
        self.children
            .value()
            .map(|children| ordering::next_order(children))
            .unwrap_or(1)
    }

    /// Highest order among loaded children (0 when none).
    pub fn max_order(&self) -> i32 {
        self.children()
            .last()
            .map(|child| child.order())
            .unwrap_or(0)
    }

    /// Switch to `parent` (or none) and load its children.
    pub async fn set_parent(&mut self, parent: Option<S::ParentId>) {
        self.parent = parent;
        self.mode = ChildMode::Closed;
        self.error = None;
        match parent {
            Some(_) => self.reload().await,
            None => self.children.clear(),
        }
    }

    /// Re-fetch the children of the current parent.
    pub async fn reload(&mut self) {
        let Some(parent) = self.parent else {
            return;
        };
        let ticket = self.children.begin();
        let result = self.service.children(parent).await;
        if let Err(e) = &result {
            warn!(%parent, error = %e, "Child fetch failed");
        }
        self.children.resolve(ticket, result);
    }

    /// Open the editor for a new child.
    pub fn start_create(&mut self) -> AppResult<()> {
        self.require_parent()?;
        self.draft = TermDraft::new("", self.next_order());
        self.mode = ChildMode::Create;
        self.error = None;
        Ok(())
    }

    /// Open the editor on an existing child.
    pub fn start_edit(&mut self, id: S::ChildId) -> AppResult<()> {
        self.require_parent()?;
        let child = self
            .find(id)
            .ok_or_else(|| AppError::not_found(format!("Child {id} is not loaded")))?;
        self.draft = TermDraft::from_child(child);
        self.mode = ChildMode::Edit(id);
        self.error = None;
        Ok(())
    }

    /// Replace the draft text. The order is not editable.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    /// Close the editor without saving.
    pub fn cancel(&mut self) {
        self.mode = ChildMode::Closed;
        self.draft = TermDraft::default();
    }

    /// Validate and save the draft, then re-fetch the children.
    pub async fn submit(&mut self) -> AppResult<Outcome> {
        let parent = self.require_parent()?;
        if let Err(e) = validation::check(&self.draft) {
            self.error = Some(e.message.clone());
            return Err(e);
        }

        let result = match self.mode {
            ChildMode::Create => self.service.create_child(parent, &self.draft).await,
            ChildMode::Edit(id) => self.service.update_child(parent, id, &self.draft).await,
            ChildMode::Closed => return Err(AppError::validation("The editor is not open")),
        };

        match result {
            Ok(outcome) => {
                self.cancel();
                self.error = None;
                self.reload().await;
                Ok(outcome)
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Remove a child after confirmation. Siblings are not renumbered.
    pub async fn delete(&mut self, id: S::ChildId, confirm: &impl Confirmation) -> AppResult<Option<Outcome>> {
        self.require_parent()?;
        let prompt = match self.find(id) {
            Some(child) => format!("Delete term: \"{}\"?", backoffice_entity::term::TermText::text(child)),
            None => "Delete this term?".to_string(),
        };
        if !confirm.confirm(&prompt) {
            debug!(%id, "Child delete declined");
            return Ok(None);
        }

        match self.service.delete_child(id).await {
            Ok(outcome) => {
                if self.mode == ChildMode::Edit(id) {
                    self.cancel();
                }
                self.error = None;
                self.reload().await;
                Ok(Some(outcome))
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    fn require_parent(&self) -> AppResult<S::ParentId> {
        self.parent
            .ok_or_else(|| AppError::validation("Select a template first"))
    }

    fn find(&self, id: S::ChildId) -> Option<&S::Child> {
        self.children
            .value()?
            .iter()
            .find(|child| S::child_id(child) == id)
    }
}
