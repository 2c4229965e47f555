//! Per-resource route tables.
//!
//! The backend is not uniform: most resources follow `/Resource/{id}`, but
//! some use action-suffixed routes (`/Item/get-item-by-id/{id}`) or carry
//! the id in the body (`PUT /ContractTemplate/update`). Each resource
//! declares its own table; `{id}` is substituted at request time.

use std::fmt::Display;

use backoffice_core::AppError;
use backoffice_core::AppResult;
use backoffice_core::types::SortKeys;

/// Route templates for one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routes {
    /// Human name used in logs and errors.
    pub name: &'static str,
    /// List endpoint.
    pub list: &'static str,
    /// Detail endpoint, with `{id}`. `None` when list rows are complete.
    pub detail: Option<&'static str>,
    /// Create endpoint, if the console may create this resource.
    pub create: Option<&'static str>,
    /// Update endpoint, `{id}` optional.
    pub update: Option<&'static str>,
    /// Delete endpoint, with `{id}`.
    pub delete: Option<&'static str>,
    /// Sort parameter names of the list endpoint.
    pub sort_keys: SortKeys,
}

impl Routes {
    /// Standard REST routes under `/{base}`.
    pub const fn rest(
        name: &'static str,
        list: &'static str,
        detail: &'static str,
    ) -> Self {
        Self {
            name,
            list,
            detail: Some(detail),
            create: None,
            update: None,
            delete: None,
            sort_keys: SortKeys::FIELD_DIRECTION,
        }
    }

    /// Routes of a resource that is only listed; its rows carry every
    /// field.
    pub const fn list_only(name: &'static str, list: &'static str) -> Self {
        Self {
            name,
            list,
            detail: None,
            create: None,
            update: None,
            delete: None,
            sort_keys: SortKeys::FIELD_DIRECTION,
        }
    }

    /// Builder: set the create route.
    pub const fn with_create(mut self, path: &'static str) -> Self {
        self.create = Some(path);
        self
    }

    /// Builder: set the update route.
    pub const fn with_update(mut self, path: &'static str) -> Self {
        self.update = Some(path);
        self
    }

    /// Builder: set the delete route.
    pub const fn with_delete(mut self, path: &'static str) -> Self {
        self.delete = Some(path);
        self
    }

    /// Builder: set the sort parameter names.
    pub const fn with_sort_keys(mut self, keys: SortKeys) -> Self {
        self.sort_keys = keys;
        self
    }

    /// Detail path for `id`, if the resource has a detail endpoint.
    pub fn detail_path(&self, id: impl Display) -> Option<String> {
        self.detail.map(|route| fill(route, id))
    }

    /// Create path, or an error if the resource is read-only here.
    pub fn create_path(&self) -> AppResult<String> {
        self.create
            .map(str::to_string)
            .ok_or_else(|| self.unsupported("created"))
    }

    /// Update path for `id`.
    pub fn update_path(&self, id: impl Display) -> AppResult<String> {
        self.update
            .map(|route| fill(route, id))
            .ok_or_else(|| self.unsupported("updated"))
    }

    /// Delete path for `id`.
    pub fn delete_path(&self, id: impl Display) -> AppResult<String> {
        self.delete
            .map(|route| fill(route, id))
            .ok_or_else(|| self.unsupported("deleted"))
    }

    /// Whether records can be deleted from the console.
    pub fn can_delete(&self) -> bool {
        self.delete.is_some()
    }

    fn unsupported(&self, action: &str) -> AppError {
        AppError::validation(format!("{} records cannot be {action} here", self.name))
    }
}

fn fill(route: &str, id: impl Display) -> String {
    route.replace("{id}", &id.to_string())
}
