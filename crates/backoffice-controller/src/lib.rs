//! # backoffice-controller
//!
//! View-model controllers for the console. Each controller owns the state
//! of one view and is mutated through `&mut self`; every network call goes
//! through the services in `backoffice-client`.
//!
//! Fetches are split into a *begin* step that issues a [`panel::Ticket`]
//! and an *apply* step that drops responses whose ticket is no longer the
//! latest, so the last request started is the one shown.

pub mod access;
pub mod children;
pub mod dashboard;
pub mod debounce;
pub mod form;
pub mod list;
pub mod panel;
pub mod review;

pub use access::{Area, RoleGuard};
pub use children::ChildEditor;
pub use dashboard::DashboardController;
pub use debounce::Debounce;
pub use form::{EditableForm, FormController, FormMode, FormModel};
pub use list::{Confirmation, ListDetailController};
pub use panel::{Panel, Ticket};
