//! User account records and forms.

pub mod form;
pub mod model;
pub mod role;
pub mod status;

pub use form::{CreateUserForm, UpdateUserForm, age_on, MINIMUM_AGE};
pub use model::{RoleOption, User};
pub use role::UserRole;
pub use status::UserStatus;
