//! User accounts, roles, and a user's documents.

use backoffice_core::traits::{ApiRequest, RequestBody};
use backoffice_core::types::UserId;
use backoffice_core::AppResult;
use backoffice_entity::document::UserDocumentList;
use backoffice_entity::user::{CreateUserForm, RoleOption, UpdateUserForm, User};
use serde_json::Value;

use super::json_body;
use crate::resource::{Editable, Resource, ResourceService, id_field};
use crate::routes::Routes;

/// User accounts. New accounts go through the admin registration route.
#[derive(Debug, Clone, Copy)]
pub struct Users;

impl Resource for Users {
    type Id = UserId;
    type Record = User;
    const ROUTES: Routes = Routes::rest("User", "/User", "/User/{id}")
        .with_create("/Auth/register-for-admin")
        .with_update("/User/{id}")
        .with_delete("/User/{id}");

    fn id_of(record: &User) -> UserId {
        record.user_id
    }
}

impl Editable for Users {
    type CreateForm = CreateUserForm;
    type UpdateForm = UpdateUserForm;

    fn create_body(form: &CreateUserForm) -> AppResult<RequestBody> {
        Ok(RequestBody::Multipart(form.to_form_parts()))
    }

    fn update_body(_id: UserId, form: &UpdateUserForm) -> AppResult<RequestBody> {
        json_body(form)
    }

    fn created_id(result: Option<&Value>) -> Option<UserId> {
        id_field(result, "userId")
    }
}

impl ResourceService<Users> {
    /// Roles offered by the registration form (`GET /Admin/roles`),
    /// without `Admin`.
    pub async fn assignable_roles(&self) -> AppResult<Vec<RoleOption>> {
        let roles: Vec<RoleOption> = self
            .client()
            .fetch("roles", ApiRequest::get("/Admin/roles"))
            .await?;
        Ok(roles
            .into_iter()
            .filter(|role| role.role_name.is_assignable())
            .collect())
    }

    /// Documents a user has submitted (`GET /UserDocument/user/{id}`).
    pub async fn documents(&self, user_id: UserId) -> AppResult<UserDocumentList> {
        self.client()
            .fetch(
                "user documents",
                ApiRequest::get(format!("/UserDocument/user/{user_id}")),
            )
            .await
    }
}
