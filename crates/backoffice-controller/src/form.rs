//! Create/edit form over an editable resource.

use std::fmt;

use backoffice_client::client::Outcome;
use backoffice_client::resource::{Editable, ResourceService};
use backoffice_client::services::{ContractTemplates, DeliveryRecordTemplates, Users};
use backoffice_core::config::AfterCreate;
use backoffice_core::{AppError, AppResult};
use backoffice_entity::contract::{ContractTemplate, ContractTemplateForm};
use backoffice_entity::delivery_record::{DeliveryRecordTemplate, DeliveryRecordTemplateForm};
use backoffice_entity::user::{CreateUserForm, UpdateUserForm, User};
use backoffice_entity::validation;
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::list::ListDetailController;

/// Form fields that can check themselves before submit.
pub trait FormModel {
    /// Every client-side rule, judged on calendar date `today`.
    fn validate_on(&self, today: NaiveDate) -> AppResult<()>;
}

impl FormModel for CreateUserForm {
    fn validate_on(&self, today: NaiveDate) -> AppResult<()> {
        CreateUserForm::validate_on(self, today)
    }
}

impl FormModel for UpdateUserForm {
    fn validate_on(&self, _today: NaiveDate) -> AppResult<()> {
        validation::check(self)
    }
}

impl FormModel for ContractTemplateForm {
    fn validate_on(&self, _today: NaiveDate) -> AppResult<()> {
        validation::check(self)
    }
}

impl FormModel for DeliveryRecordTemplateForm {
    fn validate_on(&self, _today: NaiveDate) -> AppResult<()> {
        validation::check(self)
    }
}

/// An editable resource whose forms validate and whose edit form can be
/// filled from a fetched record.
pub trait EditableForm: Editable<CreateForm: FormModel + Default, UpdateForm: FormModel> {
    /// Edit fields populated from `record`.
    fn edit_form(record: &Self::Record) -> Self::UpdateForm;
}

impl EditableForm for Users {
    fn edit_form(record: &User) -> UpdateUserForm {
        UpdateUserForm::from_user(record)
    }
}

impl EditableForm for ContractTemplates {
    fn edit_form(record: &ContractTemplate) -> ContractTemplateForm {
        ContractTemplateForm::from_template(record)
    }
}

impl EditableForm for DeliveryRecordTemplates {
    fn edit_form(record: &DeliveryRecordTemplate) -> DeliveryRecordTemplateForm {
        DeliveryRecordTemplateForm::from_template(record)
    }
}

/// Which record the form writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<Id> {
    /// A new record.
    Create,
    /// An existing record.
    Edit(Id),
}

/// Form controller for one resource.
///
/// Validation failures and server rejections are kept apart: the first
/// never reaches the network, the second leaves the draft untouched so
/// the operator can correct it.
pub struct FormController<R: EditableForm> {
    service: ResourceService<R>,
    mode: FormMode<R::Id>,
    create_draft: R::CreateForm,
    edit_draft: Option<R::UpdateForm>,
    after_create: AfterCreate,
    validation_error: Option<String>,
    submit_error: Option<String>,
}

impl<R: EditableForm> fmt::Debug for FormController<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("resource", &R::ROUTES.name)
            .field("mode", &self.mode)
            .field("after_create", &self.after_create)
            .finish()
    }
}

impl<R: EditableForm> FormController<R> {
    /// A form in create mode.
    pub fn new(service: ResourceService<R>, after_create: AfterCreate) -> Self {
        Self {
            service,
            mode: FormMode::Create,
            create_draft: R::CreateForm::default(),
            edit_draft: None,
            after_create,
            validation_error: None,
            submit_error: None,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> FormMode<R::Id> {
        self.mode
    }

    /// Fields of the create draft.
    pub fn create_draft(&self) -> &R::CreateForm {
        &self.create_draft
    }

    /// Mutable create draft.
    pub fn create_draft_mut(&mut self) -> &mut R::CreateForm {
        &mut self.create_draft
    }

    /// Fields of the edit draft.
    pub fn edit_draft(&self) -> Option<&R::UpdateForm> {
        self.edit_draft.as_ref()
    }

    /// Mutable edit draft.
    pub fn edit_draft_mut(&mut self) -> Option<&mut R::UpdateForm> {
        self.edit_draft.as_mut()
    }

    /// Inline validation message.
    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    /// Server or transport failure of the last submit.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Switch to create mode with empty fields.
    pub fn start_create(&mut self) {
        self.mode = FormMode::Create;
        self.create_draft = R::CreateForm::default();
        self.edit_draft = None;
        self.clear_errors();
    }

    /// Switch to edit mode for `record`.
    pub fn start_edit(&mut self, record: &R::Record) {
        self.mode = FormMode::Edit(R::id_of(record));
        self.edit_draft = Some(R::edit_form(record));
        self.clear_errors();
    }

    /// Validate and send the draft, then refresh `list`.
    ///
    /// After an edit the detail is re-fetched and the edit fields reloaded
    /// from it. After a create the form resets or switches to editing the
    /// new record, as configured.
    pub async fn submit(&mut self, today: NaiveDate, list: &mut ListDetailController<R>) -> AppResult<Outcome> {
        self.clear_errors();
        match self.mode {
            FormMode::Create => self.submit_create(today, list).await,
            FormMode::Edit(id) => self.submit_edit(id, today, list).await,
        }
    }

    async fn submit_create(&mut self, today: NaiveDate, list: &mut ListDetailController<R>) -> AppResult<Outcome> {
        if let Err(e) = self.create_draft.validate_on(today) {
            debug!(resource = R::ROUTES.name, error = %e.message, "Create form invalid");
            self.validation_error = Some(e.message.clone());
            return Err(e);
        }

        let (outcome, id) = match self.service.create(&self.create_draft).await {
            Ok(created) => created,
            Err(e) => {
                self.submit_error = Some(e.user_message());
                return Err(e);
            }
        };

        list.refresh().await;
        if let (AfterCreate::Edit, Some(id)) = (self.after_create, id) {
            list.select(id).await;
        }
        match (self.after_create, list.detail()) {
            (AfterCreate::Edit, Some(record)) if Some(R::id_of(record)) == id => {
                self.mode = FormMode::Edit(R::id_of(record));
                self.edit_draft = Some(R::edit_form(record));
            }
            _ => self.start_create(),
        }
        list.set_notice(success_message(&outcome, R::ROUTES.name, "created"));
        info!(resource = R::ROUTES.name, id = ?id, "Form created record");
        Ok(outcome)
    }

    async fn submit_edit(
        &mut self,
        id: R::Id,
        today: NaiveDate,
        list: &mut ListDetailController<R>,
    ) -> AppResult<Outcome> {
        let Some(draft) = self.edit_draft.as_ref() else {
            let e = AppError::validation("Nothing to save; reload the record");
            self.validation_error = Some(e.message.clone());
            return Err(e);
        };
        if let Err(e) = draft.validate_on(today) {
            debug!(resource = R::ROUTES.name, %id, error = %e.message, "Edit form invalid");
            self.validation_error = Some(e.message.clone());
            return Err(e);
        }

        let outcome = match self.service.update(id, draft).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.submit_error = Some(e.user_message());
                return Err(e);
            }
        };

        list.refresh().await;
        list.select(id).await;
        if let Some(record) = list.detail() {
            self.edit_draft = Some(R::edit_form(record));
        }
        list.set_notice(success_message(&outcome, R::ROUTES.name, "updated"));
        Ok(outcome)
    }

    fn clear_errors(&mut self) {
        self.validation_error = None;
        self.submit_error = None;
    }
}

fn success_message(outcome: &Outcome, name: &str, action: &str) -> String {
    outcome
        .message
        .clone()
        .unwrap_or_else(|| format!("{name} {action} successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use backoffice_client::ApiClient;
    use backoffice_client::mock::MockTransport;
    use backoffice_core::traits::HttpMethod;
    use backoffice_core::types::ContractTemplateId;
    use serde_json::json;

    fn setup(
        after_create: AfterCreate,
    ) -> (
        Arc<MockTransport>,
        ListDetailController<ContractTemplates>,
        FormController<ContractTemplates>,
    ) {
        let mock = Arc::new(MockTransport::new());
        let service = ResourceService::new(ApiClient::new(mock.clone()));
        let list = ListDetailController::new(service.clone(), 10, Duration::from_millis(350));
        (mock, list, FormController::new(service, after_create))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_create_sends_nothing() {
        let (mock, mut list, mut form) = setup(AfterCreate::Reset);
        form.create_draft_mut().name = "Driver standard".into();

        let err = form.submit(today(), &mut list).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(form.validation_error(), Some("Version is required"));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_server_rejection_keeps_draft() {
        let (mock, mut list, mut form) = setup(AfterCreate::Reset);
        mock.fail(HttpMethod::Post, "/ContractTemplate/create", "Template name already exists");
        form.create_draft_mut().name = "Driver standard".into();
        form.create_draft_mut().version = "1".into();

        form.submit(today(), &mut list).await.unwrap_err();
        assert_eq!(form.submit_error(), Some("Template name already exists"));
        assert_eq!(form.validation_error(), None);
        assert_eq!(form.create_draft().name, "Driver standard");
        assert_eq!(mock.count(HttpMethod::Get, "/ContractTemplate/getAll"), 0);
    }

    #[tokio::test]
    async fn test_create_then_edit_new_record() {
        let (mock, mut list, mut form) = setup(AfterCreate::Edit);
        let id = ContractTemplateId::new();
        let record = json!({ "contractTemplateId": id, "contractTemplateName": "Driver standard", "version": "1", "type": "DRIVER_CONTRACT" });
        mock.ok(HttpMethod::Post, "/ContractTemplate/create", json!({ "contractTemplateId": id }));
        mock.ok(HttpMethod::Get, "/ContractTemplate/getAll", json!([record.clone()]));
        mock.ok(HttpMethod::Get, &format!("/ContractTemplate/getById/{id}"), record);

        form.create_draft_mut().name = "Driver standard".into();
        form.create_draft_mut().version = "1".into();
        form.submit(today(), &mut list).await.unwrap();

        assert_eq!(form.mode(), FormMode::Edit(id));
        assert_eq!(form.edit_draft().map(|d| d.version.as_str()), Some("1"));
        assert_eq!(mock.count(HttpMethod::Get, "/ContractTemplate/getAll"), 1);
    }

    #[tokio::test]
    async fn test_create_stays_in_create_when_new_record_unreadable() {
        let (mock, mut list, mut form) = setup(AfterCreate::Edit);
        let id = ContractTemplateId::new();
        mock.ok(HttpMethod::Post, "/ContractTemplate/create", json!({ "contractTemplateId": id }));
        mock.ok(HttpMethod::Get, "/ContractTemplate/getAll", json!([]));
        mock.unreachable(HttpMethod::Get, &format!("/ContractTemplate/getById/{id}"));

        form.create_draft_mut().name = "Driver standard".into();
        form.create_draft_mut().version = "1".into();
        form.submit(today(), &mut list).await.unwrap();

        assert_eq!(form.mode(), FormMode::Create);
        assert!(form.edit_draft().is_none());
        assert_eq!(form.create_draft().name, "");
    }

    #[tokio::test]
    async fn test_edit_without_loaded_record_is_refused() {
        let (mock, mut list, mut form) = setup(AfterCreate::Reset);
        form.mode = FormMode::Edit(ContractTemplateId::new());

        let err = form.submit(today(), &mut list).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(form.validation_error(), Some("Nothing to save; reload the record"));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_underage_driver_not_registered() {
        use backoffice_entity::user::UserRole;

        let mock = Arc::new(MockTransport::new());
        let service = ResourceService::<Users>::new(ApiClient::new(mock.clone()));
        let mut list = ListDetailController::new(service.clone(), 10, Duration::from_millis(350));
        let mut form = FormController::new(service, AfterCreate::Reset);
        let draft = form.create_draft_mut();
        draft.full_name = "Nguyen Van An".into();
        draft.email = "an@example.com".into();
        draft.phone_number = "0900000000".into();
        draft.password = "secret".into();
        draft.confirm_password = "secret".into();
        draft.role = UserRole::Driver;
        draft.date_of_birth = NaiveDate::from_ymd_opt(2010, 1, 1);

        let err = form.submit(today(), &mut list).await.unwrap_err();
        assert!(err.is_validation());
        assert!(form.validation_error().is_some_and(|m| m.contains("18")));
        assert_eq!(mock.count(HttpMethod::Post, "/Auth/register-for-admin"), 0);
        assert!(mock.requests().is_empty());
    }
}
