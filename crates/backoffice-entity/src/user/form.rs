//! User create/update payloads.

use backoffice_core::traits::FormPart;
use backoffice_core::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::model::User;
use super::role::UserRole;
use crate::validation;

/// Minimum age for accounts whose role requires a date of birth.
pub const MINIMUM_AGE: i32 = 18;

/// Date of birth sent when the role does not require one.
const PLACEHOLDER_DATE_OF_BIRTH: &str = "2000-01-01T00:00:00.000Z";

/// Address sent when none was entered.
const PLACEHOLDER_ADDRESS: &str = "N/A";

/// Admin "create account" form (`POST /Auth/register-for-admin`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserForm {
    /// Full name.
    #[validate(custom(function = "validation::not_blank", message = "Full name is required"))]
    pub full_name: String,
    /// Email.
    #[validate(email(message = "Email is not valid"))]
    pub email: String,
    /// Phone number.
    #[validate(custom(function = "validation::not_blank", message = "Phone number is required"))]
    pub phone_number: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Password confirmation.
    #[validate(
        length(min = 1, message = "Password confirmation is required"),
        must_match(other = "password", message = "Password confirmation does not match")
    )]
    pub confirm_password: String,
    /// Role to assign.
    pub role: UserRole,
    /// Date of birth (required for drivers, owners, providers).
    pub date_of_birth: Option<NaiveDate>,
    /// Postal address.
    pub address: Option<String>,
}

impl CreateUserForm {
    /// Check every client-side rule against the given calendar date.
    ///
    /// Field rules run first, then the role rules: a role must be chosen,
    /// admins cannot be created here, and drivers, owners, and providers
    /// need a date of birth at least [`MINIMUM_AGE`] years before `today`.
    pub fn validate_on(&self, today: NaiveDate) -> AppResult<()> {
        validation::check(self)?;

        if !self.role.is_known() {
            return Err(AppError::validation("A role must be selected"));
        }
        if !self.role.is_assignable() {
            return Err(AppError::validation(format!(
                "Accounts with role {} cannot be created here",
                self.role
            )));
        }

        if self.role.requires_date_of_birth() {
            let dob = self
                .date_of_birth
                .ok_or_else(|| AppError::validation("Date of birth is required"))?;
            if age_on(dob, today) < MINIMUM_AGE {
                return Err(AppError::validation(format!(
                    "User must be at least {MINIMUM_AGE} years old to create an account"
                )));
            }
        }

        Ok(())
    }

    /// Multipart parts in the shape the registration DTO expects.
    pub fn to_form_parts(&self) -> Vec<FormPart> {
        let date_of_birth = self
            .date_of_birth
            .map(|dob| format!("{}T00:00:00.000Z", dob.format("%Y-%m-%d")))
            .unwrap_or_else(|| PLACEHOLDER_DATE_OF_BIRTH.to_string());
        let address = self
            .address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(PLACEHOLDER_ADDRESS);

        vec![
            FormPart::new("FullName", self.full_name.trim()),
            FormPart::new("Email", self.email.trim()),
            FormPart::new("PhoneNumber", self.phone_number.trim()),
            FormPart::new("Password", &self.password),
            FormPart::new("ConfirmPassword", &self.confirm_password),
            FormPart::new("RoleName", self.role.as_str()),
            FormPart::new("DateOfBirth", date_of_birth),
            FormPart::new("Address", address),
        ]
    }
}

/// Admin "edit account" form (`PUT /User/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserForm {
    /// Full name.
    #[validate(custom(function = "validation::not_blank", message = "Full name is required"))]
    pub full_name: String,
    /// Avatar URL.
    pub avatar_url: String,
    /// Driving licence number.
    pub license_number: String,
    /// Driving licence class.
    pub license_class: String,
    /// Company name.
    pub company_name: String,
    /// Tax code.
    pub tax_code: String,
}

impl UpdateUserForm {
    /// Populate from a fetched record.
    pub fn from_user(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            avatar_url: user.avatar_url.clone().unwrap_or_default(),
            license_number: user.license_number.clone().unwrap_or_default(),
            license_class: user.license_class.clone().unwrap_or_default(),
            company_name: user.company_name.clone().unwrap_or_default(),
            tax_code: user.tax_code.clone().unwrap_or_default(),
        }
    }
}

/// Age in whole years on `today`.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn driver_form(dob: Option<NaiveDate>) -> CreateUserForm {
        CreateUserForm {
            full_name: "Minh Pham".into(),
            email: "minh@example.test".into(),
            phone_number: "0901234567".into(),
            password: "s3cret!".into(),
            confirm_password: "s3cret!".into(),
            role: UserRole::Driver,
            date_of_birth: dob,
            address: None,
        }
    }

    #[test]
    fn test_age_boundary() {
        let dob = NaiveDate::from_ymd_opt(2008, 10, 17).unwrap();
        assert_eq!(age_on(dob, today()), 18);
        let dob = NaiveDate::from_ymd_opt(2008, 10, 18).unwrap();
        assert_eq!(age_on(dob, today()), 17);
    }

    #[test]
    fn test_underage_driver_rejected() {
        let form = driver_form(NaiveDate::from_ymd_opt(2010, 1, 1));
        let err = form.validate_on(today()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.message.contains("18"));
    }

    #[test]
    fn test_driver_without_dob_rejected() {
        let err = driver_form(None).validate_on(today()).unwrap_err();
        assert_eq!(err.message, "Date of birth is required");
    }

    #[test]
    fn test_adult_driver_accepted() {
        assert!(driver_form(NaiveDate::from_ymd_opt(1990, 6, 1)).validate_on(today()).is_ok());
    }

    #[test]
    fn test_staff_needs_no_dob() {
        let mut form = driver_form(None);
        form.role = UserRole::Staff;
        assert!(form.validate_on(today()).is_ok());
    }

    #[test]
    fn test_password_mismatch() {
        let mut form = driver_form(NaiveDate::from_ymd_opt(1990, 6, 1));
        form.confirm_password = "other".into();
        assert_eq!(
            form.validate_on(today()).unwrap_err().message,
            "Password confirmation does not match"
        );
    }

    #[test]
    fn test_role_required_and_admin_refused() {
        let mut form = driver_form(NaiveDate::from_ymd_opt(1990, 6, 1));
        form.role = UserRole::Unknown;
        assert_eq!(form.validate_on(today()).unwrap_err().message, "A role must be selected");
        form.role = UserRole::Admin;
        assert!(form.validate_on(today()).is_err());
    }

    #[test]
    fn test_form_parts_placeholders() {
        let mut form = driver_form(None);
        form.role = UserRole::Staff;
        let parts = form.to_form_parts();
        let value = |name: &str| {
            parts
                .iter()
                .find(|p| p.name == name)
                .map(|p| p.value.clone())
                .unwrap()
        };
        assert_eq!(value("RoleName"), "Staff");
        assert_eq!(value("DateOfBirth"), PLACEHOLDER_DATE_OF_BIRTH);
        assert_eq!(value("Address"), "N/A");
    }
}
