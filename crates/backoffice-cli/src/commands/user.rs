//! User account commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use backoffice_client::services::Users;
use backoffice_controller::access::Area;
use backoffice_controller::form::FormController;
use backoffice_core::AppError;
use backoffice_core::types::UserId;
use backoffice_entity::document::AggregateStatus;
use backoffice_entity::user::{CreateUserForm, User, UserRole};

use super::{ListArgs, delete_record, load_for_edit, print_rows, submit_form};
use crate::context::{Console, read_password};
use crate::output::{self, OutputFormat, or_dash};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List user accounts
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Only this role
        #[arg(short, long)]
        role: Option<String>,
        /// Hide staff accounts
        #[arg(long)]
        hide_staff: bool,
    },
    /// Show one account
    Show {
        /// User ID
        id: UserId,
    },
    /// List roles that can be assigned
    Roles,
    /// Create an account
    Create {
        /// Full name
        #[arg(long)]
        full_name: String,
        /// Email
        #[arg(long)]
        email: String,
        /// Phone number
        #[arg(long)]
        phone: String,
        /// Role (Staff, Driver, Owner, Provider)
        #[arg(long)]
        role: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        date_of_birth: Option<NaiveDate>,
        /// Postal address
        #[arg(long)]
        address: Option<String>,
    },
    /// Update an account
    Update {
        /// User ID
        id: UserId,
        /// Full name
        #[arg(long)]
        full_name: Option<String>,
        /// Avatar URL
        #[arg(long)]
        avatar_url: Option<String>,
        /// Driving licence number
        #[arg(long)]
        license_number: Option<String>,
        /// Driving licence class
        #[arg(long)]
        license_class: Option<String>,
        /// Company name
        #[arg(long)]
        company_name: Option<String>,
        /// Tax code
        #[arg(long)]
        tax_code: Option<String>,
    },
    /// Delete an account
    Delete {
        /// User ID
        id: UserId,
    },
    /// Show the verification status of an account's documents
    Documents {
        /// User ID
        id: UserId,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Full name
    name: String,
    /// Email
    email: String,
    /// Phone
    phone: String,
    /// Role
    role: String,
    /// Status
    status: String,
    /// Created at
    created_at: String,
}

fn user_row(user: &User) -> UserRow {
    UserRow {
        id: user.user_id.to_string(),
        name: user.full_name.clone(),
        email: or_dash(user.email.as_deref()),
        phone: or_dash(user.phone_number.as_deref()),
        role: user.role.to_string(),
        status: user.status.to_string(),
        created_at: output::date(user.created_at),
    }
}

#[derive(Debug, Serialize, Tabled)]
struct DocumentRow {
    #[tabled(rename = "type")]
    document_type: String,
    status: String,
    reason: String,
    submitted: String,
}

/// Execute user commands
pub async fn execute(args: &UserArgs, console: &Console) -> Result<(), AppError> {
    console.require(Area::Users)?;

    match &args.command {
        UserCommand::List {
            list: list_args,
            role,
            hide_staff,
        } => {
            let role: Option<UserRole> = role.as_deref().map(str::parse).transpose()?;

            let mut list = console.list::<Users>();
            list_args.apply(&mut list)?;
            if let Some(role) = role {
                list.set_filter("role", move |user: &User| user.role == role).await;
            }
            if *hide_staff {
                list.set_filter("hide-staff", |user: &User| user.role != UserRole::Staff)
                    .await;
            }
            list.refresh().await;
            print_rows(console, &list, user_row)?;
        }
        UserCommand::Show { id } => {
            let user = console.service::<Users>().get(*id).await?;
            output::print_item(&user, console.format);
        }
        UserCommand::Roles => {
            let roles = console.service::<Users>().assignable_roles().await?;
            let names: Vec<String> = roles.iter().map(|r| r.role_name.to_string()).collect();
            match console.format {
                OutputFormat::Json => output::print_item(&names, console.format),
                OutputFormat::Table => names.iter().for_each(|name| println!("{name}")),
            }
        }
        UserCommand::Create {
            full_name,
            email,
            phone,
            role,
            date_of_birth,
            address,
        } => {
            let role: UserRole = role.parse()?;
            let password = read_password("Password")?;

            let mut list = console.list::<Users>();
            let mut form = FormController::new(console.service::<Users>(), console.config.console.after_create);
            form.start_create();
            *form.create_draft_mut() = CreateUserForm {
                full_name: full_name.clone(),
                email: email.clone(),
                phone_number: phone.clone(),
                confirm_password: password.clone(),
                password,
                role,
                date_of_birth: *date_of_birth,
                address: address.clone(),
            };
            submit_form(console, &mut form, &mut list).await?;
        }
        UserCommand::Update {
            id,
            full_name,
            avatar_url,
            license_number,
            license_class,
            company_name,
            tax_code,
        } => {
            let mut list = console.list::<Users>();
            let mut form = FormController::new(console.service::<Users>(), console.config.console.after_create);
            load_for_edit(&mut list, &mut form, *id).await?;

            if let Some(draft) = form.edit_draft_mut() {
                let fields = [
                    (&mut draft.full_name, full_name),
                    (&mut draft.avatar_url, avatar_url),
                    (&mut draft.license_number, license_number),
                    (&mut draft.license_class, license_class),
                    (&mut draft.company_name, company_name),
                    (&mut draft.tax_code, tax_code),
                ];
                for (field, value) in fields {
                    if let Some(value) = value {
                        *field = value.clone();
                    }
                }
            }
            submit_form(console, &mut form, &mut list).await?;
        }
        UserCommand::Delete { id } => delete_record::<Users>(console, *id).await?,
        UserCommand::Documents { id } => {
            let documents = console.service::<Users>().documents(*id).await?.documents;
            let status = AggregateStatus::of(&documents);

            if console.format == OutputFormat::Json {
                let value = serde_json::json!({
                    "status": status.to_string(),
                    "documents": documents,
                });
                output::print_item(&value, console.format);
                return Ok(());
            }

            let rows: Vec<DocumentRow> = documents
                .iter()
                .map(|d| DocumentRow {
                    document_type: d.document_type.clone(),
                    status: d.status.to_string(),
                    reason: or_dash(d.rejection_reason.as_deref()),
                    submitted: output::date(d.created_at),
                })
                .collect();
            output::print_kv("Verification", &status.to_string());
            output::print_list(&rows, console.format);
        }
    }

    Ok(())
}
