//! Contract template commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use backoffice_client::services::{ContractTemplates, ContractTermService};
use backoffice_controller::access::Area;
use backoffice_controller::form::FormController;
use backoffice_core::AppError;
use backoffice_core::types::ContractTemplateId;
use backoffice_entity::contract::{ContractTemplate, ContractTemplateForm, ContractType};

use super::terms::{self, TermCommand};
use super::{ListArgs, delete_record, load_for_edit, show_list, submit_form};
use crate::context::Console;
use crate::output;

/// Arguments for contract template commands
#[derive(Debug, Args)]
pub struct ContractArgs {
    /// Contract subcommand
    #[command(subcommand)]
    pub command: ContractCommand,
}

/// Contract template subcommands
#[derive(Debug, Subcommand)]
pub enum ContractCommand {
    /// List templates
    List(ListArgs),
    /// Show a template with its terms
    Show {
        /// Template ID
        id: ContractTemplateId,
    },
    /// Create a template
    Create {
        /// Template name
        #[arg(long)]
        name: String,
        /// Version label
        #[arg(long)]
        version: String,
        /// PROVIDER_CONTRACT or DRIVER_CONTRACT
        #[arg(long = "type", default_value = "PROVIDER_CONTRACT")]
        contract_type: String,
    },
    /// Update a template
    Update {
        /// Template ID
        id: ContractTemplateId,
        /// Template name
        #[arg(long)]
        name: Option<String>,
        /// Version label
        #[arg(long)]
        version: Option<String>,
        /// PROVIDER_CONTRACT or DRIVER_CONTRACT
        #[arg(long = "type")]
        contract_type: Option<String>,
    },
    /// Delete a template
    Delete {
        /// Template ID
        id: ContractTemplateId,
    },
    /// Manage the terms of a template
    #[command(subcommand)]
    Term(TermCommand),
}

#[derive(Debug, Serialize, Tabled)]
struct ContractRow {
    id: String,
    name: String,
    version: String,
    #[tabled(rename = "type")]
    contract_type: String,
    created: String,
}

fn contract_row(template: &ContractTemplate) -> ContractRow {
    ContractRow {
        id: template.contract_template_id.to_string(),
        name: template.contract_template_name.clone(),
        version: template.version.clone(),
        contract_type: template.contract_type.label().to_string(),
        created: output::date(template.created_at),
    }
}

/// Execute contract template commands
pub async fn execute(args: &ContractArgs, console: &Console) -> Result<(), AppError> {
    console.require(Area::Templates)?;

    match &args.command {
        ContractCommand::List(list_args) => {
            let mut list = console.list::<ContractTemplates>();
            show_list(console, &mut list, list_args, contract_row).await?;
        }
        ContractCommand::Show { id } => {
            let template = console.service::<ContractTemplates>().get(*id).await?;
            output::print_item(&template, console.format);
        }
        ContractCommand::Create {
            name,
            version,
            contract_type,
        } => {
            let contract_type: ContractType = contract_type.parse()?;
            let mut list = console.list::<ContractTemplates>();
            let mut form = FormController::new(
                console.service::<ContractTemplates>(),
                console.config.console.after_create,
            );
            form.start_create();
            *form.create_draft_mut() = ContractTemplateForm {
                name: name.clone(),
                version: version.clone(),
                contract_type,
            };
            submit_form(console, &mut form, &mut list).await?;
        }
        ContractCommand::Update {
            id,
            name,
            version,
            contract_type,
        } => {
            let contract_type: Option<ContractType> =
                contract_type.as_deref().map(str::parse).transpose()?;
            let mut list = console.list::<ContractTemplates>();
            let mut form = FormController::new(
                console.service::<ContractTemplates>(),
                console.config.console.after_create,
            );
            load_for_edit(&mut list, &mut form, *id).await?;
            if let Some(draft) = form.edit_draft_mut() {
                if let Some(name) = name {
                    draft.name = name.clone();
                }
                if let Some(version) = version {
                    draft.version = version.clone();
                }
                if let Some(contract_type) = contract_type {
                    draft.contract_type = contract_type;
                }
            }
            submit_form(console, &mut form, &mut list).await?;
        }
        ContractCommand::Delete { id } => delete_record::<ContractTemplates>(console, *id).await?,
        ContractCommand::Term(command) => {
            terms::execute(command, ContractTermService::new(console.client.clone()), console).await?
        }
    }

    Ok(())
}
