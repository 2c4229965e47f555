//! Delivery-record template commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use backoffice_client::services::{ChildService, DeliveryRecordTemplates, DeliveryRecordTermService};
use backoffice_controller::access::Area;
use backoffice_controller::form::FormController;
use backoffice_core::AppError;
use backoffice_core::types::DeliveryRecordTemplateId;
use backoffice_entity::delivery_record::{
    DeliveryRecordTemplate, DeliveryRecordTemplateForm, DeliveryRecordType,
};

use super::terms::{self, TermCommand};
use super::{ListArgs, delete_record, load_for_edit, show_list, submit_form};
use crate::context::Console;
use crate::output;

/// Arguments for delivery-record template commands
#[derive(Debug, Args)]
pub struct DeliveryRecordArgs {
    /// Delivery-record subcommand
    #[command(subcommand)]
    pub command: DeliveryRecordCommand,
}

/// Delivery-record template subcommands
#[derive(Debug, Subcommand)]
pub enum DeliveryRecordCommand {
    /// List templates
    List(ListArgs),
    /// Show a template with its terms
    Show {
        /// Template ID
        id: DeliveryRecordTemplateId,
    },
    /// Create a template
    Create {
        /// Template name
        #[arg(long)]
        name: String,
        /// Version label
        #[arg(long, default_value = "")]
        version: String,
        /// PICKUP or DROPOFF
        #[arg(long = "type", default_value = "PICKUP")]
        record_type: String,
    },
    /// Update a template
    Update {
        /// Template ID
        id: DeliveryRecordTemplateId,
        /// Template name
        #[arg(long)]
        name: Option<String>,
        /// Version label
        #[arg(long)]
        version: Option<String>,
        /// PICKUP or DROPOFF
        #[arg(long = "type")]
        record_type: Option<String>,
    },
    /// Delete a template
    Delete {
        /// Template ID
        id: DeliveryRecordTemplateId,
    },
    /// Manage the terms of a template
    #[command(subcommand)]
    Term(TermCommand),
}

#[derive(Debug, Serialize, Tabled)]
struct TemplateRow {
    id: String,
    name: String,
    version: String,
    #[tabled(rename = "type")]
    record_type: String,
    status: String,
    created: String,
}

fn template_row(template: &DeliveryRecordTemplate) -> TemplateRow {
    TemplateRow {
        id: template.delivery_record_template_id.to_string(),
        name: template.template_name.clone(),
        version: output::or_dash(Some(template.version.as_str())),
        record_type: template.record_type.to_string(),
        status: template.status.to_string(),
        created: output::date(template.created_at),
    }
}

/// Execute delivery-record template commands
pub async fn execute(args: &DeliveryRecordArgs, console: &Console) -> Result<(), AppError> {
    console.require(Area::Templates)?;

    match &args.command {
        DeliveryRecordCommand::List(list_args) => {
            let mut list = console.list::<DeliveryRecordTemplates>();
            show_list(console, &mut list, list_args, template_row).await?;
        }
        DeliveryRecordCommand::Show { id } => {
            let template = console.service::<DeliveryRecordTemplates>().get(*id).await?;
            let terms = DeliveryRecordTermService::new(console.client.clone())
                .children(*id)
                .await?;
            let value = serde_json::json!({ "template": template, "terms": terms });
            output::print_item(&value, console.format);
        }
        DeliveryRecordCommand::Create {
            name,
            version,
            record_type,
        } => {
            let record_type: DeliveryRecordType = record_type.parse()?;
            let mut list = console.list::<DeliveryRecordTemplates>();
            let mut form = FormController::new(
                console.service::<DeliveryRecordTemplates>(),
                console.config.console.after_create,
            );
            form.start_create();
            *form.create_draft_mut() = DeliveryRecordTemplateForm {
                template_name: name.clone(),
                version: version.clone(),
                record_type,
            };
            submit_form(console, &mut form, &mut list).await?;
        }
        DeliveryRecordCommand::Update {
            id,
            name,
            version,
            record_type,
        } => {
            let record_type: Option<DeliveryRecordType> =
                record_type.as_deref().map(str::parse).transpose()?;
            let mut list = console.list::<DeliveryRecordTemplates>();
            let mut form = FormController::new(
                console.service::<DeliveryRecordTemplates>(),
                console.config.console.after_create,
            );
            load_for_edit(&mut list, &mut form, *id).await?;
            if let Some(draft) = form.edit_draft_mut() {
                if let Some(name) = name {
                    draft.template_name = name.clone();
                }
                if let Some(version) = version {
                    draft.version = version.clone();
                }
                if let Some(record_type) = record_type {
                    draft.record_type = record_type;
                }
            }
            submit_form(console, &mut form, &mut list).await?;
        }
        DeliveryRecordCommand::Delete { id } => {
            delete_record::<DeliveryRecordTemplates>(console, *id).await?
        }
        DeliveryRecordCommand::Term(command) => {
            terms::execute(command, DeliveryRecordTermService::new(console.client.clone()), console)
                .await?
        }
    }

    Ok(())
}
