//! Verification document review commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use backoffice_client::services::{Reviewable, UserDocuments, VehicleDocuments};
use backoffice_controller::access::Area;
use backoffice_core::AppError;
use backoffice_core::types::DocumentId;
use backoffice_entity::document::{ReviewDecision, UserDocument, VehicleDocument};

use super::{ListArgs, show_list};
use crate::context::Console;
use crate::output::{self, or_dash};

/// Arguments for document review commands
#[derive(Debug, Args)]
pub struct DocumentArgs {
    /// Document kind
    #[command(subcommand)]
    pub command: DocumentCommand,
}

/// Document kinds under review
#[derive(Debug, Subcommand)]
pub enum DocumentCommand {
    /// Identity documents uploaded by users
    #[command(subcommand)]
    User(ReviewCommand),
    /// Documents attached to vehicles
    #[command(subcommand)]
    Vehicle(ReviewCommand),
}

/// Review subcommands
#[derive(Debug, Subcommand)]
pub enum ReviewCommand {
    /// List documents waiting for review
    List(ListArgs),
    /// Show one document
    Show {
        /// Document ID
        id: DocumentId,
    },
    /// Approve a document
    Approve {
        /// Document ID
        id: DocumentId,
    },
    /// Reject a document
    Reject {
        /// Document ID
        id: DocumentId,
        /// Reason shown to the uploader
        #[arg(long)]
        reason: Option<String>,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct UserDocumentRow {
    id: String,
    user: String,
    #[tabled(rename = "type")]
    document_type: String,
    status: String,
    submitted: String,
}

#[derive(Debug, Serialize, Tabled)]
struct VehicleDocumentRow {
    id: String,
    plate: String,
    #[tabled(rename = "type")]
    document_type: String,
    status: String,
    expires: String,
    submitted: String,
}

fn user_document_row(doc: &UserDocument) -> UserDocumentRow {
    UserDocumentRow {
        id: doc.user_document_id.to_string(),
        user: or_dash(doc.full_name.as_deref()),
        document_type: doc.document_type.clone(),
        status: doc.status.to_string(),
        submitted: output::date(doc.created_at),
    }
}

fn vehicle_document_row(doc: &VehicleDocument) -> VehicleDocumentRow {
    VehicleDocumentRow {
        id: doc.vehicle_document_id.to_string(),
        plate: or_dash(doc.plate_number.as_deref()),
        document_type: doc.document_type.clone(),
        status: doc.status.to_string(),
        expires: output::date(doc.expiration_date),
        submitted: output::date(doc.created_at),
    }
}

/// Execute document review commands
pub async fn execute(args: &DocumentArgs, console: &Console) -> Result<(), AppError> {
    console.require(Area::DocumentReview)?;

    match &args.command {
        DocumentCommand::User(command) => {
            review::<UserDocuments, _>(command, console, user_document_row).await
        }
        DocumentCommand::Vehicle(command) => {
            review::<VehicleDocuments, _>(command, console, vehicle_document_row).await
        }
    }
}

async fn review<R, Row>(
    command: &ReviewCommand,
    console: &Console,
    to_row: fn(&R::Record) -> Row,
) -> Result<(), AppError>
where
    R: Reviewable,
    R::Record: Serialize,
    Row: Serialize + Tabled,
{
    let mut list = console.list::<R>();

    let (id, decision) = match command {
        ReviewCommand::List(list_args) => return show_list(console, &mut list, list_args, to_row).await,
        ReviewCommand::Show { id } => {
            let document = console.service::<R>().get(*id).await?;
            output::print_item(&document, console.format);
            return Ok(());
        }
        ReviewCommand::Approve { id } => (*id, ReviewDecision::Approve),
        ReviewCommand::Reject { id, reason } => {
            (*id, ReviewDecision::reject(reason.clone().unwrap_or_default()))
        }
    };

    list.select(id).await;
    if let Some(e) = list.detail_panel().failure() {
        return Err(e.clone());
    }
    list.review_selected(&decision).await?;
    output::print_success(list.notice().unwrap_or("Review recorded"));
    Ok(())
}
