//! Wallet transaction commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use backoffice_client::services::Transactions;
use backoffice_controller::access::Area;
use backoffice_core::AppError;
use backoffice_core::types::TransactionId;
use backoffice_entity::transaction::{AmountDirection, Transaction, TransactionType};

use super::{ListArgs, print_rows};
use crate::context::Console;
use crate::output::{self, or_dash};

/// Arguments for transaction commands
#[derive(Debug, Args)]
pub struct TransactionArgs {
    /// Transaction subcommand
    #[command(subcommand)]
    pub command: TransactionCommand,
}

/// Transaction subcommands
#[derive(Debug, Subcommand)]
pub enum TransactionCommand {
    /// List transactions
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Only this type (TOPUP, WITHDRAWAL, DRIVER_PAYOUT, OWNER_PAYOUT)
        #[arg(long = "type")]
        kind: Option<String>,
        /// Only this direction (IN or OUT)
        #[arg(long)]
        direction: Option<String>,
    },
    /// Show one transaction
    Show {
        /// Transaction ID
        id: TransactionId,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct TransactionRow {
    id: String,
    #[tabled(rename = "type")]
    kind: String,
    amount: String,
    direction: String,
    status: String,
    description: String,
    created: String,
}

fn transaction_row(tx: &Transaction) -> TransactionRow {
    TransactionRow {
        id: tx.transaction_id.to_string(),
        kind: tx.transaction_type.to_string(),
        amount: tx.signed_amount(),
        direction: tx.direction().to_string(),
        status: tx.status.to_string(),
        description: or_dash(tx.description.as_deref()),
        created: output::date(tx.created_at),
    }
}

/// Execute a transaction command
pub async fn execute(args: &TransactionArgs, console: &Console) -> Result<(), AppError> {
    console.require(Area::Transactions)?;

    match &args.command {
        TransactionCommand::List {
            list: list_args,
            kind,
            direction,
        } => {
            let kind: Option<TransactionType> = kind.as_deref().map(str::parse).transpose()?;
            let direction: Option<AmountDirection> =
                direction.as_deref().map(str::parse).transpose()?;

            let mut list = console.list::<Transactions>();
            list_args.apply(&mut list)?;
            if let Some(kind) = kind {
                list.set_filter("type", move |tx: &Transaction| tx.transaction_type == kind)
                    .await;
            }
            if let Some(direction) = direction {
                list.set_filter("direction", move |tx: &Transaction| tx.direction() == direction)
                    .await;
            }
            list.refresh().await;
            print_rows(console, &list, transaction_row)?;
        }
        TransactionCommand::Show { id } => {
            let tx = console.service::<Transactions>().get(*id).await?;
            output::print_item(&tx, console.format);
        }
    }

    Ok(())
}
