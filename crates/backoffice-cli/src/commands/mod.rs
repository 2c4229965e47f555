//! CLI command definitions and dispatch.

pub mod catalog;
pub mod contract;
pub mod dashboard;
pub mod delivery_record;
pub mod document;
pub mod post;
pub mod transaction;
pub mod trip;
pub mod terms;
pub mod user;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use backoffice_client::Resource;
use backoffice_controller::form::{EditableForm, FormController};
use backoffice_controller::list::ListDetailController;
use backoffice_core::config::AppConfig;
use backoffice_core::types::SortField;
use backoffice_core::{AppError, AppResult};

use crate::context::Console;
use crate::output::{self, OutputFormat};

/// Logistics back-office console
#[derive(Debug, Parser)]
#[command(name = "backoffice", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Answer yes to confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// User accounts (admin)
    User(user::UserArgs),
    /// Provider items
    Item(catalog::CatalogArgs),
    /// Shipment packages
    Package(catalog::CatalogArgs),
    /// Owner vehicles
    Vehicle(catalog::CatalogArgs),
    /// Trips
    Trip(trip::TripArgs),
    /// Package and trip posts
    Post(post::PostArgs),
    /// Wallet transactions (admin)
    Transaction(transaction::TransactionArgs),
    /// Contract templates and terms
    Contract(contract::ContractArgs),
    /// Delivery-record templates and terms
    DeliveryRecord(delivery_record::DeliveryRecordArgs),
    /// Verification document review
    Document(document::DocumentArgs),
    /// Admin dashboard
    Dashboard(dashboard::DashboardArgs),
}

impl Cli {
    /// Connect with `config` and execute the command.
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        let console = Console::connect(config, self.format, self.yes)?;
        self.execute_with(&console).await
    }

    /// Execute the command against an existing console.
    pub async fn execute_with(&self, console: &Console) -> Result<(), AppError> {
        match &self.command {
            Commands::User(args) => user::execute(args, console).await,
            Commands::Item(args) => catalog::execute_items(args, console).await,
            Commands::Package(args) => catalog::execute_packages(args, console).await,
            Commands::Vehicle(args) => catalog::execute_vehicles(args, console).await,
            Commands::Trip(args) => trip::execute(args, console).await,
            Commands::Post(args) => post::execute(args, console).await,
            Commands::Transaction(args) => transaction::execute(args, console).await,
            Commands::Contract(args) => contract::execute(args, console).await,
            Commands::DeliveryRecord(args) => delivery_record::execute(args, console).await,
            Commands::Document(args) => document::execute(args, console).await,
            Commands::Dashboard(args) => dashboard::execute(args, console).await,
        }
    }
}

/// Paging, search, and sort flags shared by list commands
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Rows per page (defaults to `console.page_size`)
    #[arg(long)]
    pub page_size: Option<u32>,
    /// Search text
    #[arg(short, long)]
    pub search: Option<String>,
    /// Sort as `field_asc` or `field_desc`, e.g. `createdAt_desc`
    #[arg(long)]
    pub sort: Option<String>,
}

impl ListArgs {
    /// Copy the flags into the controller's query.
    pub fn apply<R: Resource>(&self, list: &mut ListDetailController<R>) -> AppResult<()> {
        let sort = self.sort.as_deref().map(SortField::parse_choice).transpose()?;
        let query = list.query_mut();
        if let Some(size) = self.page_size {
            query.set_page_size(size);
        }
        if let Some(search) = &self.search {
            query.set_search(search);
        }
        if let Some(sort) = sort {
            query.set_sort(sort.field, sort.direction);
        }
        query.set_page(self.page);
        Ok(())
    }
}

/// Fetch the page described by `args` and print the visible rows.
pub(crate) async fn show_list<R, Row>(
    console: &Console,
    list: &mut ListDetailController<R>,
    args: &ListArgs,
    to_row: impl Fn(&R::Record) -> Row,
) -> AppResult<()>
where
    R: Resource,
    Row: Serialize + Tabled,
{
    args.apply(list)?;
    list.refresh().await;
    print_rows(console, list, to_row)
}

/// Print the visible rows of an already fetched list.
pub(crate) fn print_rows<R, Row>(
    console: &Console,
    list: &ListDetailController<R>,
    to_row: impl Fn(&R::Record) -> Row,
) -> AppResult<()>
where
    R: Resource,
    Row: Serialize + Tabled,
{
    if let Some(e) = list.list_panel().failure() {
        return Err(e.clone());
    }
    let rows: Vec<Row> = list.rows().into_iter().map(to_row).collect();
    output::print_list(&rows, console.format);
    if let Some(page) = list.page() {
        output::print_page_footer(page, rows.len(), console.format);
    }
    Ok(())
}

/// Select `id`, then delete it after confirmation.
pub(crate) async fn delete_record<R: Resource>(console: &Console, id: R::Id) -> AppResult<()> {
    let mut list = console.list::<R>();
    list.select(id).await;
    if let Some(e) = list.detail_panel().failure() {
        return Err(e.clone());
    }
    match list.delete_selected(&console.prompt()).await? {
        Some(_) => output::print_success(list.notice().unwrap_or("Deleted")),
        None => output::print_warning("Cancelled"),
    }
    Ok(())
}

/// Fetch record `id` and open it in `form` for editing.
pub(crate) async fn load_for_edit<R: EditableForm>(
    list: &mut ListDetailController<R>,
    form: &mut FormController<R>,
    id: R::Id,
) -> AppResult<()> {
    list.select(id).await;
    if let Some(e) = list.detail_panel().failure() {
        return Err(e.clone());
    }
    let record = list
        .detail()
        .ok_or_else(|| AppError::not_found(format!("{} {id} not found", R::ROUTES.name)))?;
    form.start_edit(record);
    Ok(())
}

/// Submit `form` and report the outcome.
pub(crate) async fn submit_form<R: EditableForm>(
    console: &Console,
    form: &mut FormController<R>,
    list: &mut ListDetailController<R>,
) -> AppResult<()> {
    form.submit(console.today(), list).await?;
    output::print_success(list.notice().unwrap_or("Saved"));
    if let Some(id) = list.selected() {
        output::print_kv("ID", &id.to_string());
    }
    Ok(())
}
