//! Read-only catalogue commands: items, packages, vehicles.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use backoffice_client::Resource;
use backoffice_client::services::{Items, Packages, Vehicles};
use backoffice_controller::access::Area;
use backoffice_core::AppError;
use backoffice_entity::item::Item;
use backoffice_entity::package::Package;
use backoffice_entity::vehicle::Vehicle;

use super::{ListArgs, show_list};
use crate::context::Console;
use crate::output::{self, or_dash};

/// Arguments for catalogue commands
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Catalogue subcommand
    #[command(subcommand)]
    pub command: CatalogCommand,
}

/// Catalogue subcommands
#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List records
    List(ListArgs),
    /// Show one record
    Show {
        /// Record ID
        id: String,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct ItemRow {
    id: String,
    name: String,
    value: String,
    status: String,
    images: usize,
}

#[derive(Debug, Serialize, Tabled)]
struct PackageRow {
    id: String,
    code: String,
    title: String,
    weight_kg: String,
    volume_m3: String,
    status: String,
}

#[derive(Debug, Serialize, Tabled)]
struct VehicleRow {
    id: String,
    plate: String,
    vehicle: String,
    year: String,
    payload_kg: String,
    owner: String,
    status: String,
}

fn optional_number<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn item_row(item: &Item) -> ItemRow {
    ItemRow {
        id: item.item_id.to_string(),
        name: item.item_name.clone(),
        value: or_dash(item.declared_value_label().as_deref()),
        status: item.status.to_string(),
        images: item.image_urls.len(),
    }
}

fn package_row(package: &Package) -> PackageRow {
    PackageRow {
        id: package.package_id.to_string(),
        code: package.package_code.clone(),
        title: package.title.clone(),
        weight_kg: optional_number(package.weight_kg),
        volume_m3: optional_number(package.volume_m3),
        status: package.status.to_string(),
    }
}

fn vehicle_row(vehicle: &Vehicle) -> VehicleRow {
    let name = [vehicle.brand.as_deref(), vehicle.model.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    VehicleRow {
        id: vehicle.vehicle_id.to_string(),
        plate: vehicle.plate_number.clone(),
        vehicle: or_dash(Some(name.as_str())),
        year: optional_number(vehicle.year_of_manufacture),
        payload_kg: optional_number(vehicle.payload_in_kg),
        owner: or_dash(vehicle.owner.as_ref().and_then(|o| o.display_name())),
        status: vehicle.status.to_string(),
    }
}

/// Execute item commands
pub async fn execute_items(args: &CatalogArgs, console: &Console) -> Result<(), AppError> {
    execute_catalog::<Items, _>(&args.command, console, Area::Items, item_row).await
}

/// Execute package commands
pub async fn execute_packages(args: &CatalogArgs, console: &Console) -> Result<(), AppError> {
    execute_catalog::<Packages, _>(&args.command, console, Area::Packages, package_row).await
}

/// Execute vehicle commands
pub async fn execute_vehicles(args: &CatalogArgs, console: &Console) -> Result<(), AppError> {
    execute_catalog::<Vehicles, _>(&args.command, console, Area::Vehicles, vehicle_row).await
}

/// List or show records of a read-only resource.
pub(crate) async fn execute_catalog<R, Row>(
    command: &CatalogCommand,
    console: &Console,
    area: Area,
    to_row: fn(&R::Record) -> Row,
) -> Result<(), AppError>
where
    R: Resource,
    R::Id: std::str::FromStr,
    R::Record: Serialize,
    Row: Serialize + Tabled,
{
    console.require(area)?;

    match command {
        CatalogCommand::List(list_args) => {
            let mut list = console.list::<R>();
            show_list(console, &mut list, list_args, to_row).await?;
        }
        CatalogCommand::Show { id } => {
            let id: R::Id = id
                .trim()
                .parse()
                .map_err(|_| AppError::validation(format!("'{id}' is not a valid id")))?;
            let record = console.service::<R>().get(id).await?;
            output::print_item(&record, console.format);
        }
    }

    Ok(())
}
