//! Marketplace post commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use backoffice_client::services::{PostPackages, PostTrips};
use backoffice_controller::access::Area;
use backoffice_core::AppError;
use backoffice_entity::post::{PostPackage, PostTrip};

use super::catalog::{CatalogCommand, execute_catalog};
use crate::context::Console;
use crate::output::{self, or_dash};

/// Arguments for post commands
#[derive(Debug, Args)]
pub struct PostArgs {
    /// Post kind
    #[command(subcommand)]
    pub command: PostCommand,
}

/// Post kinds
#[derive(Debug, Subcommand)]
pub enum PostCommand {
    /// Providers looking for transport (sort: title, created, price, provider)
    #[command(subcommand)]
    Package(CatalogCommand),
    /// Owners looking for drivers (sort: title, createdat, owner)
    #[command(subcommand)]
    Trip(CatalogCommand),
}

#[derive(Debug, Serialize, Tabled)]
struct PostPackageRow {
    id: String,
    title: String,
    provider: String,
    price: String,
    status: String,
    created: String,
}

#[derive(Debug, Serialize, Tabled)]
struct PostTripRow {
    id: String,
    title: String,
    owner: String,
    route: String,
    seats: u32,
    status: String,
    created: String,
}

fn post_package_row(post: &PostPackage) -> PostPackageRow {
    PostPackageRow {
        id: post.post_package_id.to_string(),
        title: post.title.clone(),
        provider: or_dash(post.provider_label().as_deref()),
        price: post
            .offered_price
            .map(|p| format!("{p:.0}"))
            .unwrap_or_else(|| "-".to_string()),
        status: post.status.to_string(),
        created: output::date(post.created_at),
    }
}

fn post_trip_row(post: &PostTrip) -> PostTripRow {
    let route = post.trip.as_ref().map(|trip| {
        format!(
            "{} → {}",
            trip.start_location_name.as_deref().unwrap_or("?"),
            trip.end_location_name.as_deref().unwrap_or("?")
        )
    });
    PostTripRow {
        id: post.post_trip_id.to_string(),
        title: post.title.clone(),
        owner: or_dash(post.owner_name()),
        route: or_dash(route.as_deref()),
        seats: post.seats_wanted(),
        status: post.status.to_string(),
        created: output::date(post.created_at),
    }
}

/// Execute post commands
pub async fn execute(args: &PostArgs, console: &Console) -> Result<(), AppError> {
    match &args.command {
        PostCommand::Package(command) => {
            execute_catalog::<PostPackages, _>(command, console, Area::Posts, post_package_row).await
        }
        PostCommand::Trip(command) => {
            execute_catalog::<PostTrips, _>(command, console, Area::Posts, post_trip_row).await
        }
    }
}
