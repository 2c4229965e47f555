//! Trip commands.

use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use backoffice_client::services::Trips;
use backoffice_controller::access::Area;
use backoffice_core::AppError;
use backoffice_core::types::TripId;
use backoffice_entity::trip::{Trip, TripPhase};

use super::{ListArgs, print_rows};
use crate::context::Console;
use crate::output::{self, or_dash};

/// Arguments for trip commands
#[derive(Debug, Args)]
pub struct TripArgs {
    /// Trip subcommand
    #[command(subcommand)]
    pub command: TripCommand,
}

/// Trip subcommands
#[derive(Debug, Subcommand)]
pub enum TripCommand {
    /// List trips
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Only trips in this phase
        #[arg(long, value_enum)]
        phase: Option<PhaseFilter>,
    },
    /// Show one trip
    Show {
        /// Trip ID
        id: TripId,
    },
}

/// Phase filter values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PhaseFilter {
    /// Created, awaiting, or pending
    Preparing,
    /// Loading, in transit, or unloading
    Moving,
    /// Completed
    Done,
    /// Cancelled
    Cancelled,
}

impl From<PhaseFilter> for TripPhase {
    fn from(filter: PhaseFilter) -> Self {
        match filter {
            PhaseFilter::Preparing => TripPhase::Preparing,
            PhaseFilter::Moving => TripPhase::Moving,
            PhaseFilter::Done => TripPhase::Done,
            PhaseFilter::Cancelled => TripPhase::Cancelled,
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct TripRow {
    code: String,
    owner: String,
    vehicle: String,
    route: String,
    drivers: String,
    packages: String,
    status: String,
    created: String,
}

fn trip_row(trip: &Trip) -> TripRow {
    let owner = if trip.owner_company.trim().is_empty() {
        trip.owner_name.clone()
    } else {
        format!("{} ({})", trip.owner_name, trip.owner_company)
    };
    TripRow {
        code: trip.trip_code.clone(),
        owner: or_dash(Some(owner.as_str())),
        vehicle: or_dash(Some(trip.vehicle_plate.as_str())),
        route: or_dash(Some(trip.trip_route_summary.as_str())),
        drivers: or_dash(trip.driver_summary().as_deref()),
        packages: or_dash(trip.package_summary().as_deref()),
        status: or_dash(Some(trip.status_label.as_str())),
        created: output::date(trip.created_at),
    }
}

/// Execute a trip command
pub async fn execute(args: &TripArgs, console: &Console) -> Result<(), AppError> {
    console.require(Area::Trips)?;

    match &args.command {
        TripCommand::List { list: list_args, phase } => {
            let mut list = console.list::<Trips>();
            list_args.apply(&mut list)?;
            if let Some(phase) = phase {
                let phase = TripPhase::from(*phase);
                list.set_filter("phase", move |trip: &Trip| trip.status.phase() == phase)
                    .await;
            }
            list.refresh().await;
            print_rows(console, &list, trip_row)?;
        }
        TripCommand::Show { id } => {
            let trip = console.service::<Trips>().get(*id).await?;
            output::print_item(&trip, console.format);
        }
    }

    Ok(())
}
