//! Admin dashboard command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use backoffice_client::services::ReportService;
use backoffice_controller::access::Area;
use backoffice_controller::dashboard::DashboardController;
use backoffice_controller::panel::Panel;
use backoffice_core::AppError;
use backoffice_entity::report::{StatusCount, TimePoint};

use crate::context::Console;
use crate::output::{self, OutputFormat};

/// Arguments for the dashboard command
#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Window in months (3 or 6, defaults to `console.dashboard_months`)
    #[arg(short, long)]
    pub months: Option<u32>,
}

#[derive(Debug, Serialize, Tabled)]
struct BucketRow {
    name: String,
    value: String,
}

fn status_rows(series: &[StatusCount]) -> Vec<BucketRow> {
    series
        .iter()
        .map(|bucket| BucketRow {
            name: bucket.name.clone(),
            value: bucket.value.to_string(),
        })
        .collect()
}

fn time_rows(series: &[TimePoint]) -> Vec<BucketRow> {
    series
        .iter()
        .map(|point| BucketRow {
            name: point.label.clone(),
            value: point.value.to_string(),
        })
        .collect()
}

fn print_panel<T>(title: &str, panel: &Panel<Vec<T>>, to_rows: fn(&[T]) -> Vec<BucketRow>) {
    println!();
    println!("{title}");
    match (panel.value(), panel.error()) {
        (Some(series), _) if !series.is_empty() => output::print_list(&to_rows(series), OutputFormat::Table),
        (_, Some(error)) => output::print_warning(&format!("No data ({error})")),
        _ => println!("No data."),
    }
}

/// Execute the dashboard command
pub async fn execute(args: &DashboardArgs, console: &Console) -> Result<(), AppError> {
    console.require(Area::Dashboard)?;

    let mut dashboard = DashboardController::new(
        ReportService::new(console.client.clone()),
        console.config.console.dashboard_months,
    );
    if let Some(months) = args.months {
        dashboard.set_months(months)?;
    }
    dashboard.refresh(console.today()).await;

    if console.format == OutputFormat::Json {
        let value = serde_json::json!({
            "months": dashboard.months(),
            "overview": dashboard.overview().value(),
            "activePackages": dashboard.active_packages(),
            "tripsByStatus": dashboard.trips_by_status().value(),
            "packagesByStatus": dashboard.packages_by_status().value(),
            "revenue": dashboard.revenue().value(),
            "tripsCreated": dashboard.trips_created().value(),
        });
        output::print_item(&value, console.format);
        return Ok(());
    }

    println!("Dashboard, last {} months", dashboard.months());
    println!();
    match (dashboard.overview().value(), dashboard.overview().error()) {
        (Some(overview), _) => {
            output::print_kv("Users", &overview.total_users.to_string());
            output::print_kv("Trips", &overview.total_trips.to_string());
            output::print_kv("Packages", &overview.total_packages.to_string());
            output::print_kv("Revenue (VND)", &format!("{:.0}", overview.total_revenue));
        }
        (None, Some(error)) => output::print_warning(&format!("Overview unavailable ({error})")),
        (None, None) => println!("No data."),
    }
    if let Some(active) = dashboard.active_packages() {
        output::print_kv("Active packages", &active.to_string());
    }

    print_panel("Trips by status", dashboard.trips_by_status(), status_rows);
    print_panel("Packages by status", dashboard.packages_by_status(), status_rows);
    print_panel("Revenue by month", dashboard.revenue(), time_rows);
    print_panel("Trips created by month", dashboard.trips_created(), time_rows);

    Ok(())
}
