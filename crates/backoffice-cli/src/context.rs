//! Everything a command needs: configuration, API client, role guard.

use std::sync::Arc;

use backoffice_client::http::HttpTransport;
use backoffice_client::{ApiClient, Resource, ResourceService};
use backoffice_controller::access::{Area, RoleGuard};
use backoffice_controller::list::{Confirmation, ListDetailController};
use backoffice_core::config::AppConfig;
use backoffice_core::{AppError, AppResult};
use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::output::OutputFormat;

/// Shared state for one CLI invocation.
#[derive(Debug, Clone)]
pub struct Console {
    /// Loaded configuration.
    pub config: AppConfig,
    /// Authenticated API client.
    pub client: ApiClient,
    /// Role gate.
    pub guard: RoleGuard,
    /// Output format.
    pub format: OutputFormat,
    /// Skip confirmation prompts.
    pub assume_yes: bool,
}

impl Console {
    /// Connect to the configured backend.
    pub fn connect(config: AppConfig, format: OutputFormat, assume_yes: bool) -> AppResult<Self> {
        let transport = HttpTransport::new(&config.api)?;
        let client = ApiClient::with_token(Arc::new(transport), config.auth.token.clone());
        Ok(Self::with_client(config, client, format, assume_yes))
    }

    /// Use an existing client.
    pub fn with_client(config: AppConfig, client: ApiClient, format: OutputFormat, assume_yes: bool) -> Self {
        let guard = RoleGuard::from_claim(config.auth.role.as_deref());
        debug!(base_url = %config.api.base_url, role = ?guard.role(), "Console ready");
        Self {
            config,
            client,
            guard,
            format,
            assume_yes,
        }
    }

    /// Refuse unless the role claim opens `area`.
    pub fn require(&self, area: Area) -> AppResult<()> {
        self.guard.require(area)
    }

    /// Service for resource `R`.
    pub fn service<R: Resource>(&self) -> ResourceService<R> {
        ResourceService::new(self.client.clone())
    }

    /// List controller for resource `R` with the console defaults.
    pub fn list<R: Resource>(&self) -> ListDetailController<R> {
        ListDetailController::from_config(self.service(), &self.config.console)
    }

    /// Today's date (UTC).
    pub fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Confirmation source for destructive commands.
    pub fn prompt(&self) -> Prompt {
        Prompt {
            assume_yes: self.assume_yes,
        }
    }
}

/// Terminal confirmation.
#[derive(Debug, Clone, Copy)]
pub struct Prompt {
    assume_yes: bool,
}

impl Confirmation for Prompt {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Read a secret from the terminal, asking twice.
pub fn read_password(prompt: &str) -> AppResult<String> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
