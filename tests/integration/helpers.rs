//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use clap::Parser;
use serde_json::{Value, json};

use backoffice_cli::output::OutputFormat;
use backoffice_cli::{Cli, Console};
use backoffice_client::ApiClient;
use backoffice_client::mock::MockTransport;
use backoffice_core::AppResult;
use backoffice_core::config::AppConfig;

/// Test console context
pub struct TestConsole {
    /// Scripted backend
    pub mock: Arc<MockTransport>,
    /// Console wired to the mock
    pub console: Console,
}

impl TestConsole {
    /// A console signed in with `role`, answering yes to every prompt
    pub fn new(role: Option<&str>) -> Self {
        let mut config = AppConfig::default();
        config.auth.role = role.map(str::to_string);
        config.auth.token = Some("test-token".to_string());

        let mock = Arc::new(MockTransport::new());
        let client = ApiClient::with_token(mock.clone(), config.auth.token.clone());
        let console = Console::with_client(config, client, OutputFormat::Json, true);
        Self { mock, console }
    }

    /// Staff console
    pub fn staff() -> Self {
        Self::new(Some("Staff"))
    }

    /// Admin console
    pub fn admin() -> Self {
        Self::new(Some("Admin"))
    }

    /// Parse `args` as a command line and run it
    pub async fn run(&self, args: &[&str]) -> AppResult<()> {
        let argv = std::iter::once("backoffice").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).expect("command line should parse");
        cli.execute_with(&self.console).await
    }
}

/// A list page envelope result
pub fn page(rows: Vec<Value>, current: u32, total_pages: u32) -> Value {
    let count = rows.len();
    json!({
        "data": rows,
        "currentPage": current,
        "totalPages": total_pages,
        "totalCount": count,
    })
}
