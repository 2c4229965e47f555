//! List, form, and dashboard behaviour settings.

use serde::{Deserialize, Serialize};

/// What a create form does after a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AfterCreate {
    /// Clear the fields and stay in create mode.
    #[default]
    Reset,
    /// Switch to edit mode for the record just created.
    Edit,
}

/// Console behaviour configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Default page size for list views.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Search input debounce delay in milliseconds.
    #[serde(default = "default_debounce")]
    pub search_debounce_ms: u64,
    /// Form behaviour after a successful create.
    #[serde(default)]
    pub after_create: AfterCreate,
    /// Default dashboard window in months.
    #[serde(default = "default_dashboard_months")]
    pub dashboard_months: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            search_debounce_ms: default_debounce(),
            after_create: AfterCreate::default(),
            dashboard_months: default_dashboard_months(),
        }
    }
}

fn default_page_size() -> u32 {
    10
}

fn default_debounce() -> u64 {
    350
}

fn default_dashboard_months() -> u32 {
    3
}
