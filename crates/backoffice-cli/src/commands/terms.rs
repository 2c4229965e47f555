//! Term subcommands shared by contract and delivery-record templates.

use std::str::FromStr;

use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use backoffice_client::services::ChildService;
use backoffice_controller::children::ChildEditor;
use backoffice_core::{AppError, AppResult};
use backoffice_entity::ordering::Ordered;
use backoffice_entity::term::TermText;

use crate::context::Console;
use crate::output;

/// Term subcommands
#[derive(Debug, Subcommand)]
pub enum TermCommand {
    /// List the terms of a template
    List {
        /// Template ID
        template: String,
    },
    /// Append a term to a template
    Add {
        /// Template ID
        template: String,
        /// Term text
        #[arg(long)]
        content: String,
    },
    /// Change the text of a term
    Edit {
        /// Template ID
        template: String,
        /// Term ID
        term: String,
        /// New term text
        #[arg(long)]
        content: String,
    },
    /// Remove a term
    Delete {
        /// Template ID
        template: String,
        /// Term ID
        term: String,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct TermRow {
    order: i32,
    id: String,
    content: String,
}

fn parse<T: FromStr>(raw: &str, what: &str) -> AppResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::validation(format!("'{raw}' is not a valid {what} id")))
}

/// Run a term subcommand through a [`ChildEditor`].
pub async fn execute<S>(command: &TermCommand, service: S, console: &Console) -> Result<(), AppError>
where
    S: ChildService,
    S::ParentId: FromStr,
    S::ChildId: FromStr,
    S::Child: Serialize,
{
    let template = match command {
        TermCommand::List { template }
        | TermCommand::Add { template, .. }
        | TermCommand::Edit { template, .. }
        | TermCommand::Delete { template, .. } => parse::<S::ParentId>(template, "template")?,
    };

    let mut editor = ChildEditor::new(service);
    editor.set_parent(Some(template)).await;
    if let Some(e) = editor.panel().failure() {
        return Err(e.clone());
    }

    match command {
        TermCommand::List { .. } => {
            print_terms(&editor, console);
            return Ok(());
        }
        TermCommand::Add { content, .. } => {
            editor.start_create()?;
            editor.set_content(content.as_str());
            let outcome = editor.submit().await?;
            output::print_success(outcome.message.as_deref().unwrap_or("Term added"));
        }
        TermCommand::Edit { term, content, .. } => {
            editor.start_edit(parse::<S::ChildId>(term, "term")?)?;
            editor.set_content(content.as_str());
            let outcome = editor.submit().await?;
            output::print_success(outcome.message.as_deref().unwrap_or("Term updated"));
        }
        TermCommand::Delete { term, .. } => {
            let id = parse::<S::ChildId>(term, "term")?;
            match editor.delete(id, &console.prompt()).await? {
                Some(outcome) => {
                    output::print_success(outcome.message.as_deref().unwrap_or("Term deleted"))
                }
                None => {
                    output::print_warning("Cancelled");
                    return Ok(());
                }
            }
        }
    }

    print_terms(&editor, console);
    Ok(())
}

fn print_terms<S>(editor: &ChildEditor<S>, console: &Console)
where
    S: ChildService,
    S::Child: Serialize,
{
    if console.format == output::OutputFormat::Json {
        output::print_item(&editor.children(), console.format);
        return;
    }
    let rows: Vec<TermRow> = editor
        .children()
        .into_iter()
        .map(|child| TermRow {
            order: child.order(),
            id: S::child_id(child).to_string(),
            content: child.text().to_string(),
        })
        .collect();
    output::print_list(&rows, console.format);
}
