//! # CLI Layer
//!
//! This module is **one possible UI client** for contacts, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a `tracing` subscriber
//! - Handles argument parsing
//! - Validates typed input (required names and phone)
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data dir and config, opens the contacts file
//! - `handle_*()`: Per-command handlers that call the API and print the result

use super::print::{
    print_config, print_contacts, print_full_contacts, print_json, print_messages,
    print_page_footer,
};
use super::setup::{Cli, Commands, EditContactArgs, NewContactArgs};
use clap::Parser;
use contacts::api::{configure, ConfigAction, ContactsApi, ContactsPaths, ListOptions};
use contacts::config::ContactsConfig;
use contacts::error::{ContactsError, Result};
use contacts::model::{ContactFields, ContactPatch, Field};
use contacts::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Overrides the platform data directory (config and default contacts file).
const HOME_ENV: &str = "CONTACTS_HOME";

struct AppContext {
    api: ContactsApi<FileStore>,
    page_size: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = ContactsPaths::new(data_dir()?);

    // Config must work even when the contacts file is unreadable
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&paths, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli, paths)?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&mut ctx, args),
        Some(Commands::List {
            page,
            page_size,
            sort,
            json,
        }) => handle_list(&ctx, page, page_size, sort, json),
        Some(Commands::Search { terms, json }) => handle_search(&ctx, terms, json),
        Some(Commands::View { ids }) => handle_view(&ctx, ids),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut ctx, id, fields),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::Init) => handle_init(&mut ctx),
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&ctx, None, None, None, false),
    }
}

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "contacts", "contacts")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ContactsError::Store("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli, paths: ContactsPaths) -> Result<AppContext> {
    let config = ContactsConfig::load(&paths.data_dir)?;
    let file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_file_path(&paths.data_dir));
    debug!(file = %file.display(), page_size = config.page_size, "resolved contacts file");

    let api = ContactsApi::new(FileStore::new(file), paths)?;
    Ok(AppContext {
        api,
        page_size: config.page_size,
    })
}

fn handle_add(ctx: &mut AppContext, args: NewContactArgs) -> Result<()> {
    let fields = ContactFields {
        last_name: required("Last name", &args.last_name)?,
        first_name: required("First name", &args.first_name)?,
        middle_name: optional(args.middle_name.as_deref()),
        work_phone: optional(args.work_phone.as_deref()),
        personal_phone: required("Personal phone", &args.personal_phone)?,
    };
    let result = ctx.api.add_contact(fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    page: Option<i64>,
    page_size: Option<usize>,
    sort: Option<Field>,
    json: bool,
) -> Result<()> {
    let options = ListOptions {
        page_size: page_size.unwrap_or(ctx.page_size),
        // Pages are 1-based on the command line
        page_number: page.unwrap_or(1).saturating_sub(1),
        sort,
    };
    let result = ctx.api.list_contacts(options)?;

    if json {
        return print_json(&result.listed_contacts, result.page.as_ref());
    }
    print_contacts(&result.listed_contacts);
    if let Some(info) = &result.page {
        print_page_footer(info);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, terms: Vec<String>, json: bool) -> Result<()> {
    let result = ctx.api.search_terms(&terms)?;
    if json {
        return print_json(&result.listed_contacts, None);
    }
    print_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: Vec<u64>) -> Result<()> {
    let result = ctx.api.view_contacts(&ids)?;
    print_full_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: u64, args: EditContactArgs) -> Result<()> {
    let patch = ContactPatch {
        last_name: args
            .last_name
            .as_deref()
            .map(|v| required("Last name", v))
            .transpose()?,
        first_name: args
            .first_name
            .as_deref()
            .map(|v| required("First name", v))
            .transpose()?,
        middle_name: args.middle_name.as_deref().map(|v| optional(Some(v))),
        work_phone: args.work_phone.as_deref().map(|v| optional(Some(v))),
        personal_phone: args
            .personal_phone
            .as_deref()
            .map(|v| required("Personal phone", v))
            .transpose()?,
    };
    let result = ctx.api.edit_contact(id, &patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<u64>) -> Result<()> {
    let result = ctx.api.delete_contacts(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(paths: &ContactsPaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = configure(paths, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn required(label: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ContactsError::Api(format!("{} cannot be empty", label)));
    }
    Ok(value.to_string())
}

fn optional(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims_and_rejects_blank() {
        assert_eq!(required("Last name", "  Doe ").unwrap(), "Doe");
        let err = required("Last name", "   ").unwrap_err();
        assert_eq!(err.to_string(), "Api Error: Last name cannot be empty");
    }

    #[test]
    fn optional_defaults_to_empty() {
        assert_eq!(optional(None), "");
        assert_eq!(optional(Some(" 555 ")), "555");
    }
}
