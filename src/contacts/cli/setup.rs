use clap::{Args, Parser, Subcommand};
use contacts::model::Field;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contacts", bin_name = "contacts", version)]
#[command(about = "A small, file-backed contact book", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this contacts file instead of the configured one
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Fields of a new contact. Names and personal phone are required.
#[derive(Args, Debug, Clone)]
pub struct NewContactArgs {
    #[arg(long, value_name = "NAME")]
    pub last_name: String,

    #[arg(long, value_name = "NAME")]
    pub first_name: String,

    #[arg(long, value_name = "NAME")]
    pub middle_name: Option<String>,

    #[arg(long, value_name = "PHONE")]
    pub work_phone: Option<String>,

    #[arg(long, value_name = "PHONE")]
    pub personal_phone: String,
}

/// Replacement values for an existing contact. Only given fields change.
#[derive(Args, Debug, Clone, Default)]
pub struct EditContactArgs {
    #[arg(long, value_name = "NAME")]
    pub last_name: Option<String>,

    #[arg(long, value_name = "NAME")]
    pub first_name: Option<String>,

    #[arg(long, value_name = "NAME")]
    pub middle_name: Option<String>,

    #[arg(long, value_name = "PHONE")]
    pub work_phone: Option<String>,

    #[arg(long, value_name = "PHONE")]
    pub personal_phone: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact
    #[command(alias = "a")]
    Add(NewContactArgs),

    /// List contacts, one page at a time
    #[command(alias = "ls")]
    List {
        /// Page to show, starting at 1 (out-of-range pages show the first or last page)
        #[arg(short, long, allow_negative_numbers = true)]
        page: Option<i64>,

        /// Contacts per page (defaults to the page-size setting)
        #[arg(long)]
        page_size: Option<usize>,

        /// Order by this field instead of the order contacts were added
        #[arg(short, long, value_parser = parse_field)]
        sort: Option<Field>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search contacts, e.g. `search last_name=smi first_name=jo`
    #[command(alias = "s")]
    Search {
        /// FIELD=VALUE terms; every term must match (case-insensitive substring)
        terms: Vec<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show contacts in full
    #[command(alias = "v")]
    View {
        /// Contact ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Change fields of a contact
    #[command(alias = "e")]
    Edit {
        /// Contact id
        id: u64,

        #[command(flatten)]
        fields: EditContactArgs,
    },

    /// Delete one or more contacts
    #[command(alias = "rm")]
    Delete {
        /// Contact ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (page-size, data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the contacts file if it does not exist
    Init,
}

fn parse_field(s: &str) -> Result<Field, String> {
    s.parse()
}
