use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod browse;
pub mod list;
pub mod search;
pub mod show;
pub mod ui;

pub use browse::run_browse;
pub use list::run_list;
pub use search::run_search;
pub use show::run_show;

#[derive(Parser)]
#[command(name = "phonebook")]
#[command(about = "Searchable phone book for the command line")]
#[command(version)]
pub struct Cli {
    /// Contacts file (.json or .csv)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all contacts
    List,
    /// Search contacts by name, tag or phone number
    Search(SearchArgs),
    /// Show full details for a contact
    Show(ShowArgs),
    /// Browse and filter contacts interactively
    Browse,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Case-insensitive substring; empty matches everything
    #[arg(default_value = "")]
    pub query: String,
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Contact id
    pub id: i64,
}
