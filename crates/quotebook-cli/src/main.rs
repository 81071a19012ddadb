//! Quotebook CLI
//!
//! Command-line View Binder for the quote store

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use quotebook_core::logging_facility::{self, Profile};
use quotebook_core_types::RequestId;

mod commands;
mod context;
mod render;

#[derive(Debug, Parser)]
#[command(name = "quotebook")]
#[command(about = "Quotebook - Categorized quote collection", long_about = None)]
struct Cli {
    /// SQLite database holding the collection and session state
    #[arg(long, global = true, default_value = ".quotebook/store.db")]
    db: PathBuf,

    /// Emit JSON structured logs
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List categories in first-occurrence order
    Categories,
    /// List the quotes of one category
    Filter(commands::browse::FilterArgs),
    /// Show a random quote from a category
    Random(commands::browse::RandomArgs),
    /// Show the selected category, or every quote when none is selected
    Show,
    /// Show the most recently viewed quote
    Last,
    /// Add a quote
    Add(commands::edit::AddArgs),
    /// Replace the collection with an exported snapshot
    Import(commands::transfer::ImportArgs),
    /// Write the collection as a snapshot file
    Export(commands::transfer::ExportArgs),
    /// Remember a category filter
    Select(commands::session::SelectArgs),
    /// Session operations
    Session(commands::session::SessionArgs),
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    let request_id = RequestId::new();
    let span = tracing::info_span!("request", request_id = %request_id);
    let _guard = span.enter();

    let result = context::open_store(&cli.db).and_then(|mut store| {
        match cli.command {
            Commands::Categories => commands::browse::execute_categories(&store),
            Commands::Filter(args) => commands::browse::execute_filter(args, &store),
            Commands::Random(args) => commands::browse::execute_random(args, &mut store),
            Commands::Show => commands::browse::execute_show(&store),
            Commands::Last => commands::browse::execute_last(&store),
            Commands::Add(args) => commands::edit::execute(args, &mut store),
            Commands::Import(args) => commands::transfer::execute_import(args, &mut store),
            Commands::Export(args) => commands::transfer::execute_export(args, &store),
            Commands::Select(args) => commands::session::execute_select(args, &mut store),
            Commands::Session(args) => commands::session::execute(args, &mut store),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e.with_request_id(request_id));
        std::process::exit(1);
    }
}
