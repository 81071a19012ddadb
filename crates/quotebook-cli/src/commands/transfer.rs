//! Import and export commands
//!
//! Usage:
//!   quotebook import <FILE>      (`-` reads standard input)
//!   quotebook export [--output <FILE>] [--stdout]

use std::io;
use std::path::PathBuf;

use clap::Args;
use quotebook_core::{apply, Command, CommandOutcome, QuoteStore};
use quotebook_store::errors::io_error;
use quotebook_store::snapshot::{default_export_path, read_snapshot, write_snapshot};

use crate::context::{unexpected_outcome, CmdResult};

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Snapshot file to import, or `-` for standard input
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Destination file (defaults to quotes.json in the current directory)
    #[arg(long, short = 'o', conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the snapshot instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

/// Replace the collection with the file's content
///
/// The whole source is read before the collection is touched.
pub fn execute_import(args: ImportArgs, store: &mut QuoteStore) -> CmdResult {
    let content = if args.path.as_os_str() == "-" {
        io::read_to_string(io::stdin().lock()).map_err(|e| io_error("read_stdin", e))?
    } else {
        read_snapshot(&args.path)?
    };

    match apply(store, Command::Import { content })? {
        CommandOutcome::Replaced { count } => {
            println!("✓ Imported {} quotes", count);
            Ok(())
        }
        other => Err(unexpected_outcome("import", &other)),
    }
}

pub fn execute_export(args: ExportArgs, store: &QuoteStore) -> CmdResult {
    let content = store.export_snapshot()?;

    if args.stdout {
        println!("{}", content);
        return Ok(());
    }

    let path = match args.output {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir().map_err(|e| io_error("current_dir", e))?;
            default_export_path(&cwd)
        }
    };
    let receipt = write_snapshot(&path, &content)?;

    println!(
        "✓ Exported {} quotes to {} (digest: {})",
        store.len(),
        receipt.path.display(),
        receipt.digest
    );
    Ok(())
}
