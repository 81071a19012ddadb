//! Add command
//!
//! Usage: quotebook add --text <TEXT> --category <CATEGORY>

use clap::Args;
use quotebook_core::{apply, Command, CommandOutcome, QuoteStore};

use crate::context::{unexpected_outcome, CmdResult};
use crate::render::quote_line;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Quote text
    #[arg(long)]
    pub text: String,

    /// Category to file the quote under
    #[arg(long)]
    pub category: String,
}

pub fn execute(args: AddArgs, store: &mut QuoteStore) -> CmdResult {
    let outcome = apply(
        store,
        Command::AddQuote {
            text: args.text,
            category: args.category,
        },
    )?;

    match outcome {
        CommandOutcome::Added(quote) => {
            println!("✓ Added {}", quote_line(&quote));
            Ok(())
        }
        other => Err(unexpected_outcome("add", &other)),
    }
}
