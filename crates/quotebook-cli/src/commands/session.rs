//! Session state commands
//!
//! Usage:
//!   quotebook select <CATEGORY>   (an empty category clears the selection)
//!   quotebook session end

use clap::{Args, Subcommand};
use quotebook_core::{apply, Command, CommandOutcome, QuoteStore};

use crate::context::{unexpected_outcome, CmdResult};
use crate::render::print_quotes;

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Category to remember as the active filter
    pub category: String,
}

#[derive(Debug, Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Forget the selected category and last viewed quote
    End,
}

pub fn execute_select(args: SelectArgs, store: &mut QuoteStore) -> CmdResult {
    let outcome = apply(
        store,
        Command::SelectCategory {
            category: args.category,
        },
    )?;

    match outcome {
        CommandOutcome::Selected {
            category: Some(category),
            quotes,
        } => {
            println!("Selected: {}", category);
            print_quotes(&quotes);
        }
        CommandOutcome::Selected { category: None, .. } => println!("Selection cleared"),
        other => return Err(unexpected_outcome("select", &other)),
    }
    Ok(())
}

pub fn execute(args: SessionArgs, store: &mut QuoteStore) -> CmdResult {
    match args.command {
        SessionCommand::End => {
            apply(store, Command::EndSession)?;
            println!("✓ Session ended");
            Ok(())
        }
    }
}
