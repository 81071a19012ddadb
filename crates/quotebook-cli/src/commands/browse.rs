//! Read-only views over the collection
//!
//! Usage:
//!   quotebook categories
//!   quotebook filter <CATEGORY>
//!   quotebook random <CATEGORY>
//!   quotebook show
//!   quotebook last

use clap::Args;
use quotebook_core::{apply, Command, CommandOutcome, QuoteStore};

use crate::context::{unexpected_outcome, CmdResult};
use crate::render::{print_quotes, quote_line};

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Category to list (exact match)
    pub category: String,
}

#[derive(Debug, Args)]
pub struct RandomArgs {
    /// Category to sample from (exact match)
    pub category: String,
}

pub fn execute_categories(store: &QuoteStore) -> CmdResult {
    for category in store.categories() {
        println!("{}", category);
    }
    Ok(())
}

pub fn execute_filter(args: FilterArgs, store: &QuoteStore) -> CmdResult {
    print_quotes(&store.filter_by_category(&args.category));
    Ok(())
}

/// Sample a quote and remember it as last viewed
pub fn execute_random(args: RandomArgs, store: &mut QuoteStore) -> CmdResult {
    let category = args.category;
    let outcome = apply(
        store,
        Command::ShowRandom {
            category: category.clone(),
        },
    )?;

    match outcome {
        CommandOutcome::Shown(Some(quote)) => println!("{}", quote_line(&quote)),
        CommandOutcome::Shown(None) => println!("No quotes in category '{}'", category),
        other => return Err(unexpected_outcome("random", &other)),
    }
    Ok(())
}

/// Re-apply the remembered filter
pub fn execute_show(store: &QuoteStore) -> CmdResult {
    match store.restore_selection() {
        Some((category, quotes)) => {
            println!("Category: {}", category);
            print_quotes(&quotes);
        }
        None => {
            println!("All categories");
            print_quotes(store.quotes());
        }
    }
    Ok(())
}

pub fn execute_last(store: &QuoteStore) -> CmdResult {
    match store.last_viewed() {
        Some(quote) => println!("{}", quote_line(&quote)),
        None => println!("(nothing viewed this session)"),
    }
    Ok(())
}
