//! Plain-text rendering of store query results

use quotebook_core::Quote;

/// One quote as a single line
pub fn quote_line(quote: &Quote) -> String {
    format!("\"{}\" [{}]", quote.text, quote.category)
}

/// Print quotes one per line, or a placeholder when there are none
pub fn print_quotes(quotes: &[Quote]) {
    if quotes.is_empty() {
        println!("(no quotes)");
        return;
    }
    for quote in quotes {
        println!("{}", quote_line(quote));
    }
}
