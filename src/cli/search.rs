use anyhow::Result;

use crate::cli::list::print_contact_table;
use crate::models::ContactRecord;
use crate::search::search;

/// Execute the search command. An empty query lists everything.
pub fn run_search(records: &[ContactRecord], query: &str, json: bool) -> Result<()> {
    let results = search(query, records);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No matches.");
        return Ok(());
    }

    print_contact_table(&results);
    println!("\n{}/{} contacts", results.len(), records.len());
    Ok(())
}
