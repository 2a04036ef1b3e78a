//! Contact search filter.
//!
//! A record matches when its searchable key contains the query as a
//! case-insensitive substring. The key is the literal concatenation of
//! first, middle and last name, tag and phone number with no separator,
//! so a query may match across the boundary of two adjacent fields.

use crate::models::ContactRecord;

/// Build the searchable key for a record.
pub fn search_key(record: &ContactRecord) -> String {
    let mut key = String::with_capacity(
        record.first_name.len()
            + record.middle_name.len()
            + record.last_name.len()
            + record.tag.len()
            + record.phone_number.len(),
    );
    key.push_str(&record.first_name);
    key.push_str(&record.middle_name);
    key.push_str(&record.last_name);
    key.push_str(&record.tag);
    key.push_str(&record.phone_number);
    key
}

/// Case-insensitive substring test of `query` against the record's key.
pub fn matches(query: &str, record: &ContactRecord) -> bool {
    contains_folded(&fold(query), record)
}

/// Fold one character with no surrounding context.
///
/// Two characters compare equal when their folds are equal, which covers
/// pairs that match in either uppercase or lowercase. Multi-character
/// uppercase mappings (`ß` to `SS`) keep the original character; for a
/// multi-character lowercase mapping (`İ` to `i` plus a combining dot)
/// only the first character is kept.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    let upper = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };
    upper.to_lowercase().next().unwrap_or(upper)
}

fn fold(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

fn contains_folded(query_folded: &str, record: &ContactRecord) -> bool {
    query_folded.is_empty() || fold(&search_key(record)).contains(query_folded)
}

/// Iterate over the records matching `query`, borrowing from `records`.
pub fn search_refs<'a>(
    query: &str,
    records: &'a [ContactRecord],
) -> impl Iterator<Item = &'a ContactRecord> + 'a {
    let query_folded = fold(query);
    records
        .iter()
        .filter(move |r| contains_folded(&query_folded, r))
}

/// Filter `records` by `query`, preserving input order.
///
/// The input is never modified; matching records are cloned into a new
/// vector. An empty query returns every record.
pub fn search(query: &str, records: &[ContactRecord]) -> Vec<ContactRecord> {
    let res: Vec<ContactRecord> = search_refs(query, records).cloned().collect();
    tracing::debug!(
        query,
        total = records.len(),
        matched = res.len(),
        "filtered contacts"
    );
    res
}
