use anyhow::Result;

use crate::cli::ui::text_input;
use crate::models::ContactRecord;

/// Ask for the fields of a new contact.
///
/// Returns `None` when the user skips the first-name prompt or leaves
/// every name empty. The id is left at 0 for the store to assign.
pub fn prompt_new_contact() -> Result<Option<ContactRecord>> {
    let Some(first) = text_input("first name:", None)? else {
        return Ok(None);
    };
    let middle = text_input("middle name:", None)?.unwrap_or_default();
    let last = text_input("last name:", None)?.unwrap_or_default();
    let phone = text_input("phone:", None)?.unwrap_or_default();
    let tag = text_input("tag:", Some("Mobile"))?.unwrap_or_default();

    Ok(build_contact(&first, &middle, &last, &phone, &tag))
}

fn build_contact(first: &str, middle: &str, last: &str, phone: &str, tag: &str) -> Option<ContactRecord> {
    let (first, middle, last) = (first.trim(), middle.trim(), last.trim());
    if first.is_empty() && middle.is_empty() && last.is_empty() {
        return None;
    }
    Some(ContactRecord::new(0, first, middle, last, phone.trim(), tag.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_contact_trims() {
        let c = build_contact(" Ann ", "", "Lee", " 555 ", "Home").unwrap();
        assert_eq!(c, ContactRecord::new(0, "Ann", "", "Lee", "555", "Home"));
    }

    #[test]
    fn test_build_contact_requires_a_name() {
        assert!(build_contact("", " ", "", "555", "Home").is_none());
    }
}
