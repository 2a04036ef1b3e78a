use anyhow::{anyhow, Result};

use crate::models::ContactRecord;

/// Detail lines for a contact, skipping empty fields
pub fn format_contact(record: &ContactRecord) -> Vec<String> {
    let mut lines = vec![record.display_name(), String::new()];

    if !record.phone_number.is_empty() {
        if record.tag.is_empty() {
            lines.push(format!("  {}", record.phone_number));
        } else {
            lines.push(format!("  {} ({})", record.phone_number, record.tag));
        }
    } else if !record.tag.is_empty() {
        lines.push(format!("  {}", record.tag));
    }

    if record.is_selected() {
        lines.push("  selected".to_string());
    }
    lines.push(format!("  id {}", record.id));
    lines
}

pub fn print_contact(record: &ContactRecord) {
    for line in format_contact(record) {
        println!("{}", line);
    }
}

/// Execute the show command
pub fn run_show(records: &[ContactRecord], id: i64) -> Result<()> {
    let record = records
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| anyhow!("No contact with id {}", id))?;
    print_contact(record);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_contact() {
        let record = ContactRecord::new(2, "B", "", "Bird", "1111111111", "Home");
        assert_eq!(
            format_contact(&record),
            vec!["B Bird", "", "  1111111111 (Home)", "  id 2"]
        );
    }

    #[test]
    fn test_format_contact_selected_without_tag() {
        let record = ContactRecord::new(4, "Dee", "", "", "42", "").with_selected(Some(true));
        assert_eq!(
            format_contact(&record),
            vec!["Dee", "", "  42", "  selected", "  id 4"]
        );
    }

    #[test]
    fn test_run_show_unknown_id() {
        let records = vec![ContactRecord::new(1, "A", "", "Ant", "0", "Mobile")];
        assert!(run_show(&records, 1).is_ok());
        assert!(run_show(&records, 9).is_err());
    }
}
