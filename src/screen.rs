//! Phone list screen state.
//!
//! Holds the live query, the latest snapshot from the store and the
//! cursor. Rendering lives in `cli::browse`; user intents come back out
//! as [`ScreenAction`] values for the caller to apply to the store.

use crate::models::ContactRecord;
use crate::search::search;

pub const SCREEN_TITLE: &str = "My Phone book";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    /// Open the new-contact form.
    CreateNew,
    /// Open the contact with this id.
    Activate(i64),
    /// Flip the selection flag of the contact with this id.
    ToggleSelected(i64),
}

#[derive(Debug, Clone, Default)]
pub struct PhoneScreen {
    query: String,
    phones: Vec<ContactRecord>,
    cursor: usize,
}

impl PhoneScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.clamp_cursor();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.clamp_cursor();
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.clamp_cursor();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.clamp_cursor();
    }

    /// Replace the snapshot, usually from a store subscription.
    pub fn set_phones(&mut self, phones: Vec<ContactRecord>) {
        self.phones = phones;
        self.clamp_cursor();
    }

    /// The search box and list are only shown once there is something to search.
    pub fn has_phones(&self) -> bool {
        !self.phones.is_empty()
    }

    /// Records matching the current query.
    pub fn visible(&self) -> Vec<ContactRecord> {
        search(&self.query, &self.phones)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<ContactRecord> {
        self.visible().into_iter().nth(self.cursor)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.visible().len() {
            self.cursor += 1;
        }
    }

    pub fn create_new(&self) -> ScreenAction {
        ScreenAction::CreateNew
    }

    pub fn activate_current(&self) -> Option<ScreenAction> {
        self.current().map(|c| ScreenAction::Activate(c.id))
    }

    pub fn toggle_current(&self) -> Option<ScreenAction> {
        self.current().map(|c| ScreenAction::ToggleSelected(c.id))
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ContactStore, MemoryStore};
    use std::sync::{Arc, Mutex};

    fn sample() -> Vec<ContactRecord> {
        vec![
            ContactRecord::new(1, "A", "", "Ant", "0000000000", "Mobile"),
            ContactRecord::new(2, "B", "", "Bird", "1111111111", "Home"),
            ContactRecord::new(3, "C", "", "Cat", "2222222222", "Work"),
        ]
    }

    fn visible_ids(screen: &PhoneScreen) -> Vec<i64> {
        screen.visible().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_screen() {
        let screen = PhoneScreen::new();
        assert!(!screen.has_phones());
        assert!(screen.visible().is_empty());
        assert_eq!(screen.activate_current(), None);
        assert_eq!(screen.create_new(), ScreenAction::CreateNew);
    }

    #[test]
    fn test_typing_filters() {
        let mut screen = PhoneScreen::new();
        screen.set_phones(sample());
        assert_eq!(visible_ids(&screen), vec![1, 2, 3]);

        screen.push_char('a');
        screen.push_char('N');
        assert_eq!(screen.query(), "aN");
        assert_eq!(visible_ids(&screen), vec![1]);

        screen.pop_char();
        assert_eq!(visible_ids(&screen), vec![1, 3]);

        screen.clear_query();
        assert_eq!(visible_ids(&screen), vec![1, 2, 3]);
    }

    #[test]
    fn test_cursor_clamped_to_results() {
        let mut screen = PhoneScreen::new();
        screen.set_phones(sample());
        screen.move_down();
        screen.move_down();
        screen.move_down();
        assert_eq!(screen.cursor(), 2);
        assert_eq!(screen.activate_current(), Some(ScreenAction::Activate(3)));

        screen.set_query("bird");
        assert_eq!(screen.cursor(), 0);
        assert_eq!(screen.toggle_current(), Some(ScreenAction::ToggleSelected(2)));

        screen.move_up();
        assert_eq!(screen.cursor(), 0);
    }

    #[test]
    fn test_driven_by_store_subscription() {
        let mut store = MemoryStore::with_records(sample());
        let screen = Arc::new(Mutex::new(PhoneScreen::new()));
        let sink = Arc::clone(&screen);
        store.subscribe(move |records| sink.lock().unwrap().set_phones(records.to_vec()));

        screen.lock().unwrap().set_query("i");
        assert_eq!(visible_ids(&screen.lock().unwrap()), vec![1, 2]);

        store.move_to_trash(2).unwrap();
        assert_eq!(visible_ids(&screen.lock().unwrap()), vec![1]);

        let action = screen.lock().unwrap().toggle_current();
        if let Some(ScreenAction::ToggleSelected(id)) = action {
            store.toggle_selected(id).unwrap();
        }
        let current = screen.lock().unwrap().current().unwrap();
        assert_eq!(current.id, 1);
        assert!(current.is_selected());
    }
}
