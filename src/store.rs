//! In-memory contact store.
//!
//! Holds the phone book for the lifetime of the process and notifies
//! subscribers with a fresh snapshot of the records not in trash whenever
//! something changes. Nothing is written to disk.

use std::collections::HashSet;

use crate::error::{PhonebookError, Result};
use crate::models::ContactRecord;

/// Source of contacts for the phone screen.
pub trait ContactStore {
    /// Records not moved to trash, in insertion order.
    fn phones_not_in_trash(&self) -> Vec<ContactRecord>;

    /// Flip the selection flag of a record.
    fn toggle_selected(&mut self, id: i64) -> Result<()>;
}

/// Handle returned by [`MemoryStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&[ContactRecord]) + Send>;

#[derive(Debug, Clone)]
struct Entry {
    record: ContactRecord,
    in_trash: bool,
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Vec<Entry>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from loaded records. Duplicate or zero ids are reassigned.
    pub fn with_records(records: impl IntoIterator<Item = ContactRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert_quiet(record);
        }
        store
    }

    /// Add a record, returning the id it was stored under.
    pub fn insert(&mut self, record: ContactRecord) -> i64 {
        let id = self.insert_quiet(record);
        tracing::debug!(id, "inserted contact");
        self.notify();
        id
    }

    fn insert_quiet(&mut self, mut record: ContactRecord) -> i64 {
        if record.id == 0 || self.position(record.id).is_some() {
            let reassigned = self.next_id();
            if record.id != 0 {
                tracing::warn!(old = record.id, new = reassigned, "duplicate contact id reassigned");
            }
            record.id = reassigned;
        }
        let id = record.id;
        self.entries.push(Entry {
            record,
            in_trash: false,
        });
        id
    }

    /// One past the largest id, or the smallest free positive id once
    /// `i64::MAX` is taken.
    fn next_id(&self) -> i64 {
        let max = self.entries.iter().map(|e| e.record.id).max().unwrap_or(0);
        if let Some(next) = max.max(0).checked_add(1) {
            return next;
        }
        let taken: HashSet<i64> = self.entries.iter().map(|e| e.record.id).collect();
        (1..).find(|id| !taken.contains(id)).unwrap_or(1)
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.entries.iter().position(|e| e.record.id == id)
    }

    fn entry_mut(&mut self, id: i64) -> Result<&mut Entry> {
        let idx = self.position(id).ok_or(PhonebookError::ContactNotFound(id))?;
        Ok(&mut self.entries[idx])
    }

    /// Look up a record by id, including records in trash.
    pub fn get(&self, id: i64) -> Option<&ContactRecord> {
        self.entries
            .iter()
            .find(|e| e.record.id == id)
            .map(|e| &e.record)
    }

    pub fn move_to_trash(&mut self, id: i64) -> Result<()> {
        self.entry_mut(id)?.in_trash = true;
        tracing::debug!(id, "moved contact to trash");
        self.notify();
        Ok(())
    }

    pub fn restore(&mut self, id: i64) -> Result<()> {
        self.entry_mut(id)?.in_trash = false;
        tracing::debug!(id, "restored contact from trash");
        self.notify();
        Ok(())
    }

    /// Register a listener. It is called right away with the current
    /// snapshot, then after every change.
    pub fn subscribe<F>(&mut self, mut listener: F) -> SubscriptionId
    where
        F: FnMut(&[ContactRecord]) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        listener(&self.phones_not_in_trash());
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.phones_not_in_trash();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }
}

impl ContactStore for MemoryStore {
    fn phones_not_in_trash(&self) -> Vec<ContactRecord> {
        self.entries
            .iter()
            .filter(|e| !e.in_trash)
            .map(|e| e.record.clone())
            .collect()
    }

    fn toggle_selected(&mut self, id: i64) -> Result<()> {
        let entry = self.entry_mut(id)?;
        let next = !entry.record.is_selected();
        entry.record.selected = Some(next);
        tracing::debug!(id, selected = next, "toggled contact selection");
        self.notify();
        Ok(())
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("entries", &self.entries)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
