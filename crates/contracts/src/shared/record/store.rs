use serde::{Deserialize, Serialize};

use super::filter::{filter_view, FilterKey, Filterable};
use crate::domain::common::{Record, RecordId};

/// Answer to the "Are you sure?" prompt that guards deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confirmation {
    Accepted,
    Declined,
}

impl Confirmation {
    pub fn from_flag(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Accepted
        } else {
            Confirmation::Declined
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the prompt; the collection is untouched
    Cancelled,
    NotFound,
}

/// Hands out record ids. Every id issued is greater than any id the store
/// has ever held, so deleted ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn starting_after(ids: impl IntoIterator<Item = RecordId>) -> Self {
        let max = ids.into_iter().map(|id| id.value()).max().unwrap_or(0);
        Self { next: max + 1 }
    }

    pub fn next_id(&mut self) -> RecordId {
        let id = RecordId::new(self.next);
        self.next += 1;
        id
    }
}

/// In-memory collection of one domain's records, in insertion order.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
    ids: IdSequence,
}

impl<R: Record> RecordStore<R> {
    /// Builds a store from seed rows. Rows repeating an earlier id are dropped.
    pub fn new(seed: Vec<R>) -> Self {
        let mut records: Vec<R> = Vec::with_capacity(seed.len());
        for record in seed {
            if records.iter().all(|existing| existing.id() != record.id()) {
                records.push(record);
            }
        }
        let ids = IdSequence::starting_after(records.iter().map(|record| record.id()));
        Self { records, ids }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut R> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Allocates a fresh id, builds the record with it and appends it
    pub fn insert_new(&mut self, build: impl FnOnce(RecordId) -> R) -> RecordId {
        let id = self.ids.next_id();
        self.records.push(build(id));
        id
    }

    /// Replaces the record with the same id in place. Returns `false` when no
    /// such record exists.
    pub fn replace(&mut self, record: R) -> bool {
        match self.position(record.id()) {
            Some(index) => {
                self.records[index] = record;
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: RecordId, confirmation: Confirmation) -> DeleteOutcome {
        let Some(index) = self.position(id) else {
            return DeleteOutcome::NotFound;
        };
        match confirmation {
            Confirmation::Declined => DeleteOutcome::Cancelled,
            Confirmation::Accepted => {
                self.records.remove(index);
                DeleteOutcome::Deleted
            }
        }
    }
}

impl<R: Record + Filterable> RecordStore<R> {
    pub fn filtered(&self, key: FilterKey<R::Key>) -> Vec<R> {
        filter_view(&self.records, key, |record| record.filter_key())
    }
}
