//! Mock collaborators for testing without git

use spr_reword::error::{Error, Result};
use spr_reword::git::HistoryLookup;
use spr_reword::identifier::IdentifierSource;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory commit history
#[derive(Default)]
pub struct MockHistory {
    messages: HashMap<String, String>,
    lookups: RefCell<Vec<String>>,
}

impl MockHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commit(mut self, hash: &str, message: &str) -> Self {
        self.messages.insert(hash.to_string(), message.to_string());
        self
    }

    /// Hashes looked up so far, in order
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }
}

impl HistoryLookup for MockHistory {
    fn commit_message(&self, hash: &str) -> Result<String> {
        self.lookups.borrow_mut().push(hash.to_string());
        self.messages.get(hash).cloned().ok_or_else(|| Error::Git {
            command: format!("log --format=%B -n 1 {hash}"),
            stderr: format!("fatal: ambiguous argument '{hash}': unknown revision"),
        })
    }
}

/// Identifier source that always returns the same id and counts calls
pub struct FixedIds {
    id: Uuid,
    calls: Cell<usize>,
}

impl FixedIds {
    pub fn new(id: &str) -> Self {
        Self {
            id: Uuid::parse_str(id).expect("valid uuid"),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl IdentifierSource for FixedIds {
    fn generate(&self) -> Uuid {
        self.calls.set(self.calls.get() + 1);
        self.id
    }
}
