//! Layout persistence.
//!
//! Node positions are persisted into named save slots. A save call appends
//! one position record per node, in node-iteration order, whether or not the
//! node moved; repeated saves therefore accumulate a history of layouts
//! instead of overwriting. Hosts that only want the latest layout read the
//! tail records of a slot.
//!
//! The whole persisted structure is serialized to a [`LayoutStore`] on every
//! successful save. Save data is created lazily on first use, kept in memory
//! for the session, and never auto-loaded.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One persisted node position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotRecord {
    pub position: Point,
}

/// A named layout slot holding the accumulated position history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    pub records: Vec<SlotRecord>,
}

/// The full persisted structure: every slot saved this session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub slots: Vec<Slot>,
}

/// Why a save request was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// The slot name was empty or whitespace-only.
    EmptySlotName,
    /// The persisted structure could not be serialized.
    Serialize(String),
    /// The storage sink rejected the write.
    Store(String),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySlotName => write!(f, "save slot name must not be empty"),
            Self::Serialize(msg) => write!(f, "failed to serialize layout: {}", msg),
            Self::Store(msg) => write!(f, "failed to write layout to store: {}", msg),
        }
    }
}

/// Storage sink for serialized layout data.
///
/// The core decides what to persist; the host decides where it goes (asset
/// file, settings database, ...).
pub trait LayoutStore {
    fn write(&mut self, payload: &str) -> Result<(), String>;
}

/// In-memory store keeping every write, for tests and ephemeral hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    writes: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent serialized payload, if any save succeeded.
    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }
}

impl LayoutStore for MemoryStore {
    fn write(&mut self, payload: &str) -> Result<(), String> {
        self.writes.push(payload.to_owned());
        Ok(())
    }
}

impl SaveData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a slot by name.
    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.name == name)
    }

    /// Append one record per position to the named slot (created on first
    /// use), then serialize everything to `store`.
    ///
    /// An empty or whitespace-only name is reported and aborts the save
    /// before any mutation: no partial write occurs.
    pub fn save<I>(
        &mut self,
        slot_name: &str,
        positions: I,
        store: &mut dyn LayoutStore,
    ) -> Result<(), SaveError>
    where
        I: IntoIterator<Item = Point>,
    {
        if slot_name.trim().is_empty() {
            log::warn!("rejecting layout save: empty slot name");
            return Err(SaveError::EmptySlotName);
        }

        let slot = match self.slots.iter_mut().find(|s| s.name == slot_name) {
            Some(slot) => slot,
            None => {
                self.slots.push(Slot {
                    name: slot_name.to_owned(),
                    records: Vec::new(),
                });
                self.slots.last_mut().unwrap()
            }
        };

        for position in positions {
            slot.records.push(SlotRecord { position });
        }

        let payload =
            serde_json::to_string(self).map_err(|e| SaveError::Serialize(e.to_string()))?;
        store.write(&payload).map_err(SaveError::Store)?;
        log::debug!("saved layout slot '{}'", slot_name);
        Ok(())
    }

    /// Reserved load hook.
    ///
    /// Intentionally a no-op: the append-only record history makes a naive
    /// "apply last record per node" interpretation ambiguous, so restoring is
    /// left to the host until a restore contract is settled.
    pub fn load(&self, _slot_name: &str) -> Result<(), SaveError> {
        Ok(())
    }
}
