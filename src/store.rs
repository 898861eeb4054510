//! Key-value persistence for high scores.
//!
//! The games only ever see [`HighScores`]: `read` a slot once when a session
//! opens and `write` it when a finished game beats it. Underneath sits a
//! plain string store with get/set/remove, either in memory or a JSON file.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use crate::error::{ArcadeError, Result};

pub const SCORES_FILE: &str = "scores.json";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

// ── In memory ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// ── JSON file ─────────────────────────────────────────────────────────────────

/// A single JSON object on disk. Every write re-reads the file first so
/// stores opened by different sessions do not clobber each other's keys.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = read_entries(&path);
        JsonFileStore { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn update(&mut self, change: impl FnOnce(&mut BTreeMap<String, Value>)) -> Result<()> {
        let mut entries = read_entries(&self.path);
        change(&mut entries);
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| ArcadeError::json(&self.path, e))?;
        fs::write(&self.path, json).map_err(|e| ArcadeError::io(&self.path, e))?;
        self.entries = entries;
        Ok(())
    }
}

fn read_entries(path: &Path) -> BTreeMap<String, Value> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read store, starting empty");
            return BTreeMap::new();
        }
    };
    serde_json::from_str(&json).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "malformed store, starting empty");
        BTreeMap::new()
    })
}

impl KeyValueStore for JsonFileStore {
    /// Strings come back as-is; numbers and booleans as their JSON text.
    fn get(&self, key: &str) -> Option<String> {
        match self.entries.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), Value::String(value.to_string()));
        })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

// ── High scores ──────────────────────────────────────────────────────────────

/// Integer view over a string store. Anything that does not parse as a
/// non-negative integer reads as absent.
#[derive(Clone, Debug, Default)]
pub struct HighScores<S> {
    store: S,
}

impl<S: KeyValueStore> HighScores<S> {
    pub fn new(store: S) -> Self {
        HighScores { store }
    }

    pub fn read(&self, key: &str) -> Option<u32> {
        self.store.get(key).and_then(|s| s.trim().parse().ok())
    }

    pub fn write(&mut self, key: &str, score: u32) -> Result<()> {
        self.store.set(key, &score.to_string())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
