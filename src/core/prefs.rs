//! # Preference Store
//!
//! A narrow key-value port for the one value that survives restarts: the
//! last selected mode. Injected into `App` so tests can use the in-memory
//! store.
//!
//! The file store keeps everything in `~/.corrector/prefs.json` and rewrites
//! it on every `set` using atomic rename (write `.tmp`, then `rename()`).

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

/// Key under which the selected mode name is stored.
pub const MODE_PREFERENCE_KEY: &str = "corrector_mode";

#[derive(Debug)]
pub enum PrefsError {
    Io(io::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefsError::Io(e) => write!(f, "preference I/O error: {e}"),
            PrefsError::Serialize(e) => write!(f, "preference encoding error: {e}"),
        }
    }
}

impl std::error::Error for PrefsError {}

pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// Returns `~/.corrector/prefs.json`.
pub fn prefs_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".corrector").join("prefs.json"))
}

pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Opens the store at `path`. A missing file is an empty store; a
    /// malformed one is logged and treated as empty.
    pub fn open(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!("Ignoring malformed preferences at {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("Failed to read preferences at {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        debug!("Opened preferences at {} ({} keys)", path.display(), values.len());
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(PrefsError::Io)?;
        }
        let json = serde_json::to_string_pretty(&self.values).map_err(PrefsError::Serialize)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(PrefsError::Io)?;
        fs::rename(&tmp, &self.path).map_err(PrefsError::Io)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// Process-local store. Used in tests and when there is no home directory.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
