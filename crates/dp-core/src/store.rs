// ABOUTME: Per-container property stores that survive reloads.
// ABOUTME: In-memory store plus a file store (zstd-compressed JSON).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Key/value properties owned by one container
pub trait PropertyStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: PropertyStore + ?Sized> PropertyStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PropertyStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// On-disk layout of a store file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    version: u32,
    properties: BTreeMap<String, String>,
}

impl StoreData {
    const CURRENT_VERSION: u32 = 1;
}

/// Properties persisted to a file; every `set` writes through
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    properties: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store file. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let properties = if path.exists() {
            read_store(&path)?.properties
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, properties })
    }

    /// Default location for a container's store
    /// (~/.local/state/dualpane/<container>.bin)
    pub fn default_path(container: &str) -> Option<PathBuf> {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .map(|p| p.join("dualpane").join(format!("{container}.bin")))
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = StoreData {
            version: StoreData::CURRENT_VERSION,
            properties: self.properties.clone(),
        };
        let json = serde_json::to_vec(&data)?;
        let mut encoder = zstd::Encoder::new(Vec::new(), 3)?;
        encoder.write_all(&json)?;
        let compressed = encoder.finish()?;

        std::fs::write(&self.path, compressed)?;
        Ok(())
    }
}

impl PropertyStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.properties.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.properties.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

fn read_store(path: &Path) -> Result<StoreData, StoreError> {
    let compressed = std::fs::read(path)?;

    let mut decoder = zstd::Decoder::new(&compressed[..])?;
    let mut json = Vec::new();
    decoder.read_to_end(&mut json)?;

    let data: StoreData = serde_json::from_slice(&json)?;
    if data.version > StoreData::CURRENT_VERSION {
        return Err(StoreError::UnsupportedVersion(data.version));
    }
    Ok(data)
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported store version: {0}")]
    UnsupportedVersion(u32),
}
