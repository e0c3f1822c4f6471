pub mod errors;

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Default byte quota, matching a browser origin's usual budget.
pub const DEFAULT_QUOTA: u64 = 10 * 1024 * 1024;

/// Durable per-directory string store with JSON values.
///
/// Mimics a browser origin's local storage: flat keys, serialized
/// values, a total byte quota, and a well-defined absent signal on
/// load. One `<key>.json` file per key on disk; the memory backend
/// keeps the same contract for tests.
pub struct LocalStorage {
    backend: Backend,
    quota: u64,
    sizes: HashMap<String, u64>,
}

enum Backend {
    Disk(PathBuf),
    Memory(HashMap<String, String>),
}

impl LocalStorage {
    /// Open a disk-backed store, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with_quota(dir, DEFAULT_QUOTA)
    }

    pub fn open_with_quota(dir: impl Into<PathBuf>, quota: u64) -> Result<Self> {
        let dir = dir.into();

        fs::create_dir_all(&dir)?;

        let mut sizes = HashMap::new();

        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().map(|ext| ext == "json") != Some(true) {
                continue;
            }

            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                sizes.insert(stem.to_owned(), entry.metadata()?.len());
            }
        }

        Ok(Self {
            backend: Backend::Disk(dir),
            quota,
            sizes,
        })
    }

    /// In-memory store with the same contract.
    pub fn memory() -> Self {
        Self::memory_with_quota(DEFAULT_QUOTA)
    }

    pub fn memory_with_quota(quota: u64) -> Self {
        Self {
            backend: Backend::Memory(HashMap::new()),
            quota,
            sizes: HashMap::new(),
        }
    }

    /// Serialize then store durably under this key.
    ///
    /// Refused with `QuotaExceeded` when the write would push the
    /// store's total past its quota; the previous value is kept.
    pub fn save<T>(&mut self, key: &str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let data = serde_json::to_string(value)?;

        let size = data.len() as u64;
        let stored: u64 = self
            .sizes
            .iter()
            .filter(|(stored_key, _)| stored_key.as_str() != key)
            .map(|(_, size)| size)
            .sum();

        if stored + size > self.quota {
            return Err(Error::QuotaExceeded {
                needed: stored + size,
                quota: self.quota,
            });
        }

        match &mut self.backend {
            Backend::Disk(dir) => fs::write(Self::key_path(dir, key), &data)?,
            Backend::Memory(map) => {
                map.insert(key.to_owned(), data);
            }
        }

        self.sizes.insert(key.to_owned(), size);

        Ok(())
    }

    /// Deserialized value, or `None` when the key was never stored or
    /// the stored content is not valid JSON for `T`.
    pub fn load<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let data = match &self.backend {
            Backend::Disk(dir) => fs::read_to_string(Self::key_path(dir, key)).ok()?,
            Backend::Memory(map) => map.get(key)?.clone(),
        };

        serde_json::from_str(&data).ok()
    }

    /// Delete this key; removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        match &mut self.backend {
            Backend::Disk(dir) => {
                let path = Self::key_path(dir, key);

                if path.exists() {
                    fs::remove_file(path)?;
                }
            }
            Backend::Memory(map) => {
                map.remove(key);
            }
        }

        self.sizes.remove(key);

        Ok(())
    }

    fn key_path(dir: &Path, key: &str) -> PathBuf {
        dir.join(format!("{}.json", key))
    }
}
