//! Preference storage backends.

use crate::error::StorageError;
use std::collections::HashMap;

/// Key/value persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

// ─── MemoryStore ─────────────────────────────────────────────────────────────

/// In-process store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ─── FileStore ───────────────────────────────────────────────────────────────

#[cfg(not(target_arch = "wasm32"))]
pub use self::file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::PreferenceStore;
    use crate::error::StorageError;
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    /// JSON object on disk, one string value per key.
    ///
    /// A missing file reads as empty. Every `set` rewrites the whole file.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
            match std::fs::read(&self.path) {
                Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
                Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(e) => Err(e.into()),
            }
        }
    }

    impl PreferenceStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.read_all()?.remove(key))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut values = self.read_all()?;
            values.insert(key.to_string(), value.to_string());
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&self.path, serde_json::to_vec_pretty(&values)?)?;
            Ok(())
        }
    }
}

// ─── LocalStorage ────────────────────────────────────────────────────────────

#[cfg(feature = "web")]
pub use self::web::LocalStorage;

#[cfg(feature = "web")]
mod web {
    use super::PreferenceStore;
    use crate::error::StorageError;
    use wasm_bindgen::JsValue;

    fn js_err(e: JsValue) -> StorageError {
        StorageError::Unavailable(format!("{e:?}"))
    }

    /// Browser `localStorage`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LocalStorage;

    impl LocalStorage {
        fn storage(&self) -> Result<web_sys::Storage, StorageError> {
            web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no window".into()))?
                .local_storage()
                .map_err(js_err)?
                .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))
        }
    }

    impl PreferenceStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage()?.get_item(key).map_err(js_err)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage()?.set_item(key, value).map_err(js_err)
        }
    }
}
