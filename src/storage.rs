//! Persistence collaborator.
//!
//! スナップショットは固定キーの下に JSON 文字列として保存する。
//! ブラウザでは localStorage、ネイティブ/テストでは MemoryStorage を使う。

use std::collections::HashMap;

use crate::error::StorageError;

/// Key/value store for snapshot blobs.
pub trait Storage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process store. Used by native drivers and tests.
#[derive(Default, Debug, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
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

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Browser localStorage. WASM 環境でのみ動作。
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// Fails with `Unavailable` when there is no window or the browser
    /// blocks storage access.
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { inner })
    }
}

#[cfg(target_arch = "wasm32")]
impl Storage for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_roundtrip() {
        let mut s = MemoryStorage::new();
        assert_eq!(s.load("k").unwrap(), None);
        s.save("k", "v").unwrap();
        assert_eq!(s.load("k").unwrap().as_deref(), Some("v"));
        s.remove("k").unwrap();
        assert_eq!(s.load("k").unwrap(), None);
        assert!(s.is_empty());
    }

    #[test]
    fn memory_storage_overwrites() {
        let mut s = MemoryStorage::new();
        s.save("k", "a").unwrap();
        s.save("k", "b").unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.load("k").unwrap().as_deref(), Some("b"));
    }
}
