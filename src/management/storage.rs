use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::PathBuf,
};

use crate::{config, error::StorageError, warning};

/// Key holding the credential string.
pub const TOKEN_KEY: &str = "token";
/// Key holding the serialized user profile.
pub const USER_KEY: &str = "user";

const SESSION_FILE: &str = "session.json";

/// Key/value store for client state that survives restarts.
///
/// Entries live in a single JSON object on disk. Every write rewrites the
/// whole file, so a batch of keys passed to [`SessionStore::set_all`] or
/// [`SessionStore::remove_all`] lands in one write.
///
/// Reads fail on a file that is not a JSON object of strings. Writes replace
/// such a file instead of merging into it.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store kept in `dir/session.json`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(SESSION_FILE),
        }
    }

    pub fn default_location() -> Self {
        Self::new(config::data_dir())
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load().await?.remove(key))
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_all(&[(key, value)]).await
    }

    pub async fn set_all(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let (mut map, _) = self.load_for_write().await?;
        for (key, value) in entries {
            map.insert(key.to_string(), value.to_string());
        }
        self.persist(&map).await
    }

    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.remove_all(&[key]).await
    }

    /// Removes the keys. Removing keys that are not there is not an error.
    pub async fn remove_all(&self, keys: &[&str]) -> Result<(), StorageError> {
        let (mut map, discarded) = self.load_for_write().await?;
        let before = map.len();
        map.retain(|k, _| !keys.contains(&k.as_str()));

        if map.len() == before && !discarded {
            return Ok(());
        }
        self.persist(&map).await
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Like `load`, but an unreadable file counts as empty. The flag tells
    /// whether the file content was discarded.
    async fn load_for_write(&self) -> Result<(BTreeMap<String, String>, bool), StorageError> {
        match self.load().await {
            Ok(map) => Ok((map, false)),
            Err(StorageError::Serde(e)) => {
                warning!("Replacing unreadable {}: {}", self.path.display(), e);
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    async fn persist(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(map)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }
}
