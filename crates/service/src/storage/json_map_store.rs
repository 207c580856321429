use std::{collections::HashMap, hash::Hash, io::ErrorKind, path::PathBuf, sync::Arc};
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;

/// Generic JSON file-backed document map.
///
/// Persists a `HashMap<K, V>` to a single JSON file. Every mutation is written
/// through before the call returns; writers hold the lock across the write so
/// the file always reflects the latest committed map.
pub struct JsonMapStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
    file_path: PathBuf,
}

impl<K, V> JsonMapStore<K, V>
where
    K: Eq + Hash + serde::Serialize + serde::de::DeserializeOwned + Clone,
    V: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Open the store at `path`. Creates the file (and its directory) with an empty map if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        common::env::ensure_parent_dir(&file_path)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;

        let map: HashMap<K, V> = match fs::read(&file_path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => HashMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ServiceError::Db(format!("corrupt store file {}: {e}", file_path.display()))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let empty: HashMap<K, V> = HashMap::new();
                write_file(&file_path, &empty).await?;
                empty
            }
            Err(e) => return Err(ServiceError::Db(e.to_string())),
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(map)), file_path }))
    }

    /// All stored values, in no particular order.
    pub async fn values(&self) -> Vec<V> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Insert or replace a value by key and persist.
    pub async fn insert(&self, key: K, value: V) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        let previous = map.insert(key.clone(), value);
        if let Err(e) = write_file(&self.file_path, &*map).await {
            match previous {
                Some(v) => map.insert(key, v),
                None => map.remove(&key),
            };
            return Err(e);
        }
        Ok(())
    }

    /// Remove a key and persist; returns the removed value if it existed.
    pub async fn remove(&self, key: &K) -> Result<Option<V>, ServiceError> {
        let mut map = self.inner.write().await;
        let Some(removed) = map.remove(key) else {
            return Ok(None);
        };
        if let Err(e) = write_file(&self.file_path, &*map).await {
            map.insert(key.clone(), removed);
            return Err(e);
        }
        Ok(Some(removed))
    }

    /// Mutate the value under `key` in place and persist.
    ///
    /// Returns the new value, or `None` if the key is absent. When `f` fails
    /// or the write fails the stored value is left as it was.
    pub async fn update<F>(&self, key: &K, f: F) -> Result<Option<V>, ServiceError>
    where
        F: FnOnce(&mut V) -> Result<(), ServiceError>,
    {
        let mut map = self.inner.write().await;
        let Some(current) = map.get(key).cloned() else {
            return Ok(None);
        };
        let mut next = current.clone();
        f(&mut next)?;
        map.insert(key.clone(), next.clone());
        if let Err(e) = write_file(&self.file_path, &*map).await {
            map.insert(key.clone(), current);
            return Err(e);
        }
        Ok(Some(next))
    }
}

/// Write via a sibling temp file and rename so readers never see a torn file.
async fn write_file<T: serde::Serialize>(path: &PathBuf, value: &T) -> Result<(), ServiceError> {
    let data = serde_json::to_vec_pretty(value).map_err(|e| ServiceError::Db(e.to_string()))?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, data).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    fs::rename(&tmp, path).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}
