use redb::{Database, ReadableDatabase, TableDefinition};
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError};

const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

fn backend<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Backend(e.to_string())
}

/// File-backed key-value store on top of an embedded redb database.
pub struct RedbStore {
    db: Database,
    path: PathBuf,
}

impl RedbStore {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::Backend(format!(
                    "failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let db = Database::create(path).map_err(|e| {
            StorageError::Backend(format!(
                "failed to open database at {}: {}",
                path.display(),
                e
            ))
        })?;

        // Ensure table exists so readers never see TableDoesNotExist
        let write_txn = db.begin_write().map_err(backend)?;
        {
            write_txn.open_table(KV_TABLE).map_err(backend)?;
        }
        write_txn.commit().map_err(backend)?;

        tracing::info!(path = %path.display(), "Opened area database");
        Ok(RedbStore {
            db,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size_bytes(&self) -> Result<u64, StorageError> {
        std::fs::metadata(&self.path)
            .map(|m| m.len())
            .map_err(backend)
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let read_txn = self.db.begin_read().map_err(backend)?;
        let table = read_txn.open_table(KV_TABLE).map_err(backend)?;
        let value = table.get(key).map_err(backend)?;
        Ok(value.map(|v| v.value().to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_txn = self.db.begin_write().map_err(backend)?;
        {
            let mut table = write_txn.open_table(KV_TABLE).map_err(backend)?;
            table.insert(key, value).map_err(backend)?;
        }
        write_txn.commit().map_err(backend)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let write_txn = self.db.begin_write().map_err(backend)?;
        {
            let mut table = write_txn.open_table(KV_TABLE).map_err(backend)?;
            table.remove(key).map_err(backend)?;
        }
        write_txn.commit().map_err(backend)?;
        Ok(())
    }
}
