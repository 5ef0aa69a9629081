//! File-based session store
//!
//! Directory structure:
//! ```text
//! session_dir/
//! ├── <session-id>.json       # one record per session
//! └── <session-id>.json.tmp   # transient, renamed over the record on save
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::fs;
use tokio::sync::RwLock;
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store::{self, ExpiredDeletion, SessionStore};
use tracing::{debug, error, info, warn};

const RECORD_EXTENSION: &str = "json";

fn backend(e: std::io::Error) -> session_store::Error {
    session_store::Error::Backend(e.to_string())
}

/// File-backed session store. Sessions survive a restart
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    /// Base directory for session files
    session_dir: Arc<PathBuf>,
    /// Lock for file operations within this process
    lock: Arc<RwLock<()>>,
}

impl FileSessionStore {
    /// Create the store, creating the directory when missing
    pub fn new(session_dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let session_dir = session_dir.into();
        std::fs::create_dir_all(&session_dir).map_err(|e| {
            error!(error = %e, dir = %session_dir.display(), "Failed to create session directory");
            e
        })?;

        info!(session_dir = %session_dir.display(), "File session store initialized");

        Ok(Self {
            session_dir: Arc::new(session_dir),
            lock: Arc::new(RwLock::new(())),
        })
    }

    fn record_path(&self, id: &Id) -> PathBuf {
        self.session_dir.join(format!("{}.{}", id, RECORD_EXTENSION))
    }

    /// Read a record. A missing file is None; an unreadable record is dropped
    async fn read_record(path: &Path) -> session_store::Result<Option<Record>> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                error!(error = %e, path = %path.display(), "Failed to read session file");
                return Err(backend(e));
            }
        };

        match serde_json::from_str::<Record>(&content) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Discarding corrupted session file");
                Self::remove_file(path).await?;
                Ok(None)
            }
        }
    }

    async fn remove_file(path: &Path) -> session_store::Result<()> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                error!(error = %e, path = %path.display(), "Failed to remove session file");
                Err(backend(e))
            }
        }
    }

    async fn write_record(&self, record: &Record) -> session_store::Result<()> {
        let path = self.record_path(&record.id);
        let tmp_path = path.with_extension(format!("{}.tmp", RECORD_EXTENSION));
        let content = serde_json::to_string(record)
            .map_err(|e| session_store::Error::Encode(e.to_string()))?;

        fs::write(&tmp_path, content).await.map_err(backend)?;
        fs::rename(&tmp_path, &path).await.map_err(backend)?;

        debug!(session_id = %record.id, "Session written to file");
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        let _guard = self.lock.write().await;

        // ID 충돌 시 재발급
        while fs::try_exists(self.record_path(&record.id))
            .await
            .map_err(backend)?
        {
            record.id = Id::default();
        }

        self.write_record(record).await
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        let _guard = self.lock.write().await;
        self.write_record(record).await
    }

    async fn load(&self, id: &Id) -> session_store::Result<Option<Record>> {
        let path = self.record_path(id);
        let record = {
            let _guard = self.lock.read().await;
            Self::read_record(&path).await?
        };

        match record {
            Some(record) if record.expiry_date <= OffsetDateTime::now_utc() => {
                let _guard = self.lock.write().await;
                Self::remove_file(&path).await?;
                debug!(session_id = %id, "Expired session removed on access");
                Ok(None)
            }
            other => Ok(other),
        }
    }

    async fn delete(&self, id: &Id) -> session_store::Result<()> {
        let _guard = self.lock.write().await;
        Self::remove_file(&self.record_path(id)).await
    }
}

#[async_trait]
impl ExpiredDeletion for FileSessionStore {
    async fn delete_expired(&self) -> session_store::Result<()> {
        let now = OffsetDateTime::now_utc();
        let _guard = self.lock.write().await;

        let mut entries = fs::read_dir(self.session_dir.as_path())
            .await
            .map_err(backend)?;
        let mut removed = 0usize;

        while let Some(entry) = entries.next_entry().await.map_err(backend)? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }

            match Self::read_record(&path).await? {
                Some(record) if record.expiry_date <= now => {
                    Self::remove_file(&path).await?;
                    removed += 1;
                }
                _ => {}
            }
        }

        if removed > 0 {
            info!(removed, "Purged expired sessions");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use time::Duration;

    fn record(ttl: Duration) -> Record {
        Record {
            id: Id::default(),
            data: HashMap::from([("username".to_string(), serde_json::json!("admin"))]),
            expiry_date: OffsetDateTime::now_utc() + ttl,
        }
    }

    #[tokio::test]
    async fn should_persist_session_across_store_instances() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let mut saved = record(Duration::hours(24));

        // Act
        FileSessionStore::new(dir.path())
            .unwrap()
            .create(&mut saved)
            .await
            .unwrap();
        let reopened = FileSessionStore::new(dir.path()).unwrap();
        let loaded = reopened.load(&saved.id).await.unwrap().unwrap();

        // Assert
        assert_eq!(loaded.id, saved.id);
        assert_eq!(loaded.data, saved.data);
        assert!(dir.path().join(format!("{}.json", saved.id)).exists());
    }

    #[tokio::test]
    async fn should_report_missing_session_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path()).unwrap();

        let loaded = store.load(&Id::default()).await.unwrap();

        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn should_remove_expired_session_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path()).unwrap();
        let stale = record(Duration::seconds(-1));
        store.save(&stale).await.unwrap();

        let loaded = store.load(&stale.id).await.unwrap();

        assert!(loaded.is_none());
        assert!(!dir.path().join(format!("{}.json", stale.id)).exists());
    }

    #[tokio::test]
    async fn should_discard_corrupted_session_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path()).unwrap();
        let id = Id::default();
        std::fs::write(dir.path().join(format!("{}.json", id)), "{not json").unwrap();

        let loaded = store.load(&id).await.unwrap();

        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn delete_and_purge_should_clean_up_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path()).unwrap();
        let live = record(Duration::hours(1));
        let stale = record(Duration::seconds(-10));
        let logged_out = record(Duration::hours(1));
        for r in [&live, &stale, &logged_out] {
            store.save(r).await.unwrap();
        }

        store.delete(&logged_out.id).await.unwrap();
        store.delete(&Id::default()).await.unwrap();
        store.delete_expired().await.unwrap();

        assert!(store.load(&live.id).await.unwrap().is_some());
        assert!(store.load(&logged_out.id).await.unwrap().is_none());
        assert!(!dir.path().join(format!("{}.json", stale.id)).exists());
    }
}
