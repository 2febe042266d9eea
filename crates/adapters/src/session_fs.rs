//! Filesystem session cache
//!
//! Stores the collaborator-issued session as a single JSON file so separate
//! CLI invocations share a login. The token is the collaborator's to
//! validate or expire; this is only a cache.

use async_trait::async_trait;
use std::path::PathBuf;
use zerohunger_domain::{Session, SessionError, SessionStore};

/// Session store backed by one JSON file.
pub struct FsSessionStore {
    path: PathBuf,
}

impl FsSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SessionStore for FsSessionStore {
    async fn load(&self) -> Result<Option<Session>, SessionError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let session = serde_json::from_str(&raw)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;
        Ok(Some(session))
    }

    async fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let raw = serde_json::to_string_pretty(session)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn session() -> Session {
        Session {
            access_token: "jwt-token".to_string(),
            user_id: Uuid::nil(),
            email: "amina@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let dir = TempDir::new().unwrap();
        let store = FsSessionStore::new(dir.path().join("session.json"));

        store.save(&session()).await.unwrap();
        let loaded = store.load().await.unwrap().expect("session present");

        assert_eq!(loaded.access_token, "jwt-token");
        assert_eq!(loaded.email, "amina@example.com");
    }

    #[tokio::test]
    async fn load_without_a_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FsSessionStore::new(dir.path().join("missing.json"));

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = FsSessionStore::new(dir.path().join("nested/dir/session.json"));

        store.save(&session()).await.unwrap();
        assert!(store.load().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn clear_removes_the_cache_and_tolerates_absence() {
        let dir = TempDir::new().unwrap();
        let store = FsSessionStore::new(dir.path().join("session.json"));

        store.save(&session()).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());

        // Clearing again is fine.
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn corrupt_cache_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let store = FsSessionStore::new(path);
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, SessionError::Serialization(_)));
    }
}
