/// In-memory catalog of assessment records.
///
/// The store holds an immutable snapshot that readers clone out cheaply; `reload`
/// swaps in a freshly parsed snapshot without touching the one in-flight queries hold.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::CommonError;
use crate::model::AssessmentRecord;

pub struct CatalogStore {
    path: Option<PathBuf>,
    records: RwLock<Arc<[AssessmentRecord]>>,
}

impl CatalogStore {
    /// Builds a store over records already in memory. `reload` is a no-op for such stores.
    pub fn from_records(records: Vec<AssessmentRecord>) -> Self {
        Self {
            path: None,
            records: RwLock::new(records.into()),
        }
    }

    /// Loads the snapshot at `path`. A missing or unreadable file is logged and
    /// yields an empty catalog rather than an error.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = load_records(&path).await.unwrap_or_else(|e| {
            warn!(error = %e, path = %path.display(), "catalog unavailable, starting empty");
            Vec::new()
        });
        info!(path = %path.display(), records = records.len(), "catalog loaded");

        Self {
            path: Some(path),
            records: RwLock::new(records.into()),
        }
    }

    /// Current snapshot. The lock is released before the caller starts matching.
    pub async fn snapshot(&self) -> Arc<[AssessmentRecord]> {
        Arc::clone(&*self.records.read().await)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Re-reads the snapshot file and replaces the in-memory catalog.
    ///
    /// On failure the previous catalog stays in place and the error is returned.
    pub async fn reload(&self) -> Result<usize, CommonError> {
        let Some(path) = &self.path else {
            return Ok(self.len().await);
        };

        let records = load_records(path).await.inspect_err(|e| {
            warn!(error = %e, path = %path.display(), "catalog reload failed, keeping previous catalog");
        })?;
        let count = records.len();

        *self.records.write().await = records.into();
        info!(path = %path.display(), records = count, "catalog reloaded");
        Ok(count)
    }
}

/// Reads a crawler snapshot: a JSON array of assessment records.
pub async fn load_records(path: &Path) -> Result<Vec<AssessmentRecord>, CommonError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CommonError::Io {
            path: path.display().to_string(),
            source,
        })?;

    serde_json::from_str(&content).map_err(|source| CommonError::Json {
        path: path.display().to_string(),
        source,
    })
}
