//! JSON file lead repository
//!
//! The whole collection lives in one pretty-printed JSON array that is read
//! and rewritten on every operation. Read-modify-write cycles are serialized
//! within the process, and writes go through a temporary file plus rename so
//! an interrupted write never leaves a truncated file behind.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use application::{error::ApplicationError, ports::LeadRepositoryPort};
use async_trait::async_trait;
use domain::{Lead, LeadId, LeadStatus};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::seed::demo_leads;
use crate::config::StorageConfig;

/// Lead repository backed by a single JSON file
pub struct JsonFileLeadRepository {
    path: PathBuf,
    seed_demo_data: bool,
    write_lock: Mutex<()>,
}

impl std::fmt::Debug for JsonFileLeadRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileLeadRepository")
            .field("path", &self.path)
            .field("seed_demo_data", &self.seed_demo_data)
            .finish_non_exhaustive()
    }
}

impl JsonFileLeadRepository {
    /// Create a repository over `path`
    ///
    /// With `seed_demo_data`, a missing file reads as the demo lead set.
    pub fn new(path: impl Into<PathBuf>, seed_demo_data: bool) -> Self {
        Self {
            path: path.into(),
            seed_demo_data,
            write_lock: Mutex::new(()),
        }
    }

    /// Create a repository from configuration
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.data_file.clone(), config.seed_demo_data)
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<Lead>, ApplicationError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Lead file missing");
                return Ok(if self.seed_demo_data {
                    demo_leads()
                } else {
                    Vec::new()
                });
            },
            Err(e) => return Err(storage_error("read", &self.path, &e)),
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Lead file is not valid JSON");
            ApplicationError::Storage(format!(
                "Failed to parse {}: {e}",
                self.path.display()
            ))
        })
    }

    async fn write_all(&self, leads: &[Lead]) -> Result<(), ApplicationError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| storage_error("create directory for", &self.path, &e))?;
        }

        let json = serde_json::to_vec_pretty(leads)
            .map_err(|e| ApplicationError::Internal(format!("Failed to encode leads: {e}")))?;

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| storage_error("write", &tmp, &e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| storage_error("replace", &self.path, &e))?;

        debug!(path = %self.path.display(), count = leads.len(), "Lead file written");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn storage_error(action: &str, path: &Path, e: &std::io::Error) -> ApplicationError {
    ApplicationError::Storage(format!("Failed to {action} {}: {e}", path.display()))
}

#[async_trait]
impl LeadRepositoryPort for JsonFileLeadRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Lead>, ApplicationError> {
        self.read_all().await
    }

    #[instrument(skip(self), fields(lead_id = %id))]
    async fn get(&self, id: &LeadId) -> Result<Option<Lead>, ApplicationError> {
        Ok(self.read_all().await?.into_iter().find(|l| l.id == *id))
    }

    #[instrument(skip(self, lead), fields(lead_id = %lead.id))]
    async fn insert(&self, lead: &Lead) -> Result<bool, ApplicationError> {
        let _guard = self.write_lock.lock().await;
        let mut leads = self.read_all().await?;
        if leads.iter().any(|l| l.id == lead.id) {
            return Ok(false);
        }
        leads.push(lead.clone());
        self.write_all(&leads).await?;
        Ok(true)
    }

    #[instrument(skip(self), fields(lead_id = %id))]
    async fn update_status(
        &self,
        id: &LeadId,
        status: LeadStatus,
    ) -> Result<Option<Lead>, ApplicationError> {
        let _guard = self.write_lock.lock().await;
        let mut leads = self.read_all().await?;
        let Some(lead) = leads.iter_mut().find(|l| l.id == *id) else {
            return Ok(None);
        };
        lead.status = status;
        let updated = lead.clone();
        self.write_all(&leads).await?;
        Ok(Some(updated))
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<usize, ApplicationError> {
        let _guard = self.write_lock.lock().await;
        let removed = self.read_all().await?.len();
        self.write_all(&[]).await?;
        Ok(removed)
    }

    async fn is_available(&self) -> bool {
        self.read_all().await.is_ok()
    }
}
