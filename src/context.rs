use std::path::PathBuf;

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::info;

use crate::cli::ContextArgs;
use crate::store::open_database;
use crate::vision::VisionConfig;

/// Resolved paths handed to every command.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub data_root: PathBuf,
    pub db_path: PathBuf,
    pub vision_path: PathBuf,
}

impl AppContext {
    pub fn open(args: &ContextArgs) -> Self {
        let db_path = args
            .db_path
            .clone()
            .unwrap_or_else(|| args.data_root.join("directory.sqlite"));

        Self {
            data_root: args.data_root.clone(),
            db_path,
            vision_path: args.vision_path.clone(),
        }
    }

    /// Loads the vision document once, before a vision-dependent command does any work.
    pub fn load_vision(&self) -> Result<VisionConfig> {
        let vision = VisionConfig::load(&self.vision_path).with_context(|| {
            format!("failed to load vision document {}", self.vision_path.display())
        })?;

        info!(
            vision_path = %self.vision_path.display(),
            vision_sha256 = %vision.sha256(),
            "loaded vision document"
        );
        Ok(vision)
    }

    pub fn manifest_dir(&self) -> PathBuf {
        self.data_root.join("manifests")
    }

    pub fn connect(&self) -> Result<Connection> {
        open_database(&self.db_path)
    }
}
