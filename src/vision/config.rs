use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::tags::normalize_tag;
use crate::util::sha256_bytes;

#[derive(Debug, Error)]
pub enum VisionConfigError {
    #[error("failed to read vision document {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("vision document is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("vision document field `{field}` is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pillar {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Thresholds the directory is scored against.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VisionTargets {
    pub minimum_sites: u64,
    /// Zero means there is no density goal.
    pub minimum_tag_density: f64,
    pub recommended_tags: Vec<String>,
    pub storytelling_focus: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct VisionDocument {
    mission: String,
    #[serde(default)]
    pillars: Vec<Pillar>,
    directory_targets: VisionTargets,
}

/// Parsed vision document. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct VisionConfig {
    pub mission: String,
    pub pillars: Vec<Pillar>,
    directory_targets: VisionTargets,
    raw: serde_json::Value,
    sha256: String,
}

impl VisionConfig {
    pub fn load(path: &Path) -> Result<Self, VisionConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| VisionConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, VisionConfigError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let mut document = VisionDocument::deserialize(&value)?;

        let density = document.directory_targets.minimum_tag_density;
        if !density.is_finite() || density < 0.0 {
            return Err(VisionConfigError::Invalid {
                field: "directory_targets.minimum_tag_density",
                reason: format!("expected a non-negative number, got {density}"),
            });
        }

        // Matched against stored tags, which are kept in normalized form.
        let mut recommended_tags = Vec::with_capacity(document.directory_targets.recommended_tags.len());
        for tag in &document.directory_targets.recommended_tags {
            let normalized = normalize_tag(tag);
            if normalized.is_empty() {
                return Err(VisionConfigError::Invalid {
                    field: "directory_targets.recommended_tags",
                    reason: "tags must not be blank".to_string(),
                });
            }
            recommended_tags.push(normalized);
        }
        document.directory_targets.recommended_tags = recommended_tags;

        Ok(Self {
            mission: document.mission,
            pillars: document.pillars,
            directory_targets: document.directory_targets,
            raw: value,
            sha256: sha256_bytes(raw.as_bytes()),
        })
    }

    pub fn targets(&self) -> &VisionTargets {
        &self.directory_targets
    }

    /// The document as it was written, for pass-through output.
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    pub fn sha256(&self) -> &str {
        &self.sha256
    }
}
