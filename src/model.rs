use serde::{Deserialize, Serialize};

use crate::vision::Assessment;

/// One listed organization as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryEntry {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSite {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteListing {
    pub generated_at: String,
    pub tag_filter: Option<String>,
    pub site_count: usize,
    pub sites: Vec<DirectoryEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport<'a> {
    pub generated_at: String,
    pub vision: &'a serde_json::Value,
    pub vision_sha256: &'a str,
    pub assessment: Assessment,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportCounts {
    pub sites_in_file: usize,
    pub sites_inserted: usize,
    pub sites_skipped: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportRunManifest {
    pub manifest_version: u32,
    pub run_id: String,
    pub started_at: String,
    pub completed_at: String,
    pub source_path: String,
    pub source_sha256: String,
    pub db_path: String,
    pub counts: ImportCounts,
    pub warnings: Vec<String>,
}
