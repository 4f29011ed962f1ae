//! SQLite persistence for sites, tags and interest signups.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

use crate::model::{DirectoryEntry, NewSite};
use crate::signup::InterestSignup;
use crate::tags::{normalize_tag, normalize_tags};
use crate::util::{ensure_directory, non_blank, now_utc_string};

mod db_setup;
mod sites;
#[cfg(test)]
mod tests;

pub const DB_SCHEMA_VERSION: &str = "0.1.0";

pub use db_setup::{open_database, schema_version};
pub use sites::{fetch_entries, insert_site};

/// A site the store refuses to list. Storage failures are reported separately.
#[derive(Debug, Error)]
pub enum SiteRejected {
    #[error("site name must not be blank")]
    BlankName,
    #[error("website for {name} must start with http:// or https://: {website}")]
    InvalidWebsite { name: String, website: String },
    #[error("site already listed: {name}")]
    Duplicate { name: String },
}

#[derive(Debug, Clone, Default)]
pub struct StoreCounts {
    pub sites: i64,
    pub tags: i64,
    pub signups: i64,
}

pub fn insert_signup(connection: &Connection, signup: &InterestSignup) -> Result<i64> {
    connection
        .execute(
            "INSERT INTO interest_signups(name, email, organization, message, created_at)
             VALUES(?1, ?2, ?3, ?4, ?5)",
            params![
                signup.name,
                signup.email,
                signup.organization,
                signup.message,
                now_utc_string()
            ],
        )
        .context("failed to insert interest signup")?;
    Ok(connection.last_insert_rowid())
}

pub fn table_counts(connection: &Connection) -> Result<StoreCounts> {
    Ok(StoreCounts {
        sites: query_count(connection, "SELECT COUNT(*) FROM sites")?,
        tags: query_count(connection, "SELECT COUNT(*) FROM tags")?,
        signups: query_count(connection, "SELECT COUNT(*) FROM interest_signups")?,
    })
}

fn query_count(connection: &Connection, sql: &str) -> Result<i64> {
    let count = connection
        .query_row(sql, [], |row| row.get(0))
        .with_context(|| format!("failed to run count query: {sql}"))?;
    Ok(count)
}
