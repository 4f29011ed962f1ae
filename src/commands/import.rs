use std::fs;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};

use crate::cli::ImportArgs;
use crate::context::AppContext;
use crate::model::{ImportCounts, ImportRunManifest, NewSite};
use crate::store::{SiteRejected, insert_site};
use crate::util::{now_utc_string, sha256_bytes, utc_compact_string, write_json_pretty};

pub fn run(context: &AppContext, args: ImportArgs) -> Result<()> {
    let started_ts = Utc::now();
    let started_at = now_utc_string();
    let run_id = format!("import-{}", utc_compact_string(started_ts));

    info!(path = %args.path.display(), run_id = %run_id, "starting import");

    let raw = fs::read(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let sites: Vec<NewSite> = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse {}", args.path.display()))?;
    let source_sha256 = sha256_bytes(&raw);

    let mut connection = context.connect()?;
    let mut counts = ImportCounts {
        sites_in_file: sites.len(),
        ..ImportCounts::default()
    };
    let mut warnings = Vec::new();

    for site in &sites {
        match insert_site(&mut connection, site) {
            Ok(site_id) => {
                counts.sites_inserted += 1;
                info!(site_id, name = %site.name.trim(), "imported site");
            }
            Err(err) => {
                // Only rejected rows are skipped; storage failures abort the import.
                if err.downcast_ref::<SiteRejected>().is_none() {
                    return Err(err.context(format!("failed to import site {}", site.name)));
                }
                counts.sites_skipped += 1;
                warn!(name = %site.name, reason = %err, "skipped site");
                warnings.push(format!("{}: {err}", site.name));
            }
        }
    }

    let manifest_path = args.manifest_path.clone().unwrap_or_else(|| {
        context
            .manifest_dir()
            .join(format!("import_run_{}.json", utc_compact_string(started_ts)))
    });

    let manifest = ImportRunManifest {
        manifest_version: 1,
        run_id,
        started_at,
        completed_at: now_utc_string(),
        source_path: args.path.display().to_string(),
        source_sha256,
        db_path: context.db_path.display().to_string(),
        counts,
        warnings,
    };
    write_json_pretty(&manifest_path, &manifest)?;

    info!(path = %manifest_path.display(), "wrote import manifest");
    info!(
        inserted = manifest.counts.sites_inserted,
        skipped = manifest.counts.sites_skipped,
        "import completed"
    );
    Ok(())
}
