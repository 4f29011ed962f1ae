use anyhow::Result;
use tracing::{info, warn};

use crate::cli::StatusArgs;
use crate::context::AppContext;
use crate::store::{schema_version, table_counts};
use crate::vision::{VisionConfig, VisionTargets};

pub fn run(context: &AppContext, vision: &VisionConfig, _args: StatusArgs) -> Result<()> {
    info!(
        vision_sha256 = %vision.sha256(),
        pillars = vision.pillars.len(),
        "vision document status"
    );
    log_targets(vision.targets());

    if !context.db_path.exists() {
        warn!(path = %context.db_path.display(), "database file missing");
        return Ok(());
    }

    let connection = context.connect()?;
    let version = schema_version(&connection)?.unwrap_or_default();
    let counts = table_counts(&connection)?;

    info!(
        path = %context.db_path.display(),
        db_schema_version = %version,
        sites = counts.sites,
        tags = counts.tags,
        signups = counts.signups,
        "database status"
    );
    Ok(())
}

fn log_targets(targets: &VisionTargets) {
    info!(
        minimum_sites = targets.minimum_sites,
        minimum_tag_density = targets.minimum_tag_density,
        recommended_tags = %targets.recommended_tags.join(","),
        storytelling_focus = targets.storytelling_focus.len(),
        "directory targets"
    );
}
