use anyhow::Result;
use tracing::info;

use crate::cli::InitArgs;
use crate::context::AppContext;
use crate::store::{schema_version, table_counts};

pub fn run(context: &AppContext, _args: InitArgs) -> Result<()> {
    let connection = context.connect()?;
    let version = schema_version(&connection)?.unwrap_or_default();
    let counts = table_counts(&connection)?;

    info!(
        path = %context.db_path.display(),
        db_schema_version = %version,
        sites = counts.sites,
        signups = counts.signups,
        "database ready"
    );
    Ok(())
}
