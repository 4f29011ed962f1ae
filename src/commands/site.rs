use std::io::{self, Write};

use anyhow::Result;
use tracing::info;

use crate::cli::{AddSiteArgs, ListSitesArgs};
use crate::context::AppContext;
use crate::model::{DirectoryEntry, NewSite, SiteListing};
use crate::store::{fetch_entries, insert_site};
use crate::util::{now_utc_string, write_json_stdout};

pub fn add(context: &AppContext, args: AddSiteArgs) -> Result<()> {
    let site = NewSite {
        name: args.name,
        description: args.description,
        website: args.website,
        tags: args.tags,
    };

    let mut connection = context.connect()?;
    let site_id = insert_site(&mut connection, &site)?;

    info!(site_id, name = %site.name.trim(), "site added");
    Ok(())
}

pub fn list(context: &AppContext, args: ListSitesArgs) -> Result<()> {
    let connection = context.connect()?;
    let sites = fetch_entries(&connection, args.tag.as_deref())?;

    info!(site_count = sites.len(), tag = ?args.tag, "listed sites");

    if args.json {
        return write_json_stdout(&SiteListing {
            generated_at: now_utc_string(),
            tag_filter: args.tag,
            site_count: sites.len(),
            sites,
        });
    }

    write_text_listing(&sites)
}

fn write_text_listing(sites: &[DirectoryEntry]) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());

    writeln!(output, "Sites: {}", sites.len())?;
    for site in sites {
        writeln!(output, "{}.\t{}", site.id, site.name)?;
        if let Some(website) = &site.website {
            writeln!(output, "\t{website}")?;
        }
        if let Some(description) = &site.description {
            writeln!(output, "\t{description}")?;
        }
        if !site.tags.is_empty() {
            writeln!(output, "\ttags: {}", site.tags.join(", "))?;
        }
    }

    output.flush()?;
    Ok(())
}
