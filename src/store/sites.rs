use super::*;

pub fn insert_site(connection: &mut Connection, site: &NewSite) -> Result<i64> {
    let name = site.name.trim();
    if name.is_empty() {
        return Err(SiteRejected::BlankName.into());
    }
    let website = non_blank(site.website.as_deref());
    if let Some(website) = website
        .as_deref()
        .filter(|website| !(website.starts_with("http://") || website.starts_with("https://")))
    {
        return Err(SiteRejected::InvalidWebsite {
            name: name.to_string(),
            website: website.to_string(),
        }
        .into());
    }
    let description = non_blank(site.description.as_deref());
    let tags = normalize_tags(&site.tags);

    let tx = connection
        .transaction()
        .context("failed to start site insert transaction")?;

    let existing: Option<i64> = tx
        .query_row("SELECT id FROM sites WHERE name = ?1", [name], |row| row.get(0))
        .optional()?;
    if existing.is_some() {
        return Err(SiteRejected::Duplicate {
            name: name.to_string(),
        }
        .into());
    }

    tx.execute(
        "INSERT INTO sites(name, description, website, created_at) VALUES(?1, ?2, ?3, ?4)",
        params![name, description, website, now_utc_string()],
    )
    .with_context(|| format!("failed to insert site {name}"))?;
    let site_id = tx.last_insert_rowid();

    {
        let mut upsert_tag = tx.prepare(
            "INSERT INTO tags(name) VALUES(?1)
             ON CONFLICT(name) DO UPDATE SET name=excluded.name
             RETURNING id",
        )?;
        let mut link_tag =
            tx.prepare("INSERT INTO site_tags(site_id, tag_id, position) VALUES(?1, ?2, ?3)")?;

        for (position, tag) in tags.iter().enumerate() {
            let tag_id: i64 = upsert_tag.query_row([tag], |row| row.get(0))?;
            link_tag
                .execute(params![site_id, tag_id, position as i64])
                .with_context(|| format!("failed to tag site {name} with {tag}"))?;
        }
    }

    tx.commit().context("failed to commit site insert")?;
    Ok(site_id)
}

/// Sites ordered by name, each with its tags in insertion order.
pub fn fetch_entries(connection: &Connection, tag_filter: Option<&str>) -> Result<Vec<DirectoryEntry>> {
    let tag_filter = tag_filter
        .map(normalize_tag)
        .filter(|tag| !tag.is_empty());

    let mut statement = connection.prepare(
        "
        SELECT s.id, s.name, s.description, s.website
        FROM sites s
        WHERE ?1 IS NULL
           OR EXISTS (
             SELECT 1
             FROM site_tags st
             JOIN tags t ON t.id = st.tag_id
             WHERE st.site_id = s.id AND t.name = ?1
           )
        ORDER BY s.name COLLATE NOCASE, s.id
        ",
    )?;
    let mut entries = statement
        .query_map([tag_filter.as_deref()], |row| {
            Ok(DirectoryEntry {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                website: row.get(3)?,
                tags: Vec::new(),
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to read sites")?;

    let mut tags_by_site = load_tags_by_site(connection)?;
    for entry in &mut entries {
        if let Some(tags) = tags_by_site.remove(&entry.id) {
            entry.tags = tags;
        }
    }

    Ok(entries)
}

fn load_tags_by_site(connection: &Connection) -> Result<HashMap<i64, Vec<String>>> {
    let mut statement = connection.prepare(
        "
        SELECT st.site_id, t.name
        FROM site_tags st
        JOIN tags t ON t.id = st.tag_id
        ORDER BY st.site_id, st.position
        ",
    )?;
    let rows = statement.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?;

    let mut tags_by_site: HashMap<i64, Vec<String>> = HashMap::new();
    for row in rows {
        let (site_id, tag) = row.context("failed to read site tags")?;
        tags_by_site.entry(site_id).or_default().push(tag);
    }
    Ok(tags_by_site)
}
