use super::db_setup::ensure_schema;
use super::*;
use crate::vision::{VisionConfig, VisionTargets, assess};

fn memory_connection() -> Connection {
    let connection = Connection::open_in_memory().expect("open in-memory db");
    ensure_schema(&connection).expect("schema");
    connection
}

fn site(name: &str, tags: &[&str]) -> NewSite {
    NewSite {
        name: name.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        ..NewSite::default()
    }
}

#[test]
fn fetch_entries_returns_tags_in_insertion_order() {
    let mut connection = memory_connection();
    insert_site(
        &mut connection,
        &NewSite {
            name: "Riverside Co-op".to_string(),
            description: Some(" Community grocery ".to_string()),
            website: Some("https://riverside.example.org".to_string()),
            tags: vec!["food".to_string(), "cooperative".to_string(), "solar".to_string()],
        },
    )
    .expect("insert riverside");
    insert_site(&mut connection, &site("anchor Housing", &["solar", "housing"]))
        .expect("insert anchor");

    let entries = fetch_entries(&connection, None).expect("fetch");
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].name, "anchor Housing");
    assert_eq!(entries[0].tags, vec!["solar", "housing"]);
    assert_eq!(entries[0].website, None);

    assert_eq!(entries[1].name, "Riverside Co-op");
    assert_eq!(entries[1].description.as_deref(), Some("Community grocery"));
    assert_eq!(entries[1].tags, vec!["food", "cooperative", "solar"]);

    let counts = table_counts(&connection).expect("counts");
    assert_eq!(counts.sites, 2);
    assert_eq!(counts.tags, 4);
}

#[test]
fn tag_filter_restricts_listing() {
    let mut connection = memory_connection();
    insert_site(&mut connection, &site("A", &["solar"])).expect("insert a");
    insert_site(&mut connection, &site("B", &["wind"])).expect("insert b");
    insert_site(&mut connection, &site("C", &[])).expect("insert c");

    let solar = fetch_entries(&connection, Some(" Solar ")).expect("fetch solar");
    assert_eq!(solar.len(), 1);
    assert_eq!(solar[0].name, "A");

    let none = fetch_entries(&connection, Some("geothermal")).expect("fetch none");
    assert!(none.is_empty());

    let all = fetch_entries(&connection, Some("  ")).expect("blank filter");
    assert_eq!(all.len(), 3);
    assert!(all[2].tags.is_empty());
}

#[test]
fn insert_site_rejects_duplicates_and_bad_websites() {
    let mut connection = memory_connection();
    insert_site(&mut connection, &site("A", &["solar"])).expect("insert a");

    let duplicate = insert_site(&mut connection, &site(" A ", &["wind"])).expect_err("duplicate");
    assert!(matches!(
        duplicate.downcast_ref::<SiteRejected>(),
        Some(SiteRejected::Duplicate { name }) if name == "A"
    ));

    let mut bad_website = site("B", &[]);
    bad_website.website = Some("ftp://b.example.org".to_string());
    let err = insert_site(&mut connection, &bad_website).expect_err("bad website");
    assert!(matches!(
        err.downcast_ref::<SiteRejected>(),
        Some(SiteRejected::InvalidWebsite { .. })
    ));

    let err = insert_site(&mut connection, &site("  ", &[])).expect_err("blank name");
    assert!(matches!(
        err.downcast_ref::<SiteRejected>(),
        Some(SiteRejected::BlankName)
    ));

    let counts = table_counts(&connection).expect("counts");
    assert_eq!(counts.sites, 1);
    assert_eq!(counts.tags, 1);
}

#[test]
fn insert_signup_persists_row() {
    let connection = memory_connection();
    let signup = InterestSignup {
        name: "Ada".to_string(),
        email: "ada@example.org".to_string(),
        organization: None,
        message: Some("Count me in".to_string()),
    };

    let id = insert_signup(&connection, &signup).expect("insert signup");
    assert!(id > 0);

    let stored: (String, Option<String>) = connection
        .query_row(
            "SELECT email, organization FROM interest_signups WHERE id = ?1",
            [id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .expect("read signup");
    assert_eq!(stored, ("ada@example.org".to_string(), None));
    assert_eq!(table_counts(&connection).expect("counts").signups, 1);
}

#[test]
fn open_database_creates_file_and_records_schema_version() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("nested").join("directory.sqlite");

    let connection = open_database(&db_path).expect("open database");
    assert!(db_path.exists());
    assert_eq!(
        schema_version(&connection).expect("schema version").as_deref(),
        Some(DB_SCHEMA_VERSION)
    );
    drop(connection);

    let reopened = open_database(&db_path).expect("reopen database");
    assert_eq!(table_counts(&reopened).expect("counts").sites, 0);
}

#[test]
fn stored_entries_feed_the_assessment() {
    let mut connection = memory_connection();
    insert_site(&mut connection, &site("A", &["Solar", "cooperative"])).expect("insert a");
    insert_site(&mut connection, &site("B", &["solar", "cooperative"])).expect("insert b");

    let targets = VisionTargets {
        minimum_sites: 2,
        minimum_tag_density: 1.5,
        recommended_tags: vec!["solar".to_string(), "cooperative".to_string()],
        storytelling_focus: vec!["community".to_string()],
    };
    let entries = fetch_entries(&connection, None).expect("fetch");
    let assessment = assess(&entries, &targets);

    assert_eq!(assessment.metrics.total_tags, 4);
    assert_eq!(assessment.metrics.coverage_ratio, 1.0);
    assert_eq!(assessment.progress_score, 100.0);
}

#[test]
fn insert_site_reports_storage_failures_as_unrejected() {
    let mut connection = memory_connection();
    connection
        .execute_batch(
            "CREATE TRIGGER refuse_tags BEFORE INSERT ON site_tags
             BEGIN SELECT RAISE(ABORT, 'database is full'); END;",
        )
        .expect("create trigger");

    let err = insert_site(&mut connection, &site("A", &["solar"])).expect_err("storage failure");
    assert!(err.downcast_ref::<SiteRejected>().is_none());
    assert_eq!(table_counts(&connection).expect("counts").sites, 0);
}

#[test]
fn mixed_case_tags_match_recommended_tags_after_round_trip() {
    let mut connection = memory_connection();
    insert_site(&mut connection, &site("Hillcrest", &["Land-Trust", "Solar"])).expect("insert");

    let vision = VisionConfig::parse(
        r#"{
          "mission": "m",
          "directory_targets": {
            "minimum_sites": 1,
            "minimum_tag_density": 0,
            "recommended_tags": [" Solar", "Land-Trust"],
            "storytelling_focus": []
          }
        }"#,
    )
    .expect("parse vision");
    let entries = fetch_entries(&connection, None).expect("fetch");
    let assessment = assess(&entries, vision.targets());

    assert_eq!(entries[0].tags, vec!["land-trust", "solar"]);
    assert_eq!(
        assessment.metrics.present_recommended_tags,
        vec!["solar", "land-trust"]
    );
    assert!(assessment.metrics.missing_recommended_tags.is_empty());
    assert_eq!(assessment.metrics.coverage_ratio, 1.0);
    assert_eq!(assessment.progress_score, 100.0);
    assert!(assessment.opportunities.is_empty());
}
