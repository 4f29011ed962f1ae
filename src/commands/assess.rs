use std::io::{self, Write};

use anyhow::Result;
use tracing::info;

use crate::cli::AssessArgs;
use crate::context::AppContext;
use crate::model::{AssessmentReport, DirectoryEntry};
use crate::store::fetch_entries;
use crate::util::{now_utc_string, write_json_pretty, write_json_stdout};
use crate::vision::{Assessment, VisionConfig, assess};

pub fn run(context: &AppContext, vision: &VisionConfig, args: AssessArgs) -> Result<()> {
    let connection = context.connect()?;
    let entries = fetch_entries(&connection, None)?;
    let report = build_report(vision, &entries);

    info!(
        site_count = report.assessment.metrics.site_count,
        coverage_ratio = report.assessment.metrics.coverage_ratio,
        progress_score = report.assessment.progress_score,
        opportunities = report.assessment.opportunities.len(),
        "assessment computed"
    );

    if let Some(path) = &args.output {
        write_json_pretty(path, &report)?;
        info!(path = %path.display(), "wrote assessment report");
    }

    if args.json {
        return write_json_stdout(&report);
    }

    write_text_summary(&vision.mission, &report.assessment)
}

/// The assessment alongside the vision document it was scored against.
pub fn build_report<'a>(vision: &'a VisionConfig, entries: &[DirectoryEntry]) -> AssessmentReport<'a> {
    AssessmentReport {
        generated_at: now_utc_string(),
        vision: vision.raw(),
        vision_sha256: vision.sha256(),
        assessment: assess(entries, vision.targets()),
    }
}

fn write_text_summary(mission: &str, assessment: &Assessment) -> Result<()> {
    let metrics = &assessment.metrics;
    let mut output = io::BufWriter::new(io::stdout().lock());

    writeln!(output, "Mission: {mission}")?;
    writeln!(output, "Progress: {:.1}%", assessment.progress_score)?;
    writeln!(
        output,
        "Sites: {} of {} ({})",
        metrics.site_count,
        metrics.minimum_sites,
        goal_label(metrics.meets_minimum_sites)
    )?;
    writeln!(
        output,
        "Tags per site: {:.1} against {:.1} ({})",
        metrics.average_tags_per_site,
        metrics.minimum_tag_density,
        goal_label(metrics.meets_minimum_tag_density)
    )?;
    writeln!(
        output,
        "Recommended tags: {}/{} covered ({:.0}%)",
        metrics.present_recommended_tags.len(),
        metrics.recommended_tags.len(),
        metrics.coverage_ratio * 100.0
    )?;
    if !metrics.missing_recommended_tags.is_empty() {
        writeln!(
            output,
            "\tmissing: {}",
            metrics.missing_recommended_tags.join(", ")
        )?;
    }

    writeln!(output, "Next steps: {}", assessment.opportunities.len())?;
    for (index, opportunity) in assessment.opportunities.iter().enumerate() {
        writeln!(output, "{}.\t{opportunity}", index + 1)?;
    }

    output.flush()?;
    Ok(())
}

fn goal_label(met: bool) -> &'static str {
    if met { "met" } else { "open" }
}
