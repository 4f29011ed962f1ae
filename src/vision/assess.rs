use std::collections::HashMap;

use serde::Serialize;

use super::config::VisionTargets;
use super::text::{OpportunitySet, format_list};
use crate::model::DirectoryEntry;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentMetrics {
    pub site_count: usize,
    pub minimum_sites: u64,
    pub meets_minimum_sites: bool,
    pub total_tags: usize,
    pub average_tags_per_site: f64,
    pub minimum_tag_density: f64,
    pub meets_minimum_tag_density: bool,
    pub recommended_tags: Vec<String>,
    pub present_recommended_tags: Vec<String>,
    pub missing_recommended_tags: Vec<String>,
    pub coverage_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub metrics: AssessmentMetrics,
    pub storytelling_focus: Vec<String>,
    pub opportunities: Vec<String>,
    /// 0-100, one decimal.
    pub progress_score: f64,
}

/// Scores the directory against the vision targets.
///
/// Total over its input domain: an empty directory, a zero site goal, a zero
/// density goal and an empty recommended tag list all produce a result.
pub fn assess(entries: &[DirectoryEntry], targets: &VisionTargets) -> Assessment {
    let site_count = entries.len();

    let mut tag_frequency: HashMap<&str, usize> = HashMap::new();
    let mut total_tags = 0_usize;
    for entry in entries {
        for tag in &entry.tags {
            *tag_frequency.entry(tag.as_str()).or_insert(0) += 1;
            total_tags += 1;
        }
    }

    let average_tags_per_site = if site_count > 0 {
        total_tags as f64 / site_count as f64
    } else {
        0.0
    };

    let (present_recommended_tags, missing_recommended_tags): (Vec<String>, Vec<String>) = targets
        .recommended_tags
        .iter()
        .cloned()
        .partition(|tag| tag_frequency.contains_key(tag.as_str()));

    let coverage_ratio = if targets.recommended_tags.is_empty() {
        1.0
    } else {
        present_recommended_tags.len() as f64 / targets.recommended_tags.len() as f64
    };

    let meets_minimum_sites = site_count as u64 >= targets.minimum_sites;
    let meets_minimum_tag_density = if targets.minimum_tag_density <= 0.0 {
        true
    } else {
        average_tags_per_site >= targets.minimum_tag_density
    };

    let metrics = AssessmentMetrics {
        site_count,
        minimum_sites: targets.minimum_sites,
        meets_minimum_sites,
        total_tags,
        average_tags_per_site,
        minimum_tag_density: targets.minimum_tag_density,
        meets_minimum_tag_density,
        recommended_tags: targets.recommended_tags.clone(),
        present_recommended_tags,
        missing_recommended_tags,
        coverage_ratio,
    };

    let opportunities = collect_opportunities(&metrics, &targets.storytelling_focus);
    let progress_score = progress_score(&metrics);

    Assessment {
        metrics,
        storytelling_focus: targets.storytelling_focus.clone(),
        opportunities,
        progress_score,
    }
}

fn collect_opportunities(metrics: &AssessmentMetrics, storytelling_focus: &[String]) -> Vec<String> {
    let mut opportunities = OpportunitySet::new();

    if !metrics.meets_minimum_sites {
        let gap = metrics.minimum_sites - metrics.site_count as u64;
        let noun = if gap == 1 { "site" } else { "sites" };
        opportunities.insert(format!(
            "Add {gap} more {noun} to reach the goal of {} listed organizations.",
            metrics.minimum_sites
        ));
    }

    if !metrics.meets_minimum_tag_density {
        opportunities.insert(format!(
            "Deepen listings with more tags: sites average {:.1} tags against a target of {:.1}.",
            metrics.average_tags_per_site, metrics.minimum_tag_density
        ));
    }

    if !metrics.missing_recommended_tags.is_empty() {
        opportunities.insert(format!(
            "Recruit organizations tagged {} to round out the directory.",
            format_list(&metrics.missing_recommended_tags)
        ));
    }

    // Storytelling is always an open thread, independent of the metrics.
    if !storytelling_focus.is_empty() {
        opportunities.insert(format!(
            "Share stories that highlight {}.",
            format_list(storytelling_focus)
        ));
    }

    opportunities.into_vec()
}

/// Mean of the volume, depth and coverage factors, each capped at 1.
fn progress_score(metrics: &AssessmentMetrics) -> f64 {
    let volume = if metrics.minimum_sites == 0 {
        1.0
    } else {
        metrics.site_count as f64 / metrics.minimum_sites as f64
    };
    let depth = if metrics.minimum_tag_density <= 0.0 {
        1.0
    } else {
        metrics.average_tags_per_site / metrics.minimum_tag_density
    };

    let factors = [volume, depth, metrics.coverage_ratio];
    let mean = factors
        .iter()
        .map(|factor| factor.clamp(0.0, 1.0))
        .sum::<f64>()
        / factors.len() as f64;

    round_one_decimal(mean * 100.0)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
