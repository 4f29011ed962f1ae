//! Tag normalization shared by the store and the vision document.

/// Trimmed, lowercased form a tag is stored and matched under.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Normalizes tags, dropping blanks and repeats. First occurrence wins.
pub fn normalize_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = normalize_tag(tag.as_ref());
        if tag.is_empty() || normalized.contains(&tag) {
            continue;
        }
        normalized.push(tag);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_tags_trims_lowercases_and_deduplicates() {
        let tags = normalize_tags(&[" Solar", "cooperative", "", "SOLAR", "  ", "Housing "]);
        assert_eq!(tags, vec!["solar", "cooperative", "housing"]);
    }

    #[test]
    fn normalize_tag_keeps_inner_punctuation() {
        assert_eq!(normalize_tag("  Land-Trust "), "land-trust");
        assert_eq!(normalize_tag("   "), "");
    }
}
