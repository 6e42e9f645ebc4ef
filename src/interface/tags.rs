use strsim::jaro_winkler;

use crate::error::{RecommenderError, Result};
use crate::models::normalize_tags;

/// Minimum Jaro-Winkler similarity for a tag suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Closest known tag to `input`, if any is similar enough.
pub fn suggest_tag(input: &str, vocabulary: &[String]) -> Option<String> {
    let needle = input.to_lowercase();
    vocabulary
        .iter()
        .map(|tag| (tag, jaro_winkler(&tag.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(tag, _)| tag.clone())
}

/// Normalize user-typed tags and check each against the vocabulary.
///
/// Each entry is normalized like catalog tags (`"#Iced Tea"` → `"IcedTea"`),
/// and a comma-separated entry yields every tag in it. Entries that normalize
/// to nothing are dropped. Repeated selections across entries are kept as
/// typed, since each one counts toward the score.
pub fn resolve_tags(raw: &[String], vocabulary: &[String]) -> Result<Vec<String>> {
    let mut resolved = Vec::with_capacity(raw.len());
    for tag in raw.iter().flat_map(|entry| normalize_tags(entry)) {
        if !vocabulary.contains(&tag) {
            return Err(RecommenderError::UnknownTag {
                suggestion: suggest_tag(&tag, vocabulary),
                tag,
            });
        }
        resolved.push(tag);
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vec<String> {
        ["chocolate", "cream", "fruit", "iced", "sweet"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_resolve_strips_hash() {
        let raw = vec!["#sweet".to_string(), " iced ".to_string()];
        assert_eq!(resolve_tags(&raw, &vocabulary()).unwrap(), vec!["sweet", "iced"]);
    }

    #[test]
    fn test_resolve_keeps_repeats() {
        let raw = vec!["sweet".to_string(), "#sweet".to_string()];
        assert_eq!(resolve_tags(&raw, &vocabulary()).unwrap(), vec!["sweet", "sweet"]);
    }

    #[test]
    fn test_resolve_skips_blank() {
        let raw = vec!["#".to_string(), "cream".to_string()];
        assert_eq!(resolve_tags(&raw, &vocabulary()).unwrap(), vec!["cream"]);
    }

    #[test]
    fn test_resolve_splits_comma_entries() {
        let raw = vec!["milk,iced".to_string(), "#sweet, #cream".to_string()];
        let vocab: Vec<String> = ["cream", "iced", "milk", "sweet"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            resolve_tags(&raw, &vocab).unwrap(),
            vec!["milk", "iced", "sweet", "cream"]
        );
    }

    #[test]
    fn test_resolve_rejects_unknown_piece_of_comma_entry() {
        let raw = vec!["sweet,icee".to_string()];
        match resolve_tags(&raw, &vocabulary()) {
            Err(RecommenderError::UnknownTag { tag, .. }) => assert_eq!(tag, "icee"),
            other => panic!("expected unknown tag error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_tag_suggests_closest() {
        let raw = vec!["chocolat".to_string()];
        match resolve_tags(&raw, &vocabulary()) {
            Err(RecommenderError::UnknownTag { tag, suggestion }) => {
                assert_eq!(tag, "chocolat");
                assert_eq!(suggestion.as_deref(), Some("chocolate"));
            }
            other => panic!("expected unknown tag error, got {:?}", other),
        }
    }

    #[test]
    fn test_suggest_tag_none_when_dissimilar() {
        assert_eq!(suggest_tag("xyz", &vocabulary()), None);
    }
}
