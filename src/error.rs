use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecommenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown tag '{tag}'{}", suggestion_hint(.suggestion))]
    UnknownTag {
        tag: String,
        suggestion: Option<String>,
    },

    #[error("Catalog is empty: {0}")]
    EmptyCatalog(String),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{}'?)", s))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, RecommenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tag_message_with_suggestion() {
        let err = RecommenderError::UnknownTag {
            tag: "swet".to_string(),
            suggestion: Some("sweet".to_string()),
        };
        assert_eq!(err.to_string(), "Unknown tag 'swet' (did you mean 'sweet'?)");
    }

    #[test]
    fn test_unknown_tag_message_without_suggestion() {
        let err = RecommenderError::UnknownTag {
            tag: "xyz".to_string(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "Unknown tag 'xyz'");
    }
}
