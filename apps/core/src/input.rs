//! JSON input loading for the command-line front end.
//!
//! Comment threads are either an array of strings or an array of objects
//! carrying a `body` field (the shape the hosting API returns); review lists
//! are arrays of [`Review`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::review::Review;

/// Path that designates standard input
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CommentEntry {
    Text(String),
    Object {
        #[serde(default)]
        body: Option<String>,
    },
}

/// Parse a comment thread; entries without a body are skipped
pub fn parse_comments(json: &str) -> Result<Vec<String>> {
    let entries: Vec<CommentEntry> = serde_json::from_str(json)?;
    let comments = entries
        .into_iter()
        .filter_map(|entry| match entry {
            CommentEntry::Text(text) => Some(text),
            CommentEntry::Object { body } => body,
        })
        .collect();
    Ok(comments)
}

/// Parse a review list
pub fn parse_reviews(json: &str) -> Result<Vec<Review>> {
    Ok(serde_json::from_str(json)?)
}

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Load a comment thread from a file, or stdin for `-`
pub fn load_comments(path: &Path) -> Result<Vec<String>> {
    let comments = parse_comments(&read_source(path)?)?;
    debug!(path = %path.display(), comments = comments.len(), "Loaded comment thread");
    Ok(comments)
}

/// Load a review list from a file, or stdin for `-`
pub fn load_reviews(path: &Path) -> Result<Vec<Review>> {
    let reviews = parse_reviews(&read_source(path)?)?;
    debug!(path = %path.display(), reviews = reviews.len(), "Loaded reviews");
    Ok(reviews)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    #[test]
    fn test_parse_plain_strings() {
        let comments = parse_comments(r#"["LGTM", "why?"]"#).unwrap();
        assert_eq!(comments, vec!["LGTM", "why?"]);
    }

    #[test]
    fn test_parse_api_objects() {
        let json = r#"[
            {"id": 1, "body": "Looks good", "state": "APPROVED"},
            {"id": 2, "body": null},
            {"id": 3},
            "plain text"
        ]"#;
        let comments = parse_comments(json).unwrap();
        assert_eq!(comments, vec!["Looks good", "plain text"]);
    }

    #[test]
    fn test_malformed_json_is_validation_error() {
        let err = parse_comments("not json").unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(_)));

        let err = parse_reviews(r#"[{"state": "MAYBE"}]"#).unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_comments(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, AnalysisError::Io(_)));
    }
}
