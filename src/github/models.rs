// src/github/models.rs
// =============================================================================
// This module defines the data shapes the rest of the app consumes.
//
// Two kinds of types live here:
// - Domain types (Repository, Commit, Languages): stable shapes our CLI
//   renders, decoupled from whatever GitHub's JSON looks like
// - Wire types (CommitEntry and friends): the exact nested layout GitHub
//   sends, which we immediately flatten into the domain types
//
// The repository listing is lucky: GitHub's field names (html_url,
// created_at, updated_at) map straight onto our struct fields, so serde
// derive needs no renames. Commits are not so lucky - the message and date
// are buried two levels deep - so they get dedicated wire structs.
//
// Rust concepts:
// - serde derive: Automatic JSON (de)serialization from struct definitions
// - Enums with data: Languages carries its string only when one exists
// - From impl: Converting wire shapes to domain shapes in one place
// =============================================================================

use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

// One repository owned by the user we queried
//
// Decoded directly from one element of GitHub's /users/{user}/repos
// response. Timestamps stay as the ISO-8601 strings GitHub sent - we
// display them, we never do date math on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Stable numeric id assigned by GitHub
    pub id: u64,
    /// Repository name (without the owner prefix)
    pub name: String,
    /// Optional free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Canonical web URL of the repository
    pub html_url: String,
    /// Creation timestamp, ISO-8601, as supplied by GitHub
    pub created_at: String,
    /// Last-update timestamp, same format
    pub updated_at: String,
    /// Language summary - never present in the listing payload itself,
    /// filled in by a separate lookup after decoding
    #[serde(default, skip_deserializing)]
    pub languages: Languages,
}

// The language summary for one repository
//
// This is deliberately a tri-state rather than a plain String:
// an empty string could mean "we never asked" or "we asked and the repo
// genuinely has no detected languages", and those are different facts.
// All three states render as a plain string (empty for the first two),
// so a Repository is displayable no matter which state it is in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Languages {
    /// No lookup has completed for this repository (also the state left
    /// behind when a best-effort lookup fails)
    #[default]
    NotFetched,
    /// The lookup completed and GitHub reported zero languages
    None,
    /// The lookup completed with at least one language; the string joins
    /// the language names with ", " in whatever order the map decoded in
    Detected(String),
}

impl Languages {
    /// Builds the summary from GitHub's language-to-byte-count map
    ///
    /// The byte counts are dropped - we only keep the names. Map iteration
    /// order is unspecified, so the joined order is too.
    pub fn from_map(map: &HashMap<String, u64>) -> Self {
        if map.is_empty() {
            Languages::None
        } else {
            let joined = map.keys().cloned().collect::<Vec<_>>().join(", ");
            Languages::Detected(joined)
        }
    }

    /// The display string: language names, or "" when there are none
    pub fn as_str(&self) -> &str {
        match self {
            Languages::Detected(joined) => joined,
            _ => "",
        }
    }

    /// True once a lookup has completed for this repository
    pub fn is_fetched(&self) -> bool {
        !matches!(self, Languages::NotFetched)
    }
}

impl fmt::Display for Languages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialize as a plain string so JSON output stays flat:
// {"languages": "Rust, Shell"} rather than a tagged enum
impl Serialize for Languages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// One commit in a repository's history
//
// The sha is the only stable identity - it is content-addressed and
// survives re-fetches, which nothing else about a decoded commit does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    /// Content-addressed commit hash, unique within the repository
    pub sha: String,
    /// Commit message
    pub message: String,
    /// Author date, ISO-8601, as supplied by GitHub
    pub date: String,
}

// --- Wire shapes for /repos/{user}/{repo}/commits ---------------------------
// GitHub nests the interesting fields:
//   {"sha": "...", "commit": {"author": {"date": "..."}, "message": "..."}}
// serde ignores the fields we don't declare (author name, email, etc.)

#[derive(Debug, Deserialize)]
pub struct CommitEntry {
    pub sha: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
pub struct CommitDetail {
    pub message: String,
    pub author: CommitAuthor,
}

#[derive(Debug, Deserialize)]
pub struct CommitAuthor {
    pub date: String,
}

impl From<CommitEntry> for Commit {
    fn from(entry: CommitEntry) -> Self {
        Commit {
            sha: entry.sha,
            message: entry.commit.message,
            date: entry.commit.author.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_decodes_without_languages() {
        let json = r#"{
            "id": 7,
            "name": "demo",
            "description": null,
            "html_url": "https://github.com/octocat/demo",
            "created_at": "2023-05-01T10:00:00Z",
            "updated_at": "2024-02-01T12:30:00Z"
        }"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.id, 7);
        assert_eq!(repo.name, "demo");
        assert_eq!(repo.description, None);
        assert_eq!(repo.languages, Languages::NotFetched);
        assert!(!repo.languages.is_fetched());
    }

    #[test]
    fn test_repository_serializes_languages_as_string() {
        let repo = Repository {
            id: 1,
            name: "demo".to_string(),
            description: Some("a demo".to_string()),
            html_url: "https://github.com/octocat/demo".to_string(),
            created_at: "2023-05-01T10:00:00Z".to_string(),
            updated_at: "2024-02-01T12:30:00Z".to_string(),
            languages: Languages::Detected("Rust, Shell".to_string()),
        };
        let json = serde_json::to_value(&repo).unwrap();
        assert_eq!(json["languages"], "Rust, Shell");
    }

    #[test]
    fn test_languages_from_empty_map() {
        let map = HashMap::new();
        let languages = Languages::from_map(&map);
        assert_eq!(languages, Languages::None);
        assert_eq!(languages.as_str(), "");
        assert!(languages.is_fetched());
    }

    #[test]
    fn test_languages_from_map_joins_keys() {
        let mut map = HashMap::new();
        map.insert("Go".to_string(), 120u64);
        map.insert("Swift".to_string(), 80u64);
        let languages = Languages::from_map(&map);

        // Iteration order is unspecified, so accept either join order
        let joined = languages.as_str();
        assert!(joined == "Go, Swift" || joined == "Swift, Go");
        // Byte counts must not leak into the string
        assert!(!joined.contains("120"));
        assert!(!joined.contains("80"));
    }

    #[test]
    fn test_commit_entry_flattens_into_commit() {
        let json = r#"[{
            "sha": "abc123",
            "commit": {
                "author": {"date": "2024-01-01T00:00:00Z"},
                "message": "init"
            }
        }]"#;
        let entries: Vec<CommitEntry> = serde_json::from_str(json).unwrap();
        let commits: Vec<Commit> = entries.into_iter().map(Commit::from).collect();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].sha, "abc123");
        assert_eq!(commits[0].message, "init");
        assert_eq!(commits[0].date, "2024-01-01T00:00:00Z");
    }
}
