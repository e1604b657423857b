// src/github/commits.rs
// =============================================================================
// This module lists the commit history of a single repository.
//
// GitHub returns commits most-recent-first; we keep that order and do not
// re-sort locally. The nested wire shape (sha at the top, message and
// date buried under "commit") is flattened into our Commit type right
// after decoding.
//
// A 404 here is an expected, distinguishable outcome - "no such
// repository for that user" - which the error type reports as NotFound
// rather than a generic status failure.
// =============================================================================

use super::client::ApiClient;
use super::error::FetchError;
use super::models::{Commit, CommitEntry};

// Lists the commits of one repository, most recent first
//
// Parameters:
//   client: the API client to fetch through
//   username: the repository owner's login
//   repo: the repository name
//
// Returns: the commits in GitHub's order, freshly decoded - a new fetch
// fully replaces any list the caller held before.
pub async fn list_commits(
    client: &ApiClient,
    username: &str,
    repo: &str,
) -> Result<Vec<Commit>, FetchError> {
    let path = format!("/repos/{}/{}/commits", username, repo);

    let entries: Vec<CommitEntry> = client.fetch_json(&path).await?;

    Ok(entries.into_iter().map(Commit::from).collect())
}
