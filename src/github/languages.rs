// src/github/languages.rs
// =============================================================================
// This module fetches the language breakdown for a single repository.
//
// GitHub's /repos/{user}/{repo}/languages endpoint returns a map from
// language name to byte count, e.g. {"Rust": 120543, "Shell": 1022}.
// We only want the names for display, so the byte counts are dropped and
// the keys are joined into one ", "-separated string.
//
// This lookup is best-effort from the repository lister's point of view:
// if it fails for one repository, that repository just keeps its
// NotFetched state and the listing still succeeds.
// =============================================================================

use std::collections::HashMap;

use super::client::ApiClient;
use super::error::FetchError;
use super::models::Languages;

// Fetches and summarizes the languages used in one repository
//
// Parameters:
//   client: the API client to fetch through
//   username: the repository owner's login
//   repo: the repository name
//
// Returns: Languages::None for a repo with no detected languages,
// Languages::Detected otherwise, or the fetch error.
pub async fn fetch_languages(
    client: &ApiClient,
    username: &str,
    repo: &str,
) -> Result<Languages, FetchError> {
    let path = format!("/repos/{}/{}/languages", username, repo);

    // The transient wire shape: language name -> bytes written in it
    let map: HashMap<String, u64> = client.fetch_json(&path).await?;

    Ok(Languages::from_map(&map))
}
