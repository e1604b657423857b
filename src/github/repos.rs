// src/github/repos.rs
// =============================================================================
// This module lists a user's repositories and enriches each one with its
// language summary.
//
// How it works:
// 1. Fetch /users/{username}/repos and decode the list (order preserved)
// 2. Fan out one language lookup per repository, all running concurrently
// 3. Join on ALL of them (join_all) - the listing is never delivered
//    before every lookup has settled, successful or not
// 4. Merge the results back by repository id, then hand the list over
//
// Failure policy:
// - If the listing fetch itself fails, the whole operation fails and no
//   language lookups are attempted
// - If an individual language lookup fails, that repository keeps
//   Languages::NotFetched and the listing still succeeds (best-effort)
//
// Rust concepts:
// - futures::future::join_all: Runs many futures concurrently and waits
//   for every one of them - the fan-in barrier
// - HashMap keyed by id: Merging async results without caring what order
//   they finished in
// =============================================================================

use futures::future;
use std::collections::HashMap;

use super::client::ApiClient;
use super::error::FetchError;
use super::languages::fetch_languages;
use super::models::{Languages, Repository};

// Lists a user's repositories with language summaries filled in
//
// Parameters:
//   client: the API client to fetch through
//   username: the GitHub login to list repositories for
//
// Returns: the repositories in the order GitHub returned them, each with
// its languages populated (or left NotFetched if that lookup failed), or
// the error from the listing fetch.
//
// The username is used verbatim as a URL path segment - no local
// validation. A bad username surfaces as whatever GitHub answers,
// typically NotFound.
pub async fn list_repositories(
    client: &ApiClient,
    username: &str,
) -> Result<Vec<Repository>, FetchError> {
    let path = format!("/users/{}/repos", username);

    // Step 1: the listing itself. A failure here aborts everything -
    // no partial list, no language lookups.
    let mut repos: Vec<Repository> = client.fetch_json(&path).await?;

    // Step 2: fan out one lookup per repository. Each future resolves to
    // (id, outcome) so the merge below can't depend on completion order.
    let lookups = repos.iter().map(|repo| {
        let id = repo.id;
        let name = repo.name.clone();
        async move { (id, fetch_languages(client, username, &name).await) }
    });

    // Step 3: the fan-in barrier. join_all waits for every lookup to
    // settle and resolves immediately when there are zero repositories.
    let outcomes = future::join_all(lookups).await;

    // Step 4: accumulate by id, then project back onto the ordered list.
    // Never mutate by position - lookups finish in arbitrary order.
    let mut by_id: HashMap<u64, Languages> = HashMap::new();
    for (id, outcome) in outcomes {
        match outcome {
            Ok(languages) => {
                by_id.insert(id, languages);
            }
            Err(e) => {
                // Best-effort: the repository stays NotFetched
                eprintln!("  Warning: language lookup failed for repo id {}: {}", id, e);
            }
        }
    }

    for repo in &mut repos {
        if let Some(languages) = by_id.remove(&repo.id) {
            repo.languages = languages;
        }
    }

    Ok(repos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn repo_listing_body() -> &'static str {
        r#"[
            {
                "id": 1,
                "name": "alpha",
                "description": "first",
                "html_url": "https://github.com/octocat/alpha",
                "created_at": "2023-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            },
            {
                "id": 2,
                "name": "beta",
                "description": null,
                "html_url": "https://github.com/octocat/beta",
                "created_at": "2023-02-01T00:00:00Z",
                "updated_at": "2024-02-01T00:00:00Z"
            }
        ]"#
    }

    #[tokio::test]
    async fn test_list_preserves_order_and_fills_languages() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users/octocat/repos")
            .with_status(200)
            .with_body(repo_listing_body())
            .create_async()
            .await;
        let alpha_mock = server
            .mock("GET", "/repos/octocat/alpha/languages")
            .with_status(200)
            .with_body(r#"{"Rust": 100}"#)
            .create_async()
            .await;
        let beta_mock = server
            .mock("GET", "/repos/octocat/beta/languages")
            .with_status(200)
            .with_body(r#"{"Python": 50}"#)
            .create_async()
            .await;

        let client = ApiClient::with_base_url(&server.url()).unwrap();
        let repos = list_repositories(&client, "octocat").await.unwrap();

        // Upstream order is preserved
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "alpha");
        assert_eq!(repos[1].name, "beta");

        // Every lookup settled before delivery
        assert_eq!(repos[0].languages, Languages::Detected("Rust".to_string()));
        assert_eq!(repos[1].languages, Languages::Detected("Python".to_string()));
        alpha_mock.assert_async().await;
        beta_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_listing_failure_skips_language_lookups() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users/octocat/repos")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        // No /repos/... request may ever be made
        let language_mock = server
            .mock("GET", Matcher::Regex(r"^/repos/.*/languages$".to_string()))
            .expect(0)
            .create_async()
            .await;

        let client = ApiClient::with_base_url(&server.url()).unwrap();
        let result = list_repositories(&client, "octocat").await;

        assert!(matches!(
            result,
            Err(FetchError::Status { status: 500, .. })
        ));
        language_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users/nobody/repos")
            .with_status(404)
            .create_async()
            .await;

        let client = ApiClient::with_base_url(&server.url()).unwrap();
        let result = list_repositories(&client, "nobody").await;

        assert!(matches!(result, Err(FetchError::NotFound)));
    }

    #[tokio::test]
    async fn test_failed_lookup_leaves_repo_unfetched() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users/octocat/repos")
            .with_status(200)
            .with_body(repo_listing_body())
            .create_async()
            .await;
        server
            .mock("GET", "/repos/octocat/alpha/languages")
            .with_status(200)
            .with_body(r#"{"Rust": 100}"#)
            .create_async()
            .await;
        // beta's lookup fails
        server
            .mock("GET", "/repos/octocat/beta/languages")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = ApiClient::with_base_url(&server.url()).unwrap();
        let repos = list_repositories(&client, "octocat").await.unwrap();

        // All repositories are still delivered; only beta stays unfetched
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].languages, Languages::Detected("Rust".to_string()));
        assert_eq!(repos[1].languages, Languages::NotFetched);
    }

    #[tokio::test]
    async fn test_empty_listing_makes_zero_lookups() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users/octocat/repos")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;
        let language_mock = server
            .mock("GET", Matcher::Regex(r"^/repos/.*/languages$".to_string()))
            .expect(0)
            .create_async()
            .await;

        let client = ApiClient::with_base_url(&server.url()).unwrap();
        let repos = list_repositories(&client, "octocat").await.unwrap();

        // The barrier over zero items resolves immediately
        assert!(repos.is_empty());
        language_mock.assert_async().await;
    }
}
