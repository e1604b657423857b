// src/github/client.rs
// =============================================================================
// This module is the one HTTP primitive everything else is built on.
//
// All three API operations (list repos, list languages, list commits) are
// the same dance: GET a URL, require a 200, require a non-empty body,
// decode the JSON into the expected shape. Factoring that into one generic
// fetch_json() means status handling and decode handling live in exactly
// one place instead of three.
//
// The base URL is a field, not a constant, so tests can point the client
// at a local mock server instead of api.github.com.
//
// Rust concepts:
// - Generics with trait bounds: fetch_json<T: DeserializeOwned> decodes
//   into whatever shape the caller asks for
// - async/await: Each fetch suspends at the network call, nothing blocks
// =============================================================================

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use super::error::FetchError;

/// GitHub's public API host - no auth token, default page size
const DEFAULT_BASE_URL: &str = "https://api.github.com";

// A reusable handle to the GitHub API
//
// Holds one reqwest Client (connection pooling) and the base URL every
// request path is joined onto. Cheap to pass around by reference.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client pointed at the real GitHub API
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client pointed at an arbitrary base URL (used by tests)
    pub fn with_base_url(base: &str) -> Result<Self, FetchError> {
        let base_url = Url::parse(base)?;

        // GitHub rejects requests without a User-Agent, so always send one.
        // 10 second timeout per request, same as our other HTTP tooling.
        let http = Client::builder()
            .user_agent(concat!("repo-lens/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(ApiClient { http, base_url })
    }

    // Fetches a URL path and decodes the JSON body into T
    //
    // Failure modes, in the order they are checked:
    //   InvalidUrl  - the path did not join onto the base URL
    //   Network     - the request never completed
    //   Unauthorized / NotFound / Status - non-200 response
    //   EmptyBody   - 200 but nothing to decode
    //   Decode      - body did not match T
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, FetchError> {
        let url = self.base_url.join(path)?;

        let response = self.http.get(url).send().await?;

        // Read the status before consuming the response for its body -
        // on a non-200 the body is diagnostic text worth carrying along
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(match status {
                StatusCode::UNAUTHORIZED => FetchError::Unauthorized,
                StatusCode::NOT_FOUND => FetchError::NotFound,
                _ => FetchError::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }

        let decoded = serde_json::from_str(&body)?;
        Ok(decoded)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is DeserializeOwned?
//    - A serde trait bound meaning "T can be deserialized from data it
//      doesn't borrow from"
//    - We need it (rather than Deserialize<'de>) because the body String
//      is dropped when fetch_json returns
//
// 2. Why read the body as text and then decode, instead of response.json()?
//    - We want the raw body twice: as diagnostics on a non-200, and to
//      detect the empty-body case before decoding
//    - serde_json::from_str on the text gives us both for free
//
// 3. Why is fetch_json pub(crate)?
//    - It's the shared plumbing for the operations in this module tree
//    - Callers outside the crate use list_repositories/list_commits/
//      fetch_languages, which pick the path and the shape
// -----------------------------------------------------------------------------
