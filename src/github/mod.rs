// src/github/mod.rs
// =============================================================================
// This module is the GitHub data-access layer: everything that talks to
// the API and turns its JSON into our domain types.
//
// Submodules:
// - client: the one HTTP-GET-and-decode primitive everything uses
// - error: the structured failure taxonomy all operations report
// - models: domain types (Repository, Commit, Languages) and wire shapes
// - repos: list a user's repositories + fan-out language enrichment
// - languages: language summary for one repository
// - commits: commit history for one repository
//
// This file (mod.rs) is the module root - it exports the public API that
// the CLI layer uses, so callers never depend on our internal layout.
// =============================================================================

mod client;
mod commits;
mod error;
mod languages;
mod models;
mod repos;

// Re-export the public surface: three operations, the client handle,
// the domain types, and the error they all report
pub use client::ApiClient;
pub use commits::list_commits;
pub use error::FetchError;
pub use languages::fetch_languages;
pub use models::{Commit, Languages, Repository};
pub use repos::list_repositories;
