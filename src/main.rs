// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Fetch through the github module and print the results
// 4. Exit with proper code (0 = success, 1 = not found, 2 = error)
//
// All the actual logic lives in src/github/ - this file is presentation
// glue: it decides what to print and which exit code to use.
//
// Rust concepts used:
// - async/await: Because we make many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod github;        // src/github/ - GitHub API data-access layer

// Import items we need from our modules
use cli::{Cli, Commands};
use clap::Parser;  // Parser trait enables the parse() method

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

use github::{ApiClient, Commit, FetchError, Repository};

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = success
//   Ok(1) = user or repository not found
//   Err = unexpected error (exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // One client for whichever operation we dispatch to
    let client = ApiClient::new()?;

    // Match on which subcommand was used
    match cli.command {
        Commands::Repos { username, json } => {
            handle_repos(&client, &username, json).await
        }
        Commands::Commits { username, repo, json } => {
            handle_commits(&client, &username, &repo, json).await
        }
        Commands::Languages { username, repo, json } => {
            handle_languages(&client, &username, &repo, json).await
        }
    }
}

// Handles the 'repos' subcommand
// Parameters:
//   username: GitHub login to list repositories for
//   json: whether to output JSON format
async fn handle_repos(client: &ApiClient, username: &str, json: bool) -> Result<i32> {
    if !json {
        println!("🔍 Fetching repositories for {}", username);
    }

    match github::list_repositories(client, username).await {
        Ok(repos) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&repos)?);
            } else if repos.is_empty() {
                println!("⚠️  No repositories found for {}", username);
            } else {
                print_repo_table(&repos);
            }
            Ok(0)
        }
        Err(e) if e.is_not_found() => {
            eprintln!("❌ User not found: {}", username);
            Ok(1)
        }
        Err(e) => Err(e.into()),
    }
}

// Handles the 'commits' subcommand
async fn handle_commits(
    client: &ApiClient,
    username: &str,
    repo: &str,
    json: bool,
) -> Result<i32> {
    if !json {
        println!("🔍 Fetching commits for {}/{}", username, repo);
    }

    match github::list_commits(client, username, repo).await {
        Ok(commits) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&commits)?);
            } else if commits.is_empty() {
                println!("⚠️  No commits found in {}/{}", username, repo);
            } else {
                print_commit_table(&commits);
            }
            Ok(0)
        }
        Err(FetchError::NotFound) => {
            eprintln!("❌ Repository not found: {}/{}", username, repo);
            Ok(1)
        }
        Err(e) => Err(e.into()),
    }
}

// Handles the 'languages' subcommand
async fn handle_languages(
    client: &ApiClient,
    username: &str,
    repo: &str,
    json: bool,
) -> Result<i32> {
    match github::fetch_languages(client, username, repo).await {
        Ok(languages) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&languages)?);
            } else if languages.as_str().is_empty() {
                println!("⚠️  No languages detected in {}/{}", username, repo);
            } else {
                println!("📝 {}/{}: {}", username, repo, languages);
            }
            Ok(0)
        }
        Err(FetchError::NotFound) => {
            eprintln!("❌ Repository not found: {}/{}", username, repo);
            Ok(1)
        }
        Err(e) => Err(e.into()),
    }
}

// Prints repositories as a human-readable table in the terminal
fn print_repo_table(repos: &[Repository]) {
    // Print table header
    println!("{:<30} {:<25} {:<22} {:<30}", "NAME", "LANGUAGES", "UPDATED", "DESCRIPTION");
    println!("{}", "=".repeat(107));

    // Print each repository
    for repo in repos {
        let description = repo.description.as_deref().unwrap_or("");
        let languages = truncate(repo.languages.as_str(), 22);

        println!(
            "{:<30} {:<25} {:<22} {:<30}",
            truncate(&repo.name, 27),
            languages,
            repo.updated_at,
            truncate(description, 27),
        );
    }

    println!();
    println!("📊 {} repositori(es)", repos.len());
}

// Prints commits as a human-readable table in the terminal
fn print_commit_table(commits: &[Commit]) {
    println!("{:<10} {:<22} {:<50}", "SHA", "DATE", "MESSAGE");
    println!("{}", "=".repeat(82));

    for commit in commits {
        // A short sha is plenty for display; first line of the message only
        let short_sha: String = commit.sha.chars().take(7).collect();
        let first_line = commit.message.lines().next().unwrap_or("");

        println!(
            "{:<10} {:<22} {:<50}",
            short_sha,
            commit.date,
            truncate(first_line, 47),
        );
    }

    println!();
    println!("📊 {} commit(s)", commits.len());
}

// Truncates a string for table display, adding "..." when it was cut
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
