// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "repo-lens",
    version = "0.1.0",
    about = "Browse a GitHub user's repositories, languages and commit history",
    long_about = "repo-lens fetches a user's public repositories from the GitHub API, \
                  enriches each one with its language breakdown, and can show the commit \
                  history of any single repository."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (repos, commits, languages)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List a user's repositories with their language breakdowns
    ///
    /// Example: repo-lens repos octocat
    Repos {
        /// GitHub username whose repositories to list
        ///
        /// This is a positional argument (required, no flag needed)
        username: String,

        /// Output results in JSON format instead of a table
        ///
        /// This is an optional flag: --json
        #[arg(long)]
        json: bool,
    },

    /// Show the commit history of one repository, most recent first
    ///
    /// Example: repo-lens commits octocat hello-world
    Commits {
        /// GitHub username owning the repository
        username: String,

        /// Repository name (without the owner prefix)
        repo: String,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Fetch the language breakdown of one repository
    ///
    /// Example: repo-lens languages octocat hello-world
    Languages {
        /// GitHub username owning the repository
        username: String,

        /// Repository name (without the owner prefix)
        repo: String,

        /// Output the result in JSON format instead of plain text
        #[arg(long)]
        json: bool,
    },
}
