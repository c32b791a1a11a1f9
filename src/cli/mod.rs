// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the klein command-line interface.
//!
//! Three subcommands: `search` for one-shot queries, `shell` for the
//! search-then-narrow loop, and `inspect` to summarize a dataset. Every
//! setting can also come from a `KLEIN_*` environment variable.

pub mod display;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::time::Duration;

use klein::cache::DEFAULT_CACHE_CAPACITY;
use klein::config::{
    Config, DEFAULT_COLLAPSE_LINES, DEFAULT_DATA, DEFAULT_PROJECT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_WORD,
};
use klein::link::DEFAULT_BASE_URL;

#[derive(Parser)]
#[command(
    name = "klein",
    about = "Find blank-line delimited blocks that mention a word across a wiki export",
    version
)]
pub struct Cli {
    /// Log more (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search once and print the matching blocks
    Search {
        /// Substring to look for (case-sensitive, literal)
        word: String,

        /// Keep only blocks with a line containing this word
        #[arg(short, long)]
        filter: Option<String>,

        /// Maximum number of blocks to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of cards
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Interactive loop: search, then narrow the results with :filter
    Shell {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Number of queries kept in the result cache
        #[arg(long, env = "KLEIN_CACHE_CAPACITY", default_value_t = DEFAULT_CACHE_CAPACITY)]
        cache_capacity: usize,
    },

    /// Summarize a dataset: pages, lines, blocks, version
    Inspect {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where the dataset comes from.
#[derive(Args, Clone, Debug)]
pub struct SourceArgs {
    /// Path or http(s) URL of a JSON or Parquet export
    #[arg(short, long, env = "KLEIN_DATA", default_value = DEFAULT_DATA)]
    pub data: String,

    /// Fetch timeout in seconds
    #[arg(long, env = "KLEIN_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

/// How results are printed.
#[derive(Args, Clone, Debug)]
pub struct OutputArgs {
    /// Project name used in deep links
    #[arg(short, long, env = "KLEIN_PROJECT", default_value = DEFAULT_PROJECT)]
    pub project: String,

    /// Wiki base URL used in deep links
    #[arg(long, env = "KLEIN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Collapse blocks longer than this many lines
    #[arg(long, env = "KLEIN_COLLAPSE_LINES", default_value_t = DEFAULT_COLLAPSE_LINES)]
    pub collapse_lines: usize,

    /// Never collapse long blocks
    #[arg(long)]
    pub expand: bool,
}

impl SourceArgs {
    pub fn apply(&self, config: &mut Config) {
        config.data.clone_from(&self.data);
        config.timeout = Duration::from_secs(self.timeout);
    }
}

impl OutputArgs {
    pub fn apply(&self, config: &mut Config) {
        config.project.clone_from(&self.project);
        config.base_url.clone_from(&self.base_url);
        config.collapse_lines = self.collapse_lines;
    }
}

/// One line of shell input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Filter(String),
    ClearFilter,
    Help,
    Quit,
}

/// Parse a shell line.
///
/// Lines starting with `:` are commands; anything else is a search word, and
/// an empty line searches for the default word.
pub fn parse_shell_command(input: &str) -> ShellCommand {
    let input = input.trim_end_matches(['\r', '\n']);
    if let Some(command) = input.strip_prefix(':') {
        let (name, arg) = match command.split_once(' ') {
            Some((name, arg)) => (name, arg),
            None => (command, ""),
        };
        return match name {
            "filter" | "f" if !arg.is_empty() => ShellCommand::Filter(arg.to_string()),
            "filter" | "f" | "clear" | "c" => ShellCommand::ClearFilter,
            "quit" | "q" | "exit" => ShellCommand::Quit,
            _ => ShellCommand::Help,
        };
    }
    if input.is_empty() {
        ShellCommand::Search(DEFAULT_WORD.to_string())
    } else {
        ShellCommand::Search(input.to_string())
    }
}
