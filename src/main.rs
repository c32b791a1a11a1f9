// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

use klein::{narrow, search, source_for, AggregatedBlock, Config, QueryCache, Session};

mod cli;
use cli::display::{self, CardStyle};
use cli::{parse_shell_command, Cli, Commands, ShellCommand};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", display::error_line(&format!("{:#}", e)));
        if let Some(hint) = remediation(&e) {
            eprintln!("  {}", hint);
        }
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for `--json`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "klein=warn",
        1 => "klein=debug",
        _ => "klein=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn remediation(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<klein::Error>()? {
        klein::Error::SourceUnavailable { location, .. } if klein::source::is_remote(location) => {
            Some("If the URL can't be reached from here, download the export and pass its path with --data.")
        }
        klein::Error::Parse { .. } => {
            Some("--data must point to a Parquet export, a JSON project export, or a JSON array of pages.")
        }
        _ => None,
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::default();
    match cli.command {
        Commands::Search {
            word,
            filter,
            limit,
            json,
            source,
            output,
        } => {
            source.apply(&mut config);
            output.apply(&mut config);
            run_search(&config, &word, filter.as_deref(), limit, json, output.expand)
        }
        Commands::Shell {
            source,
            output,
            cache_capacity,
        } => {
            source.apply(&mut config);
            output.apply(&mut config);
            config.cache_capacity = cache_capacity;
            run_shell(&config, output.expand)
        }
        Commands::Inspect { source } => {
            source.apply(&mut config);
            run_inspect(&config)
        }
    }
}

fn run_search(
    config: &Config,
    word: &str,
    filter: Option<&str>,
    limit: Option<usize>,
    json: bool,
    expand: bool,
) -> anyhow::Result<()> {
    let source = source_for(&config.data, config.timeout)?;
    let dataset = source
        .fetch()
        .with_context(|| format!("search for {:?} failed", word))?;

    let results = search(&dataset, word);
    let narrowed = narrow(&results, filter.unwrap_or(""));
    let shown: Vec<&AggregatedBlock> = narrowed
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    if json {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &shown).context("failed to write JSON")?;
        writeln!(out)?;
        return Ok(());
    }

    print_results(config, expand, results.len(), &shown, filter);
    Ok(())
}

fn print_results(
    config: &Config,
    expand: bool,
    found: usize,
    shown: &[&AggregatedBlock],
    filter: Option<&str>,
) {
    println!("{}", display::summary(found, shown.len(), filter));
    if shown.is_empty() {
        println!("{}", display::nothing_found(found));
        return;
    }

    let style = CardStyle {
        base_url: &config.base_url,
        project: &config.project,
        collapse_lines: config.collapse_lines,
        expand,
    };
    for block in shown {
        println!();
        print!("{}", display::render_card(block, &style));
    }
}

fn run_shell(config: &Config, expand: bool) -> anyhow::Result<()> {
    let source = source_for(&config.data, config.timeout)?;
    let mut session = Session::new(source, QueryCache::new(config.cache_capacity));

    eprintln!(
        "klein shell on {} (:filter WORD, :clear, :quit)",
        session.location()
    );

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("search> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        match parse_shell_command(&input) {
            // The filter word stays in place across searches.
            ShellCommand::Search(word) => {
                if let Err(e) = session.search(&word) {
                    eprintln!("{}", display::error_line(&e.to_string()));
                    continue;
                }
            }
            ShellCommand::Filter(word) => session.set_filter(word),
            ShellCommand::ClearFilter => session.clear_filter(),
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                eprintln!("WORD search, :filter WORD narrow, :clear drop filter, :quit exit");
                continue;
            }
        }

        let Some(last) = session.last() else {
            eprintln!("Search for something first.");
            continue;
        };
        let shown = session.current();
        print_results(config, expand, last.results.len(), &shown, Some(session.filter()));
    }

    tracing::debug!(
        hits = session.cache().hits(),
        misses = session.cache().misses(),
        "shell finished"
    );
    Ok(())
}

fn run_inspect(config: &Config) -> anyhow::Result<()> {
    let source = source_for(&config.data, config.timeout)?;
    let dataset = source.fetch()?;

    // Every non-empty block mentions the empty word.
    let blocks = search(&dataset, "").len();

    println!("location  {}", source.location());
    println!("version   {:08x}", dataset.version());
    println!("pages     {}", dataset.page_count());
    println!("lines     {}", dataset.line_count());
    println!("blocks    {}", blocks);
    Ok(())
}
