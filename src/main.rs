// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::io::{self, Write};

use wordex::build::build_from_dir;
use wordex::TrieIndex;

mod cli;
use cli::display::{
    render_error, render_not_found, render_results, render_stats, use_colors, use_error_colors,
};
use cli::{Cli, Commands, CorpusArgs};

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            corpus,
            query,
            limit,
            json,
        } => run_search(&corpus, &query, limit, json),
        Commands::Repl { corpus, limit } => run_repl(&corpus, limit),
        Commands::Stats { corpus, json } => run_stats(&corpus, json),
    };

    if let Err(e) = outcome {
        eprintln!("{}", render_error(&e, use_error_colors()));
        std::process::exit(1);
    }
}

fn load_index(corpus: &CorpusArgs) -> Result<TrieIndex, String> {
    build_from_dir(&corpus.build_options())
}

fn run_search(corpus: &CorpusArgs, query: &str, limit: Option<usize>, json: bool) -> Result<(), String> {
    let index = load_index(corpus)?;
    let results = index.search_with_limit(query, limit);

    if json {
        let serialized = serde_json::to_string_pretty(&results)
            .map_err(|e| format!("Failed to serialize results: {}", e))?;
        println!("{}", serialized);
    } else if results.is_empty() {
        println!("{}", render_not_found(use_colors()));
    } else {
        println!("{}", render_results(query, &results, use_colors()));
    }
    Ok(())
}

fn run_repl(corpus: &CorpusArgs, limit: Option<usize>) -> Result<(), String> {
    let index = load_index(corpus)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    cli::repl::run(&index, limit, stdin.lock(), &mut stdout, use_colors())
        .map_err(|e| format!("Terminal I/O failed: {}", e))?;
    stdout
        .flush()
        .map_err(|e| format!("Terminal I/O failed: {}", e))
}

fn run_stats(corpus: &CorpusArgs, json: bool) -> Result<(), String> {
    let index = load_index(corpus)?;
    let stats = index.stats();

    if json {
        let serialized = serde_json::to_string_pretty(&stats)
            .map_err(|e| format!("Failed to serialize stats: {}", e))?;
        println!("{}", serialized);
    } else {
        println!("{}", render_stats(&stats, use_colors()));
    }
    Ok(())
}
