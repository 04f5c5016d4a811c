//! `aoc`: runs the registered puzzle solvers against local inputs

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Linking the solutions crate pulls in its inventory plugins
use aoc_solutions as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, WorkItem};
use output::OutputFormatter;
use std::collections::HashMap;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    enable_tracing(config.log_directive())?;

    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing: Vec<&WorkItem> = work_items
        .iter()
        .filter(|w| !executor.inputs().contains(w.year, w.day))
        .collect();
    if !missing.is_empty() && !config.quiet {
        println!("Missing {} input file(s):", missing.len());
        for w in &missing {
            println!("  - {}", executor.inputs().input_path(w.year, w.day).display());
        }
    }

    run_executor(executor, work_items, config.quiet)
}

/// Logs go to stderr so stdout carries only answers
fn enable_tracing(default_directive: &str) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| CliError::Config(format!("invalid log filter: {e}")))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
    Ok(())
}

fn run_executor(executor: Executor, work_items: Vec<WorkItem>, quiet: bool) -> Result<(), CliError> {
    info!(count = work_items.len(), "running solvers");

    let expected_keys: Vec<ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |part| ResultKey {
                year: w.year,
                day: w.day,
                part,
            })
        })
        .collect();
    let parts_per_day: HashMap<(u16, u8), usize> = work_items
        .iter()
        .map(|w| ((w.year, w.day), w.parts.clone().count()))
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let mut formatter = OutputFormatter::new(quiet, parts_per_day);
    let mut aggregator = ResultAggregator::new(expected_keys);

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.push(ready);
        }
    }
    for ready in aggregator.drain() {
        formatter.push(ready);
    }
    if !aggregator.is_complete() {
        warn!("not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("executor thread panicked".to_string()))?
        .map_err(CliError::Executor)?;

    let results = formatter.finish();
    if results.iter().any(|r| r.answer.is_err()) {
        warn!("some parts failed");
    }
    Ok(())
}

/// Registry of plugins carrying every requested tag
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
