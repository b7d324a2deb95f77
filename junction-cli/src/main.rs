//! Junction CLI - command-line interface for running circuit solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod logging;
mod output;

// Link the solver crate so its plugins get registered
use junction_circuits as _;

use aggregator::{ResultAggregator, ResultKey};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, WorkItem};
use junction_solver::{RegistryBuilder, SolverRegistry};
use output::OutputFormatter;
use tracing::{info, warn};

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init_logging().map_err(CliError::from).and_then(|()| run(args)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    let registry = build_registry(&config.tags)?;
    info!(solvers = registry.len(), "registry ready");

    let executor = Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing = executor.missing_inputs();
    if !missing.is_empty() {
        let store = config.input_store();
        println!("Missing {} input file(s):", missing.len());
        for work in &missing {
            println!("  - {}", store.input_path(work.year, work.day).display());
        }
    }

    run_executor(executor, &work_items, config.quiet)
}

/// Run the executor and print results in order as they become ready
fn run_executor(executor: Executor, work_items: &[WorkItem], quiet: bool) -> Result<(), CliError> {
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let expected_keys = work_items.iter().flat_map(|w| {
        w.parts.clone().map(move |part| ResultKey {
            year: w.year,
            day: w.day,
            part,
        })
    });

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        warn!("not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))??;

    formatter.print_summary(&results);
    Ok(())
}

/// Build registry keeping only solvers that carry every requested tag
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins(|plugin| tags.iter().all(|tag| plugin.tags.contains(&tag.as_str())))?
    };

    Ok(builder.build())
}
