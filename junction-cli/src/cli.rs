//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// Run every solver and part in order on the calling thread
    Sequential,
    /// Run puzzles in parallel; parts of one puzzle share a parse (default)
    #[default]
    Day,
    /// Run every part in parallel, parsing the input once per part
    Part,
}

/// Junction-box circuit solver runner
#[derive(Parser, Debug)]
#[command(name = "junction", about = "Run junction-box circuit solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding puzzle inputs as `{year}/day{DD}.txt`
    #[arg(long, default_value = "~/.config/junction/inputs")]
    pub input_dir: PathBuf,

    /// Read the input for the selected puzzle from this file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
