//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use chrono::TimeDelta;
use junction_solver::{DynSolver, ParseError, SolveError, SolverError, SolverRegistry};
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, warn};

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    pub solve_duration: TimeDelta,
    /// Set on the result that paid for parsing the input
    pub parse_duration: Option<TimeDelta>,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: SolverError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            solve_duration: TimeDelta::zero(),
            parse_duration: None,
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs: config.input_store(),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(cfg.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Work items whose input file is missing
    pub fn missing_inputs(&self) -> Vec<WorkItem> {
        let inputs = &self.sync_executor_config.inputs;
        self.collect_work_items()
            .into_iter()
            .filter(|w| !inputs.contains(w.year, w.day))
            .collect()
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        let cfg = &self.sync_executor_config;

        match cfg.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work_item(&work, &tx, cfg) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Day | ParallelizeBy::Part => self.thread_pool.install(|| {
                work_items
                    .into_par_iter()
                    .map(|work| run_work_item(&work, &tx, cfg).err())
                    .reduce_with(|err1, err2| match (err1, err2) {
                        (Some(e1), e2) => Some(ArcExecutorError::combine_opt(e2, e1)),
                        (None, e2) => e2,
                    })
                    .flatten()
                    .map_or(Ok(()), Err)
            }),
        }
    }
}

/// Parts to run given the part filter and how many parts the solver has
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        #[allow(clippy::reversed_empty_ranges)]
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Load the input and solve every part of one work item
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let input = match cfg.inputs.read(year, day) {
        Ok(input) => input,
        Err(source) => {
            let error = ExecutorError::Input { year, day, source };
            warn!(year, day, "{error}");
            let message = error.to_string();
            for part in work.parts.clone() {
                let missing = SolverError::Parse(ParseError::MissingData(message.clone()));
                send(tx, SolverResult::failed(year, day, part, missing))?;
            }
            return Ok(());
        }
    };

    if matches!(cfg.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, &cfg.registry)
    } else {
        run_parts_sequential(work, &input, tx, &cfg.registry)
    }
}

/// Parse once, then solve the parts in order so later parts see earlier caches
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let mut solver = match registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => return send_parse_failure(work, e, tx),
    };

    let mut parse_duration = Some(solver.parse_duration());
    for part in work.parts.clone() {
        let mut result = solve_part(year, day, part, &mut *solver);
        result.parse_duration = parse_duration.take();
        send(tx, result)?;
    }
    Ok(())
}

/// Parse separately for every part and solve them in parallel
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    work.parts
        .clone()
        .into_par_iter()
        .try_for_each_with(tx.clone(), |tx, part| {
            let result = match registry.create_solver(year, day, input) {
                Ok(mut solver) => {
                    let mut result = solve_part(year, day, part, &mut *solver);
                    result.parse_duration = Some(solver.parse_duration());
                    result
                }
                Err(e) => SolverResult::failed(year, day, part, e),
            };
            send(tx, result)
        })
}

/// Report a parse failure once per requested part
fn send_parse_failure(
    work: &WorkItem,
    error: SolverError,
    tx: &Sender<SolverResult>,
) -> Result<(), ArcExecutorError> {
    warn!(year = work.year, day = work.day, "{error}");
    for part in work.parts.clone() {
        send(
            tx,
            SolverResult::failed(work.year, work.day, part, duplicate(&error)),
        )?;
    }
    Ok(())
}

/// Copy of a solver error in the same category; solve failures keep only their message
fn duplicate(error: &SolverError) -> SolverError {
    match error {
        SolverError::NotFound(year, day) => SolverError::NotFound(*year, *day),
        SolverError::Parse(e) => SolverError::Parse(e.clone()),
        SolverError::Solve(e) => SolverError::Solve(SolveError::SolveFailed(e.to_string().into())),
    }
}

/// Solve a single part
fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(solved) => {
            debug!(year, day, part, "solved");
            SolverResult {
                year,
                day,
                part,
                solve_duration: solved.duration(),
                answer: Ok(solved.answer),
                parse_duration: None,
            }
        }
        Err(e) => SolverResult::failed(year, day, part, e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use junction_circuits::year_2025::day_8::Day8;
    use junction_solver::RegistryBuilder;
    use std::fs;
    use std::sync::mpsc;
    use tempfile::TempDir;

    const EXAMPLE: &str = "162,817,812\n57,618,57\n906,360,560\n592,479,940\n352,342,300\n\
466,668,158\n542,29,236\n431,825,988\n739,650,466\n52,470,668\n216,146,977\n819,987,18\n\
117,168,530\n805,96,715\n346,949,466\n970,615,88\n941,993,340\n862,61,35\n984,92,344\n\
425,690,689\n";

    fn registry() -> SolverRegistry {
        RegistryBuilder::new()
            .register_solver::<Day8>(2025, 8, &["graph"])
            .unwrap()
            .register_solver::<Day8>(2024, 8, &[])
            .unwrap()
            .build()
    }

    fn config(input_dir: &std::path::Path, parallelize_by: ParallelizeBy) -> Config {
        Config {
            year_filter: None,
            day_filter: None,
            part_filter: None,
            tags: Vec::new(),
            input_dir: input_dir.to_path_buf(),
            input_file: None,
            thread_count: 2,
            parallelize_by,
            quiet: true,
        }
    }

    fn write_input(dir: &TempDir, year: u16, day: u8, input: &str) {
        let path = dir.path().join(year.to_string());
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join(format!("day{day:02}.txt")), input).unwrap();
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let (tx, rx) = mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<_> = rx.into_iter().collect();
        results.sort_by_key(|r| (r.year, r.day, r.part));
        results
    }

    #[test]
    fn test_filter_parts() {
        assert_eq!(filter_parts(None, 2), 1..=2);
        assert_eq!(filter_parts(Some(2), 2), 2..=2);
        assert!(filter_parts(Some(3), 2).is_empty());
    }

    #[test]
    fn test_duplicate_keeps_error_category() {
        assert!(matches!(
            duplicate(&SolverError::NotFound(2025, 8)),
            SolverError::NotFound(2025, 8)
        ));

        let parse = ParseError::InvalidLine { line: 3, reason: "bad".to_string() };
        assert!(matches!(
            duplicate(&SolverError::Parse(parse.clone())),
            SolverError::Parse(e) if e == parse
        ));

        let solve = SolverError::Solve(SolveError::PartOutOfRange(3));
        match duplicate(&solve) {
            SolverError::Solve(SolveError::SolveFailed(source)) => {
                assert_eq!(source.to_string(), SolveError::PartOutOfRange(3).to_string());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_collect_work_items_applies_filters() {
        let temp = TempDir::new().unwrap();
        let mut config = config(temp.path(), ParallelizeBy::Day);

        let executor = Executor::new(registry(), &config).unwrap();
        let items = executor.collect_work_items();
        assert_eq!(
            items,
            vec![
                WorkItem { year: 2024, day: 8, parts: 1..=2 },
                WorkItem { year: 2025, day: 8, parts: 1..=2 },
            ]
        );

        config.year_filter = Some(2025);
        config.part_filter = Some(2);
        let executor = Executor::new(registry(), &config).unwrap();
        assert_eq!(
            executor.collect_work_items(),
            vec![WorkItem { year: 2025, day: 8, parts: 2..=2 }]
        );

        config.part_filter = Some(3);
        let executor = Executor::new(registry(), &config).unwrap();
        assert!(executor.collect_work_items().is_empty());
    }

    #[test]
    fn test_every_mode_produces_the_same_answers() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 2024, 8, EXAMPLE);
        write_input(&temp, 2025, 8, EXAMPLE);

        for mode in [ParallelizeBy::Sequential, ParallelizeBy::Day, ParallelizeBy::Part] {
            let executor = Executor::new(registry(), &config(temp.path(), mode)).unwrap();
            assert!(executor.missing_inputs().is_empty());

            let answers: Vec<_> = run(&executor)
                .into_iter()
                .map(|r| (r.year, r.part, r.answer.unwrap()))
                .collect();
            assert_eq!(
                answers,
                vec![
                    (2024, 1, "20".to_string()),
                    (2024, 2, "25272".to_string()),
                    (2025, 1, "20".to_string()),
                    (2025, 2, "25272".to_string()),
                ],
                "mode {mode:?}"
            );
        }
    }

    #[test]
    fn test_sequential_parts_share_one_parse() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 2025, 8, EXAMPLE);
        let mut config = config(temp.path(), ParallelizeBy::Day);
        config.year_filter = Some(2025);

        let results = run(&Executor::new(registry(), &config).unwrap());
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_missing_input_fails_each_part() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 2025, 8, EXAMPLE);
        let executor = Executor::new(registry(), &config(temp.path(), ParallelizeBy::Day)).unwrap();

        let missing = executor.missing_inputs();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].year, 2024);

        let results = run(&executor);
        assert_eq!(results.len(), 4);
        assert!(results[..2].iter().all(|r| matches!(
            r.answer,
            Err(SolverError::Parse(ParseError::MissingData(_)))
        )));
        assert!(results[2..].iter().all(|r| r.answer.is_ok()));
    }

    #[test]
    fn test_parse_failure_fails_each_part() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 2025, 8, "1,2,x\n");
        let mut config = config(temp.path(), ParallelizeBy::Sequential);
        config.year_filter = Some(2025);

        let results = run(&Executor::new(registry(), &config).unwrap());
        assert_eq!(results.len(), 2);
        assert!(matches!(
            results[0].answer,
            Err(SolverError::Parse(ParseError::InvalidLine { line: 1, .. }))
        ));
        assert!(results[1].answer.is_err());
    }
}
