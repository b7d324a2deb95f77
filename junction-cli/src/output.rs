//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::{Duration, Instant};

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (self.quiet, &result.answer) {
            (true, Ok(answer)) => println!("{answer}"),
            (true, Err(e)) => eprintln!("Error: {e}"),
            (false, Ok(_)) => println!("{}", render_result(result)),
            (false, Err(_)) => eprintln!("{}", render_result(result)),
        }
    }

    /// Print a summary after all results
    ///
    /// Shows both total solve time (sum of durations) and actual elapsed
    /// wall-clock time.
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let totals = Totals::of(results);
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Solvers: {} solved, {} failed", totals.solved, totals.failed);
        println!("Total parse time: {}", format_duration(totals.parse));
        println!("Total solve time: {}", format_duration(totals.solve));
        println!("Elapsed wall-clock time: {}", format_std_duration(elapsed_time));
        if !elapsed_time.is_zero() {
            let compute_secs =
                (totals.parse + totals.solve).num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            println!("Speedup factor: {:.2}x", compute_secs / elapsed_time.as_secs_f64());
        }
    }
}

/// Aggregated counts and timings of successful results
#[derive(Debug, PartialEq, Eq)]
struct Totals {
    solved: usize,
    failed: usize,
    parse: TimeDelta,
    solve: TimeDelta,
}

impl Totals {
    fn of(results: &[SolverResult]) -> Self {
        let succeeded = || results.iter().filter(|r| r.answer.is_ok());
        let solved = succeeded().count();

        Self {
            solved,
            failed: results.len() - solved,
            parse: succeeded().filter_map(|r| r.parse_duration).sum(),
            solve: succeeded().map(|r| r.solve_duration).sum(),
        }
    }
}

/// `YYYY/DD Part P: answer (parse: …, solve: …)`, or the error in place of the answer
fn render_result(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{prefix}: {answer} ({parse_timing}solve: {})",
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{prefix}: Error - {e}"),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std Duration for display (used for wall-clock time)
fn format_std_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use junction_solver::{SolveError, SolverError};

    fn solved(part: u8, answer: &str, parse_ms: Option<i64>) -> SolverResult {
        SolverResult {
            year: 2025,
            day: 8,
            part,
            answer: Ok(answer.to_string()),
            solve_duration: TimeDelta::microseconds(1500),
            parse_duration: parse_ms.map(TimeDelta::milliseconds),
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
        assert_eq!(format_std_duration(Duration::from_micros(42)), "42µs");
        assert_eq!(format_std_duration(Duration::from_millis(1200)), "1.20s");
    }

    #[test]
    fn test_render_result() {
        assert_eq!(
            render_result(&solved(1, "40", Some(2))),
            "2025/08 Part 1: 40 (parse: 2.00ms, solve: 1.50ms)"
        );
        assert_eq!(
            render_result(&solved(2, "25272", None)),
            "2025/08 Part 2: 25272 (solve: 1.50ms)"
        );

        let failed = SolverResult {
            answer: Err(SolverError::Solve(SolveError::PartNotImplemented(2))),
            ..solved(2, "", None)
        };
        assert!(render_result(&failed).starts_with("2025/08 Part 2: Error - "));
    }

    #[test]
    fn test_totals_skip_failures() {
        let failed = SolverResult {
            answer: Err(SolverError::NotFound(2025, 8)),
            ..solved(2, "", Some(100))
        };
        let totals = Totals::of(&[solved(1, "40", Some(2)), solved(2, "25272", None), failed]);

        assert_eq!(
            totals,
            Totals {
                solved: 2,
                failed: 1,
                parse: TimeDelta::milliseconds(2),
                solve: TimeDelta::microseconds(3000),
            }
        );
    }
}
