//! Error types for the solver framework

use thiserror::Error;

/// Error raised while turning raw puzzle input into shared data
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input does not match the expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A specific input line could not be interpreted
    #[error("Invalid input on line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },
    /// Required data is missing from the input
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error raised while solving a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The part is within range but has no implementation
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number exceeds the number of parts the solver declares
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The solver ran but could not produce an answer
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error raised by registry lookups and solver execution
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver is registered for the puzzle
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Parsing the input failed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Solving a part failed
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error raised while building a registry
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// Two solvers claim the same puzzle
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// The day lies outside the 1..=25 calendar
    #[error("Invalid puzzle date: year {0} day {1}")]
    InvalidDate(u16, u8),
}
