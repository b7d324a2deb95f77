//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses raw puzzle input into the data shared by every part.
///
/// Parsing is kept apart from solving so that the input is read once and each
/// part works on the same structure.
///
/// # Example
///
/// ```
/// use junction_solver::{ParseError, PuzzleParser};
///
/// struct Depths;
///
/// impl PuzzleParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad depth".into())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("3\n4").unwrap(), vec![3, 4]);
/// ```
pub trait PuzzleParser {
    /// Parsed input plus any intermediate results parts want to share.
    ///
    /// The lifetime allows zero-copy data borrowed from the input.
    type SharedData<'a>: 'a;

    /// Parse the input string into the shared data.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implementing one trait per part lets the derive macro check at compile
/// time that every declared part exists.
pub trait PartSolver<const N: u8>: PuzzleParser {
    /// Produce the answer for this part.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle solver with runtime part dispatch.
///
/// Usually generated by `#[derive(PuzzleSolver)]`, which forwards
/// `solve_part(shared, n)` to `<Self as PartSolver<n>>::solve`.
///
/// # Example
///
/// ```
/// use junction_solver::{ParseError, PuzzleParser, SolveError, Solver};
///
/// struct Sums;
///
/// impl PuzzleParser for Sums {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|w| w.parse().map_err(|_| ParseError::InvalidFormat(w.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Sums {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i64>().to_string()),
///             2 => Ok(shared.iter().product::<i64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Sums::parse("2 3 4").unwrap();
/// assert_eq!(Sums::solve_part(&mut shared, 2).unwrap(), "24");
/// ```
pub trait Solver: PuzzleParser {
    /// Number of parts this solver answers
    const PARTS: u8;

    /// Solve the given part (1-based).
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked part dispatch, available on every [`Solver`].
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`] but rejects parts outside `1..=PARTS`.
    fn solve_part_checked(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
