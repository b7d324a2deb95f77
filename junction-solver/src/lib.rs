//! Puzzle Solver Framework
//!
//! A small, type-safe framework for daily puzzle solvers. Each puzzle is parsed
//! once into shared data, then answered part by part.
//!
//! # Overview
//!
//! - [`PuzzleParser`] turns raw input into shared data
//! - [`PartSolver<N>`] answers part `N`
//! - [`Solver`] dispatches a runtime part number to the right `PartSolver`
//! - [`SolverRegistry`] maps (year, day) to solvers and creates timed
//!   [`DynSolver`] instances
//!
//! # Quick Example
//!
//! ```
//! use junction_solver::{ParseError, PartSolver, PuzzleParser, PuzzleSolver, RegistryBuilder, SolveError};
//!
//! #[derive(PuzzleSolver)]
//! #[puzzle(parts = 2)]
//! struct Widths;
//!
//! impl PuzzleParser for Widths {
//!     type SharedData<'a> = Vec<&'a str>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         Ok(input.lines().collect())
//!     }
//! }
//!
//! impl PartSolver<1> for Widths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.len().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Widths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         let widest = shared.iter().map(|l| l.len()).max().unwrap_or(0);
//!         Ok(widest.to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Widths>(2025, 3, &[])
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2025, 3, "ab\nabcd\nabc").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "3");
//! assert_eq!(solver.solve(2).unwrap().answer, "4");
//! ```
//!
//! # Plugins
//!
//! `#[derive(RegisterSolver)]` submits a [`SolverPlugin`] through `inventory`,
//! so binaries only need to link the crate holding the solvers and call
//! [`RegistryBuilder::register_all_plugins`].

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    DAYS_PER_YEAR, PuzzleInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin,
    SolverRegistry,
};
pub use solver::{PartSolver, PuzzleParser, Solver, SolverExt};

// Used by the code the derive macros expand to
pub use inventory;

pub use junction_solver_macros::{PuzzleSolver, RegisterSolver};
