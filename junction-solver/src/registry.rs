//! Solver registry and plugin collection

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// Highest day number on the puzzle calendar
pub const DAYS_PER_YEAR: u8 = 25;

/// Creates a parsed solver instance for one puzzle input
pub type SolverFactory =
    for<'a> fn(year: u16, day: u8, input: &'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>;

/// Factory used for every [`Solver`] type
fn instantiate<'a, S>(year: u16, day: u8, input: &'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
where
    S: Solver + 'static,
{
    Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
}

/// Metadata describing a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleInfo {
    /// Puzzle year
    pub year: u16,
    /// Puzzle day (1-25)
    pub day: u8,
    /// Number of parts the solver answers
    pub parts: u8,
    /// Tags used for filtering
    pub tags: &'static [&'static str],
}

struct RegistryEntry {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
}

/// Collects solver factories and rejects duplicates.
///
/// ```
/// use junction_solver::{ParseError, PuzzleParser, RegistryBuilder, SolveError, Solver};
///
/// struct Echo;
///
/// impl PuzzleParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register_solver::<Echo>(2025, 1, &[])
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2025, 1, "hello").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hello");
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    entries: BTreeMap<(u16, u8), RegistryEntry>,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw factory for a puzzle.
    ///
    /// Fails when the day is off the calendar or the puzzle already has a solver.
    pub fn register(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        tags: &'static [&'static str],
        factory: SolverFactory,
    ) -> Result<Self, RegistrationError> {
        if day == 0 || day > DAYS_PER_YEAR {
            return Err(RegistrationError::InvalidDate(year, day));
        }
        if self.entries.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.entries.insert((year, day), RegistryEntry { factory, parts, tags });
        Ok(self)
    }

    /// Register a [`Solver`] type for a puzzle
    pub fn register_solver<S>(
        self,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register(year, day, S::PARTS, tags, instantiate::<S>)
    }

    /// Register every plugin submitted through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register the plugins accepted by `filter`.
    ///
    /// ```no_run
    /// # use junction_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins(|plugin| plugin.tags.contains(&"graph"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin
                    .solver
                    .register_with(self, plugin.year, plugin.day, plugin.tags)?;
            }
        }
        Ok(self)
    }

    /// Freeze the builder into a registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

/// Immutable lookup table from (year, day) to solver factory.
///
/// Iteration is ordered by year, then day.
pub struct SolverRegistry {
    entries: BTreeMap<(u16, u8), RegistryEntry>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for the puzzle
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .entries
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(year, day, input).map_err(SolverError::Parse)
    }

    /// Metadata for every registered solver, ordered by date
    pub fn iter_info(&self) -> impl Iterator<Item = PuzzleInfo> + '_ {
        self.entries.iter().map(|(&(year, day), entry)| PuzzleInfo {
            year,
            day,
            parts: entry.parts,
            tags: entry.tags,
        })
    }

    /// Metadata for one puzzle, if registered
    pub fn get_info(&self, year: u16, day: u8) -> Option<PuzzleInfo> {
        self.entries.get(&(year, day)).map(|entry| PuzzleInfo {
            year,
            day,
            parts: entry.parts,
            tags: entry.tags,
        })
    }

    /// Number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no solver is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Type-erased hook letting a plugin register its solver type.
///
/// Implemented for every `Solver + Sync + 'static`, so a unit struct can be
/// stored as `&'static dyn RegisterableSolver` in a [`SolverPlugin`].
pub trait RegisterableSolver: Sync {
    /// Register this solver with `builder`
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day, tags)
    }
}

/// A solver submitted for automatic registration.
///
/// Normally produced by `#[derive(RegisterSolver)]`; can also be submitted by hand:
///
/// ```ignore
/// junction_solver::inventory::submit! {
///     junction_solver::SolverPlugin {
///         year: 2025,
///         day: 8,
///         solver: &Day8,
///         tags: &["graph"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// Puzzle year
    pub year: u16,
    /// Puzzle day (1-25)
    pub day: u8,
    /// The solver, type-erased
    pub solver: &'static dyn RegisterableSolver,
    /// Tags used for filtering
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
