//! The day 8 solver is reachable through plugin registration alone

use junction_circuits::year_2025::day_8::{DEFAULT_CONNECTION_LIMIT, Day8};
use junction_solver::{DynSolver, ParseError, PuzzleParser, RegistryBuilder, Solver, SolverError};

const EXAMPLE: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

#[test]
fn test_day_8_is_registered_with_tags() {
    let registry = RegistryBuilder::new()
        .register_plugins(|plugin| plugin.tags.contains(&"union-find"))
        .unwrap()
        .build();

    let info = registry.get_info(2025, 8).unwrap();
    assert_eq!(info.parts, 2);
    assert_eq!(info.tags, &["graph", "union-find"]);
}

#[test]
fn test_registered_solver_answers_both_parts() {
    let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
    let mut solver = registry.create_solver(2025, 8, EXAMPLE).unwrap();

    assert_eq!((solver.year(), solver.day(), solver.parts()), (2025, 8, 2));
    assert_eq!(solver.solve(1).unwrap().answer, "20");
    assert_eq!(solver.solve(2).unwrap().answer, "25272");
    assert!(solver.solve(3).is_err());
}

#[test]
fn test_registered_solver_reports_bad_input() {
    let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();

    let err = registry.create_solver(2025, 8, "1,2,3\n4,five,6\n").err().unwrap();
    assert!(matches!(
        err,
        SolverError::Parse(ParseError::InvalidLine { line: 2, .. })
    ));
}

#[test]
fn test_connection_limit_is_configurable() {
    let mut shared = Day8::parse(EXAMPLE).unwrap();
    assert_eq!(Day8::solve_part(&mut shared, 1).unwrap(), "20");

    for (limit, expected) in [(0, "1"), (1, "2"), (10, "40"), (DEFAULT_CONNECTION_LIMIT, "20")] {
        let mut shared = Day8::parse(EXAMPLE).unwrap().with_connection_limit(limit);
        assert_eq!(Day8::solve_part(&mut shared, 1).unwrap(), expected, "limit {limit}");
    }
}
