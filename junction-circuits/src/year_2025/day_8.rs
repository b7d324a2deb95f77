use anyhow::anyhow;
use junction_solver::{ParseError, PartSolver, PuzzleParser, PuzzleSolver, RegisterSolver, SolveError};
use tracing::info;

use crate::circuits::{
    CircuitTable, Edge, Point, connect_shortest, connect_until_closed, connection_edges,
    largest_circuits_product, parse_points,
};

/// Connections made before measuring circuits in part 1
pub const DEFAULT_CONNECTION_LIMIT: usize = 1000;

/// How many of the largest circuits part 1 multiplies
const LARGEST_CIRCUITS: usize = 3;

#[derive(PuzzleSolver, RegisterSolver)]
#[puzzle(year = 2025, day = 8, parts = 2, tags = ["graph", "union-find"])]
pub struct Day8;

#[derive(Debug)]
pub struct SharedData {
    points: Vec<Point>,
    connection_limit: usize,
    edges: Option<Vec<Edge>>,
}

impl SharedData {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            connection_limit: DEFAULT_CONNECTION_LIMIT,
            edges: None,
        }
    }

    /// Override how many connections part 1 makes
    pub fn with_connection_limit(mut self, connection_limit: usize) -> Self {
        self.connection_limit = connection_limit;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Sorted connections, generated on first use and shared by both parts
    fn edges(&mut self) -> &[Edge] {
        self.edges
            .get_or_insert_with(|| connection_edges(&self.points))
    }
}

impl PuzzleParser for Day8 {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let points = parse_points(input)?;
        if points.is_empty() {
            return Err(ParseError::MissingData("no junction box coordinates".to_string()));
        }
        Ok(SharedData::new(points))
    }
}

impl PartSolver<1> for Day8 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let limit = shared.connection_limit;
        let mut table = CircuitTable::with_nodes(shared.points.len());

        let summary = connect_shortest(&mut table, shared.edges(), limit);
        info!(
            merges = summary.merges,
            redundant = summary.redundant,
            circuits = table.circuits().count(),
            "connected the {} shortest pairs",
            summary.consumed
        );

        Ok(largest_circuits_product(&table, LARGEST_CIRCUITS).to_string())
    }
}

impl PartSolver<2> for Day8 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total = shared.points.len();
        if total < 2 {
            return Err(SolveError::SolveFailed(
                anyhow!("{total} junction box(es) never need a connection").into(),
            ));
        }

        let mut table = CircuitTable::with_nodes(total);
        let closing = connect_until_closed(&mut table, shared.edges(), total).ok_or_else(|| {
            SolveError::SolveFailed(anyhow!("connections ran out before closing the circuit").into())
        })?;

        let (a, b) = closing.edge.endpoints();
        let (first, second) = (shared.points[a], shared.points[b]);
        info!(
            consumed = closing.consumed,
            "last connection joins {first} and {second}"
        );

        Ok((i64::from(first.x) * i64::from(second.x)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use junction_solver::Solver;

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
    fn test_parse_example() {
        let shared = Day8::parse(EXAMPLE).unwrap();
        assert_eq!(shared.points().len(), 20);
        assert_eq!(shared.points()[0], Point::new(162, 817, 812));
    }

    #[test]
    fn test_first_connection_of_example() {
        let mut shared = Day8::parse(EXAMPLE).unwrap();
        let first = shared.edges()[0];
        assert_eq!(first.endpoints(), (0, 19));
    }

    #[test]
    fn test_part1_example_after_ten_connections() {
        let mut shared = Day8::parse(EXAMPLE).unwrap().with_connection_limit(10);
        assert_eq!(Day8::solve_part(&mut shared, 1).unwrap(), "40");
    }

    #[test]
    fn test_part1_default_limit_joins_everything() {
        // 190 pairs is below the default limit, so every box ends up in one circuit
        let mut shared = Day8::parse(EXAMPLE).unwrap();
        assert_eq!(Day8::solve_part(&mut shared, 1).unwrap(), "20");
    }

    #[test]
    fn test_part2_example() {
        let mut shared = Day8::parse(EXAMPLE).unwrap();
        assert_eq!(Day8::solve_part(&mut shared, 2).unwrap(), "25272");
    }

    #[test]
    fn test_parts_share_edges() {
        let mut shared = Day8::parse(EXAMPLE).unwrap().with_connection_limit(10);
        Day8::solve_part(&mut shared, 1).unwrap();
        assert_eq!(shared.edges.as_ref().map(Vec::len), Some(190));
        assert_eq!(Day8::solve_part(&mut shared, 2).unwrap(), "25272");
    }

    #[test]
    fn test_single_box() {
        let mut shared = Day8::parse("5,5,5").unwrap();
        assert_eq!(Day8::solve_part(&mut shared, 1).unwrap(), "1");
        assert!(matches!(
            Day8::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_part2_product_of_extreme_coordinates() {
        let mut shared = Day8::parse("2147483647,0,0\n-2147483648,0,0").unwrap();
        assert_eq!(
            Day8::solve_part(&mut shared, 2).unwrap(),
            (-4_611_686_016_279_904_256i64).to_string()
        );
    }

    #[test]
    fn test_out_of_range_coordinate_is_invalid_line() {
        assert!(matches!(
            Day8::parse("4000000000,0,0\n4000000001,0,0"),
            Err(ParseError::InvalidLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_empty_input_is_missing_data() {
        assert!(matches!(
            Day8::parse("\n\n"),
            Err(ParseError::MissingData(_))
        ));
    }
}
