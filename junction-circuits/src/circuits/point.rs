//! Junction-box coordinates and their loader

use junction_solver::ParseError;
use std::fmt;
use tracing::debug;

/// Position of a junction box.
///
/// Boxes are identified by their index in the input, so a `Point` carries
/// no id of its own. Coordinates are 32-bit, which keeps every squared
/// distance exact in `i128` and every coordinate product exact in `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Exact squared Euclidean distance
    pub fn squared_distance_to(&self, other: &Point) -> i128 {
        let axis = |a: i32, b: i32| {
            let d = i128::from(a) - i128::from(b);
            d * d
        };
        axis(self.x, other.x) + axis(self.y, other.y) + axis(self.z, other.z)
    }

    /// Euclidean distance
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.squared_distance_to(other) as f64).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// Parse one junction box per line.
///
/// Coordinates may be separated by commas, whitespace, or both. Blank lines
/// and lines that do not hold exactly three fields are skipped. A line with
/// three fields that are not all 32-bit integers is an error.
pub fn parse_points(input: &str) -> Result<Vec<Point>, ParseError> {
    let mut points = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty())
            .collect();

        let &[x, y, z] = fields.as_slice() else {
            if !fields.is_empty() {
                debug!(line = idx + 1, content = line, "skipping line without three coordinates");
            }
            continue;
        };

        let coordinate = |field: &str| {
            field.parse::<i32>().map_err(|e| ParseError::InvalidLine {
                line: idx + 1,
                reason: format!("`{field}` is not an integer coordinate: {e}"),
            })
        };

        points.push(Point::new(coordinate(x)?, coordinate(y)?, coordinate(z)?));
    }

    Ok(points)
}
