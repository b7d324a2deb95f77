//! Junction-box circuits
//!
//! Boxes are parsed into [`Point`]s, every pair becomes an [`Edge`] sorted by
//! length, and an engine implementing [`Connectivity`] merges boxes into
//! circuits as the edges are consumed.
//!
//! # Engines
//!
//! - [`CircuitTable`]: explicit member lists per circuit; a merge moves every
//!   member of one circuit into the other. Circuit ids stay stable, so the
//!   members of any circuit can be listed.
//! - [`DisjointForest`]: parent pointers with union by size and path
//!   compression, for inputs where moving member lists gets expensive.
//!
//! Both produce the same partition for the same connections.
//!
//! # Example
//!
//! ```rust
//! use junction_circuits::circuits::{
//!     CircuitTable, Connectivity, connect_shortest, connection_edges, parse_points,
//! };
//!
//! let points = parse_points("0,0,0\n0,0,1\n5,5,5\n5,5,7").unwrap();
//! let edges = connection_edges(&points);
//!
//! let mut table = CircuitTable::with_nodes(points.len());
//! let summary = connect_shortest(&mut table, &edges, 2);
//!
//! assert_eq!(summary.merges, 2);
//! assert_eq!(table.largest_circuit_sizes(3), vec![2, 2]);
//! assert!(!table.is_fully_connected(points.len()));
//! ```

pub mod edges;
pub mod engine;
pub mod forest;
pub mod point;
pub mod wiring;

pub use edges::{Edge, connection_edges};
pub use engine::{CircuitId, CircuitTable, Connectivity};
pub use forest::DisjointForest;
pub use point::{Point, parse_points};
pub use wiring::{
    ClosingConnection, WiringSummary, connect_shortest, connect_until_closed,
    largest_circuits_product,
};
