//! Junction-box circuit wiring
//!
//! Junction boxes hang at integer 3D coordinates. Wiring the closest pairs
//! together merges boxes into circuits; this crate provides the pieces to
//! replay that process:
//!
//! - [`circuits::point`] parses box coordinates
//! - [`circuits::edges`] generates every pairwise connection, shortest first
//! - [`circuits::engine`] and [`circuits::forest`] track which boxes share a circuit
//! - [`circuits::wiring`] drives an engine over the sorted connections
//!
//! The puzzle solvers built on top are registered with `junction-solver` as
//! plugins and picked up by any binary linking this crate.

pub mod circuits;

#[cfg(feature = "year-2025")]
pub mod year_2025;
