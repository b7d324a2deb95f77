//! Driving an engine over the sorted connection list
//!
//! Two ways to stop: after a fixed number of connections
//! ([`connect_shortest`]), or as soon as every box shares one circuit
//! ([`connect_until_closed`]).

use super::edges::Edge;
use super::engine::Connectivity;
use tracing::{debug, info, instrument, trace};

/// What happened while consuming a fixed number of connections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WiringSummary {
    /// Connections taken from the list
    pub consumed: usize,
    /// Connections that joined two circuits
    pub merges: usize,
    /// Connections between boxes already in the same circuit
    pub redundant: usize,
}

/// The connection after which one circuit spans every box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosingConnection {
    pub edge: Edge,
    /// Connections consumed, the closing one included
    pub consumed: usize,
}

/// Make the first `limit` connections, whatever the resulting circuits.
///
/// Connections between boxes that already share a circuit still count
/// towards the limit.
#[instrument(level = "debug", skip(engine, edges), fields(available = edges.len()))]
pub fn connect_shortest<C>(engine: &mut C, edges: &[Edge], limit: usize) -> WiringSummary
where
    C: Connectivity + ?Sized,
{
    let mut summary = WiringSummary::default();

    for edge in edges.iter().take(limit) {
        let (a, b) = edge.endpoints();
        summary.consumed += 1;
        if engine.connect(a, b) {
            summary.merges += 1;
            trace!(a, b, distance = edge.distance(), "joined circuits");
        } else {
            summary.redundant += 1;
        }
    }

    debug!(
        consumed = summary.consumed,
        merges = summary.merges,
        redundant = summary.redundant,
        circuits = engine.circuit_count(),
        "wiring finished"
    );
    summary
}

/// Make connections until one circuit holds all `total_nodes` boxes.
///
/// Stops at the first connection that completes the circuit. Returns `None`
/// when the list runs out first, and for fewer than two boxes, where no
/// connection is ever needed.
#[instrument(level = "debug", skip(engine, edges), fields(available = edges.len()))]
pub fn connect_until_closed<C>(engine: &mut C, edges: &[Edge], total_nodes: usize) -> Option<ClosingConnection>
where
    C: Connectivity + ?Sized,
{
    if total_nodes <= 1 {
        return None;
    }

    for (idx, edge) in edges.iter().enumerate() {
        let (a, b) = edge.endpoints();
        if !engine.connect(a, b) {
            continue;
        }
        if engine.is_fully_connected(total_nodes) {
            let closing = ClosingConnection {
                edge: *edge,
                consumed: idx + 1,
            };
            info!(a, b, consumed = closing.consumed, "all junction boxes share one circuit");
            return Some(closing);
        }
    }

    debug!(circuits = engine.circuit_count(), "connections exhausted before closing the circuit");
    None
}

/// Product of the `k` largest circuit sizes, unconnected boxes counting as 1
pub fn largest_circuits_product<C>(engine: &C, k: usize) -> usize
where
    C: Connectivity + ?Sized,
{
    engine.largest_circuit_sizes(k).into_iter().product()
}
