//! Incremental connectivity over node indices
//!
//! A *circuit* is a set of at least two nodes joined by connections. Nodes
//! that were never connected are implicit single-node circuits: they have no
//! entry anywhere, but still count as size 1 in size queries as long as the
//! engine knows about them (see [`Connectivity::node_count`]).

use itertools::Itertools;
use std::iter;

/// Stable index of a circuit in a [`CircuitTable`]
pub type CircuitId = usize;

/// Maintains a partition of node indices as connections are added.
///
/// Connections may arrive in any order; the partition only depends on which
/// connections were made, never on their order.
pub trait Connectivity {
    /// Join the circuits holding `a` and `b`.
    ///
    /// Returns `false` when the two nodes were already in the same circuit,
    /// which leaves the engine untouched.
    fn connect(&mut self, a: usize, b: usize) -> bool;

    /// Whether `a` and `b` share a circuit; every node is connected to itself
    fn connected(&self, a: usize, b: usize) -> bool;

    /// Size of the circuit containing `node`, 1 when it was never connected
    fn circuit_size(&self, node: usize) -> usize;

    /// Number of circuits with at least two nodes
    fn circuit_count(&self) -> usize;

    /// Number of nodes that belong to a circuit of two or more
    fn assigned_count(&self) -> usize;

    /// Number of nodes the engine knows about, connected or not
    fn node_count(&self) -> usize;

    /// Sizes of all circuits with at least two nodes, in no particular order
    fn circuit_sizes(&self) -> Vec<usize>;

    /// Whether a single circuit spans all `total_nodes` nodes.
    ///
    /// Trivially true for zero or one node.
    fn is_fully_connected(&self, total_nodes: usize) -> bool {
        total_nodes <= 1 || (self.circuit_count() == 1 && self.assigned_count() == total_nodes)
    }

    /// The `k` largest circuit sizes, largest first.
    ///
    /// Known but unconnected nodes fill the tail as circuits of size 1, so
    /// the result is shorter than `k` only when fewer than `k` circuits exist.
    fn largest_circuit_sizes(&self, k: usize) -> Vec<usize> {
        let sizes = self.circuit_sizes();
        let singletons = self.node_count().saturating_sub(self.assigned_count());

        sizes
            .into_iter()
            .chain(iter::repeat_n(1, singletons))
            .k_largest(k)
            .collect()
    }
}

/// Arena of circuits with a node-to-circuit index.
///
/// Merging moves every member of one circuit into the other and leaves the
/// source slot empty. Empty slots are never reused, so a [`CircuitId`] stays
/// valid for the lifetime of the table.
#[derive(Debug, Clone, Default)]
pub struct CircuitTable {
    circuits: Vec<Vec<usize>>,
    membership: Vec<Option<CircuitId>>,
    live: usize,
    assigned: usize,
}

impl CircuitTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table that already knows about nodes `0..node_count`
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            membership: vec![None; node_count],
            ..Self::default()
        }
    }

    /// Circuit holding `node`, if it was ever connected
    pub fn circuit_of(&self, node: usize) -> Option<CircuitId> {
        self.membership.get(node).copied().flatten()
    }

    /// Members of a live circuit, in the order they joined it
    pub fn members(&self, id: CircuitId) -> Option<&[usize]> {
        self.circuits
            .get(id)
            .filter(|members| !members.is_empty())
            .map(Vec::as_slice)
    }

    /// All live circuits
    pub fn circuits(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.circuits
            .iter()
            .filter(|members| !members.is_empty())
            .map(Vec::as_slice)
    }

    fn track(&mut self, node: usize) {
        if node >= self.membership.len() {
            self.membership.resize(node + 1, None);
        }
    }

    fn open_circuit(&mut self, a: usize, b: usize) {
        let id = self.circuits.len();
        self.circuits.push(vec![a, b]);
        self.membership[a] = Some(id);
        self.membership[b] = Some(id);
        self.live += 1;
        self.assigned += 2;
    }

    fn join(&mut self, target: CircuitId, node: usize) {
        self.circuits[target].push(node);
        self.membership[node] = Some(target);
        self.assigned += 1;
    }

    fn absorb(&mut self, target: CircuitId, source: CircuitId) {
        let moved = std::mem::take(&mut self.circuits[source]);
        for &node in &moved {
            self.membership[node] = Some(target);
        }
        self.circuits[target].extend(moved);
        self.live -= 1;
    }
}

impl Connectivity for CircuitTable {
    fn connect(&mut self, a: usize, b: usize) -> bool {
        self.track(a.max(b));
        if a == b {
            return false;
        }

        match (self.membership[a], self.membership[b]) {
            (Some(left), Some(right)) if left == right => false,
            (None, None) => {
                self.open_circuit(a, b);
                true
            }
            (Some(target), None) => {
                self.join(target, b);
                true
            }
            (None, Some(target)) => {
                self.join(target, a);
                true
            }
            (Some(target), Some(source)) => {
                self.absorb(target, source);
                true
            }
        }
    }

    fn connected(&self, a: usize, b: usize) -> bool {
        a == b || self.circuit_of(a).is_some_and(|id| self.circuit_of(b) == Some(id))
    }

    fn circuit_size(&self, node: usize) -> usize {
        self.circuit_of(node)
            .map_or(1, |id| self.circuits[id].len())
    }

    fn circuit_count(&self) -> usize {
        self.live
    }

    fn assigned_count(&self) -> usize {
        self.assigned
    }

    fn node_count(&self) -> usize {
        self.membership.len()
    }

    fn circuit_sizes(&self) -> Vec<usize> {
        self.circuits().map(<[usize]>::len).collect()
    }
}
