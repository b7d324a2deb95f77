//! Disjoint-set forest with union by size and path compression
//!
//! Same contract as [`CircuitTable`](super::engine::CircuitTable), but merges
//! cost near-constant time instead of the size of the absorbed circuit.

use super::engine::Connectivity;

#[derive(Debug, Clone, Default)]
pub struct DisjointForest {
    parent: Vec<usize>,
    size: Vec<usize>,
    circuits: usize,
    assigned: usize,
}

impl DisjointForest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forest over nodes `0..node_count`, each in its own tree
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            parent: (0..node_count).collect(),
            size: vec![1; node_count],
            ..Self::default()
        }
    }

    fn track(&mut self, node: usize) {
        let start = self.parent.len();
        if node >= start {
            self.parent.extend(start..=node);
            self.size.resize(node + 1, 1);
        }
    }

    /// Root of `node` without touching the tree
    fn root(&self, node: usize) -> usize {
        let mut current = node;
        while self.parent[current] != current {
            current = self.parent[current];
        }
        current
    }

    /// Root of `node`, pointing every node on the way directly at it
    fn find(&mut self, node: usize) -> usize {
        let root = self.root(node);
        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }
}

impl Connectivity for DisjointForest {
    fn connect(&mut self, a: usize, b: usize) -> bool {
        self.track(a.max(b));

        let left = self.find(a);
        let right = self.find(b);
        if left == right {
            return false;
        }

        let (left_size, right_size) = (self.size[left], self.size[right]);
        match (left_size, right_size) {
            (1, 1) => self.circuits += 1,
            (1, _) | (_, 1) => {}
            _ => self.circuits -= 1,
        }
        self.assigned += usize::from(left_size == 1) + usize::from(right_size == 1);

        let (parent, child) = if left_size >= right_size {
            (left, right)
        } else {
            (right, left)
        };
        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        true
    }

    fn connected(&self, a: usize, b: usize) -> bool {
        let known = self.parent.len();
        a == b || (a < known && b < known && self.root(a) == self.root(b))
    }

    fn circuit_size(&self, node: usize) -> usize {
        if node < self.parent.len() {
            self.size[self.root(node)]
        } else {
            1
        }
    }

    fn circuit_count(&self) -> usize {
        self.circuits
    }

    fn assigned_count(&self) -> usize {
        self.assigned
    }

    fn node_count(&self) -> usize {
        self.parent.len()
    }

    fn circuit_sizes(&self) -> Vec<usize> {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(node, &parent)| node == parent && self.size[node] > 1)
            .map(|(node, _)| self.size[node])
            .collect()
    }
}
