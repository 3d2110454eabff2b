use std::collections::HashMap;

use crate::error::TopologyError;
use crate::topology::{Edge, Face};

/// Validates that a face list forms a closed surface.
///
/// The surface must use every vertex, traverse every edge exactly once in
/// each direction (closed, edge-manifold and consistently oriented), and be
/// connected.
pub struct IsValid<'a> {
    vertex_count: usize,
    faces: &'a [Face],
    edges: &'a [Edge],
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query over `edges` derived from `faces`.
    #[must_use]
    pub fn new(vertex_count: usize, faces: &'a [Face], edges: &'a [Edge]) -> Self {
        Self {
            vertex_count,
            faces,
            edges,
        }
    }

    /// Executes the validation.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::VertexOutOfRange`] if a face references a
    /// missing vertex, or [`TopologyError::InvalidTopology`] describing the
    /// first violation found.
    pub fn execute(&self) -> Result<(), TopologyError> {
        if self.faces.is_empty() {
            return Err(TopologyError::InvalidTopology("mesh has no faces".into()));
        }

        let mut used = vec![false; self.vertex_count];
        let mut directed: HashMap<(usize, usize), usize> = HashMap::new();
        for face in self.faces {
            for (a, b) in face.boundary_pairs() {
                if a >= self.vertex_count {
                    return Err(TopologyError::VertexOutOfRange {
                        face: face.id(),
                        vertex: a,
                        count: self.vertex_count,
                    });
                }
                used[a] = true;
                let count = directed.entry((a, b)).or_insert(0);
                *count += 1;
                if *count > 1 {
                    return Err(TopologyError::InvalidTopology(format!(
                        "directed edge {a}->{b} is traversed by more than one face"
                    )));
                }
            }
        }

        if let Some(v) = used.iter().position(|u| !u) {
            return Err(TopologyError::InvalidTopology(format!(
                "vertex {v} is not used by any face"
            )));
        }

        for edge in self.edges {
            let [a, b] = edge.vertices();
            if !directed.contains_key(&(a, b)) || !directed.contains_key(&(b, a)) {
                return Err(TopologyError::InvalidTopology(format!(
                    "edge {a}-{b} does not border two oppositely oriented faces"
                )));
            }
        }

        let reached = self.reachable_from(0);
        if reached < self.vertex_count {
            return Err(TopologyError::InvalidTopology(format!(
                "surface is disconnected: {reached} of {} vertices reachable",
                self.vertex_count
            )));
        }

        Ok(())
    }

    /// Counts the vertices reachable from `start` along edges.
    fn reachable_from(&self, start: usize) -> usize {
        let mut adjacency = vec![Vec::new(); self.vertex_count];
        for edge in self.edges {
            let [a, b] = edge.vertices();
            adjacency[a].push(b);
            adjacency[b].push(a);
        }

        let mut visited = vec![false; self.vertex_count];
        let mut stack = vec![start];
        visited[start] = true;
        let mut count = 1;
        while let Some(v) = stack.pop() {
            for &n in &adjacency[v] {
                if !visited[n] {
                    visited[n] = true;
                    count += 1;
                    stack.push(n);
                }
            }
        }
        count
    }
}
