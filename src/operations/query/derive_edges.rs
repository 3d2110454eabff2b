use std::collections::HashSet;

use crate::topology::{canonical_pair, Edge, Face};

/// Derives the unique undirected edges of a face list.
///
/// Faces are scanned in order and, within each face, along its boundary
/// cycle. An edge receives the next identifier the first time its canonical
/// pair is seen; later traversals in either direction are skipped.
pub struct DeriveEdges<'a> {
    faces: &'a [Face],
}

impl<'a> DeriveEdges<'a> {
    /// Creates a new `DeriveEdges` query.
    #[must_use]
    pub fn new(faces: &'a [Face]) -> Self {
        Self { faces }
    }

    /// Executes the derivation.
    #[must_use]
    pub fn execute(&self) -> Vec<Edge> {
        let boundary_len: usize = self.faces.iter().map(|f| f.vertices().len()).sum();
        let mut seen: HashSet<[usize; 2]> = HashSet::with_capacity(boundary_len);
        let mut edges = Vec::new();

        for face in self.faces {
            for (a, b) in face.boundary_pairs() {
                if seen.insert(canonical_pair(a, b)) {
                    edges.push(Edge::new(edges.len(), a, b));
                }
            }
        }

        edges
    }
}
