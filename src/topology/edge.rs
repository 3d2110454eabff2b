use serde::Serialize;

/// An undirected mesh edge.
///
/// The vertex pair is stored in canonical form, lower index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    id: usize,
    vertices: [usize; 2],
}

impl Edge {
    /// Creates an edge between `a` and `b`, in either order.
    #[must_use]
    pub fn new(id: usize, a: usize, b: usize) -> Self {
        Self {
            id,
            vertices: canonical_pair(a, b),
        }
    }

    /// Returns the identifier, unique within one mesh.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the canonical vertex pair.
    #[must_use]
    pub fn vertices(&self) -> [usize; 2] {
        self.vertices
    }
}

/// Orders a vertex pair so the smaller index comes first.
#[must_use]
pub fn canonical_pair(a: usize, b: usize) -> [usize; 2] {
    if a <= b {
        [a, b]
    } else {
        [b, a]
    }
}
