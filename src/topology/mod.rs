pub mod edge;
pub mod face;
pub mod vertex;

pub use edge::{canonical_pair, Edge};
pub use face::{Face, FaceKind};
pub use vertex::Vertex;

use serde::Serialize;

/// A polyhedral surface: vertices, faces and the edges derived from them.
///
/// A mesh is assembled atomically by a creation operation and is immutable
/// afterwards. Identifiers are positional and only meaningful within the
/// mesh that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
    edges: Vec<Edge>,
}

impl Mesh {
    pub(crate) fn from_parts(vertices: Vec<Vertex>, faces: Vec<Face>, edges: Vec<Edge>) -> Self {
        Self {
            vertices,
            faces,
            edges,
        }
    }

    /// Returns the vertices in identifier order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the faces in identifier order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the edges in discovery order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Computes the Euler characteristic `V - E + F`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn euler_characteristic(&self) -> i64 {
        self.vertices.len() as i64 - self.edges.len() as i64 + self.faces.len() as i64
    }

    /// Computes the genus of the surface, `(2 - chi) / 2`.
    ///
    /// Only meaningful for closed, connected, orientable surfaces, which is
    /// what every creation operation guarantees.
    #[must_use]
    pub fn genus(&self) -> i64 {
        (2 - self.euler_characteristic()) / 2
    }

    /// Counts the faces of the given kind.
    #[must_use]
    pub fn count_faces(&self, kind: FaceKind) -> usize {
        self.faces.iter().filter(|f| f.kind() == kind).count()
    }
}
