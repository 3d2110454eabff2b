use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::math::Point3;
use crate::operations::query::{DeriveEdges, IsValid};
use crate::topology::{Face, Mesh, Vertex};

/// Assembles a closed polyhedral mesh from points and face cycles.
///
/// Vertices and faces are numbered in input order. Edges are derived from
/// the face boundaries, and the result must form a closed, consistently
/// oriented, connected surface.
pub struct MakePolyhedron {
    points: Vec<Point3>,
    cycles: Vec<Vec<usize>>,
}

impl MakePolyhedron {
    /// Creates a new `MakePolyhedron` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>, cycles: Vec<Vec<usize>>) -> Self {
        Self { points, cycles }
    }

    /// Executes the operation, returning the assembled mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if a face cycle is malformed, references a vertex
    /// that does not exist, or the faces do not form a closed surface.
    pub fn execute(self) -> Result<Mesh> {
        let count = self.points.len();

        let mut faces = Vec::with_capacity(self.cycles.len());
        for (id, cycle) in self.cycles.into_iter().enumerate() {
            if let Some(&vertex) = cycle.iter().find(|&&v| v >= count) {
                return Err(TopologyError::VertexOutOfRange {
                    face: id,
                    vertex,
                    count,
                }
                .into());
            }
            faces.push(Face::new(id, cycle)?);
        }

        let edges = DeriveEdges::new(&faces).execute();
        IsValid::new(count, &faces, &edges).execute()?;

        let vertices = self
            .points
            .into_iter()
            .enumerate()
            .map(|(id, p)| Vertex::new(id, p))
            .collect();

        let mesh = Mesh::from_parts(vertices, faces, edges);
        debug!(
            vertices = mesh.vertices().len(),
            faces = mesh.faces().len(),
            edges = mesh.edges().len(),
            "assembled polyhedron"
        );
        Ok(mesh)
    }
}
