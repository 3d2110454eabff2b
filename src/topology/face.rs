use serde::Serialize;

use crate::error::TopologyError;

/// Shape tag of a face, determined solely by its vertex count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceKind {
    /// Three vertices.
    Triangle,
    /// Five vertices.
    Pentagon,
    /// Any other convex polygon.
    Polygon,
}

impl FaceKind {
    /// Classifies a boundary cycle of `len` vertices.
    #[must_use]
    pub fn from_len(len: usize) -> Self {
        match len {
            3 => Self::Triangle,
            5 => Self::Pentagon,
            _ => Self::Polygon,
        }
    }
}

/// A polygonal face bounded by a cycle of vertex indices.
///
/// The last vertex implicitly connects back to the first. A face always has
/// at least three distinct vertices, so no boundary pair is a self-loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Face {
    id: usize,
    vertices: Vec<usize>,
    #[serde(rename = "type")]
    kind: FaceKind,
}

impl Face {
    /// Creates a face from its boundary cycle.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidFace`] if the cycle has fewer than
    /// three vertices or visits a vertex more than once.
    pub fn new(id: usize, vertices: Vec<usize>) -> Result<Self, TopologyError> {
        if vertices.len() < 3 {
            return Err(TopologyError::InvalidFace {
                face: id,
                reason: format!("expected at least 3 vertices, got {}", vertices.len()),
            });
        }
        for (i, v) in vertices.iter().enumerate() {
            if vertices[i + 1..].contains(v) {
                return Err(TopologyError::InvalidFace {
                    face: id,
                    reason: format!("vertex {v} appears more than once"),
                });
            }
        }

        let kind = FaceKind::from_len(vertices.len());
        Ok(Self { id, vertices, kind })
    }

    /// Returns the identifier, unique within one mesh.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the boundary cycle.
    #[must_use]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Returns the shape tag.
    #[must_use]
    pub fn kind(&self) -> FaceKind {
        self.kind
    }

    /// Iterates the directed boundary pairs, including the wrap-around pair
    /// from the last vertex back to the first.
    pub fn boundary_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}
