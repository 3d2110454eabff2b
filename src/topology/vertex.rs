use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::math::Point3;

/// A mesh vertex: a positional identifier and a 3D position.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    id: usize,
    point: Point3,
}

impl Vertex {
    /// Creates a new vertex at the given point.
    #[must_use]
    pub fn new(id: usize, point: Point3) -> Self {
        Self { id, point }
    }

    /// Returns the identifier, unique within one mesh.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the 3D position of the vertex.
    #[must_use]
    pub fn point(&self) -> &Point3 {
        &self.point
    }
}

// Flattened to `{"id", "x", "y", "z"}`.
impl Serialize for Vertex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Vertex", 4)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("x", &self.point.x)?;
        state.serialize_field("y", &self.point.y)?;
        state.serialize_field("z", &self.point.z)?;
        state.end()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn serializes_flat_coordinates() {
        let v = Vertex::new(7, Point3::new(1.0, -2.0, 0.5));
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "x": 1.0, "y": -2.0, "z": 0.5}));
    }
}
