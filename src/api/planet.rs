use serde::Serialize;
use uuid::Uuid;

use crate::error::Result;
use crate::operations::creation::MakeIcosidodecahedron;
use crate::topology::Mesh;

/// Radius used when the caller does not ask for one.
pub const DEFAULT_PLANET_RADIUS: f64 = 1.0;

/// Counts and invariants derived from a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshMetadata {
    pub vertex_count: usize,
    pub face_count: usize,
    pub edge_count: usize,
    pub genus: i64,
}

impl MeshMetadata {
    /// Computes the metadata of `mesh`.
    #[must_use]
    pub fn of(mesh: &Mesh) -> Self {
        Self {
            vertex_count: mesh.vertices().len(),
            face_count: mesh.faces().len(),
            edge_count: mesh.edges().len(),
            genus: mesh.genus(),
        }
    }
}

/// A generated planet as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetResponse {
    planet_id: String,
    mesh: Mesh,
    metadata: MeshMetadata,
}

impl PlanetResponse {
    /// Generates a new planet of the given radius under a fresh random id.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not finite or not strictly positive.
    pub fn generate(radius: f64) -> Result<Self> {
        let mesh = MakeIcosidodecahedron::new(radius).execute()?;
        Ok(Self::from_mesh(Uuid::new_v4().to_string(), mesh))
    }

    /// Wraps an existing mesh, computing its metadata.
    #[must_use]
    pub fn from_mesh(planet_id: String, mesh: Mesh) -> Self {
        let metadata = MeshMetadata::of(&mesh);
        Self {
            planet_id,
            mesh,
            metadata,
        }
    }

    #[must_use]
    pub fn planet_id(&self) -> &str {
        &self.planet_id
    }

    #[must_use]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    #[must_use]
    pub fn metadata(&self) -> MeshMetadata {
        self.metadata
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn metadata_matches_mesh() {
        let planet = PlanetResponse::generate(DEFAULT_PLANET_RADIUS).unwrap();
        assert_eq!(
            planet.metadata(),
            MeshMetadata {
                vertex_count: 30,
                face_count: 32,
                edge_count: 60,
                genus: 0,
            }
        );
    }

    #[test]
    fn ids_are_fresh_but_meshes_equal() {
        let a = PlanetResponse::generate(1.0).unwrap();
        let b = PlanetResponse::generate(1.0).unwrap();
        assert_ne!(a.planet_id(), b.planet_id());
        assert!(Uuid::parse_str(a.planet_id()).is_ok());
        assert_eq!(a.mesh(), b.mesh());
    }

    #[test]
    fn invalid_radius_is_rejected() {
        assert!(PlanetResponse::generate(0.0).is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let planet = PlanetResponse::generate(1.0).unwrap();
        let json = serde_json::to_value(&planet).unwrap();
        assert!(json["planetId"].is_string());
        assert_eq!(json["metadata"]["vertexCount"], 30);
        assert_eq!(json["metadata"]["faceCount"], 32);
        assert_eq!(json["metadata"]["edgeCount"], 60);
        assert_eq!(json["metadata"]["genus"], 0);
        assert_eq!(json["mesh"]["faces"][0]["type"], "triangle");
        assert_eq!(json["mesh"]["faces"][31]["type"], "pentagon");
    }
}
