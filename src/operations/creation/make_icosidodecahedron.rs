use tracing::debug;

use crate::error::Result;
use crate::math::{golden_ratio, Point3};
use crate::operations::transform::{validate_radius, ProjectToSphere};
use crate::topology::Mesh;

use super::MakePolyhedron;

/// Triangular faces, counter-clockwise seen from outside.
const TRIANGLES: [[usize; 3]; 20] = [
    [0, 14, 18],
    [0, 20, 16],
    [1, 17, 21],
    [1, 19, 15],
    [2, 6, 7],
    [2, 11, 10],
    [3, 9, 8],
    [3, 12, 13],
    [4, 22, 24],
    [4, 25, 23],
    [5, 27, 29],
    [5, 28, 26],
    [6, 14, 22],
    [7, 23, 15],
    [8, 24, 16],
    [9, 17, 25],
    [10, 26, 18],
    [11, 19, 27],
    [12, 20, 28],
    [13, 29, 21],
];

/// Pentagonal faces, counter-clockwise seen from outside.
const PENTAGONS: [[usize; 5]; 12] = [
    [0, 16, 24, 22, 14],
    [0, 18, 26, 28, 20],
    [1, 15, 23, 25, 17],
    [1, 21, 29, 27, 19],
    [2, 7, 15, 19, 11],
    [2, 10, 18, 14, 6],
    [3, 8, 16, 20, 12],
    [3, 13, 21, 17, 9],
    [4, 23, 7, 6, 22],
    [4, 24, 8, 9, 25],
    [5, 26, 10, 11, 27],
    [5, 29, 13, 12, 28],
];

/// The 30 vertices of a regular icosidodecahedron of circumradius 2.
///
/// The six axis points `(0, 0, ±2)` and their permutations, followed by the
/// cyclic permutations of `(±1, ±phi, ±1/phi)`.
fn reference_points() -> [Point3; 30] {
    let phi = golden_ratio();
    let ip = 1.0 / phi;
    [
        Point3::new(0.0, 0.0, 2.0),
        Point3::new(0.0, 0.0, -2.0),
        Point3::new(0.0, 2.0, 0.0),
        Point3::new(0.0, -2.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(-2.0, 0.0, 0.0),
        Point3::new(1.0, phi, ip),
        Point3::new(1.0, phi, -ip),
        Point3::new(1.0, -phi, ip),
        Point3::new(1.0, -phi, -ip),
        Point3::new(-1.0, phi, ip),
        Point3::new(-1.0, phi, -ip),
        Point3::new(-1.0, -phi, ip),
        Point3::new(-1.0, -phi, -ip),
        Point3::new(ip, 1.0, phi),
        Point3::new(ip, 1.0, -phi),
        Point3::new(ip, -1.0, phi),
        Point3::new(ip, -1.0, -phi),
        Point3::new(-ip, 1.0, phi),
        Point3::new(-ip, 1.0, -phi),
        Point3::new(-ip, -1.0, phi),
        Point3::new(-ip, -1.0, -phi),
        Point3::new(phi, ip, 1.0),
        Point3::new(phi, ip, -1.0),
        Point3::new(phi, -ip, 1.0),
        Point3::new(phi, -ip, -1.0),
        Point3::new(-phi, ip, 1.0),
        Point3::new(-phi, ip, -1.0),
        Point3::new(-phi, -ip, 1.0),
        Point3::new(-phi, -ip, -1.0),
    ]
}

/// Creates the icosidodecahedron "planet" mesh on a sphere of given radius.
///
/// The topology is fixed: 30 vertices, 20 triangles, 12 pentagons and 60
/// edges, each edge bordering one triangle and one pentagon. Output is fully
/// determined by the radius.
pub struct MakeIcosidodecahedron {
    radius: f64,
}

impl MakeIcosidodecahedron {
    /// Creates a new `MakeIcosidodecahedron` operation.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Executes the operation, returning the mesh.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRadius`](crate::error::GeometryError::InvalidRadius)
    /// if the radius is not finite or not strictly positive.
    pub fn execute(&self) -> Result<Mesh> {
        validate_radius(self.radius)?;

        let mut points = reference_points().to_vec();
        ProjectToSphere::new(self.radius).execute(&mut points)?;

        let cycles = TRIANGLES
            .iter()
            .map(|t| t.to_vec())
            .chain(PENTAGONS.iter().map(|p| p.to_vec()))
            .collect();

        debug!(radius = self.radius, "generating icosidodecahedron");
        MakePolyhedron::new(points, cycles).execute()
    }
}
