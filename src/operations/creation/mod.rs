mod make_icosidodecahedron;
mod make_polyhedron;

pub use make_icosidodecahedron::MakeIcosidodecahedron;
pub use make_polyhedron::MakePolyhedron;
