mod derive_edges;
mod is_valid;

pub use derive_edges::DeriveEdges;
pub use is_valid::IsValid;
