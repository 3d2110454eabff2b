pub mod api;
pub mod config;
pub mod error;
pub mod math;
pub mod operations;
pub mod topology;

pub use config::Config;
pub use error::{DrifterError, Result};
