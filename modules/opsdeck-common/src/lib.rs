pub mod color;
pub mod config;
pub mod error;
pub mod highlight;
pub mod types;

pub use config::Config;
pub use error::OpsdeckError;
pub use types::*;
