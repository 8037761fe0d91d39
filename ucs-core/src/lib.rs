pub mod catalog;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use catalog::*;
pub use domain::*;
pub use error::*;

// Re-export external dependencies that consumers will need
pub use serde;
pub use serde_json;
