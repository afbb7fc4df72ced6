pub mod address;

// Re-export commonly used types
pub use address::*;
