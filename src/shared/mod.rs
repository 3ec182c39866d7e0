/// Shared utilities used across every layer
pub mod error;
pub mod paths;
pub mod result;
pub mod security;

pub use result::Result;
