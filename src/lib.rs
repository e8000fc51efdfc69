pub mod cli;
pub mod error;
pub mod loader;
pub mod patterns;
pub mod report;
