/// Command-line parsing and run orchestration
pub mod cli;
/// Generation constants and validated configuration
pub mod configuration;
/// Multi-page document assembly and export
pub mod document;
/// Error types shared across the crate
pub mod error;
/// Page progress display
pub mod progress;
