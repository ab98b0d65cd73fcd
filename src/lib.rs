// Public API exports
pub mod adapters;
pub mod application;
pub mod cli_adapter;
pub mod domain;
pub mod ports;
pub mod prettyprint;

// Re-export key types for easy access
pub use domain::User;
pub use ports::routine::{Routine, RoutineError};
