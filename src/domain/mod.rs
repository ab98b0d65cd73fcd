pub mod sheets;
pub mod user;

// Re-export commonly used types
pub use user::User;
