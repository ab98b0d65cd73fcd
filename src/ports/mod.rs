pub mod routine;
pub mod user_sink;
pub mod user_source;
