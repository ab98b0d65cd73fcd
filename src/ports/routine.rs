use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutineError {
    #[error("Failed to fetch users")]
    FetchFailed,
    #[error("Failed to upload user at position {index}")]
    UploadFailed { index: usize },
}

#[async_trait::async_trait]
pub trait Routine: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self) -> error_stack::Result<(), RoutineError>;
}
