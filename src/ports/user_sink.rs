use crate::domain::user::User;

#[async_trait::async_trait]
pub trait UserSink: Send + Sync {
    type Error: error_stack::Context;

    /// Submits a single record and returns whatever the receiving side answered.
    async fn add_user(&self, user: &User) -> error_stack::Result<serde_json::Value, Self::Error>;
}
