use crate::domain::user::User;

/// Where user records come from.
#[async_trait::async_trait]
pub trait UserSource: Send + Sync {
    type Error: error_stack::Context;

    /// Returns every record, in the order the source holds them.
    async fn fetch_users(&self) -> error_stack::Result<Vec<User>, Self::Error>;
}
