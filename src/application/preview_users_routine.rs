use error_stack::ResultExt;
use tracing::{info, instrument, warn};

use crate::domain::user::User;
use crate::ports::routine::{Routine, RoutineError};
use crate::ports::user_source::UserSource;

/// Fetches users and logs them without sending anything anywhere.
pub struct PreviewUsersRoutine<S> {
    source: S,
}

impl<S: UserSource> PreviewUsersRoutine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    #[instrument(name = "PreviewUsersRoutine::preview", skip(self))]
    pub async fn preview(&self) -> error_stack::Result<Vec<User>, RoutineError> {
        let users = self
            .source
            .fetch_users()
            .await
            .change_context(RoutineError::FetchFailed)?;

        if users.is_empty() {
            warn!("No users found in sheet");
        }
        for (index, user) in users.iter().enumerate() {
            info!(index, "{}", user);
        }

        Ok(users)
    }
}

#[async_trait::async_trait]
impl<S: UserSource> Routine for PreviewUsersRoutine<S> {
    fn name(&self) -> &str {
        "PreviewUsersRoutine"
    }

    async fn run(&self) -> error_stack::Result<(), RoutineError> {
        let users = self.preview().await?;
        info!("{} users would be uploaded", users.len());
        Ok(())
    }
}
