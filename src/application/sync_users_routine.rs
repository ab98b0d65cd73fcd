use error_stack::ResultExt;
use tracing::{info, instrument};

use crate::ports::routine::{Routine, RoutineError};
use crate::ports::user_sink::UserSink;
use crate::ports::user_source::UserSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub fetched: usize,
    pub uploaded: usize,
}

/// Copies every user from a source into a sink, one at a time.
///
/// The first failed upload stops the run: users already sent stay sent and
/// the remaining ones are never attempted.
pub struct SyncUsersRoutine<S, K> {
    source: S,
    sink: K,
}

impl<S, K> SyncUsersRoutine<S, K>
where
    S: UserSource,
    K: UserSink,
{
    pub fn new(source: S, sink: K) -> Self {
        Self { source, sink }
    }

    #[instrument(name = "SyncUsersRoutine::sync", skip(self))]
    pub async fn sync(&self) -> error_stack::Result<SyncReport, RoutineError> {
        let users = self
            .source
            .fetch_users()
            .await
            .change_context(RoutineError::FetchFailed)?;

        info!("Users fetched from sheet: {:?}", users);

        let mut uploaded = 0;
        for (index, user) in users.iter().enumerate() {
            let response = self
                .sink
                .add_user(user)
                .await
                .change_context(RoutineError::UploadFailed { index })
                .attach_printable_lazy(|| format!("User: {}", user))?;

            info!("User added: {}", response);
            uploaded += 1;
        }

        info!("Process completed successfully.");

        Ok(SyncReport {
            fetched: users.len(),
            uploaded,
        })
    }
}

#[async_trait::async_trait]
impl<S, K> Routine for SyncUsersRoutine<S, K>
where
    S: UserSource,
    K: UserSink,
{
    fn name(&self) -> &str {
        "SyncUsersRoutine"
    }

    async fn run(&self) -> error_stack::Result<(), RoutineError> {
        let report = self.sync().await?;
        info!(
            fetched = report.fetched,
            uploaded = report.uploaded,
            "✅ {}: OK",
            self.name()
        );
        Ok(())
    }
}
