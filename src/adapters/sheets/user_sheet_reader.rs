use error_stack::Report;
use tracing::{info, instrument};

use crate::adapters::config::sheets_config::SpreadsheetConfig;
use crate::domain::sheets::a1_notation::A1Notation;
use crate::domain::sheets::header_row::users_from_values;
use crate::domain::user::User;
use crate::ports::user_source::UserSource;

use super::spreadsheet_manager::{SpreadsheetManager, SpreadsheetManagerError};

/// Reads users from the first sheet of a spreadsheet.
///
/// Authentication happens on every fetch, so a reader can be built before
/// anything touches the network.
#[derive(Debug, Clone)]
pub struct UserSheetReader {
    config: SpreadsheetConfig,
}

impl UserSheetReader {
    pub fn new(config: SpreadsheetConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl UserSource for UserSheetReader {
    type Error = SpreadsheetManagerError;

    #[instrument(name = "UserSheetReader::fetch_users", skip(self))]
    async fn fetch_users(&self) -> error_stack::Result<Vec<User>, SpreadsheetManagerError> {
        let manager = SpreadsheetManager::new(self.config.clone()).await?;
        let sheet_title = manager.fetch_first_sheet_title().await?;

        info!("Reading users from sheet '{}'", sheet_title);
        let values = manager
            .read_range(&A1Notation::whole_sheet(&sheet_title))
            .await?;

        users_from_sheet_values(values)
    }
}

pub fn users_from_sheet_values(
    values: Vec<Vec<serde_json::Value>>,
) -> error_stack::Result<Vec<User>, SpreadsheetManagerError> {
    users_from_values(values).map_err(|err| {
        let column = err.column;
        Report::new(err).change_context(SpreadsheetManagerError::MissingColumn(column))
    })
}
