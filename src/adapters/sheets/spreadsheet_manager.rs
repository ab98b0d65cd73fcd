use error_stack::{report, ResultExt};
use google_sheets4::{
    api::{Scope, Sheet},
    Sheets,
};
use std::fmt::Debug;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::adapters::config::sheets_config::SpreadsheetConfig;
use crate::domain::sheets::a1_notation::A1Notation;

use super::{
    auth::{self},
    http_client::{self, HttpsConnector},
};

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    hub: Sheets<HttpsConnector>,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetManager {{ config: {:?} }}", self.config)
    }
}

#[derive(Error, Debug)]
pub enum SpreadsheetManagerError {
    #[error("Failed to authenticate with the service account")]
    Authentication,
    #[error("Failed to fetch spreadsheet")]
    FetchSpreadsheet,
    #[error("Spreadsheet has no sheets")]
    NoSheets,
    #[error("Failed to fetch range")]
    FetchValues,
    #[error("Column '{0}' not found in header row")]
    MissingColumn(&'static str),
}

impl SpreadsheetManager {
    #[instrument(name = "SpreadsheetManager::new")]
    pub async fn new(config: SpreadsheetConfig) -> error_stack::Result<Self, SpreadsheetManagerError> {
        let client = http_client::http_client()?;
        let auth = auth::auth(&config, client.clone()).await?;
        let hub = Sheets::new(client, auth);

        Ok(SpreadsheetManager { config, hub })
    }

    /// Title of the sheet at position 0, whatever it is named.
    #[instrument]
    pub async fn fetch_first_sheet_title(&self) -> error_stack::Result<String, SpreadsheetManagerError> {
        let (_, spreadsheet) = self
            .hub
            .spreadsheets()
            .get(&self.config.spreadsheet_id)
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await
            .change_context(SpreadsheetManagerError::FetchSpreadsheet)
            .attach_printable_lazy(|| {
                format!("Spreadsheet id: {}", self.config.spreadsheet_id)
            })?;

        let title = first_sheet_title(spreadsheet.sheets.unwrap_or_default())?;

        debug!(sheet_title = %title, "First sheet found");
        Ok(title)
    }

    /// Rows of the range, each row trimmed of trailing empty cells.
    #[instrument]
    pub async fn read_range(
        &self,
        range: &A1Notation,
    ) -> error_stack::Result<Vec<Vec<serde_json::Value>>, SpreadsheetManagerError> {
        let (_, value_range) = self
            .hub
            .spreadsheets()
            .values_get(&self.config.spreadsheet_id, range.as_ref())
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await
            .change_context(SpreadsheetManagerError::FetchValues)
            .attach_printable_lazy(|| format!("Failed to fetch values for range {}", range))?;

        let values = value_range.values.unwrap_or_default();
        debug!(rows = values.len(), "Range fetched");
        Ok(values)
    }
}

/// Picks the sheet with the lowest position, ignoring titles and list order.
///
/// A missing index is the proto3 default, 0.
pub fn first_sheet_title(sheets: Vec<Sheet>) -> error_stack::Result<String, SpreadsheetManagerError> {
    sheets
        .into_iter()
        .filter_map(|sheet| sheet.properties)
        .min_by_key(|properties| properties.index.unwrap_or_default())
        .and_then(|properties| properties.title)
        .ok_or_else(|| report!(SpreadsheetManagerError::NoSheets))
}
