#[derive(Clone)]
pub struct SpreadsheetConfig {
    pub client_email: Box<str>,
    /// PEM encoded, with real line breaks.
    pub private_key: Box<str>,
    pub spreadsheet_id: Box<str>,
}

impl SpreadsheetConfig {
    pub fn new(client_email: &str, private_key: &str, spreadsheet_id: &str) -> Self {
        Self {
            client_email: client_email.into(),
            private_key: normalize_private_key(private_key).into(),
            spreadsheet_id: spreadsheet_id.into(),
        }
    }
}

impl std::fmt::Debug for SpreadsheetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpreadsheetConfig")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .finish()
    }
}

/// Keys kept in a single-line environment variable carry escaped newlines.
pub fn normalize_private_key(raw: &str) -> String {
    raw.replace("\\n", "\n")
}
