pub mod auth;
pub mod http_client;
pub mod spreadsheet_manager;
pub mod user_sheet_reader;
