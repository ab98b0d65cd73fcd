use error_stack::ResultExt;
use google_sheets4::{hyper, hyper_rustls};

use super::spreadsheet_manager::SpreadsheetManagerError;

pub type HttpsConnector = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;

/// Fails when the platform trust store cannot be loaded.
pub fn http_client(
) -> error_stack::Result<hyper::Client<HttpsConnector>, SpreadsheetManagerError> {
    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .change_context(SpreadsheetManagerError::Authentication)
        .attach_printable("Could not load native root certificates")?
        .https_or_http()
        .enable_http1()
        .build();

    Ok(hyper::Client::builder().build(connector))
}
