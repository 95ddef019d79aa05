//! HTTP client for the published routine spreadsheet.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, info};

use routine_model::Row;

use crate::decode::{SourceFormat, decode_rows};
use crate::error::{IngestError, Result};

/// Sent with every request.
const USER_AGENT: &str = concat!("routine-finder/", env!("CARGO_PKG_VERSION"));

/// A remote spreadsheet export (JSON or CSV).
pub struct RemoteSource {
    client: Client,
    url: String,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let url = url.into();
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| IngestError::Network {
                url: url.clone(),
                message: e.to_string(),
            })?;
        Ok(Self { client, url })
    }

    /// Download and decode the routine.
    pub fn fetch(&self) -> Result<Vec<Row>> {
        debug!(url = %self.url, "fetching routine");
        let network_error = |e: reqwest::Error| IngestError::Network {
            url: self.url.clone(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json, text/csv;q=0.9, */*;q=0.1")
            .send()
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let declared = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(SourceFormat::from_content_type);
        let body = response.bytes().map_err(network_error)?;
        let format = declared.unwrap_or_else(|| SourceFormat::sniff(&body));

        let rows = decode_rows(&body, format)?;
        info!(url = %self.url, rows = rows.len(), ?format, "fetched routine");
        Ok(rows)
    }
}
