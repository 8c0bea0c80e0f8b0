//! Google Sheets v4 `values.get` client authenticated with an API key.

use crate::{
    cell::{Cell, Grid},
    error::{Error, Result},
    grid::GridSource,
};
use async_trait::async_trait;
use log::{info, warn};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;

const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const MAX_TRIES: u32 = 3;
const FIRST_BACKOFF: Duration = Duration::from_millis(1000);

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

impl From<ValueRange> for Grid {
    fn from(value: ValueRange) -> Self {
        value
            .values
            .into_iter()
            .map(|row| row.into_iter().map(Cell::from).collect())
            .collect()
    }
}

/// Reads published stocking sheets over HTTPS.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: Client,
    api_key: String,
    base_url: String,
    backoff: Duration,
}

impl SheetsClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        SheetsClient {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: SHEETS_API.to_string(),
            backoff: FIRST_BACKOFF,
        }
    }

    /// Point the client at another server speaking the Sheets API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Wait before the first retry; doubled after every failed attempt.
    pub fn backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// `.../spreadsheets/<id>/values/'<sheet>'!<range>?key=<key>` with every
    /// segment percent-encoded ("/" in sheet names included).
    fn values_url(&self, spreadsheet_id: &str, sheet_name: &str, range: &str) -> Result<Url> {
        let a1 = format!("'{}'!{}", sheet_name.replace('\'', "''"), range);
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::transport(sheet_name, range, e))?;
        url.path_segments_mut()
            .map_err(|_| Error::transport(sheet_name, range, "base url cannot take a path"))?
            .pop_if_empty()
            .extend([spreadsheet_id, "values", a1.as_str()]);
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

#[async_trait]
impl GridSource for SheetsClient {
    /// Fetch a range, retrying with exponential backoff.
    async fn fetch(&self, spreadsheet_id: &str, sheet_name: &str, range: &str) -> Result<Grid> {
        let url = self.values_url(spreadsheet_id, sheet_name, range)?;
        let mut sleep = self.backoff;
        let mut last_error = String::new();

        for attempt in 1..=MAX_TRIES {
            match self.client.get(url.clone()).send().await {
                Ok(response) if response.status() != StatusCode::OK => {
                    last_error = format!("bad response status {}", response.status());
                    warn!(
                        "Attempt {}/{}: {} for {}!{}",
                        attempt, MAX_TRIES, last_error, sheet_name, range
                    );
                }
                Ok(response) => match response.json::<ValueRange>().await {
                    Ok(value_range) => return Ok(value_range.into()),
                    Err(e) => {
                        last_error = format!("failed to read response body: {e}");
                        warn!(
                            "Attempt {}/{}: {} for {}!{}",
                            attempt, MAX_TRIES, last_error, sheet_name, range
                        );
                    }
                },
                Err(e) => {
                    last_error = format!("request failed: {e}");
                    warn!(
                        "Attempt {}/{}: {} for {}!{}",
                        attempt, MAX_TRIES, last_error, sheet_name, range
                    );
                }
            }

            if attempt < MAX_TRIES {
                info!(
                    "Sleeping for {} milliseconds before retrying {}!{}",
                    sleep.as_millis(),
                    sheet_name,
                    range
                );
                tokio::time::sleep(sleep).await;
                sleep *= 2;
            }
        }

        Err(Error::transport(
            sheet_name,
            range,
            format!("all {MAX_TRIES} attempts failed, last error: {last_error}"),
        ))
    }
}
