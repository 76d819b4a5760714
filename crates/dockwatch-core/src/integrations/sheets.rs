//! Pending-departure retrieval from the spreadsheet.
//!
//! Fetches one worksheet range through the Sheets values endpoint and turns
//! the raw rows into [`PendingTask`]s. This is where the engine's input
//! invariant is enforced: rows with a blank trip id or an unparseable CPT
//! never make it past this module.

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::alert::PendingTask;
use crate::clock;
use crate::error::SheetError;

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Day-first formats accepted for the CPT column.
const CPT_FORMATS: [&str; 2] = ["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"];

const COL_TRIP: &str = "LH Trip Number";
const COL_STATION: &str = "Station Name";
const COL_DOCK: &str = "Doca";
const COL_CPT: &str = "CPT";

/// Client for one spreadsheet.
pub struct SheetSource {
    client: Client,
    base_url: String,
    spreadsheet_id: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetSource {
    pub fn new(spreadsheet_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, spreadsheet_id, token)
    }

    /// Same as [`SheetSource::new`] against a different endpoint. Used by
    /// tests to point at a local mock server.
    pub fn with_base_url(
        base_url: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            spreadsheet_id: spreadsheet_id.into(),
            token: token.into(),
        }
    }

    /// Fetch the worksheet range and parse it into pending tasks.
    pub async fn fetch(&self, worksheet: &str, range: &str) -> Result<Vec<PendingTask>, SheetError> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}!{}",
            self.base_url, self.spreadsheet_id, worksheet, range
        );
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(SheetError::Api {
                status: resp.status().as_u16(),
            });
        }
        let body: ValueRange = resp.json().await?;
        parse_rows(&body.values)
    }
}

/// Parse raw sheet rows (header row first) into tasks.
///
/// Rows the engine must never see are dropped here: blank trip ids and
/// deadlines that do not parse day-first or do not resolve to a unique
/// local time.
pub fn parse_rows(rows: &[Vec<String>]) -> Result<Vec<PendingTask>, SheetError> {
    let Some((header, data)) = rows.split_first() else {
        return Err(SheetError::EmptyRange);
    };
    if data.is_empty() {
        return Err(SheetError::EmptyRange);
    }

    let column = |name: &str| -> Result<usize, SheetError> {
        header
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| SheetError::MissingColumn(name.to_string()))
    };
    let trip_col = column(COL_TRIP)?;
    let station_col = column(COL_STATION)?;
    let dock_col = column(COL_DOCK)?;
    let cpt_col = column(COL_CPT)?;

    let mut tasks = Vec::new();
    for row in data {
        let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or("");
        let trip = cell(trip_col).trim();
        if trip.is_empty() {
            continue;
        }
        let Some(cpt) = parse_cpt(cell(cpt_col)) else {
            warn!(trip, raw_cpt = cell(cpt_col), "dropping row with unparseable CPT");
            continue;
        };
        tasks.push(PendingTask {
            trip: trip.to_string(),
            destination: cell(station_col).trim().to_string(),
            dock: cell(dock_col).to_string(),
            cpt,
        });
    }

    debug!(count = tasks.len(), "parsed pending departures");
    Ok(tasks)
}

/// Parse a day-first CPT cell and localize it to the operational zone.
///
/// Ambiguous or nonexistent local times (DST edges) are dropped rather
/// than guessed.
fn parse_cpt(raw: &str) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    let naive = CPT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())?;
    clock::ZONE.from_local_datetime(&naive).single()
}
