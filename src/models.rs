use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body for the BLS `timeseries/data` endpoint.
///
/// Field names follow the wire format exactly; the API expects the year
/// bounds as strings. Immutable once constructed, exists only to be
/// serialized into the POST body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(rename = "registrationKey")]
    pub registration_key: String,
    pub seriesid: Vec<String>,
    pub startyear: String,
    pub endyear: String,
}

impl Payload {
    pub fn new(
        registration_key: String,
        seriesid: Vec<String>,
        start_year: i32,
        end_year: i32,
    ) -> Self {
        Self {
            registration_key,
            seriesid,
            startyear: start_year.to_string(),
            endyear: end_year.to_string(),
        }
    }
}

/// Top-level BLS response.
///
/// `status` and `Results` are missing on upstream failures, so both are
/// optional and callers must check presence before traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: Option<String>,
    #[serde(rename = "responseTime")]
    pub response_time: Option<u64>,
    #[serde(default)]
    pub message: Vec<String>,
    #[serde(rename = "Results")]
    pub results: Option<Results>,
}

impl ApiResponse {
    /// Parse a raw response body. No partial parsing; a shape mismatch
    /// is an error for the caller to report.
    pub fn parse(body: &str) -> anyhow::Result<Self> {
        use anyhow::Context;
        serde_json::from_str(body).context("decode BLS response body")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Results {
    #[serde(default)]
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    #[serde(rename = "seriesID")]
    pub series_id: String,
    #[serde(default)]
    pub data: Vec<DataPoint>,
}

/// One observation within a series.
///
/// `value` is numeric-looking but transmitted as text; it is kept as a
/// string rather than coerced. Footnote maps carry heterogeneous values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPoint {
    pub year: String,
    pub period: String,
    #[serde(rename = "periodName")]
    pub period_name: String,
    pub value: String,
    #[serde(default)]
    pub footnotes: Vec<Map<String, Value>>,
}
