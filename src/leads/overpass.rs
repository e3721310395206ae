// overpass.rs
use crate::leads::bbox::BoundingBox;
use crate::leads::models::{Feature, OverpassResponse};
use crate::leads::LeadsError;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

const FETCH_TIMEOUT: Duration = Duration::from_secs(90);

/// Server-side `[timeout:..]` budget, in seconds.
pub const QUERY_TIMEOUT_SECS: u32 = 60;

/// `(key, value)` filters selecting business-like nodes. `None` matches any value.
pub const BUSINESS_FILTERS: [(&str, Option<&str>); 3] = [
    ("office", Some("company")),
    ("shop", None),
    ("amenity", Some("company")),
];

pub trait PoiSource {
    fn fetch(&self, bbox: &BoundingBox) -> Result<Vec<Feature>, LeadsError>;
}

pub struct OverpassClient {
    client: Client,
    interpreter_url: String,
}

impl OverpassClient {
    pub fn new(interpreter_url: impl Into<String>, user_agent: &str) -> Result<Self, LeadsError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| LeadsError::Network(e.to_string()))?;

        Ok(Self::with_client(client, interpreter_url))
    }

    /// Use a preconfigured client, e.g. one with a different proxy setup.
    pub fn with_client(client: Client, interpreter_url: impl Into<String>) -> Self {
        Self {
            client,
            interpreter_url: interpreter_url.into(),
        }
    }
}

impl PoiSource for OverpassClient {
    fn fetch(&self, bbox: &BoundingBox) -> Result<Vec<Feature>, LeadsError> {
        let query = build_query(bbox);
        debug!(url = %self.interpreter_url, %query, "querying overpass");

        let resp = self
            .client
            .post(&self.interpreter_url)
            .form(&[("data", query.as_str())])
            .send()
            .map_err(|e| LeadsError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| LeadsError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(LeadsError::http("overpass", status.as_u16(), &text));
        }

        let parsed: OverpassResponse =
            serde_json::from_str(&text).map_err(|e| LeadsError::JsonParse(e.to_string()))?;

        if let Some(remark) = &parsed.remark {
            warn!(remark, "overpass returned a remark, results may be partial");
        }

        info!(elements = parsed.elements.len(), bbox = %bbox, "overpass query complete");

        Ok(parsed.elements)
    }
}

/// Overpass QL selecting business nodes inside `bbox`.
///
/// Overpass takes boxes as `(south, west, north, east)`, which differs from
/// the Nominatim order kept in [`BoundingBox`].
pub fn build_query(bbox: &BoundingBox) -> String {
    let b = bbox.clamped();
    let area = format!("({},{},{},{})", b.south, b.west, b.north, b.east);

    let mut query = format!("[out:json][timeout:{QUERY_TIMEOUT_SECS}];\n(\n");
    for (key, value) in BUSINESS_FILTERS {
        let filter = match value {
            Some(v) => format!("[\"{key}\"=\"{v}\"]"),
            None => format!("[\"{key}\"]"),
        };
        query.push_str(&format!("  node{filter}{area};\n"));
    }
    query.push_str(");\nout center;\n");

    query
}
