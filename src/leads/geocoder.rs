// geocoder.rs
use crate::leads::bbox::BoundingBox;
use crate::leads::models::NominatimPlace;
use crate::leads::LeadsError;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT_LANGUAGE;
use std::time::Duration;
use tracing::{debug, info};

const GEOCODE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocodeResult {
    pub lat: f64,
    pub lon: f64,
    pub bbox: BoundingBox,
}

pub trait Geocoder {
    fn geocode(&self, place: &str) -> Result<GeocodeResult, LeadsError>;
}

pub struct NominatimClient {
    client: Client,
    search_url: String,
}

impl NominatimClient {
    pub fn new(search_url: impl Into<String>, user_agent: &str) -> Result<Self, LeadsError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(GEOCODE_TIMEOUT)
            .build()
            .map_err(|e| LeadsError::Network(e.to_string()))?;

        Ok(Self::with_client(client, search_url))
    }

    /// Use a preconfigured client, e.g. one with a different proxy setup.
    pub fn with_client(client: Client, search_url: impl Into<String>) -> Self {
        Self {
            client,
            search_url: search_url.into(),
        }
    }
}

impl Geocoder for NominatimClient {
    fn geocode(&self, place: &str) -> Result<GeocodeResult, LeadsError> {
        if place.trim().is_empty() {
            return Err(LeadsError::InvalidQuery("place must not be empty".into()));
        }

        debug!(place, url = %self.search_url, "geocoding");

        let resp = self
            .client
            .get(&self.search_url)
            .header(ACCEPT_LANGUAGE, "en")
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .map_err(|e| LeadsError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| LeadsError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(LeadsError::http("nominatim", status.as_u16(), &text));
        }

        let places: Vec<NominatimPlace> =
            serde_json::from_str(&text).map_err(|e| LeadsError::JsonParse(e.to_string()))?;

        let first = places
            .into_iter()
            .next()
            .ok_or_else(|| LeadsError::PlaceNotFound(place.to_string()))?;

        let result = geocode_result_from_place(&first)?;

        info!(
            place,
            display_name = first.display_name.as_deref().unwrap_or(""),
            lat = result.lat,
            lon = result.lon,
            bbox = %result.bbox,
            "geocoded"
        );

        Ok(result)
    }
}

fn parse_coord(field: &str, raw: &str) -> Result<f64, LeadsError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| LeadsError::UnexpectedShape(format!("{field} = {raw:?}: {e}")))
}

/// Nominatim sends coordinates as strings and the bounding box as
/// `[south, north, west, east]`.
pub fn geocode_result_from_place(place: &NominatimPlace) -> Result<GeocodeResult, LeadsError> {
    let lat = parse_coord("lat", &place.lat)?;
    let lon = parse_coord("lon", &place.lon)?;

    let edges = place
        .boundingbox
        .iter()
        .map(|raw| parse_coord("boundingbox", raw))
        .collect::<Result<Vec<_>, _>>()?;

    let bbox = match edges.as_slice() {
        [s, n, w, e] => BoundingBox::new(*s, *n, *w, *e),
        other => {
            return Err(LeadsError::UnexpectedShape(format!(
                "boundingbox has {} entries, expected 4",
                other.len()
            )))
        }
    };

    Ok(GeocodeResult { lat, lon, bbox })
}
