// pipeline.rs
use crate::leads::bbox::expand;
use crate::leads::geocoder::Geocoder;
use crate::leads::normalize::{normalize, LeadTable};
use crate::leads::overpass::PoiSource;
use crate::leads::LeadsError;
use tracing::info;

pub const MIN_RADIUS_KM: u32 = 2;
pub const MAX_RADIUS_KM: u32 = 20;
pub const DEFAULT_RADIUS_KM: u32 = 8;

/// Region name plus search radius for a single extraction run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceQuery {
    pub region: String,
    pub radius_km: u32,
}

impl PlaceQuery {
    pub fn new(region: &str, radius_km: u32) -> Result<Self, LeadsError> {
        let region = region.trim();
        if region.is_empty() {
            return Err(LeadsError::InvalidQuery("region must not be empty".into()));
        }

        if !(MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&radius_km) {
            return Err(LeadsError::InvalidQuery(format!(
                "radius must be between {MIN_RADIUS_KM} and {MAX_RADIUS_KM} km, got {radius_km}"
            )));
        }

        Ok(Self {
            region: region.to_string(),
            radius_km,
        })
    }
}

/// geocode → expand → fetch → normalize.
///
/// A run that finds no phone-bearing leads ends in
/// [`LeadsError::EmptyResult`] so callers can report it as a warning.
pub fn extract_leads(
    geocoder: &dyn Geocoder,
    pois: &dyn PoiSource,
    query: &PlaceQuery,
) -> Result<LeadTable, LeadsError> {
    let geo = geocoder.geocode(&query.region)?;
    let bbox = expand(&geo.bbox, f64::from(query.radius_km));

    let features = pois.fetch(&bbox)?;
    let leads = normalize(&features);

    info!(
        region = %query.region,
        radius_km = query.radius_km,
        features = features.len(),
        leads = leads.len(),
        "extraction complete"
    );

    if leads.is_empty() {
        return Err(LeadsError::EmptyResult {
            region: query.region.clone(),
        });
    }

    Ok(leads)
}
