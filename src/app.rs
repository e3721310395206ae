// app.rs
use crate::config::Config;
use crate::leads::{
    extract_leads, Geocoder, LeadTable, LeadsError, NominatimClient, OverpassClient, PlaceQuery,
    PoiSource,
};

/// Outbound clients shared by every request. Holds no mutable state.
pub struct App {
    pub geocoder: Box<dyn Geocoder + Send + Sync>,
    pub pois: Box<dyn PoiSource + Send + Sync>,
}

impl App {
    pub fn new(
        geocoder: impl Geocoder + Send + Sync + 'static,
        pois: impl PoiSource + Send + Sync + 'static,
    ) -> Self {
        Self {
            geocoder: Box::new(geocoder),
            pois: Box::new(pois),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, LeadsError> {
        let geocoder = NominatimClient::new(&config.nominatim_url, &config.user_agent)?;
        let pois = OverpassClient::new(&config.overpass_url, &config.user_agent)?;
        Ok(Self::new(geocoder, pois))
    }

    pub fn extract(&self, query: &PlaceQuery) -> Result<LeadTable, LeadsError> {
        extract_leads(self.geocoder.as_ref(), self.pois.as_ref(), query)
    }
}
