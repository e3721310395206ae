pub mod bbox;
pub mod geocoder;
pub mod leads_error;
pub mod models;
pub mod normalize;
pub mod overpass;
pub mod pipeline;

pub use bbox::{expand, BoundingBox};
pub use geocoder::{GeocodeResult, Geocoder, NominatimClient};
pub use leads_error::LeadsError;
pub use models::Feature;
pub use normalize::{normalize, LeadRecord, LeadTable};
pub use overpass::{OverpassClient, PoiSource};
pub use pipeline::{extract_leads, PlaceQuery};
