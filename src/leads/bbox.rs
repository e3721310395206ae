// bbox.rs
use std::fmt;

/// Length of one degree of latitude, in km.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Below this the longitude degree has collapsed (mid latitude at a pole).
const MIN_COS_LAT: f64 = 1e-12;

/// Edges in Nominatim's native order: south, north, west, east.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl BoundingBox {
    pub fn new(south: f64, north: f64, west: f64, east: f64) -> Self {
        Self {
            south,
            north,
            west,
            east,
        }
    }

    pub fn mid_latitude(&self) -> f64 {
        (self.south + self.north) / 2.0
    }

    /// Copy with every edge clamped to valid WGS84 ranges.
    pub fn clamped(&self) -> Self {
        Self {
            south: self.south.clamp(-90.0, 90.0),
            north: self.north.clamp(-90.0, 90.0),
            west: self.west.clamp(-180.0, 180.0),
            east: self.east.clamp(-180.0, 180.0),
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[S {:.5}, N {:.5}, W {:.5}, E {:.5}]",
            self.south, self.north, self.west, self.east
        )
    }
}

/// Pad `bbox` outward by `padding_km` on every side.
///
/// Latitude grows by `padding_km / 111` degrees. Longitude grows by the same
/// distance scaled by `1 / cos(mid latitude)`, since longitude degrees shrink
/// towards the poles. A box centred on a pole has no usable longitude scale,
/// so its west/east edges are widened to the whole globe instead.
pub fn expand(bbox: &BoundingBox, padding_km: f64) -> BoundingBox {
    let pad_lat = padding_km / KM_PER_DEGREE;
    let cos_mid = bbox.mid_latitude().to_radians().cos();

    let (west, east) = if cos_mid > MIN_COS_LAT {
        let pad_lon = padding_km / (KM_PER_DEGREE * cos_mid);
        (bbox.west - pad_lon, bbox.east + pad_lon)
    } else if padding_km == 0.0 {
        (bbox.west, bbox.east)
    } else {
        (-180.0, 180.0)
    };

    BoundingBox {
        south: bbox.south - pad_lat,
        north: bbox.north + pad_lat,
        west,
        east,
    }
}
