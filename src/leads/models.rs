use serde::Deserialize;
use std::collections::HashMap;

// Nominatim /search?format=json
//  [
//   ├── lat          "18.5213738"
//   ├── lon          "73.8545071"
//   └── boundingbox  ["18.36", "18.68", "73.69", "74.01"]   (S, N, W, E)
//  ]

#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub boundingbox: Vec<String>,
    pub display_name: Option<String>,
}

// Overpass [out:json]
//  ├── elements[]
//  │    ├── type        node | way | relation
//  │    ├── id
//  │    ├── lat / lon   (nodes)
//  │    ├── center      (ways/relations with `out center`)
//  │    │    ├── lat
//  │    │    └── lon
//  │    └── tags        { "name": "...", "phone": "...", ... }
//  └── remark          (set when the server aborted the query)

#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Feature>,
    pub remark: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub id: i64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<Center>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

impl Feature {
    pub fn latitude(&self) -> Option<f64> {
        self.lat.or(self.center.map(|c| c.lat))
    }

    pub fn longitude(&self) -> Option<f64> {
        self.lon.or(self.center.map(|c| c.lon))
    }

    /// First present, non-empty tag value among `keys`, in order.
    pub fn first_tag(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|k| self.tags.get(*k))
            .map(String::as_str)
            .find(|v| !v.is_empty())
    }
}
