// normalize.rs
use crate::leads::models::Feature;
use std::collections::HashSet;
use tracing::trace;

pub const PHONE_KEYS: [&str; 2] = ["phone", "contact:phone"];
pub const NAME_KEYS: [&str; 4] = ["name", "brand", "office", "shop"];
pub const EMAIL_KEYS: [&str; 2] = ["email", "contact:email"];
pub const ADDRESS_KEYS: [&str; 4] = [
    "addr:housenumber",
    "addr:street",
    "addr:city",
    "addr:postcode",
];

/// One row of the exported lead table.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadRecord {
    pub company_name: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

pub type LeadTable = Vec<LeadRecord>;

impl LeadRecord {
    /// Builds a record from a feature's tags, or `None` when the feature has
    /// no phone number.
    pub fn from_feature(feature: &Feature) -> Option<Self> {
        let phone = feature.first_tag(&PHONE_KEYS)?;

        let address = ADDRESS_KEYS
            .iter()
            .filter_map(|k| feature.tags.get(*k))
            .filter(|v| !v.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        Some(Self {
            company_name: feature.first_tag(&NAME_KEYS).map(str::to_string),
            phone: phone.to_string(),
            email: feature.first_tag(&EMAIL_KEYS).map(str::to_string),
            address,
            latitude: feature.latitude(),
            longitude: feature.longitude(),
        })
    }
}

/// Filter stage: keeps only features that carry a phone number.
pub fn filter_contactable(features: &[Feature]) -> LeadTable {
    features
        .iter()
        .filter_map(|feature| {
            let lead = LeadRecord::from_feature(feature);
            if lead.is_none() {
                trace!(id = feature.id, kind = %feature.kind, "no phone, skipping");
            }
            lead
        })
        .collect()
}

/// Dedup stage: first record per `(company name, phone)` wins, order kept.
pub fn dedup_leads(leads: LeadTable) -> LeadTable {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(leads.len());

    for lead in leads {
        if seen.insert((lead.company_name.clone(), lead.phone.clone())) {
            out.push(lead);
        }
    }

    out
}

pub fn normalize(features: &[Feature]) -> LeadTable {
    dedup_leads(filter_contactable(features))
}
