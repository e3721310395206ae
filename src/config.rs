//! Endpoint and client-identity settings, from flags or `LEADS_*` env vars.

use clap::Args;

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
pub const DEFAULT_USER_AGENT: &str =
    "PESLeadsExtractor/1.0 (contact: pesleadsextractor@gmail.com)";

#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Nominatim search endpoint
    #[arg(long, global = true, env = "LEADS_NOMINATIM_URL", default_value = DEFAULT_NOMINATIM_URL)]
    pub nominatim_url: String,

    /// Overpass interpreter endpoint
    #[arg(long, global = true, env = "LEADS_OVERPASS_URL", default_value = DEFAULT_OVERPASS_URL)]
    pub overpass_url: String,

    /// User-Agent sent to both services (their usage policies require one)
    #[arg(long, global = true, env = "LEADS_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}
