// templates/pages/results.rs

use crate::leads::{LeadRecord, LeadsError, PlaceQuery};
use crate::templates::{banner, card, leads_table, BannerKind};
use maud::{html, Markup};

/// Rows shown in the on-page preview; the download carries the full table.
pub const PREVIEW_ROWS: usize = 20;

/// Workbook built from the previewed table, ready to link to.
pub struct Download {
    pub href: String,
    pub filename: String,
}

pub fn leads_found(query: &PlaceQuery, leads: &[LeadRecord], download: &Download) -> Markup {
    let message = format!(
        "Found {} companies with phone numbers in {}",
        leads.len(),
        query.region
    );

    html! {
        (banner(BannerKind::Success, &message))
        (card("Preview", html! {
            (leads_table(leads, PREVIEW_ROWS))
            @if leads.len() > PREVIEW_ROWS {
                p class="caption" { "Showing first " (PREVIEW_ROWS) " of " (leads.len()) " rows." }
            }
            p {
                a
                    href=(download.href)
                    download=(download.filename)
                { "Download Excel File" }
            }
        }))
    }
}

/// Banner for a run that did not produce a table.
pub fn leads_failed(err: &LeadsError) -> Markup {
    match err {
        LeadsError::EmptyResult { .. } => banner(
            BannerKind::Warning,
            "No business data with phone numbers found in this region.",
        ),
        LeadsError::PlaceNotFound(_) => banner(BannerKind::Error, "City not found."),
        other => banner(BannerKind::Error, &format!("Error: {other}")),
    }
}
