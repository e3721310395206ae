// templates/pages/home.rs

use crate::leads::pipeline::{MAX_RADIUS_KM, MIN_RADIUS_KM};
use crate::regions::PUNE_REGIONS;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Current selections of the search form.
pub struct SearchForm<'a> {
    pub region: &'a str,
    pub radius_km: u32,
}

pub fn home_page(form: &SearchForm, results: Option<Markup>) -> Markup {
    desktop_layout(
        "PES Cold data extractor",
        html! {
            main {
                h1 { "Pvt Company Data Leads Extractor" }
                p class="caption" { "Free business data fetcher using OpenStreetMap" }

                (search_form(form))

                div id="results" {
                    @if let Some(results) = results {
                        (results)
                    }
                }
            }
        },
    )
}

pub fn search_form(form: &SearchForm) -> Markup {
    html! {
        form
            class="card"
            action="/extract"
            method="get"
            hx-get="/extract"
            hx-target="#results"
            hx-swap="innerHTML"
            hx-disabled-elt="button"
        {
            label for="region" { "Select Pune region:" }
            select name="region" id="region" required {
                @for region in PUNE_REGIONS {
                    option value=(region) selected[*region == form.region] { (region) }
                }
            }

            label for="radius" {
                "Search Radius (km): "
                output id="radius-value" { (form.radius_km) }
            }
            input
                type="range"
                id="radius"
                name="radius"
                min=(MIN_RADIUS_KM)
                max=(MAX_RADIUS_KM)
                value=(form.radius_km)
                oninput="document.getElementById('radius-value').value = this.value";

            button type="submit" class="primary" {
                span class="btn-text" { "Find Data" }
                span class="spinner" aria-hidden="true" { " Fetching business data…" }
            }
        }
    }
}
