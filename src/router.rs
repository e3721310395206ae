use crate::app::App;
use crate::errors::ServerError;
use crate::leads::pipeline::DEFAULT_RADIUS_KM;
use crate::leads::{LeadsError, PlaceQuery};
use crate::regions::{is_known_region, PUNE_REGIONS};
use crate::responses::{html_response, xlsx_data_uri, ResultResp};
use crate::spreadsheets::{leads_filename, leads_to_xlsx};
use crate::templates::pages::{self, Download, SearchForm};
use astra::Request;
use maud::Markup;
use std::collections::HashMap;
use tracing::{debug, info, warn};

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => {
            let form = SearchForm {
                region: PUNE_REGIONS[0],
                radius_km: DEFAULT_RADIUS_KM,
            };
            html_response(pages::home_page(&form, None))
        }
        ("GET", "/extract") => extract(&req, app),
        _ => Err(ServerError::NotFound),
    }
}

fn extract(req: &Request, app: &App) -> ResultResp {
    let query = search_query(req)?;

    let results = match app.extract(&query).and_then(|leads| {
        let buffer = leads_to_xlsx(&leads)?;
        Ok((leads, buffer))
    }) {
        Ok((leads, buffer)) => {
            let download = Download {
                href: xlsx_data_uri(&buffer),
                filename: leads_filename(&query.region),
            };
            info!(
                filename = %download.filename,
                rows = leads.len(),
                bytes = buffer.len(),
                "export ready"
            );
            pages::leads_found(&query, &leads, &download)
        }
        Err(e) => {
            log_failure(&query, &e);
            pages::leads_failed(&e)
        }
    };

    render_results(req, &query, results)
}

/// htmx swaps only the results block; plain form posts get the whole page.
fn render_results(req: &Request, query: &PlaceQuery, results: Markup) -> ResultResp {
    if req.headers().contains_key("HX-Request") {
        return html_response(results);
    }

    let form = SearchForm {
        region: &query.region,
        radius_km: query.radius_km,
    };
    html_response(pages::home_page(&form, Some(results)))
}

fn log_failure(query: &PlaceQuery, err: &LeadsError) {
    if err.is_warning() {
        warn!(region = %query.region, "{err}");
    } else {
        warn!(region = %query.region, radius_km = query.radius_km, error = %err, "extraction failed");
    }
}

fn search_query(req: &Request) -> Result<PlaceQuery, ServerError> {
    let params = parse_query(req);

    let region = params
        .get("region")
        .map(String::as_str)
        .ok_or_else(|| ServerError::BadRequest("missing region".into()))?;

    if !is_known_region(region) {
        return Err(ServerError::BadRequest(format!("unknown region: {region}")));
    }

    let radius_km = match params.get("radius") {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| ServerError::BadRequest(format!("invalid radius: {raw}")))?,
        None => DEFAULT_RADIUS_KM,
    };

    PlaceQuery::new(region, radius_km).map_err(|e| ServerError::BadRequest(e.to_string()))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
