use crate::app::App;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{node, pune_bbox, sample_features, test_app, FakeGeocoder, FakePois};
use astra::Body;
use http::{Method, Request};
use std::io::Read;

fn get(app: &App, uri: &str, htmx: bool) -> Result<String, ServerError> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    let req = builder.body(Body::empty()).unwrap();

    let resp = handle(req, app)?;
    assert_eq!(resp.status(), 200);

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    Ok(body)
}

#[test]
fn extract_shows_success_banner_preview_and_download_link() {
    let app = test_app(sample_features());

    let body = get(&app, "/extract?region=Baner&radius=8", false).expect("Handler failed");

    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Found 2 companies with phone numbers in Baner"));
    assert!(body.contains("Acme"));
    assert!(body.contains("Globex"));
    assert!(!body.contains("NoPhoneCo"));
    assert!(body.contains(r#"download="Baner_pvt_leads.xlsx""#));
}

#[test]
fn extract_returns_partial_html_for_htmx() {
    let app = test_app(sample_features());

    let body = get(&app, "/extract?region=Viman+Nagar&radius=5", true).expect("Handler failed");

    assert!(body.contains("Found 2 companies with phone numbers in Viman Nagar"));
    assert!(body.contains(r#"download="Viman_Nagar_pvt_leads.xlsx""#));
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}

#[test]
fn full_page_keeps_selected_region_and_radius() {
    let app = test_app(sample_features());

    let body = get(&app, "/extract?region=Wakad&radius=15", false).expect("Handler failed");

    assert!(body.contains(r#"<option value="Wakad" selected>"#));
    assert!(body.contains(r#"value="15""#));
}

#[test]
fn preview_is_limited_to_twenty_rows() {
    let features = (0..25)
        .map(|i| {
            let name = format!("Shop {i:02}");
            let phone = format!("020-{i:04}");
            node(i, 18.5, 73.8, &[("name", name.as_str()), ("phone", phone.as_str())])
        })
        .collect();
    let app = test_app(features);

    let body = get(&app, "/extract?region=Pune&radius=8", true).expect("Handler failed");

    assert!(body.contains("Found 25 companies"));
    assert!(body.contains("Shop 19"));
    assert!(!body.contains("Shop 20"));
    assert!(body.contains("Showing first 20 of 25 rows."));
}

#[test]
fn no_leads_renders_warning() {
    let app = test_app(vec![node(1, 18.5, 73.8, &[("name", "NoPhoneCo"), ("shop", "yes")])]);

    let body = get(&app, "/extract?region=Hadapsar&radius=8", true).expect("Handler failed");

    assert!(body.contains("banner warning"));
    assert!(body.contains("No business data with phone numbers found in this region."));
}

#[test]
fn unknown_place_renders_error_banner() {
    let app = App::new(FakeGeocoder::not_found(), FakePois::new(sample_features()));

    let body = get(&app, "/extract?region=Kothrud&radius=8", true).expect("Handler failed");

    assert!(body.contains("banner error"));
    assert!(body.contains("City not found."));
}

#[test]
fn missing_radius_uses_default() {
    let pois = FakePois::new(sample_features());
    let last_bbox = pois.last_bbox.clone();
    let app = App::new(FakeGeocoder::found(pune_bbox()), pois);

    get(&app, "/extract?region=Pune", true).expect("Handler failed");

    let requested = last_bbox.lock().unwrap().expect("fetch not called");
    assert_eq!(requested, crate::leads::expand(&pune_bbox(), 8.0));
}

#[test]
fn bad_inputs_are_rejected() {
    let app = test_app(sample_features());

    for uri in [
        "/extract",
        "/extract?region=Atlantis&radius=8",
        "/extract?region=Baner&radius=50",
        "/extract?region=Baner&radius=1",
        "/extract?region=Baner&radius=eight",
    ] {
        assert!(
            matches!(get(&app, uri, false), Err(ServerError::BadRequest(_))),
            "{uri}"
        );
    }
}
