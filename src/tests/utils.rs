use crate::app::App;
use crate::leads::models::Center;
use crate::leads::{BoundingBox, Feature, GeocodeResult, Geocoder, LeadsError, PoiSource};
use reqwest::blocking::Client;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

pub const TEST_USER_AGENT: &str = "PvtLeadsTest/1.0";

/// Geocoder answering every place with the same result, or none at all.
pub struct FakeGeocoder {
    result: Option<GeocodeResult>,
    pub calls: Arc<AtomicUsize>,
}

impl FakeGeocoder {
    pub fn found(bbox: BoundingBox) -> Self {
        Self {
            result: Some(GeocodeResult {
                lat: bbox.mid_latitude(),
                lon: (bbox.west + bbox.east) / 2.0,
                bbox,
            }),
            calls: Arc::default(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: None,
            calls: Arc::default(),
        }
    }
}

impl Geocoder for FakeGeocoder {
    fn geocode(&self, place: &str) -> Result<GeocodeResult, LeadsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .ok_or_else(|| LeadsError::PlaceNotFound(place.to_string()))
    }
}

/// POI source returning a fixed feature list and recording the requested box.
pub struct FakePois {
    features: Vec<Feature>,
    pub calls: Arc<AtomicUsize>,
    pub last_bbox: Arc<Mutex<Option<BoundingBox>>>,
}

impl FakePois {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            features,
            calls: Arc::default(),
            last_bbox: Arc::default(),
        }
    }
}

impl PoiSource for FakePois {
    fn fetch(&self, bbox: &BoundingBox) -> Result<Vec<Feature>, LeadsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_bbox.lock().unwrap() = Some(*bbox);
        Ok(self.features.clone())
    }
}

pub fn pune_bbox() -> BoundingBox {
    BoundingBox::new(18.4, 18.6, 73.7, 73.9)
}

pub fn node(id: i64, lat: f64, lon: f64, tags: &[(&str, &str)]) -> Feature {
    Feature {
        kind: "node".into(),
        id,
        lat: Some(lat),
        lon: Some(lon),
        center: None,
        tags: tags
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

pub fn way(id: i64, center_lat: f64, center_lon: f64, tags: &[(&str, &str)]) -> Feature {
    Feature {
        kind: "way".into(),
        lat: None,
        lon: None,
        center: Some(Center {
            lat: center_lat,
            lon: center_lon,
        }),
        ..node(id, 0.0, 0.0, tags)
    }
}

pub fn sample_features() -> Vec<Feature> {
    vec![
        node(
            1,
            18.5204,
            73.8567,
            &[
                ("name", "Acme"),
                ("phone", "12345"),
                ("shop", "yes"),
                ("addr:street", "FC Road"),
                ("addr:city", "Pune"),
            ],
        ),
        node(2, 18.53, 73.86, &[("name", "NoPhoneCo"), ("shop", "yes")]),
        way(
            3,
            18.55,
            73.9,
            &[
                ("brand", "Globex"),
                ("contact:phone", "+91 20 5555 0100"),
                ("contact:email", "sales@globex.example"),
            ],
        ),
    ]
}

pub fn test_app(features: Vec<Feature>) -> App {
    App::new(FakeGeocoder::found(pune_bbox()), FakePois::new(features))
}

pub fn test_client() -> Client {
    Client::builder()
        .user_agent(TEST_USER_AGENT)
        .no_proxy()
        .build()
        .expect("Failed to build test client")
}

/// One-shot HTTP responder on a random local port.
pub struct CannedServer {
    pub url: String,
    handle: JoinHandle<String>,
}

impl CannedServer {
    pub fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        let body = body.to_string();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).expect("write response");
            request
        });

        Self {
            url: format!("http://{addr}/api"),
            handle,
        }
    }

    /// The raw request the server received.
    pub fn request(self) -> String {
        self.handle.join().expect("canned server thread panicked")
    }
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let content_length = head
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}

/// Body of a raw HTTP request.
pub fn request_body(raw: &str) -> &str {
    raw.split_once("\r\n\r\n").map(|(_, b)| b).unwrap_or("")
}
