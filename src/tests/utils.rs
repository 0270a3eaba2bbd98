use crate::api::ListingsApi;
use crate::app::App;
use crate::config::{ApiConfig, SiteConfig};
use crate::router::handle;
use astra::{Body, Request, Response, ResponseBuilder, Server};
use http::Method;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::Read;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub const CATALOG_PATH: &str = "/api/apartments/app/get";

pub fn detail_path(id: &str) -> String {
    format!("{CATALOG_PATH}/{id}")
}

/// A canned upstream: exact path → (status, body). Anything else is a 404.
#[derive(Default)]
pub struct Upstream {
    routes: HashMap<String, (u16, String)>,
}

impl Upstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, path: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes.insert(path.to_string(), (status, body.into()));
        self
    }

    pub fn json(self, path: &str, value: Value) -> Self {
        self.route(path, 200, value.to_string())
    }

    /// Serves the routes on a free local port and returns the base URL.
    pub fn start(self) -> String {
        let addr = free_addr();
        let routes = Arc::new(self.routes);

        thread::spawn(move || {
            let _ = Server::bind(&addr).max_workers(2).serve(move |req: Request, _info| {
                let (status, body) = routes
                    .get(req.uri().path())
                    .cloned()
                    .unwrap_or((404, String::new()));
                ResponseBuilder::new()
                    .status(status)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap()
            });
        });

        wait_until_listening(addr);
        format!("http://{addr}")
    }
}

fn free_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().unwrap()
}

fn wait_until_listening(addr: SocketAddr) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while TcpStream::connect(addr).is_err() {
        assert!(Instant::now() < deadline, "stub upstream did not start on {addr}");
        thread::sleep(Duration::from_millis(10));
    }
}

pub fn api_for(base: &str) -> ListingsApi {
    let cfg = ApiConfig::new(base, Duration::from_secs(2)).unwrap();
    ListingsApi::new(&cfg).unwrap()
}

pub fn app_for(base: &str) -> App {
    App::new(api_for(base), SiteConfig::default())
}

/// Nothing listens on port 1.
pub fn unreachable_app() -> App {
    app_for("http://127.0.0.1:1")
}

pub fn get(app: &App, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty())
}

pub fn post_form(app: &App, uri: &str, form: &str) -> Response {
    send(app, Method::POST, uri, Body::from(form.to_string()))
}

/// Routes a request the way the server loop does, errors included.
pub fn send(app: &App, method: Method, uri: &str, body: Body) -> Response {
    let req = http::Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .unwrap();

    match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => crate::templates::html_error_response(err),
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}

pub fn header<'a>(resp: &'a Response, name: &str) -> Option<&'a str> {
    resp.headers().get(name).and_then(|v| v.to_str().ok())
}

pub fn loft() -> Value {
    json!({
        "_id": "abc123",
        "title": "Loft Central",
        "price": 450000,
        "bedrooms": 2,
        "bathrooms": 1,
        "size": 68,
        "location": "Batel, Curitiba",
        "status": "under_construction",
        "contactNumber": "+55 (11) 98888-7777",
        "description": "Vista para o parque.",
        "thumbnail": "/img/loft-thumb.jpg",
        "gallery": ["/img/g1.jpg", "/img/g2.jpg", "/img/g3.jpg", "/img/g4.jpg"],
        "floorPlans": ["/img/p1.png", "/img/p2.png", "/img/p3.png"]
    })
}

pub fn bare_studio() -> Value {
    json!({
        "_id": "st-9",
        "title": "Studio Sem Contato",
        "price": "Sob consulta",
        "location": ""
    })
}
