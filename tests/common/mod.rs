#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use campus_records::app::app::App;
use campus_records::config::{AppConfig, SessionConfig};
use tower::ServiceExt; // for .oneshot()

pub fn setup_app() -> Router {
    App::with_config(AppConfig::default(), SessionConfig::default())
        .expect("app setup")
        .router()
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

/// A browser stand-in: keeps the session cookie between requests.
pub struct Browser {
    app: Router,
    cookie: Option<String>,
}

impl Browser {
    pub fn new(app: &Router) -> Self {
        Browser {
            app: app.clone(),
            cookie: None,
        }
    }

    /// A browser that presents an existing session cookie, e.g. one copied from another browser.
    pub fn with_cookie(app: &Router, cookie: &str) -> Self {
        Browser {
            app: app.clone(),
            cookie: Some(cookie.to_string()),
        }
    }

    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let req = self.request("GET", uri).body(Body::empty()).unwrap();
        self.send(req).await
    }

    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let req = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encode_form(fields)))
            .unwrap();
        self.send(req).await
    }

    pub async fn register(&mut self, username: &str, password: &str, role: &str) -> TestResponse {
        self.post_form(
            "/register",
            &[
                ("username", username),
                ("password", password),
                ("confirm_password", password),
                ("role", role),
            ],
        )
        .await
    }

    pub async fn login(&mut self, username: &str, password: &str) -> TestResponse {
        self.post_form("/login", &[("username", username), ("password", password)]).await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie.as_str());
        }
        builder
    }

    async fn send(&mut self, req: Request<Body>) -> TestResponse {
        let resp = self.app.clone().oneshot(req).await.unwrap();
        if let Some(set_cookie) = resp.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap().to_string();
            self.cookie = Some(pair);
        }
        let status = resp.status();
        let location = resp
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap(); // 1 MB limit
        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).to_string(),
        }
    }
}

pub fn encode_form(fields: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(fields).unwrap()
}

pub fn assert_redirect(resp: &TestResponse, to: &str) {
    assert_eq!(resp.status, StatusCode::SEE_OTHER, "expected redirect, got {:?}", resp);
    assert_eq!(resp.location.as_deref(), Some(to));
}
