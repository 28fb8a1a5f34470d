use reqwest::blocking::{Client as HttpClient, Request};
use reqwest::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE, HeaderValue};
use reqwest::{Method, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::load_config;
use crate::error::{Error, Result};
use crate::models::{Asset, AuthenticationResponse};
use crate::util::{credentials_form, join_resource, normalize_base_url};

const LOGIN_RESOURCE: &str = "auth/login";
const ASSETS_RESOURCE: &str = "assets";

/// Synchronous client for the IMS HTTP API.
///
/// A connector starts out unauthenticated. [`authenticate`](Connector::authenticate)
/// exchanges the credentials for a bearer token, which every later request
/// carries in its `Authorization` header. Authentication mutates the connector,
/// so it takes `&mut self`; read calls take `&self`. That split makes the
/// token hand-off safe without any locking.
#[derive(Debug)]
pub struct Connector {
    username: String,
    password: String,
    base_url: String,
    token: Option<String>,
    http: HttpClient,
}

impl Connector {
    /// Creates a connector for the API at `raw_base_url`.
    ///
    /// The URL is normalized: a missing scheme defaults to `http://`, and the
    /// fixed `/api/` path segment is appended when absent. `timeout_secs` is
    /// the per-request timeout of the underlying transport. No network I/O
    /// happens here.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        raw_base_url: &str,
        timeout_secs: u64,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            username: username.into(),
            password: password.into(),
            base_url: normalize_base_url(raw_base_url),
            token: None,
            http,
        })
    }

    /// Creates a connector from the `IMSAPI_URL`, `IMSAPI_USERNAME`,
    /// `IMSAPI_PASSWORD` and (optional) `IMSAPI_TIMEOUT` environment variables.
    pub fn from_env() -> Result<Self> {
        let cfg = load_config(None, None, None, None)?;
        Self::new(cfg.username, cfg.password, &cfg.url, cfg.timeout_secs)
    }

    /// The normalized base URL, always ending in `/api/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a bearer token from a successful login is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Logs in with the stored credentials.
    ///
    /// Returns `Ok(true)` and stores the bearer token on success. A rejected
    /// login (the server answered, but without a token) clears any previous
    /// token and returns `Ok(false)` rather than an error. Transport failures
    /// and malformed response bodies are errors; see [`Error::FatalAuthDecode`]
    /// for the latter.
    pub fn authenticate(&mut self) -> Result<bool> {
        let url = self.build_resource(LOGIN_RESOURCE);
        let body = credentials_form(&self.username, &self.password);

        debug!(%url, username = %self.username, "authenticating");

        let request = self.build_request(Method::POST, &url, body)?;
        let (status, body) = self.execute(request)?;

        // Rejected logins come back as 400 with `non_field_errors`, so client
        // errors are decoded like successes. Anything else rules out a
        // meaningful authentication body.
        if !(status.is_success() || status.is_client_error()) {
            return Err(http_status_error(status, &url, &body));
        }

        let auth: AuthenticationResponse =
            serde_json::from_slice(&body).map_err(Error::FatalAuthDecode)?;

        if auth.key.is_empty() {
            if !auth.non_field_errors.is_empty() {
                warn!(errors = ?auth.non_field_errors, "login rejected");
            }
            self.token = None;
            Ok(false)
        } else {
            self.token = Some(auth.key);
            debug!("authenticated");
            Ok(true)
        }
    }

    /// Fetches the full asset listing in one call.
    ///
    /// The `Authorization` header is attached automatically when the connector
    /// is authenticated. The server's response is returned as-is: no
    /// pagination, filtering or sorting is applied.
    pub fn get_assets(&self) -> Result<Vec<Asset>> {
        let url = self.build_resource(ASSETS_RESOURCE);

        debug!(%url, authenticated = self.is_authenticated(), "listing assets");

        let request = self.build_request(Method::GET, &url, String::new())?;
        let (status, body) = self.execute(request)?;

        if !status.is_success() {
            return Err(http_status_error(status, &url, &body));
        }

        let assets: Vec<Asset> = serde_json::from_slice(&body).map_err(Error::Decode)?;
        debug!(count = assets.len(), "assets decoded");

        Ok(assets)
    }

    fn build_resource(&self, resource: &str) -> String {
        join_resource(&self.base_url, resource)
    }

    /// Builds a request with the headers the API expects. Only GET and POST
    /// are ever issued; anything else is rejected up front.
    fn build_request(&self, method: Method, url: &str, body: String) -> Result<Request> {
        if method != Method::GET && method != Method::POST {
            return Err(Error::InvalidMethod(method));
        }

        let mut builder = self
            .http
            .request(method, url)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        builder = match &self.token {
            Some(token) => builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .header(AUTHORIZATION, format!("Token {token}")),
            None => builder.header(
                CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            ),
        };

        Ok(builder.body(body).build()?)
    }

    /// Sends the request and reads the whole response body into memory.
    /// No retries; a timeout surfaces as a transport error.
    fn execute(&self, request: Request) -> Result<(StatusCode, Vec<u8>)> {
        let response = self.http.execute(request)?;
        let status = response.status();
        let body = response.bytes()?.to_vec();
        Ok((status, body))
    }
}

fn http_status_error(status: StatusCode, url: &str, body: &[u8]) -> Error {
    Error::HttpStatus {
        status,
        url: url.to_string(),
        body: String::from_utf8_lossy(body).into_owned(),
    }
}
