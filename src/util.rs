use url::form_urlencoded;

/// Ensures a scheme and the fixed `/api/` suffix on a user-supplied base URL.
///
/// Accepts anything: `host:8000`, `http://host`, `https://host/api/` are all
/// brought to the canonical `<scheme>://<host...>/api/` form. Applying it to
/// an already-normalized URL is a no-op.
pub(crate) fn normalize_base_url(raw: &str) -> String {
    let mut base = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    };

    if !base.ends_with("/api/") {
        base = format!("{}/api/", base.trim_end_matches('/'));
    }

    base
}

/// Joins a resource path onto the base URL, with exactly one trailing slash.
/// The server routes require the trailing slash on every resource.
pub(crate) fn join_resource(base: &str, resource: &str) -> String {
    format!("{}{}/", base, resource.trim_matches('/'))
}

/// Form-encodes the login credentials.
///
/// The serialized key order is part of the wire contract: keys are emitted
/// alphabetically, so the body is always `password=<p>&username=<u>`.
pub(crate) fn credentials_form(username: &str, password: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("password", password)
        .append_pair("username", username)
        .finish()
}
