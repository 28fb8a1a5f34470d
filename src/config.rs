use crate::error::{Error, Result};

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Resolved connector configuration.
#[derive(Debug, Clone)]
pub(crate) struct ConnectorConfig {
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) url: String,
    pub(crate) timeout_secs: u64,
}

/// Resolves configuration from explicit arguments, falling back to the
/// `IMSAPI_URL`, `IMSAPI_USERNAME`, `IMSAPI_PASSWORD` and `IMSAPI_TIMEOUT`
/// environment variables. Explicit arguments win.
pub(crate) fn load_config(
    username: Option<String>,
    password: Option<String>,
    url: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<ConnectorConfig> {
    let username = resolve(username, "IMSAPI_USERNAME")?;
    let password = resolve(password, "IMSAPI_PASSWORD")?;
    let url = resolve(url, "IMSAPI_URL")?;

    let timeout_secs = match timeout_secs {
        Some(v) => v,
        None => match std::env::var("IMSAPI_TIMEOUT") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                Error::Config(format!("IMSAPI_TIMEOUT is not a whole number of seconds: {raw:?}"))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        },
    };

    Ok(ConnectorConfig {
        username,
        password,
        url,
        timeout_secs,
    })
}

fn resolve(explicit: Option<String>, var: &str) -> Result<String> {
    explicit
        .or_else(|| std::env::var(var).ok().filter(|v| !v.is_empty()))
        .ok_or_else(|| Error::Config(format!("missing {var} (set the variable or pass it explicitly)")))
}
