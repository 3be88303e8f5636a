use std::time::Duration;

use reqwest::{Client, Proxy, Url};
use tokio::time::timeout;

use crate::config::Settings;
use crate::transport::{Transport, TransportError};

/// User agent sent when `--user-agent` is not given.
pub const DEFAULT_USER_AGENT: &str = "HTTPDirFS";
/// Subsonic REST API version announced in media-server mode.
pub const SUBSONIC_API_VERSION: &str = "1.13.0";

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Transport that checks the remote server answers before mounting.
///
/// In plain mode it fetches the base URL (the root directory listing).
/// In media-server mode it pings the Subsonic REST endpoint below the
/// base URL with the media credentials.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    connect_timeout: Duration,
    request_timeout: Duration,
    system_proxy: bool,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_timeouts(Duration::from_secs(10), Duration::from_secs(30))
    }

    pub fn with_timeouts(connect_timeout: Duration, request_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            request_timeout,
            system_proxy: true,
        }
    }

    /// Whether proxies from the environment (`HTTP_PROXY` etc.) apply when
    /// no `--proxy` is given.
    pub fn with_system_proxy(mut self, enabled: bool) -> Self {
        self.system_proxy = enabled;
        self
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn initialize(&mut self, base_url: &str, settings: &Settings) -> Result<(), TransportError> {
        let client = build_client(settings, self.connect_timeout, self.system_proxy)?;
        let url = reachability_url(base_url, settings)?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(TransportError::Runtime)?;

        runtime.block_on(check_reachable(&client, url, settings, self.request_timeout))
    }
}

/// Build the HTTP client described by `settings`.
pub fn build_client(
    settings: &Settings,
    connect_timeout: Duration,
    system_proxy: bool,
) -> Result<Client, TransportError> {
    let max_connections = settings.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS);
    let user_agent = settings.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);

    let mut builder = Client::builder()
        .connect_timeout(connect_timeout)
        .user_agent(user_agent)
        .pool_max_idle_per_host(max_connections as usize);

    if !system_proxy {
        builder = builder.no_proxy();
    }

    if let Some(proxy_url) = &settings.proxy {
        let mut proxy = Proxy::all(proxy_url.as_str()).map_err(|source| TransportError::Proxy {
            proxy: proxy_url.clone(),
            source,
        })?;
        if let Some((user, pass)) = settings.proxy_credentials() {
            proxy = proxy.basic_auth(user, pass);
        }
        builder = builder.proxy(proxy);
    }

    builder.build().map_err(TransportError::Client)
}

/// URL fetched to check the server is reachable.
pub fn reachability_url(base_url: &str, settings: &Settings) -> Result<Url, TransportError> {
    let mut url = Url::parse(base_url).map_err(|e| invalid_url(base_url, e))?;
    if !settings.media_mode {
        return Ok(url);
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    let mut url = url
        .join("rest/ping.view")
        .map_err(|e| invalid_url(base_url, e))?;
    if let (Some(user), Some(pass)) = (&settings.media_username, &settings.media_password) {
        url.query_pairs_mut()
            .append_pair("u", user)
            .append_pair("p", pass)
            .append_pair("v", SUBSONIC_API_VERSION)
            .append_pair("c", DEFAULT_USER_AGENT);
    }
    Ok(url)
}

fn invalid_url(url: &str, reason: impl std::fmt::Display) -> TransportError {
    TransportError::InvalidUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

async fn check_reachable(
    client: &Client,
    url: Url,
    settings: &Settings,
    request_timeout: Duration,
) -> Result<(), TransportError> {
    let shown = redacted(&url);
    let mut request = client.get(url);
    if !settings.media_mode {
        if let Some(user) = &settings.http_username {
            request = request.basic_auth(user, settings.http_password.as_ref());
        }
    }

    tracing::debug!(url = %shown, "checking remote server");
    let response = timeout(request_timeout, request.send())
        .await
        .map_err(|_| TransportError::Timeout {
            url: shown.clone(),
            duration: request_timeout.as_secs(),
        })?
        .map_err(|source| TransportError::Request {
            url: shown.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::Status {
            url: shown,
            status: status.as_u16(),
        });
    }

    if settings.media_mode {
        let body = response.text().await.map_err(|source| TransportError::Request {
            url: shown.clone(),
            source,
        })?;
        if !body.contains(r#"status="ok""#) && !body.contains(r#""status":"ok""#) {
            return Err(TransportError::MediaServer { url: shown });
        }
    }

    tracing::info!(url = %shown, status = status.as_u16(), "remote server reachable");
    Ok(())
}

/// The URL without its query, which may carry media credentials.
fn redacted(url: &Url) -> String {
    let mut shown = url.clone();
    shown.set_query(None);
    shown.to_string()
}
