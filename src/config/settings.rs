/// Bytes per mebibyte, the unit of `--dl-seg-size`.
pub const MIB: u64 = 1024 * 1024;

/// Resolved runtime settings for the HTTP transport and cache.
///
/// Every field starts unset. `None` means "not given", which the
/// transport treats differently from an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// HTTP basic-auth username.
    pub http_username: Option<String>,
    /// HTTP basic-auth password.
    pub http_password: Option<String>,
    /// Proxy URL (e.g., "http://proxy:3128").
    pub proxy: Option<String>,
    pub proxy_username: Option<String>,
    pub proxy_password: Option<String>,
    /// Whether the on-disk cache is enabled.
    pub cache_enabled: bool,
    /// Custom cache directory.
    pub cache_dir: Option<String>,
    /// Download segment size in bytes.
    pub segment_size: Option<u64>,
    /// Maximum number of download segments per file.
    pub max_segment_count: Option<u64>,
    /// Maximum number of idle pooled connections kept per host.
    pub max_connections: Option<u32>,
    pub user_agent: Option<String>,
    /// Delay before retrying a failed request, in seconds.
    pub retry_wait_sec: Option<u64>,
    /// Airsonic / Subsonic username.
    pub media_username: Option<String>,
    /// Airsonic / Subsonic password.
    pub media_password: Option<String>,
    /// Set once both media credentials are present.
    pub media_mode: bool,
}

/// Outcome of checking the media-server credential pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCredentials {
    Complete,
    Absent,
    /// Exactly one of username/password is set.
    Partial,
}

impl Settings {
    /// Create settings with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the media-server credential pair.
    pub fn media_credentials(&self) -> MediaCredentials {
        match (&self.media_username, &self.media_password) {
            (Some(_), Some(_)) => MediaCredentials::Complete,
            (None, None) => MediaCredentials::Absent,
            _ => MediaCredentials::Partial,
        }
    }

    /// Proxy credentials, if both halves were given.
    pub fn proxy_credentials(&self) -> Option<(&str, &str)> {
        match (&self.proxy_username, &self.proxy_password) {
            (Some(user), Some(pass)) => Some((user, pass)),
            _ => None,
        }
    }
}
