//! Option registry — single source of truth for every recognized flag.

/// Whether an option takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    /// Boolean flag, no value (e.g., -f, --cache).
    NoValue,
    /// Requires exactly one value (e.g., -o <opts>, --max-conns <N>).
    RequiresValue,
}

/// Settings field written by an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    HttpUsername,
    HttpPassword,
    Proxy,
    ProxyUsername,
    ProxyPassword,
    CacheEnabled,
    CacheDir,
    /// Given in MiB, stored in bytes.
    SegmentSize,
    MaxSegmentCount,
    MaxConnections,
    UserAgent,
    RetryWait,
    MediaUsername,
    MediaPassword,
}

/// Where a recognized option ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Forwarded to the mount runtime as this exact token.
    Passthrough(&'static str),
    /// Forwarded as `-o <value>`.
    MountOptions,
    /// Print help and stop; forwarded as `-ho`.
    Help,
    /// Print version and stop; forwarded as `-V`.
    Version,
    /// Written into the settings record.
    Setting(SettingField),
}

/// A single option definition.
#[derive(Debug, Clone)]
pub struct FlagDef {
    /// Long name without the leading dashes (e.g., "max-conns").
    pub long: Option<&'static str>,
    /// Short letter (e.g., 'u').
    pub short: Option<char>,
    pub arity: FlagArity,
    pub destination: Destination,
    /// Placeholder shown in help for the value.
    pub value_name: &'static str,
    /// Human-readable description (for help text).
    pub description: &'static str,
}

impl FlagDef {
    /// Check if this definition has the given short letter.
    pub fn matches_short(&self, letter: char) -> bool {
        self.short == Some(letter)
    }

    /// Check if this definition's long name is exactly `name`.
    pub fn matches_long(&self, name: &str) -> bool {
        self.long == Some(name)
    }

    /// Display form used in messages, preferring the long name.
    pub fn display_name(&self) -> String {
        match (self.long, self.short) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => String::new(),
        }
    }
}

const fn flag(
    short: Option<char>,
    long: Option<&'static str>,
    arity: FlagArity,
    destination: Destination,
    value_name: &'static str,
    description: &'static str,
) -> FlagDef {
    FlagDef {
        long,
        short,
        arity,
        destination,
        value_name,
        description,
    }
}

use Destination::{Help, MountOptions, Passthrough, Setting, Version};
use FlagArity::{NoValue, RequiresValue};
use SettingField::*;

static REGISTRY: [FlagDef; 20] = [
    // === General options (mount runtime) ===
    flag(Some('o'), None, RequiresValue, MountOptions, "opt,[opt...]", "mount options"),
    flag(Some('h'), Some("help"), NoValue, Help, "", "print help"),
    flag(Some('V'), Some("version"), NoValue, Version, "", "print version"),
    flag(Some('d'), Some("debug"), NoValue, Passthrough("-d"), "", "enable debug output (implies -f)"),
    flag(Some('f'), None, NoValue, Passthrough("-f"), "", "foreground operation"),
    flag(Some('s'), None, NoValue, Passthrough("-s"), "", "disable multi-threaded operation"),
    // === HTTP options ===
    flag(Some('u'), Some("username"), RequiresValue, Setting(HttpUsername), "USERNAME", "HTTP authentication username"),
    flag(Some('p'), Some("password"), RequiresValue, Setting(HttpPassword), "PASSWORD", "HTTP authentication password"),
    flag(Some('P'), Some("proxy"), RequiresValue, Setting(Proxy), "PROXY", "Proxy for the HTTP client, e.g. http://host:port"),
    flag(None, Some("proxy-username"), RequiresValue, Setting(ProxyUsername), "USERNAME", "Username for the proxy"),
    flag(None, Some("proxy-password"), RequiresValue, Setting(ProxyPassword), "PASSWORD", "Password for the proxy"),
    flag(None, Some("cache"), NoValue, Setting(CacheEnabled), "", "Enable cache (default: off)"),
    flag(None, Some("dl-seg-size"), RequiresValue, Setting(SegmentSize), "MiB", "Set cache download segment size, in MiB (default: 8)"),
    flag(None, Some("max-seg-count"), RequiresValue, Setting(MaxSegmentCount), "N", "Set maximum number of download segments a file can have (default: 128*1024)"),
    flag(None, Some("max-conns"), RequiresValue, Setting(MaxConnections), "N", "Set maximum number of idle connections kept per host (default: 10)"),
    flag(None, Some("user-agent"), RequiresValue, Setting(UserAgent), "STRING", "Set user agent string (default: \"HTTPDirFS\")"),
    flag(None, Some("retry-wait"), RequiresValue, Setting(RetryWait), "SECONDS", "Set delay in seconds before retrying an HTTP request after an error (default: 5)"),
    flag(None, Some("cache-location"), RequiresValue, Setting(CacheDir), "DIR", "Set a custom cache location (default: \"${XDG_CACHE_HOME}/httpdirfs\")"),
    // === Airsonic / Subsonic ===
    flag(None, Some("sonic-username"), RequiresValue, Setting(MediaUsername), "USERNAME", "The username for your Airsonic / Subsonic server"),
    flag(None, Some("sonic-password"), RequiresValue, Setting(MediaPassword), "PASSWORD", "The password for your Airsonic / Subsonic server"),
];

/// The complete option registry.
pub fn flag_registry() -> &'static [FlagDef] {
    &REGISTRY
}

/// Result of looking up a long option name.
#[derive(Debug, Clone, Copy)]
pub enum LongMatch<'a> {
    Found(&'a FlagDef),
    Ambiguous,
    NotFound,
}

/// Look up a long option by exact name, falling back to a unique prefix.
pub fn find_long<'a>(registry: &'a [FlagDef], name: &str) -> LongMatch<'a> {
    if let Some(def) = registry.iter().find(|d| d.matches_long(name)) {
        return LongMatch::Found(def);
    }
    if name.is_empty() {
        return LongMatch::NotFound;
    }

    let mut candidates = registry
        .iter()
        .filter(|d| d.long.is_some_and(|long| long.starts_with(name)));
    match (candidates.next(), candidates.next()) {
        (Some(def), None) => LongMatch::Found(def),
        (Some(_), Some(_)) => LongMatch::Ambiguous,
        (None, _) => LongMatch::NotFound,
    }
}

/// Look up a short option by letter.
pub fn find_short(registry: &[FlagDef], letter: char) -> Option<&FlagDef> {
    registry.iter().find(|d| d.matches_short(letter))
}
