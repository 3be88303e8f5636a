//! Option classifier — raw args → settings + pass-through args.

use std::slice::Iter;
use std::str::FromStr;

use crate::args::argv::ArgVec;
use crate::args::error::UsageError;
use crate::args::registry::{
    find_long, find_short, Destination, FlagArity, FlagDef, LongMatch, SettingField,
};
use crate::config::{Settings, MIB};

/// Token forwarded to the mount runtime when help was requested.
pub const HELP_MARKER: &str = "-ho";
/// Token forwarded to the mount runtime when the version was requested.
pub const VERSION_MARKER: &str = "-V";

/// Which informational request stopped classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    Help,
    Version,
}

/// Result of a successful classification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every token was consumed. Carries the non-option tokens in order.
    Continue { positionals: Vec<String> },
    /// Help or version was requested; later tokens were not examined.
    EarlyTerminate(Terminal),
}

/// Classify `raw_args` (program name first) against the registry.
///
/// Tokens from index `cmdline_start` on came from the command line; only
/// those can be positionals. Stray non-option tokens before it (merged in
/// from the option file) are skipped. Recognized options are either appended to `passthrough` or written
/// into `settings`. Settings are last-wins; pass-through tokens
/// accumulate. Token syntax follows getopt_long: clustered short flags,
/// attached short values (`-ofoo`), `--name=value`, unique long
/// prefixes and `--` to end option parsing.
pub fn classify(
    raw_args: &[String],
    cmdline_start: usize,
    registry: &[FlagDef],
    settings: &mut Settings,
    passthrough: &mut ArgVec,
) -> Result<Outcome, UsageError> {
    let mut classifier = Classifier {
        registry,
        settings,
        passthrough,
    };
    let mut positionals = Vec::new();
    let mut iter = raw_args.get(1..).unwrap_or_default().iter();

    while let Some(arg) = iter.next() {
        let index = raw_args.len() - iter.len() - 1;
        let terminal = if arg == "--" {
            let skip = cmdline_start.saturating_sub(index + 1);
            positionals.extend(iter.by_ref().skip(skip).cloned());
            break;
        } else if let Some(body) = arg.strip_prefix("--") {
            classifier.long(body, &mut iter)?
        } else if let Some(body) = arg.strip_prefix('-').filter(|b| !b.is_empty()) {
            classifier.short_cluster(body, &mut iter)?
        } else if index >= cmdline_start {
            positionals.push(arg.clone());
            None
        } else {
            tracing::debug!(token = %arg, "ignoring stray token from option file");
            None
        };

        if let Some(terminal) = terminal {
            return Ok(Outcome::EarlyTerminate(terminal));
        }
    }

    Ok(Outcome::Continue { positionals })
}

struct Classifier<'a> {
    registry: &'a [FlagDef],
    settings: &'a mut Settings,
    passthrough: &'a mut ArgVec,
}

impl<'a> Classifier<'a> {
    /// Handle `--name` or `--name=value`.
    fn long(&mut self, body: &str, rest: &mut Iter<'_, String>) -> Result<Option<Terminal>, UsageError> {
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        let def = match find_long(self.registry, name) {
            LongMatch::Found(def) => def,
            LongMatch::Ambiguous => return Err(UsageError::AmbiguousOption(format!("--{name}"))),
            LongMatch::NotFound => return Err(UsageError::UnknownOption(format!("--{name}"))),
        };

        let value = match (def.arity, inline) {
            (FlagArity::NoValue, None) => None,
            (FlagArity::NoValue, Some(_)) => {
                return Err(UsageError::UnexpectedValue(def.display_name()));
            }
            (FlagArity::RequiresValue, Some(value)) => Some(value),
            (FlagArity::RequiresValue, None) => Some(
                rest.next()
                    .map(String::as_str)
                    .ok_or_else(|| UsageError::MissingValue(def.display_name()))?,
            ),
        };

        self.apply(def, value)
    }

    /// Handle `-x`, clustered `-xyz` and attached values `-ovalue`.
    fn short_cluster(
        &mut self,
        body: &str,
        rest: &mut Iter<'_, String>,
    ) -> Result<Option<Terminal>, UsageError> {
        for (idx, letter) in body.char_indices() {
            let def = find_short(self.registry, letter)
                .ok_or_else(|| UsageError::UnknownOption(format!("-{letter}")))?;

            let terminal = match def.arity {
                FlagArity::NoValue => self.apply(def, None)?,
                FlagArity::RequiresValue => {
                    let attached = &body[idx + letter.len_utf8()..];
                    let value = if attached.is_empty() {
                        rest.next()
                            .map(String::as_str)
                            .ok_or_else(|| UsageError::MissingValue(format!("-{letter}")))?
                    } else {
                        attached
                    };
                    // The value consumed the remainder of the cluster.
                    return self.apply(def, Some(value));
                }
            };

            if terminal.is_some() {
                return Ok(terminal);
            }
        }
        Ok(None)
    }

    fn apply(&mut self, def: &FlagDef, value: Option<&str>) -> Result<Option<Terminal>, UsageError> {
        tracing::debug!(option = %def.display_name(), "classified option");

        match def.destination {
            Destination::Passthrough(token) => self.passthrough.append(token),
            Destination::MountOptions => {
                self.passthrough.append("-o");
                self.passthrough.append(value.unwrap_or_default());
            }
            Destination::Help => {
                self.passthrough.append(HELP_MARKER);
                return Ok(Some(Terminal::Help));
            }
            Destination::Version => {
                self.passthrough.append(VERSION_MARKER);
                return Ok(Some(Terminal::Version));
            }
            Destination::Setting(field) => {
                apply_setting(self.settings, field, def, value.unwrap_or_default())?;
            }
        }
        Ok(None)
    }
}

fn apply_setting(
    settings: &mut Settings,
    field: SettingField,
    def: &FlagDef,
    value: &str,
) -> Result<(), UsageError> {
    let text = || Some(value.to_string());

    match field {
        SettingField::HttpUsername => settings.http_username = text(),
        SettingField::HttpPassword => settings.http_password = text(),
        SettingField::Proxy => settings.proxy = text(),
        SettingField::ProxyUsername => settings.proxy_username = text(),
        SettingField::ProxyPassword => settings.proxy_password = text(),
        SettingField::CacheEnabled => settings.cache_enabled = true,
        SettingField::CacheDir => settings.cache_dir = text(),
        SettingField::SegmentSize => {
            let mib: u64 = parse_number(def, value)?;
            let bytes = mib.checked_mul(MIB).ok_or_else(|| invalid_number(def, value))?;
            settings.segment_size = Some(bytes);
        }
        SettingField::MaxSegmentCount => settings.max_segment_count = Some(parse_number(def, value)?),
        SettingField::MaxConnections => settings.max_connections = Some(parse_number(def, value)?),
        SettingField::UserAgent => settings.user_agent = text(),
        SettingField::RetryWait => settings.retry_wait_sec = Some(parse_number(def, value)?),
        SettingField::MediaUsername => settings.media_username = text(),
        SettingField::MediaPassword => settings.media_password = text(),
    }
    Ok(())
}

fn parse_number<T: FromStr>(def: &FlagDef, value: &str) -> Result<T, UsageError> {
    value.trim().parse().map_err(|_| invalid_number(def, value))
}

fn invalid_number(def: &FlagDef, value: &str) -> UsageError {
    UsageError::InvalidNumber {
        flag: def.display_name(),
        value: value.to_string(),
    }
}
