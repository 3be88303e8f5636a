//! Pipeline — ties all argument processing stages together.

use std::io::Write;

use crate::args::argv::ArgVec;
use crate::args::classifier::{classify, Outcome, Terminal};
use crate::args::error::UsageError;
use crate::args::help::{long_help, version_text};
use crate::args::registry::flag_registry;
use crate::config::{ConfigFile, MediaCredentials, Settings};
use crate::error::ResolveError;
use crate::mount::MountRuntime;
use crate::transport::Transport;

/// Program name used when the command line is completely empty.
pub const DEFAULT_PROGRAM: &str = "httpdirfs";

/// The remote resource and where to mount it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub base_url: String,
    pub mountpoint: String,
}

/// Everything decided before hand-off.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Settings for the transport.
    pub settings: Settings,
    /// Arguments for the mount runtime, program name first.
    pub pass_through: ArgVec,
    /// Validated URL and mountpoint. `None` when resolution short-circuited
    /// straight to the mount runtime (help, version, too few positionals).
    pub target: Option<Target>,
    /// Set when help or version stopped classification.
    pub terminal: Option<Terminal>,
}

/// Whether `url` is an acceptable base URL.
pub fn is_valid_base_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Resolve settings and mount arguments from the command line and the
/// option file.
///
/// Help and version text are written to `console`; errors are returned
/// for the caller to report.
pub fn resolve(
    cmdline: &[String],
    config: &ConfigFile,
    console: &mut dyn Write,
) -> Result<Resolution, ResolveError> {
    let program = cmdline.first().map_or(DEFAULT_PROGRAM, String::as_str);
    if cmdline.len() < 2 {
        return Err(UsageError::NoArguments.into());
    }

    // Stage 1: Merge sources. Config tokens go first so the command line wins.
    let mut raw = ArgVec::new();
    raw.append(program);
    config.load_into(&mut raw)?;
    let cmdline_start = raw.len();
    raw.extend(&cmdline[1..]);

    // Stage 2: Classify into settings and pass-through arguments
    let registry = flag_registry();
    let mut settings = Settings::new();
    let mut pass_through = ArgVec::new();
    pass_through.append(program);

    let positionals = match classify(
        raw.as_slice(),
        cmdline_start,
        registry,
        &mut settings,
        &mut pass_through,
    )? {
        Outcome::EarlyTerminate(terminal) => {
            let text = match terminal {
                Terminal::Help => long_help(program, registry),
                Terminal::Version => version_text(),
            };
            // Console write failures must not block the hand-off.
            let _ = writeln!(console, "{}", text.trim_end());

            if let Some(last) = cmdline.last().filter(|arg| !arg.starts_with('-')) {
                pass_through.append(last.as_str());
            }
            return Ok(Resolution {
                settings,
                pass_through,
                target: None,
                terminal: Some(terminal),
            });
        }
        Outcome::Continue { positionals } => positionals,
    };

    // Stage 3: Positionals, command line only. With fewer than two the
    // mount runtime reports the problem itself.
    if positionals.len() < 2 {
        tracing::debug!(count = positionals.len(), "not enough positional arguments");
        return Ok(Resolution {
            settings,
            pass_through,
            target: None,
            terminal: None,
        });
    }
    let base_url = &cmdline[cmdline.len() - 2];
    let mountpoint = &cmdline[cmdline.len() - 1];

    // Stage 4: Validate
    if !is_valid_base_url(base_url) {
        return Err(ResolveError::InvalidUrl {
            url: base_url.clone(),
        });
    }
    match settings.media_credentials() {
        MediaCredentials::Complete => settings.media_mode = true,
        MediaCredentials::Partial => return Err(ResolveError::MediaCredentials),
        MediaCredentials::Absent => {}
    }

    pass_through.append(mountpoint.as_str());

    Ok(Resolution {
        settings,
        pass_through,
        target: Some(Target {
            base_url: base_url.clone(),
            mountpoint: mountpoint.clone(),
        }),
        terminal: None,
    })
}

/// Resolve, initialise the transport and hand off to the mount runtime.
///
/// Returns the mount runtime's exit code. The transport is skipped when
/// resolution short-circuited.
pub fn run<T, M>(
    cmdline: &[String],
    config: &ConfigFile,
    transport: &mut T,
    runtime: &mut M,
    console: &mut dyn Write,
) -> Result<i32, ResolveError>
where
    T: Transport + ?Sized,
    M: MountRuntime + ?Sized,
{
    let resolution = resolve(cmdline, config, console)?;

    if let Some(target) = &resolution.target {
        tracing::debug!(url = %target.base_url, media_mode = resolution.settings.media_mode, "initialising transport");
        transport.initialize(&target.base_url, &resolution.settings)?;
    }

    tracing::info!(argv = %resolution.pass_through, "handing off to mount runtime");
    Ok(runtime.run(resolution.pass_through.as_slice())?)
}
