//! Help and version text, rendered from the option registry.

use clap::{Arg, ArgAction, Command};

use crate::args::registry::{Destination, FlagArity, FlagDef, SettingField};

/// Short usage line printed on usage errors.
pub fn usage_line(program: &str) -> String {
    format!("usage: {program} [options] URL mountpoint")
}

/// One-line hint printed after a classification failure.
pub fn usage_hint(program: &str) -> String {
    format!("see {program} -h for usage")
}

pub fn version_text() -> String {
    format!("HTTPDirFS version {}", env!("CARGO_PKG_VERSION"))
}

/// Full help text for `-h` / `--help`.
pub fn long_help(program: &str, registry: &[FlagDef]) -> String {
    help_command(program, registry).render_long_help().to_string()
}

/// Build a clap command mirroring the registry, used only for rendering.
///
/// Parsing stays with the classifier; clap's own help and version flags
/// are disabled so `-h` and `-V` keep their registry meaning.
pub fn help_command(program: &str, registry: &[FlagDef]) -> Command {
    let mut cmd = Command::new(program.to_string())
        .override_usage(format!("{program} [options] URL mountpoint"))
        .version(env!("CARGO_PKG_VERSION"))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .after_long_help(
            "Options may also be placed in ${XDG_CONFIG_HOME}/httpdirfs/config, one per line.",
        );

    for def in registry {
        cmd = cmd.arg(to_clap_arg(def));
    }
    cmd
}

fn to_clap_arg(def: &FlagDef) -> Arg {
    let id = match (def.long, def.short) {
        (Some(long), _) => long.to_string(),
        (None, Some(short)) => short.to_string(),
        (None, None) => def.description.to_string(),
    };

    let mut arg = Arg::new(id)
        .help(def.description)
        .help_heading(heading(def.destination));
    if let Some(short) = def.short {
        arg = arg.short(short);
    }
    if let Some(long) = def.long {
        arg = arg.long(long);
    }

    match def.arity {
        FlagArity::NoValue => arg.action(ArgAction::SetTrue),
        FlagArity::RequiresValue => arg.action(ArgAction::Set).value_name(def.value_name),
    }
}

fn heading(destination: Destination) -> &'static str {
    match destination {
        Destination::Setting(SettingField::MediaUsername | SettingField::MediaPassword) => {
            "Airsonic / Subsonic options"
        }
        Destination::Setting(_) => "HTTPDirFS options",
        _ => "General options",
    }
}
