use std::io;

use anyhow::{anyhow, Context, Result};
use httpdirfs::args::{run, DEFAULT_PROGRAM};
use httpdirfs::config::ConfigFile;
use httpdirfs::logging::init_tracing;
use httpdirfs::mount::CommandRuntime;
use httpdirfs::transport::HttpTransport;

fn main() -> Result<()> {
    init_tracing();

    let cmdline = collect_args()?;
    let program = cmdline
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

    let config = ConfigFile::locate();
    let mut transport = HttpTransport::new();
    let mut runtime = CommandRuntime::from_env();
    let mut stderr = io::stderr();

    match run(&cmdline, &config, &mut transport, &mut runtime, &mut stderr) {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::debug!(error = ?err, "resolution failed");
            err.report(&program, &mut stderr)
                .context("failed to write error to stderr")?;
            std::process::exit(err.exit_code());
        }
    }
}

fn collect_args() -> Result<Vec<String>> {
    std::env::args_os()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| anyhow!("argument is not valid UTF-8: {}", arg.to_string_lossy()))
        })
        .collect()
}
