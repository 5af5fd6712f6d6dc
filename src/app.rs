use anyhow::{Context, Result};
use std::io::{self, Write};
use std::process::ExitCode;

use crate::config::{app_config_dir, SeedConfig};
use crate::fixture::MESSAGES_MODULE;
use crate::logger::{self, check_host, debug, error, info, warn};
use crate::seed::{write_sections, Seed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Create the module database users, databases and grants.
    Init,
    /// Insert admins, modules, domains, users and messages.
    Populate,
}

impl Script {
    pub fn name(self) -> &'static str {
        match self {
            Script::Init => "init",
            Script::Populate => "populate",
        }
    }
}

/// Open the log under the app config directory. Failure only disables
/// logging.
pub fn init_logging(script: Script) {
    if let Some(dir) = app_config_dir() {
        let _ = logger::init(&dir, script.name());
    }
}

/// Entry point shared by every binary: run `script`, report failures on
/// stderr and in the log.
pub fn run_script(script: Script, host: &str) -> ExitCode {
    init_logging(script);
    match run_app(script, host) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_broken_pipe(&err) => {
            debug("stdout closed early");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            error(&format!("fatal error: {:?}", err));
            ExitCode::FAILURE
        }
    }
}

/// Load the config, then print the script's SQL to stdout.
pub fn run_app(script: Script, host: &str) -> Result<()> {
    let config = SeedConfig::load()?;
    if !config.modules.iter().any(|m| m.name == MESSAGES_MODULE) {
        warn(&format!(
            "module {} is not configured; fixture messages target an unprovisioned database",
            MESSAGES_MODULE
        ));
    }

    let seed = Seed::new(&config);
    let sections = match script {
        Script::Init => seed.provision(),
        Script::Populate => {
            check_host(host);
            seed.populate(host)
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_sections(&mut out, &sections).context("failed to write SQL to stdout")?;
    out.flush().context("failed to flush stdout")?;

    info(&format!(
        "host '{}': {} statements",
        host,
        sections.iter().map(|s| s.statements.len()).sum::<usize>()
    ));
    Ok(())
}

/// `dev_db_populate host | head` closes the pipe; that is not a failure.
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .map_or(false, |e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_pipe_is_recognized_through_context() {
        let err = anyhow::Error::new(io::Error::from(io::ErrorKind::BrokenPipe))
            .context("failed to write SQL to stdout");
        assert!(is_broken_pipe(&err));

        let err = anyhow::Error::new(io::Error::from(io::ErrorKind::PermissionDenied))
            .context("failed to write SQL to stdout");
        assert!(!is_broken_pipe(&err));
        assert!(!is_broken_pipe(&anyhow::anyhow!("failed to parse YAML")));
    }

    #[test]
    fn script_names() {
        assert_eq!(Script::Init.name(), "init");
        assert_eq!(Script::Populate.name(), "populate");
    }
}
