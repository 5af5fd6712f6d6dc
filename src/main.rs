use clap::{Parser, Subcommand};
use std::process::ExitCode;

use yellow_seed::app::{run_script, Script};

#[derive(Parser, Debug)]
#[command(name = "yellow-seed")]
#[command(version, about = "Print SQL that initializes and seeds a Yellow development database")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Module database users, databases and grants
    Init {
        /// Server hostname (unused by this script)
        host: String,
    },
    /// Fixture admins, modules, domains, users and messages
    Populate {
        /// Domain the fixture users and messages belong to
        host: String,
    },
}

impl Commands {
    fn script(&self) -> (Script, &str) {
        match self {
            Commands::Init { host } => (Script::Init, host.as_str()),
            Commands::Populate { host } => (Script::Populate, host.as_str()),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let (script, host) = cli.command.script();
    run_script(script, host)
}
