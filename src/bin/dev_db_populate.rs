use clap::Parser;
use std::process::ExitCode;

use yellow_seed::app::{run_script, Script};

/// Print fixture SQL for `host` and example.com, e.g. `dev_db_populate myhost.test | mysql`
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    host: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    run_script(Script::Populate, &args.host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_one_positional_host() {
        let args = Args::try_parse_from(["dev_db_populate", "myhost.test"]).unwrap();
        assert_eq!(args.host, "myhost.test");
    }

    #[test]
    fn missing_host_is_a_usage_error() {
        let err = Args::try_parse_from(["dev_db_populate"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn extra_arguments_are_rejected() {
        assert!(Args::try_parse_from(["dev_db_populate", "a.test", "b.test"]).is_err());
    }
}
