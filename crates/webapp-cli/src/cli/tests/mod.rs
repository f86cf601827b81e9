//! CLI tests: argument parsing and scripted interactive runs.

use super::Cli;
use clap::Parser;


#[test]
fn cli_parse_no_args() {
    assert!(Cli::try_parse_from(["webapp"]).is_ok());
}

#[test]
fn cli_rejects_flags_and_positionals() {
    assert!(Cli::try_parse_from(["webapp", "--url", "x.org"]).is_err());
    assert!(Cli::try_parse_from(["webapp", "lichess.org"]).is_err());
}

#[test]
fn cli_version_flag_is_handled_by_clap() {
    let err = Cli::try_parse_from(["webapp", "--version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}
