//! Command-line parser.
//!
//! The tool takes no positional arguments; everything it decides comes from
//! the environment and chplconfig.

use std::path::PathBuf;

use clap::Parser;

/// Print the launcher used to start multi-locale programs.
#[derive(Debug, Parser)]
#[command(name = "chpl-launcher")]
#[command(about = "Print the CHPL_LAUNCHER value for this configuration")]
#[command(version)]
pub struct Cli {
    /// Directory containing a chplconfig file (defaults to $CHPL_HOME)
    #[arg(long = "chplconfig", env = "CHPL_CONFIG", value_name = "DIR")]
    pub chplconfig: Option<PathBuf>,

    /// Enable verbose/debug output on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["chpl-launcher", "-v", "--chplconfig", "/etc/chapel"]);
        assert!(cli.verbose);
        assert_eq!(cli.chplconfig, Some(PathBuf::from("/etc/chapel")));
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["chpl-launcher", "gasnet"]).is_err());
    }
}
