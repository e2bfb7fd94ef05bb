//! Command-line surface
//!
//! The smoke test takes no options. Every argument the host passes is
//! swallowed here so that nothing, `--help` included, changes the output.

use std::ffi::OsString;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "ana-smoke", about = "Ana SUPERIA console smoke test")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Accepted and ignored
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    rest: Vec<OsString>,
}

impl Cli {
    /// Parse the process arguments, never failing
    pub fn parse_lenient() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Parse from an explicit argument list, never failing
    pub fn parse_lenient_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).unwrap_or_default()
    }

    /// Number of arguments that were passed and ignored
    pub fn ignored(&self) -> usize {
        self.rest.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::parse_lenient_from(["ana-smoke"]);
        assert_eq!(cli.ignored(), 0);
    }

    #[test]
    fn test_help_flag_is_swallowed() {
        let cli = Cli::parse_lenient_from(["ana-smoke", "--help", "foo"]);
        assert_eq!(cli.ignored(), 2);
    }

    #[test]
    fn test_version_and_short_flags_are_swallowed() {
        let cli = Cli::parse_lenient_from(["ana-smoke", "-V", "--version", "-x"]);
        assert_eq!(cli.ignored(), 3);
    }
}
