pub mod compile;
pub mod is_glob;
pub mod join;
pub mod matches;
pub mod normalize;

use std::path::PathBuf;

use glob_regex::{GlobOptions, Os};
use miette::IntoDiagnostic;

use crate::config::Config;

/// Options shared by every command that interprets a glob.
#[derive(Debug, clap::Args)]
pub struct GlobArgs {
    /// Path flavour of the glob (`posix` or `windows`), defaults to the current platform
    #[clap(long)]
    os: Option<Os>,

    /// Treat `@(..)`, `+(..)`, `?(..)`, `*(..)` and `!(..)` literally
    #[clap(long)]
    no_extended: bool,

    /// Let `**` match within a single path segment only
    #[clap(long)]
    no_globstar: bool,

    /// Ignore case when matching
    #[clap(long, short = 'i')]
    case_insensitive: bool,

    /// Read default options from a TOML file
    #[clap(long)]
    config: Option<PathBuf>,
}

impl GlobArgs {
    /// Returns the options from the configuration file with the command line flags applied.
    pub fn options(&self) -> miette::Result<GlobOptions> {
        let mut options = match &self.config {
            Some(path) => Config::load(path).into_diagnostic()?.glob,
            None => GlobOptions::default(),
        };

        if let Some(os) = self.os {
            options.os = os;
        }
        if self.no_extended {
            options.extended = false;
        }
        if self.no_globstar {
            options.globstar = false;
        }
        if self.case_insensitive {
            options.case_insensitive = true;
        }

        tracing::debug!(?options, "resolved glob options");
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        glob: GlobArgs,
    }

    fn options(config: &Path, flags: &[&str]) -> GlobOptions {
        let config = config.to_str().unwrap();
        let args = ["glob-regex", "--config", config]
            .into_iter()
            .chain(flags.iter().copied());
        Cli::try_parse_from(args).unwrap().glob.options().unwrap()
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glob-regex.toml");
        fs_err::write(
            &path,
            "[glob]\nos = \"windows\"\nglobstar = true\nextended = false\ncase-insensitive = true\n",
        )
        .unwrap();

        let from_file = GlobOptions::default()
            .with_os(Os::Windows)
            .with_globstar(true)
            .with_extended(false)
            .with_case_insensitive(true);
        assert_eq!(options(&path, &[]), from_file);

        assert_eq!(
            options(&path, &["--no-globstar", "--os", "posix"]),
            from_file.with_globstar(false).with_os(Os::Posix)
        );
    }

    #[test]
    fn test_flags_without_config() {
        let cli = Cli::try_parse_from(["glob-regex", "-i", "--no-extended"]).unwrap();
        assert_eq!(
            cli.glob.options().unwrap(),
            GlobOptions::default()
                .with_case_insensitive(true)
                .with_extended(false)
        );
    }

    #[test]
    fn test_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let cli = Cli::try_parse_from(["glob-regex", "--config", path.to_str().unwrap()]).unwrap();
        assert!(cli.glob.options().is_err());
    }
}
