use crate::Os;

/// Controls how a glob is interpreted.
///
/// The defaults enable every feature of the glob syntax and use the path flavour of the host:
///
/// ```
/// use glob_regex::{GlobOptions, Os};
///
/// let options = GlobOptions::default()
///     .with_case_insensitive(true)
///     .with_os(Os::Posix);
/// assert!(options.extended);
/// assert!(options.globstar);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct GlobOptions {
    /// Enables the extended glob groups `@(..)`, `+(..)`, `?(..)`, `*(..)` and `!(..)`.
    pub extended: bool,

    /// When set, a `**` segment matches any number of path segments. Otherwise `**` behaves
    /// like `*`.
    pub globstar: bool,

    /// Compile the regex so that it ignores case.
    pub case_insensitive: bool,

    /// The path flavour used to pick the separator and escape characters.
    pub os: Os,
}

impl Default for GlobOptions {
    fn default() -> Self {
        Self {
            extended: true,
            globstar: true,
            case_insensitive: false,
            os: Os::current(),
        }
    }
}

impl GlobOptions {
    /// Sets whether extended glob groups are recognized.
    #[must_use]
    pub fn with_extended(self, extended: bool) -> Self {
        Self { extended, ..self }
    }

    /// Sets whether `**` spans path segments.
    #[must_use]
    pub fn with_globstar(self, globstar: bool) -> Self {
        Self { globstar, ..self }
    }

    /// Sets whether matching ignores case.
    #[must_use]
    pub fn with_case_insensitive(self, case_insensitive: bool) -> Self {
        Self {
            case_insensitive,
            ..self
        }
    }

    /// Sets the path flavour.
    #[must_use]
    pub fn with_os(self, os: Os) -> Self {
        Self { os, ..self }
    }
}
