use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use fancy_regex::Regex;

use crate::GlobError;

/// A glob compiled into an anchored regular expression.
///
/// Created by [`crate::glob_to_regex`] or [`crate::glob_to_regex_with`].
#[derive(Debug, Clone)]
pub struct GlobRegex {
    source: String,
    case_insensitive: bool,
    regex: Regex,
}

impl GlobRegex {
    pub(crate) fn new(
        glob: &str,
        source: String,
        case_insensitive: bool,
    ) -> Result<Self, GlobError> {
        let compiled = if case_insensitive {
            Regex::new(&format!("(?i){source}"))
        } else {
            Regex::new(&source)
        };
        let regex = compiled.map_err(|err| GlobError::InvalidRegex {
            glob: glob.to_owned(),
            source: Box::new(err),
        })?;

        Ok(Self {
            source,
            case_insensitive,
            regex,
        })
    }

    /// Returns true if the whole of `path` matches the glob.
    ///
    /// A regex that exceeds the backtracking limit of the engine is reported as not matching.
    pub fn is_match(&self, path: &str) -> bool {
        match self.regex.is_match(path) {
            Ok(matched) => matched,
            Err(err) => {
                tracing::warn!(regex = %self.source, path, "failed to match glob: {err}");
                false
            }
        }
    }

    /// Returns the regex source the glob was translated into, without flags.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns true if the regex ignores case.
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Returns the compiled regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for GlobRegex {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.case_insensitive == other.case_insensitive
    }
}

impl Eq for GlobRegex {}

impl Hash for GlobRegex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.case_insensitive.hash(state);
    }
}

impl Display for GlobRegex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.case_insensitive {
            write!(f, "(?i){}", self.source)
        } else {
            f.write_str(&self.source)
        }
    }
}
