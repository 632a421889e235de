use thiserror::Error;

/// Errors that can occur when compiling or normalizing a glob.
#[derive(Error, Debug)]
pub enum GlobError {
    /// The regex generated for the glob was rejected by the regex engine, e.g. for a reversed
    /// character range like `[z-a]`.
    #[error("glob '{glob}' translates to an invalid regex")]
    InvalidRegex {
        /// The glob that was compiled.
        glob: String,
        /// The error reported by the regex engine.
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// The glob contains a character that can never be part of a path.
    #[error("glob contains invalid characters: '{}'", .glob.escape_debug())]
    InvalidCharacter {
        /// The offending glob.
        glob: String,
    },
}
