use crate::Os;

/// The regex fragments and characters that describe how a path flavour separates segments.
///
/// The compiler never hardcodes a separator; everything it knows about paths comes from one of
/// these records. The two built-in records are [`GlobConstants::POSIX`] and
/// [`GlobConstants::WINDOWS`], but callers are free to supply their own.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct GlobConstants {
    /// Matches one or more separators between two segments.
    pub sep: &'static str,
    /// Matches an optional run of trailing separators at the end of the pattern.
    pub sep_maybe: &'static str,
    /// The characters that separate segments in the glob itself.
    pub seps: &'static [char],
    /// Replaces a `**` segment: zero or more whole segments including their separators.
    pub globstar: &'static str,
    /// Replaces `*`: any run of characters within a single segment.
    pub wildcard: &'static str,
    /// The character that makes the next glob character literal.
    pub escape_prefix: char,
}

impl GlobConstants {
    /// Constants for `/` separated paths.
    pub const POSIX: GlobConstants = GlobConstants {
        sep: "/+",
        sep_maybe: "/*",
        seps: &['/'],
        globstar: "(?:[^/]*(?:/|$)+)*",
        wildcard: "[^/]*",
        escape_prefix: '\\',
    };

    /// Constants for paths separated by either `\` or `/`.
    pub const WINDOWS: GlobConstants = GlobConstants {
        sep: r"(?:\\|/)+",
        sep_maybe: r"(?:\\|/)*",
        seps: &['\\', '/'],
        globstar: r"(?:[^\\/]*(?:\\|/|$)+)*",
        wildcard: r"[^\\/]*",
        escape_prefix: '`',
    };

    /// Returns the built-in constants for the given path flavour.
    pub const fn for_os(os: Os) -> &'static GlobConstants {
        match os {
            Os::Posix => &Self::POSIX,
            Os::Windows => &Self::WINDOWS,
        }
    }

    /// Returns true if `c` is one of the separator characters.
    pub fn is_sep(&self, c: char) -> bool {
        self.seps.contains(&c)
    }
}

impl Default for GlobConstants {
    fn default() -> Self {
        *Self::for_os(Os::current())
    }
}
