use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

/// The path flavour a glob is interpreted against.
///
/// The flavour decides which characters separate path segments and which character escapes
/// the next one. See [`crate::GlobConstants`] for the exact regex fragments.
#[derive(EnumIter, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Os {
    /// `/` separated paths, `\` escapes.
    Posix,
    /// `\` or `/` separated paths, `` ` `` escapes.
    Windows,
}

impl Os {
    /// Returns the flavour of the platform the current binary was built for.
    pub const fn current() -> Os {
        if cfg!(windows) {
            Os::Windows
        } else {
            Os::Posix
        }
    }

    /// Returns an iterator over all flavours.
    pub fn all() -> impl Iterator<Item = Self> {
        Os::iter()
    }

    /// Returns a string representation of the flavour.
    pub const fn as_str(self) -> &'static str {
        match self {
            Os::Posix => "posix",
            Os::Windows => "windows",
        }
    }

    /// Returns the separator used when joining or normalizing paths.
    pub const fn separator(self) -> char {
        match self {
            Os::Posix => '/',
            Os::Windows => '\\',
        }
    }

    /// Returns true if `c` separates path segments for this flavour.
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Os::Posix => c == '/',
            Os::Windows => c == '/' || c == '\\',
        }
    }
}

impl Default for Os {
    fn default() -> Self {
        Os::current()
    }
}

/// An error that can occur when parsing an [`Os`] from a string.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub struct ParseOsError {
    /// The string that could not be parsed.
    pub string: String,
}

impl Display for ParseOsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a known path flavour. Valid values are {}",
            self.string,
            Os::all().map(|os| format!("'{os}'")).join(", ")
        )
    }
}

impl FromStr for Os {
    type Err = ParseOsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "posix" | "unix" => Os::Posix,
            "windows" | "win" => Os::Windows,
            string => {
                return Err(ParseOsError {
                    string: string.to_owned(),
                });
            }
        })
    }
}

impl Display for Os {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Os {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Os {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Os::from_str(&string).map_err(serde::de::Error::custom)
    }
}
