#![deny(missing_docs)]
//! A crate for compiling shell-style glob patterns into anchored regular expressions.
//!
//! This crate provides utilities for:
//! - Translating a glob into the source of an equivalent regular expression ([`translate`])
//! - Compiling a glob into a ready to use matcher ([`glob_to_regex`], [`GlobRegex`])
//! - Detecting whether a string contains glob syntax ([`is_glob`])
//! - Normalizing and joining globs without losing the meaning of `**` ([`normalize_glob`],
//!   [`join_globs`])
//!
//! # Glob Syntax
//!
//! - `*` matches any run of characters within a path segment, `?` matches a single character.
//! - `**` as a whole segment matches any number of segments (when `globstar` is enabled).
//! - `[abc]`, `[a-z]` and `[!abc]` / `[^abc]` match a single character from (or not from) a set.
//!   Named classes like `[[:digit:]]` or `[[:alpha:]_]` may be used inside the brackets.
//! - `{foo,bar}` matches either alternative.
//! - `@(a|b)`, `?(a|b)`, `+(a|b)`, `*(a|b)` match exactly one, at most one, at least one or
//!   any number of the alternatives, and `!(a|b)` matches anything that does not start with
//!   them (when `extended` is enabled).
//! - The escape character (`\` on POSIX, `` ` `` on Windows) makes the next character literal.
//!
//! Separators are described by [`GlobConstants`]. The regex for a glob is always anchored at
//! both ends and tolerates trailing separators in the matched path.
//!
//! # Malformed globs
//!
//! A path segment that ends inside a group, a bracket expression or an escape is matched
//! literally, e.g. `[abc` only matches the string `[abc`. The empty glob matches nothing.

mod constants;
mod error;
mod is_glob;
mod matcher;
mod normalize;
mod options;
mod os;
mod posix_class;
mod translate;

pub use constants::GlobConstants;
pub use error::GlobError;
pub use is_glob::is_glob;
pub use matcher::GlobRegex;
pub use normalize::{join_globs, normalize, normalize_glob};
pub use options::GlobOptions;
pub use os::{Os, ParseOsError};
pub use posix_class::PosixClass;
pub use translate::{glob_to_regex, glob_to_regex_with, translate};
