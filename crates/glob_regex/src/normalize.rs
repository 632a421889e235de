//! Lexical normalization of paths and globs.
//!
//! Normalization never touches the filesystem: `.` segments are dropped, separator runs are
//! collapsed and `..` is resolved against the segment before it.

use itertools::Itertools;

use crate::{GlobError, GlobOptions, Os};

/// Marks a `..` that must survive normalization. It can not occur in a valid glob.
const PROTECTED_PARENT: char = '\0';

/// Normalizes `path` for the given path flavour.
///
/// A trailing separator is preserved and an empty relative result becomes `.`. Leading `..`
/// segments of relative paths are kept, those above the root of an absolute path are dropped.
/// Windows paths may start with a drive (`C:`) or a UNC prefix (`\\server\share`) and are
/// always written with `\`.
pub fn normalize(path: &str, os: Os) -> String {
    match os {
        Os::Posix => normalize_posix(path),
        Os::Windows => normalize_windows(path),
    }
}

/// Normalizes a glob like [`normalize`], but with `options.globstar` set a `..` that directly
/// follows a `**` segment is kept, because `**` may have matched any number of segments.
///
/// # Errors
/// Returns [`GlobError::InvalidCharacter`] if the glob contains a NUL character.
pub fn normalize_glob(glob: &str, options: &GlobOptions) -> Result<String, GlobError> {
    if glob.contains(PROTECTED_PARENT) {
        return Err(GlobError::InvalidCharacter {
            glob: glob.to_owned(),
        });
    }

    if !options.globstar {
        return Ok(normalize(glob, options.os));
    }

    let protected = protect_globstar_parents(glob, options.os);
    Ok(normalize(&protected, options.os).replace(PROTECTED_PARENT, ".."))
}

/// Joins the non-empty `globs` with the separator of `options.os` and normalizes the result.
///
/// Returns `.` if there is nothing to join.
///
/// # Errors
/// Returns [`GlobError::InvalidCharacter`] if `options.globstar` is set and one of the globs
/// contains a NUL character.
pub fn join_globs<'a>(
    globs: impl IntoIterator<Item = &'a str>,
    options: &GlobOptions,
) -> Result<String, GlobError> {
    let separator = options.os.separator().to_string();
    let joined = globs
        .into_iter()
        .filter(|glob| !glob.is_empty())
        .join(&separator);

    if joined.is_empty() {
        return Ok(".".to_owned());
    }
    if !options.globstar {
        return Ok(normalize(&joined, options.os));
    }
    normalize_glob(&joined, options)
}

fn normalize_posix(path: &str) -> String {
    if path.is_empty() {
        return ".".to_owned();
    }

    let is_absolute = path.starts_with('/');
    let has_trailing_separator = path.ends_with('/');

    let mut normalized = resolve_segments(path.split('/'), !is_absolute).join("/");
    if normalized.is_empty() && !is_absolute {
        normalized.push('.');
    }
    if !normalized.is_empty() && has_trailing_separator {
        normalized.push('/');
    }

    if is_absolute {
        format!("/{normalized}")
    } else {
        normalized
    }
}

fn normalize_windows(path: &str) -> String {
    if path.is_empty() {
        return ".".to_owned();
    }

    let is_separator = |c: char| Os::Windows.is_separator(c);
    let (device, is_absolute, rest) = split_windows_root(path);
    let has_trailing_separator = path.ends_with(is_separator);

    let mut tail = resolve_segments(rest.split(is_separator), !is_absolute).join("\\");
    if tail.is_empty() && !is_absolute {
        tail.push('.');
    }
    if !tail.is_empty() && has_trailing_separator {
        tail.push('\\');
    }

    let root = if is_absolute { "\\" } else { "" };
    format!("{device}{root}{tail}")
}

/// Splits a windows path into its device, whether it is rooted, and the remaining path.
fn split_windows_root(path: &str) -> (String, bool, &str) {
    let is_separator = |c: char| Os::Windows.is_separator(c);
    let mut chars = path.chars();

    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) if is_separator(a) && is_separator(b) => {
            // `\\server\share\...`
            let mut parts = path[2..].splitn(3, is_separator);
            match (parts.next(), parts.next()) {
                (Some(server), Some(share)) if !server.is_empty() && !share.is_empty() => {
                    let rest = parts.next().unwrap_or("");
                    (format!(r"\\{server}\{share}"), true, rest)
                }
                _ => (String::new(), true, path),
            }
        }
        (Some(a), _) if is_separator(a) => (String::new(), true, path),
        (Some(drive), Some(':')) if drive.is_ascii_alphabetic() => {
            let rest = &path[2..];
            (format!("{drive}:"), rest.starts_with(is_separator), rest)
        }
        _ => (String::new(), false, path),
    }
}

/// Drops empty and `.` segments and resolves `..` against the preceding segment.
fn resolve_segments<'a>(
    segments: impl Iterator<Item = &'a str>,
    allow_above_root: bool,
) -> Vec<&'a str> {
    let mut resolved: Vec<&str> = Vec::new();
    for segment in segments {
        match segment {
            "" | "." => {}
            ".." => {
                if resolved.last().is_some_and(|&last| last != "..") {
                    resolved.pop();
                } else if allow_above_root {
                    resolved.push("..");
                }
            }
            segment => resolved.push(segment),
        }
    }
    resolved
}

/// Replaces every `..` segment that directly follows a `**` segment with [`PROTECTED_PARENT`].
fn protect_globstar_parents(glob: &str, os: Os) -> String {
    let mut protected = String::with_capacity(glob.len());
    let mut previous: Option<&str> = None;
    let mut rest = glob;

    loop {
        let end = rest.find(|c: char| os.is_separator(c)).unwrap_or(rest.len());
        let segment = &rest[..end];
        if segment == ".." && previous == Some("**") {
            protected.push(PROTECTED_PARENT);
        } else {
            protected.push_str(segment);
        }

        let separators_end = rest[end..]
            .find(|c: char| !os.is_separator(c))
            .map_or(rest.len(), |offset| end + offset);
        protected.push_str(&rest[end..separators_end]);

        if separators_end == rest.len() {
            break;
        }
        previous = Some(segment);
        rest = &rest[separators_end..];
    }

    protected
}
