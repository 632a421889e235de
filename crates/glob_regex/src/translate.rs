//! Translation of glob patterns into anchored regular expressions.
//!
//! The translator makes a single left-to-right pass over every path segment of the glob. A
//! segment is the run of characters between two separators; each segment is translated on its
//! own and the results are joined with the separator fragment of the [`GlobConstants`] in use.
//!
//! Malformed syntax never fails the translation. If a segment ends while a group, a bracket
//! expression or an escape is still open, the whole segment is matched literally instead.

use smallvec::SmallVec;

use crate::{GlobConstants, GlobError, GlobOptions, GlobRegex, PosixClass};

/// The regex that is produced for an empty glob. It matches nothing, not even the empty string.
pub(crate) const NEVER_MATCH: &str = "(?!)";

/// Characters that have to be escaped to be matched literally outside of a bracket expression.
const REGEX_ESCAPE_CHARS: &[char] = &[
    '\\', '.', '+', '*', '?', '(', ')', '|', '[', ']', '{', '}', '^', '$',
];

/// Characters that have to be escaped to be matched literally inside a bracket expression.
const RANGE_ESCAPE_CHARS: &[char] = &['-', '\\', ']', '[', '^'];

/// An open group. The extended glob groups are named after the character that introduces them.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Group {
    /// `+(..)`
    OneOrMore,
    /// `@(..)`
    ExactlyOne,
    /// `?(..)`
    ZeroOrOne,
    /// `*(..)`
    ZeroOrMore,
    /// `!(..)`
    Not,
    /// `{..}`
    Brace,
}

impl Group {
    /// Returns the regex that opens the group.
    fn open(self) -> &'static str {
        match self {
            Group::Not => "(?!",
            _ => "(?:",
        }
    }

    /// Returns what follows the closing parenthesis of the group.
    fn close<'c>(self, constants: &'c GlobConstants) -> &'c str {
        match self {
            Group::OneOrMore => "+",
            Group::ZeroOrOne => "?",
            Group::ZeroOrMore => "*",
            Group::Not => constants.wildcard,
            Group::ExactlyOne | Group::Brace => "",
        }
    }

    /// Returns the group introduced by `c` when it is directly followed by `(`.
    fn extended(c: char) -> Option<Group> {
        match c {
            '+' => Some(Group::OneOrMore),
            '@' => Some(Group::ExactlyOne),
            '?' => Some(Group::ZeroOrOne),
            '*' => Some(Group::ZeroOrMore),
            '!' => Some(Group::Not),
            _ => None,
        }
    }
}

/// The last item of an open bracket expression, used to tell a `-` range operator from a
/// literal `-`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum RangeItem {
    /// Nothing, a named class or the end of a character range.
    None,
    /// A single character that may start a character range.
    Char,
    /// A `-` following a [`RangeItem::Char`]. It is only written once the next item is known.
    Hyphen,
}

/// An open bracket expression.
#[derive(Debug, Clone, Copy)]
struct Range {
    /// Offset of the `[` in the segment regex.
    start: usize,
    /// Length of the segment regex right after the opening `[` or `[^`.
    body: usize,
    negated: bool,
    last: RangeItem,
}

impl Range {
    /// Pushes a single character, written by `push`.
    fn push_char(&mut self, segment: &mut String, push: impl FnOnce(&mut String)) {
        if self.last == RangeItem::Hyphen {
            segment.push('-');
            push(segment);
            self.last = RangeItem::None;
        } else {
            push(segment);
            self.last = RangeItem::Char;
        }
    }

    /// Pushes an unescaped `-`. Only a range operator is written raw, so two of them can never
    /// be read as the class difference `--`.
    fn push_hyphen(&mut self, segment: &mut String) {
        match self.last {
            RangeItem::Char => self.last = RangeItem::Hyphen,
            RangeItem::Hyphen => {
                segment.push_str(r"-\-");
                self.last = RangeItem::None;
            }
            RangeItem::None => {
                segment.push_str(r"\-");
                self.last = RangeItem::Char;
            }
        }
    }

    /// Pushes a named class fragment.
    fn push_class(&mut self, segment: &mut String, fragment: Option<&str>) {
        self.flush(segment);
        if let Some(fragment) = fragment {
            segment.push_str(fragment);
        }
    }

    /// Writes a pending `-` as a literal.
    fn flush(&mut self, segment: &mut String) {
        if self.last == RangeItem::Hyphen {
            segment.push_str(r"\-");
        }
        self.last = RangeItem::None;
    }
}

/// Translates `glob` into the source of an anchored regular expression.
///
/// The returned string does not carry the case-insensitivity flag; that is applied when the
/// regex is compiled by [`glob_to_regex_with`].
///
/// ```
/// use glob_regex::{translate, GlobConstants, GlobOptions};
///
/// let regex = translate(&GlobConstants::POSIX, "src/*.rs", &GlobOptions::default());
/// assert_eq!(regex, r"^src/+[^/]*\.rs/*$");
/// ```
pub fn translate(constants: &GlobConstants, glob: &str, options: &GlobOptions) -> String {
    if glob.is_empty() {
        return NEVER_MATCH.to_owned();
    }

    let mut glob: Vec<char> = glob.chars().collect();

    // Remove trailing separators, but keep a lone separator.
    while glob.len() > 1 && glob.last().is_some_and(|&c| constants.is_sep(c)) {
        glob.pop();
    }

    let at = |k: usize| glob.get(k).copied();
    let bounded = |c: Option<char>| c.is_none_or(|c| constants.is_sep(c));

    let mut regex = String::with_capacity(glob.len() * 2 + 2);
    regex.push('^');

    let mut j = 0;
    while j < glob.len() {
        let mut segment = String::new();
        let mut groups: SmallVec<[Group; 4]> = SmallVec::new();
        let mut range: Option<Range> = None;
        let mut in_escape = false;
        let mut ends_with_sep = false;
        let mut i = j;

        while i < glob.len() && !constants.is_sep(glob[i]) {
            let c = glob[i];
            let top = groups.last().copied();

            if in_escape {
                in_escape = false;
                if let Some(open) = range.as_mut() {
                    open.push_char(&mut segment, |segment| push_range_escaped(segment, c));
                } else {
                    push_literal(&mut segment, c);
                }
            } else if c == constants.escape_prefix {
                in_escape = true;
            } else if c == '[' && range.is_none() {
                let start = segment.len();
                segment.push('[');
                let negated = matches!(at(i + 1), Some('!' | '^'));
                if negated {
                    i += 1;
                    segment.push('^');
                }
                range = Some(Range {
                    start,
                    body: segment.len(),
                    negated,
                    last: RangeItem::None,
                });
            } else if let Some((class, end)) = (c == '[' && range.is_some())
                .then(|| posix_class(constants, &glob, i))
                .flatten()
            {
                if let Some(open) = range.as_mut() {
                    open.push_class(&mut segment, class.map(PosixClass::fragment));
                }
                i = end;
            } else if let (']', Some(mut open)) = (c, range) {
                range = None;
                open.flush(&mut segment);
                if segment.len() == open.body {
                    // `[]` can never match, `[!]` matches any character.
                    segment.truncate(open.start);
                    segment.push_str(if open.negated { r"[\s\S]" } else { NEVER_MATCH });
                } else {
                    segment.push(']');
                }
            } else if let Some(open) = range.as_mut() {
                if c == '-' {
                    open.push_hyphen(&mut segment);
                } else {
                    open.push_char(&mut segment, |segment| push_range_raw(segment, c));
                }
            } else if c == ')' && top.is_some_and(|group| group != Group::Brace) {
                segment.push(')');
                if let Some(group) = groups.pop() {
                    segment.push_str(group.close(constants));
                }
            } else if c == '|' && top.is_some_and(|group| group != Group::Brace) {
                segment.push('|');
            } else if let Some(group) = Group::extended(c)
                .filter(|_| options.extended && at(i + 1) == Some('('))
            {
                i += 1;
                groups.push(group);
                segment.push_str(group.open());
            } else if c == '?' {
                segment.push('.');
            } else if c == '{' {
                groups.push(Group::Brace);
                segment.push_str(Group::Brace.open());
            } else if c == '}' && top == Some(Group::Brace) {
                groups.pop();
                segment.push(')');
            } else if c == ',' && top == Some(Group::Brace) {
                segment.push('|');
            } else if c == '*' {
                let prev = i.checked_sub(1).map(|k| glob[k]);
                let mut stars = 1;
                while at(i + 1) == Some('*') {
                    i += 1;
                    stars += 1;
                }
                if options.globstar && stars == 2 && bounded(prev) && bounded(at(i + 1)) {
                    segment.push_str(constants.globstar);
                    ends_with_sep = true;
                } else {
                    segment.push_str(constants.wildcard);
                }
            } else {
                push_literal(&mut segment, c);
            }

            i += 1;
        }

        if !groups.is_empty() || range.is_some() || in_escape {
            let literal: String = glob[j..i].iter().collect();
            tracing::debug!(
                segment = %literal,
                "glob segment has unterminated syntax, matching it literally"
            );
            segment.clear();
            for &c in &glob[j..i] {
                push_literal(&mut segment, c);
            }
            ends_with_sep = false;
        }

        regex.push_str(&segment);
        if !ends_with_sep {
            regex.push_str(if i < glob.len() {
                constants.sep
            } else {
                constants.sep_maybe
            });
        }

        // Skip the separators that end the segment.
        while i < glob.len() && constants.is_sep(glob[i]) {
            i += 1;
        }

        assert!(i > j, "Assertion failure: i > j (potential infinite loop)");
        j = i;
    }

    regex.push('$');
    regex
}

/// Compiles `glob` into a [`GlobRegex`] using the built-in constants of `options.os`.
///
/// ```
/// use glob_regex::{glob_to_regex, GlobOptions, Os};
///
/// let regex = glob_to_regex("**/*.{rs,toml}", &GlobOptions::default().with_os(Os::Posix)).unwrap();
/// assert!(regex.is_match("crates/glob_regex/Cargo.toml"));
/// assert!(!regex.is_match("README.md"));
/// ```
pub fn glob_to_regex(glob: &str, options: &GlobOptions) -> Result<GlobRegex, GlobError> {
    glob_to_regex_with(GlobConstants::for_os(options.os), glob, options)
}

/// Compiles `glob` into a [`GlobRegex`] using caller supplied constants.
///
/// The only error is a generated regex the engine refuses, e.g. for a reversed range like
/// `[z-a]`. Unterminated syntax is matched literally instead.
pub fn glob_to_regex_with(
    constants: &GlobConstants,
    glob: &str,
    options: &GlobOptions,
) -> Result<GlobRegex, GlobError> {
    let source = translate(constants, glob, options);
    tracing::trace!(glob, regex = %source, "translated glob");
    GlobRegex::new(glob, source, options.case_insensitive)
}

/// Parses a named class like `[:alpha:]` that starts at `glob[i]`.
///
/// Returns the class (`None` for an unknown name, which matches nothing) and the index of the
/// closing `]`. Returns `None` if `glob[i..]` is not a complete class.
fn posix_class(
    constants: &GlobConstants,
    glob: &[char],
    i: usize,
) -> Option<(Option<PosixClass>, usize)> {
    if glob.get(i + 1) != Some(&':') {
        return None;
    }
    let name_start = i + 2;
    let name_len = glob[name_start.min(glob.len())..]
        .iter()
        .take_while(|&&c| c != ':' && !constants.is_sep(c))
        .count();
    let colon = name_start + name_len;
    if glob.get(colon) != Some(&':') || glob.get(colon + 1) != Some(&']') {
        return None;
    }
    let name: String = glob[name_start..colon].iter().collect();
    Some((name.parse().ok(), colon + 1))
}

fn push_literal(segment: &mut String, c: char) {
    if REGEX_ESCAPE_CHARS.contains(&c) {
        segment.push('\\');
    }
    segment.push(c);
}

/// Pushes an unescaped glob character that is part of a bracket expression.
fn push_range_raw(segment: &mut String, c: char) {
    match c {
        '\\' => segment.push_str(r"\\"),
        '[' => segment.push_str(r"\["),
        _ => push_range_char(segment, c),
    }
}

/// Pushes a character inside a bracket expression that was escaped in the glob.
fn push_range_escaped(segment: &mut String, c: char) {
    if RANGE_ESCAPE_CHARS.contains(&c) {
        segment.push('\\');
        segment.push(c);
    } else {
        push_range_char(segment, c);
    }
}

fn push_range_char(segment: &mut String, c: char) {
    // Doubled `&` or `~` would be read as class set operators.
    match c {
        '&' => segment.push_str(r"\x26"),
        '~' => segment.push_str(r"\x7E"),
        _ => segment.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Os;
    use insta::assert_snapshot;
    use rstest::rstest;

    fn posix(glob: &str) -> String {
        translate(&GlobConstants::POSIX, glob, &GlobOptions::default())
    }

    fn windows(glob: &str) -> String {
        translate(&GlobConstants::WINDOWS, glob, &GlobOptions::default())
    }

    #[test]
    fn test_empty_glob() {
        assert_eq!(posix(""), NEVER_MATCH);
        assert_eq!(windows(""), NEVER_MATCH);
    }

    #[test]
    fn test_separators() {
        assert_snapshot!(posix("src/"), @"^src/*$");
        assert_snapshot!(posix("a//b"), @"^a/+b/*$");
        assert_snapshot!(posix("/"), @"^/+$");
        assert_snapshot!(posix("/usr/lib"), @"^/+usr/+lib/*$");
    }

    #[test]
    fn test_wildcards() {
        assert_snapshot!(posix("*.js"), @r"^[^/]*\.js/*$");
        assert_snapshot!(posix("a**b"), @"^a[^/]*b/*$");
        assert_snapshot!(posix("file?.txt"), @r"^file.\.txt/*$");
    }

    #[test]
    fn test_globstar() {
        assert_snapshot!(posix("a/**/b"), @"^a/+(?:[^/]*(?:/|$)+)*b/*$");
        assert_snapshot!(posix("**/*.rs"), @r"^(?:[^/]*(?:/|$)+)*[^/]*\.rs/*$");
        assert_snapshot!(posix("a/**"), @"^a/+(?:[^/]*(?:/|$)+)*$");
        assert_snapshot!(posix("a/***/b"), @"^a/+[^/]*/+b/*$");

        let options = GlobOptions::default().with_globstar(false);
        assert_snapshot!(
            translate(&GlobConstants::POSIX, "a/**/b", &options),
            @"^a/+[^/]*/+b/*$"
        );
    }

    #[test]
    fn test_ranges() {
        assert_snapshot!(posix("[a-c]"), @"^[a-c]/*$");
        assert_snapshot!(posix("[!a]"), @"^[^a]/*$");
        assert_snapshot!(posix("[^a]"), @"^[^a]/*$");
        assert_snapshot!(posix("[[:digit:]]"), @"^[0-9]/*$");
        assert_snapshot!(posix("[[:alpha:][:digit:]_]"), @"^[A-Za-z0-9_]/*$");
        assert_snapshot!(posix("[[:bogus:]]"), @"^(?!)/*$");
        assert_snapshot!(posix("[]"), @"^(?!)/*$");
        assert_snapshot!(posix("[!]"), @r"^[\s\S]/*$");
        assert_snapshot!(posix(r"[\]]"), @r"^[\]]/*$");
        assert_snapshot!(posix("[a&&b]"), @r"^[a\x26\x26b]/*$");
        assert_snapshot!(posix("[[a]"), @r"^[\[a]/*$");
    }

    #[test]
    fn test_range_hyphens() {
        assert_snapshot!(posix("[+--]"), @r"^[+-\-]/*$");
        assert_snapshot!(posix("[--0]"), @r"^[\--0]/*$");
        assert_snapshot!(posix("[---]"), @r"^[\--\-]/*$");
        assert_snapshot!(posix("[-a]"), @r"^[\-a]/*$");
        assert_snapshot!(posix("[a-]"), @r"^[a\-]/*$");
        assert_snapshot!(posix("[!-]"), @r"^[^\-]/*$");
        assert_snapshot!(posix("[a-c-e]"), @r"^[a-c\-e]/*$");
        assert_snapshot!(posix("[a-[:digit:]]"), @r"^[a\-0-9]/*$");
        assert_snapshot!(posix(r"[\--0]"), @r"^[\--0]/*$");
    }

    #[test]
    fn test_braces() {
        assert_snapshot!(posix("{foo,bar}.txt"), @r"^(?:foo|bar)\.txt/*$");
        assert_snapshot!(posix("a,b}"), @r"^a,b\}/*$");
    }

    #[test]
    fn test_extended_groups() {
        assert_snapshot!(posix("+(ab)"), @"^(?:ab)+/*$");
        assert_snapshot!(posix("@(a|b)"), @"^(?:a|b)/*$");
        assert_snapshot!(posix("?(a)b?"), @"^(?:a)?b./*$");
        assert_snapshot!(posix("*(ab)"), @"^(?:ab)*/*$");
        assert_snapshot!(posix("!(foo).txt"), @r"^(?!foo)[^/]*\.txt/*$");
        assert_snapshot!(posix("a|b"), @r"^a\|b/*$");
    }

    #[test]
    fn test_extended_groups_disabled() {
        let options = GlobOptions::default().with_extended(false);
        let translate = |glob| translate(&GlobConstants::POSIX, glob, &options);
        assert_snapshot!(translate("+(ab)"), @r"^\+\(ab\)/*$");
        assert_snapshot!(translate("@(a)"), @r"^@\(a\)/*$");
        assert_snapshot!(translate("?(a)"), @r"^.\(a\)/*$");
        assert_snapshot!(translate("!(a)"), @r"^!\(a\)/*$");
    }

    #[test]
    fn test_escapes() {
        assert_snapshot!(posix(r"\*"), @r"^\*/*$");
        assert_snapshot!(posix(r"\[a]"), @r"^\[a\]/*$");
        assert_snapshot!(windows("`*"), @r"^\*(?:\\|/)*$");
    }

    #[rstest]
    #[case::unterminated_range("[unterminated", r"^\[unterminated/*$")]
    #[case::unterminated_brace("{a,b", r"^\{a,b/*$")]
    #[case::unterminated_group("+(a", r"^\+\(a/*$")]
    #[case::dangling_escape(r"foo\", r"^foo\\/*$")]
    #[case::only_the_broken_segment("{a/b}", r"^\{a/+b\}/*$")]
    #[case::escaped_separator(r"a\/b", r"^a\\/+b/*$")]
    fn test_malformed_segments_are_literal(#[case] glob: &str, #[case] expected: &str) {
        assert_eq!(posix(glob), expected);
    }

    #[test]
    fn test_windows_separators() {
        assert_snapshot!(windows(r"a\b"), @r"^a(?:\\|/)+b(?:\\|/)*$");
        assert_snapshot!(windows("a/**/b"), @r"^a(?:\\|/)+(?:[^\\/]*(?:\\|/|$)+)*b(?:\\|/)*$");
        assert_snapshot!(windows(r"dir\"), @r"^dir(?:\\|/)*$");
    }

    #[test]
    fn test_glob_to_regex_uses_os() {
        let options = GlobOptions::default().with_os(Os::Windows);
        let regex = glob_to_regex(r"src\*.rs", &options).unwrap();
        assert!(regex.is_match(r"src\lib.rs"));
        assert!(regex.is_match("src/lib.rs"));

        let options = GlobOptions::default().with_os(Os::Posix);
        let regex = glob_to_regex(r"src\*.rs", &options).unwrap();
        assert!(!regex.is_match(r"src\lib.rs"));
        assert!(regex.is_match(r"src*.rs"));
    }
}
