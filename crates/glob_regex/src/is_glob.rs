/// Returns true if `s` looks like it contains glob syntax.
///
/// This is a heuristic: it recognizes wildcards, non-empty bracket and brace expressions,
/// extended glob groups and a leading `!`. A backslash escapes the next character, and an
/// escaped `{`, `(` or `[` hides everything up to its closing counterpart.
///
/// ```
/// use glob_regex::is_glob;
///
/// assert!(is_glob("src/**/*.rs"));
/// assert!(!is_glob("src/lib.rs"));
/// assert!(!is_glob(r"src/\*.rs"));
/// ```
pub fn is_glob(s: &str) -> bool {
    let pattern = lazy_regex::regex!(
        r"\\(.)|(^!|\*|\?|[\].+)]\?|\[[^\\\]]+\]|\{[^\\}]+\}|\(\?[:!=][^\\)]+\)|\([^|]+\|[^\\)]+\))"
    );

    let mut rest = s;
    while let Some(captures) = pattern.captures(rest) {
        if captures.get(2).is_some() {
            return true;
        }

        let Some(whole) = captures.get(0) else {
            break;
        };
        let mut idx = whole.end();

        // An escaped opening bracket skips ahead to its closing counterpart.
        if let Some(close) = captures.get(1).and_then(|open| closing(open.as_str())) {
            if let Some(offset) = rest[idx..].find(close) {
                idx += offset + 1;
            }
        }
        rest = &rest[idx..];
    }

    false
}

fn closing(open: &str) -> Option<char> {
    match open {
        "{" => Some('}'),
        "(" => Some(')'),
        "[" => Some(']'),
        _ => None,
    }
}
