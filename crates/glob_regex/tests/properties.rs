use glob_regex::{glob_to_regex_with, translate, GlobConstants, GlobError, GlobOptions, Os};
use proptest::prelude::*;
use proptest::string::string_regex;

/// Globs built from the characters that drive the translator into its interesting states.
fn adversarial_glob() -> impl Strategy<Value = String> {
    string_regex(r"[ab/\\`*?\[\]{}()!@+,|:^.\-]{0,24}").unwrap()
}

/// Paths without any glob or regex syntax.
fn literal_path() -> impl Strategy<Value = String> {
    string_regex(r"[a-zA-Z0-9_ ~%=#-]{1,8}(/[a-zA-Z0-9_ ~%=#-]{1,8}){0,3}").unwrap()
}

/// Endpoints of a bracket range, clustered around `-` (0x2D).
fn range_endpoint() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '0', '1', '9', ':', ';', '<',
        '=', '>', '?', '@', 'A', 'Z', '_', 'a', 'z', '~',
    ])
}

fn arb_options() -> impl Strategy<Value = GlobOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(extended, globstar, ci)| {
        GlobOptions::default()
            .with_extended(extended)
            .with_globstar(globstar)
            .with_case_insensitive(ci)
    })
}

fn arb_constants() -> impl Strategy<Value = &'static GlobConstants> {
    prop_oneof![
        Just(GlobConstants::for_os(Os::Posix)),
        Just(GlobConstants::for_os(Os::Windows)),
    ]
}

proptest! {
    #[test]
    fn translation_terminates(glob in adversarial_glob(), constants in arb_constants(), options in arb_options()) {
        let regex = translate(constants, &glob, &options);
        if glob.is_empty() {
            prop_assert_eq!(regex, "(?!)");
        } else {
            prop_assert!(regex.starts_with('^'));
            prop_assert!(regex.ends_with('$'));
        }
    }

    #[test]
    fn compilation_only_rejects_ranges(glob in adversarial_glob(), constants in arb_constants(), options in arb_options()) {
        // Only a reversed range like `[b-a]` is rejected by the engine, and that needs a `[` and
        // a `-`.
        match glob_to_regex_with(constants, &glob, &options) {
            Ok(_) => {}
            Err(GlobError::InvalidRegex { .. }) => {
                prop_assert!(glob.contains('[') && glob.contains('-'), "{glob} was rejected");
            }
            Err(err) => prop_assert!(false, "{glob} failed with {err}"),
        }
    }

    #[test]
    fn bracket_range_membership(
        (lo, hi) in (range_endpoint(), range_endpoint()).prop_map(|(a, b)| (a.min(b), a.max(b))),
        options in arb_options(),
    ) {
        let glob = format!("[{lo}-{hi}]");
        let regex = glob_to_regex_with(&GlobConstants::POSIX, &glob, &options.with_case_insensitive(false)).unwrap();
        for c in (' '..='~').filter(|&c| c != '/') {
            prop_assert_eq!(regex.is_match(&c.to_string()), (lo..=hi).contains(&c), "{} ~ {:?} ({})", glob, c, regex);
        }
    }

    #[test]
    fn literal_globs_match_only_themselves(path in literal_path()) {
        let regex = glob_to_regex_with(&GlobConstants::POSIX, &path, &GlobOptions::default()).unwrap();
        prop_assert!(regex.is_match(&path));
        let with_slash = format!("{path}/");
        prop_assert!(regex.is_match(&with_slash));
        let extended = format!("{path}x");
        prop_assert!(!regex.is_match(&extended));
        let prefixed = format!("x{path}");
        prop_assert!(!regex.is_match(&prefixed));
    }
}
