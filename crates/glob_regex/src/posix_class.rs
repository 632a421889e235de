use strum::{EnumIter, EnumString, IntoStaticStr};

/// A named character class that may appear inside a bracket expression, e.g. `[[:digit:]]`.
#[allow(missing_docs)]
#[derive(EnumIter, EnumString, IntoStaticStr, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum PosixClass {
    Alnum,
    Alpha,
    Ascii,
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    Word,
    Xdigit,
}

impl PosixClass {
    /// Returns the name of the class as it is written between `[:` and `:]`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Returns the contents of a regex character class that matches the same characters.
    ///
    /// The fragment is meant to be placed between `[` and `]`. Every class matches ASCII only,
    /// except [`PosixClass::Space`] which is the Unicode aware `\s` of the regex engine and also
    /// matches e.g. U+00A0 (no-break space).
    pub const fn fragment(self) -> &'static str {
        match self {
            PosixClass::Alnum => "0-9A-Za-z",
            PosixClass::Alpha => "A-Za-z",
            PosixClass::Ascii => r"\x00-\x7F",
            PosixClass::Blank => r"\t ",
            PosixClass::Cntrl => r"\x00-\x1F\x7F",
            PosixClass::Digit => "0-9",
            PosixClass::Graph => r"\x21-\x7E",
            PosixClass::Lower => "a-z",
            PosixClass::Print => r"\x20-\x7E",
            // `&` and `~` are spelled as hex escapes so they never pair up into set operators.
            PosixClass::Punct => r##"!"#$%\x26'()*+,\-./:;<=>?@\[\\\]\^_`{|}\x7E"##,
            PosixClass::Space => r"\s",
            PosixClass::Upper => "A-Z",
            PosixClass::Word => "0-9A-Za-z_",
            PosixClass::Xdigit => "0-9A-Fa-f",
        }
    }
}
