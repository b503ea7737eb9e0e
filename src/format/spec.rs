//! Format specifiers: a verb letter plus an optional long-form flag.
//!
//! Grammar: `%` [`+`] verb, e.g. `%s`, `%+P`, `%v`.

use crate::utils::config::{LONG_FLAG, VERB_PREFIX};
use crate::utils::error::SpecError;
use std::fmt;
use std::str::FromStr;

/// Rendering verb
///
/// The set is closed; any other letter is kept as `Unknown` and renders
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// `s`: file name, or full path with `+`
    File,
    /// `d`: line number
    Line,
    /// `n`: function name without package path
    FuncName,
    /// `P`: package name, or import path with `+`
    Package,
    /// `v`: `<s>:<d>`
    Location,
    Unknown(char),
}

impl Verb {
    pub fn from_char(c: char) -> Self {
        match c {
            's' => Verb::File,
            'd' => Verb::Line,
            'n' => Verb::FuncName,
            'P' => Verb::Package,
            'v' => Verb::Location,
            other => Verb::Unknown(other),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Verb::File => 's',
            Verb::Line => 'd',
            Verb::FuncName => 'n',
            Verb::Package => 'P',
            Verb::Location => 'v',
            Verb::Unknown(c) => c,
        }
    }
}

/// A parsed format specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    pub verb: Verb,

    /// `+` flag: full file path / import path
    pub long: bool,
}

impl FormatSpec {
    pub fn new(verb: char, long: bool) -> Self {
        Self {
            verb: Verb::from_char(verb),
            long,
        }
    }

    /// Specifier without the `+` flag, e.g. `%s`
    pub fn short(verb: char) -> Self {
        Self::new(verb, false)
    }

    /// Specifier with the `+` flag, e.g. `%+s`
    pub fn long(verb: char) -> Self {
        Self::new(verb, true)
    }

    /// Same flag, different verb
    pub fn with_verb(self, verb: Verb) -> Self {
        Self { verb, ..self }
    }

    /// Parse a specifier string such as `%+P`
    ///
    /// Unknown verb letters are accepted and render nothing.
    ///
    /// # Errors
    /// * `SpecError::Empty` - empty input
    /// * `SpecError::MissingPercent` - input does not start with `%`
    /// * `SpecError::MissingVerb` - nothing after `%` or `%+`
    /// * `SpecError::TrailingInput` - more than one verb character
    pub fn parse(s: &str) -> Result<Self, SpecError> {
        if s.is_empty() {
            return Err(SpecError::Empty);
        }

        let rest = s
            .strip_prefix(VERB_PREFIX)
            .ok_or_else(|| SpecError::MissingPercent(s.to_string()))?;

        let (long, rest) = match rest.strip_prefix(LONG_FLAG) {
            Some(rest) => (true, rest),
            None => (false, rest),
        };

        let mut chars = rest.chars();
        let verb = chars
            .next()
            .ok_or_else(|| SpecError::MissingVerb(s.to_string()))?;

        if !chars.as_str().is_empty() {
            return Err(SpecError::TrailingInput(s.to_string()));
        }

        Ok(Self::new(verb, long))
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self::short('v')
    }
}

impl FromStr for FormatSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", VERB_PREFIX)?;
        if self.long {
            write!(f, "{}", LONG_FLAG)?;
        }
        write!(f, "{}", self.verb.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_verbs() {
        assert_eq!(FormatSpec::parse("%s"), Ok(FormatSpec::short('s')));
        assert_eq!(FormatSpec::parse("%+s"), Ok(FormatSpec::long('s')));
        assert_eq!(FormatSpec::parse("%+P").map(|s| s.verb), Ok(Verb::Package));
        assert_eq!("%v".parse::<FormatSpec>(), Ok(FormatSpec::default()));
    }

    #[test]
    fn test_parse_unknown_verb_is_accepted() {
        let spec = FormatSpec::parse("%x").unwrap();
        assert_eq!(spec.verb, Verb::Unknown('x'));
        assert!(!spec.long);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(FormatSpec::parse(""), Err(SpecError::Empty));
        assert_eq!(
            FormatSpec::parse("s"),
            Err(SpecError::MissingPercent("s".to_string()))
        );
        assert_eq!(
            FormatSpec::parse("%+"),
            Err(SpecError::MissingVerb("%+".to_string()))
        );
        assert_eq!(
            FormatSpec::parse("%sd"),
            Err(SpecError::TrailingInput("%sd".to_string()))
        );
    }

    #[test]
    fn test_display_matches_input() {
        for input in ["%s", "%+s", "%d", "%n", "%P", "%+P", "%v", "%+v", "%q"] {
            assert_eq!(FormatSpec::parse(input).unwrap().to_string(), input);
        }
    }

    #[test]
    fn test_verb_char_mapping() {
        for c in ['s', 'd', 'n', 'P', 'v', 'p', 'T'] {
            assert_eq!(Verb::from_char(c).as_char(), c);
        }
        assert_eq!(Verb::from_char('p'), Verb::Unknown('p'));
    }
}
