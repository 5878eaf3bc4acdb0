//! Classification of a single command line token.
//!
//! These helpers are pure; they never look at more than the one token they are given.
use crate::constant::*;

/// The shape of one command line token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'t> {
    /// Exactly `--`: every following token is positional.
    EndOfOptions,
    /// Exactly `-`: treated as a positional argument.
    Dash,
    /// `--name` or `--name=value`.
    Long {
        /// The text between `--` and the first `=`.
        name: &'t str,
        /// The text after the first `=`, when present.
        inline: Option<&'t str>,
    },
    /// `-abc` or `-abc=value`; the inline value belongs to the final character only.
    Short {
        /// The characters between `-` and the first `=`.
        cluster: &'t str,
        /// The text after the first `=`, when present.
        inline: Option<&'t str>,
    },
    /// Anything else.
    Positional(&'t str),
}

/// Classify a token.
///
/// ### Example
/// ```
/// # use argvise_core as argvise;
/// use argvise::tokens::{classify, Token};
///
/// assert_eq!(classify("--"), Token::EndOfOptions);
/// assert_eq!(classify("--key=1"), Token::Long { name: "key", inline: Some("1") });
/// assert_eq!(classify("-ab"), Token::Short { cluster: "ab", inline: None });
/// assert_eq!(classify("value"), Token::Positional("value"));
/// ```
pub fn classify(token: &str) -> Token<'_> {
    if token == END_OF_OPTIONS {
        return Token::EndOfOptions;
    }

    if token == SHORT_PREFIX {
        return Token::Dash;
    }

    // Find a 'long' option, such as:
    //  --initial
    //  --initial=..
    if let Some(content) = token.strip_prefix(LONG_PREFIX) {
        let (name, inline) = split_inline(content);
        return Token::Long { name, inline };
    }

    // Find 'short' option(s), such as (both -i and -v are example short options):
    //  -i
    //  -i=..
    //  -iv
    //  -iv=..
    if let Some(content) = token.strip_prefix(SHORT_PREFIX) {
        let (cluster, inline) = split_inline(content);
        return Token::Short { cluster, inline };
    }

    Token::Positional(token)
}

/// Split option content at the first `=`.
///
/// Only the first `=` separates: `key=a=b` splits into `key` and `a=b`.
pub fn split_inline(content: &str) -> (&str, Option<&str>) {
    match content.split_once(INLINE_SEPARATOR) {
        Some((name, value)) => (name, Some(value)),
        None => (content, None),
    }
}

/// Whether `name` is a valid long option name: an alphabetic character followed by alphanumerics or dashes.
pub fn is_valid_long_name(name: &str) -> bool {
    let mut characters = name.chars();

    match characters.next() {
        Some(first) if is_alphabetic(first) => characters.all(is_alphanumeric_or_dash),
        _ => false,
    }
}

/// Whether `name` is a valid short option character.
pub fn is_valid_short_name(name: char) -> bool {
    is_alphabetic(name)
}

pub(crate) fn is_alphabetic(character: char) -> bool {
    character.is_alphabetic()
}

pub(crate) fn is_alphanumeric_or_dash(character: char) -> bool {
    character.is_alphanumeric() || character == '-'
}
