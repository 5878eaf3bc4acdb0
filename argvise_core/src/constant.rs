/// The store key of the pass-through configuration.
pub(crate) const WILDCARD: &str = "*";
/// Every token after this one is positional.
pub(crate) const END_OF_OPTIONS: &str = "--";

pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const SHORT_PREFIX: &str = "-";
pub(crate) const INLINE_SEPARATOR: char = '=';

// Columns between the widest option title and its description.
pub(crate) const DESCRIPTION_GAP: usize = 2;
// Room reserved by an empty name, enough to line up with "-c, ".
pub(crate) const PLACEHOLDER_WIDTH: usize = 4;
pub(crate) const TRAILING_PLACEHOLDER_WIDTH: usize = 2;
pub(crate) const NAME_SEPARATOR: &str = ", ";

// Used when the terminal width is unknown (ex: output is piped).
pub(crate) const DEFAULT_TERMINAL_WIDTH: usize = 80;
