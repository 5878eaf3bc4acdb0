use std::collections::VecDeque;
use std::iter::Peekable;
use std::str::Chars;

/// Breaks a text into lines no wider than a column budget.
///
/// * LF, CR and CRLF force a break.
/// * Lines prefer to break after whitespace or punctuation; the whitespace at the break is dropped.
/// * A word longer than the budget is broken wherever it overflows.
///
/// Every character is one column wide, except control characters which take none.
/// The indent (see [`LineBreaker::set_indent`]) counts against the budget and is not applied to empty lines.
///
/// ### Example
/// ```
/// # use argvise_core as argvise;
/// use argvise::LineBreaker;
///
/// let mut lines = LineBreaker::new("the quick brown fox", 10);
/// assert_eq!(lines.next().unwrap(), "the quick");
/// lines.set_indent("  ");
/// assert_eq!(lines.next().unwrap(), "  brown");
/// assert_eq!(lines.next().unwrap(), "  fox");
/// assert_eq!(lines.next(), None);
/// ```
pub struct LineBreaker<'t> {
    characters: Peekable<Chars<'t>>,
    carry: VecDeque<char>,
    width: usize,
    indent: String,
}

enum Break {
    Mandatory,
    Overflow,
    Exhausted,
}

impl<'t> LineBreaker<'t> {
    /// Break `text` into lines of at most `width` columns.
    pub fn new(text: &'t str, width: usize) -> Self {
        Self {
            characters: text.chars().peekable(),
            carry: VecDeque::default(),
            width,
            indent: String::default(),
        }
    }

    /// Prefix every following line with `indent`.
    pub fn set_indent(&mut self, indent: impl Into<String>) {
        self.indent = indent.into();
    }

    fn next_character(&mut self) -> Option<char> {
        self.carry
            .pop_front()
            .or_else(|| self.characters.next())
    }

    fn budget(&self) -> usize {
        let indent: usize = self.indent.chars().map(column_width).sum();
        std::cmp::max(self.width.saturating_sub(indent), 1)
    }

    fn fill(&mut self, line: &mut Vec<char>) -> Break {
        let budget = self.budget();
        let mut used = 0;
        let mut opportunity: Option<usize> = None;

        loop {
            let character = match self.next_character() {
                Some(character) => character,
                None => return Break::Exhausted,
            };

            if character == '\n' {
                return Break::Mandatory;
            }

            if character == '\r' {
                if self.carry.is_empty() && self.characters.peek() == Some(&'\n') {
                    self.characters.next();
                }

                return Break::Mandatory;
            }

            if line.is_empty() && character.is_whitespace() {
                continue;
            }

            let width = column_width(character);

            if used + width > budget {
                if !character.is_whitespace() {
                    self.carry.push_front(character);

                    if let Some(position) = opportunity {
                        for remainder in line.drain(position..).rev() {
                            self.carry.push_front(remainder);
                        }
                    }
                }

                return Break::Overflow;
            }

            line.push(character);
            used += width;

            if character.is_whitespace() || is_punctuation(character) {
                opportunity.replace(line.len());
            }
        }
    }
}

impl<'t> Iterator for LineBreaker<'t> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line: Vec<char> = Vec::default();
        let outcome = self.fill(&mut line);

        while line.last().map_or(false, |c| c.is_whitespace()) {
            line.pop();
        }

        if line.is_empty() {
            return match outcome {
                Break::Exhausted => None,
                Break::Mandatory | Break::Overflow => Some(String::default()),
            };
        }

        let mut rendered = self.indent.clone();
        rendered.extend(line);
        Some(rendered)
    }
}

fn column_width(character: char) -> usize {
    if character.is_control() {
        0
    } else {
        1
    }
}

/// Punctuation after which a line may break: the ASCII and Latin-1 punctuation marks, General Punctuation, CJK punctuation and their fullwidth forms.
pub(crate) fn is_punctuation(character: char) -> bool {
    matches!(
        character,
        '!' | '"'
            | '#'
            | '%'
            | '&'
            | '\''
            | '('
            | ')'
            | '*'
            | ','
            | '-'
            | '.'
            | '/'
            | ':'
            | ';'
            | '?'
            | '@'
            | '['
            | '\\'
            | ']'
            | '_'
            | '{'
            | '}'
            | '\u{00A1}'
            | '\u{00A7}'
            | '\u{00AB}'
            | '\u{00B6}'
            | '\u{00B7}'
            | '\u{00BB}'
            | '\u{00BF}'
            | '\u{2010}'..='\u{2027}'
            | '\u{2030}'..='\u{205E}'
            | '\u{3001}'..='\u{3003}'
            | '\u{3008}'..='\u{3011}'
            | '\u{3014}'..='\u{301F}'
            | '\u{FF01}'..='\u{FF03}'
            | '\u{FF05}'..='\u{FF0A}'
            | '\u{FF0C}'..='\u{FF0F}'
            | '\u{FF1A}'
            | '\u{FF1B}'
            | '\u{FF1F}'
            | '\u{FF20}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn lines(text: &str, width: usize) -> Vec<String> {
        LineBreaker::new(text, width).collect()
    }

    #[rstest]
    #[case("", 10, vec![])]
    #[case("   ", 10, vec![])]
    #[case("abc", 10, vec!["abc"])]
    #[case("  abc  ", 10, vec!["abc"])]
    #[case("the quick brown fox", 10, vec!["the quick", "brown fox"])]
    #[case("the quick brown fox", 9, vec!["the quick", "brown fox"])]
    #[case("the quick brown fox", 5, vec!["the", "quick", "brown", "fox"])]
    #[case("abcdefghij", 4, vec!["abcd", "efgh", "ij"])]
    #[case("foo-bar", 5, vec!["foo-", "bar"])]
    #[case("a,b,c,d", 4, vec!["a,b,", "c,d"])]
    #[case("ab cdefgh", 4, vec!["ab", "cdef", "gh"])]
    #[case("a\nb", 10, vec!["a", "b"])]
    #[case("a\r\nb", 10, vec!["a", "b"])]
    #[case("a\rb", 10, vec!["a", "b"])]
    #[case("a\n\nb", 10, vec!["a", "", "b"])]
    #[case("a\n", 10, vec!["a"])]
    #[case("\na", 10, vec!["", "a"])]
    #[case("x\u{7}y", 2, vec!["x\u{7}y"])]
    #[case("日本語、日本語", 4, vec!["日本語、", "日本語"])]
    #[case("abc", 0, vec!["a", "b", "c"])]
    fn break_lines(#[case] text: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        // Execute
        let actual = lines(text, width);

        // Verify
        assert_eq!(actual, expected);
    }

    #[test]
    fn indent() {
        // Setup
        let mut breaker = LineBreaker::new("aaa bbb ccc ddd", 8);

        // Execute & verify
        breaker.set_indent(" ");
        assert_eq!(breaker.next().unwrap(), " aaa bbb");
        breaker.set_indent("    ");
        assert_eq!(breaker.next().unwrap(), "    ccc");
        assert_eq!(breaker.next().unwrap(), "    ddd");
        assert_eq!(breaker.next(), None);
    }

    #[test]
    fn indent_skips_empty_lines() {
        // Setup
        let mut breaker = LineBreaker::new("a\n\nb", 8);

        // Execute
        breaker.set_indent("  ");

        // Verify
        assert_eq!(breaker.collect::<Vec<_>>(), vec!["  a", "", "  b"]);
    }

    #[test]
    fn carried_text_keeps_its_order() {
        // Execute & verify
        // "cd" is carried over while "ef" is still unread.
        assert_eq!(lines("ab-cdef", 4), vec!["ab-", "cdef"]);
        assert_eq!(lines("ab-cdefgh ij", 4), vec!["ab-", "cdef", "gh", "ij"]);
    }

    #[rstest]
    #[case('.', true)]
    #[case('-', true)]
    #[case('\u{2014}', true)]
    #[case('、', true)]
    #[case('+', false)]
    #[case('$', false)]
    #[case('a', false)]
    fn punctuation(#[case] character: char, #[case] expected: bool) {
        // Execute
        let actual = is_punctuation(character);

        // Verify
        assert_eq!(actual, expected);
    }

    #[test]
    fn lines_fit_and_keep_content() {
        // Setup
        let pool = ["a", "bb", "ccc", "dddddddd", " ", " ", "-", ".", "\n"];
        let mut rng = thread_rng();

        // Execute & verify
        for _ in 0..200 {
            let text: String = (0..rng.gen_range(0..30))
                .map(|_| pool[rng.gen_range(0..pool.len())])
                .collect();
            let width = rng.gen_range(1..12);
            let broken = lines(&text, width);

            for line in &broken {
                assert!(line.chars().count() <= width, "'{line}' exceeds {width} in {text:?}");
                assert_eq!(line.trim(), line.as_str());
            }

            let expected: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            let actual: String = broken
                .concat()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            assert_eq!(actual, expected, "{text:?} at {width}");
        }
    }
}
