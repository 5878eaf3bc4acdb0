use crate::error::Error;
use crate::matcher::model::*;
use crate::tokens::{classify, is_valid_long_name, is_valid_short_name, Token};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Routes each input token to one of the [`Sink`] collectors.
///
/// States:
/// * scanning: options and positionals are recognized.
/// * expecting an argument: the next raw token belongs to the pending option, even if it starts with `-`.
/// * after end of options: every remaining token is positional.
pub(crate) struct TokenMatcher<'i> {
    frame: ParseFrame<'i>,
}

impl<'i> TokenMatcher<'i> {
    pub(crate) fn new(input: &'i [String], after_end: bool) -> Self {
        Self {
            frame: ParseFrame::new(input, after_end),
        }
    }

    /// Feed every token into `sink`.
    ///
    /// With `until_first_positional`, stop (without collecting) at the first positional token, which includes the first token after `--`.
    pub(crate) fn run(mut self, sink: &mut impl Sink, until_first_positional: bool) -> Outcome {
        let input = self.frame.input;

        while self.frame.index < input.len() {
            let token = input[self.frame.index].as_str();

            if let Some(name) = self.frame.pending.take() {
                let result = sink.collect_option(&name, Some(token));
                self.frame.record(result);
                self.frame.index += 1;
                continue;
            }

            if self.frame.after_end {
                if until_first_positional {
                    return self.stop();
                }

                let result = sink.collect_positional(token);
                self.frame.record(result);
                self.frame.index += 1;
                continue;
            }

            match classify(token) {
                Token::EndOfOptions => {
                    self.frame.after_end = true;
                }
                Token::Dash | Token::Positional(_) => {
                    if until_first_positional {
                        return self.stop();
                    }

                    let result = sink.collect_positional(token);
                    self.frame.record(result);
                }
                Token::Long { name, inline } => {
                    if is_valid_long_name(name) {
                        self.option(sink, name, inline);
                    } else {
                        self.frame.record(Err(invalid_character(name)));
                    }
                }
                Token::Short { cluster, inline } => {
                    self.cluster(sink, cluster, inline);
                }
            }

            self.frame.index += 1;
        }

        self.frame.finish()
    }

    fn stop(self) -> Outcome {
        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Stopped at the first positional (index {}, after end of options: {}).",
                self.frame.index, self.frame.after_end
            );
        }

        self.frame.finish()
    }

    fn cluster(&mut self, sink: &mut impl Sink, cluster: &str, inline: Option<&str>) {
        let mut characters = cluster.chars().peekable();

        if characters.peek().is_none() {
            // Ex: "-=value"
            self.frame.record(Err(invalid_character(cluster)));
            return;
        }

        while let Some(single) = characters.next() {
            let name = single.to_string();

            if !is_valid_short_name(single) {
                self.frame.record(Err(invalid_character(&name)));
            } else if characters.peek().is_some() {
                // Only the final character of the cluster may take an argument.
                let result = sink.collect_option(&name, None);
                self.frame.record(result);
            } else {
                self.option(sink, &name, inline);
            }
        }
    }

    fn option(&mut self, sink: &mut impl Sink, name: &str, inline: Option<&str>) {
        if inline.is_none() && !self.frame.is_last() && sink.takes_argument(name) {
            self.frame.pending.replace(name.to_string());
        } else {
            let result = sink.collect_option(name, inline);
            self.frame.record(result);
        }
    }
}

fn invalid_character(name: &str) -> Error {
    Error::OptionHasInvalidCharacter {
        name: name.to_string(),
    }
}
