use crate::error::Error;

/// The three sinks the token matcher feeds.
///
/// Every collect call reports a recoverable status; the matcher keeps the first failure and carries on.
pub(crate) trait Sink {
    /// Whether the *next* token must be consumed as the argument of option `name`.
    fn takes_argument(&self, name: &str) -> bool;

    /// Collect an occurrence of option `name`, with its argument when one was given.
    fn collect_option(&mut self, name: &str, value: Option<&str>) -> Result<(), Error>;

    /// Collect a positional argument.
    fn collect_positional(&mut self, value: &str) -> Result<(), Error>;
}

/// The state carried across tokens.
#[derive(Debug)]
pub(crate) struct ParseFrame<'i> {
    pub(super) input: &'i [String],
    pub(super) index: usize,
    pub(super) pending: Option<String>,
    pub(super) after_end: bool,
    pub(super) first_error: Option<Error>,
}

impl<'i> ParseFrame<'i> {
    pub(super) fn new(input: &'i [String], after_end: bool) -> Self {
        Self {
            input,
            index: 0,
            pending: None,
            after_end,
            first_error: None,
        }
    }

    pub(super) fn record(&mut self, result: Result<(), Error>) {
        if let Err(error) = result {
            #[cfg(feature = "tracing_debug")]
            {
                tracing::debug!("Token {} rejected: {error}", self.index);
            }

            if self.first_error.is_none() {
                self.first_error.replace(error);
            }
        }
    }

    pub(super) fn is_last(&self) -> bool {
        self.index + 1 >= self.input.len()
    }

    pub(super) fn finish(self) -> Outcome {
        Outcome {
            stop: self.index,
            after_end: self.after_end,
            error: self.first_error,
        }
    }
}

/// The result of running the token matcher.
#[derive(Debug)]
pub(crate) struct Outcome {
    /// Where matching stopped: the first positional (when stopping early) or the input length.
    pub(crate) stop: usize,
    /// Whether the end-of-options sentinel had been seen.
    pub(crate) after_end: bool,
    /// The first error, if any.
    pub(crate) error: Option<Error>,
}

impl Outcome {
    pub(crate) fn into_result(self) -> Result<(), Error> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
