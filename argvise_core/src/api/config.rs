use std::fmt;

use crate::constant::WILDCARD;
use crate::error::Error;

type Validator<'a> = Box<dyn Fn(&str, &str, &str) -> Result<(), Error> + 'a>;
type OnParsed<'a> = Box<dyn FnMut(&[String]) -> Result<(), Error> + 'a>;

/// The configuration of one option.
///
/// The first non-empty name is the display name; the remaining names are aliases.
/// Empty names are never matched, they only reserve room in the help output so titles line up.
///
/// ### Example
/// ```
/// # use argvise_core as argvise;
/// use argvise::OptionConfig;
///
/// let config = OptionConfig::new(["", "verbose"])
///     .description("Print more.");
///
/// assert_eq!(config.display_name(), "verbose");
/// assert_eq!(config.effective_store_key(), "verbose");
/// assert!(!config.has_argument());
/// ```
pub struct OptionConfig<'a> {
    pub(crate) store_key: Option<String>,
    pub(crate) names: Vec<String>,
    pub(crate) takes_argument: bool,
    pub(crate) is_array: bool,
    pub(crate) defaults: Option<Vec<String>>,
    pub(crate) validator: Option<Validator<'a>>,
    pub(crate) description: Option<String>,
    pub(crate) help_label: Option<String>,
    pub(crate) on_parsed: Option<OnParsed<'a>>,
}

impl<'a> OptionConfig<'a> {
    /// Create an option configuration matching any of `names`.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            store_key: None,
            names: names.into_iter().map(Into::into).collect(),
            takes_argument: false,
            is_array: false,
            defaults: None,
            validator: None,
            description: None,
            help_label: None,
            on_parsed: None,
        }
    }

    /// Create the wildcard configuration.
    /// When present, options without a configuration of their own are collected under the name they were given.
    ///
    /// ### Example
    /// ```
    /// # use argvise_core as argvise;
    /// use argvise::{Command, OptionConfig};
    ///
    /// let mut command = Command::new("app", ["--anything=1"]);
    /// command.parse_with(vec![OptionConfig::wildcard()]).unwrap();
    ///
    /// assert_eq!(command.option_argument("anything"), "1");
    /// ```
    pub fn wildcard() -> Self {
        Self::new(Vec::<String>::default()).store_key(WILDCARD)
    }

    /// Store the collected arguments under `store_key` instead of the display name.
    pub fn store_key(mut self, store_key: impl Into<String>) -> Self {
        self.store_key.replace(store_key.into());
        self
    }

    /// Require an argument, either inline (`--name=value`) or as the next token.
    pub fn takes_argument(mut self) -> Self {
        self.takes_argument = true;
        self
    }

    /// Allow the option to be repeated, accumulating its arguments in input order.
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Arguments to use when the option is not given at all.
    pub fn defaults<I, S>(mut self, defaults: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.defaults
            .replace(defaults.into_iter().map(Into::into).collect());
        self
    }

    /// Check each argument as it is collected.
    /// The validator receives the store key, the name the option was given by, and the argument.
    ///
    /// ### Example
    /// ```
    /// # use argvise_core as argvise;
    /// use argvise::{Command, Error, Kind, OptionConfig};
    ///
    /// let port = OptionConfig::new(["port"])
    ///     .takes_argument()
    ///     .validator(|store_key, name, argument| {
    ///         argument
    ///             .parse::<u16>()
    ///             .map(|_| ())
    ///             .map_err(|e| Error::invalid_argument(store_key, name, argument, Kind::Uint, e))
    ///     });
    ///
    /// let mut command = Command::new("app", ["--port", "http"]);
    /// let error = command.parse_with(vec![port]).unwrap_err();
    /// assert_eq!(error.option(), "port");
    /// ```
    pub fn validator(
        mut self,
        validator: impl Fn(&str, &str, &str) -> Result<(), Error> + 'a,
    ) -> Self {
        self.validator.replace(Box::new(validator));
        self
    }

    /// Document the option in the help output.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Name the argument in the help output (ex: `<path>`).
    pub fn help_label(mut self, help_label: impl Into<String>) -> Self {
        self.help_label.replace(help_label.into());
        self
    }

    /// Receive the final argument list once parsing completes.
    /// Only invoked when the option was observed or defaulted.
    pub fn on_parsed(mut self, on_parsed: impl FnMut(&[String]) -> Result<(), Error> + 'a) -> Self {
        self.on_parsed.replace(Box::new(on_parsed));
        self
    }

    /// The configured names, empty placeholders included.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether the option requires an argument.
    pub fn has_argument(&self) -> bool {
        self.takes_argument
    }

    /// Whether the option may be repeated.
    pub fn is_array(&self) -> bool {
        self.is_array
    }

    /// The default arguments, if any.
    pub fn default_values(&self) -> Option<&[String]> {
        self.defaults.as_deref()
    }

    /// The help description, if any.
    pub fn help_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The help argument label, if any.
    pub fn argument_label(&self) -> Option<&str> {
        self.help_label.as_deref()
    }

    /// The first non-empty name, falling back to the store key (empty if neither is set).
    pub fn display_name(&self) -> &str {
        self.names
            .iter()
            .find(|name| !name.is_empty())
            .map(String::as_str)
            .or(self.store_key.as_deref())
            .unwrap_or_default()
    }

    /// The key the collected arguments are stored under.
    pub fn effective_store_key(&self) -> &str {
        match self.store_key.as_deref() {
            Some(store_key) if !store_key.is_empty() => store_key,
            _ => self.display_name(),
        }
    }

    /// Whether this is the wildcard configuration.
    pub fn is_wildcard(&self) -> bool {
        self.effective_store_key() == WILDCARD
    }

    /// A copy of the declarative part of this configuration, without its callbacks.
    pub(crate) fn detach(&self) -> OptionConfig<'static> {
        OptionConfig {
            store_key: self.store_key.clone(),
            names: self.names.clone(),
            takes_argument: self.takes_argument,
            is_array: self.is_array,
            defaults: self.defaults.clone(),
            validator: None,
            description: self.description.clone(),
            help_label: self.help_label.clone(),
            on_parsed: None,
        }
    }
}

impl<'a> fmt::Debug for OptionConfig<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionConfig")
            .field("store_key", &self.store_key)
            .field("names", &self.names)
            .field("takes_argument", &self.takes_argument)
            .field("is_array", &self.is_array)
            .field("defaults", &self.defaults)
            .field("validator", &self.validator.is_some())
            .field("description", &self.description)
            .field("help_label", &self.help_label)
            .field("on_parsed", &self.on_parsed.is_some())
            .finish()
    }
}
