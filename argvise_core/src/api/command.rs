use std::collections::HashMap;
use std::path::Path;

use crate::api::{derive_configs, OptionConfig, OptionStore};
use crate::error::Error;
use crate::matcher::Outcome;
use crate::parser::{parse_configured, parse_schemaless, Collector};

/// A parsed command: its name, positional arguments and options.
///
/// A command is built from raw input and populated by exactly one of the `parse*` methods.
///
/// ### Example
/// ```
/// # use argvise_core as argvise;
/// use argvise::Command;
///
/// let mut command = Command::from_args(["path/to/app", "--foo-bar=A", "-bc=3", "qux"]);
/// command.parse().unwrap();
///
/// assert_eq!(command.name(), "app");
/// assert_eq!(command.positional_arguments(), ["qux"]);
/// assert!(command.has_option("b"));
/// assert_eq!(command.option_argument("c"), "3");
/// assert_eq!(command.option_argument("foo-bar"), "A");
/// ```
#[derive(Debug)]
pub struct Command {
    name: String,
    input: Vec<String>,
    starts_after_end: bool,
    positional: Vec<String>,
    options: HashMap<String, Vec<String>>,
    after_end_of_options: bool,
    configs: Option<Vec<OptionConfig<'static>>>,
}

impl Command {
    /// Create a command named `name` over `input` (which excludes the program name).
    pub fn new<I, S>(name: impl Into<String>, input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            input: input.into_iter().map(Into::into).collect(),
            starts_after_end: false,
            positional: Vec::default(),
            options: HashMap::default(),
            after_end_of_options: false,
            configs: None,
        }
    }

    /// Create a command from a full argument vector.
    /// The name is the final path component of the first element; an empty vector yields an empty name.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let name = args
            .next()
            .map(|program: String| {
                Path::new(&program)
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or(program)
            })
            .unwrap_or_default();

        Self::new(name, args)
    }

    /// Create a command from the process arguments.
    pub fn from_env() -> Self {
        Self::from_args(std::env::args())
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build a sub-command for use in testing.
    ///
    /// ### Example
    /// ```
    /// # use argvise_core as argvise;
    /// use argvise::{Command, Error, OptionConfig};
    ///
    /// // Function under test.
    /// // We want to make sure the sub-command options are wired up correctly.
    /// fn run_build(mut sub_command: Command) -> Result<bool, Error> {
    ///     sub_command.parse_with(vec![OptionConfig::new(["release", "r"])])?;
    ///     Ok(sub_command.has_option("release"))
    /// }
    ///
    /// assert!(run_build(Command::test_dummy(["-r"])).unwrap());
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn test_dummy<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("test-dummy", input)
    }

    fn sub_command(&self, index: usize, after_end: bool) -> Command {
        let name = self.input.get(index).cloned().unwrap_or_default();
        let rest = self.input.get(index + 1..).unwrap_or_default();
        let mut command = Command::new(name, rest.iter().cloned());
        command.starts_after_end = after_end;
        command.after_end_of_options = after_end;
        command
    }

    fn reset(&mut self) {
        self.positional.clear();
        self.options.clear();
        self.after_end_of_options = self.starts_after_end;
        self.configs = None;
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.after_end_of_options = outcome.after_end;
        outcome
    }

    fn run_schemaless(&mut self, until_first_positional: bool) -> Outcome {
        self.reset();
        let outcome = parse_schemaless(
            &self.input,
            self.starts_after_end,
            Collector {
                options: &mut self.options,
                positional: &mut self.positional,
            },
            until_first_positional,
        );
        self.finish(outcome)
    }

    fn run_configured(
        &mut self,
        mut configs: Vec<OptionConfig<'_>>,
        until_first_positional: bool,
    ) -> Result<Outcome, Error> {
        self.reset();
        let outcome = parse_configured(
            &self.input,
            self.starts_after_end,
            &mut configs,
            &mut self.options,
            &mut self.positional,
            until_first_positional,
        )?;

        if outcome.error.is_none() {
            self.configs
                .replace(configs.iter().map(OptionConfig::detach).collect());
        }

        Ok(self.finish(outcome))
    }

    /// Parse without configurations: every option is accepted and none takes a deferred argument.
    /// Arguments are only recognized inline (`--name=value`).
    pub fn parse(&mut self) -> Result<(), Error> {
        self.run_schemaless(false).into_result()
    }

    /// Parse options without configurations up to the first positional argument, which names the sub-command.
    ///
    /// Returns the sub-command, ready to be parsed from the rest of the input.
    ///
    /// ### Example
    /// ```
    /// # use argvise_core as argvise;
    /// use argvise::Command;
    ///
    /// let mut command = Command::from_args(["app", "-v", "build", "--release", "target"]);
    /// let mut sub_command = command.parse_until_sub_command().unwrap();
    /// sub_command.parse().unwrap();
    ///
    /// assert!(command.has_option("v"));
    /// assert_eq!(sub_command.name(), "build");
    /// assert!(sub_command.has_option("release"));
    /// assert_eq!(sub_command.positional_arguments(), ["target"]);
    /// ```
    pub fn parse_until_sub_command(&mut self) -> Result<Command, Error> {
        let outcome = self.run_schemaless(true);
        let sub_command = self.sub_command(outcome.stop, outcome.after_end);
        outcome.into_result().map(|()| sub_command)
    }

    /// Parse according to `configs`.
    ///
    /// Inconsistent configurations are reported before any input is parsed.
    /// Otherwise the whole input is parsed, and the first error (if any) is reported; the command is populated either way.
    /// On success, [`Command::configs`] returns the configurations used.
    ///
    /// ### Example
    /// ```
    /// # use argvise_core as argvise;
    /// use argvise::{Command, OptionConfig};
    ///
    /// let mut command = Command::new("app", ["--baz", "1", "-z=2"]);
    /// command
    ///     .parse_with(vec![
    ///         OptionConfig::new(["baz", "z"]).store_key("Bazoo").takes_argument().array(),
    ///         OptionConfig::new(["corge"]).takes_argument().defaults(["99"]),
    ///     ])
    ///     .unwrap();
    ///
    /// assert_eq!(command.option_arguments("Bazoo").unwrap(), ["1", "2"]);
    /// assert_eq!(command.option_argument("corge"), "99");
    /// ```
    pub fn parse_with(&mut self, configs: Vec<OptionConfig<'_>>) -> Result<(), Error> {
        self.run_configured(configs, false)?.into_result()
    }

    /// Parse according to `configs` up to the first positional argument, which names the sub-command.
    pub fn parse_with_until_sub_command(
        &mut self,
        configs: Vec<OptionConfig<'_>>,
    ) -> Result<Command, Error> {
        let outcome = self.run_configured(configs, true)?;
        let sub_command = self.sub_command(outcome.stop, outcome.after_end);
        outcome.into_result().map(|()| sub_command)
    }

    /// Parse according to the configurations derived from `store`, assigning the parsed values into it.
    ///
    /// ### Example
    /// ```
    /// # use argvise_core as argvise;
    /// use argvise::{Command, OptionStore, StoreField};
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     verbose: bool,
    ///     jobs: u8,
    /// }
    ///
    /// impl OptionStore for Options {
    ///     fn fields(&mut self) -> Vec<StoreField<'_>> {
    ///         vec![
    ///             StoreField::new("verbose", Some("verbose,v"), "bool", &mut self.verbose),
    ///             StoreField::new("jobs", Some("jobs,j=4"), "u8", &mut self.jobs),
    ///         ]
    ///     }
    /// }
    ///
    /// let mut options = Options::default();
    /// let mut command = Command::new("app", ["-v"]);
    /// command.parse_store(&mut options).unwrap();
    ///
    /// assert!(options.verbose);
    /// assert_eq!(options.jobs, 4);
    /// ```
    pub fn parse_store(&mut self, store: &mut impl OptionStore) -> Result<(), Error> {
        let configs = derive_configs(store)?;
        self.parse_with(configs)
    }

    /// Like [`Command::parse_store`], stopping at the first positional argument.
    pub fn parse_store_until_sub_command(
        &mut self,
        store: &mut impl OptionStore,
    ) -> Result<Command, Error> {
        let configs = derive_configs(store)?;
        self.parse_with_until_sub_command(configs)
    }

    /// The command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw input this command parses.
    pub fn input(&self) -> &[String] {
        &self.input
    }

    /// The positional arguments, in input order.
    pub fn positional_arguments(&self) -> &[String] {
        &self.positional
    }

    /// Whether the option was given (or defaulted).
    pub fn has_option(&self, store_key: &str) -> bool {
        self.options.contains_key(store_key)
    }

    /// The first argument of the option, or `""` when it is absent or has no argument.
    pub fn option_argument(&self, store_key: &str) -> &str {
        self.options
            .get(store_key)
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Every argument of the option, in input order, or `None` when the option is absent.
    pub fn option_arguments(&self, store_key: &str) -> Option<&[String]> {
        self.options.get(store_key).map(Vec::as_slice)
    }

    /// Every collected option, keyed by store key.
    pub fn options(&self) -> &HashMap<String, Vec<String>> {
        &self.options
    }

    /// Whether the `--` sentinel has been seen.
    pub fn is_after_end_of_options(&self) -> bool {
        self.after_end_of_options
    }

    /// The configurations of the last successful configured parse (callbacks are not retained).
    pub fn configs(&self) -> Option<&[OptionConfig<'static>]> {
        self.configs.as_deref()
    }
}
