use std::collections::HashMap;

use crate::api::OptionConfig;
use crate::error::Error;
use crate::matcher::{Outcome, Sink, TokenMatcher};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Where collected tokens end up.
pub(crate) struct Collector<'c> {
    pub(crate) options: &'c mut HashMap<String, Vec<String>>,
    pub(crate) positional: &'c mut Vec<String>,
}

impl<'c> Collector<'c> {
    fn store(&mut self, store_key: &str, value: Option<&str>) {
        let values = self.options.entry(store_key.to_string()).or_default();

        if let Some(value) = value {
            values.push(value.to_string());
        }
    }
}

/// Collects every option as it is given: nothing takes a deferred argument, nothing is rejected.
pub(crate) struct Schemaless<'c> {
    collector: Collector<'c>,
}

impl<'c> Schemaless<'c> {
    pub(crate) fn new(collector: Collector<'c>) -> Self {
        Self { collector }
    }
}

impl<'c> Sink for Schemaless<'c> {
    fn takes_argument(&self, _name: &str) -> bool {
        false
    }

    fn collect_option(&mut self, name: &str, value: Option<&str>) -> Result<(), Error> {
        self.collector.store(name, value);
        Ok(())
    }

    fn collect_positional(&mut self, value: &str) -> Result<(), Error> {
        self.collector.positional.push(value.to_string());
        Ok(())
    }
}

/// The validated index over a list of option configurations.
pub(crate) struct ConfigTable<'t, 'a> {
    configs: &'t [OptionConfig<'a>],
    by_name: HashMap<&'t str, usize>,
    pass_through: bool,
}

impl<'t, 'a> ConfigTable<'t, 'a> {
    /// Index `configs`, failing on the first inconsistent configuration.
    pub(crate) fn new(configs: &'t [OptionConfig<'a>]) -> Result<Self, Error> {
        let mut by_name: HashMap<&'t str, usize> = HashMap::default();
        let mut store_keys: HashMap<&'t str, usize> = HashMap::default();
        let mut pass_through = false;

        for (index, config) in configs.iter().enumerate() {
            let name = config.display_name();
            let store_key = config.effective_store_key();

            if config.is_wildcard() {
                pass_through = true;
                continue;
            }

            if !participates(config) {
                // Neither names nor a store key: nothing can match it.
                continue;
            }

            if store_keys.insert(store_key, index).is_some() {
                return Err(Error::StoreKeyIsDuplicated {
                    name: name.to_string(),
                    store_key: store_key.to_string(),
                });
            }

            if !config.takes_argument && config.is_array {
                return Err(Error::ConfigIsArrayButHasNoArg {
                    name: name.to_string(),
                    store_key: store_key.to_string(),
                });
            }

            if !config.takes_argument && config.defaults.is_some() {
                return Err(Error::ConfigHasDefaultsButHasNoArg {
                    name: name.to_string(),
                    store_key: store_key.to_string(),
                });
            }

            let mut aliases: Vec<&'t str> = config
                .names
                .iter()
                .map(String::as_str)
                .filter(|alias| !alias.is_empty())
                .collect();

            if aliases.is_empty() {
                aliases.push(store_key);
            }

            for alias in aliases {
                if by_name.insert(alias, index).is_some() {
                    return Err(Error::OptionNameIsDuplicated {
                        name: alias.to_string(),
                        store_key: store_key.to_string(),
                    });
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Configured {} option names over {} configs (pass-through: {pass_through}).",
                by_name.len(),
                configs.len()
            );
        }

        Ok(Self {
            configs,
            by_name,
            pass_through,
        })
    }

    fn lookup(&self, name: &str) -> Option<&'t OptionConfig<'a>> {
        let configs = self.configs;
        self.by_name.get(name).map(move |index| &configs[*index])
    }
}

/// Collects options according to a [`ConfigTable`].
pub(crate) struct Configured<'t, 'a, 'c> {
    table: ConfigTable<'t, 'a>,
    collector: Collector<'c>,
}

impl<'t, 'a, 'c> Configured<'t, 'a, 'c> {
    pub(crate) fn new(table: ConfigTable<'t, 'a>, collector: Collector<'c>) -> Self {
        Self { table, collector }
    }
}

impl<'t, 'a, 'c> Sink for Configured<'t, 'a, 'c> {
    fn takes_argument(&self, name: &str) -> bool {
        self.table
            .lookup(name)
            .map(|config| config.takes_argument)
            .unwrap_or(false)
    }

    fn collect_option(&mut self, name: &str, value: Option<&str>) -> Result<(), Error> {
        let config = match self.table.lookup(name) {
            Some(config) => config,
            None => {
                if self.table.pass_through {
                    self.collector.store(name, value);
                    return Ok(());
                }

                return Err(Error::UnconfiguredOption {
                    name: name.to_string(),
                });
            }
        };
        let store_key = config.effective_store_key();

        match (value, config.takes_argument) {
            (Some(_), false) => Err(Error::OptionTakesNoArg {
                name: name.to_string(),
                store_key: store_key.to_string(),
            }),
            (None, true) => Err(Error::OptionNeedsArg {
                name: name.to_string(),
                store_key: store_key.to_string(),
            }),
            (Some(value), true) => {
                if let Some(validator) = &config.validator {
                    validator(store_key, name, value)?;
                }

                let repeated = self
                    .collector
                    .options
                    .get(store_key)
                    .map(|values| !values.is_empty())
                    .unwrap_or(false);

                if repeated && !config.is_array {
                    return Err(Error::OptionIsNotArray {
                        name: name.to_string(),
                        store_key: store_key.to_string(),
                    });
                }

                self.collector.store(store_key, Some(value));
                Ok(())
            }
            (None, false) => {
                self.collector.store(store_key, None);
                Ok(())
            }
        }
    }

    fn collect_positional(&mut self, value: &str) -> Result<(), Error> {
        self.collector.positional.push(value.to_string());
        Ok(())
    }
}

/// Whether `config` matches options and stores their arguments.
/// The wildcard only switches on pass-through; a configuration without names or store key is help-only.
fn participates(config: &OptionConfig<'_>) -> bool {
    !config.is_wildcard() && !config.effective_store_key().is_empty()
}

/// Run schemaless matching over `input`.
pub(crate) fn parse_schemaless(
    input: &[String],
    after_end: bool,
    collector: Collector<'_>,
    until_first_positional: bool,
) -> Outcome {
    let mut sink = Schemaless::new(collector);
    TokenMatcher::new(input, after_end).run(&mut sink, until_first_positional)
}

/// Run configured matching over `input`, then apply defaults and the on-parsed callbacks.
///
/// Configuration errors are returned as `Err` before any token is matched.
/// Matching and callback errors are reported through the returned [`Outcome`] (first one wins).
pub(crate) fn parse_configured(
    input: &[String],
    after_end: bool,
    configs: &mut [OptionConfig<'_>],
    options: &mut HashMap<String, Vec<String>>,
    positional: &mut Vec<String>,
    until_first_positional: bool,
) -> Result<Outcome, Error> {
    let mut outcome = {
        let table = ConfigTable::new(configs)?;
        let collector = Collector {
            options: &mut *options,
            positional,
        };
        let mut sink = Configured::new(table, collector);
        TokenMatcher::new(input, after_end).run(&mut sink, until_first_positional)
    };

    for config in configs.iter_mut().filter(|config| participates(config)) {
        let store_key = config.effective_store_key().to_string();

        if !options.contains_key(&store_key) {
            if let Some(defaults) = &config.defaults {
                options.insert(store_key.clone(), defaults.clone());
            }
        }

        let values = match options.get(&store_key) {
            Some(values) => values,
            None => continue,
        };

        if let Some(on_parsed) = config.on_parsed.as_mut() {
            if let Err(error) = on_parsed(values.as_slice()) {
                outcome.error.get_or_insert(error);
            }
        }
    }

    Ok(outcome)
}
