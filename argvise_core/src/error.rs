use thiserror::Error;

use crate::model::Kind;

/// The cause wrapped by [`Error::OptionArgumentIsInvalid`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Every failure `argvise` reports.
///
/// Configuration errors (duplicates, inconsistent arity) are fatal and reported before any token is parsed.
/// Parse errors are reported after the whole input has been consumed; only the first one is kept.
/// Use [`Error::option`] to find the offending option without matching on the variant.
///
/// There is no error for an option store that cannot be changed: a store is always passed as `&mut`.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    /// The option name contains a character that is not allowed.
    #[error("Option '{name}' has an invalid character.")]
    OptionHasInvalidCharacter { name: String },

    /// No configuration matches the option, and pass-through is not enabled.
    #[error("Option '{name}' is not configured.")]
    UnconfiguredOption { name: String },

    /// The option requires an argument, but none was given.
    #[error("Option '{name}' needs an argument.")]
    OptionNeedsArg { name: String, store_key: String },

    /// An argument was given to an option that does not take one.
    #[error("Option '{name}' takes no argument.")]
    OptionTakesNoArg { name: String, store_key: String },

    /// The option was repeated, but it is not an array.
    #[error("Option '{name}' is not an array and cannot be repeated.")]
    OptionIsNotArray { name: String, store_key: String },

    /// The argument was rejected by a validator or could not be converted.
    #[error("Option '{name}' argument '{argument}' is not a valid {kind}: {source}")]
    OptionArgumentIsInvalid {
        store_key: String,
        name: String,
        argument: String,
        kind: Kind,
        #[source]
        source: BoxError,
    },

    /// Two configurations share a store key.
    #[error("Store key '{store_key}' is duplicated (option '{name}').")]
    StoreKeyIsDuplicated { name: String, store_key: String },

    /// Two configurations share a name.
    #[error("Option name '{name}' is duplicated (store key '{store_key}').")]
    OptionNameIsDuplicated { name: String, store_key: String },

    /// A configuration is an array but takes no argument.
    #[error("Option '{name}' is an array but takes no argument.")]
    ConfigIsArrayButHasNoArg { name: String, store_key: String },

    /// A configuration has defaults but takes no argument.
    #[error("Option '{name}' has defaults but takes no argument.")]
    ConfigHasDefaultsButHasNoArg { name: String, store_key: String },

    /// An option store field has a type that cannot be derived into a configuration.
    #[error("Field '{field}' has an unsupported type '{type_name}'.")]
    BadFieldType { field: String, type_name: String },
}

impl Error {
    /// Build an [`Error::OptionArgumentIsInvalid`], typically from inside a validator.
    ///
    /// ### Example
    /// ```
    /// # use argvise_core as argvise;
    /// use argvise::{Error, Kind};
    ///
    /// let error = Error::invalid_argument("port", "p", "http", Kind::Uint, "not a number");
    /// assert_eq!(error.option(), "p");
    /// assert_eq!(error.store_key(), Some("port"));
    /// ```
    pub fn invalid_argument(
        store_key: impl Into<String>,
        name: impl Into<String>,
        argument: impl Into<String>,
        kind: Kind,
        cause: impl Into<BoxError>,
    ) -> Self {
        Error::OptionArgumentIsInvalid {
            store_key: store_key.into(),
            name: name.into(),
            argument: argument.into(),
            kind,
            source: cause.into(),
        }
    }

    /// The option this error concerns (empty when not applicable).
    pub fn option(&self) -> &str {
        match self {
            Error::OptionHasInvalidCharacter { name }
            | Error::UnconfiguredOption { name }
            | Error::OptionNeedsArg { name, .. }
            | Error::OptionTakesNoArg { name, .. }
            | Error::OptionIsNotArray { name, .. }
            | Error::OptionArgumentIsInvalid { name, .. }
            | Error::StoreKeyIsDuplicated { name, .. }
            | Error::OptionNameIsDuplicated { name, .. }
            | Error::ConfigIsArrayButHasNoArg { name, .. }
            | Error::ConfigHasDefaultsButHasNoArg { name, .. } => name,
            Error::BadFieldType { field, .. } => field,
        }
    }

    /// The store key this error concerns, if the variant carries one.
    pub fn store_key(&self) -> Option<&str> {
        match self {
            Error::OptionHasInvalidCharacter { .. }
            | Error::UnconfiguredOption { .. }
            | Error::BadFieldType { .. } => None,
            Error::OptionNeedsArg { store_key, .. }
            | Error::OptionTakesNoArg { store_key, .. }
            | Error::OptionIsNotArray { store_key, .. }
            | Error::OptionArgumentIsInvalid { store_key, .. }
            | Error::StoreKeyIsDuplicated { store_key, .. }
            | Error::OptionNameIsDuplicated { store_key, .. }
            | Error::ConfigIsArrayButHasNoArg { store_key, .. }
            | Error::ConfigHasDefaultsButHasNoArg { store_key, .. } => Some(store_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn option_accessor() {
        // Execute & verify
        let error = Error::OptionHasInvalidCharacter {
            name: "1".to_string(),
        };
        assert_eq!(error.option(), "1");
        assert_eq!(error.store_key(), None);

        let error = Error::OptionIsNotArray {
            name: "c".to_string(),
            store_key: "corge".to_string(),
        };
        assert_eq!(error.option(), "c");
        assert_eq!(error.store_key(), Some("corge"));

        let error = Error::BadFieldType {
            field: "when".to_string(),
            type_name: "std::time::Instant".to_string(),
        };
        assert_eq!(error.option(), "when");
        assert_eq!(error.store_key(), None);
    }

    #[test]
    fn invalid_argument_wraps_cause() {
        // Setup
        let cause = "abc".parse::<u32>().unwrap_err();

        // Execute
        let error = Error::invalid_argument("count", "count", "abc", Kind::Uint, cause);

        // Verify
        assert_eq!(
            error.to_string(),
            "Option 'count' argument 'abc' is not a valid uint: invalid digit found in string"
        );
        assert_eq!(
            error.source().unwrap().to_string(),
            "invalid digit found in string"
        );
    }

    #[test]
    fn display() {
        // Execute & verify
        let error = Error::UnconfiguredOption {
            name: "moot".to_string(),
        };
        assert_eq!(error.to_string(), "Option 'moot' is not configured.");

        let error = Error::ConfigHasDefaultsButHasNoArg {
            name: "verbose".to_string(),
            store_key: "verbose".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Option 'verbose' has defaults but takes no argument."
        );
    }
}
