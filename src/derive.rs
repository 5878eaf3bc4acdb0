//! Derive Api for `argvise` option stores.
//!
//! ### Getting Started
//! Instrument a struct with named fields with `#[derive(OptionStore)]`.
//! This implements [`OptionStore`](../trait.OptionStore.html), so the struct can be handed to [`Command::parse_store`](../struct.Command.html#method.parse_store).
//! Each field becomes one option, stored under the field name; once the input is parsed, the option's arguments are converted and assigned into the field.
//!
//! ```no_run
#![doc = include_str!("../demos/derived.rs")]
//! ```
//!
//! ```console
//! $ derived -v -j 4 --include=src -I lib --scale-factor 0.5 main.rs
//! Options { verbose: true, jobs: 4, include: ["src", "lib"], scale_factor: 0.5 }
//! files: ["main.rs"]
//!
//! $ derived
//! Options { verbose: false, jobs: 1, include: [], scale_factor: 1.0 }
//! files: []
//!
//! $ derived -j=-1
//! Parse error: Option 'jobs' argument '-1' is not a valid uint: invalid digit found in string
//! ```
//!
//! ### Field Types
//! ```console
//! Type                  | Option
//! ---------------------------------------------------------
//! bool                  | flag, takes no argument
//! String, integers, f32 | takes one argument
//! f64                   |
//! Vec<T>                | takes an argument, may be repeated
//! ```
//!
//! Any other field type is reported as [`Error::BadFieldType`](../enum.Error.html#variant.BadFieldType) when parsing.
//! Conversions use [`std::str::FromStr`].
//! A list field is replaced (not extended) by the parsed arguments.
//! A field whose option is absent, and has no default, keeps its initial value.
//!
//! ### Field Attributes
//! * `#[argvise(tag = "names=default")]` names the option and sets its default.
//! `names` is a comma separated list; the first name is displayed first in the help output, and empty names leave a blank column.
//! Without a tag, the option is named after the field with `_` replaced by `-`.
//! * For list fields, the default may be a bracketed list: `=[a,b]`, or `=;[a;b]` to pick another separator.
//! * `#[argvise(help = "..")]` describes the option in the help output.
//! * `#[argvise(label = "..")]` names the option argument in the help output.
//!
//! ```
//! use argvise::derive::OptionStore;
//! use argvise::Command;
//!
//! #[derive(Default, OptionStore)]
//! struct Options {
//!     #[argvise(tag = "level,l=3")]
//!     level: u8,
//!     #[argvise(tag = "tags,t=[a,b]")]
//!     tags: Vec<String>,
//!     dry_run: bool,
//! }
//!
//! let mut options = Options::default();
//! let mut command = Command::new("app", ["--dry-run", "-t", "x", "rest"]);
//! command.parse_store(&mut options).unwrap();
//!
//! assert_eq!(options.level, 3);
//! assert_eq!(options.tags, vec!["x".to_string()]);
//! assert!(options.dry_run);
//! assert_eq!(command.positional_arguments(), ["rest"]);
//! ```
pub use argvise_derive::OptionStore;
