//! `argvise` is a layered command line parser for Rust.
//!
//! It reads an argument vector in one of three ways, each built on top of the previous one:
//! * *Schemaless*: every option is accepted and collected under the name it was given.
//! Nothing needs to be configured up front, which suits small tools and scripts.
//! * *Schema*: a list of [`OptionConfig`]s names the options, their aliases, whether they take an argument, and their defaults.
//! Unknown options are rejected, unless the [wildcard](OptionConfig::wildcard) configuration is present.
//! * *Derived*: a struct implementing [`OptionStore`] (usually via [`derive::OptionStore`]) is turned into configurations, and the parsed values are assigned into its fields.
//!
//! All three modes follow the same token grammar:
//! * `--name` and `--name=value` are long options; names start with a letter and continue with letters, digits or `-`.
//! * `-abc` is a cluster of short options; `-abc=value` hands `value` to `c` only.
//! * A configured option that takes an argument consumes the next token when no inline value is given.
//! * `--` ends the options: everything after it is positional.
//! * `-` on its own is positional.
//!
//! Parse errors do not stop parsing.
//! The whole input is consumed, the [`Command`] is populated as far as possible, and the first [`Error`] is returned.
//!
//! # Usage
//! This page includes a few demos on using `argvise`.
//! More examples are outlined in [the source](https://github.com/argvise/argvise/tree/main/demos).
//!
//! Schemaless:
//! ```no_run
#![doc = include_str!("../demos/schemaless.rs")]
//! ```
//!
//! ```console
//! $ schemaless --foo-bar=A -a --baz -bc=3 qux -c=4 quux
//! name: schemaless
//! positional: ["qux", "quux"]
//! option a: []
//! option b: []
//! option baz: []
//! option c: ["3", "4"]
//! option foo-bar: ["A"]
//! ```
//!
//! Schema:
//! ```no_run
#![doc = include_str!("../demos/schema.rs")]
//! ```
//!
//! ```console
//! $ schema -h
//! usage: schema [options] FILE...
//! options:
//!   --help, -h           Show this help message and exit.
//!   --verbose, -v        Log every step.
//!   --jobs, -j <count>   How many jobs to run in parallel.
//!   --include, -I <dir>  Add a directory to the search path. May be
//!                        repeated.
//!
//! $ schema -v -I src --include=lib main.rs
//! verbose: true
//! jobs: "1"
//! includes: ["src", "lib"]
//! files: ["main.rs"]
//!
//! $ schema --jobs many
//! Parse error: Option 'jobs' argument 'many' is not a valid uint: invalid digit found in string
//! ```
//!
//! # Derive Api
//! See the [derive module](./derive/index.html) for configuring options from a struct.
//!
//! # Sub-commands
//! The `*_until_sub_command` methods stop at the first positional argument and return the rest of the input as a new [`Command`].
//! The parent and the sub-command are configured independently.
//!
//! ```no_run
#![doc = include_str!("../demos/sub_command.rs")]
//! ```
//!
//! # Help
//! [`Help`] lays out free text and option listings in blocks, wrapped to the terminal width by [`LineBreaker`].
//!
//! ```
//! use argvise::{Help, Layout, OptionConfig};
//!
//! let configs = vec![
//!     OptionConfig::new(["foo-bar", "f"]).takes_argument().help_label("<text>").description("D1"),
//!     OptionConfig::new(["baz", "b"]).description("D2"),
//! ];
//! let help = Help::new(80)
//!     .add_text("usage: app [options]", Layout::new())
//!     .add_options(&configs, Layout::new());
//! let lines: Vec<String> = help.lines().collect();
//!
//! assert_eq!(lines[0], "usage: app [options]");
//! assert_eq!(lines[1], "--foo-bar, -f <text>  D1");
//! assert_eq!(lines[2], "--baz, -b             D2");
//! ```
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events for configuration checks, sub-command splits and help layout.
//! * `unit_test`: expose [`Command::test_dummy`] for testing sub-command handlers.
pub mod derive;

pub use argvise_core::*;
