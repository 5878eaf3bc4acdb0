//! Core of `argvise`: the token matcher, option configurations, and help layout.
//! See [documentation root](https://docs.rs/argvise/latest/argvise/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod error;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
pub mod tokens;

pub use api::*;
pub use error::*;
pub use model::*;
pub use parser::{Help, Layout, LineBreaker, Lines};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
