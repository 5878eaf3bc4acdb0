//! Traits which, typically, may be imported without concern: `use argvise::prelude::*`.

// Needs to be imported in order to call `fields` on a derived option store.
pub use crate::api::OptionStore;
