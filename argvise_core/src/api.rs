mod capture;
mod command;
mod config;
mod store;

pub use command::Command;
pub use config::OptionConfig;
pub use store::{derive_configs, OptionStore, StoreField};
