mod engine;
mod interface;
mod linebreak;
mod printer;

pub(crate) use engine::*;
pub(crate) use interface::*;
pub use linebreak::LineBreaker;
pub use printer::{Help, Layout, Lines};
