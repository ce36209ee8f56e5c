mod builder;
mod constructs;
mod escape;
mod log;
pub mod naming;
mod tokens;

pub use builder::{LineEnding, LuaBuilder};
pub use escape::{escape, long_bracket};

/// Errors reported by [`LuaBuilder`] methods.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LuaBuilderError {
    #[error("Cannot dedent: indentation level is already 0")]
    InvalidIndentation,
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Unclosed block: {depth} block(s) still open")]
    UnclosedBlock { depth: usize },
}

pub type Result<T> = std::result::Result<T, LuaBuilderError>;
