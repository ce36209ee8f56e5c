//! Helpers for names appearing in generated Lua code.

use std::sync::LazyLock;

static IDENTIFIER: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").expect("Identifier regex should be valid")
});

/// Reserved words of Lua 5.4. None of them can be used as a name.
pub const RESERVED_WORDS: [&str; 22] = [
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if",
    "in", "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Checks if a string can be used as a Lua name, i.e., a variable, field or label.
///
/// Lua names consist of ASCII letters, digits and underscores, do not start with a
/// digit and are not reserved words.
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name) && !RESERVED_WORDS.contains(&name)
}

/// Formats a table constructor key, including the trailing ` = `.
///
/// Keys that are valid names are written bare, `name = `. Any other key is written as
/// a bracketed string literal, `["some key"] = `.
pub fn table_key(key: &str) -> String {
    if is_identifier(key) {
        format!("{key} = ")
    } else {
        format!("[{}] = ", crate::escape(key))
    }
}

pub(crate) fn require_identifier(what: &str, name: &str) -> crate::Result<()> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(crate::LuaBuilderError::InvalidArgument(format!(
            "{what} must be a valid Lua name, got '{name}'"
        )))
    }
}

pub(crate) fn require_non_empty<T>(what: &str, items: &[T]) -> crate::Result<()> {
    if items.is_empty() {
        Err(crate::LuaBuilderError::InvalidArgument(format!(
            "{what} must contain at least one element"
        )))
    } else {
        Ok(())
    }
}

pub(crate) fn require_non_empty_str(what: &str, text: &str) -> crate::Result<()> {
    if text.is_empty() {
        Err(crate::LuaBuilderError::InvalidArgument(format!(
            "{what} must not be empty"
        )))
    } else {
        Ok(())
    }
}
