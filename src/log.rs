//! Verbose logging of builder events, such as rejected dedents and arguments.

use std::{cell::RefCell, io::Write};

/// Logs a formatted message if a logger is attached. The arguments are not evaluated
/// otherwise.
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)*) => {
        if let Some(logger) = &$logger {
            logger.log(&format!($($arg)*));
        }
    };
}

// The sink is `Send` so that `LuaBuilder` stays `Send`
pub(crate) struct Logger {
    sink: RefCell<Box<dyn Write + Send>>,
}

impl Logger {
    pub(crate) fn new(sink: Box<dyn Write + Send>) -> Self {
        Logger {
            sink: RefCell::new(sink),
        }
    }

    /// Writes one `luasmith:` prefixed line. Falls back to stderr if the sink fails.
    pub(crate) fn log(&self, message: &str) {
        let mut sink = self.sink.borrow_mut();
        if writeln!(sink, "luasmith: {message}").is_err() {
            eprintln!("luasmith: {message}");
        }
    }
}
