use crate::{LuaBuilderError, log, verbose};
use std::fmt;

const DEFAULT_INDENT_UNIT: &str = "    ";
const DEFAULT_NEWLINE: &str = "\n";

/// Line endings commonly used in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Builder to emit Lua source code with consistent indentation.
///
/// The builder collects fragments of text which are concatenated, in order and without
/// separators, by [`LuaBuilder::render`]. Line breaks are always emitted together with
/// the indentation of the line they start, so a block opened with e.g.
/// [`LuaBuilder::if_`] gets its body indented one level deeper, and the matching
/// [`LuaBuilder::end`] lines up with the `if`.
///
/// A line break is emitted before the token it introduces, never after. Statements
/// therefore do not end lines themselves; call [`LuaBuilder::newline_indented`] between
/// them.
///
/// ```
/// use luasmith::LuaBuilder;
///
/// let mut lua = LuaBuilder::new();
/// lua.function(Some("greet"), &["name"])?
///     .newline_indented()
///     .call("print", &["\"Hello \" .. name"])
///     .end()?;
/// assert_eq!(lua.render(), "function greet(name)\n    print(\"Hello \" .. name)\nend");
/// # Ok::<(), luasmith::LuaBuilderError>(())
/// ```
pub struct LuaBuilder {
    buffer: Vec<String>,
    indent_level: usize,
    indent_unit: String,
    newline: String,
    log: Option<log::Logger>,
}

impl Default for LuaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LuaBuilder {
    /// Creates an empty builder indenting with four spaces and ending lines with `\n`.
    pub fn new() -> Self {
        LuaBuilder {
            buffer: Vec::new(),
            indent_level: 0,
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
            newline: DEFAULT_NEWLINE.to_string(),
            log: None,
        }
    }

    /// Sets the string used for one level of indentation.
    pub fn with_indent_unit(mut self, indent_unit: impl Into<String>) -> Self {
        self.indent_unit = indent_unit.into();
        self
    }

    /// Sets the string used for line breaks, e.g., `"\r\n"`.
    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }

    /// Attaches a sink for verbose messages, e.g., rejected dedents and arguments.
    pub fn with_log_sink(mut self, sink: Box<dyn std::io::Write + Send>) -> Self {
        self.log = Some(log::Logger::new(sink));
        self
    }

    /// Changes the indentation unit. Only indentation emitted after the change is
    /// affected.
    pub fn set_indent_unit(&mut self, indent_unit: impl Into<String>) -> &mut Self {
        self.indent_unit = indent_unit.into();
        self
    }

    /// Changes the line break string. Only line breaks emitted after the change are
    /// affected.
    pub fn set_newline(&mut self, newline: impl Into<String>) -> &mut Self {
        self.newline = newline.into();
        self
    }

    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    pub fn newline(&self) -> &str {
        &self.newline
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn fragment_count(&self) -> usize {
        self.buffer.len()
    }

    /// Appends text verbatim as a new fragment.
    pub fn append(&mut self, text: impl Into<String>) -> &mut Self {
        self.buffer.push(text.into());
        self
    }

    /// Concatenates all fragments into the generated code.
    pub fn render(&self) -> String {
        self.buffer.concat()
    }

    /// Renders the generated code, consuming the builder. Fails if any block opened
    /// has not been closed.
    pub fn finish(self) -> crate::Result<String> {
        if self.indent_level != 0 {
            verbose!(
                self.log,
                "Finished with {} block(s) still open",
                self.indent_level
            );
            return Err(LuaBuilderError::UnclosedBlock {
                depth: self.indent_level,
            });
        }
        Ok(self.render())
    }

    /// Clears all fragments and restores indentation level, indentation unit and line
    /// break to their initial values, so the builder can be reused for unrelated code.
    pub fn reset(&mut self) -> &mut Self {
        verbose!(
            self.log,
            "Reset after {} fragment(s) at indentation level {}",
            self.buffer.len(),
            self.indent_level
        );
        self.buffer.clear();
        self.indent_level = 0;
        self.indent_unit = DEFAULT_INDENT_UNIT.to_string();
        self.newline = DEFAULT_NEWLINE.to_string();
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decreases the indentation level. Fails without changing anything if the level
    /// is already 0.
    pub fn dedent(&mut self) -> crate::Result<&mut Self> {
        if self.indent_level == 0 {
            verbose!(self.log, "Rejected dedent at indentation level 0");
            return Err(LuaBuilderError::InvalidIndentation);
        }
        self.indent_level -= 1;
        Ok(self)
    }

    /// The indentation of a line started at the current level.
    pub fn current_indent(&self) -> String {
        self.indent_unit.repeat(self.indent_level)
    }

    /// Starts a new line, indented at the current level.
    pub fn newline_indented(&mut self) -> &mut Self {
        let fragment = format!("{}{}", self.newline, self.current_indent());
        self.append(fragment)
    }

    /// Increases the indentation level and starts a new line at the new level.
    pub fn newline_and_indent(&mut self) -> &mut Self {
        self.indent().newline_indented()
    }

    /// Decreases the indentation level and starts a new line at the new level.
    pub fn newline_and_dedent(&mut self) -> crate::Result<&mut Self> {
        Ok(self.dedent()?.newline_indented())
    }

    /// Starts a new line without any indentation, e.g., for blank lines.
    pub fn newline_no_indent(&mut self) -> &mut Self {
        let fragment = self.newline.clone();
        self.append(fragment)
    }

    /// Runs `build` one indentation level deeper. The level is restored afterwards,
    /// also when `build` fails.
    pub fn indented(
        &mut self,
        build: impl FnOnce(&mut Self) -> crate::Result<()>,
    ) -> crate::Result<&mut Self> {
        let level = self.indent_level;
        self.indent();
        let result = build(self);
        self.indent_level = level;
        result?;
        Ok(self)
    }

    /// Appends the quoted and escaped form of `raw`, see [`crate::escape`].
    pub fn append_string_literal(&mut self, raw: &str) -> &mut Self {
        self.append(crate::escape(raw))
    }

    /// Appends `raw` wrapped in a long bracket, see [`crate::long_bracket`].
    pub fn append_long_string(&mut self, raw: &str) -> &mut Self {
        self.append(crate::long_bracket(raw))
    }

    // Appends a block header and opens the block
    pub(crate) fn open_block(&mut self, header: impl Into<String>) -> &mut Self {
        self.append(header).indent()
    }

    // Closes a block, putting the closing token on a new line at the outer level
    pub(crate) fn close_block(&mut self, closer: impl Into<String>) -> crate::Result<&mut Self> {
        Ok(self.newline_and_dedent()?.append(closer))
    }

    // Closes the body of one branch and opens the next, e.g., `else`
    pub(crate) fn continue_block(
        &mut self,
        header: impl Into<String>,
    ) -> crate::Result<&mut Self> {
        Ok(self.newline_and_dedent()?.open_block(header))
    }

    // Logs rejected arguments before passing the result on
    pub(crate) fn checked(&self, result: crate::Result<()>) -> crate::Result<()> {
        if let Err(error) = &result {
            verbose!(self.log, "{}", error);
        }
        result
    }
}

impl fmt::Display for LuaBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.buffer {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}
