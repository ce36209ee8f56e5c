// Parameterized Lua constructs. Arguments are checked before anything is appended, so a
// rejected call leaves the builder untouched.
use crate::LuaBuilder;
use crate::naming::{require_identifier, require_non_empty, require_non_empty_str, table_key};

impl LuaBuilder {
    /// Opens a function, `function name(params)`, or an anonymous function,
    /// `function(params)`, when `name` is `None`.
    ///
    /// The name is written as given, so `"t.f"` and `"obj:method"` define fields and
    /// methods.
    pub fn function(&mut self, name: Option<&str>, params: &[&str]) -> crate::Result<&mut Self> {
        let header = match name {
            Some(name) => {
                self.checked(require_non_empty_str("Function name", name))?;
                format!("function {}({})", name, params.join(", "))
            }
            None => format!("function({})", params.join(", ")),
        };
        Ok(self.open_block(header))
    }

    /// Opens a local function, `local function name(params)`.
    pub fn local_function(&mut self, name: &str, params: &[&str]) -> crate::Result<&mut Self> {
        self.checked(require_identifier("Local function name", name))?;
        Ok(self.open_block(format!("local function {}({})", name, params.join(", "))))
    }

    /// Opens the first branch of an if statement, `if condition then`.
    pub fn if_(&mut self, condition: &str) -> &mut Self {
        self.open_block(format!("if {condition} then"))
    }

    /// Closes the current branch and opens `elseif condition then`, lined up with the
    /// `if`.
    pub fn elseif(&mut self, condition: &str) -> crate::Result<&mut Self> {
        self.continue_block(format!("elseif {condition} then"))
    }

    /// Opens a while loop, `while condition do`.
    pub fn while_(&mut self, condition: &str) -> &mut Self {
        self.open_block(format!("while {condition} do"))
    }

    /// Opens a numeric for loop, `for var = start, stop, step do`. The step is left out
    /// when `None`.
    pub fn for_range(
        &mut self,
        var: &str,
        start: &str,
        stop: &str,
        step: Option<&str>,
    ) -> crate::Result<&mut Self> {
        self.checked(require_identifier("Loop variable", var))?;
        let header = match step {
            Some(step) => format!("for {var} = {start}, {stop}, {step} do"),
            None => format!("for {var} = {start}, {stop} do"),
        };
        Ok(self.open_block(header))
    }

    /// Opens a generic for loop, `for k, v in exprs do`.
    pub fn for_in(&mut self, names: &[&str], exprs: &[&str]) -> crate::Result<&mut Self> {
        self.checked(require_names("Loop variables", names))?;
        self.checked(require_non_empty("Loop expressions", exprs))?;
        Ok(self.open_block(format!(
            "for {} in {} do",
            names.join(", "),
            exprs.join(", ")
        )))
    }

    /// Closes a `repeat` block with `until condition`, lined up with the `repeat`.
    pub fn until(&mut self, condition: &str) -> crate::Result<&mut Self> {
        self.close_block(format!("until {condition}"))
    }

    /// Declares local variables without values, `local a, b`.
    pub fn local(&mut self, names: &[&str]) -> crate::Result<&mut Self> {
        self.checked(require_names("Local names", names))?;
        Ok(self.append(format!("local {}", names.join(", "))))
    }

    /// Declares local variables with values, `local a, b = x, y`.
    pub fn local_assign(&mut self, names: &[&str], values: &[&str]) -> crate::Result<&mut Self> {
        self.checked(require_names("Local names", names))?;
        self.checked(require_non_empty("Local values", values))?;
        Ok(self.append(format!(
            "local {} = {}",
            names.join(", "),
            values.join(", ")
        )))
    }

    /// Assigns values to variables or fields, `a, t.b = x, y`.
    pub fn assign(&mut self, targets: &[&str], values: &[&str]) -> crate::Result<&mut Self> {
        self.checked(require_names("Assignment targets", targets))?;
        self.checked(require_non_empty("Assignment values", values))?;
        Ok(self.append(format!("{} = {}", targets.join(", "), values.join(", "))))
    }

    /// Returns from a function, `return` or `return a, b`.
    pub fn return_(&mut self, values: &[&str]) -> &mut Self {
        if values.is_empty() {
            self.append("return")
        } else {
            self.append(format!("return {}", values.join(", ")))
        }
    }

    /// Calls a function, `callee(args)`.
    pub fn call(&mut self, callee: &str, args: &[&str]) -> &mut Self {
        self.append(format!("{}({})", callee, args.join(", ")))
    }

    /// Calls a method, `object:method(args)`.
    pub fn method_call(
        &mut self,
        object: &str,
        method: &str,
        args: &[&str],
    ) -> crate::Result<&mut Self> {
        self.checked(require_identifier("Method name", method))?;
        Ok(self.append(format!("{}:{}({})", object, method, args.join(", "))))
    }

    /// Accesses a field by name, `.name`.
    pub fn field(&mut self, name: &str) -> crate::Result<&mut Self> {
        self.checked(require_identifier("Field name", name))?;
        Ok(self.append(format!(".{name}")))
    }

    /// Indexes with an expression, `[expr]`.
    pub fn index(&mut self, expr: &str) -> &mut Self {
        self.append(format!("[{expr}]"))
    }

    /// Starts a keyed entry in a table constructor, `key = ` or `["key"] = `, see
    /// [`crate::naming::table_key`].
    pub fn table_key(&mut self, key: &str) -> &mut Self {
        self.append(table_key(key))
    }

    /// Jumps to a label, `goto label`.
    pub fn goto(&mut self, label: &str) -> crate::Result<&mut Self> {
        self.checked(require_identifier("Label", label))?;
        Ok(self.append(format!("goto {label}")))
    }

    /// Defines a label, `::name::`.
    pub fn label(&mut self, name: &str) -> crate::Result<&mut Self> {
        self.checked(require_identifier("Label", name))?;
        Ok(self.append(format!("::{name}::")))
    }

    /// Appends a comment. Text spanning several lines becomes a long comment,
    /// `--[[ ... ]]`.
    pub fn comment(&mut self, text: &str) -> &mut Self {
        if text.contains(['\n', '\r']) {
            self.append(format!("--{}", crate::long_bracket(text)))
        } else if text.is_empty() {
            self.append("--")
        } else {
            self.append(format!("-- {text}"))
        }
    }

    /// Appends an integer literal.
    pub fn integer(&mut self, value: i64) -> &mut Self {
        // The literal 9223372036854775808 would be read as a float before negation
        if value == i64::MIN {
            self.append("math.mininteger")
        } else {
            self.append(value.to_string())
        }
    }

    /// Appends a float literal. Infinities and NaN, which have no literal form, are
    /// written as `math.huge`, `-math.huge` and `(0/0)`.
    pub fn number(&mut self, value: f64) -> &mut Self {
        if value.is_nan() {
            self.append("(0/0)")
        } else if value.is_infinite() {
            self.append(if value > 0.0 {
                "math.huge"
            } else {
                "-math.huge"
            })
        } else {
            // Debug formatting keeps `.0` on whole numbers so Lua reads a float
            self.append(format!("{value:?}"))
        }
    }
}

fn require_names(what: &str, names: &[&str]) -> crate::Result<()> {
    require_non_empty(what, names)?;
    names
        .iter()
        .try_for_each(|name| require_non_empty_str(what, name))
}
