/// Quotes a string as a Lua short string literal.
///
/// The result is a double-quoted literal that a Lua string reader turns back into
/// exactly `raw`. Line breaks and other control characters are written as escape
/// sequences, so the literal never spans more than one line of generated code.
/// Non-ASCII characters are copied as their UTF-8 bytes, which Lua keeps verbatim.
pub fn escape(raw: &str) -> String {
    let mut literal = String::with_capacity(raw.len() + 2);
    literal.push('"');
    for c in raw.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            '\u{7}' => literal.push_str("\\a"),
            '\u{8}' => literal.push_str("\\b"),
            '\u{b}' => literal.push_str("\\v"),
            '\u{c}' => literal.push_str("\\f"),
            // Three digits, so that a digit following in `raw` is not read as part of it
            c if c.is_ascii_control() => literal.push_str(&format!("\\{:03}", c as u32)),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

/// Wraps a string in a Lua long bracket, `[[...]]`, `[=[...]=]` and so on.
///
/// The lowest bracket level whose closing sequence cannot be found in `raw` is used.
/// Lua drops a line break directly after the opening bracket, so one is added when
/// `raw` starts with a line break. Note that Lua normalizes line endings inside long
/// brackets; use [`escape`] when carriage returns must survive.
pub fn long_bracket(raw: &str) -> String {
    let level = long_bracket_level(raw);
    let equals = "=".repeat(level);
    // Lua reads `\n\r` and `\r\n` as one line break, so the added break must not pair
    // up with the first character of `raw`
    let leading_newline = if raw.starts_with('\r') {
        "\r\n"
    } else if raw.starts_with('\n') {
        "\n"
    } else {
        ""
    };
    format!("[{equals}[{leading_newline}{raw}]{equals}]")
}

// Finds the lowest level where `]==]` does not occur in the text and the text does not
// end with `]==`, which together with the closing `]` would end the bracket early.
fn long_bracket_level(raw: &str) -> usize {
    let mut level = 0;
    loop {
        let close = format!("]{}]", "=".repeat(level));
        let tail = format!("]{}", "=".repeat(level));
        if !raw.contains(&close) && !raw.ends_with(&tail) {
            return level;
        }
        level += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_only_quoted() {
        assert_eq!(escape("hello world"), r#""hello world""#);
        assert_eq!(escape(""), r#""""#);
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        assert_eq!(escape(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(escape(r"C:\temp"), r#""C:\\temp""#);
        assert_eq!(escape("it's"), r#""it's""#);
    }

    #[test]
    fn line_breaks_become_two_character_escapes() {
        let literal = escape("one\ntwo\r\nthree");
        assert_eq!(literal, r#""one\ntwo\r\nthree""#);
        assert!(!literal.contains('\n'));
        assert!(!literal.contains('\r'));
    }

    #[test]
    fn named_control_escapes_are_used() {
        assert_eq!(
            escape("\t\u{7}\u{8}\u{b}\u{c}"),
            r#""\t\a\b\v\f""#
        );
    }

    #[test]
    fn other_control_characters_use_three_decimal_digits() {
        assert_eq!(escape("\u{0}1"), r#""\0001""#);
        assert_eq!(escape("\u{1b}[0m"), r#""\027[0m""#);
        assert_eq!(escape("\u{7f}"), r#""\127""#);
    }

    #[test]
    fn non_ascii_is_kept_verbatim() {
        assert_eq!(escape("smörgås ✓"), "\"smörgås ✓\"");
    }

    #[test]
    fn long_bracket_uses_lowest_free_level() {
        assert_eq!(long_bracket("abc"), "[[abc]]");
        assert_eq!(long_bracket("a]]b"), "[=[a]]b]=]");
        assert_eq!(long_bracket("a]]b]=]c"), "[==[a]]b]=]c]==]");
    }

    #[test]
    fn long_bracket_avoids_closing_with_trailing_bracket() {
        assert_eq!(long_bracket("t[1]"), "[=[t[1]]=]");
        assert_eq!(long_bracket("x]="), "[[x]=]]");
    }

    #[test]
    fn long_bracket_keeps_leading_line_break() {
        assert_eq!(long_bracket("\nline"), "[[\n\nline]]");
        assert_eq!(long_bracket("line\n"), "[[line\n]]");
        assert_eq!(long_bracket("\n\rline"), "[[\n\n\rline]]");
    }

    #[test]
    fn long_bracket_keeps_leading_carriage_return() {
        assert_eq!(long_bracket("\rabc"), "[[\r\n\rabc]]");
        assert_eq!(long_bracket("\r\nabc"), "[[\r\n\r\nabc]]");
    }
}
