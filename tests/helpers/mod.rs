use std::io::Read;

// Joins lines of expected code. Generated code has no trailing line break.
#[macro_export]
macro_rules! lines {
    ($($line:expr),* $(,)?) => {{
        let lines: Vec<String> = vec![$(String::from($line)),*];
        lines.join("\n")
    }};
}

/// Reads a Lua short string literal, e.g., `"a\tb"`, the way the Lua lexer does. Returns
/// `None` if the literal is malformed or followed by other text.
pub fn read_lua_string(literal: &str) -> Option<String> {
    let bytes = literal.as_bytes();
    let quote = *bytes.first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }

    let mut value = Vec::new();
    let mut i = 1;
    loop {
        let byte = *bytes.get(i)?;
        i += 1;
        match byte {
            b if b == quote => break,
            b'\n' | b'\r' => return None,
            b'\\' => {
                let escaped = *bytes.get(i)?;
                i += 1;
                match escaped {
                    b'a' => value.push(0x07),
                    b'b' => value.push(0x08),
                    b'f' => value.push(0x0c),
                    b'n' => value.push(b'\n'),
                    b'r' => value.push(b'\r'),
                    b't' => value.push(b'\t'),
                    b'v' => value.push(0x0b),
                    b'\\' | b'"' | b'\'' => value.push(escaped),
                    b'\n' => value.push(b'\n'),
                    b'x' => {
                        let hex = std::str::from_utf8(bytes.get(i..i + 2)?).ok()?;
                        value.push(u8::from_str_radix(hex, 16).ok()?);
                        i += 2;
                    }
                    b'z' => {
                        while bytes.get(i).is_some_and(|b| b.is_ascii_whitespace()) {
                            i += 1;
                        }
                    }
                    b'0'..=b'9' => {
                        let mut code = u32::from(escaped - b'0');
                        for _ in 0..2 {
                            match bytes.get(i) {
                                Some(digit @ b'0'..=b'9') => {
                                    code = code * 10 + u32::from(digit - b'0');
                                    i += 1;
                                }
                                _ => break,
                            }
                        }
                        value.push(u8::try_from(code).ok()?);
                    }
                    _ => return None,
                }
            }
            b => value.push(b),
        }
    }

    if i != bytes.len() {
        return None;
    }
    String::from_utf8(value).ok()
}

/// Creates a temporary file to use as log sink, returning the file and a handle for
/// the builder to write to.
pub fn temp_log() -> (tempfile::NamedTempFile, Box<dyn std::io::Write + Send>) {
    let file = tempfile::NamedTempFile::new().expect("Should be able to create temp file");
    let sink = file.reopen().expect("Should be able to reopen temp file");
    (file, Box::new(sink))
}

pub fn read_log(file: &tempfile::NamedTempFile) -> String {
    let mut content = String::new();
    file.reopen()
        .expect("Should be able to reopen temp file")
        .read_to_string(&mut content)
        .expect("Should be able to read log");
    content
}
