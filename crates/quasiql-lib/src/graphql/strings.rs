//! String literal decoding.

/// Decodes the body of a quoted string (without the surrounding quotes).
///
/// Returns the byte offset (relative to `raw`) and a message for the first
/// invalid escape sequence.
pub fn unescape(raw: &str) -> Result<String, (usize, String)> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some((_, esc)) = chars.next() else {
            return Err((i, "Invalid character escape sequence: \"\\\".".to_string()));
        };
        match esc {
            '"' => out.push('"'),
            '\\' => out.push('\\'),
            '/' => out.push('/'),
            'b' => out.push('\u{0008}'),
            'f' => out.push('\u{000C}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'u' => {
                let hex: String = chars.by_ref().take(4).map(|(_, h)| h).collect();
                let decoded = (hex.len() == 4)
                    .then(|| u32::from_str_radix(&hex, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);
                match decoded {
                    Some(ch) => out.push(ch),
                    None => {
                        return Err((
                            i,
                            format!("Invalid Unicode escape sequence: \"\\u{hex}\"."),
                        ));
                    }
                }
            }
            other => {
                return Err((
                    i,
                    format!("Invalid character escape sequence: \"\\{other}\"."),
                ));
            }
        }
    }

    Ok(out)
}

/// Produces the value of a block string from its raw body (without the `"""` delimiters).
///
/// Unescapes `\"""`, removes the common indentation of all lines but the
/// first, and drops leading and trailing blank lines.
pub fn block_string_value(raw: &str) -> String {
    let raw = raw.replace("\\\"\"\"", "\"\"\"");
    let lines: Vec<&str> = raw.split("\r\n").flat_map(|l| l.split(['\n', '\r'])).collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = leading_whitespace(line);
            (indent < line.len()).then_some(indent)
        })
        .min();

    let mut dedented: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| match common_indent {
            Some(indent) if i > 0 => line.get(indent..).unwrap_or(""),
            _ => line,
        })
        .collect();

    while dedented.first().is_some_and(|l| is_blank(l)) {
        dedented.remove(0);
    }
    while dedented.last().is_some_and(|l| is_blank(l)) {
        dedented.pop();
    }

    dedented.join("\n")
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

fn is_blank(line: &str) -> bool {
    leading_whitespace(line) == line.len()
}
