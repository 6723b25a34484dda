use encoding_rs::Encoding;

/// Decode raw bytes into text. A byte order mark takes precedence over `encoding`; malformed
/// sequences become U+FFFD instead of failing the parse.
pub fn decode_bytes(data: &[u8], encoding: &'static Encoding) -> String {
    let (text, used, had_errors) = encoding.decode(data);

    if had_errors {
        log::warn!(
            "input contained malformed {} sequences; replaced with U+FFFD",
            used.name()
        );
    }

    text.into_owned()
}

/// Split text into lines. `\n`, `\r\n` and a lone `\r` all terminate a line, and the terminators
/// are not part of the returned lines. A trailing terminator does not produce an empty last line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(text.len() / 16 + 1);
    let mut chars = text.char_indices().peekable();
    let mut start = 0;

    while let Some((i, c)) = chars.next() {
        match c {
            '\n' => {
                lines.push(text[start..i].to_owned());
                start = i + 1;
            }
            '\r' => {
                lines.push(text[start..i].to_owned());
                start = i + 1;

                if chars.next_if(|&(_, c)| c == '\n').is_some() {
                    start += 1;
                }
            }
            _ => {}
        }
    }

    if start < text.len() {
        lines.push(text[start..].to_owned());
    }

    lines
}

/// Remove one leading and one trailing quote character. Each side is handled on its own, so
/// `"value` and `value'` lose their single quote as well.
pub fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix(is_quote).unwrap_or(value);
    value.strip_suffix(is_quote).unwrap_or(value)
}

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'')
}
