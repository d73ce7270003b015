pub const LINE_BREAK: char = '\n';

/// Splits `text` on every `'\n'`.
///
/// Each boundary separates two elements, so empty text yields `[""]` and a
/// trailing newline yields a trailing empty line. `'\r'` is kept as content.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split(LINE_BREAK).map(str::to_string).collect()
}

/// Drops a single line terminator from the end of file content, if present.
pub fn strip_final_newline(text: &str) -> &str {
    text.strip_suffix(LINE_BREAK).unwrap_or(text)
}
