//! Byte-level text helpers shared by the document store and the colorizer.

/// Length of the UTF-8 sequence introduced by `lead`, from its bit prefix (1-6 bytes).
///
/// Continuation bytes (`10xxxxxx`) and plain ASCII both report 1.
pub fn utf8_char_length(lead: u8) -> usize {
    if lead & 0xFE == 0xFC {
        6
    } else if lead & 0xFC == 0xF8 {
        5
    } else if lead & 0xF8 == 0xF0 {
        4
    } else if lead & 0xF0 == 0xE0 {
        3
    } else if lead & 0xE0 == 0xC0 {
        2
    } else {
        1
    }
}

/// Returns `true` for UTF-8 continuation bytes (`10xxxxxx`).
pub fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Visual column reached after a tab that starts at `column`.
///
/// A tab size of zero degrades to a single column step.
pub fn next_tab_stop(column: usize, tab_size: usize) -> usize {
    if tab_size == 0 {
        column + 1
    } else {
        (column / tab_size) * tab_size + tab_size
    }
}

/// ASCII whitespace as understood by C's `isspace` (includes vertical tab and form feed).
pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// ASCII blank (space or tab).
pub(crate) fn is_blank(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

pub(crate) fn bytes_to_string(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
