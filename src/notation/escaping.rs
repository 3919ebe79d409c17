//! Escaping of reserved characters
//!
//!     The notation gives structural meaning to a handful of characters (row and segment
//!     separators, label brackets, the stock marker...). To use one of them literally, the
//!     operator prefixes it with a backslash. Before any structural split, [escape_token]
//!     rewrites each such pair into a placeholder that no splitter looks at:
//!
//!         \+   ->   ``4`
//!
//!     where the number is the character's index in [RESERVED]. [unescape_token] turns the
//!     placeholders back into characters once a field has been isolated.
//!
//!     A backslash before any other character is kept as a literal backslash.
//!
//! Known asymmetry
//!
//!     The comma sits at index 0 and index 0 is never decoded: `\,` escapes to ``` ``0` ```
//!     and unescapes to ``` ``0 ``` (the closing backtick is dropped, as for every placeholder
//!     that fails to decode). Row splitting is still protected, only the restored text differs.

use crate::notation::lexing::numeric::parse_leading_int;

/// Escape indicator
pub const ESCAPE_INDICATOR: char = '\\';

/// Characters with structural meaning, in placeholder index order.
/// The quote is U+201D, not the ASCII `"` used around help text.
pub const RESERVED: [char; 12] = [
    ',', ':', ';', '?', '+', '=', '\u{201D}', '<', '>', '(', ')', '\\',
];

const PLACEHOLDER_OPEN: &str = "``";
const PLACEHOLDER_CLOSE: char = '`';

/// Index of `ch` in [RESERVED]
pub fn reserved_index(ch: char) -> Option<usize> {
    RESERVED.iter().position(|&reserved| reserved == ch)
}

pub fn is_reserved(ch: char) -> bool {
    reserved_index(ch).is_some()
}

fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_OPEN}{index}{PLACEHOLDER_CLOSE}")
}

/// Replace every backslash-escaped reserved character with its placeholder
pub fn escape_token(source: &str) -> String {
    let mut escaped = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(pos) = rest.find(ESCAPE_INDICATOR) {
        escaped.push_str(&rest[..pos]);
        let after = &rest[pos + ESCAPE_INDICATOR.len_utf8()..];

        let reserved = after
            .chars()
            .next()
            .and_then(|next| reserved_index(next).map(|index| (next, index)));
        match reserved {
            Some((next, index)) => {
                escaped.push_str(&placeholder(index));
                rest = &after[next.len_utf8()..];
            }
            None => {
                escaped.push(ESCAPE_INDICATOR);
                rest = after;
            }
        }
    }

    escaped.push_str(rest);
    escaped
}

/// Decode a placeholder body. Index 0 and anything out of range do not decode.
fn decode_placeholder(body: &str) -> Option<char> {
    let index = parse_leading_int(body)?;
    if index <= 0 {
        return None;
    }
    RESERVED.get(usize::try_from(index).ok()?).copied()
}

/// Restore the reserved characters encoded by [escape_token]
///
/// A placeholder that fails to decode is emitted without its closing backtick. An opening
/// ``` `` ``` with no closing backtick leaves the remainder untouched.
pub fn unescape_token(source: &str) -> String {
    let mut restored = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(pos) = rest.find(PLACEHOLDER_OPEN) {
        restored.push_str(&rest[..pos]);
        let body_start = &rest[pos + PLACEHOLDER_OPEN.len()..];

        let Some(close) = body_start.find(PLACEHOLDER_CLOSE) else {
            restored.push_str(&rest[pos..]);
            return restored;
        };

        let body = &body_start[..close];
        match decode_placeholder(body) {
            Some(ch) => restored.push(ch),
            None => {
                restored.push_str(PLACEHOLDER_OPEN);
                restored.push_str(body);
            }
        }
        rest = &body_start[close + PLACEHOLDER_CLOSE.len_utf8()..];
    }

    restored.push_str(rest);
    restored
}
