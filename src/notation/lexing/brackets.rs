//! Delimited fragment extraction
//!
//! Finds every substring enclosed by a start and an end delimiter, scanning left to right. A
//! start delimiter with no end after it is skipped and the scan resumes one character later,
//! so malformed bracketing never aborts the scan. The same routine pulls `<...>` label blocks
//! from the schema row and `"..."` help text from a label.

/// Result of a delimiter scan
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenScan<'a> {
    /// Enclosed substrings, delimiters excluded, in source order
    pub tokens: Vec<&'a str>,
    /// Start delimiters that had no end delimiter after them
    pub unmatched: usize,
}

/// Scan `source` for fragments between `start` and `end`
pub fn scan_tokens(source: &str, start: char, end: char) -> TokenScan<'_> {
    let mut scan = TokenScan::default();
    let mut cursor = 0;

    while let Some(found) = source[cursor..].find(start) {
        let open = cursor + found;
        let body_start = open + start.len_utf8();

        match source[body_start..].find(end) {
            Some(len) => {
                scan.tokens.push(&source[body_start..body_start + len]);
                cursor = body_start + len + end.len_utf8();
            }
            None => {
                scan.unmatched += 1;
                cursor = body_start;
            }
        }
    }

    scan
}

/// Fragments between `start` and `end`, ignoring unmatched delimiters
pub fn extract_tokens(source: &str, start: char, end: char) -> Vec<&str> {
    scan_tokens(source, start, end).tokens
}
