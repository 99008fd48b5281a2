//! Parser for `.properties` translation sources.
//!
//! The grammar is line oriented:
//!
//! - Lines whose first non-blank character is `#` or `!` are comments.
//! - The first unescaped `=` or `:` separates the key from the value. Lines
//!   without a separator are skipped.
//! - Keys are trimmed on both sides. Values only lose their leading
//!   whitespace, so trailing spaces survive.
//! - A value ending in an odd number of backslashes continues on the next
//!   line, which is appended without a newline after losing its leading
//!   whitespace. An even number is a run of escaped backslashes.
//! - Escapes are resolved once, on the joined value (see [`unescape`]).
//!
//! Malformed lines never fail the parse; the worst case is a skipped line.

use log::debug;

mod escape;
mod reader;

pub use escape::unescape;
pub use reader::LineReader;

const PARSER_TARGET: &str = "protrans::parser";

/// One key/value entry together with the line it started on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property {
    /// Key with surrounding whitespace removed and escapes resolved.
    pub key: String,
    /// Value with escapes resolved and continuation lines joined.
    pub value: String,
    /// 1-based line number of the first physical line of the entry.
    pub line: usize,
}

impl Property {
    /// Split the entry into its `(key, value)` pair.
    #[must_use]
    pub fn into_pair(self) -> (String, String) {
        (self.key, self.value)
    }
}

/// Parse properties text into entries, in source order.
///
/// Duplicate keys are returned as-is; folding them into a map (and reporting
/// them) is the catalog's job.
///
/// ```
/// use protrans_common::properties::parse;
///
/// let entries = parse("# greeting\nhello = Hello {name}!\nbye: See you\\\n   soon\n");
/// let pairs: Vec<_> = entries.into_iter().map(|entry| entry.into_pair()).collect();
/// assert_eq!(
///     pairs,
///     vec![
///         ("hello".to_owned(), "Hello {name}!".to_owned()),
///         ("bye".to_owned(), "See yousoon".to_owned()),
///     ]
/// );
/// ```
#[must_use]
pub fn parse(text: &str) -> Vec<Property> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = LineReader::new(text);
    let mut properties = Vec::new();

    while let Some((number, line)) = lines.next() {
        if let Some(property) = parse_entry(number, line, &mut lines) {
            properties.push(property);
        }
    }

    properties
}

/// Parse the logical line starting at `line`, pulling continuation lines
/// from `lines` as needed.
fn parse_entry(number: usize, line: &str, lines: &mut LineReader<'_>) -> Option<Property> {
    if is_comment(line) {
        return None;
    }

    let Some((index, separator)) = find_separator(line) else {
        if !line.trim().is_empty() {
            debug!(target: PARSER_TARGET, "skipping line {number}: no `=` or `:` separator");
        }
        return None;
    };

    let (raw_key, rest) = line.split_at(index);
    let raw_value = rest.strip_prefix(separator).unwrap_or(rest).trim_start();
    let joined = join_continuations(raw_value, lines);

    let key = unescape(raw_key.trim());
    let value = unescape(&joined);
    if key.is_empty() && value.is_empty() {
        return None;
    }

    Some(Property {
        key,
        value,
        line: number,
    })
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with(['#', '!'])
}

/// Locate the first `=` or `:` that is not preceded by an escaping backslash.
fn find_separator(line: &str) -> Option<(usize, char)> {
    let mut escaped = false;
    for (index, character) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match character {
            '\\' => escaped = true,
            '=' | ':' => return Some((index, character)),
            _ => {}
        }
    }
    None
}

/// Join continuation lines onto `first` while the pending value ends in an
/// odd number of backslashes.
fn join_continuations(first: &str, lines: &mut LineReader<'_>) -> String {
    let mut pending = String::from(first);

    while ends_with_continuation(&pending) {
        pending.pop();
        match lines.next() {
            Some((_, next)) => pending.push_str(next.trim_start()),
            None => break,
        }
    }

    pending
}

fn ends_with_continuation(value: &str) -> bool {
    let trailing = value
        .chars()
        .rev()
        .take_while(|character| *character == '\\')
        .count();
    trailing % 2 == 1
}
