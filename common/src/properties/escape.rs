//! Escape-sequence handling for keys and values.
//!
//! `\t`, `\n`, and `\r` become control characters and `\uXXXX` becomes the
//! encoded UTF-16 code unit (surrogate pairs written as two consecutive
//! escapes are combined). Any other escaped character stands for itself, so
//! `\\`, `\=`, `\:`, and `\"` yield `\`, `=`, `:`, and `"`.

use std::str::Chars;

/// Resolve escape sequences in `raw`.
///
/// A malformed `\u` escape (fewer than four hex digits) passes the `u`
/// through literally. Unpaired surrogates become U+FFFD. A trailing lone
/// backslash is dropped.
///
/// ```
/// use protrans_common::properties::unescape;
///
/// assert_eq!(unescape(r"tab\there"), "tab\there");
/// assert_eq!(unescape(r"\u00fcber"), "über");
/// assert_eq!(unescape(r"a\=b\\c"), r"a=b\c");
/// ```
#[must_use]
pub fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_owned();
    }

    let mut output = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(character) = chars.next() {
        if character != '\\' {
            output.push(character);
            continue;
        }

        match chars.next() {
            Some('t') => output.push('\t'),
            Some('n') => output.push('\n'),
            Some('r') => output.push('\r'),
            Some('u') => push_unicode_escape(&mut chars, &mut output),
            Some(other) => output.push(other),
            None => {}
        }
    }
    output
}

/// Decode the `XXXX` of a `\uXXXX` escape, combining a following low
/// surrogate escape when the first unit is a high surrogate.
fn push_unicode_escape(chars: &mut Chars<'_>, output: &mut String) {
    let Some(unit) = read_code_unit(chars) else {
        output.push('u');
        return;
    };

    let mut units = vec![unit];
    if is_high_surrogate(unit) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            if let Some(low) = read_code_unit(&mut lookahead).filter(|low| is_low_surrogate(*low)) {
                units.push(low);
                *chars = lookahead;
            }
        }
    }

    output.extend(
        char::decode_utf16(units).map(|decoded| decoded.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}

/// Consume four hex digits from `chars`, leaving it untouched on failure.
fn read_code_unit(chars: &mut Chars<'_>) -> Option<u16> {
    let digits: String = chars.clone().take(4).collect();
    if digits.chars().count() != 4 || !digits.chars().all(|digit| digit.is_ascii_hexdigit()) {
        return None;
    }

    let unit = u16::from_str_radix(&digits, 16).ok()?;
    chars.nth(3);
    Some(unit)
}

const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}
