//! IRC formatting-code stripping
//!
//! Command arguments typed in a client may carry bold, color or other
//! formatting codes. These are removed before a pattern is compiled.

use std::borrow::Cow;

const COLOR: char = '\x03';

/// Control characters that toggle formatting without arguments
const TOGGLES: &[char] = &[
    '\x02', // Bold
    '\x0F', // Reset
    '\x11', // Monospace
    '\x16', // Reverse
    '\x1D', // Italics
    '\x1E', // Strikethrough
    '\x1F', // Underline
];

/// Strip IRC formatting codes from `text`
///
/// Color codes take up to two foreground digits, optionally followed by a
/// comma and up to two background digits.
#[must_use]
pub fn strip_formatting(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| c == COLOR || TOGGLES.contains(&c)) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if TOGGLES.contains(&c) {
            continue;
        }
        if c != COLOR {
            out.push(c);
            continue;
        }

        if skip_digits(&mut chars) > 0 && chars.peek() == Some(&',') {
            // Only consume the comma when a background color follows it
            let mut lookahead = chars.clone();
            lookahead.next();
            if lookahead.peek().is_some_and(char::is_ascii_digit) {
                chars.next();
                skip_digits(&mut chars);
            }
        }
    }

    Cow::Owned(out)
}

fn skip_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> usize {
    let mut n = 0;
    while n < 2 && chars.peek().is_some_and(char::is_ascii_digit) {
        chars.next();
        n += 1;
    }
    n
}
