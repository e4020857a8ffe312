//! Cleanup helpers for scraped text.
//!
//! Municipality feeds pad fields with stray tabs, carriage returns, and
//! form feeds. Every string lifted off the wire goes through [`simplify`]
//! before it lands in an entity.

/// Trim a string and collapse each whitespace run to a single character:
/// a newline when the run contains a line break, a space otherwise.
///
/// ```text
/// "   test   "       -> "test"
/// "test\r\n\ftest"   -> "test\ntest"
/// "test \t\vtest"    -> "test test"
/// ```
#[must_use]
pub fn simplify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    let mut run_has_break = false;

    for ch in input.chars() {
        if ch.is_whitespace() {
            in_run = true;
            if matches!(ch, '\n' | '\r' | '\u{000C}') {
                run_has_break = true;
            }
        } else {
            if in_run {
                // a run before the first visible char is leading whitespace
                if !out.is_empty() {
                    out.push(if run_has_break { '\n' } else { ' ' });
                }
                in_run = false;
                run_has_break = false;
            }
            out.push(ch);
        }
    }

    out
}

/// [`simplify`] an optional wire string, mapping whitespace-only values to
/// `None`.
#[must_use]
pub fn simplify_opt(input: Option<&str>) -> Option<String> {
    let cleaned = simplify(input?);
    if cleaned.is_empty() { None } else { Some(cleaned) }
}

/// Rewrite `(123)456...` and `(123) 456...` phone strings to `123-456...`.
#[must_use]
pub fn normalize_phone(phone: &str) -> String {
    let mut out = String::with_capacity(phone.len());
    let mut chars = phone.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '(' => {}
            ')' => {
                out.push('-');
                while chars.peek().is_some_and(|c| c.is_whitespace()) {
                    chars.next();
                }
            }
            other => out.push(other),
        }
    }

    out
}
