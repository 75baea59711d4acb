//! Character-level sanitization of untrusted text fields.
//!
//! Titles come straight out of web pages, so they can contain anything:
//! quotes, commas, angle brackets, arbitrary Unicode. `sanitize` maps all of
//! that into a plain-ASCII form that cannot break the comma-delimited
//! artifact structure.

/// Sanitize a raw text field for embedding in the artifact.
///
/// One left-to-right scan over the input, each character handled exactly once
/// (already-produced escape text is never rescanned):
///
/// 1. structural characters escape to HTML entities:
///    `&`→`&amp;` `"`→`&quot;` `'`→`&#39;` `>`→`&gt;` `<`→`&lt;`
/// 2. a literal comma becomes the full-width comma U+FF0C, so the field
///    delimiter can never appear inside a field
/// 3. any code point above 127 becomes `&#x<hex>;` (lowercase, no leading
///    zeros); this includes the U+FF0C from step 2, which lands as
///    `&#xff0c;`
///
/// The function is pure and total: identical input always yields identical
/// output, and no input fails.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '>' => out.push_str("&gt;"),
            '<' => out.push_str("&lt;"),
            ',' => push_char_ref(&mut out, '，'),
            c if !c.is_ascii() => push_char_ref(&mut out, c),
            c => out.push(c),
        }
    }
    out
}

fn push_char_ref(out: &mut String, c: char) {
    out.push_str(&format!("&#x{:x};", c as u32));
}
