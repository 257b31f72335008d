//! HTML to plain-text conversion for rich-text answers.
//!
//! Length rules on rich-text questions are measured against the visible
//! text, not the markup, so the HTML body (slot 0 of the answer) is
//! flattened first. Conversion failure is fatal to the validation call: it
//! signals broken content, not bad user input, and is never turned into a
//! field error.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RichTextError {
    #[error("unterminated tag at byte {0}")]
    UnterminatedTag(usize),
    #[error("malformed character reference `{0}`")]
    BadCharacterReference(String),
}

/// Strips tags and decodes character references, returning the visible
/// text of an HTML fragment.
pub fn html_to_plain(html: &str) -> Result<String, RichTextError> {
    let mut plain = String::with_capacity(html.len());
    let mut rest = html;
    let mut offset = 0;

    while let Some(i) = rest.find(['<', '&']) {
        plain.push_str(&rest[..i]);
        if rest[i..].starts_with('<') {
            let Some(end) = rest[i..].find('>') else {
                return Err(RichTextError::UnterminatedTag(offset + i));
            };
            offset += i + end + 1;
            rest = &rest[i + end + 1..];
        } else {
            let len = decode_reference(&rest[i..], &mut plain)?;
            offset += i + len;
            rest = &rest[i + len..];
        }
    }
    plain.push_str(rest);
    Ok(plain)
}

/// Decodes one `&...;` reference at the start of `input`, appending the
/// replacement to `out`, and returns how many bytes were consumed. A bare
/// `&` with no terminating `;` nearby is kept literally; a numeric
/// reference that does not name a character is an error.
fn decode_reference(input: &str, out: &mut String) -> Result<usize, RichTextError> {
    // References are short; an unterminated '&' should not swallow the
    // rest of the body.
    let end = match input.find(';') {
        Some(end) if end <= 12 => end,
        _ => {
            out.push('&');
            return Ok(1);
        }
    };
    let name = &input[1..end];

    let replacement = match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ if name.starts_with('#') => {
            let digits = &name[1..];
            let code = if let Some(hex) = digits.strip_prefix(['x', 'X']) {
                u32::from_str_radix(hex, 16)
            } else {
                digits.parse::<u32>()
            };
            let decoded = code.ok().and_then(char::from_u32);
            if decoded.is_none() {
                return Err(RichTextError::BadCharacterReference(format!("&{name};")));
            }
            decoded
        }
        // Unknown named entity: keep it literally.
        _ => None,
    };

    match replacement {
        Some(ch) => {
            out.push(ch);
            Ok(end + 1)
        }
        None => {
            out.push('&');
            Ok(1)
        }
    }
}
