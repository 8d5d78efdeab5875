// src/core/sanitize.rs
//! Character reference decoding for rendered listing text.
//!
//! Names come from the full HTML5 table shipped with `markup5ever` (the
//! tables `scraper` itself parses with). A reference needs its `;` unless it
//! is one of the legacy names browsers accept bare in text content; those
//! match longest-first, so `&notin;` is `∉` and `&notit` is `¬it`.
use std::borrow::Cow;

use markup5ever::data::NAMED_ENTITIES;

/// Decode HTML character references in rendered text.
/// Unknown or malformed references are left as written.
pub fn decode_entities(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(i) = rest.find('&') {
        out.push_str(&rest[..i]);
        let tail = &rest[i..];
        match decode_one(tail) {
            Some(((first, second), used)) => {
                out.push(first);
                out.extend(second);
                rest = &tail[used..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

type Decoded = (char, Option<char>);

/// `tail` starts with '&'. Returns the decoded chars and the bytes consumed.
fn decode_one(tail: &str) -> Option<(Decoded, usize)> {
    let body = &tail[1..];

    if let Some(num) = body.strip_prefix('#') {
        let (digits_from, radix) = match num.chars().next()? {
            'x' | 'X' => (1, 16),
            _ => (0, 10),
        };
        let digits: &str = {
            let d = &num[digits_from..];
            let end = d.find(|c: char| !c.is_digit(radix)).unwrap_or(d.len());
            &d[..end]
        };
        if digits.is_empty() {
            return None;
        }
        let ch = char::from_u32(u32::from_str_radix(digits, radix).ok()?)?;
        let mut used = 2 + digits_from + digits.len();
        if tail[used..].starts_with(';') {
            used += 1;
        }
        return Some(((ch, None), used));
    }

    let end = body.find(|c: char| !c.is_ascii_alphanumeric()).unwrap_or(body.len());
    if body[end..].starts_with(';') {
        if let Some(decoded) = lookup(&body[..=end]) {
            return Some((decoded, 1 + end + 1));
        }
    }
    // bare legacy names, longest first
    (1..=end)
        .rev()
        .find_map(|len| lookup(&body[..len]).map(|decoded| (decoded, 1 + len)))
}

/// Table keys drop the leading '&'. Prefix-only keys map to zero.
fn lookup(key: &str) -> Option<Decoded> {
    let &(first, second) = NAMED_ENTITIES.get(key)?;
    if first == 0 {
        return None;
    }
    Some((char::from_u32(first)?, char::from_u32(second).filter(|&c| c != '\0')))
}
