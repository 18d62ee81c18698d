//! Line codec for the flat `key=value` / `[section]` files the LED daemon
//! reads.
//!
//! Value parsing follows `sscanf` conversions: leading digits are consumed and
//! anything after them is ignored, so `0x12zz` still reads as `0x12`. A bare
//! `0x` prefix with no hex digit after it reads as zero for both `%x` and
//! `%i`, since the leading `0` is itself a digit.

/// One classified line of a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Section(&'a str),
    Pair { key: &'a str, value: &'a str },
    Other,
}

pub fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return Line::Other;
    }

    if let Some(rest) = line.strip_prefix('[') {
        return match rest.find(']') {
            Some(end) => Line::Section(rest[..end].trim()),
            None => Line::Other,
        };
    }

    match line.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Line::Pair {
            key: key.trim(),
            value: value.trim(),
        },
        _ => Line::Other,
    }
}

/// Iterate `(section, key, value)` over a whole file. `section` is `None`
/// until the first header.
pub fn pairs(text: &str) -> impl Iterator<Item = (Option<&str>, &str, &str)> {
    let mut section = None;
    text.lines().filter_map(move |raw| match classify(raw) {
        Line::Section(name) => {
            section = Some(name);
            None
        }
        Line::Pair { key, value } => Some((section, key, value)),
        Line::Other => None,
    })
}

// ─── Value parsers ──────────────────────────────────────────────────────────

fn leading_digits(s: &str, radix: u32) -> &str {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    &s[..end]
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// `%x`: hex digits with an optional `0x` prefix.
pub fn parse_hex(value: &str) -> Option<u32> {
    let stripped = strip_hex_prefix(value);
    let digits = leading_digits(stripped, 16);
    if digits.is_empty() {
        return (stripped.len() != value.len()).then_some(0);
    }
    u32::from_str_radix(digits, 16).ok()
}

/// `%d`: signed decimal.
pub fn parse_dec(value: &str) -> Option<i32> {
    let (neg, rest) = split_sign(value);
    let digits = leading_digits(rest, 10);
    if digits.is_empty() {
        return None;
    }
    let n: i64 = digits.parse().ok()?;
    i32::try_from(if neg { -n } else { n }).ok()
}

/// `%i`: signed integer, hex when prefixed with `0x`.
pub fn parse_int(value: &str) -> Option<i32> {
    let (neg, rest) = split_sign(value);
    let stripped = strip_hex_prefix(rest);
    let n: i64 = if stripped.len() != rest.len() {
        let digits = leading_digits(stripped, 16);
        if digits.is_empty() {
            0
        } else {
            i64::from_str_radix(digits, 16).ok()?
        }
    } else {
        let digits = leading_digits(rest, 10);
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok()?
    };
    i32::try_from(if neg { -n } else { n }).ok()
}

/// Format a 24-bit color the way the daemon expects it.
pub fn format_color(color: u32) -> String {
    format!("0x{:06X}", color & 0x00FF_FFFF)
}
