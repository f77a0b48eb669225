//! CSS color normalization and a rough dark/light classifier.
//!
//! Only hex literals and integer `rgb(r, g, b)` are understood. Named colors,
//! `rgba()`, `hsl()` and gradients normalize to `None` and are skipped by the
//! extractor.

use regex::Regex;
use std::sync::LazyLock;

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
        .expect("valid rgb regex")
});

/// Canonical `#RRGGBB` form of a hex or `rgb()` color, upper-cased.
pub fn normalize(color: &str) -> Option<String> {
    let color = color.trim();

    if let Some(digits) = color.strip_prefix('#') {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return match digits.len() {
            3 => Some(
                digits
                    .chars()
                    .fold(String::from("#"), |mut out, c| {
                        out.push(c);
                        out.push(c);
                        out
                    })
                    .to_ascii_uppercase(),
            ),
            6 => Some(format!("#{}", digits.to_ascii_uppercase())),
            _ => None,
        };
    }

    let caps = RGB_RE.captures(color)?;
    let mut out = String::from("#");
    for i in 1..=3 {
        let channel: u8 = caps[i].parse().ok()?;
        out.push_str(&format!("{channel:02X}"));
    }
    Some(out)
}

/// Whether `value` is a `#` followed by 3 or 6 hex digits.
pub fn is_hex(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|d| matches!(d.len(), 3 | 6) && d.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Perceived brightness in `[0, 1]` using the Rec. 601 weights.
pub fn luminance(hex: &str) -> Option<f64> {
    let canonical = normalize(hex)?;
    let channel = |i: usize| u8::from_str_radix(&canonical[i..i + 2], 16).ok();
    let (r, g, b) = (channel(1)?, channel(3)?, channel(5)?);
    Some((0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0)
}

/// True when luminance is below one half. Unparseable input is never dark.
pub fn is_dark(hex: &str) -> bool {
    luminance(hex).is_some_and(|l| l < 0.5)
}
