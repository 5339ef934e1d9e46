//! Canonical tokens for the free-text measures catalog editors type into
//! products, variants and sibling rows (`"4 Litros"`, `"4LT"`, `"20KGS"`).

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// A whole number followed by a fraction: `"1 1/2"` or `"1-1/2"`.
static MIXED_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)(?:\s+|-)(\d+/\d+)").expect("valid mixed number regex")
});

/// A number (decimal point or comma, optional fraction) followed by a unit.
static SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\d+(?:[.,]\d+)?(?:/\d+)?)\s*([A-ZÁÉÍÓÚÑ]+|''|")\.?"#)
        .expect("valid measure segment regex")
});

const UNIT_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "L",
        &[
            "L", "LT", "LTS", "LTR", "LTRS", "LITRO", "LITROS", "LITRE", "LITRES", "LITER",
            "LITERS",
        ],
    ),
    (
        "KG",
        &["KG", "KGS", "KILO", "KILOS", "KILOGRAMO", "KILOGRAMOS"],
    ),
    ("G", &["G", "GR", "GRS", "GRAMO", "GRAMOS"]),
    ("M", &["M", "MT", "MTS", "METRO", "METROS"]),
    (
        "CM",
        &[
            "CM",
            "CMS",
            "CENTIMETRO",
            "CENTIMETROS",
            "CENTÍMETRO",
            "CENTÍMETROS",
        ],
    ),
    (
        "MM",
        &[
            "MM",
            "MMS",
            "MILIMETRO",
            "MILIMETROS",
            "MILÍMETRO",
            "MILÍMETROS",
        ],
    ),
    (
        "\"",
        &["\"", "''", "IN", "INCH", "INCHES", "PULG", "PULGADA", "PULGADAS"],
    ),
];

const STRIPPED_PUNCTUATION: &[char] = &['-', '_', '(', ')', ':', ';', ','];

/// Normalizes a free-text measure into a comparable token.
///
/// Uppercases, canonicalizes unit synonyms (`"4 Litros"` → `"4L"`,
/// `"20KGS"` → `"20KG"`), drops redundant decimal zeros (`"4,0 lt"` →
/// `"4L"`), and strips whitespace and punctuation. Mixed numbers keep a
/// hyphen (`"1 1/2\""` → `"1-1/2\""`) so they never collide with `"11/2\""`. Units outside the synonym
/// table pass through unchanged. Empty input yields an empty string.
#[must_use]
pub fn normalize_measure(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    if upper.is_empty() {
        return String::new();
    }

    let joined = MIXED_NUMBER_RE.replace_all(&upper, "${1}-${2}");
    let canonical = SEGMENT_RE.replace_all(&joined, |caps: &Captures<'_>| {
        let number = canonical_number(&caps[1]);
        let unit = canonical_unit(&caps[2]).unwrap_or(&caps[2]);
        format!("{number}{unit}")
    });

    strip_separators(&canonical)
}

/// `true` when both measures are non-empty and normalize to the same token.
#[must_use]
pub fn measures_match(a: &str, b: &str) -> bool {
    let left = normalize_measure(a);
    !left.is_empty() && left == normalize_measure(b)
}

/// Leading quantity of a measure, used to order option lists.
///
/// Understands decimals (`"2,5L"` → 2.5), fractions (`"1/2\""` → 0.5) and
/// mixed numbers (`"1 1/2\""` or `"1-1/2\""` → 1.5). Returns `None` when the
/// measure does not start with a number.
#[must_use]
pub fn leading_quantity(raw: &str) -> Option<f64> {
    let dotted = raw.trim().replace(',', ".");
    let s = MIXED_NUMBER_RE.replace_all(&dotted, "${1} ${2}");
    let mut parts = s.split_whitespace();
    let first = parts.next()?;

    let whole_or_fraction = parse_number_prefix(first)?;
    if first.contains('/') {
        return Some(whole_or_fraction);
    }

    // Mixed number: "1 1/2\"".
    if let Some(next) = parts.next() {
        if next.contains('/') && first.chars().all(|c| c.is_ascii_digit()) {
            if let Some(fraction) = parse_number_prefix(next) {
                if fraction < 1.0 {
                    return Some(whole_or_fraction + fraction);
                }
            }
        }
    }

    Some(whole_or_fraction)
}

/// Width part of a tape measure: `"18mm x 40m"` → `"18mm"`.
#[must_use]
pub fn width_key(raw: &str) -> &str {
    match raw.find(" x ").or_else(|| raw.find(" X ")) {
        Some(idx) => raw[..idx].trim(),
        None => raw.trim(),
    }
}

/// Splits a product-level measure list such as `"1L, 4L / 10L"` into its
/// entries, leaving fractions like `1/2"` intact.
#[must_use]
pub fn split_measure_list(raw: &str) -> Vec<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut parts = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        let is_fraction_slash = c == '/'
            && i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(char::is_ascii_digit);

        if matches!(c, ',' | ';' | '|') || (c == '/' && !is_fraction_slash) {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

fn canonical_unit(unit: &str) -> Option<&'static str> {
    UNIT_SYNONYMS
        .iter()
        .find(|(_, synonyms)| synonyms.contains(&unit))
        .map(|(canonical, _)| *canonical)
}

/// `"4,50"` → `"4.5"`, `"4.0"` → `"4"`, `"1/2"` unchanged.
fn canonical_number(raw: &str) -> String {
    let dotted = raw.replace(',', ".");
    if dotted.contains('/') || !dotted.contains('.') {
        return dotted;
    }
    dotted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Removes whitespace, separator punctuation, and any dot that is not a
/// decimal point between two digits. A hyphen joining a whole number to a
/// fraction survives.
fn strip_separators(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            if c == '-' && joins_mixed_number(&chars, i) {
                return true;
            }
            if c.is_whitespace() || STRIPPED_PUNCTUATION.contains(&c) {
                return false;
            }
            if c == '.' {
                let prev_digit = i > 0 && chars[i - 1].is_ascii_digit();
                let next_digit = chars.get(i + 1).is_some_and(char::is_ascii_digit);
                return prev_digit && next_digit;
            }
            true
        })
        .map(|(_, &c)| c)
        .collect()
}

/// `true` for the hyphen in `1-1/2`: a digit before it, then digits and a slash.
fn joins_mixed_number(chars: &[char], i: usize) -> bool {
    if i == 0 || !chars[i - 1].is_ascii_digit() {
        return false;
    }
    let rest = &chars[i + 1..];
    let digits = rest.iter().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && rest.get(digits) == Some(&'/')
}

/// Parses `"4"`, `"2.5"`, `"1/2"`, or a number followed by a unit (`"4L"`).
fn parse_number_prefix(token: &str) -> Option<f64> {
    let numeric: String = token
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '/')
        .collect();
    if numeric.is_empty() {
        return None;
    }
    if let Some((num, den)) = numeric.split_once('/') {
        let num: f64 = num.parse().ok()?;
        let den: f64 = den.parse().ok()?;
        if den.abs() < f64::EPSILON {
            return None;
        }
        return Some(num / den);
    }
    numeric.parse().ok()
}

#[cfg(test)]
#[path = "measure_test.rs"]
mod tests;
