// src/domain/pagination.rs
//! Offset pagination shared by the listing query and the store adapters.

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 100;

/// A sanitized page window. `page >= 1` and `per_page` in `1..=MAX_PER_PAGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Clamp arbitrary integers into a valid window.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Build a window from raw query-string values. Missing values take the
    /// defaults; present values are coerced with [`coerce_non_negative`].
    pub fn from_raw(page: Option<&str>, per_page: Option<&str>) -> Self {
        let page = page.map_or(DEFAULT_PAGE, coerce_non_negative);
        let per_page = per_page.map_or(DEFAULT_PER_PAGE, coerce_non_negative);
        Self::new(page, per_page)
    }

    pub fn page(self) -> u32 {
        self.page
    }

    pub fn per_page(self) -> u32 {
        self.per_page
    }

    pub fn offset(self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    pub fn limit(self) -> u64 {
        u64::from(self.per_page)
    }

    pub fn total_pages(self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.per_page))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PER_PAGE)
    }
}

/// Integer-cast semantics for query values: skip leading ASCII whitespace,
/// accept an optional sign, read the leading numeric prefix and ignore the
/// rest. Decimal and exponent forms (`3.9`, `1e3`) truncate toward zero.
/// No number or a negative sign yields 0; values beyond `u32::MAX` saturate.
pub fn coerce_non_negative(raw: &str) -> u32 {
    let trimmed = raw.trim_start_matches(is_cast_whitespace);
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let number = numeric_prefix(unsigned);
    if negative || number.is_empty() {
        return 0;
    }

    if number.bytes().all(|byte| byte.is_ascii_digit()) {
        number.bytes().fold(0_u32, |value, byte| {
            value.saturating_mul(10).saturating_add(u32::from(byte - b'0'))
        })
    } else {
        number.parse::<f64>().map_or(0, truncate_to_u32)
    }
}

const fn is_cast_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Longest prefix shaped like `digits[.digits][e[+-]digits]` with at least one
/// mantissa digit. An exponent marker without digits is not part of it.
fn numeric_prefix(input: &str) -> &str {
    let bytes = input.as_bytes();
    let digits_end = |start: usize| {
        start
            + bytes
                .get(start..)
                .unwrap_or_default()
                .iter()
                .take_while(|byte| byte.is_ascii_digit())
                .count()
    };

    let mut end = digits_end(0);
    let mut mantissa_digits = end;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_end(end + 1);
        mantissa_digits += fraction_end - end - 1;
        end = fraction_end;
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_start = end + 1;
        if matches!(bytes.get(exponent_start), Some(b'+' | b'-')) {
            exponent_start += 1;
        }
        let exponent_end = digits_end(exponent_start);
        if exponent_end > exponent_start {
            end = exponent_end;
        }
    }

    &input[..end]
}

// `as` saturates at the bounds and maps NaN to 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_to_u32(value: f64) -> u32 {
    value.trunc() as u32
}
