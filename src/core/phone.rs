//! Phone number normalization for WhatsApp deep links.
//!
//! Contact numbers are entered free-form by patients in Egypt and Saudi
//! Arabia: with or without a country code, with a local leading zero, with
//! stray spaces, occasionally with the country code typed at the wrong end.
//! `wa.me` links only work with full E.164-style numbers, so this module
//! repairs what it can and passes through what it cannot.
//!
//! The repair is a fixed chain of heuristics tried in order; the first match
//! wins. Earlier rules are the more specific ones, which matters for inputs
//! that several rules could claim (a 10-digit number starting with `1` is an
//! Egyptian mobile even if it happens to end in `20`).

/// Shown in place of a number when none is on record.
pub const PHONE_NOT_AVAILABLE: &str = "غير متوفر";

/// Normalizes a raw contact number into a dialable `+<digits>` form.
///
/// Absent and empty input produce [`PHONE_NOT_AVAILABLE`]. Input that no
/// heuristic recognizes is returned unchanged (minus whitespace), never an
/// error: the caller renders whatever comes back.
///
/// Normalized output is a fixed point: feeding a `+<digits>` result back in
/// returns it unchanged.
pub fn format_phone_number(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(value) if !value.is_empty() => value,
        _ => return PHONE_NOT_AVAILABLE.to_string(),
    };

    let mut number: String = raw.split_whitespace().collect();

    // A '+' anywhere means the user meant a country code; collapse the number
    // around a single leading '+'.
    if number.contains('+') {
        let digits: String = number.chars().filter(|c| *c != '+').collect();
        number = format!("+{digits}");
    }

    if !number.starts_with('+') {
        number = infer_country_code(number);
    }

    // The heuristics only ever prepend, but keep the output shape guaranteed:
    // exactly one '+', and only in first position.
    if number.rfind('+').is_some_and(|pos| pos != 0) {
        let digits: String = number.chars().filter(|c| *c != '+').collect();
        number = format!("+{digits}");
    }
    if number.chars().any(char::is_whitespace) {
        number = number.split_whitespace().collect();
    }

    number
}

/// Attaches the most plausible country code to a number without one.
///
/// Rules are ordered most-specific-first and the first match wins:
///
/// 1. already starts with `20` or `966`: just add `+`
/// 2. 11 digits starting `01`: Egyptian mobile with local zero
/// 3. 10 digits starting `1`: Egyptian mobile without the zero
/// 4. 9 digits starting `5`: Saudi mobile without the zero
/// 5. 10 digits starting `05`: Saudi mobile with local zero
/// 6. ends with `966`: country code typed at the wrong end (Saudi)
/// 7. ends with `20`: country code typed at the wrong end (Egypt)
/// 8. 9 to 15 digits: assume the country code is already there
///
/// Anything else is returned as received.
fn infer_country_code(number: String) -> String {
    let len = number.chars().count();

    if number.starts_with("20") || number.starts_with("966") {
        return format!("+{number}");
    }
    if len == 11 {
        if let Some(rest) = number.strip_prefix("01") {
            return format!("+201{rest}");
        }
    }
    if len == 10 && number.starts_with('1') {
        return format!("+20{number}");
    }
    if len == 9 && number.starts_with('5') {
        return format!("+966{number}");
    }
    if len == 10 {
        if let Some(rest) = number.strip_prefix("05") {
            return format!("+9665{rest}");
        }
    }
    if len > 3 {
        if let Some(head) = number.strip_suffix("966") {
            return format!("+966{head}");
        }
    }
    if len > 2 {
        if let Some(head) = number.strip_suffix("20") {
            return format!("+20{head}");
        }
    }
    if (9..=15).contains(&len) && number.chars().all(|c| c.is_ascii_digit()) {
        return format!("+{number}");
    }

    number
}

/// Whether a value already has the shape the formatter produces for dialable
/// numbers: a leading `+` followed only by digits.
pub fn is_normalized(value: &str) -> bool {
    value
        .strip_prefix('+')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}
