// core/src/duration.rs
//! Kompakt varighetsnotasjon: `"1h30m"`, `"45m00s"`, `"1.5h"`, `"-5m"`.
//!
//! En valgfri fortegnstegn, deretter én eller flere `<tall><enhet>`-par.
//! Enheter: `ns`, `us`/`µs`/`μs`, `ms`, `s`, `m`, `h`. Alene er `"0"` lov.
use chrono::TimeDelta;
use thiserror::Error;

const NANOS_PER_SECOND: f64 = 1e9;
const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

// Største magnitude vi godtar (|i64::MIN| i nanosekunder).
const MAX_MAGNITUDE: u64 = 1 << 63;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(3_600 * 1_000_000_000),
        _ => None,
    }
}

/// Leser ledende sifre. `None` ved overflow.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut x: u64 = 0;
    for b in s[..end].bytes() {
        x = x.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
        if x > MAX_MAGNITUDE {
            return None;
        }
    }
    Some((x, &s[end..]))
}

/// Leser brøkdelen etter punktum. Sifre utover u64-presisjon ignoreres.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut x: u64 = 0;
    let mut scale = 1.0;
    let mut overflow = false;
    for b in s[..end].bytes() {
        if overflow {
            continue;
        }
        match x.checked_mul(10).and_then(|y| y.checked_add(u64::from(b - b'0'))) {
            Some(y) if y <= MAX_MAGNITUDE => {
                x = y;
                scale *= 10.0;
            }
            _ => overflow = true,
        }
    }
    (x, scale, &s[end..])
}

pub fn parse_duration(input: &str) -> Result<TimeDelta, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());

    let mut s = input;
    let mut neg = false;
    if let Some(rest) = s.strip_prefix('-') {
        neg = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(TimeDelta::zero());
    }
    if s.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        if !s.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(invalid());
        }

        let before = s.len();
        let (whole, rest) = leading_int(s).ok_or_else(invalid)?;
        let pre = rest.len() != before;
        s = rest;

        let mut frac = 0u64;
        let mut scale = 1.0;
        let mut post = false;
        if let Some(rest) = s.strip_prefix('.') {
            let before = rest.len();
            let (f, sc, rest) = leading_fraction(rest);
            frac = f;
            scale = sc;
            post = rest.len() != before;
            s = rest;
        }
        if !pre && !post {
            // "." eller ".s" uten sifre
            return Err(invalid());
        }

        let unit_end = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_end == 0 {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let unit_str = &s[..unit_end];
        let unit = unit_nanos(unit_str).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit_str.to_string(),
            input: input.to_string(),
        })?;
        s = &s[unit_end..];

        if whole > MAX_MAGNITUDE / unit {
            return Err(invalid());
        }
        let mut v = whole * unit;
        if frac > 0 {
            v = v
                .checked_add((frac as f64 * (unit as f64 / scale)) as u64)
                .filter(|v| *v <= MAX_MAGNITUDE)
                .ok_or_else(invalid)?;
        }
        total = total
            .checked_add(v)
            .filter(|t| *t <= MAX_MAGNITUDE)
            .ok_or_else(invalid)?;
    }

    let signed = if neg { -(total as i128) } else { total as i128 };
    let nanos = i64::try_from(signed).map_err(|_| invalid())?;
    Ok(TimeDelta::nanoseconds(nanos))
}

#[inline]
fn seconds(d: TimeDelta) -> f64 {
    d.num_seconds() as f64 + f64::from(d.subsec_nanos()) / NANOS_PER_SECOND
}

/// Varighet i timer (desimal).
#[inline]
pub fn hours(d: TimeDelta) -> f64 {
    seconds(d) / SECONDS_PER_HOUR
}

/// Varighet i minutter (desimal).
#[inline]
pub fn minutes(d: TimeDelta) -> f64 {
    seconds(d) / SECONDS_PER_MINUTE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_stops_at_unit() {
        assert_eq!(leading_int("45m00s"), Some((45, "m00s")));
        assert_eq!(leading_int("m"), Some((0, "m")));
    }

    #[test]
    fn leading_int_rejects_overflow() {
        assert_eq!(leading_int("99999999999999999999h"), None);
    }

    #[test]
    fn leading_fraction_keeps_scale() {
        let (f, scale, rest) = leading_fraction("25h");
        assert_eq!(f, 25);
        assert_eq!(scale, 100.0);
        assert_eq!(rest, "h");
    }
}
