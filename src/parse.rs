//! Measurement parsing for user-entered text
//!
//! Converts loosely formatted input strings (menu selections, durations,
//! distances, paces) into exact numeric values. All functions here are pure,
//! perform no I/O, and report failures as [`ParseError`] values; retry
//! behavior belongs to the caller.

use std::collections::BTreeMap;

use crate::error::ParseError;

/// Marathon distance in meters
pub const MARATHON_METERS: f64 = 42_195.0;

/// Half marathon distance in meters
pub const HALF_MARATHON_METERS: f64 = 21_097.5;

/// Named distances accepted instead of a number plus unit. Matching is exact
/// after trimming and lowercasing, never substring.
const MARATHON_ALIASES: &[&str] = &["marathon", "mrt"];
const HALF_MARATHON_ALIASES: &[&str] = &[
    "half marathon",
    "half-marathon",
    "semi marathon",
    "semi-marathon",
    "hmt",
    "hm",
];

/// Ordered menu options keyed by contiguous 1-based IDs.
///
/// Insertion order is display order; `push` assigns the next ID, so the
/// contiguity invariant holds by construction.
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    entries: BTreeMap<u32, String>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label and return its assigned ID.
    pub fn push(&mut self, label: impl Into<String>) -> u32 {
        let id = self.entries.len() as u32 + 1;
        self.entries.insert(id, label.into());
        id
    }

    pub fn contains(&self, id: u32) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries.iter().map(|(id, label)| (*id, label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a menu selection against the available options.
///
/// The trimmed input must consist solely of decimal digits (no sign, no
/// decimal point) and match an existing option ID.
pub fn parse_option(raw: &str, options: &OptionSet) -> Result<u32, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::NotANumber {
            input: raw.to_string(),
        });
    }

    let number: u64 = trimmed.parse().map_err(|_| ParseError::NotANumber {
        input: raw.to_string(),
    })?;

    match u32::try_from(number).ok().filter(|id| options.contains(*id)) {
        Some(id) => Ok(id),
        None => Err(ParseError::NotAnOption { id: number }),
    }
}

/// Parse a duration string into total seconds.
///
/// Colon-separated fields are read right-aligned as seconds, minutes, hours:
/// `"5"` is 5 seconds, `"1:00"` is 1 minute, `"01:02:03"` is 3723 seconds.
/// With two or three fields the seconds field must be below 60, with three
/// fields the minutes field as well; the leftmost field is unbounded.
pub fn parse_duration(raw: &str) -> Result<u64, ParseError> {
    let fields: Vec<&str> = raw.split(':').collect();

    if fields.len() > 3 {
        return Err(ParseError::TooManyFields {
            count: fields.len(),
        });
    }

    // Digit-only per field; whitespace inside a field is rejected on purpose.
    if fields
        .iter()
        .any(|field| !field.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(ParseError::MalformedDuration {
            input: raw.to_string(),
        });
    }

    let mut values = Vec::with_capacity(fields.len());
    for field in &fields {
        // An empty field passes the digit check but has no integer value.
        let value: u64 = field.parse().map_err(|_| ParseError::MalformedDuration {
            input: raw.to_string(),
        })?;
        values.push(value);
    }

    let mut rev = values.iter().rev();
    let seconds = rev.next().copied().unwrap_or(0);
    let minutes = rev.next().copied().unwrap_or(0);
    let hours = rev.next().copied().unwrap_or(0);

    match values.len() {
        3 => {
            if minutes >= 60 {
                return Err(ParseError::FieldOutOfRange {
                    field: "Minutes",
                    value: minutes,
                });
            }
            if seconds >= 60 {
                return Err(ParseError::FieldOutOfRange {
                    field: "Seconds",
                    value: seconds,
                });
            }
        }
        2 => {
            if seconds >= 60 {
                return Err(ParseError::FieldOutOfRange {
                    field: "Seconds",
                    value: seconds,
                });
            }
        }
        _ => {}
    }

    Ok(hours
        .saturating_mul(3600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(seconds))
}

/// Parse a distance string into meters.
///
/// Accepts a magnitude with a `km`, `k`, or `m` suffix (`"5km"`, `"2.5k"`,
/// `"500m"`) or one of the named race distances (`"marathon"`,
/// `"half marathon"`, ...).
pub fn parse_distance(raw: &str) -> Result<f64, ParseError> {
    let normalized = raw.trim().to_lowercase();

    if MARATHON_ALIASES.contains(&normalized.as_str()) {
        return Ok(MARATHON_METERS);
    }
    if HALF_MARATHON_ALIASES.contains(&normalized.as_str()) {
        return Ok(HALF_MARATHON_METERS);
    }

    // Suffix checks are ordered: 'km' before the bare 'k' and 'm' shorthands.
    let (number, in_km) = if let Some(stripped) = normalized.strip_suffix("km") {
        (stripped.trim(), true)
    } else if let Some(stripped) = normalized.strip_suffix('k') {
        (stripped.trim(), true)
    } else if let Some(stripped) = normalized.strip_suffix('m') {
        (stripped.trim(), false)
    } else {
        return Err(ParseError::MissingDistanceUnit { input: normalized });
    };

    if number.is_empty() {
        return Err(ParseError::DistanceWithoutNumber { input: normalized });
    }

    if !is_decimal_literal(number) {
        return Err(ParseError::InvalidDistanceNumber {
            numeric: number.to_string(),
            input: normalized,
        });
    }

    let magnitude: f64 = number.parse().map_err(|_| ParseError::InvalidDistanceNumber {
        numeric: number.to_string(),
        input: normalized.clone(),
    })?;

    if magnitude < 0.0 {
        return Err(ParseError::NegativeDistance { value: magnitude });
    }

    if in_km {
        Ok(magnitude * 1000.0)
    } else {
        Ok(magnitude)
    }
}

/// Parse a pace string into seconds per meter.
///
/// A pace is a duration-like magnitude, an optional time unit (`min` or
/// `sec`), and a mandatory distance qualifier (`/km` or `/m`):
/// `"5 min/km"`, `"4:15 min/km"`, `"300 sec/km"`, and `"5:00/km"` all parse
/// to 0.3 or 0.255 seconds per meter.
pub fn parse_pace(raw: &str) -> Result<f64, ParseError> {
    let normalized = raw.trim().to_lowercase();

    let (time_expr, meters_per_unit) = if let Some(stripped) = normalized.strip_suffix("/km") {
        (stripped.trim(), 1000.0)
    } else if let Some(stripped) = normalized.strip_suffix("/m") {
        (stripped.trim(), 1.0)
    } else {
        return Err(ParseError::MissingPaceUnit { input: normalized });
    };

    // A bare number with a 'min' unit means whole minutes; once a colon is
    // present the magnitude is already minutes:seconds.
    let (number_text, multiplier) = if let Some(stripped) = time_expr.strip_suffix("min") {
        let text = stripped.trim();
        let multiplier = if text.contains(':') { 1.0 } else { 60.0 };
        (text, multiplier)
    } else if let Some(stripped) = time_expr.strip_suffix("sec") {
        (stripped.trim(), 1.0)
    } else {
        (time_expr, 1.0)
    };

    let base_seconds =
        parse_duration(number_text).map_err(|source| ParseError::MalformedPace {
            input: normalized.clone(),
            source: Box::new(source),
        })?;

    Ok(multiplier * base_seconds as f64 / meters_per_unit)
}

/// Signed decimal check: optional leading sign, digits with at most one
/// decimal point, at least one digit. Keeps `f64::from_str` extras like
/// `inf`, `nan`, and exponents out.
fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned.is_empty() {
        return false;
    }

    let mut seen_point = false;
    let mut seen_digit = false;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}
