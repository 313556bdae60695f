//! Serde helper for timeouts written as "250ms", "5s", "2m" or "1h".

use serde::{self, Deserialize, Deserializer};
use std::time::Duration;

/// Seconds per unit suffix; a bare number is seconds.
const UNITS: &[(&str, f64)] = &[("ms", 1e-3), ("s", 1.0), ("", 1.0), ("m", 60.0), ("h", 3600.0)];

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) => parse_duration(&s).map_err(serde::de::Error::custom),
        None => Ok(Duration::ZERO),
    }
}

pub(crate) fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Duration::ZERO);
    }

    let split = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());
    let (amount, suffix) = s.split_at(split);

    let amount: f64 = amount
        .parse()
        .map_err(|_| format!("invalid duration number: {}", amount))?;

    let suffix = suffix.trim();
    let scale = UNITS
        .iter()
        .find(|(unit, _)| *unit == suffix)
        .map(|(_, scale)| *scale)
        .ok_or_else(|| format!("unknown duration unit: {}", suffix))?;

    Duration::try_from_secs_f64(amount * scale)
        .map_err(|e| format!("invalid duration {s:?}: {e}"))
}
