//! Quick-query parsing
//!
//! Turns one line of free text such as "5 km to mi" or "98.6 °F in celsius"
//! into a `ConversionRequest`. The value is left raw so the engine
//! performs its own validation.

use super::registry::resolve_unit;
use super::{Category, ConversionRequest};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Empty query")]
    Empty,

    #[error("Could not understand query: {0}")]
    Unrecognized(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Cannot convert {from} ({from_category}) to {to} ({to_category})")]
    CategoryMismatch {
        from: String,
        from_category: Category,
        to: String,
        to_category: Category,
    },
}

// Compile-time constant pattern
// <value> <unit> (to|in|->|=) <unit>
static RE_QUERY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*([+-]?(?:\d[\d,]*(?:\.\d*)?|\.\d+)(?:e[+-]?\d+)?)\s*([^\d\s.,+-].*?)\s+(?:to|in|into|->|=)\s+(.+?)\s*$")
        .expect("Failed to compile query pattern")
});

/// Resolve commas in a numeric literal
///
/// One comma not followed by exactly three digits is a decimal comma
/// ("1,5"). Otherwise commas must be valid thousands grouping and are
/// dropped ("1,000,000", "1,000.5"). A lone "1,000" could be either, so it
/// is rejected like any malformed grouping.
fn normalize_number(raw: &str) -> Option<String> {
    if !raw.contains(',') {
        return Some(raw.to_string());
    }

    let (sign, unsigned) = match raw.strip_prefix(['+', '-']) {
        Some(rest) => raw.split_at(raw.len() - rest.len()),
        None => ("", raw),
    };
    let exponent_at = unsigned.find(['e', 'E']).unwrap_or(unsigned.len());
    let (mantissa, exponent) = unsigned.split_at(exponent_at);
    let (integer, fraction) = match mantissa.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (mantissa, None),
    };

    let groups: Vec<&str> = integer.split(',').collect();
    if groups.iter().any(|group| group.is_empty()) {
        return None;
    }

    if let (None, [whole, decimals]) = (fraction, groups.as_slice()) {
        if decimals.len() == 3 {
            return None;
        }
        return Some(format!("{}{}.{}{}", sign, whole, decimals, exponent));
    }

    let grouped = groups[0].len() <= 3 && groups[1..].iter().all(|group| group.len() == 3);
    if !grouped {
        return None;
    }
    let fraction = fraction.map(|f| format!(".{}", f)).unwrap_or_default();
    Some(format!("{}{}{}{}", sign, groups.concat(), fraction, exponent))
}

/// Parse a quick query into a conversion request
pub fn parse_query(text: &str) -> Result<ConversionRequest, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let caps = RE_QUERY
        .captures(text)
        .ok_or_else(|| ParseError::Unrecognized(text.to_string()))?;

    let raw_value = normalize_number(&caps[1]).ok_or_else(|| ParseError::Unrecognized(text.to_string()))?;
    let from_text = caps[2].trim();
    let to_text = caps[3].trim();

    let (from_category, from_unit) =
        resolve_unit(from_text).ok_or_else(|| ParseError::UnknownUnit(from_text.to_string()))?;
    let (to_category, to_unit) =
        resolve_unit(to_text).ok_or_else(|| ParseError::UnknownUnit(to_text.to_string()))?;

    if from_category != to_category {
        return Err(ParseError::CategoryMismatch {
            from: from_unit.to_string(),
            from_category,
            to: to_unit.to_string(),
            to_category,
        });
    }

    Ok(ConversionRequest {
        category: from_category,
        from_unit: from_unit.to_string(),
        to_unit: to_unit.to_string(),
        raw_value,
    })
}
