//! Unit conversion engine
//!
//! Pure and stateless: reads only the constant unit tables and its inputs.
//! Linear categories convert through per-unit scale factors; temperature
//! uses explicit directed formulas.

pub mod parsing;
pub mod registry;
pub mod temperature;

use registry::{UnitDefinition, ENERGY_UNITS, FORCE_UNITS, LENGTH_UNITS, VOLUME_UNITS, WEIGHT_UNITS};
use std::fmt;
use std::str::FromStr;
use temperature::{convert_temperature, TemperatureScale};
use thiserror::Error;

/// Number of decimal places shown to the user
pub const DISPLAY_PRECISION: usize = 2;

/// Measurement domains with a closed set of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
    Force,
    Energy,
}

/// How units of a category convert into each other
#[derive(Debug, Clone, Copy)]
pub enum ConversionRule {
    /// `value * (factor[to] / factor[from])`
    FactorTable(&'static [UnitDefinition]),
    /// Directed formulas between temperature scales
    Temperature,
}

/// Why a conversion could not be performed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Invalid value: '{raw}' is not a finite number")]
    InvalidValue { raw: String },

    #[error("Unsupported unit '{unit}' for category {category}")]
    UnsupportedUnit { category: Category, unit: String },
}

impl Category {
    /// All categories in display order
    pub fn all() -> [Category; 6] {
        [
            Category::Length,
            Category::Weight,
            Category::Temperature,
            Category::Volume,
            Category::Force,
            Category::Energy,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Volume => "Volume",
            Category::Force => "Force",
            Category::Energy => "Energy",
        }
    }

    pub fn rule(self) -> ConversionRule {
        match self {
            Category::Length => ConversionRule::FactorTable(LENGTH_UNITS),
            Category::Weight => ConversionRule::FactorTable(WEIGHT_UNITS),
            Category::Volume => ConversionRule::FactorTable(VOLUME_UNITS),
            Category::Force => ConversionRule::FactorTable(FORCE_UNITS),
            Category::Energy => ConversionRule::FactorTable(ENERGY_UNITS),
            Category::Temperature => ConversionRule::Temperature,
        }
    }

    /// Factor table for linear categories, `None` for temperature
    pub fn factor_table(self) -> Option<&'static [UnitDefinition]> {
        match self.rule() {
            ConversionRule::FactorTable(table) => Some(table),
            ConversionRule::Temperature => None,
        }
    }

    /// Selectable unit names in display order
    pub fn units(self) -> Vec<&'static str> {
        match self.rule() {
            ConversionRule::FactorTable(table) => table.iter().map(|def| def.name).collect(),
            ConversionRule::Temperature => TemperatureScale::ALL.iter().map(|s| s.name()).collect(),
        }
    }

    pub fn has_unit(self, unit: &str) -> bool {
        self.units().iter().any(|name| *name == unit)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::all()
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown category: {}", wanted))
    }
}

/// Parse untrusted text into a finite number
pub fn parse_value(raw_value: &str) -> Result<f64, ConversionError> {
    raw_value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ConversionError::InvalidValue {
            raw: raw_value.to_string(),
        })
}

/// Convert a raw, unparsed value from one unit to another within a category
pub fn convert(
    category: Category,
    from_unit: &str,
    to_unit: &str,
    raw_value: &str,
) -> Result<f64, ConversionError> {
    let value = parse_value(raw_value)?;
    convert_value(category, from_unit, to_unit, value)
}

/// Convert an already-parsed value from one unit to another within a category
pub fn convert_value(
    category: Category,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    let unsupported = |unit: &str| ConversionError::UnsupportedUnit {
        category,
        unit: unit.to_string(),
    };

    let result = match category.rule() {
        ConversionRule::Temperature => {
            let from = TemperatureScale::from_name(from_unit).ok_or_else(|| unsupported(from_unit))?;
            let to = TemperatureScale::from_name(to_unit).ok_or_else(|| unsupported(to_unit))?;
            convert_temperature(value, from, to)
        }
        ConversionRule::FactorTable(table) => {
            let from = registry::find_unit(table, from_unit).ok_or_else(|| unsupported(from_unit))?;
            let to = registry::find_unit(table, to_unit).ok_or_else(|| unsupported(to_unit))?;
            value * (to.factor / from.factor)
        }
    };

    // Finite input can still overflow f64
    if !result.is_finite() {
        return Err(ConversionError::InvalidValue {
            raw: format!("{:e}", value),
        });
    }
    Ok(result)
}

/// A single conversion asked for by the user, consumed once
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub category: Category,
    pub from_unit: String,
    pub to_unit: String,
    pub raw_value: String,
}

impl ConversionRequest {
    pub fn convert(&self) -> Result<f64, ConversionError> {
        convert(self.category, &self.from_unit, &self.to_unit, &self.raw_value)
    }
}

/// Format a converted value with the fixed display precision
pub fn format_result(value: f64) -> String {
    format!("{:.*}", DISPLAY_PRECISION, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_meter_to_centimeter() {
        assert_eq!(convert(Category::Length, "Meter", "Centimeter", "1").unwrap(), 100.0);
    }

    #[test]
    fn test_kilogram_to_gram() {
        assert_eq!(convert(Category::Weight, "Kilogram", "Gram", "1").unwrap(), 1000.0);
    }

    #[test]
    fn test_temperature_reference_points() {
        assert_eq!(convert(Category::Temperature, "Celsius", "Fahrenheit", "0").unwrap(), 32.0);
        assert_eq!(convert(Category::Temperature, "Celsius", "Kelvin", "0").unwrap(), 273.15);
        assert_eq!(convert(Category::Temperature, "Fahrenheit", "Celsius", "32").unwrap(), 0.0);
    }

    #[test]
    fn test_round_trip_for_every_factor_pair() {
        let x = 123.456;
        for category in Category::all() {
            let Some(table) = category.factor_table() else { continue };
            for a in table {
                for b in table {
                    let there = convert_value(category, a.name, b.name, x).unwrap();
                    let back = convert_value(category, b.name, a.name, there).unwrap();
                    assert_close(back, x);
                }
            }
        }
    }

    #[test]
    fn test_identity_for_every_unit() {
        for category in Category::all() {
            for unit in category.units() {
                assert_eq!(convert(category, unit, unit, "-42.5").unwrap(), -42.5);
            }
        }
    }

    #[test]
    fn test_temperature_round_trip() {
        for from in Category::Temperature.units() {
            for to in Category::Temperature.units() {
                let there = convert_value(Category::Temperature, from, to, 36.6).unwrap();
                let back = convert_value(Category::Temperature, to, from, there).unwrap();
                assert_close(back, 36.6);
            }
        }
    }

    #[test]
    fn test_invalid_value() {
        let err = convert(Category::Length, "Meter", "Kilometer", "abc").unwrap_err();
        assert_eq!(err, ConversionError::InvalidValue { raw: "abc".to_string() });
    }

    #[test]
    fn test_empty_and_non_finite_values_are_invalid() {
        for raw in ["", "   ", "NaN", "inf", "-infinity", "1,5", "12 m"] {
            assert!(
                matches!(
                    convert(Category::Length, "Meter", "Meter", raw),
                    Err(ConversionError::InvalidValue { .. })
                ),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_overflowing_result_is_invalid() {
        let err = convert(Category::Length, "Meter", "Millimeter", "1e308").unwrap_err();
        assert_eq!(err, ConversionError::InvalidValue { raw: "1e308".to_string() });

        let err = convert(Category::Temperature, "Celsius", "Fahrenheit", "1.7e308").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidValue { .. }));

        // Largest values that still fit are fine
        assert!(convert(Category::Length, "Millimeter", "Meter", "1e308").is_ok());
        assert!(convert(Category::Length, "Meter", "Meter", "1.7e308").is_ok());
    }

    #[test]
    fn test_value_whitespace_and_exponent_are_accepted() {
        assert_close(convert(Category::Length, "Kilometer", "Meter", " 2.5 ").unwrap(), 2500.0);
        assert_close(convert(Category::Weight, "Gram", "Kilogram", "1e3").unwrap(), 1.0);
    }

    #[test]
    fn test_foot_is_listed_and_convertible() {
        assert!(Category::Length.units().contains(&"Foot"));
        assert_eq!(convert(Category::Length, "Meter", "Foot", "1").unwrap(), 3.28084);
    }

    #[test]
    fn test_unit_from_another_category_is_unsupported() {
        let err = convert(Category::Length, "Meter", "Gram", "1").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnsupportedUnit {
                category: Category::Length,
                unit: "Gram".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_temperature_unit_is_unsupported() {
        let err = convert(Category::Temperature, "Celsius", "Rankine", "10").unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedUnit { unit, .. } if unit == "Rankine"));

        let err = convert(Category::Temperature, "Meter", "Meter", "10").unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedUnit { .. }));
    }

    #[test]
    fn test_invalid_value_reported_before_unit() {
        let err = convert(Category::Force, "Parsec", "Newton", "abc").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidValue { .. }));
    }

    #[test]
    fn test_unit_names_are_case_sensitive() {
        assert!(convert(Category::Length, "meter", "Centimeter", "1").is_err());
    }

    #[test]
    fn test_selected_factor_conversions() {
        assert_close(convert(Category::Volume, "Liter", "Cubic Meter", "1000").unwrap(), 1.0);
        assert_close(convert(Category::Force, "Newton", "Dyne", "2").unwrap(), 200000.0);
        assert_close(convert(Category::Energy, "Kilocalorie", "Calorie", "1").unwrap(), 1000.0);
        assert_close(convert(Category::Length, "Mile", "Meter", "1").unwrap(), 1.0 / 0.000621371);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("length".parse::<Category>(), Ok(Category::Length));
        assert_eq!(" ENERGY ".parse::<Category>(), Ok(Category::Energy));
        assert!("speed".parse::<Category>().is_err());
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(100.0), "100.00");
        assert_eq!(format_result(3.28084), "3.28");
        assert_eq!(format_result(2.345678), "2.35");
        assert_eq!(format_result(-1.0), "-1.00");
    }
}
