//! Temperature conversion
//!
//! Temperature scales have non-zero offsets, so they cannot share the
//! factor model. Every ordered pair of scales has its own formula.

/// Supported temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    /// Display order for selectable unit lists
    pub const ALL: [TemperatureScale; 3] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "Celsius",
            TemperatureScale::Fahrenheit => "Fahrenheit",
            TemperatureScale::Kelvin => "Kelvin",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "°C",
            TemperatureScale::Fahrenheit => "°F",
            TemperatureScale::Kelvin => "K",
        }
    }

    /// Spellings accepted by the quick-query parser
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            TemperatureScale::Celsius => &["celsius", "c", "C", "°c", "°C", "degc"],
            TemperatureScale::Fahrenheit => &["fahrenheit", "f", "F", "°f", "°F", "degf"],
            TemperatureScale::Kelvin => &["kelvin", "kelvins", "k", "K"],
        }
    }

    /// Exact-name lookup, as offered in the selectable unit list
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scale| scale.name() == name)
    }
}

/// Convert a temperature between two scales
pub fn convert_temperature(value: f64, from: TemperatureScale, to: TemperatureScale) -> f64 {
    use TemperatureScale::*;

    match (from, to) {
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
        (Celsius, Fahrenheit) => (value * 9.0 / 5.0) + 32.0,
        (Celsius, Kelvin) => value + 273.15,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + 273.15,
        (Kelvin, Celsius) => value - 273.15,
        (Kelvin, Fahrenheit) => (value - 273.15) * 9.0 / 5.0 + 32.0,
    }
}
