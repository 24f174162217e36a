//! Unit registry
//!
//! One ordered table per category. The selectable unit lists and the
//! factor lookups are both derived from these tables, so the two cannot drift.

use super::temperature::TemperatureScale;
use super::Category;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Linear unit with a scale factor relative to its category's reference quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDefinition {
    pub name: &'static str,
    pub symbol: &'static str,
    /// Extra spellings accepted by the quick-query parser (lowercase)
    pub aliases: &'static [&'static str],
    /// How many of this unit equal one reference quantity
    pub factor: f64,
}

const fn unit(
    name: &'static str,
    symbol: &'static str,
    aliases: &'static [&'static str],
    factor: f64,
) -> UnitDefinition {
    UnitDefinition { name, symbol, aliases, factor }
}

// Length (reference: 1 meter)
pub const LENGTH_UNITS: &[UnitDefinition] = &[
    unit("Meter", "m", &["meters", "metre", "metres"], 1.0),
    unit("Kilometer", "km", &["kilometers", "kilometre", "kilometres"], 0.001),
    unit("Centimeter", "cm", &["centimeters", "centimetre", "centimetres"], 100.0),
    unit("Millimeter", "mm", &["millimeters", "millimetre", "millimetres"], 1000.0),
    unit("Inch", "in", &["inches", "\""], 39.3701),
    unit("Foot", "ft", &["feet", "'"], 3.28084),
    unit("Yard", "yd", &["yards"], 1.09361),
    unit("Mile", "mi", &["miles"], 0.000621371),
];

// Weight (reference: 1 kilogram)
pub const WEIGHT_UNITS: &[UnitDefinition] = &[
    unit("Kilogram", "kg", &["kilograms", "kilo", "kilos"], 1.0),
    unit("Gram", "g", &["grams"], 1000.0),
    unit("Pound", "lb", &["pounds", "lbs"], 2.20462),
    unit("Ounce", "oz", &["ounces"], 35.274),
    unit("Ton", "t", &["tons", "tonne", "tonnes"], 0.001),
];

// Volume (reference: 1 liter)
pub const VOLUME_UNITS: &[UnitDefinition] = &[
    unit("Liter", "L", &["liters", "litre", "litres", "l"], 1.0),
    unit("Milliliter", "ml", &["milliliters", "millilitre", "millilitres"], 1000.0),
    unit("Cubic Meter", "m3", &["cubic meters", "cubic metre", "cubic metres", "m³"], 0.001),
    unit("Gallon", "gal", &["gallons"], 0.264172),
];

// Force (reference: 1 newton)
pub const FORCE_UNITS: &[UnitDefinition] = &[
    unit("Newton", "N", &["newtons"], 1.0),
    unit("Dyne", "dyn", &["dynes"], 100000.0),
    unit("Pound-Force", "lbf", &["pound force", "pounds-force", "pounds force"], 0.224809),
];

// Energy (reference: 1 joule)
pub const ENERGY_UNITS: &[UnitDefinition] = &[
    unit("Joule", "J", &["joules"], 1.0),
    unit("Kilojoule", "kJ", &["kilojoules"], 0.001),
    unit("Calorie", "cal", &["calories"], 0.239006),
    unit("Kilocalorie", "kcal", &["kilocalories"], 0.000239006),
    unit("Watt-hour", "Wh", &["watt-hours", "watt hour", "watt hours"], 0.000277778),
];

/// Look up a linear unit by its exact name within a factor table
pub fn find_unit(table: &'static [UnitDefinition], name: &str) -> Option<&'static UnitDefinition> {
    table.iter().find(|def| def.name == name)
}

/// Case-insensitive index of every accepted spelling to (category, canonical name)
///
/// Symbols are also stored verbatim so that case-sensitive ones such as
/// "kJ" and "Wh" resolve before the lowercase fallback.
static UNIT_INDEX: Lazy<HashMap<String, (Category, &'static str)>> = Lazy::new(|| {
    let mut index = HashMap::new();

    for category in Category::all() {
        if let Some(table) = category.factor_table() {
            for def in table {
                index.insert(def.name.to_lowercase(), (category, def.name));
                index.insert(format!("{}s", def.name.to_lowercase()), (category, def.name));
                index.insert(def.symbol.to_string(), (category, def.name));
                index.entry(def.symbol.to_lowercase()).or_insert((category, def.name));
                for alias in def.aliases {
                    index.insert(alias.to_string(), (category, def.name));
                }
            }
        } else {
            for scale in TemperatureScale::ALL {
                for alias in scale.aliases() {
                    index.insert(alias.to_string(), (category, scale.name()));
                }
            }
        }
    }

    index
});

/// Resolve a free-text unit spelling to its category and canonical name
pub fn resolve_unit(text: &str) -> Option<(Category, &'static str)> {
    let trimmed = text.trim();
    UNIT_INDEX
        .get(trimmed)
        .or_else(|| UNIT_INDEX.get(&trimmed.to_lowercase()))
        .copied()
}
