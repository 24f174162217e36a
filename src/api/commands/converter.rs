//! Unit converter command module
//!
//! Thin layer between front ends and the conversion engine. Accepts and
//! returns the serializable DTOs from `shared::types`.

use crate::core::features::unit_converter::parsing::parse_query;
use crate::core::features::unit_converter::registry::find_unit;
use crate::core::features::unit_converter::temperature::TemperatureScale;
use crate::core::features::unit_converter::{self as engine, Category, ConversionRule};
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{CategoryDTO, ConvertUnitsRequest, ConvertUnitsResponse, GetUnitsResponse, UnitDTO};

fn parse_category(category: &str) -> AppResult<Category> {
    category.parse::<Category>().map_err(AppError::Validation)
}

fn unit_symbol(category: Category, unit: &str) -> &'static str {
    let symbol = match category.rule() {
        ConversionRule::FactorTable(table) => find_unit(table, unit).map(|def| def.symbol),
        ConversionRule::Temperature => TemperatureScale::from_name(unit).map(|scale| scale.symbol()),
    };
    symbol.unwrap_or("")
}

/// Convert a value between two units of the same category
pub fn convert_units_command(request: ConvertUnitsRequest) -> AppResult<ConvertUnitsResponse> {
    let category = parse_category(&request.category)?;

    let result = engine::convert(category, &request.from_unit, &request.to_unit, &request.value)
        .map_err(|e| {
            log::debug!("[convert_units_command] ✗ {:?}: {}", request, e);
            AppError::from(e)
        })?;

    log::debug!(
        "[convert_units_command] {} {} → {} {} ({})",
        request.value.trim(), request.from_unit, result, request.to_unit, category
    );

    Ok(ConvertUnitsResponse {
        result,
        formatted_result: engine::format_result(result),
        category: category.to_string(),
        from_unit: request.from_unit,
        to_unit: request.to_unit,
    })
}

/// List all categories in display order
pub fn get_categories_command() -> AppResult<Vec<CategoryDTO>> {
    Ok(Category::all()
        .into_iter()
        .map(|category| CategoryDTO {
            id: category.to_string(),
            unit_count: category.units().len(),
        })
        .collect())
}

/// List the selectable units of one category in display order
pub fn get_units_for_category_command(category: &str) -> AppResult<GetUnitsResponse> {
    let category = parse_category(category)?;

    let units = category
        .units()
        .into_iter()
        .map(|name| UnitDTO {
            id: name.to_string(),
            symbol: unit_symbol(category, name).to_string(),
        })
        .collect();

    Ok(GetUnitsResponse {
        category: category.to_string(),
        units,
    })
}

/// Turn a one-line query such as "5 km to mi" into a conversion request
pub fn parse_query_command(text: &str) -> AppResult<ConvertUnitsRequest> {
    let request = parse_query(text).map_err(|e| {
        log::debug!("[parse_query_command] ✗ '{}': {}", text, e);
        AppError::from(e)
    })?;

    Ok(ConvertUnitsRequest {
        category: request.category.to_string(),
        from_unit: request.from_unit,
        to_unit: request.to_unit,
        value: request.raw_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(category: &str, from: &str, to: &str, value: &str) -> ConvertUnitsRequest {
        ConvertUnitsRequest {
            category: category.to_string(),
            from_unit: from.to_string(),
            to_unit: to.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_convert_units_command() {
        let response = convert_units_command(request("Length", "Meter", "Centimeter", "1")).unwrap();
        assert_eq!(response.result, 100.0);
        assert_eq!(response.formatted_result, "100.00");
        assert_eq!(response.category, "Length");
        assert_eq!(response.from_unit, "Meter");
        assert_eq!(response.to_unit, "Centimeter");
    }

    #[test]
    fn test_category_name_is_case_insensitive() {
        let response = convert_units_command(request("temperature", "Celsius", "Fahrenheit", "100")).unwrap();
        assert_eq!(response.formatted_result, "212.00");
        assert_eq!(response.category, "Temperature");
    }

    #[test]
    fn test_invalid_value_is_conversion_error() {
        let err = convert_units_command(request("Length", "Meter", "Kilometer", "abc")).unwrap_err();
        assert!(matches!(err, AppError::Conversion(_)));
    }

    #[test]
    fn test_unknown_category_is_validation_error() {
        let err = convert_units_command(request("Speed", "km/h", "mph", "1")).unwrap_err();
        assert_eq!(err, AppError::Validation("Unknown category: Speed".to_string()));
    }

    #[test]
    fn test_get_categories_command() {
        let categories = get_categories_command().unwrap();
        let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["Length", "Weight", "Temperature", "Volume", "Force", "Energy"]);
        assert_eq!(categories[0].unit_count, 8);
        assert_eq!(categories[2].unit_count, 3);
    }

    #[test]
    fn test_get_units_for_category_command() {
        let response = get_units_for_category_command("length").unwrap();
        let ids: Vec<&str> = response.units.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(
            ids,
            ["Meter", "Kilometer", "Centimeter", "Millimeter", "Inch", "Foot", "Yard", "Mile"]
        );
        assert_eq!(response.units[5].symbol, "ft");

        let response = get_units_for_category_command("Temperature").unwrap();
        assert_eq!(response.units[0].symbol, "°C");
    }

    #[test]
    fn test_every_listed_unit_converts() {
        for category in get_categories_command().unwrap() {
            let units = get_units_for_category_command(&category.id).unwrap().units;
            for from in &units {
                for to in &units {
                    assert!(
                        convert_units_command(request(&category.id, &from.id, &to.id, "2")).is_ok(),
                        "{} {} -> {}",
                        category.id,
                        from.id,
                        to.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_parse_query_command() {
        let parsed = parse_query_command("3 kcal to kJ").unwrap();
        assert_eq!(parsed, request("Energy", "Kilocalorie", "Kilojoule", "3"));

        let err = parse_query_command("3 kcal to m").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
