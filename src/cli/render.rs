//! Text shown to the user

use crate::shared::error::AppError;
use crate::shared::types::{CategoryDTO, ConvertUnitsResponse, GetUnitsResponse};

pub const TITLE: &str = "🔄 Unit Converter";
pub const TAGLINE: &str = "🔥 Convert units instantly & effortlessly! 🚀";

/// Success line, echoing the value as the user typed it
pub fn render_success(raw_value: &str, response: &ConvertUnitsResponse) -> String {
    format!(
        "✅ {} {} = {} {}",
        raw_value.trim(),
        response.from_unit,
        response.formatted_result,
        response.to_unit
    )
}

/// Failure line; never includes the underlying error details
pub fn render_failure(err: &AppError) -> String {
    format!("⚠️ {}", err.user_message())
}

pub fn render_categories(categories: &[CategoryDTO]) -> String {
    categories
        .iter()
        .map(|category| format!("{} ({} units)", category.id, category.unit_count))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_units(response: &GetUnitsResponse) -> String {
    let mut lines = vec![format!("{}:", response.category)];
    lines.extend(
        response
            .units
            .iter()
            .map(|unit| format!("  {:<12} {}", unit.id, unit.symbol)),
    );
    lines.join("\n")
}

/// Numbered menu of options, marking the current selection
pub fn render_menu(options: &[&str], current: &str) -> String {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = if *option == current { "*" } else { " " };
            format!(" {}{}) {}", marker, i + 1, option)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
