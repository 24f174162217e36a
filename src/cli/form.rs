//! Interactive conversion form
//!
//! Category first, then From and To restricted to that category's units,
//! then the value. Every prompt keeps the previous selection when left
//! empty; `q` or end of input leaves the form.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::render::{render_failure, render_menu, render_success, TAGLINE, TITLE};
use crate::api::commands::converter::{convert_units_command, get_categories_command};
use crate::core::features::unit_converter::Category;
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::AppSettings;
use crate::shared::types::ConvertUnitsRequest;

/// Current selections of the form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub category: Category,
    pub from_unit: String,
    pub to_unit: String,
    pub value: String,
}

impl FormState {
    pub fn from_settings(settings: &AppSettings) -> Self {
        let mut settings = settings.clone();
        settings.sanitize();
        Self {
            category: settings.category(),
            from_unit: settings.preferences.default_from_unit,
            to_unit: settings.preferences.default_to_unit,
            value: settings.preferences.default_value,
        }
    }

    /// Write the selections back as the next session's defaults
    pub fn apply_to(&self, settings: &mut AppSettings) {
        settings.preferences.default_category = self.category.to_string();
        settings.preferences.default_from_unit = self.from_unit.clone();
        settings.preferences.default_to_unit = self.to_unit.clone();
        settings.preferences.default_value = self.value.clone();
    }

    fn select_category(&mut self, category: Category) {
        if category == self.category {
            return;
        }
        let units = category.units();
        self.category = category;
        self.from_unit = units[0].to_string();
        self.to_unit = units[0].to_string();
    }

    fn request(&self) -> ConvertUnitsRequest {
        ConvertUnitsRequest {
            category: self.category.to_string(),
            from_unit: self.from_unit.clone(),
            to_unit: self.to_unit.clone(),
            value: self.value.clone(),
        }
    }
}

/// Read one trimmed line; `None` on end of input or quit
async fn read_answer<R>(reader: &mut R) -> AppResult<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .await
        .map_err(|e| AppError::Input(format!("Failed to read input: {}", e)))?;
    if read == 0 {
        return Ok(None);
    }
    let answer = line.trim();
    if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit") {
        return Ok(None);
    }
    Ok(Some(answer.to_string()))
}

async fn write_line<W>(writer: &mut W, text: &str) -> AppResult<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

/// Ask for one of `options` by number or name; `None` when the user quits
async fn choose<R, W>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
    options: &[&str],
    current: &str,
) -> AppResult<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        write_line(writer, &render_menu(options, current)).await?;
        writer.write_all(format!("{} [{}]: ", label, current).as_bytes()).await?;
        writer.flush().await?;

        let Some(answer) = read_answer(reader).await? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(Some(current.to_string()));
        }

        let by_number = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i));
        let by_name = options.iter().find(|option| option.eq_ignore_ascii_case(&answer));

        match by_number.or(by_name) {
            Some(option) => return Ok(Some(option.to_string())),
            None => write_line(writer, "⚠️ Please choose one of the listed options").await?,
        }
    }
}

/// Run one pass of the form; `false` when the user quit
async fn run_once<R, W>(reader: &mut R, writer: &mut W, state: &mut FormState) -> AppResult<bool>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let categories: Vec<String> = get_categories_command()?.into_iter().map(|c| c.id).collect();
    let category_names: Vec<&str> = categories.iter().map(String::as_str).collect();

    let Some(category) = choose(reader, writer, "Select unit category", &category_names, state.category.name()).await? else {
        return Ok(false);
    };
    // Only listed names can come back from `choose`
    if let Ok(category) = category.parse::<Category>() {
        state.select_category(category);
    }

    let units = state.category.units();
    let Some(from_unit) = choose(reader, writer, "From", &units, &state.from_unit).await? else {
        return Ok(false);
    };
    state.from_unit = from_unit;

    let Some(to_unit) = choose(reader, writer, "To", &units, &state.to_unit).await? else {
        return Ok(false);
    };
    state.to_unit = to_unit;

    writer
        .write_all(format!("🔢 Enter value to convert [{}]: ", state.value).as_bytes())
        .await?;
    writer.flush().await?;
    let Some(value) = read_answer(reader).await? else {
        return Ok(false);
    };
    if !value.is_empty() {
        state.value = value;
    }

    let message = match convert_units_command(state.request()) {
        Ok(response) => render_success(&state.value, &response),
        Err(e) => render_failure(&e),
    };
    write_line(writer, &message).await?;
    write_line(writer, "").await?;

    Ok(true)
}

/// Run the form until the user quits
pub async fn run_form<R, W>(reader: &mut R, writer: &mut W, state: &mut FormState) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_line(writer, TITLE).await?;
    write_line(writer, TAGLINE).await?;
    write_line(writer, "Press Enter to keep the current choice, q to quit.\n").await?;

    while run_once(reader, writer, state).await? {}

    log::debug!("[run_form] Leaving form with {:?}", state);
    Ok(())
}
