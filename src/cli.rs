//! Command-line front end
//!
//! Without arguments the interactive form is shown. Subcommands cover
//! listings and one-shot conversions; anything else is read as a quick
//! query such as `unit-converter 5 km to mi`.

pub mod form;
pub mod render;

use tokio::io::BufReader;

use crate::api::commands::converter::{
    convert_units_command, get_categories_command, get_units_for_category_command, parse_query_command,
};
use crate::api::commands::settings::{get_settings, save_settings};
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::AppSettings;
use crate::shared::types::ConvertUnitsRequest;
use form::{run_form, FormState};
use render::{render_categories, render_failure, render_success, render_units};

pub const EXIT_OK: i32 = 0;
pub const EXIT_CONVERSION_FAILED: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Interactive,
    Help,
    ListCategories,
    ListUnits(String),
    Convert(ConvertUnitsRequest),
    Query(String),
}

pub fn parse_args(args: &[String]) -> Result<CliCommand, String> {
    let Some(first) = args.first() else {
        return Ok(CliCommand::Interactive);
    };

    match first.as_str() {
        "--help" | "-h" | "help" => Ok(CliCommand::Help),
        "list" => match &args[1..] {
            [] => Ok(CliCommand::ListCategories),
            [category] => Ok(CliCommand::ListUnits(category.clone())),
            _ => Err("list takes at most one category".to_string()),
        },
        "convert" => match &args[1..] {
            [category, from_unit, to_unit, value] => Ok(CliCommand::Convert(ConvertUnitsRequest {
                category: category.clone(),
                from_unit: from_unit.clone(),
                to_unit: to_unit.clone(),
                value: value.clone(),
            })),
            _ => Err("convert needs <CATEGORY> <FROM> <TO> <VALUE>".to_string()),
        },
        _ => Ok(CliCommand::Query(args.join(" "))),
    }
}

pub fn usage() -> &'static str {
    "Unit Converter

USAGE:
    unit-converter                                   Interactive form
    unit-converter list [CATEGORY]                   List categories or units
    unit-converter convert CATEGORY FROM TO VALUE    Convert one value
    unit-converter VALUE UNIT to UNIT                Quick query, e.g. 5 km to mi

OPTIONS:
    -h, --help    Show this help

Set RUST_LOG=debug for diagnostic output."
}

fn print_conversion(request: ConvertUnitsRequest) -> i32 {
    let raw_value = request.value.clone();
    match convert_units_command(request) {
        Ok(response) => {
            println!("{}", render_success(&raw_value, &response));
            EXIT_OK
        }
        Err(e) => {
            println!("{}", render_failure(&e));
            EXIT_CONVERSION_FAILED
        }
    }
}

async fn load_settings() -> AppSettings {
    get_settings().await.unwrap_or_else(|e| {
        log::warn!("[cli] Failed to load settings: {}", e);
        AppSettings::default()
    })
}

async fn interactive() -> AppResult<()> {
    let mut settings = load_settings().await;
    let mut state = FormState::from_settings(&settings);

    let mut reader = BufReader::new(tokio::io::stdin());
    let mut writer = tokio::io::stdout();
    run_form(&mut reader, &mut writer, &mut state).await?;

    state.apply_to(&mut settings);
    if let Err(e) = save_settings(settings).await {
        log::warn!("[cli] Failed to save settings: {}", e);
    }
    Ok(())
}

/// Execute a parsed command and return the process exit code
pub async fn execute(command: CliCommand) -> i32 {
    log::debug!("[cli] {:?}", command);

    match command {
        CliCommand::Interactive => match interactive().await {
            Ok(()) => EXIT_OK,
            Err(e) => {
                log::error!("[cli] Interactive session failed: {}", e);
                eprintln!("{}", render_failure(&e));
                EXIT_CONVERSION_FAILED
            }
        },
        CliCommand::Help => {
            println!("{}", usage());
            EXIT_OK
        }
        CliCommand::ListCategories => match get_categories_command() {
            Ok(categories) => {
                println!("{}", render_categories(&categories));
                EXIT_OK
            }
            Err(e) => usage_error(e),
        },
        CliCommand::ListUnits(category) => match get_units_for_category_command(&category) {
            Ok(units) => {
                println!("{}", render_units(&units));
                EXIT_OK
            }
            Err(e) => usage_error(e),
        },
        CliCommand::Convert(request) => print_conversion(request),
        CliCommand::Query(text) => match parse_query_command(&text) {
            Ok(request) => print_conversion(request),
            Err(e) => {
                println!("{}", render_failure(&e));
                EXIT_CONVERSION_FAILED
            }
        },
    }
}

fn usage_error(err: AppError) -> i32 {
    eprintln!("{}\n\n{}", err, usage());
    EXIT_USAGE
}

/// Parse `args` (without the program name) and run
pub async fn run(args: Vec<String>) -> i32 {
    match parse_args(&args) {
        Ok(command) => execute(command).await,
        Err(message) => {
            eprintln!("{}\n\n{}", message, usage());
            EXIT_USAGE
        }
    }
}
