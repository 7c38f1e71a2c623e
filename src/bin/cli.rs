// CLI binary; unrecoverable errors print a message and exit.

use std::path::{Path, PathBuf};
use std::process;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use analog_forecast::config::{Config, API_URL_VAR, PATH_PREFIX_VAR};
use analog_forecast::error::AppError;
use analog_forecast::form::fields::{field_catalog, FieldId};
use analog_forecast::form::validation::validate_date_ranges;
use analog_forecast::form::ForecastForm;
use analog_forecast::model::{latest_available_month, parse_month, MonthRange};
use analog_forecast::request;

// ── CLI argument parsing ─────────────────────────────────────────

#[derive(Parser)]
#[command(name = "analog-forecast-cli", about = "Analog forecast form tools, headless", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output raw JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a pair of date ranges the way the form would
    Validate {
        /// Analog window start (YYYY-MM-DD)
        #[arg(long)]
        analog_start: String,
        /// Analog window end (YYYY-MM-DD)
        #[arg(long)]
        analog_end: String,
        /// Forecast window start (YYYY-MM-DD)
        #[arg(long)]
        forecast_start: String,
        /// Forecast window end (YYYY-MM-DD)
        #[arg(long)]
        forecast_end: String,
        /// Last month with data (YYYY-MM-DD); defaults to the month before today
        #[arg(long)]
        max_available: Option<String>,
    },
    /// Build the forecast request URL for a form state
    Url {
        /// Form state JSON file; omitted = the default form
        #[arg(long)]
        form: Option<PathBuf>,
        /// Base URL override; otherwise read from EAPI_API_URL
        #[arg(long)]
        api_url: Option<String>,
    },
    /// List the field catalog
    Fields,
    /// Print the default form state
    Defaults,
}

// ── Subcommands ──────────────────────────────────────────────────

fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

fn parse_or_exit(field: &str, value: &str) -> NaiveDate {
    parse_month(field, value).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    })
}

fn run_validate(
    analog_start: &str,
    analog_end: &str,
    forecast_start: &str,
    forecast_end: &str,
    max_available: Option<&str>,
    raw_json: bool,
) {
    let analog = MonthRange::new(
        parse_or_exit("analog_start", analog_start),
        parse_or_exit("analog_end", analog_end),
    );
    let forecast = MonthRange::new(
        parse_or_exit("forecast_start", forecast_start),
        parse_or_exit("forecast_end", forecast_end),
    );
    let ceiling = max_available.map_or_else(
        || latest_available_month(today()),
        |value| parse_or_exit("max_available", value),
    );

    let result = validate_date_ranges(analog, forecast, ceiling);
    let report = result.report();

    if raw_json {
        let json = serde_json::json!({ "result": result, "report": report });
        println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
    } else if result.is_valid() {
        println!("Dates are valid.");
    } else {
        if let Some(msg) = &report.analog {
            println!("analog:   {msg}");
        }
        if let Some(msg) = &report.forecast {
            println!("forecast: {msg}");
        }
        if let Some(msg) = &report.general {
            println!("general:  {msg}");
        }
    }

    if result.submit_disabled() {
        process::exit(1);
    }
}

fn load_form(path: &Path) -> Result<ForecastForm, AppError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn run_url(form_path: Option<&Path>, api_url: Option<String>, raw_json: bool) {
    let config = Config::from_values(
        api_url.or_else(|| std::env::var(API_URL_VAR).ok()),
        std::env::var(PATH_PREFIX_VAR).ok(),
    )
    .unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let form = match form_path {
        Some(path) => load_form(path).unwrap_or_else(|e| {
            eprintln!("Error: {}: {e}", path.display());
            process::exit(1);
        }),
        None => ForecastForm::default_for(today()),
    };

    let url = request::forecast_url(&config, &form);
    if raw_json {
        let json = serde_json::json!({ "url": url });
        println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
    } else {
        println!("{url}");
    }
}

fn run_fields(raw_json: bool) {
    let catalog = field_catalog();
    if raw_json {
        println!("{}", serde_json::to_string_pretty(&catalog).unwrap_or_default());
        return;
    }
    for info in catalog {
        let hidden = if info.exposed { "" } else { "  (hidden)" };
        println!("{:<24} {:<28} {:?}{hidden}", info.key, info.label, info.group);
    }
}

fn defaults_payload(form: &ForecastForm) -> serde_json::Value {
    serde_json::json!({ "form": form, "visibility": form.visibility() })
}

fn run_defaults(raw_json: bool) {
    let form = ForecastForm::default_for(today());
    if raw_json {
        let json = defaults_payload(&form);
        println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        return;
    }
    for id in FieldId::ALL {
        println!("{}={}", id.wire_key(), form.field_value(id));
    }
    let visibility = form.visibility();
    println!("visibility.manual_weights={}", visibility.manual_weights);
    println!("visibility.manual_match={}", visibility.manual_match);
}

// ── Main ─────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    let raw = cli.json;

    match &cli.command {
        Commands::Validate {
            analog_start,
            analog_end,
            forecast_start,
            forecast_end,
            max_available,
        } => run_validate(
            analog_start,
            analog_end,
            forecast_start,
            forecast_end,
            max_available.as_deref(),
            raw,
        ),
        Commands::Url { form, api_url } => run_url(form.as_deref(), api_url.clone(), raw),
        Commands::Fields => run_fields(raw),
        Commands::Defaults => run_defaults(raw),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_payload_carries_the_form_and_its_visibility() {
        let today = NaiveDate::from_ymd_opt(2023, 4, 18).unwrap();
        let payload = defaults_payload(&ForecastForm::default_for(today));

        let form = payload.get("form").unwrap();
        assert!(form.get("num_analogs").is_some());

        let visibility = payload.get("visibility").unwrap();
        assert_eq!(visibility.get("manual_weights"), Some(&serde_json::Value::Bool(false)));
        assert_eq!(visibility.get("manual_match"), Some(&serde_json::Value::Bool(false)));
    }

    #[test]
    fn load_form_maps_missing_files_to_io_errors() {
        let path = std::env::temp_dir().join("analog_forecast_cli_missing.json");
        let err = load_form(&path).unwrap_err();
        assert!(matches!(err, AppError::IoError { .. }));
    }

    #[test]
    fn load_form_maps_bad_json_to_json_errors() {
        let path = std::env::temp_dir().join("analog_forecast_cli_bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_form(&path).unwrap_err();
        assert!(matches!(err, AppError::JsonError { .. }));
        std::fs::remove_file(&path).ok();
    }
}
