use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use ts_rs::TS;

use crate::error::AppError;
use crate::form::fields::{catalog_for, FieldInfo};
use crate::form::validation::{validate_date_ranges, ValidationReport, ValidationResult};
use crate::form::{form_schema, visible_sections, ForecastForm, SectionVisibility};
use crate::model::{
    earliest_analog_month, latest_available_month, parse_month, MatchMode, MonthRange, WeightMode,
};
use crate::request;
use crate::state::AppState;

// ── Response types ───────────────────────────────────────────────

#[derive(Serialize)]
struct ApiOk<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Serialize)]
struct ApiErr {
    ok: bool,
    error: String,
}

fn ok_json<T: Serialize>(data: T) -> impl IntoResponse {
    Json(ApiOk { ok: true, data })
}

fn err_json(status: StatusCode, msg: String) -> impl IntoResponse {
    (status, Json(ApiErr { ok: false, error: msg }))
}

// ── Request / response payloads ──────────────────────────────────

/// Raw date strings from the four pickers, exactly as the browser holds them.
/// Parsing happens here so the validator itself never sees malformed input.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidateDatesParams {
    pub analog_start: String,
    pub analog_end: String,
    pub forecast_start: String,
    pub forecast_end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisibilityParams {
    #[ts(type = "number")]
    pub auto_weight: WeightMode,
    #[ts(type = "number")]
    pub manual_match: MatchMode,
}

/// Full typed response from validation. `result` is the discriminated union
/// the frontend can narrow; `report` is the same outcome flattened into the
/// message slots the page renders.
///
/// Exported via ts-rs so the frontend imports the generated type instead of
/// mirroring it by hand.
#[derive(Serialize, TS)]
#[ts(export)]
pub struct ValidateResponse {
    pub result: ValidationResult,
    pub report: ValidationReport,
}

#[derive(Serialize, TS)]
#[ts(export)]
pub struct FieldsResponse {
    pub fields: Vec<FieldInfo>,
    #[ts(type = "unknown")]
    pub schema: Value,
}

/// Default form state plus the clock facts the pickers are bounded by:
/// analog searches reach back to the start of the source data and forward
/// to the most recent published month.
#[derive(Serialize, TS)]
#[ts(export)]
pub struct DefaultsResponse {
    pub form: ForecastForm,
    pub visibility: SectionVisibility,
    pub earliest_analog: NaiveDate,
    pub latest_available: NaiveDate,
}

#[derive(Serialize, TS)]
#[ts(export)]
pub struct UrlResponse {
    pub url: String,
}

fn parse_ranges(params: &ValidateDatesParams) -> Result<(MonthRange, MonthRange), AppError> {
    let analog = MonthRange::new(
        parse_month("analog_start", &params.analog_start)?,
        parse_month("analog_end", &params.analog_end)?,
    );
    let forecast = MonthRange::new(
        parse_month("forecast_start", &params.forecast_start)?,
        parse_month("forecast_end", &params.forecast_end)?,
    );
    Ok((analog, forecast))
}

fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

// ── Handlers ─────────────────────────────────────────────────────

async fn get_health() -> impl IntoResponse {
    ok_json("ok")
}

async fn get_fields(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    ok_json(FieldsResponse {
        fields: catalog_for(&state.fields),
        schema: form_schema(),
    })
}

async fn get_defaults() -> impl IntoResponse {
    let today = today();
    let form = ForecastForm::default_for(today);
    let visibility = form.visibility();
    ok_json(DefaultsResponse {
        form,
        visibility,
        earliest_analog: earliest_analog_month(),
        latest_available: latest_available_month(today),
    })
}

async fn post_validate(Json(params): Json<ValidateDatesParams>) -> impl IntoResponse {
    match parse_ranges(&params) {
        Ok((analog, forecast)) => {
            let result = validate_date_ranges(analog, forecast, latest_available_month(today()));
            let report = result.report();
            ok_json(ValidateResponse { result, report }).into_response()
        }
        Err(e) => err_json(StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    }
}

async fn post_forecast_url(
    Extension(state): Extension<Arc<AppState>>,
    Json(form): Json<ForecastForm>,
) -> impl IntoResponse {
    let url = request::forecast_url_for(&state.config, &form, &state.fields);
    ok_json(UrlResponse { url })
}

async fn post_visibility(Json(params): Json<VisibilityParams>) -> impl IntoResponse {
    ok_json(visible_sections(params.auto_weight, params.manual_match))
}

// ── Router / server startup ──────────────────────────────────────

/// Build the application router. When a path prefix is configured the whole
/// API is nested under it, mirroring how the tool is mounted behind a
/// reverse proxy.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::permissive();

    let api = Router::new()
        .route("/health", get(get_health))
        .route("/api/fields", get(get_fields))
        .route("/api/defaults", get(get_defaults))
        .route("/api/validate", post(post_validate))
        .route("/api/forecast-url", post(post_forecast_url))
        .route("/api/visibility", post(post_visibility))
        .layer(cors)
        .layer(Extension(state.clone()));

    match state.config.path_prefix.as_deref() {
        Some(prefix) => Router::new().nest(prefix, api),
        None => api,
    }
}

/// Bind and serve until the process is killed.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> Result<(), AppError> {
    let prefix = state.config.path_prefix.clone().unwrap_or_default();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    eprintln!("[AnalogForecast] listening on http://{local}{prefix}");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn params(
        analog_start: &str,
        analog_end: &str,
        forecast_start: &str,
        forecast_end: &str,
    ) -> ValidateDatesParams {
        ValidateDatesParams {
            analog_start: analog_start.to_string(),
            analog_end: analog_end.to_string(),
            forecast_start: forecast_start.to_string(),
            forecast_end: forecast_end.to_string(),
        }
    }

    #[test]
    fn parse_ranges_normalizes_valid_dates_to_month_starts() {
        let (analog, forecast) =
            parse_ranges(&params("2022-01-15", "2022-12-31", "2023-04-02", "2023-06-20")).unwrap();
        assert_eq!(analog.start(), ymd(2022, 1, 1));
        assert_eq!(analog.end(), ymd(2022, 12, 1));
        assert_eq!(forecast.start(), ymd(2023, 4, 1));
        assert_eq!(forecast.end(), ymd(2023, 6, 1));
    }

    #[test]
    fn parse_ranges_rejects_the_first_malformed_date() {
        let err = parse_ranges(&params("04/02/2023", "2023-06-01", "2023-04-01", "2023-06-01"))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::DateParse { ref field, ref value } if field == "analog_start" && value == "04/02/2023"
        ));
    }

    #[test]
    fn parse_ranges_names_forecast_fields_too() {
        let err = parse_ranges(&params("2023-01-01", "2023-03-01", "2023-04-01", "junk"))
            .unwrap_err();
        assert!(matches!(err, AppError::DateParse { ref field, .. } if field == "forecast_end"));
    }

    #[tokio::test]
    async fn malformed_dates_validate_as_bad_request() {
        let response = post_validate(Json(params("not-a-date", "2023-06-01", "2023-04-01", "2023-06-01")))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
