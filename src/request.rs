//! Builds the outbound forecast request URL. The browser navigates to the
//! built URL itself; nothing here performs HTTP.

use url::form_urlencoded;

use crate::config::Config;
use crate::form::fields::FieldSet;
use crate::form::ForecastForm;

/// Path on the external API that runs a forecast.
pub const FORECAST_PATH: &str = "/forecast";

/// Encode the form's fields as an application/x-www-form-urlencoded query
/// string, in field-set order. Every field in the set appears exactly once;
/// zero and empty values encode like any other.
pub fn query_string(form: &ForecastForm, fields: &FieldSet) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for id in fields.iter() {
        query.append_pair(id.wire_key(), &form.field_value(id));
    }
    query.finish()
}

/// The forecast URL for the standard tool: every catalog field, declaration
/// order. Deterministic; identical inputs yield byte-identical strings.
pub fn forecast_url(config: &Config, form: &ForecastForm) -> String {
    forecast_url_for(config, form, &FieldSet::full())
}

/// The forecast URL for a specific tool variant's field set.
pub fn forecast_url_for(config: &Config, form: &ForecastForm, fields: &FieldSet) -> String {
    format!(
        "{}{FORECAST_PATH}?{}",
        config.api_url,
        query_string(form, fields)
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::form::fields::FieldId;
    use chrono::NaiveDate;

    fn test_config() -> Config {
        Config::from_values(Some("https://eapi.example.org".to_string()), None).unwrap()
    }

    fn test_form() -> ForecastForm {
        ForecastForm::default_for(NaiveDate::from_ymd_opt(2023, 4, 18).unwrap())
    }

    #[test]
    fn builder_is_idempotent() {
        let config = test_config();
        let form = test_form();
        assert_eq!(forecast_url(&config, &form), forecast_url(&config, &form));
    }

    #[test]
    fn every_key_appears_exactly_once_in_declaration_order() {
        let query = query_string(&test_form(), &FieldSet::full());
        let pairs: Vec<&str> = query.split('&').collect();
        assert_eq!(pairs.len(), FieldId::ALL.len());
        for (pair, id) in pairs.iter().zip(FieldId::ALL) {
            let key = pair.split('=').next().unwrap();
            assert_eq!(key, id.wire_key());
        }
    }

    #[test]
    fn zero_and_default_values_are_still_encoded() {
        let query = query_string(&test_form(), &FieldSet::full());
        assert!(query.contains("manual_weight_2=0"));
        assert!(query.contains("correlation=0"));
        assert!(query.contains("detrend_data=0"));
    }

    #[test]
    fn full_url_matches_the_expected_shape() {
        let url = forecast_url(&test_config(), &test_form());
        assert!(url.starts_with(
            "https://eapi.example.org/forecast?analog_bbox_n=20&analog_bbox_w=110&analog_bbox_e=140&analog_bbox_s=10&forecast_bbox_n=72"
        ));
        assert!(url.contains("analog_daterange_start=2023-01-01"));
        assert!(url.contains("forecast_daterange_end=2023-06-01"));
        assert!(url.ends_with("pressure_temp=850"));
    }

    #[test]
    fn variant_subsets_keep_their_own_order() {
        let fields = FieldSet::from_ids([
            FieldId::ForecastTheme,
            FieldId::AnalogDaterangeStart,
            FieldId::NumAnalogs,
        ]);
        let query = query_string(&test_form(), &fields);
        assert_eq!(
            query,
            "forecast_theme=3&analog_daterange_start=2023-01-01&num_analogs=5"
        );
    }

    #[test]
    fn base_url_trailing_slash_does_not_double_up() {
        let config =
            Config::from_values(Some("https://eapi.example.org/".to_string()), None).unwrap();
        let url = forecast_url(&config, &test_form());
        assert!(url.starts_with("https://eapi.example.org/forecast?"));
        assert!(!url.contains("//forecast"));
    }
}
