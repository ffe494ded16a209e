//! Validation with error accumulation for configuration.
//!
//! Every check here returns a stillwater `Validation` so that a single run
//! reports ALL problems with a configuration, naming the offending tab,
//! chart or key, instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use impact_dashboard::config::presets::bridges_config;
//! use impact_dashboard::config::validation::validate_config;
//!
//! let config = bridges_config();
//! assert!(validate_config(&config).is_success());
//! ```

use std::collections::HashSet;

use stillwater::{NonEmptyVec, Validation};

use super::charts::{ChartConfig, ChartKind};
use super::core::{AppConfig, ChartSection};
use crate::errors::{DashboardError, Result};

/// Validation result accumulating dashboard errors
pub type DashboardValidation<T> = Validation<T, NonEmptyVec<DashboardError>>;

/// Create a successful validation result.
pub fn validation_success<T>(value: T) -> DashboardValidation<T> {
    Validation::Success(value)
}

/// Create a failed validation result with a single error.
pub fn validation_failure<T>(error: DashboardError) -> DashboardValidation<T> {
    Validation::Failure(NonEmptyVec::new(error, Vec::new()))
}

/// Turn a list of collected errors into a validation result
pub fn from_errors(errors: Vec<DashboardError>) -> DashboardValidation<()> {
    match NonEmptyVec::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(()),
    }
}

/// Combine multiple validations, accumulating all errors.
pub fn combine_validations(validations: Vec<DashboardValidation<()>>) -> DashboardValidation<()> {
    let mut failures: Vec<DashboardError> = Vec::new();

    for v in validations {
        if let Validation::Failure(errors) = v {
            for err in errors {
                failures.push(err);
            }
        }
    }

    from_errors(failures)
}

/// Convert a validation into a fail-fast `Result` carrying every error.
pub fn run_validation<T>(validation: DashboardValidation<T>) -> Result<T> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => Err(DashboardError::Invalid(errors.into_vec())),
    }
}

/// Validate entire config, accumulating ALL errors.
pub fn validate_config(config: &AppConfig) -> DashboardValidation<()> {
    let mut validations = vec![
        validate_branding(config),
        validate_tabs(config),
        validate_clients(config),
    ];

    validations.extend(
        config
            .all_charts()
            .map(|(section, name, chart)| validate_chart(section, name, chart)),
    );

    combine_validations(validations)
}

/// Validate config with a `Result` API.
pub fn validate_config_result(config: &AppConfig) -> Result<()> {
    run_validation(validate_config(config))
}

fn validate_branding(config: &AppConfig) -> DashboardValidation<()> {
    let mut errors = Vec::new();

    if config.title.trim().is_empty() {
        errors.push(DashboardError::config("title must not be empty"));
    }
    if config.company_name.trim().is_empty() {
        errors.push(DashboardError::config("companyName must not be empty"));
    }

    from_errors(errors)
}

/// Tabs must exist, carry an id and label, and never repeat an id.
fn validate_tabs(config: &AppConfig) -> DashboardValidation<()> {
    let tabs = &config.dashboard.tabs;
    if tabs.is_empty() {
        return validation_failure(DashboardError::config(
            "dashboard.tabs must declare at least one tab",
        ));
    }

    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, tab) in tabs.iter().enumerate() {
        if tab.id.trim().is_empty() {
            errors.push(DashboardError::config(format!(
                "dashboard.tabs[{}] has an empty id",
                index
            )));
            continue;
        }
        if tab.label.trim().is_empty() {
            errors.push(DashboardError::config(format!(
                "tab '{}' has an empty label",
                tab.id
            )));
        }
        if !seen.insert(tab.id.as_str()) {
            errors.push(DashboardError::config(format!(
                "tab id '{}' is declared more than once",
                tab.id
            )));
        }
    }

    from_errors(errors)
}

fn validate_clients(config: &AppConfig) -> DashboardValidation<()> {
    let mut seen = HashSet::new();
    let errors = config
        .clients
        .iter()
        .filter(|client| !seen.insert(client.id.as_str()))
        .map(|client| {
            DashboardError::config(format!(
                "client id '{}' is declared more than once",
                client.id
            ))
        })
        .collect();

    from_errors(errors)
}

/// Validate one chart descriptor.
///
/// - `dataKeys` is non-empty and parallel to `colors`
/// - every row carries the category field
/// - every row carries a numeric value for every data key
pub fn validate_chart(section: ChartSection, name: &str, chart: &ChartConfig) -> DashboardValidation<()> {
    let qualified = format!("{}.{}", section, name);
    let mut errors = Vec::new();

    if chart.data_keys.is_empty() {
        errors.push(DashboardError::chart(&qualified, "dataKeys must not be empty"));
    }

    if chart.data_keys.len() != chart.colors.len() {
        errors.push(DashboardError::chart(
            &qualified,
            format!(
                "{} data key(s) but {} color(s)",
                chart.data_keys.len(),
                chart.colors.len()
            ),
        ));
    }

    if chart.kind != ChartKind::Pie && !chart.palette.is_empty() {
        errors.push(DashboardError::chart(
            &qualified,
            format!("palette is only used by pie charts, not {}", chart.kind),
        ));
    }

    for (row_index, row) in chart.data.iter().enumerate() {
        if !row.contains_key(&chart.category_key) {
            errors.push(DashboardError::chart(
                &qualified,
                format!("row {} is missing category '{}'", row_index, chart.category_key),
            ));
        }

        for key in &chart.data_keys {
            match row.get(key) {
                None => errors.push(DashboardError::chart(
                    &qualified,
                    format!("row {} is missing data key '{}'", row_index, key),
                )),
                Some(value) if value.as_f64().is_none() => errors.push(DashboardError::chart(
                    &qualified,
                    format!("row {} has non-numeric '{}' = {}", row_index, key, value),
                )),
                Some(_) => {}
            }
        }
    }

    from_errors(errors)
}
