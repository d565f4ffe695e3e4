//! Presenter configuration.
//!
//! Configuration is resolved once at process startup and passed into the presenter. Rendering
//! never reads environment variables, so two renders of the same record with the same
//! configuration always agree.

use crate::constants::DEFAULT_DATE_FORMAT;
use crate::format::is_valid_date_format;
use crate::presence::{PolicyPreset, PresencePolicy};
use crate::{CaseError, CaseResult};

/// Configuration consumed by [`crate::CasePresenter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresenterConfig {
    date_format: String,
    presence: PresencePolicy,
}

impl PresenterConfig {
    /// Create a new `PresenterConfig`.
    ///
    /// # Errors
    ///
    /// Returns `CaseError::InvalidInput` if `date_format` is empty or contains a specifier chrono
    /// does not understand.
    pub fn new(date_format: impl Into<String>, presence: PresencePolicy) -> CaseResult<Self> {
        let date_format = date_format.into();

        if date_format.trim().is_empty() {
            return Err(CaseError::InvalidInput("date_format cannot be empty".into()));
        }
        if !is_valid_date_format(&date_format) {
            return Err(CaseError::InvalidInput(format!(
                "date_format '{date_format}' contains an invalid specifier"
            )));
        }

        Ok(Self {
            date_format,
            presence,
        })
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn presence(&self) -> &PresencePolicy {
        &self.presence
    }
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            presence: PresencePolicy::legacy(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Resolve the date format from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default short date format.
pub fn date_format_from_env_value(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string())
}

/// Parse the presence policy from an optional string value (`legacy` or `defined`).
///
/// If `value` is `None` or empty/whitespace, returns the legacy policy.
pub fn presence_from_env_value(value: Option<String>) -> CaseResult<PresencePolicy> {
    let preset = non_blank(value)
        .map(|v| v.parse::<PolicyPreset>())
        .transpose()
        .map_err(CaseError::InvalidInput)?;

    Ok(PresencePolicy::from_preset(preset.unwrap_or_default()))
}
