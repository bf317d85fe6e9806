// File: src/config.rs
// Purpose: Form controller configuration, passed in from the page as JSON

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

/// Controller configuration
///
/// Every field has a default matching the Audire pages, so an empty object
/// (or no configuration at all) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    /// Minimum days between today and a casting deadline
    #[serde(default = "default_lead_days")]
    pub deadline_lead_days: u32,

    /// Exact number of characters in a phone number
    #[serde(default = "default_phone_length")]
    pub phone_length: usize,

    /// Delay before scrolling the performer fields into view
    #[serde(default = "default_scroll_delay_ms")]
    pub scroll_delay_ms: u32,

    /// Value of the role select that reveals the performer fields
    #[serde(default = "default_performer_role")]
    pub performer_role: String,

    /// CSS class applied to fields that fail validation on submit
    #[serde(default = "default_invalid_class")]
    pub invalid_class: String,

    /// Also apply the registration endpoint's stricter email, password and CV checks
    #[serde(default)]
    pub mirror_server_rules: bool,

    /// Console log level ("error", "warn", "info", "debug", "trace", "off")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub ids: ElementIds,
}

/// DOM element IDs the controllers look up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementIds {
    #[serde(default = "default_deadline_id")]
    pub deadline: String,
    #[serde(default = "default_casting_form_id")]
    pub casting_form: String,
    #[serde(default = "default_registration_form_id")]
    pub registration_form: String,
    #[serde(default = "default_error_container_id")]
    pub error_container: String,
    #[serde(default = "default_role_id")]
    pub role: String,
    #[serde(default = "default_performer_fields_id")]
    pub performer_fields: String,
    #[serde(default = "default_password_id")]
    pub password: String,
    #[serde(default = "default_confirm_password_id")]
    pub confirm_password: String,
    #[serde(default = "default_phone_number_id")]
    pub phone_number: String,
    #[serde(default = "default_cv_file_id")]
    pub cv_file: String,
    #[serde(default = "default_email_id")]
    pub email: String,
}

// Default values
fn default_lead_days() -> u32 {
    7
}

fn default_phone_length() -> usize {
    10
}

fn default_scroll_delay_ms() -> u32 {
    100
}

fn default_performer_role() -> String {
    "Performer".to_string()
}

fn default_invalid_class() -> String {
    "invalid-field".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_deadline_id() -> String {
    "deadline".to_string()
}

fn default_casting_form_id() -> String {
    "castingForm".to_string()
}

fn default_registration_form_id() -> String {
    "registrationForm".to_string()
}

fn default_error_container_id() -> String {
    "errorContainer".to_string()
}

fn default_role_id() -> String {
    "role".to_string()
}

fn default_performer_fields_id() -> String {
    "performerFields".to_string()
}

fn default_password_id() -> String {
    "password".to_string()
}

fn default_confirm_password_id() -> String {
    "confirmPassword".to_string()
}

fn default_phone_number_id() -> String {
    "phoneNumber".to_string()
}

fn default_cv_file_id() -> String {
    "cvFile".to_string()
}

fn default_email_id() -> String {
    "email".to_string()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            deadline_lead_days: default_lead_days(),
            phone_length: default_phone_length(),
            scroll_delay_ms: default_scroll_delay_ms(),
            performer_role: default_performer_role(),
            invalid_class: default_invalid_class(),
            mirror_server_rules: false,
            log_level: default_log_level(),
            ids: ElementIds::default(),
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            deadline: default_deadline_id(),
            casting_form: default_casting_form_id(),
            registration_form: default_registration_form_id(),
            error_container: default_error_container_id(),
            role: default_role_id(),
            performer_fields: default_performer_fields_id(),
            password: default_password_id(),
            confirm_password: default_confirm_password_id(),
            phone_number: default_phone_number_id(),
            cv_file: default_cv_file_id(),
            email: default_email_id(),
        }
    }
}

impl FormConfig {
    /// Parse a configuration from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FormConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controllers cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.phone_length == 0 {
            return Err(FormError::InvalidConfig(
                "phoneLength must be greater than zero".to_string(),
            ));
        }
        if self.performer_role.trim().is_empty() {
            return Err(FormError::InvalidConfig(
                "performerRole must not be empty".to_string(),
            ));
        }
        if self.invalid_class.trim().is_empty() || self.invalid_class.contains(char::is_whitespace) {
            return Err(FormError::InvalidConfig(format!(
                "invalidClass '{}' is not a single CSS class",
                self.invalid_class
            )));
        }
        if !matches!(
            self.log_level.to_ascii_lowercase().as_str(),
            "error" | "warn" | "info" | "debug" | "trace" | "off"
        ) {
            return Err(FormError::InvalidConfig(format!(
                "unknown logLevel '{}'",
                self.log_level
            )));
        }
        Ok(())
    }
}
