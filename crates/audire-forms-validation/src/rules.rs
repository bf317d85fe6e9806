//! Declarative per-field rules
//!
//! A [`RuleSet`] is an ordered list of named validators. The same set backs
//! the live-validation predicate and submit-time evaluation, so a field is
//! judged by one code path whichever way it is checked.

use crate::config::FormConfig;
use crate::messages;
use crate::password;
use crate::snapshot::FieldValues;
use crate::string;

/// What a validator checks on its field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// Value must equal the current value of another field.
    MatchesField(String),
    /// Value must have exactly this many characters.
    ExactLength(usize),
    /// Non-empty value must be a well-formed email address.
    Email,
    /// Non-empty value must be a strong password.
    StrongPassword,
    /// Non-empty value must name a PDF file.
    PdfFile,
}

/// A named check on one field with the message it contributes on failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    pub name: &'static str,
    pub field: String,
    pub check: Check,
    pub message: String,
}

impl Validator {
    pub fn new(
        name: &'static str,
        field: impl Into<String>,
        check: Check,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name,
            field: field.into(),
            check,
            message: message.into(),
        }
    }

    /// Check `value` as the current value of this validator's field.
    pub fn passes(&self, value: &str, values: &dyn FieldValues) -> bool {
        match &self.check {
            Check::MatchesField(other) => {
                let other = values.value_of(other).unwrap_or_default();
                password::passwords_match(&other, value)
            }
            Check::ExactLength(len) => string::has_exact_length(value, *len),
            Check::Email => value.is_empty() || string::is_valid_email(value),
            Check::StrongPassword => value.is_empty() || password::validate_strong(value).is_ok(),
            Check::PdfFile => value.is_empty() || string::is_pdf_file_name(value),
        }
    }

    /// Evaluate against the form as a whole.
    ///
    /// Returns `None` when the field is absent from the form. A missing
    /// confirmation target is read as an empty string, so a password check
    /// still runs when only one of the two fields exists.
    pub fn evaluate(&self, values: &dyn FieldValues) -> Option<bool> {
        match (&self.check, values.value_of(&self.field)) {
            (_, Some(value)) => Some(self.passes(&value, values)),
            (Check::MatchesField(_), None) => Some(self.passes("", values)),
            (_, None) => None,
        }
    }
}

/// Ordered set of validators for one form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    validators: Vec<Validator>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules for the registration form.
    ///
    /// Password confirmation and phone length always apply. With
    /// `mirror_server_rules` the email, password strength and CV format
    /// checks of the registration endpoint are added as well.
    pub fn registration(config: &FormConfig) -> Self {
        let ids = &config.ids;
        let mut rules = Self::new()
            .with(Validator::new(
                "passwords_match",
                &ids.confirm_password,
                Check::MatchesField(ids.password.clone()),
                messages::PASSWORDS_MISMATCH,
            ))
            .with(Validator::new(
                "phone_length",
                &ids.phone_number,
                Check::ExactLength(config.phone_length),
                messages::phone_length(config.phone_length),
            ));

        if config.mirror_server_rules {
            rules = rules
                .with(Validator::new(
                    "email_format",
                    &ids.email,
                    Check::Email,
                    messages::EMAIL_INVALID,
                ))
                .with(Validator::new(
                    "password_strength",
                    &ids.password,
                    Check::StrongPassword,
                    messages::PASSWORD_WEAK,
                ))
                .with(Validator::new(
                    "cv_pdf",
                    &ids.cv_file,
                    Check::PdfFile,
                    messages::CV_NOT_PDF,
                ));
        }

        rules
    }

    pub fn with(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Custom validity of one field: every validator on it must pass.
    /// Fields without validators are always valid here and fall back to the
    /// browser's native checks.
    pub fn field_passes(&self, field_id: &str, value: &str, values: &dyn FieldValues) -> bool {
        self.validators
            .iter()
            .filter(|v| v.field == field_id)
            .all(|v| v.passes(value, values))
    }

    /// Validators that fail against the current form, in rule order.
    pub fn failures<'a>(&'a self, values: &'a dyn FieldValues) -> impl Iterator<Item = &'a Validator> + 'a {
        self.validators
            .iter()
            .filter(move |v| v.evaluate(values) == Some(false))
    }
}
