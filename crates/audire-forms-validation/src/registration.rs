//! Submit-time evaluation of the registration form

use serde::Serialize;

use crate::collection::MessageList;
use crate::messages;
use crate::rules::RuleSet;
use crate::snapshot::FormSnapshot;

/// Outcome of validating a form on submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReport {
    /// False when at least one visible field is invalid
    pub form_valid: bool,
    /// IDs of every invalid field, hidden ones included, in document order
    pub invalid_fields: Vec<String>,
    /// Positions in the snapshot of the same fields
    #[serde(skip)]
    pub invalid_positions: Vec<usize>,
    /// De-duplicated messages to display
    pub messages: Vec<String>,
}

impl SubmitReport {
    /// Whether the native submission may go ahead.
    pub fn should_submit(&self) -> bool {
        self.form_valid && self.messages.is_empty()
    }
}

/// Validate a snapshot of the registration form.
///
/// A field is valid when the browser's own constraints hold and every rule on
/// it passes. Only visible fields decide `form_valid`, but hidden invalid
/// fields are still listed so the caller flags them. Each failing rule adds
/// its message once, after the generic "highlighted fields" message.
pub fn evaluate_submission(snapshot: &FormSnapshot, rules: &RuleSet) -> SubmitReport {
    let mut form_valid = true;
    let mut invalid_fields = Vec::new();
    let mut invalid_positions = Vec::new();

    for (position, field) in snapshot.fields().iter().enumerate() {
        let valid = field.natively_valid && rules.field_passes(&field.id, &field.value, snapshot);
        if valid {
            continue;
        }
        if field.visible {
            form_valid = false;
        } else {
            tracing::debug!("Hidden field '{}' is invalid; not blocking submit", field.id);
        }
        invalid_fields.push(field.id.clone());
        invalid_positions.push(position);
    }

    let mut shown = MessageList::new();
    if !form_valid {
        shown.push(messages::FIELDS_HIGHLIGHTED);
    }
    for validator in rules.failures(snapshot) {
        tracing::debug!("Rule '{}' failed on '{}'", validator.name, validator.field);
        shown.push(validator.message.as_str());
    }

    let report = SubmitReport {
        form_valid,
        invalid_fields,
        invalid_positions,
        messages: shown.into_vec(),
    };

    if report.should_submit() {
        tracing::info!("Registration form valid, submitting");
    } else {
        tracing::info!(
            "Registration blocked: {} invalid field(s), {} message(s)",
            report.invalid_fields.len(),
            report.messages.len()
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::snapshot::FieldState;
    use pretty_assertions::assert_eq;

    fn valid_form() -> Vec<FieldState> {
        vec![
            FieldState::new("firstName", "Mario"),
            FieldState::new("lastName", "Rossi"),
            FieldState::new("email", "mario.rossi@example.com"),
            FieldState::new("phoneNumber", "3331234567"),
            FieldState::new("password", "Segreta1!"),
            FieldState::new("confirmPassword", "Segreta1!"),
            FieldState::new("role", "CastingDirector"),
            FieldState::new("cvFile", "").hidden(),
        ]
    }

    fn evaluate(fields: Vec<FieldState>) -> SubmitReport {
        let rules = RuleSet::registration(&FormConfig::default());
        evaluate_submission(&FormSnapshot::new(fields), &rules)
    }

    #[test]
    fn test_valid_form_submits() {
        let report = evaluate(valid_form());
        assert!(report.should_submit());
        assert!(report.invalid_fields.is_empty());
        assert!(report.messages.is_empty());
    }

    #[test]
    fn test_natively_invalid_visible_field_blocks() {
        let mut fields = valid_form();
        fields[0] = FieldState::new("firstName", "").natively_invalid();

        let report = evaluate(fields);
        assert!(!report.should_submit());
        assert_eq!(report.invalid_fields, vec!["firstName"]);
        assert_eq!(report.messages, vec![messages::FIELDS_HIGHLIGHTED]);
    }

    #[test]
    fn test_mismatch_marks_confirmation_and_reports_once() {
        let mut fields = valid_form();
        fields[5] = FieldState::new("confirmPassword", "Segreta2!");

        let report = evaluate(fields);
        assert!(!report.form_valid);
        assert_eq!(report.invalid_fields, vec!["confirmPassword"]);
        assert_eq!(
            report.messages,
            vec![messages::FIELDS_HIGHLIGHTED, messages::PASSWORDS_MISMATCH]
        );
    }

    #[test]
    fn test_hidden_invalid_field_is_flagged_but_does_not_block() {
        let mut fields = valid_form();
        fields[7] = FieldState::new("cvFile", "").natively_invalid().hidden();

        let report = evaluate(fields);
        assert!(report.should_submit());
        assert_eq!(report.invalid_fields, vec!["cvFile"]);
        assert_eq!(report.invalid_positions, vec![7]);
    }

    #[test]
    fn test_hidden_phone_still_reports_length() {
        let mut fields = valid_form();
        fields[3] = FieldState::new("phoneNumber", "123").hidden();

        let report = evaluate(fields);
        assert!(report.form_valid);
        assert!(!report.should_submit());
        assert_eq!(report.messages, vec![messages::phone_length(10)]);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = evaluate(valid_form());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["formValid"], true);
        assert!(json["invalidFields"].as_array().unwrap().is_empty());
        assert!(json.get("invalidPositions").is_none());
    }
}
