//! End-to-end checks of the registration submit flow on form snapshots
//!
//! Each test builds the registration form as the browser would report it and
//! verifies what the controller would do with it: submit, or block with a
//! given set of messages.

use audire_forms_validation::messages;
use audire_forms_validation::{
    evaluate_submission, FieldState, FormConfig, FormSnapshot, PerformerSection, RoleToggle,
    RuleSet, SubmitReport,
};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn fields() -> Vec<FieldState> {
    vec![
        FieldState::new("firstName", "Giulia"),
        FieldState::new("lastName", "Bianchi"),
        FieldState::new("email", "giulia.bianchi@example.com"),
        FieldState::new("phoneNumber", "3471234567"),
        FieldState::new("password", "Palco$cenico9"),
        FieldState::new("confirmPassword", "Palco$cenico9"),
        FieldState::new("role", "Performer"),
        FieldState::new("gender", "Female"),
        FieldState::new("category", "Actor"),
        FieldState::new("description", "Attrice di teatro"),
        FieldState::new("cvFile", "C:\\fakepath\\cv.pdf"),
    ]
}

fn set(fields: &mut [FieldState], id: &str, value: &str) {
    let field = fields.iter_mut().find(|f| f.id == id).unwrap();
    field.value = value.to_string();
}

fn submit(fields: Vec<FieldState>) -> SubmitReport {
    let rules = RuleSet::registration(&FormConfig::default());
    evaluate_submission(&FormSnapshot::new(fields), &rules)
}

#[rstest]
fn valid_registration_proceeds(fields: Vec<FieldState>) {
    let report = submit(fields);
    assert!(report.should_submit());
    assert_eq!(report.messages, Vec::<String>::new());
}

#[rstest]
#[case("Palco$cenico")]
#[case("")]
#[case("palco$cenico9")]
fn password_mismatch_always_reported(mut fields: Vec<FieldState>, #[case] confirmation: &str) {
    set(&mut fields, "confirmPassword", confirmation);
    // Unrelated problems must not hide the mismatch message.
    fields[0] = FieldState::new("firstName", "").natively_invalid();

    let report = submit(fields);
    assert!(!report.should_submit());
    assert!(report.messages.iter().any(|m| m == messages::PASSWORDS_MISMATCH));
}

#[rstest]
#[case("")]
#[case("347123456")]
#[case("34712345678")]
fn wrong_phone_length_always_reported(mut fields: Vec<FieldState>, #[case] phone: &str) {
    set(&mut fields, "phoneNumber", phone);

    let report = submit(fields);
    assert!(!report.should_submit());
    assert!(report.invalid_fields.contains(&"phoneNumber".to_string()));
    assert_eq!(
        report.messages,
        vec![messages::FIELDS_HIGHLIGHTED.to_string(), messages::phone_length(10)]
    );
}

#[rstest]
fn overlapping_failures_never_duplicate_messages(mut fields: Vec<FieldState>) {
    set(&mut fields, "confirmPassword", "diversa");
    set(&mut fields, "phoneNumber", "12");
    fields[1] = FieldState::new("lastName", "").natively_invalid();
    fields[2] = FieldState::new("email", "x").natively_invalid();

    let report = submit(fields);
    let mut unique = report.messages.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), report.messages.len());
    assert_eq!(report.messages.len(), 3);
}

#[rstest]
fn hidden_invalid_field_does_not_block(mut fields: Vec<FieldState>) {
    let cv = fields.iter_mut().find(|f| f.id == "cvFile").unwrap();
    *cv = FieldState::new("cvFile", "").natively_invalid().hidden();

    let report = submit(fields);
    assert!(report.should_submit());
    assert_eq!(report.invalid_fields, vec!["cvFile".to_string()]);
}

#[rstest]
fn switching_away_from_performer_hides_and_clears(mut fields: Vec<FieldState>) {
    let mut toggle = RoleToggle::new("Performer");
    assert_eq!(toggle.on_change("Performer"), PerformerSection::Visible);

    let section = toggle.on_change("CastingDirector");
    assert_eq!(section.display(), "none");
    assert!(!section.cv_required());
    assert!(section.clears_values());

    // Apply what the controller does to the group's fields.
    for id in ["gender", "category", "description", "cvFile"] {
        let field = fields.iter_mut().find(|f| f.id == id).unwrap();
        field.value.clear();
        field.visible = false;
    }
    set(&mut fields, "role", "CastingDirector");

    let report = submit(fields);
    assert!(report.should_submit());
}

#[rstest]
fn mirrored_rules_report_server_messages(mut fields: Vec<FieldState>) {
    set(&mut fields, "cvFile", "C:\\fakepath\\cv.odt");
    let config = FormConfig {
        mirror_server_rules: true,
        ..FormConfig::default()
    };

    let report = evaluate_submission(
        &FormSnapshot::new(fields),
        &RuleSet::registration(&config),
    );
    assert_eq!(
        report.messages,
        vec![
            messages::FIELDS_HIGHLIGHTED.to_string(),
            messages::CV_NOT_PDF.to_string()
        ]
    );
}
