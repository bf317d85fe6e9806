//! Audire Forms WASM
//!
//! Browser controllers for the Audire casting and registration pages. Each
//! page is wired by an explicit init function taking the document and an
//! optional configuration object; `mountForms` wires whichever forms the
//! current page contains.
//!
//! ```javascript
//! import init, { mountForms } from './audire_forms_wasm.js';
//! await init();
//! mountForms({ mirrorServerRules: true });
//! ```

use std::rc::Rc;

use audire_forms_validation::{
    evaluate_submission, min_deadline_iso, FormConfig, FormError, FormSnapshot, RuleSet,
};
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub mod casting;
pub mod dom;
pub mod form_utils;
pub mod logging;
pub mod registration;

pub use casting::init_casting_page;
pub use dom::Page;
pub use registration::init_registration_page;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(err: FormError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// `undefined`/`null` select the defaults; anything else must deserialize
/// into a valid [`FormConfig`].
fn parse_config(config: JsValue) -> Result<FormConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(FormConfig::default());
    }
    let config: FormConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;
    config.validate().map_err(to_js)?;
    Ok(config)
}

fn prepare(config: JsValue) -> Result<Rc<FormConfig>, JsValue> {
    let config = parse_config(config)?;
    logging::init(&config.log_level);
    Ok(Rc::new(config))
}

/// Wire the casting form found in `document`.
#[wasm_bindgen(js_name = initCastingPage)]
pub fn init_casting_page_js(document: Document, config: JsValue) -> Result<(), JsValue> {
    let config = prepare(config)?;
    init_casting_page(Rc::new(Page::new(document)), config).map_err(to_js)
}

/// Wire the registration form found in `document`.
#[wasm_bindgen(js_name = initRegistrationPage)]
pub fn init_registration_page_js(document: Document, config: JsValue) -> Result<(), JsValue> {
    let config = prepare(config)?;
    init_registration_page(Rc::new(Page::new(document)), config).map_err(|e| {
        tracing::error!("Registration form not wired: {}", e);
        to_js(e)
    })
}

/// Wire every known form present on the current page.
#[wasm_bindgen(js_name = mountForms)]
pub fn mount_forms(config: JsValue) -> Result<(), JsValue> {
    let config = prepare(config)?;
    let page = Rc::new(Page::current().map_err(to_js)?);

    init_casting_page(page.clone(), config.clone()).map_err(to_js)?;

    if page.element(&config.ids.registration_form).is_some() {
        init_registration_page(page, config).map_err(to_js)?;
    }
    Ok(())
}

/// Minimum casting deadline as `YYYY-MM-DD`
#[wasm_bindgen(js_name = minDeadline)]
pub fn min_deadline_js(lead_days: Option<u32>) -> Result<String, JsValue> {
    let lead_days = lead_days.unwrap_or_else(|| FormConfig::default().deadline_lead_days);
    min_deadline_iso(casting::today(), lead_days).map_err(to_js)
}

/// Validate a registration snapshot without touching the DOM.
///
/// # Example (JavaScript)
/// ```javascript
/// const report = evaluateRegistration([
///     { id: 'phoneNumber', value: '123', nativelyValid: true, visible: true },
/// ]);
/// // report.messages => ["Il numero di telefono deve essere composto da 10 cifre."]
/// ```
#[wasm_bindgen(js_name = evaluateRegistration)]
pub fn evaluate_registration_js(snapshot: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let config = parse_config(config)?;
    let snapshot: FormSnapshot = serde_wasm_bindgen::from_value(snapshot)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse snapshot: {}", e)))?;

    let report = evaluate_submission(&snapshot, &RuleSet::registration(&config));
    Ok(serde_wasm_bindgen::to_value(&report)?)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use audire_forms_validation::{messages, FieldState};
    use serde::Deserialize;
    use wasm_bindgen_test::*;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Report {
        form_valid: bool,
        messages: Vec<String>,
    }

    fn report_for(fields: Vec<FieldState>) -> Report {
        let snapshot = serde_wasm_bindgen::to_value(&FormSnapshot::new(fields)).unwrap();
        let report = evaluate_registration_js(snapshot, JsValue::UNDEFINED).unwrap();
        serde_wasm_bindgen::from_value(report).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_min_deadline_format() {
        let min = min_deadline_js(None).unwrap();
        assert_eq!(min.len(), 10);
        assert_eq!(&min[4..5], "-");
        assert_eq!(&min[7..8], "-");
    }

    #[wasm_bindgen_test]
    fn test_evaluate_registration_reports_phone() {
        let report = report_for(vec![FieldState::new("phoneNumber", "123").hidden()]);
        assert!(report.form_valid);
        assert_eq!(report.messages, vec![messages::phone_length(10)]);
    }

    #[wasm_bindgen_test]
    fn test_evaluate_registration_valid() {
        let report = report_for(vec![
            FieldState::new("phoneNumber", "3331234567"),
            FieldState::new("password", "Segreta1!"),
            FieldState::new("confirmPassword", "Segreta1!"),
        ]);
        assert!(report.form_valid);
        assert!(report.messages.is_empty());
    }

    #[wasm_bindgen_test]
    fn test_rejects_invalid_config() {
        let config = js_sys::JSON::parse(r#"{"phoneLength": 0}"#).unwrap();
        assert!(parse_config(config).is_err());
        assert!(parse_config(JsValue::NULL).is_ok());
    }
}
