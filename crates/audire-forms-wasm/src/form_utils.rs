//! Bindings to the page's shared `FormUtils` script
//!
//! `FormUtils` owns the look of validation feedback (error boxes, field
//! highlighting while typing, password eye toggles, phone formatting, button
//! spinners). The controllers only decide when to call it.

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlFormElement};

/// Predicate handed to `bindLiveValidation`: receives the field being edited
/// and returns its custom validity.
pub type LivePredicate = Closure<dyn Fn(Element) -> bool>;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = FormUtils, js_name = bindLiveValidation)]
    pub fn bind_live_validation(form: &HtmlFormElement);

    #[wasm_bindgen(js_namespace = FormUtils, js_name = bindLiveValidation)]
    pub fn bind_live_validation_with(form: &HtmlFormElement, predicate: &LivePredicate);

    /// `container` may be `null` when the page has no error box.
    #[wasm_bindgen(js_namespace = FormUtils, js_name = clearErrors)]
    pub fn clear_errors(container: &JsValue);

    #[wasm_bindgen(js_namespace = FormUtils, js_name = showErrors)]
    pub fn show_errors(container: &JsValue, messages: &JsValue);

    #[wasm_bindgen(js_namespace = FormUtils, js_name = initPasswordToggles)]
    pub fn init_password_toggles();

    #[wasm_bindgen(js_namespace = FormUtils, js_name = initPhoneInput)]
    pub fn init_phone_input(field_id: &str);

    #[wasm_bindgen(js_namespace = FormUtils, js_name = setLoadingButton)]
    pub fn set_loading_button(button: &Element, is_loading: bool);
}

/// Whether the `FormUtils` script has been loaded into the page.
pub fn is_available() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("FormUtils"))
        .map(|utils| !utils.is_undefined() && !utils.is_null())
        .unwrap_or(false)
}
