//! Casting submission page

use std::rc::Rc;

use audire_forms_validation::{check_deadline, min_deadline_iso, FormConfig, FormError};
use chrono::{NaiveDate, Utc};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlFormElement, HtmlInputElement};

use crate::dom::{js_err, Page};
use crate::form_utils;

/// Today's date as the browser's `toISOString()` reports it (UTC).
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Wire the casting form: deadline minimum, live validation, deadline guard.
///
/// Both the deadline field and the form are optional; whatever is missing is
/// skipped.
pub fn init_casting_page(page: Rc<Page>, config: Rc<FormConfig>) -> Result<(), FormError> {
    let ids = &config.ids;

    if let Some(deadline) = page.typed::<HtmlInputElement>(&ids.deadline, "input")? {
        let min = min_deadline_iso(today(), config.deadline_lead_days)?;
        deadline.set_min(&min);
        tracing::debug!("Deadline minimum set to {}", min);
    }

    let Some(form) = page.typed::<HtmlFormElement>(&ids.casting_form, "form")? else {
        tracing::debug!("No #{} on this page", ids.casting_form);
        return Ok(());
    };

    if form_utils::is_available() {
        form_utils::bind_live_validation(&form);
    } else {
        tracing::warn!("FormUtils not loaded; live validation disabled on #{}", ids.casting_form);
    }

    attach_deadline_guard(&form, page, config)
}

/// Block submission when the deadline is closer than the configured lead time.
fn attach_deadline_guard(
    form: &HtmlFormElement,
    page: Rc<Page>,
    config: Rc<FormConfig>,
) -> Result<(), FormError> {
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let ids = &config.ids;
        let Ok(Some(deadline)) = page.typed::<HtmlInputElement>(&ids.deadline, "input") else {
            return;
        };

        let Err(message) = check_deadline(&deadline.value(), today(), config.deadline_lead_days) else {
            return;
        };

        event.prevent_default();
        tracing::info!("Casting blocked: deadline {} too soon", deadline.value());

        if let Err(e) = deadline.class_list().add_1(&config.invalid_class) {
            tracing::warn!("Could not flag deadline: {:?}", e);
        }

        if form_utils::is_available() {
            let container = page.element_or_null(&ids.error_container);
            form_utils::clear_errors(&container);
            match serde_wasm_bindgen::to_value(&[message]) {
                Ok(messages) => form_utils::show_errors(&container, &messages),
                Err(e) => tracing::error!("Failed to convert messages: {}", e),
            }
        }
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(js_err)?;
    on_submit.forget(); // lives as long as the page

    Ok(())
}
