//! Registration page: live rules, submit validation and the performer toggle

use std::cell::RefCell;
use std::rc::Rc;

use audire_forms_validation::{
    evaluate_submission, DeferredSlot, FormConfig, FormError, PerformerSection, RoleToggle,
    RuleSet,
};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlElement, HtmlFormElement, HtmlSelectElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom::{self, js_err, Control, Page};
use crate::form_utils;

const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";

/// Wire the registration form.
///
/// The form itself and `FormUtils` are required. The role select and
/// performer group are optional: without them the toggle is not bound.
pub fn init_registration_page(page: Rc<Page>, config: Rc<FormConfig>) -> Result<(), FormError> {
    let ids = &config.ids;
    let form = page.require::<HtmlFormElement>(&ids.registration_form, "form")?;

    if !form_utils::is_available() {
        return Err(FormError::MissingCollaborator("FormUtils"));
    }

    form_utils::init_password_toggles();
    form_utils::init_phone_input(&ids.phone_number);

    let rules = Rc::new(RuleSet::registration(&config));
    bind_live_rules(&form, page.clone(), rules.clone());
    attach_submit_validator(&form, page.clone(), config.clone(), rules)?;

    let role = page.typed::<HtmlSelectElement>(&ids.role, "select")?;
    let group = page.typed::<HtmlElement>(&ids.performer_fields, "element")?;
    match (role, group) {
        (Some(role), Some(group)) => bind_role_toggle(role, group, page, config)?,
        _ => tracing::warn!(
            "#{} or #{} missing; performer toggle not bound",
            ids.role,
            ids.performer_fields
        ),
    }

    tracing::info!("Registration form ready");
    Ok(())
}

fn bind_live_rules(form: &HtmlFormElement, page: Rc<Page>, rules: Rc<RuleSet>) {
    let predicate: form_utils::LivePredicate =
        Closure::wrap(Box::new(move |input: Element| match Control::from_element(input) {
            Some(control) => rules.field_passes(&control.id(), &control.value(), &*page),
            None => true,
        }) as Box<dyn Fn(Element) -> bool>);

    form_utils::bind_live_validation_with(form, &predicate);
    predicate.forget();
}

fn attach_submit_validator(
    form: &HtmlFormElement,
    page: Rc<Page>,
    config: Rc<FormConfig>,
    rules: Rc<RuleSet>,
) -> Result<(), FormError> {
    let target = form.clone();
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Err(e) = validate_on_submit(&event, &target, &page, &config, &rules) {
            tracing::error!("Submit validation failed: {}", e);
        }
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(js_err)?;
    on_submit.forget();
    Ok(())
}

fn validate_on_submit(
    event: &Event,
    form: &HtmlFormElement,
    page: &Page,
    config: &FormConfig,
    rules: &RuleSet,
) -> Result<(), FormError> {
    let container = page.element_or_null(&config.ids.error_container);
    form_utils::clear_errors(&container);

    let controls = match dom::controls(form) {
        Ok(controls) => controls,
        Err(e) => {
            event.prevent_default();
            return Err(e);
        }
    };
    let report = evaluate_submission(&dom::snapshot(&controls), rules);
    if !report.should_submit() {
        event.prevent_default();
    }

    for &position in &report.invalid_positions {
        controls[position].mark_invalid(&config.invalid_class)?;
    }

    if !report.should_submit() {
        let messages = serde_wasm_bindgen::to_value(&report.messages)
            .map_err(|e| FormError::Dom(e.to_string()))?;
        form_utils::show_errors(&container, &messages);
        return Ok(());
    }

    match form.query_selector(SUBMIT_BUTTON).map_err(js_err)? {
        Some(button) => form_utils::set_loading_button(&button, true),
        None => tracing::warn!("No submit button in #{}", config.ids.registration_form),
    }
    Ok(())
}

/// The performer field group and its pending scroll
struct PerformerGroup {
    page: Rc<Page>,
    group: HtmlElement,
    cv_file_id: String,
    scroll_delay_ms: u32,
    scroll: RefCell<DeferredSlot<Timeout>>,
}

impl PerformerGroup {
    fn apply(&self, section: PerformerSection) -> Result<(), FormError> {
        self.group
            .style()
            .set_property("display", section.display())
            .map_err(js_err)?;

        if let Some(cv) = self.page.element(&self.cv_file_id) {
            if section.cv_required() {
                cv.set_attribute("required", "required").map_err(js_err)?;
            } else {
                cv.remove_attribute("required").map_err(js_err)?;
            }
        }

        if section.clears_values() {
            self.scroll.borrow_mut().cancel();
            for control in dom::controls(&self.group)? {
                control.set_value("");
            }
        }

        if section.scrolls_into_view() {
            let group = self.group.clone();
            let timeout = Timeout::new(self.scroll_delay_ms, move || {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Nearest);
                group.scroll_into_view_with_scroll_into_view_options(&options);
            });
            self.scroll.borrow_mut().schedule(timeout);
        }

        Ok(())
    }
}

fn bind_role_toggle(
    role: HtmlSelectElement,
    group: HtmlElement,
    page: Rc<Page>,
    config: Rc<FormConfig>,
) -> Result<(), FormError> {
    let performer = PerformerGroup {
        page,
        group,
        cv_file_id: config.ids.cv_file.clone(),
        scroll_delay_ms: config.scroll_delay_ms,
        scroll: RefCell::new(DeferredSlot::new()),
    };
    let toggle = RefCell::new(RoleToggle::new(config.performer_role.clone()));

    if let Some(section) = toggle.borrow_mut().on_load(&role.value()) {
        performer.apply(section)?;
    }

    let select = role.clone();
    let on_change = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let section = toggle.borrow_mut().on_change(&select.value());
        if let Err(e) = performer.apply(section) {
            tracing::warn!("Could not update performer fields: {}", e);
        }
    });
    role.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .map_err(js_err)?;
    on_change.forget();
    Ok(())
}
