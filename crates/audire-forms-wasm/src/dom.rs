//! DOM access for the controllers
//!
//! [`Page`] resolves elements by ID, [`Control`] unifies inputs, selects and
//! textareas, and [`snapshot`] turns a form into the core's [`FormSnapshot`].

use audire_forms_validation::{FieldState, FieldValues, FormError, FormSnapshot};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

const CONTROL_SELECTOR: &str = "input, select, textarea";

pub fn js_err(err: JsValue) -> FormError {
    FormError::Dom(format!("{:?}", err))
}

/// The document a controller is bound to
#[derive(Debug, Clone)]
pub struct Page {
    document: Document,
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the current browser window.
    pub fn current() -> Result<Self, FormError> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self::new)
            .ok_or(FormError::MissingCollaborator("window.document"))
    }

    pub fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// Look up an optional element of a specific type.
    pub fn typed<T: JsCast>(&self, id: &str, expected: &'static str) -> Result<Option<T>, FormError> {
        match self.element(id) {
            None => Ok(None),
            Some(el) => el.dyn_into::<T>().map(Some).map_err(|_| FormError::UnexpectedElement {
                id: id.to_string(),
                expected,
            }),
        }
    }

    /// Look up an element the controller cannot work without.
    pub fn require<T: JsCast>(&self, id: &str, expected: &'static str) -> Result<T, FormError> {
        self.typed(id, expected)?
            .ok_or_else(|| FormError::MissingElement(id.to_string()))
    }

    /// `null` or the element, as `FormUtils` expects for containers.
    pub fn element_or_null(&self, id: &str) -> JsValue {
        self.element(id).map(JsValue::from).unwrap_or(JsValue::NULL)
    }
}

/// Live field values read straight from the document
impl FieldValues for Page {
    fn value_of(&self, id: &str) -> Option<String> {
        self.element(id)
            .and_then(Control::from_element)
            .map(|control| control.value())
    }
}

/// A form control that carries a value
#[derive(Debug, Clone)]
pub enum Control {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

impl Control {
    pub fn from_element(el: Element) -> Option<Self> {
        let el = match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(Control::Input(input)),
            Err(el) => el,
        };
        let el = match el.dyn_into::<HtmlSelectElement>() {
            Ok(select) => return Some(Control::Select(select)),
            Err(el) => el,
        };
        el.dyn_into::<HtmlTextAreaElement>().ok().map(Control::TextArea)
    }

    pub fn html_element(&self) -> &HtmlElement {
        match self {
            Control::Input(el) => el.as_ref(),
            Control::Select(el) => el.as_ref(),
            Control::TextArea(el) => el.as_ref(),
        }
    }

    pub fn id(&self) -> String {
        self.html_element().id()
    }

    pub fn value(&self) -> String {
        match self {
            Control::Input(el) => el.value(),
            Control::Select(el) => el.value(),
            Control::TextArea(el) => el.value(),
        }
    }

    pub fn set_value(&self, value: &str) {
        match self {
            Control::Input(el) => el.set_value(value),
            Control::Select(el) => el.set_value(value),
            Control::TextArea(el) => el.set_value(value),
        }
    }

    /// Native constraint validation (`required`, `pattern`, `min`, ...)
    pub fn check_validity(&self) -> bool {
        match self {
            Control::Input(el) => el.check_validity(),
            Control::Select(el) => el.check_validity(),
            Control::TextArea(el) => el.check_validity(),
        }
    }

    /// Rendered controls have an offset parent; `display: none` ones do not.
    pub fn is_rendered(&self) -> bool {
        self.html_element().offset_parent().is_some()
    }

    pub fn mark_invalid(&self, class: &str) -> Result<(), FormError> {
        self.html_element().class_list().add_1(class).map_err(js_err)
    }

    pub fn to_field_state(&self) -> FieldState {
        FieldState {
            id: self.id(),
            value: self.value(),
            natively_valid: self.check_validity(),
            visible: self.is_rendered(),
        }
    }
}

/// Every input, select and textarea under `root`, in document order.
pub fn controls(root: &Element) -> Result<Vec<Control>, FormError> {
    let nodes = root.query_selector_all(CONTROL_SELECTOR).map_err(js_err)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(Control::from_element)
        .collect())
}

pub fn snapshot(controls: &[Control]) -> FormSnapshot {
    controls.iter().map(Control::to_field_state).collect()
}
