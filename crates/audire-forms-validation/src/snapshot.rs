//! Point-in-time view of a form's fields

use serde::{Deserialize, Serialize};

/// Read-only access to current field values by element ID.
///
/// Implemented by [`FormSnapshot`] for submit-time evaluation and by the
/// DOM-backed reader used during live validation.
pub trait FieldValues {
    /// Current value of the field, or `None` when no such field exists.
    fn value_of(&self, id: &str) -> Option<String>;
}

/// One input, select or textarea as seen at submit time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldState {
    pub id: String,
    pub value: String,
    /// Result of the browser's own constraint check (`required`, `pattern`, ...)
    pub natively_valid: bool,
    /// Whether the field currently has a rendered box
    pub visible: bool,
}

impl FieldState {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            natively_valid: true,
            visible: true,
        }
    }

    pub fn natively_invalid(mut self) -> Self {
        self.natively_valid = false;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Fields of a form in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    fields: Vec<FieldState>,
}

impl FormSnapshot {
    pub fn new(fields: Vec<FieldState>) -> Self {
        Self { fields }
    }

    pub fn push(&mut self, field: FieldState) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn get(&self, id: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.id == id)
    }
}

impl FromIterator<FieldState> for FormSnapshot {
    fn from_iter<I: IntoIterator<Item = FieldState>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FieldValues for FormSnapshot {
    fn value_of(&self, id: &str) -> Option<String> {
        self.get(id).map(|f| f.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let snapshot: FormSnapshot = [
            FieldState::new("firstName", "Mario"),
            FieldState::new("cvFile", "").hidden(),
        ]
        .into_iter()
        .collect();

        assert_eq!(snapshot.value_of("firstName").as_deref(), Some("Mario"));
        assert!(!snapshot.get("cvFile").unwrap().visible);
        assert_eq!(snapshot.value_of("missing"), None);
    }

    #[test]
    fn test_deserializes_from_js_shape() {
        let snapshot: FormSnapshot = serde_json::from_str(
            r#"[{"id": "phoneNumber", "value": "123", "nativelyValid": false, "visible": true}]"#,
        )
        .unwrap();

        let phone = snapshot.get("phoneNumber").unwrap();
        assert!(!phone.natively_valid);
        assert_eq!(phone.value, "123");
    }
}
