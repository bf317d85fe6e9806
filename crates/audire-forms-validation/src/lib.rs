//! Audire Forms Validation
//!
//! DOM-free validation logic for the Audire casting and registration forms.
//! The browser controllers in `audire-forms-wasm` read the page into a
//! [`FormSnapshot`], hand it to this crate and apply whatever comes back.

pub mod collection;
pub mod config;
pub mod deadline;
pub mod deferred;
pub mod error;
pub mod messages;
pub mod password;
pub mod registration;
pub mod role;
pub mod rules;
pub mod snapshot;
pub mod string;

pub use collection::MessageList;
pub use config::{ElementIds, FormConfig};
pub use deadline::{check_deadline, format_iso_date, min_deadline, min_deadline_iso};
pub use deferred::DeferredSlot;
pub use error::{FormError, Result};
pub use registration::{evaluate_submission, SubmitReport};
pub use role::{PerformerSection, Role, RoleToggle};
pub use rules::{Check, RuleSet, Validator};
pub use snapshot::{FieldState, FieldValues, FormSnapshot};
