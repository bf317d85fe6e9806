//! Role-driven visibility of the performer field group

/// Role chosen in the registration form's role select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Performer,
    Other,
}

impl Role {
    /// Interpret the select's current value.
    pub fn from_select(value: &str, performer_value: &str) -> Self {
        if value == performer_value {
            Role::Performer
        } else {
            Role::Other
        }
    }
}

/// Visibility of the performer field group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformerSection {
    Visible,
    Hidden,
}

impl PerformerSection {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Performer => PerformerSection::Visible,
            Role::Other => PerformerSection::Hidden,
        }
    }

    /// Inline `display` value for the group element.
    pub fn display(self) -> &'static str {
        match self {
            PerformerSection::Visible => "block",
            PerformerSection::Hidden => "none",
        }
    }

    /// Whether the CV upload carries the `required` attribute.
    pub fn cv_required(self) -> bool {
        self == PerformerSection::Visible
    }

    /// Hiding the group discards whatever was entered in it.
    pub fn clears_values(self) -> bool {
        self == PerformerSection::Hidden
    }

    /// Revealing the group scrolls it into view once layout settles.
    pub fn scrolls_into_view(self) -> bool {
        self == PerformerSection::Visible
    }
}

/// Tracks the performer group across role changes
#[derive(Debug, Clone)]
pub struct RoleToggle {
    performer_value: String,
    current: Option<PerformerSection>,
}

impl RoleToggle {
    pub fn new(performer_value: impl Into<String>) -> Self {
        Self {
            performer_value: performer_value.into(),
            current: None,
        }
    }

    /// State after the last evaluation, `None` before the first.
    pub fn current(&self) -> Option<PerformerSection> {
        self.current
    }

    /// Evaluate the select's value on page load.
    ///
    /// The state is recorded either way, but only a visible group has effects
    /// to apply: the page ships with the group hidden, and values restored by
    /// the browser in a hidden group are left alone.
    pub fn on_load(&mut self, select_value: &str) -> Option<PerformerSection> {
        match self.on_change(select_value) {
            PerformerSection::Visible => Some(PerformerSection::Visible),
            PerformerSection::Hidden => None,
        }
    }

    /// Evaluate the select's value and return the section state to apply.
    ///
    /// The state is returned on every call, not only on transitions; its
    /// effects are idempotent.
    pub fn on_change(&mut self, select_value: &str) -> PerformerSection {
        let section = PerformerSection::for_role(Role::from_select(select_value, &self.performer_value));
        if self.current != Some(section) {
            tracing::debug!("Performer fields: {:?} -> {:?}", self.current, section);
        }
        self.current = Some(section);
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Performer", Role::Performer)]
    #[case("CastingDirector", Role::Other)]
    #[case("ProductionManager", Role::Other)]
    #[case("performer", Role::Other)]
    #[case("", Role::Other)]
    fn test_role_from_select(#[case] value: &str, #[case] expected: Role) {
        assert_eq!(Role::from_select(value, "Performer"), expected);
    }

    #[test]
    fn test_visible_section_effects() {
        let section = PerformerSection::for_role(Role::Performer);
        assert_eq!(section.display(), "block");
        assert!(section.cv_required());
        assert!(section.scrolls_into_view());
        assert!(!section.clears_values());
    }

    #[test]
    fn test_hidden_section_effects() {
        let section = PerformerSection::for_role(Role::Other);
        assert_eq!(section.display(), "none");
        assert!(!section.cv_required());
        assert!(!section.scrolls_into_view());
        assert!(section.clears_values());
    }

    #[test]
    fn test_toggle_tracks_state() {
        let mut toggle = RoleToggle::new("Performer");
        assert_eq!(toggle.current(), None);

        assert_eq!(toggle.on_change("CastingDirector"), PerformerSection::Hidden);
        assert_eq!(toggle.on_change("Performer"), PerformerSection::Visible);
        assert_eq!(toggle.on_change("Performer"), PerformerSection::Visible);
        assert_eq!(toggle.current(), Some(PerformerSection::Visible));
        assert_eq!(toggle.on_change("ProductionManager"), PerformerSection::Hidden);
    }

    #[rstest]
    #[case("Performer", Some(PerformerSection::Visible), PerformerSection::Visible)]
    #[case("CastingDirector", None, PerformerSection::Hidden)]
    fn test_load_applies_only_visible(
        #[case] value: &str,
        #[case] applied: Option<PerformerSection>,
        #[case] recorded: PerformerSection,
    ) {
        let mut toggle = RoleToggle::new("Performer");
        assert_eq!(toggle.on_load(value), applied);
        assert_eq!(toggle.current(), Some(recorded));
    }
}
