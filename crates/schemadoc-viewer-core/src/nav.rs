//! Navigation section visibility.
//!
//! The menu lists one collapsible section per schema. The browser layer
//! reads the section element's inline `display`, flips it here, and writes
//! the result back; nothing else is stored, the DOM is the state.

use smol_str::{SmolStr, format_smolstr};

use crate::contract;

/// Shown/hidden state of a collapsible section, as expressed through the
/// element's inline `display` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionVisibility {
    Shown,
    Hidden,
}

impl SectionVisibility {
    /// Interpret an inline `display` value. Anything but an explicit
    /// `"none"` counts as shown; freshly rendered sections carry no inline
    /// value at all.
    pub fn from_display(display: &str) -> Self {
        if display == "none" {
            SectionVisibility::Hidden
        } else {
            SectionVisibility::Shown
        }
    }

    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            SectionVisibility::Shown => SectionVisibility::Hidden,
            SectionVisibility::Hidden => SectionVisibility::Shown,
        }
    }

    /// Inline `display` value that puts a section in this state.
    pub fn display_value(self) -> &'static str {
        match self {
            SectionVisibility::Shown => "block",
            SectionVisibility::Hidden => "none",
        }
    }
}

/// Element id of a schema's collapsible section list.
pub fn list_element_id(schema: &str) -> SmolStr {
    format_smolstr!("{}{schema}", contract::SCHEMA_SECTION_ID_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_explicit_none_counts_as_hidden() {
        assert_eq!(SectionVisibility::from_display("none"), SectionVisibility::Hidden);
        assert_eq!(SectionVisibility::from_display(""), SectionVisibility::Shown);
        assert_eq!(SectionVisibility::from_display("block"), SectionVisibility::Shown);
        assert_eq!(SectionVisibility::from_display("flex"), SectionVisibility::Shown);
    }

    #[test]
    fn test_display_value_round_trips() {
        for state in [SectionVisibility::Shown, SectionVisibility::Hidden] {
            assert_eq!(SectionVisibility::from_display(state.display_value()), state);
        }
    }

    #[test]
    fn test_fresh_section_hides_on_first_toggle() {
        // Generated sections start visible with no inline display at all.
        let next = SectionVisibility::from_display("").toggled();
        assert_eq!(next.display_value(), "none");
    }

    #[test]
    fn test_list_element_id() {
        assert_eq!(list_element_id("schema1"), "list-schema1");
        assert_eq!(list_element_id(""), "list-");
    }
}
