//! View mode state for the text/visual page pair.
//!
//! The documentation generator emits every function page twice, once as a
//! text (DDL) page and once as a visual diagram. A single flag on the
//! navigation page decides which variant links and the content frame point
//! at; everything that has to change on a flip is derived from this enum.

use crate::url;

/// Which representation of the function pages is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// DDL text pages (`*_text.html`). The state every page load starts in.
    #[default]
    Text,
    /// Diagram pages (`*_visual.html`).
    Visual,
}

impl ViewMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Text => ViewMode::Visual,
            ViewMode::Visual => ViewMode::Text,
        }
    }

    /// The filename suffix pages of this mode carry.
    pub fn suffix(self) -> &'static str {
        match self {
            ViewMode::Text => url::TEXT_SUFFIX,
            ViewMode::Visual => url::VISUAL_SUFFIX,
        }
    }

    /// Label for the mode button. The label advertises the mode a press
    /// switches *to*, not the one currently shown.
    pub fn button_label(self) -> &'static str {
        match self {
            ViewMode::Text => "Switch to visual view",
            ViewMode::Visual => "Switch to text view",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_text_mode() {
        assert_eq!(ViewMode::default(), ViewMode::Text);
    }

    #[test]
    fn test_toggle_flips_and_returns() {
        assert_eq!(ViewMode::Text.toggled(), ViewMode::Visual);
        assert_eq!(ViewMode::Visual.toggled(), ViewMode::Text);
        assert_eq!(ViewMode::Text.toggled().toggled(), ViewMode::Text);
    }

    #[test]
    fn test_button_advertises_target_mode() {
        assert_eq!(ViewMode::Text.button_label(), "Switch to visual view");
        assert_eq!(ViewMode::Visual.button_label(), "Switch to text view");
    }

    #[test]
    fn test_suffix_matches_mode() {
        assert_eq!(ViewMode::Text.suffix(), "_text.html");
        assert_eq!(ViewMode::Visual.suffix(), "_visual.html");
    }
}
