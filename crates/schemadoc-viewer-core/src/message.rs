//! The closed set of cross-frame signals.
//!
//! The navigation window and the content iframe signal each other with
//! fire-and-forget window messages. Two wire shapes are in use: a bare
//! command string ("switchMode", "updatePage") and an `{ action: ... }`
//! object (the mode button visibility reports). Both shapes stay exactly as
//! the generated pages have always sent them; this module pins the names so
//! the untyped encoding appears in one place only.

/// A signal exchanged between the navigation window and the content frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameMessage {
    /// Child frame asks the navigation window to flip the view mode, as if
    /// the mode button had been pressed.
    SwitchMode,
    /// Navigation window asks the content frame to re-point its own
    /// location at the other page variant.
    UpdatePage,
    /// Child frame reports that a table page was opened. Table pages have a
    /// single variant, so the mode button must disappear.
    HideModeButton,
    /// Child frame reports that a function page was opened.
    ShowModeButton,
}

/// Wire shape of an encoded signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WirePayload {
    /// Sent as a bare string.
    Command(&'static str),
    /// Sent as an object with a single `action` field.
    Action(&'static str),
}

impl FrameMessage {
    /// How this signal is encoded on the wire.
    pub fn wire(self) -> WirePayload {
        match self {
            FrameMessage::SwitchMode => WirePayload::Command("switchMode"),
            FrameMessage::UpdatePage => WirePayload::Command("updatePage"),
            FrameMessage::HideModeButton => WirePayload::Action("hideModeButton"),
            FrameMessage::ShowModeButton => WirePayload::Action("showModeButton"),
        }
    }

    /// Decode a bare command string. Unknown commands decode to `None` and
    /// are dropped by the receiver.
    pub fn from_command(command: &str) -> Option<Self> {
        match command {
            "switchMode" => Some(FrameMessage::SwitchMode),
            "updatePage" => Some(FrameMessage::UpdatePage),
            _ => None,
        }
    }

    /// Decode the `action` field of an object payload. Unknown actions
    /// decode to `None` and are dropped by the receiver.
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            "hideModeButton" => Some(FrameMessage::HideModeButton),
            "showModeButton" => Some(FrameMessage::ShowModeButton),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_round_trip() {
        let all = [
            FrameMessage::SwitchMode,
            FrameMessage::UpdatePage,
            FrameMessage::HideModeButton,
            FrameMessage::ShowModeButton,
        ];
        for message in all {
            let decoded = match message.wire() {
                WirePayload::Command(command) => FrameMessage::from_command(command),
                WirePayload::Action(action) => FrameMessage::from_action(action),
            };
            assert_eq!(decoded, Some(message));
        }
    }

    #[test]
    fn test_unknown_names_are_dropped() {
        assert_eq!(FrameMessage::from_command("reload"), None);
        assert_eq!(FrameMessage::from_command(""), None);
        assert_eq!(FrameMessage::from_action("closeFrame"), None);
        assert_eq!(FrameMessage::from_action(""), None);
    }

    #[test]
    fn test_wire_shapes_do_not_cross() {
        // Button visibility reports only ever travel as `{ action }`
        // objects, the two commands only as bare strings.
        assert_eq!(FrameMessage::from_command("hideModeButton"), None);
        assert_eq!(FrameMessage::from_command("showModeButton"), None);
        assert_eq!(FrameMessage::from_action("switchMode"), None);
        assert_eq!(FrameMessage::from_action("updatePage"), None);
    }
}
