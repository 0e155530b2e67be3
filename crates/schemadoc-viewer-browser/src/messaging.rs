//! Cross-frame messaging.
//!
//! The navigation window and the content iframe signal each other through
//! `postMessage` with no origin restriction, matching what the generated
//! pages have always done: the site is served from one origin and the
//! signals carry no data worth protecting. Typed [`FrameMessage`] values
//! exist everywhere else; this module is the only place the wire encoding
//! appears.
//!
//! Delivery is fire-and-forget. A missing counterpart, an undeliverable
//! message, or a payload that does not decode are all ignored.

use gloo_events::EventListener;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlIFrameElement, MessageEvent, Window};

use schemadoc_viewer_core::{FrameMessage, WirePayload};

/// The `{ action: ... }` wire envelope.
#[derive(Debug, Serialize, Deserialize)]
struct ActionEnvelope {
    action: String,
}

/// Encode a message into its wire value.
pub fn encode(message: FrameMessage) -> JsValue {
    match message.wire() {
        WirePayload::Command(command) => JsValue::from_str(command),
        WirePayload::Action(action) => {
            let envelope = ActionEnvelope { action: action.to_owned() };
            serde_wasm_bindgen::to_value(&envelope).unwrap_or(JsValue::UNDEFINED)
        }
    }
}

/// Decode a wire value. Anything that is not a known bare command or a
/// known `{ action }` object decodes to `None`.
pub fn decode(data: &JsValue) -> Option<FrameMessage> {
    if let Some(command) = data.as_string() {
        return FrameMessage::from_command(&command);
    }
    let envelope: ActionEnvelope = serde_wasm_bindgen::from_value(data.clone()).ok()?;
    FrameMessage::from_action(&envelope.action)
}

/// Post a message to `target` with no origin restriction.
pub fn post(target: &Window, message: FrameMessage) {
    if let Err(err) = target.post_message(&encode(message), "*") {
        tracing::debug!(?err, ?message, "window message not delivered");
    }
}

/// Post a message to the parent window. Inside the content iframe the
/// parent is the navigation window; at the top level the parent is the
/// window itself and the message comes straight back to our own listener,
/// which drops anything it does not handle.
pub fn post_to_parent(message: FrameMessage) {
    let window = gloo_utils::window();
    let Ok(Some(parent)) = window.parent() else {
        return;
    };
    post(&parent, message);
}

/// Post a message into an iframe's window, if it has one.
pub fn post_to_frame(frame: &HtmlIFrameElement, message: FrameMessage) {
    let Some(target) = frame.content_window() else {
        return;
    };
    post(&target, message);
}

/// Keeps a window message handler attached; dropping it detaches the
/// handler.
pub struct MessageSubscription {
    _listener: EventListener,
}

/// Attach `handler` to the window's message events. Payloads that do not
/// decode to a [`FrameMessage`] are dropped before the handler runs.
pub fn on_message(
    window: &Window,
    mut handler: impl FnMut(FrameMessage) + 'static,
) -> MessageSubscription {
    let listener = EventListener::new(window, "message", move |event| {
        let Some(event) = event.dyn_ref::<MessageEvent>() else {
            return;
        };
        if let Some(message) = decode(&event.data()) {
            handler(message);
        }
    });
    MessageSubscription { _listener: listener }
}
