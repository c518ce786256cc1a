use crate::menu::{ActivationSource, DeferredAction};

/// Everything the controller reacts to. Hosts translate their native callbacks
/// into these and post them through a [`crate::Mailbox`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetEvent {
    /// Pointer position in client (viewport) pixels.
    PointerMove { x: f32, y: f32 },
    /// Pointer left the document.
    PointerLeave,
    /// Device orientation in degrees; either reading may be unavailable.
    Orientation {
        beta: Option<f64>,
        gamma: Option<f64>,
    },
    TriggerActivated(ActivationSource),
    Escape,
    DocumentClick { inside_widget: bool },
    LinkActivated,
    /// Focus left some element of the widget. `into_widget` is true when it
    /// landed on another element of the same widget.
    FocusOut { into_widget: bool },
    Resize,
    ReducedMotionChanged,
    VisibilityChanged { hidden: bool },
    Frame,
    Deferred(DeferredAction),
}

impl WidgetEvent {
    /// Map a keydown to an event. Enter and Space only count while the trigger
    /// itself is the event target.
    pub fn from_key(key: &str, on_trigger: bool) -> Option<Self> {
        match key {
            "Escape" => Some(WidgetEvent::Escape),
            "Enter" | " " if on_trigger => {
                Some(WidgetEvent::TriggerActivated(ActivationSource::Keyboard))
            }
            _ => None,
        }
    }
}
