//! Browser-backed ambient event sources.
//!
//! - `wasm32`: [`DomEvents`] talks to `window`/`document` through `web-sys`.
//! - native (webview shells): [`ScriptBridge`] installs the same listeners
//!   with `document::eval` and streams them back as JSON messages.

use serde::Deserialize;

use super::ambient::AmbientEvent;

#[cfg(target_arch = "wasm32")]
pub use dom::DomEvents;
#[cfg(not(target_arch = "wasm32"))]
pub use bridge::ScriptBridge;

/// Wire shape of the messages the injected script posts back.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
enum BridgeMessage {
    Scroll { offset: f64 },
    Press { inside: bool },
}

impl From<BridgeMessage> for AmbientEvent {
    fn from(message: BridgeMessage) -> Self {
        match message {
            BridgeMessage::Scroll { offset } => AmbientEvent::Scroll { offset },
            BridgeMessage::Press { inside } => AmbientEvent::PointerPress {
                inside_dropdown: inside,
            },
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod bridge {
    use std::sync::atomic::{AtomicU64, Ordering};

    use dioxus::prelude::*;

    use super::BridgeMessage;
    use crate::core::ambient::{
        AmbientError, AmbientEvents, EventSink, ListenerGuard, DROPDOWN_SELECTOR,
    };

    static NEXT_BRIDGE_ID: AtomicU64 = AtomicU64::new(0);

    /// Must be subscribed from inside a component (it spawns a scoped task).
    #[derive(Debug, Default, Clone, Copy)]
    pub struct ScriptBridge;

    impl AmbientEvents for ScriptBridge {
        fn subscribe(&self, sink: EventSink) -> Result<ListenerGuard, AmbientError> {
            let id = NEXT_BRIDGE_ID.fetch_add(1, Ordering::Relaxed);
            let script = install_script(id);

            let task = spawn(async move {
                let mut eval = document::eval(&script);
                loop {
                    match eval.recv::<serde_json::Value>().await {
                        Ok(raw) => match serde_json::from_value::<BridgeMessage>(raw) {
                            Ok(message) => sink(message.into()),
                            Err(err) => {
                                tracing::warn!("navbar bridge {id}: skipping malformed message: {err}")
                            }
                        },
                        Err(err) => {
                            tracing::debug!("navbar bridge {id} closed: {err:?}");
                            break;
                        }
                    }
                }
            });
            tracing::debug!("navbar bridge {id} installed");

            Ok(ListenerGuard::new(move || {
                task.cancel();
                let _ = document::eval(&teardown_script(id));
                tracing::debug!("navbar bridge {id} released");
            }))
        }
    }

    pub(super) fn install_script(id: u64) -> String {
        format!(
            r#"
const registry = (window.__coachingHubNav ??= {{}});
const onScroll = () => dioxus.send({{ kind: "scroll", offset: window.scrollY }});
const onPress = (event) => {{
    const target = event.target;
    const inside = target instanceof Element && target.closest('{DROPDOWN_SELECTOR}') !== null;
    dioxus.send({{ kind: "press", inside }});
}};
window.addEventListener("scroll", onScroll, {{ passive: true }});
document.addEventListener("mousedown", onPress);
registry[{id}] = () => {{
    window.removeEventListener("scroll", onScroll);
    document.removeEventListener("mousedown", onPress);
    delete registry[{id}];
}};
"#
        )
    }

    pub(super) fn teardown_script(id: u64) -> String {
        format!("window.__coachingHubNav?.[{id}]?.();")
    }
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Element, Event, EventTarget};

    use crate::core::ambient::{
        AmbientError, AmbientEvent, AmbientEvents, EventSink, ListenerGuard, DROPDOWN_SELECTOR,
    };

    type Callback = Closure<dyn FnMut(Event)>;

    #[derive(Debug, Default, Clone, Copy)]
    pub struct DomEvents;

    impl AmbientEvents for DomEvents {
        fn subscribe(&self, sink: EventSink) -> Result<ListenerGuard, AmbientError> {
            let window = web_sys::window().ok_or(AmbientError::NoWindow)?;
            let document = window.document().ok_or(AmbientError::NoDocument)?;

            let on_scroll: Callback = {
                let sink = sink.clone();
                let window = window.clone();
                Closure::new(move |_: Event| {
                    let offset = window.scroll_y().unwrap_or(0.0);
                    sink(AmbientEvent::Scroll { offset });
                })
            };
            let on_press: Callback = Closure::new(move |event: Event| {
                sink(AmbientEvent::PointerPress {
                    inside_dropdown: inside_dropdown(&event),
                });
            });

            attach(&window, "scroll", &on_scroll)?;
            if let Err(err) = attach(&document, "mousedown", &on_press) {
                detach(&window, "scroll", &on_scroll);
                return Err(err);
            }
            tracing::debug!("navbar DOM listeners attached");

            Ok(ListenerGuard::new(move || {
                detach(&window, "scroll", &on_scroll);
                detach(&document, "mousedown", &on_press);
                drop((on_scroll, on_press));
                tracing::debug!("navbar DOM listeners detached");
            }))
        }
    }

    fn inside_dropdown(event: &Event) -> bool {
        event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest(DROPDOWN_SELECTOR).ok().flatten())
            .is_some()
    }

    fn attach(target: &EventTarget, event: &'static str, callback: &Callback) -> Result<(), AmbientError> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| AmbientError::Listener {
                event,
                reason: format!("{err:?}"),
            })
    }

    fn detach(target: &EventTarget, event: &'static str, callback: &Callback) {
        if let Err(err) =
            target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            tracing::warn!("failed to detach `{event}` listener: {err:?}");
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::bridge::{install_script, teardown_script};
    use super::*;

    #[test]
    fn scroll_message_parses() {
        let message: BridgeMessage =
            serde_json::from_str(r#"{"kind":"scroll","offset":42.5}"#).expect("scroll");
        assert_eq!(
            AmbientEvent::from(message),
            AmbientEvent::Scroll { offset: 42.5 }
        );
    }

    #[test]
    fn press_message_parses() {
        let message: BridgeMessage =
            serde_json::from_str(r#"{"kind":"press","inside":true}"#).expect("press");
        assert_eq!(
            AmbientEvent::from(message),
            AmbientEvent::PointerPress {
                inside_dropdown: true
            }
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(serde_json::from_str::<BridgeMessage>(r#"{"kind":"resize"}"#).is_err());
        assert!(serde_json::from_str::<BridgeMessage>(r#"{"kind":"press"}"#).is_err());
    }

    #[test]
    fn scripts_share_the_subscription_id() {
        let install = install_script(7);
        assert!(install.contains("registry[7]"));
        assert!(install.contains("[data-nav-dropdown]"));
        assert!(install.contains(r#"addEventListener("scroll""#));
        assert!(install.contains(r#"addEventListener("mousedown""#));
        assert_eq!(teardown_script(7), "window.__coachingHubNav?.[7]?.();");
    }
}
