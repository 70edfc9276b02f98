//! Modal popover anchored next to the rendered trigger link.

use folio_domain::geometry::{Rect, Viewport};
use folio_domain::popover::{PopoverEvent, PopoverState};
use folio_domain::render::POPOVER_TRIGGER_ID;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn viewport() -> Viewport {
    let window = window();
    let size = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or_default()
    };
    Viewport::new(size(window.inner_width()), size(window.inner_height()))
}

fn anchor(link: &web_sys::Element) -> Rect {
    let rect = link.get_bounding_client_rect();
    Rect {
        left: rect.left(),
        top: rect.top(),
        right: rect.right(),
        bottom: rect.bottom(),
    }
}

/// Whether a click landed on the trigger link, which is rendered after
/// the component mounts.
fn trigger_of(event: &ev::MouseEvent) -> Option<web_sys::Element> {
    event
        .target()?
        .dyn_into::<web_sys::Element>()
        .ok()?
        .closest(&format!("#{POPOVER_TRIGGER_ID}"))
        .ok()
        .flatten()
}

/// Overlay and panel showing an image with a caption.
///
/// Opens on a click of the trigger link; closes on the close button, the
/// backdrop or Escape. The panel is re-placed on resize while open.
#[component]
pub fn Popover(image: String, caption: String) -> impl IntoView {
    let (state, set_state) = signal(PopoverState::Hidden);
    let dispatch = move |event: PopoverEvent| {
        set_state.update(|s| *s = s.handle(&event));
        tracing::debug!(?event, "popover event");
    };

    let _ = window_event_listener(ev::click, move |event| {
        let Some(link) = trigger_of(&event) else {
            return;
        };
        event.prevent_default();
        event.stop_propagation();
        dispatch(PopoverEvent::TriggerClicked {
            anchor: anchor(&link),
            viewport: viewport(),
        });
    });
    let _ = window_event_listener(ev::keydown, move |event| {
        dispatch(PopoverEvent::KeyPressed(event.key()));
    });
    let _ = window_event_listener(ev::resize, move |_| {
        if !state.get_untracked().is_visible() {
            return;
        }
        if let Some(link) = document().get_element_by_id(POPOVER_TRIGGER_ID) {
            dispatch(PopoverEvent::Resized {
                anchor: anchor(&link),
                viewport: viewport(),
            });
        }
    });

    let active = move || state.get().is_visible();
    let position = move || match state.get() {
        PopoverState::Visible(placement) => {
            format!("left: {}px; top: {}px;", placement.left, placement.top)
        }
        PopoverState::Hidden => String::new(),
    };

    view! {
        <div
            class="wechat-qr-overlay"
            class:active=active
            on:click=move |_| dispatch(PopoverEvent::BackdropClicked)
        ></div>
        <div class="wechat-qr-popover" class:active=active style=position>
            <div class="wechat-qr-content">
                <span class="wechat-qr-close" on:click=move |_| dispatch(PopoverEvent::CloseClicked)>
                    "\u{00D7}"
                </span>
                <img src=image alt="QR code"/>
                <p>{caption}</p>
            </div>
        </div>
    }
}
