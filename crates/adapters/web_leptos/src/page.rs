//! [`Page`] over the live DOM through `web-sys`.

use folio_app::ports::Page;
use folio_domain::geometry::{Rect, ScrollBehavior, Viewport};
use folio_domain::navigation::ScrollRequest;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollRestoration, ScrollToOptions, Window};

/// The browser window and its document.
#[derive(Debug, Clone)]
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    /// `None` outside a browser context.
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Query string of the current URL, `?` included.
    pub fn search(&self) -> String {
        self.window.location().search().unwrap_or_default()
    }

    /// Take over scroll position at load: disable the browser's automatic
    /// restoration, jump to the top and strip the URL fragment so it does
    /// not scroll by itself. Returns the stripped fragment.
    pub fn reset_scroll(&self) -> Option<String> {
        if let Ok(history) = self.window.history() {
            let _ = history.set_scroll_restoration(ScrollRestoration::Manual);
        }
        self.window.scroll_to_with_x_and_y(0.0, 0.0);

        let hash = self.window.location().hash().ok()?;
        let fragment = hash.strip_prefix('#').filter(|f| !f.is_empty())?.to_string();
        self.replace_fragment(None);
        Some(fragment)
    }
}

fn html(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

impl Page for DomPage {
    type Element = Element;

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_first(&self, scope: &Element, selector: &str) -> Option<Element> {
        scope.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, scope: &Element, selector: &str) -> Vec<Element> {
        let Ok(nodes) = scope.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn add_classes(&self, element: &Element, classes: &[&str]) {
        let list = element.class_list();
        for class in classes {
            let _ = list.add_1(class);
        }
    }

    fn remove_classes(&self, element: &Element, classes: &[&str]) {
        let list = element.class_list();
        for class in classes {
            let _ = list.remove_1(class);
        }
    }

    fn restart_animation(&self, element: &Element) {
        let Some(html) = html(element) else {
            return;
        };
        let style = html.style();
        let _ = style.set_property("animation", "none");
        // reading a layout property flushes styles
        let _ = html.offset_height();
        let _ = style.remove_property("animation");
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_html(&self, element: &Element, html: &str) {
        element.set_inner_html(html);
    }

    fn replace_items(&self, element: &Element, items: &[String]) {
        let markup: String = items.iter().map(|item| format!("<li>{item}</li>")).collect();
        element.set_inner_html(&markup);
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        let _ = element.set_attribute(name, value);
    }

    fn set_document_attribute(&self, name: &str, value: &str) {
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute(name, value);
        }
    }

    fn offset_top(&self, element: &Element) -> f64 {
        html(element).map_or(0.0, |html| f64::from(html.offset_top()))
    }

    fn bounding_rect(&self, element: &Element) -> Rect {
        let rect = element.get_bounding_client_rect();
        Rect {
            left: rect.left(),
            top: rect.top(),
            right: rect.right(),
            bottom: rect.bottom(),
        }
    }

    fn viewport(&self) -> Viewport {
        let size = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or_default()
        };
        Viewport::new(
            size(self.window.inner_width()),
            size(self.window.inner_height()),
        )
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn scroll_to(&self, request: ScrollRequest) {
        let options = ScrollToOptions::new();
        options.set_top(request.top);
        options.set_behavior(match request.behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn replace_fragment(&self, fragment: Option<&str>) {
        let Ok(history) = self.window.history() else {
            return;
        };
        let url = match fragment {
            Some(fragment) => format!("#{fragment}"),
            None => {
                let location = self.window.location();
                format!(
                    "{}{}",
                    location.pathname().unwrap_or_default(),
                    location.search().unwrap_or_default()
                )
            }
        };
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
    }
}
