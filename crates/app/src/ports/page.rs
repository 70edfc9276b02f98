//! Page port — the host document.
//!
//! The page shell provides every structural container; adapters only look
//! elements up, fill them and read their geometry.

use folio_domain::geometry::{Rect, Viewport};
use folio_domain::navigation::ScrollRequest;

/// Access to the host document and its viewport.
pub trait Page: Clone + 'static {
    /// Handle to one element.
    type Element: Clone + 'static;

    /// Look an element up by id.
    fn element(&self, id: &str) -> Option<Self::Element>;

    /// First descendant of `scope` matching a CSS selector.
    fn query_first(&self, scope: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// All descendants of `scope` matching a CSS selector, in document order.
    fn query_all(&self, scope: &Self::Element, selector: &str) -> Vec<Self::Element>;

    fn add_classes(&self, element: &Self::Element, classes: &[&str]);

    fn remove_classes(&self, element: &Self::Element, classes: &[&str]);

    /// Add or remove a single class.
    fn toggle_class(&self, element: &Self::Element, class: &str, on: bool) {
        if on {
            self.add_classes(element, &[class]);
        } else {
            self.remove_classes(element, &[class]);
        }
    }

    /// Cancel any running CSS animation and force a layout flush so the
    /// next class change starts it from the beginning.
    fn restart_animation(&self, element: &Self::Element);

    /// Replace the text content.
    fn set_text(&self, element: &Self::Element, text: &str);

    /// Replace the inner HTML.
    fn set_html(&self, element: &Self::Element, html: &str);

    /// Replace all children with one `<li>` per entry (inner HTML).
    fn replace_items(&self, element: &Self::Element, items: &[String]);

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    /// Set an attribute on the root `<html>` element.
    fn set_document_attribute(&self, name: &str, value: &str);

    /// Distance from the top of the document to the element's border box.
    fn offset_top(&self, element: &Self::Element) -> f64;

    /// Bounding box in viewport coordinates.
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    fn viewport(&self) -> Viewport;

    /// Current vertical scroll offset of the page.
    fn scroll_offset(&self) -> f64;

    fn scroll_to(&self, request: ScrollRequest);

    /// Rewrite the URL fragment without scrolling (`None` clears it).
    fn replace_fragment(&self, fragment: Option<&str>);
}
