//! In-memory port implementations shared by service tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::future::Future;
use std::rc::Rc;

use folio_domain::error::{FolioError, StorageError};
use folio_domain::geometry::{Rect, Viewport};
use folio_domain::navigation::ScrollRequest;
use folio_domain::profile::ProfileDocument;
use folio_domain::theme::Theme;

use crate::ports::{Page, ParticleBackground, PreferenceStore, ProfileSource, SystemTheme, Timers};

#[derive(Debug, Default, Clone)]
pub struct FakeElement {
    pub classes: BTreeSet<String>,
    pub text: Option<String>,
    pub html: Option<String>,
    pub items: Option<Vec<String>>,
    pub attributes: BTreeMap<String, String>,
    pub offset_top: f64,
    pub rect: Rect,
    pub restarts: u32,
}

#[derive(Debug, Default)]
pub struct FakeDom {
    pub elements: HashMap<String, FakeElement>,
    /// `(scope id, selector)` → matching element ids.
    pub queries: HashMap<(String, String), Vec<String>>,
    pub document_attributes: Vec<(String, String)>,
    pub scrolls: Vec<ScrollRequest>,
    pub fragments: Vec<Option<String>>,
    pub scroll_offset: f64,
    pub viewport: Viewport,
}

/// A page whose elements are keyed by id; element handles are ids.
#[derive(Debug, Clone, Default)]
pub struct FakePage(pub Rc<RefCell<FakeDom>>);

impl FakePage {
    pub fn with_elements(ids: &[&str]) -> Self {
        let page = Self::default();
        for id in ids {
            page.add(id);
        }
        page.0.borrow_mut().viewport = Viewport::new(1280.0, 800.0);
        page
    }

    pub fn add(&self, id: &str) {
        self.0
            .borrow_mut()
            .elements
            .insert(id.to_string(), FakeElement::default());
    }

    /// Register `children` as the result of querying `selector` under `scope`.
    pub fn nest(&self, scope: &str, selector: &str, children: &[&str]) {
        for child in children {
            if !self.0.borrow().elements.contains_key(*child) {
                self.add(child);
            }
        }
        self.0.borrow_mut().queries.insert(
            (scope.to_string(), selector.to_string()),
            children.iter().map(ToString::to_string).collect(),
        );
    }

    pub fn get(&self, id: &str) -> FakeElement {
        self.0.borrow().elements.get(id).cloned().unwrap_or_default()
    }

    pub fn edit(&self, id: &str, f: impl FnOnce(&mut FakeElement)) {
        if let Some(element) = self.0.borrow_mut().elements.get_mut(id) {
            f(element);
        }
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).classes.contains(class)
    }

    pub fn set_scroll_offset(&self, offset: f64) {
        self.0.borrow_mut().scroll_offset = offset;
    }

    pub fn scrolls(&self) -> Vec<ScrollRequest> {
        self.0.borrow().scrolls.clone()
    }

    pub fn document_attributes(&self) -> Vec<(String, String)> {
        self.0.borrow().document_attributes.clone()
    }
}

impl Page for FakePage {
    type Element = String;

    fn element(&self, id: &str) -> Option<String> {
        self.0
            .borrow()
            .elements
            .contains_key(id)
            .then(|| id.to_string())
    }

    fn query_first(&self, scope: &String, selector: &str) -> Option<String> {
        self.query_all(scope, selector).into_iter().next()
    }

    fn query_all(&self, scope: &String, selector: &str) -> Vec<String> {
        self.0
            .borrow()
            .queries
            .get(&(scope.clone(), selector.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    fn add_classes(&self, element: &String, classes: &[&str]) {
        self.edit(element, |e| {
            e.classes.extend(classes.iter().map(ToString::to_string));
        });
    }

    fn remove_classes(&self, element: &String, classes: &[&str]) {
        self.edit(element, |e| {
            for class in classes {
                e.classes.remove(*class);
            }
        });
    }

    fn restart_animation(&self, element: &String) {
        self.edit(element, |e| e.restarts += 1);
    }

    fn set_text(&self, element: &String, text: &str) {
        self.edit(element, |e| e.text = Some(text.to_string()));
    }

    fn set_html(&self, element: &String, html: &str) {
        self.edit(element, |e| e.html = Some(html.to_string()));
    }

    fn replace_items(&self, element: &String, items: &[String]) {
        self.edit(element, |e| e.items = Some(items.to_vec()));
    }

    fn attribute(&self, element: &String, name: &str) -> Option<String> {
        if name == "id" {
            return self.element(element);
        }
        self.get(element).attributes.get(name).cloned()
    }

    fn set_attribute(&self, element: &String, name: &str, value: &str) {
        self.edit(element, |e| {
            e.attributes.insert(name.to_string(), value.to_string());
        });
    }

    fn set_document_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .document_attributes
            .push((name.to_string(), value.to_string()));
    }

    fn offset_top(&self, element: &String) -> f64 {
        self.get(element).offset_top
    }

    fn bounding_rect(&self, element: &String) -> Rect {
        self.get(element).rect
    }

    fn viewport(&self) -> Viewport {
        self.0.borrow().viewport
    }

    fn scroll_offset(&self) -> f64 {
        self.0.borrow().scroll_offset
    }

    fn scroll_to(&self, request: ScrollRequest) {
        let mut dom = self.0.borrow_mut();
        dom.scroll_offset = request.top;
        dom.scrolls.push(request);
    }

    fn replace_fragment(&self, fragment: Option<&str>) {
        self.0
            .borrow_mut()
            .fragments
            .push(fragment.map(ToString::to_string));
    }
}

type Deferred = Vec<(u32, Box<dyn FnOnce()>)>;

/// Timers that never wait; deferred tasks run on [`InstantTimers::flush`].
#[derive(Clone, Default)]
pub struct InstantTimers {
    pub sleeps: Rc<RefCell<Vec<u32>>>,
    pub frames: Rc<Cell<u32>>,
    deferred: Rc<RefCell<Deferred>>,
}

impl InstantTimers {
    /// Run every deferred task in delay order; returns the delays.
    pub fn flush(&self) -> Vec<u32> {
        let mut tasks = std::mem::take(&mut *self.deferred.borrow_mut());
        tasks.sort_by_key(|(delay, _)| *delay);
        let delays = tasks.iter().map(|(delay, _)| *delay).collect();
        for (_, task) in tasks {
            task();
        }
        delays
    }

    pub fn pending(&self) -> usize {
        self.deferred.borrow().len()
    }
}

impl Timers for InstantTimers {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
        self.sleeps.borrow_mut().push(ms);
        std::future::ready(())
    }

    fn defer(&self, ms: u32, task: Box<dyn FnOnce()>) {
        self.deferred.borrow_mut().push((ms, task));
    }

    fn next_frame(&self) -> impl Future<Output = ()> {
        self.frames.set(self.frames.get() + 1);
        std::future::ready(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    pub value: Rc<Cell<Option<Theme>>>,
    pub reads: Rc<Cell<u32>>,
}

impl MemoryPreferenceStore {
    pub fn holding(theme: Theme) -> Self {
        let store = Self::default();
        store.value.set(Some(theme));
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self) -> Option<Theme> {
        self.reads.set(self.reads.get() + 1);
        self.value.get()
    }

    fn set(&self, theme: Theme) -> Result<(), StorageError> {
        self.value.set(Some(theme));
        Ok(())
    }
}

/// A system signal that counts how often it is queried.
#[derive(Debug, Clone, Default)]
pub struct FixedSystemTheme {
    pub prefers_dark: Option<bool>,
    pub queries: Rc<Cell<u32>>,
}

impl FixedSystemTheme {
    pub fn new(prefers_dark: Option<bool>) -> Self {
        Self {
            prefers_dark,
            queries: Rc::default(),
        }
    }
}

impl SystemTheme for FixedSystemTheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.queries.set(self.queries.get() + 1);
        self.prefers_dark
    }
}

#[derive(Debug, Clone, Default)]
pub struct CountingParticles {
    pub initialized: Rc<Cell<u32>>,
    pub reinitialized: Rc<Cell<u32>>,
}

impl ParticleBackground for CountingParticles {
    fn is_present(&self) -> bool {
        true
    }

    fn initialize(&self) {
        self.initialized.set(self.initialized.get() + 1);
    }

    fn reinitialize(&self) {
        self.reinitialized.set(self.reinitialized.get() + 1);
    }
}

/// Serves a fixed JSON text, or a failure.
#[derive(Debug, Clone)]
pub struct StaticProfileSource(pub Option<String>);

impl ProfileSource for StaticProfileSource {
    async fn fetch(&self) -> Result<ProfileDocument, FolioError> {
        match &self.0 {
            Some(text) => ProfileDocument::from_json(text),
            None => Err(folio_domain::error::SourceError::Status(404).into()),
        }
    }
}
