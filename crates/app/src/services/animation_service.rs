//! Animation service — replays CSS entrance animations.

use folio_domain::animation::{
    ANIMATE_IN, DETAILS_CONTAINER_ID, HEADING_SELECTOR, PAGE_START_DELAY_MS, RESET_CLASSES,
    SPECIAL_ELEMENT_IDS, SectionAnimation,
};

use crate::ports::{Page, Timers};

/// Adds and removes presentation classes so entrance animations restart.
pub struct AnimationService<P, T> {
    page: P,
    timers: T,
}

impl<P: Page, T: Timers> AnimationService<P, T> {
    pub fn new(page: P, timers: T) -> Self {
        Self { page, timers }
    }

    fn reset(&self, element: &P::Element) {
        self.page.remove_classes(element, &RESET_CLASSES);
        self.page.restart_animation(element);
    }

    /// Replay the entrance animation of one section.
    ///
    /// Classes are stripped immediately and added back on timers, so the
    /// call returns before the cascade finishes. Returns `false` when no
    /// element has the given id.
    pub fn animate_section(&self, section_id: &str) -> bool {
        let Some(section) = self.page.element(section_id) else {
            return false;
        };
        let plan = SectionAnimation::for_section(section_id);

        let heading = self.page.query_first(&section, HEADING_SELECTOR);
        let items = self.page.query_all(&section, "li");
        let specials: Vec<P::Element> = plan
            .special_ids
            .iter()
            .filter_map(|id| self.page.query_first(&section, &format!("#{id}")))
            .collect();

        self.reset(&section);
        if let Some(heading) = &heading {
            self.reset(heading);
        }
        for item in &items {
            self.reset(item);
        }
        for special in &specials {
            self.reset(special);
        }

        let page = self.page.clone();
        self.timers.defer(
            plan.start_delay_ms,
            Box::new(move || {
                page.add_classes(&section, plan.section_classes);
                if let Some(heading) = &heading {
                    page.add_classes(heading, plan.heading_classes);
                }
                for special in &specials {
                    page.add_classes(special, plan.special_classes);
                }
            }),
        );

        for (index, item) in items.into_iter().enumerate() {
            let page = self.page.clone();
            self.timers.defer(
                plan.start_delay_ms + plan.item_delay_ms(index),
                Box::new(move || page.add_classes(&item, plan.item_classes)),
            );
        }

        tracing::debug!(section = section_id, "section animation scheduled");
        true
    }

    /// Replay the entrance animation of every section in the details
    /// container, all at once.
    pub fn animate_page(&self) -> bool {
        let Some(container) = self.page.element(DETAILS_CONTAINER_ID) else {
            return false;
        };

        let mut elements = Vec::new();
        for selector in ["section", "h2", "li"] {
            elements.extend(self.page.query_all(&container, selector));
        }
        elements.extend(SPECIAL_ELEMENT_IDS.iter().filter_map(|id| self.page.element(id)));

        for element in &elements {
            self.reset(element);
        }

        let page = self.page.clone();
        self.timers.defer(
            PAGE_START_DELAY_MS,
            Box::new(move || {
                for element in &elements {
                    page.add_classes(element, &[ANIMATE_IN]);
                }
            }),
        );
        true
    }
}
