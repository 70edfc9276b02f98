//! Render service — fetches the profile document and fills the page.

use folio_domain::error::FolioError;
use folio_domain::render::{Patch, RenderOptions, RenderPlan, SectionFailure, render};

use crate::ports::{Page, ProfileSource};

/// Outcome of applying a [`RenderPlan`] to a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Patches whose container was found and updated.
    pub applied: usize,
    /// Container ids the page does not provide.
    pub missing_targets: Vec<&'static str>,
    pub failures: Vec<SectionFailure>,
}

/// Application service projecting the profile document into the page.
pub struct RenderService<S> {
    source: S,
    options: RenderOptions,
}

impl<S: ProfileSource> RenderService<S> {
    pub fn new(source: S, options: RenderOptions) -> Self {
        Self { source, options }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the document and build its render plan.
    ///
    /// Malformed sections do not fail the plan; each is logged and listed in
    /// [`RenderPlan::failures`].
    ///
    /// # Errors
    ///
    /// Returns the source error when the document cannot be fetched or its
    /// top level cannot be decoded.
    pub async fn plan(&self) -> Result<RenderPlan, FolioError> {
        let document = self.source.fetch().await?;
        let plan = render(&document, &self.options);
        for failure in &plan.failures {
            tracing::warn!(
                section = failure.section,
                reason = %failure.reason,
                "skipping malformed section"
            );
        }
        Ok(plan)
    }

    /// Apply every patch whose container exists. Missing containers are
    /// skipped without logging, so partial page shells keep working.
    pub fn apply<P: Page>(page: &P, plan: &RenderPlan) -> RenderReport {
        let mut report = RenderReport {
            failures: plan.failures.clone(),
            ..RenderReport::default()
        };
        for patch in &plan.patches {
            let Some(element) = page.element(patch.target()) else {
                report.missing_targets.push(patch.target());
                continue;
            };
            match patch {
                Patch::Text { text, .. } => page.set_text(&element, text),
                Patch::Html { html, .. } => page.set_html(&element, html),
                Patch::Items { items, .. } => page.replace_items(&element, items),
                Patch::Href { href, .. } => page.set_attribute(&element, "href", href),
            }
            report.applied += 1;
        }
        report
    }

    /// Fetch, render and apply in one go.
    ///
    /// # Errors
    ///
    /// Returns the source error after logging it; the page is left
    /// untouched in that case.
    pub async fn render_into<P: Page>(&self, page: &P) -> Result<RenderReport, FolioError> {
        let plan = self.plan().await.inspect_err(|err| {
            tracing::error!(error = %err, "unable to load profile document");
        })?;
        let report = Self::apply(page, &plan);
        tracing::info!(
            applied = report.applied,
            skipped = report.failures.len(),
            "profile rendered"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakePage, StaticProfileSource};
    use folio_domain::render::target;

    const DOCUMENT: &str = r#"{
        "name": "Ada Lovelace",
        "title": "Analyst",
        "education": [],
        "honors": [],
        "workingPapers": [],
        "Talks": [],
        "skills": {"dataScience": "Python"},
        "contact": {"email": "ada@example.com"}
    }"#;

    fn service(text: Option<&str>) -> RenderService<StaticProfileSource> {
        RenderService::new(
            StaticProfileSource(text.map(ToString::to_string)),
            RenderOptions::default(),
        )
    }

    fn shell() -> FakePage {
        FakePage::with_elements(&[
            target::NAME,
            target::TITLE,
            target::EDUCATION_LIST,
            target::HONORS_LIST,
            target::PAPERS_LIST,
            target::SKILLS_LIST,
            target::EMAIL_LINK,
        ])
    }

    #[tokio::test]
    async fn should_fill_name_and_empty_lists() {
        let page = shell();
        let report = service(Some(DOCUMENT)).render_into(&page).await.unwrap();

        assert_eq!(page.get(target::NAME).text.as_deref(), Some("Ada Lovelace"));
        assert_eq!(page.get(target::TITLE).text.as_deref(), Some("Analyst"));
        assert_eq!(page.get(target::EDUCATION_LIST).items, Some(Vec::new()));
        assert_eq!(page.get(target::PAPERS_LIST).items, Some(Vec::new()));
        assert_eq!(
            page.get(target::EMAIL_LINK).attributes.get("href").map(String::as_str),
            Some("mailto:ada@example.com")
        );
        assert!(report.failures.is_empty());
        assert!(report.missing_targets.contains(&target::FOOTER_TEXT));
    }

    #[tokio::test]
    async fn should_not_duplicate_entries_when_rendered_twice() {
        let page = shell();
        let svc = service(Some(DOCUMENT));
        svc.render_into(&page).await.unwrap();
        svc.render_into(&page).await.unwrap();

        let skills = page.get(target::SKILLS_LIST).items.unwrap();
        assert_eq!(skills.len(), 1);
    }

    #[tokio::test]
    async fn should_leave_page_untouched_when_fetch_fails() {
        let page = shell();
        let err = service(None).render_into(&page).await.unwrap_err();

        assert!(matches!(err, FolioError::Source(_)));
        assert_eq!(page.get(target::NAME).text, None);
    }

    #[tokio::test]
    async fn should_render_other_sections_when_one_is_malformed() {
        let page = shell();
        let text = r#"{"name": "A", "title": "B", "honors": "oops", "skills": {"sql": "yes"}}"#;
        let report = service(Some(text)).render_into(&page).await.unwrap();

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].section, "honors");
        assert_eq!(page.get(target::HONORS_LIST).items, None);
        assert!(page.get(target::SKILLS_LIST).items.is_some());
    }
}
