//! Projection of a [`ProfileDocument`] into page fragments.
//!
//! Rendering is pure: it produces a [`RenderPlan`], an ordered list of
//! [`Patch`]es addressed to container ids, for a page adapter to apply.
//! Every patch *replaces* the container's content, so applying the same
//! plan twice leaves the page unchanged.

mod sections;

use serde::Serialize;

use crate::profile::{ProfileDocument, Section};

/// Ids of the containers the host page must provide.
pub mod target {
    pub const NAME: &str = "name";
    pub const TITLE: &str = "title";
    pub const PROFILE_NAME: &str = "profile-name";
    pub const PROFILE_TITLE: &str = "profile-title";
    pub const ABOUT_TEXT: &str = "about-text";
    pub const EDUCATION_LIST: &str = "education-list";
    pub const RESEARCH_LIST: &str = "research-list";
    pub const HONORS_LIST: &str = "honors-list";
    pub const PAPERS_LIST: &str = "papers-list";
    pub const TALKS_LIST: &str = "talks-list";
    pub const SERVICES_CONTENT: &str = "services-content";
    pub const EXPERIENCE_LIST: &str = "experience-list";
    pub const COLLABORATION_LIST: &str = "collaboration-list";
    pub const PROJECTS_LIST: &str = "projects-list";
    pub const SKILLS_LIST: &str = "skills-list";
    pub const EMAIL_LINK: &str = "email-link";
    pub const LINKEDIN_LINK: &str = "linkedin-link";
    pub const TWITTER_LINK: &str = "twitter-link";
    pub const GITHUB_LINK: &str = "github-link";
    pub const FOOTER_TEXT: &str = "footer-text";
}

/// Id and class of the rendered link that opens the popover.
pub const POPOVER_TRIGGER_ID: &str = "techmemory-link";

/// Project links with this value are shown without a hyperlink.
pub const UNRELEASED_LINK: &str = "To be launched soon";

/// Knobs that are not part of the document itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Image shown before grant-like funding lines.
    pub award_icon: String,
    /// Project whose title opens the popover instead of an external URL.
    pub popover_project: String,
    /// Affiliations kept out of the bold part of an award name.
    pub plain_award_suffixes: Vec<String>,
    /// Badge shown after the profile title, if any.
    pub title_badge: Option<String>,
    /// Year printed in the footer notice.
    pub footer_year: i32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            award_icon: "award.svg".to_string(),
            popover_project: "TechMemory".to_string(),
            plain_award_suffixes: vec!["Carlson School of Management".to_string()],
            title_badge: Some("On the Job Market".to_string()),
            footer_year: 1970,
        }
    }
}

/// A single container update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Patch {
    /// Replace the container's text content.
    Text { target: &'static str, text: String },
    /// Replace the container's inner HTML.
    Html { target: &'static str, html: String },
    /// Replace the container's children with one `<li>` per entry.
    Items {
        target: &'static str,
        items: Vec<String>,
    },
    /// Set the `href` attribute of a link.
    Href { target: &'static str, href: String },
}

impl Patch {
    #[must_use]
    pub fn target(&self) -> &'static str {
        match self {
            Self::Text { target, .. }
            | Self::Html { target, .. }
            | Self::Items { target, .. }
            | Self::Href { target, .. } => target,
        }
    }
}

/// A document section that could not be decoded and was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionFailure {
    /// Field name as written in the document.
    pub section: &'static str,
    pub reason: String,
}

/// Everything needed to populate the page for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderPlan {
    pub patches: Vec<Patch>,
    pub failures: Vec<SectionFailure>,
}

impl RenderPlan {
    /// Patches addressed to `target`, in application order.
    pub fn patches_for<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a Patch> + 'a {
        self.patches.iter().filter(move |p| p.target() == target)
    }

    fn push(&mut self, patch: Patch) {
        self.patches.push(patch);
    }

    fn template_failed(&mut self, section: &'static str, err: &askama::Error) {
        self.failures.push(SectionFailure {
            section,
            reason: err.to_string(),
        });
    }

    fn push_html(
        &mut self,
        section: &'static str,
        target: &'static str,
        html: askama::Result<String>,
    ) {
        match html {
            Ok(html) => self.push(Patch::Html { target, html }),
            Err(err) => self.template_failed(section, &err),
        }
    }

    fn push_items(
        &mut self,
        section: &'static str,
        target: &'static str,
        items: askama::Result<Vec<String>>,
    ) {
        match items {
            Ok(items) => self.push(Patch::Items { target, items }),
            Err(err) => self.template_failed(section, &err),
        }
    }

    /// Record a malformed section, returning the decoded value otherwise.
    fn check<'d, T>(&mut self, name: &'static str, section: &'d Section<T>) -> Option<&'d T> {
        if let Some(reason) = section.malformed_reason() {
            self.failures.push(SectionFailure {
                section: name,
                reason: reason.to_string(),
            });
        }
        section.as_ref()
    }
}

/// Project `document` into container patches, in document order.
///
/// Absent sections produce no patch (their containers are left alone);
/// malformed sections, and sections whose template fails, are reported in
/// [`RenderPlan::failures`] and skipped.
#[must_use]
pub fn render(document: &ProfileDocument, options: &RenderOptions) -> RenderPlan {
    let mut plan = RenderPlan::default();

    plan.push(Patch::Text {
        target: target::NAME,
        text: document.name.clone(),
    });
    plan.push(Patch::Text {
        target: target::TITLE,
        text: document.title.clone(),
    });
    plan.push(Patch::Text {
        target: target::PROFILE_NAME,
        text: document.name.clone(),
    });
    plan.push_html(
        "title",
        target::PROFILE_TITLE,
        sections::profile_title(&document.title, options.title_badge.as_deref()),
    );

    if let Some(about) = plan.check("about me", &document.about_me) {
        plan.push(Patch::Html {
            target: target::ABOUT_TEXT,
            html: about.clone(),
        });
    }
    if let Some(education) = plan.check("education", &document.education) {
        plan.push_items(
            "education",
            target::EDUCATION_LIST,
            sections::education_items(education),
        );
    }
    if let Some(interests) = plan.check("researchInterests", &document.research_interests) {
        plan.push_items(
            "researchInterests",
            target::RESEARCH_LIST,
            sections::research_items(interests),
        );
    }
    if let Some(honors) = plan.check("honors", &document.honors) {
        let items = honors
            .iter()
            .map(|h| sections::honor_item(h, &options.plain_award_suffixes))
            .collect();
        plan.push_items("honors", target::HONORS_LIST, items);
    }
    if let Some(papers) = plan.check("workingPapers", &document.working_papers) {
        let items = papers
            .iter()
            .map(|p| sections::paper_item(p, &options.award_icon))
            .collect();
        plan.push_items("workingPapers", target::PAPERS_LIST, items);
    }

    let talks = plan.check("Talks", &document.talks);
    let teaching = plan.check("teaching", &document.teaching);
    if talks.is_some() || teaching.is_some() {
        plan.push_items(
            "Talks",
            target::TALKS_LIST,
            sections::talks_items(talks.map(Vec::as_slice), teaching),
        );
    }

    if let Some(service) = plan.check("service", &document.service) {
        plan.push_html(
            "service",
            target::SERVICES_CONTENT,
            sections::services_html(service),
        );
    }
    if let Some(experience) = plan.check("professionalExperience", &document.professional_experience)
    {
        let items = experience.iter().map(sections::experience_item).collect();
        plan.push_items("professionalExperience", target::EXPERIENCE_LIST, items);
    }
    if let Some(collaboration) =
        plan.check("industryCollaboration", &document.industry_collaboration)
    {
        plan.push_items(
            "industryCollaboration",
            target::COLLABORATION_LIST,
            sections::collaboration_items(collaboration),
        );
    }
    if let Some(projects) = plan.check("industryProjects", &document.industry_projects) {
        plan.push_items(
            "industryProjects",
            target::PROJECTS_LIST,
            sections::project_items(projects, &options.popover_project),
        );
    }
    if let Some(skills) = plan.check("skills", &document.skills) {
        plan.push_items(
            "skills",
            target::SKILLS_LIST,
            sections::skill_items(skills.iter()),
        );
    }
    if let Some(contact) = plan.check("contact", &document.contact) {
        for patch in sections::contact_patches(contact) {
            plan.push(patch);
        }
    }

    plan.push(Patch::Text {
        target: target::FOOTER_TEXT,
        text: format!(
            "\u{00A9} {} {}. All rights reserved.",
            options.footer_year, document.name
        ),
    });

    plan
}
