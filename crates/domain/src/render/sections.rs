//! Fragment builders, one per document section.
//!
//! Every fragment is an askama template under `templates/`. Document text is
//! trusted HTML and written as is; only URL attributes are escaped.

use askama::Template;

use crate::profile::{
    Company, Contact, Course, Education, Experience, GuestLecture, Honor, IndustryCollaboration,
    IndustryProjects, Project, ResearchInterests, Service, ServiceEntry, SkillCategory, Talk,
    Teaching, WorkingPaper,
};
use crate::term::format_terms;
use crate::text::{humanize_key, is_grant_funding, newlines_to_br};

use super::{POPOVER_TRIGGER_ID, Patch, UNRELEASED_LINK, target};

#[derive(Template)]
#[template(path = "profile_title.html", escape = "none")]
struct ProfileTitle<'a> {
    title: &'a str,
    badge: Option<&'a str>,
}

pub(super) fn profile_title(title: &str, badge: Option<&str>) -> askama::Result<String> {
    ProfileTitle { title, badge }.render()
}

#[derive(Template)]
#[template(path = "education_item.html", escape = "none")]
struct EducationItem<'a> {
    edu: &'a Education,
}

pub(super) fn education_items(education: &[Education]) -> askama::Result<Vec<String>> {
    education
        .iter()
        .map(|edu| EducationItem { edu }.render())
        .collect()
}

#[derive(Template)]
#[template(path = "research_item.html", escape = "none")]
struct ResearchItem<'a> {
    category: &'a str,
    content: &'a str,
}

pub(super) fn research_items(interests: &ResearchInterests) -> askama::Result<Vec<String>> {
    [
        ("Topics", interests.topics.as_str()),
        ("Methodologies", interests.methodologies.as_str()),
    ]
    .into_iter()
    .map(|(category, content)| ResearchItem { category, content }.render())
    .collect()
}

/// Split an award name into its bold part and a trailing plain affiliation.
fn split_award<'a>(award: &'a str, plain_suffixes: &'a [String]) -> (&'a str, Option<&'a str>) {
    for suffix in plain_suffixes {
        if let Some((head, _)) = award.split_once(&format!(", {suffix}")) {
            return (head, Some(suffix.as_str()));
        }
    }
    (award, None)
}

#[derive(Template)]
#[template(path = "honor_item.html", escape = "none")]
struct HonorItem<'a> {
    honor: &'a Honor,
    award: &'a str,
    affiliation: Option<&'a str>,
    amount: Option<&'a str>,
    description: Option<&'a str>,
}

pub(super) fn honor_item(honor: &Honor, plain_suffixes: &[String]) -> askama::Result<String> {
    let (award, affiliation) = split_award(&honor.award, plain_suffixes);
    HonorItem {
        honor,
        award,
        affiliation,
        amount: honor.amount.as_deref(),
        description: honor.description.as_deref(),
    }
    .render()
}

#[derive(Template)]
#[template(path = "paper_item.html", escape = "none")]
struct PaperItem<'a> {
    paper: &'a WorkingPaper,
    status: Option<&'a str>,
    link: Option<&'a str>,
    authors: String,
    funding: Option<&'a str>,
    grant: bool,
    award_icon: &'a str,
    presentations: String,
}

pub(super) fn paper_item(paper: &WorkingPaper, award_icon: &str) -> askama::Result<String> {
    let funding = paper.funding.as_deref();
    PaperItem {
        paper,
        status: paper.status.as_deref(),
        link: paper.link.as_deref(),
        authors: paper.authors.join(", "),
        funding,
        grant: funding.is_some_and(is_grant_funding),
        award_icon,
        presentations: paper.presentations.join(", "),
    }
    .render()
}

#[derive(Template)]
#[template(path = "talk_category.html", escape = "none")]
struct TalkCategory<'a> {
    label: &'a str,
}

#[derive(Template)]
#[template(path = "talk_item.html", escape = "none")]
struct TalkItem<'a> {
    talk: &'a Talk,
}

#[derive(Template)]
#[template(path = "course_item.html", escape = "none")]
struct CourseItem<'a> {
    course: &'a Course,
    terms: String,
}

fn course_item(course: &Course) -> askama::Result<String> {
    CourseItem {
        course,
        terms: format_terms(&course.terms),
    }
    .render()
}

#[derive(Template)]
#[template(path = "guest_lecture_item.html", escape = "none")]
struct GuestLectureItem<'a> {
    lecture: &'a GuestLecture,
    term: String,
    pdf: Option<&'a str>,
}

fn guest_lecture_item(lecture: &GuestLecture) -> askama::Result<String> {
    GuestLectureItem {
        lecture,
        term: format_terms(std::slice::from_ref(&lecture.term)),
        pdf: lecture.pdf.as_deref(),
    }
    .render()
}

/// Conferences, instructor roles and guest lectures share one list; each
/// non-empty group is introduced by a category heading item.
pub(super) fn talks_items(
    talks: Option<&[Talk]>,
    teaching: Option<&Teaching>,
) -> askama::Result<Vec<String>> {
    let mut items = Vec::new();
    if let Some(talks) = talks.filter(|t| !t.is_empty()) {
        items.push(TalkCategory { label: "CONFERENCES" }.render()?);
        for talk in talks {
            items.push(TalkItem { talk }.render()?);
        }
    }
    if let Some(teaching) = teaching {
        if !teaching.instructor.is_empty() {
            items.push(TalkCategory { label: "INSTRUCTOR" }.render()?);
            for course in &teaching.instructor {
                items.push(course_item(course)?);
            }
        }
        if !teaching.guest_lectures.is_empty() {
            items.push(TalkCategory { label: "GUEST LECTURES" }.render()?);
            for lecture in &teaching.guest_lectures {
                items.push(guest_lecture_item(lecture)?);
            }
        }
    }
    Ok(items)
}

struct ServiceGroup<'a> {
    heading: &'static str,
    entries: &'a [ServiceEntry],
}

#[derive(Template)]
#[template(path = "services.html", escape = "none")]
struct ServicesBlock<'a> {
    groups: Vec<ServiceGroup<'a>>,
}

pub(super) fn services_html(service: &Service) -> askama::Result<String> {
    let groups = [
        ("Journal Referee", service.journal_referee.as_slice()),
        ("Conference Referee", service.conference_referee.as_slice()),
        ("Other Services", service.other.as_slice()),
    ]
    .into_iter()
    .filter(|(_, entries)| !entries.is_empty())
    .map(|(heading, entries)| ServiceGroup { heading, entries })
    .collect();
    ServicesBlock { groups }.render()
}

#[derive(Template)]
#[template(path = "experience_item.html", escape = "none")]
struct ExperienceItem<'a> {
    exp: &'a Experience,
    work_for: Option<&'a str>,
}

pub(super) fn experience_item(exp: &Experience) -> askama::Result<String> {
    ExperienceItem {
        exp,
        work_for: exp.work_for.as_deref(),
    }
    .render()
}

#[derive(Template)]
#[template(path = "company_item.html", escape = "none")]
struct CompanyItem<'a> {
    company: &'a Company,
}

pub(super) fn collaboration_items(
    collaboration: &IndustryCollaboration,
) -> askama::Result<Vec<String>> {
    collaboration
        .introduction
        .iter()
        .cloned()
        .map(Ok)
        .chain(
            collaboration
                .companies
                .iter()
                .map(|company| CompanyItem { company }.render()),
        )
        .collect()
}

/// How a project title links out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProjectTitle<'a> {
    Popover,
    Link(&'a str),
    Plain,
}

#[derive(Template)]
#[template(path = "project_item.html", escape = "none")]
struct ProjectItem<'a> {
    project: &'a Project,
    title: ProjectTitle<'a>,
    trigger: &'static str,
}

fn project_item(project: &Project, popover_project: &str) -> askama::Result<String> {
    let title = if project.name == popover_project {
        ProjectTitle::Popover
    } else {
        match project.link.as_deref() {
            Some(link) if link != UNRELEASED_LINK => ProjectTitle::Link(link),
            _ => ProjectTitle::Plain,
        }
    };
    let html = ProjectItem {
        project,
        title,
        trigger: POPOVER_TRIGGER_ID,
    }
    .render()?;
    Ok(newlines_to_br(&html))
}

pub(super) fn project_items(
    projects: &IndustryProjects,
    popover_project: &str,
) -> askama::Result<Vec<String>> {
    projects
        .introduction
        .iter()
        .cloned()
        .map(Ok)
        .chain(
            projects
                .projects
                .iter()
                .map(|project| project_item(project, popover_project)),
        )
        .collect()
}

#[derive(Template)]
#[template(path = "skill_item.html", escape = "none")]
struct SkillItem<'a> {
    heading: String,
    category: &'a SkillCategory,
}

pub(super) fn skill_items<'a>(
    skills: impl IntoIterator<Item = &'a SkillCategory>,
) -> askama::Result<Vec<String>> {
    skills
        .into_iter()
        .map(|category| {
            SkillItem {
                heading: humanize_key(&category.key),
                category,
            }
            .render()
        })
        .collect()
}

pub(super) fn contact_patches(contact: &Contact) -> Vec<Patch> {
    let links = [
        (target::EMAIL_LINK, contact.email.as_ref().map(|e| format!("mailto:{e}"))),
        (target::LINKEDIN_LINK, contact.linkedin.clone()),
        (target::TWITTER_LINK, contact.twitter.clone()),
        (target::GITHUB_LINK, contact.github.clone()),
    ];
    links
        .into_iter()
        .filter_map(|(target, href)| href.map(|href| Patch::Href { target, href }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(funding: Option<&str>) -> WorkingPaper {
        WorkingPaper {
            title: "On Rust".to_string(),
            status: Some("R&R at MISQ".to_string()),
            link: Some("https://ssrn.com/1".to_string()),
            authors: vec!["A".to_string(), "B".to_string()],
            funding: funding.map(ToString::to_string),
            presentations: vec!["ICIS 2023".to_string(), "WISE 2023".to_string()],
        }
    }

    #[test]
    fn should_prefix_award_icon_for_grant_funding() {
        let html = paper_item(&paper(Some("NSF Grant #123")), "award.svg").unwrap();
        assert!(html.contains(
            r#"<br><img src="award.svg" class="award-icon" alt="Award icon"> NSF Grant #123"#
        ));
    }

    #[test]
    fn should_not_prefix_icon_for_other_funding() {
        let html = paper_item(&paper(Some("Self-funded")), "award.svg").unwrap();
        assert!(html.contains("<br>Self-funded"));
        assert!(!html.contains("award-icon"));
    }

    #[test]
    fn should_render_full_paper_line() {
        let html = paper_item(&paper(None), "award.svg").unwrap();
        assert_eq!(
            html,
            "\u{2022} <strong>On Rust</strong> <em>R&R at MISQ</em>&nbsp;&nbsp;&nbsp;<a href=\"https://ssrn.com/1\" target=\"_blank\">Read More</a><br><em>A, B</em><br>ICIS 2023, WISE 2023"
        );
    }

    #[test]
    fn should_keep_affiliation_plain_in_award() {
        let suffixes = vec!["Carlson School of Management".to_string()];
        let honor = Honor {
            year: "2023".to_string(),
            award: "Dean's Fellowship, Carlson School of Management".to_string(),
            amount: Some("$5,000".to_string()),
            description: Some("For research".to_string()),
        };
        assert_eq!(
            honor_item(&honor, &suffixes).unwrap(),
            r#"<span class="year">2023</span><span class="details"><strong>Dean's Fellowship</strong>, Carlson School of Management $5,000<br>For research</span>"#
        );
    }

    #[test]
    fn should_bold_whole_award_without_affiliation() {
        assert_eq!(split_award("Best Paper", &[]), ("Best Paper", None));
        let honor = Honor {
            year: "2021".to_string(),
            award: "Best Paper".to_string(),
            amount: None,
            description: None,
        };
        assert_eq!(
            honor_item(&honor, &[]).unwrap(),
            r#"<span class="year">2021</span><span class="details"><strong>Best Paper</strong></span>"#
        );
    }

    #[test]
    fn should_escape_quotes_in_link_attributes() {
        let mut paper = paper(None);
        paper.link = Some(r#"https://a.b/?q="x"&y=<z>"#.to_string());
        let html = paper_item(&paper, "award.svg").unwrap();
        assert!(html.contains(r#"<a href="https://a.b/?q="#));
        assert!(!html.contains(r#"q="x""#));
        assert!(!html.contains("<z>"));
    }

    #[test]
    fn should_group_services_under_headings() {
        let service = Service {
            journal_referee: vec![ServiceEntry {
                name: "MISQ".to_string(),
                period: "2023".to_string(),
            }],
            conference_referee: vec![],
            other: vec![ServiceEntry {
                name: "Organizer".to_string(),
                period: "2022".to_string(),
            }],
        };
        assert_eq!(
            services_html(&service).unwrap(),
            "<h3>Journal Referee</h3><ul><li>MISQ (2023)</li></ul><h3>Other Services</h3><ul><li>Organizer (2022)</li></ul>"
        );
    }

    #[test]
    fn should_add_working_for_line() {
        let exp = Experience {
            year: "2019".to_string(),
            role: "Analyst".to_string(),
            company: "Acme".to_string(),
            location: "NYC".to_string(),
            work_for: Some("Client".to_string()),
        };
        assert!(experience_item(&exp).unwrap().ends_with("NYC<br>Working for: Client</span>"));
    }

    #[test]
    fn should_put_introduction_first() {
        let collaboration = IndustryCollaboration {
            introduction: Some("We work with:".to_string()),
            companies: vec![crate::profile::Company {
                company: "Acme".to_string(),
                link: "https://acme.test".to_string(),
                domain: "Retail".to_string(),
            }],
        };
        let items = collaboration_items(&collaboration).unwrap();
        assert_eq!(items[0], "We work with:");
        assert_eq!(
            items[1],
            "\u{2022} <strong><a href=\"https://acme.test\" target=\"_blank\">Acme</a></strong> (Retail)"
        );
    }

    #[test]
    fn should_render_course_notes() {
        let course = Course {
            course: "Databases".to_string(),
            level: "MSBA".to_string(),
            terms: vec!["Fall 2023".to_string()],
            notes: vec!["Rating 4.8/5".to_string()],
        };
        assert_eq!(
            course_item(&course).unwrap(),
            r#"<div class="teaching-course"><div class="course-terms"><span class="term-year">2023</span> Fall</div><div class="course-details"><strong>Databases</strong> (MSBA)<br><span class="course-note">Rating 4.8/5</span></div></div>"#
        );
    }
}
