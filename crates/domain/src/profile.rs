//! Profile Document — the read-only JSON content rendered into the page.
//!
//! `name` and `title` are required. Every other top-level field is a
//! [`Section`] decoded independently of its siblings.

mod lenient;
mod section;
mod skills;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, ValidationError};

pub use section::Section;
pub use skills::{SkillCategory, Skills};

/// The whole portfolio content, as supplied by `personal_info.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileDocument {
    pub name: String,
    pub title: String,
    #[serde(rename = "about me", default, skip_serializing_if = "Section::is_absent")]
    pub about_me: Section<String>,
    #[serde(default, skip_serializing_if = "Section::is_absent")]
    pub education: Section<Vec<Education>>,
    #[serde(rename = "researchInterests", default, skip_serializing_if = "Section::is_absent")]
    pub research_interests: Section<ResearchInterests>,
    #[serde(default, skip_serializing_if = "Section::is_absent")]
    pub honors: Section<Vec<Honor>>,
    #[serde(rename = "workingPapers", default, skip_serializing_if = "Section::is_absent")]
    pub working_papers: Section<Vec<WorkingPaper>>,
    #[serde(rename = "Talks", default, skip_serializing_if = "Section::is_absent")]
    pub talks: Section<Vec<Talk>>,
    #[serde(default, skip_serializing_if = "Section::is_absent")]
    pub teaching: Section<Teaching>,
    #[serde(default, skip_serializing_if = "Section::is_absent")]
    pub service: Section<Service>,
    #[serde(
        rename = "professionalExperience",
        default,
        skip_serializing_if = "Section::is_absent"
    )]
    pub professional_experience: Section<Vec<Experience>>,
    #[serde(
        rename = "industryCollaboration",
        default,
        skip_serializing_if = "Section::is_absent"
    )]
    pub industry_collaboration: Section<IndustryCollaboration>,
    #[serde(rename = "industryProjects", default, skip_serializing_if = "Section::is_absent")]
    pub industry_projects: Section<IndustryProjects>,
    #[serde(default, skip_serializing_if = "Section::is_absent")]
    pub skills: Section<Skills>,
    #[serde(default, skip_serializing_if = "Section::is_absent")]
    pub contact: Section<Contact>,
}

impl ProfileDocument {
    /// Decode a document from JSON text and check its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Parse`] when the text is not a JSON object with
    /// string `name` and `title`, or [`FolioError::Validation`] when either
    /// is blank.
    pub fn from_json(text: &str) -> Result<Self, FolioError> {
        let document: Self = serde_json::from_str(text)?;
        document.validate()?;
        Ok(document)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] when `name` or `title` is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(deserialize_with = "lenient::text")]
    pub year: String,
    pub degree: String,
    pub field: String,
    pub institution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchInterests {
    #[serde(rename = "Topics")]
    pub topics: String,
    #[serde(rename = "Methodologies")]
    pub methodologies: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Honor {
    #[serde(deserialize_with = "lenient::text")]
    pub year: String,
    pub award: String,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub amount: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingPaper {
    pub title: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient::one_or_many")]
    pub authors: Vec<String>,
    #[serde(default)]
    pub funding: Option<String>,
    #[serde(default, deserialize_with = "lenient::one_or_many")]
    pub presentations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talk {
    #[serde(deserialize_with = "lenient::text")]
    pub year: String,
    pub authors: String,
    pub title: String,
    pub event: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Teaching {
    #[serde(default)]
    pub instructor: Vec<Course>,
    #[serde(rename = "guestLectures", default)]
    pub guest_lectures: Vec<GuestLecture>,
}

/// A course taught as instructor of record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course: String,
    pub level: String,
    /// `"Season YYYY"` strings.
    #[serde(default, deserialize_with = "lenient::one_or_many")]
    pub terms: Vec<String>,
    #[serde(default, deserialize_with = "lenient::one_or_many")]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestLecture {
    pub term: String,
    pub topic: String,
    pub audience: String,
    #[serde(default)]
    pub pdf: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "journalReferee", default)]
    pub journal_referee: Vec<ServiceEntry>,
    #[serde(rename = "conferenceReferee", default)]
    pub conference_referee: Vec<ServiceEntry>,
    #[serde(default)]
    pub other: Vec<ServiceEntry>,
}

/// A service entry; the name field is `journal`, `conference` or `role`
/// depending on the list it appears in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    #[serde(alias = "journal", alias = "conference", alias = "role")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(deserialize_with = "lenient::text")]
    pub year: String,
    pub role: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "work for", default)]
    pub work_for: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndustryCollaboration {
    #[serde(default)]
    pub introduction: Option<String>,
    pub companies: Vec<Company>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub company: String,
    pub link: String,
    pub domain: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndustryProjects {
    #[serde(default)]
    pub introduction: Option<String>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "Project")]
    pub name: String,
    pub role: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(rename = "X/twitter", default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}
