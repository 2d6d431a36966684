//! The page component tree
//!
//! A [`Page`] is built once from [`Content`] and a year. Each section is a
//! pure mapping of its input list to rows, in input order.

use chrono::{Datelike, Local};
use serde::Serialize;

use crate::content::{ContactLink, Content, ExperienceEntry, Project, SkillGroup};

pub mod layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    About,
    Skills,
    Projects,
    Experience,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::About => "About Me",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
            SectionKind::Experience => "Experience",
        }
    }

    /// Anchor id used in the rendered document
    pub fn id(&self) -> &'static str {
        match self {
            SectionKind::About => "about",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Experience => "experience",
        }
    }

    /// Children animate in one after another
    pub fn is_staggered(&self) -> bool {
        matches!(self, SectionKind::Skills | SectionKind::Experience)
    }
}

/// A card within a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Row {
    Paragraph { text: String },
    Card(Card),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub rows: Vec<Row>,
}

impl Section {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

pub fn about_section(about: &str) -> Section {
    Section {
        kind: SectionKind::About,
        rows: vec![Row::Paragraph {
            text: about.to_string(),
        }],
    }
}

pub fn skills_section(groups: &[SkillGroup]) -> Section {
    let rows = groups
        .iter()
        .map(|group| {
            Row::Card(Card {
                heading: group.title.clone(),
                subheading: None,
                body: None,
                link: None,
                tags: group.skills.clone(),
            })
        })
        .collect();
    Section {
        kind: SectionKind::Skills,
        rows,
    }
}

pub fn projects_section(projects: &[Project]) -> Section {
    let rows = projects
        .iter()
        .map(|project| {
            Row::Card(Card {
                heading: project.name.clone(),
                subheading: None,
                body: Some(project.description.clone()),
                link: Some(project.url.clone()),
                tags: project.tech.clone(),
            })
        })
        .collect();
    Section {
        kind: SectionKind::Projects,
        rows,
    }
}

pub fn experience_section(entries: &[ExperienceEntry]) -> Section {
    let rows = entries
        .iter()
        .map(|job| {
            Row::Card(Card {
                heading: job.title.clone(),
                subheading: Some(job.company.clone()),
                body: Some(job.description.clone()),
                link: None,
                tags: Vec::new(),
            })
        })
        .collect();
    Section {
        kind: SectionKind::Experience,
        rows,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub name: String,
    pub tagline: String,
    pub location: String,
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub year: i32,
    pub owner: String,
}

impl Footer {
    pub fn text(&self) -> String {
        format!("© {} {}. All rights reserved.", self.year, self.owner)
    }
}

/// The whole page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub header: Header,
    pub sections: Vec<Section>,
    pub footer: Footer,
}

impl Page {
    pub fn build(content: &Content, year: i32) -> Self {
        let profile = &content.profile;
        Self {
            header: Header {
                name: profile.name.clone(),
                tagline: profile.tagline.clone(),
                location: profile.location.clone(),
                links: profile.links.clone(),
            },
            sections: vec![
                about_section(&content.about),
                skills_section(&content.skill_groups),
                projects_section(&content.projects),
                experience_section(&content.experience),
            ],
            footer: Footer {
                year,
                owner: profile.name.clone(),
            },
        }
    }
}

/// Calendar year at render time
pub fn current_year() -> i32 {
    Local::now().year()
}
