//! Page content
//!
//! Everything the page shows is plain data: a profile for the header, an
//! about paragraph, skill groups, projects and an experience list. The
//! built-in content is hand-authored; a YAML file of the same shape can
//! replace it (see [`loader`]).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub mod loader;

/// Kind of contact link shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Email,
    Github,
    Linkedin,
    Website,
}

impl LinkKind {
    /// Text glyph standing in for the icon
    pub fn glyph(&self) -> &'static str {
        match self {
            LinkKind::Email => "✉",
            LinkKind::Github => "⌥",
            LinkKind::Linkedin => "in",
            LinkKind::Website => "↗",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactLink {
    pub kind: LinkKind,
    pub label: String,
    pub href: String,
}

impl ContactLink {
    fn new(kind: LinkKind, label: &str, href: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
            href: href.to_string(),
        }
    }

    /// Non-mail links open in a new tab
    pub fn is_external(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub location: String,
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Project {
    pub name: String,
    #[serde(default = "default_project_url")]
    pub url: String,
    pub description: String,
    pub tech: Vec<String>,
}

fn default_project_url() -> String {
    "#".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub description: String,
}

/// All content rendered on the page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Content {
    pub profile: Profile,
    pub about: String,
    pub skill_groups: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static BUILTIN: Lazy<Content> = Lazy::new(|| Content {
    profile: Profile {
        name: "Susmita Yogi".to_string(),
        tagline: "Software Developer | Quality Assurance Engineer".to_string(),
        location: "Woodside, New York".to_string(),
        links: vec![
            ContactLink::new(LinkKind::Email, "Email", "mailto:yogisusmita99@gmail.com"),
            ContactLink::new(LinkKind::Github, "GitHub", "https://github.com"),
            ContactLink::new(LinkKind::Linkedin, "LinkedIn", "https://linkedin.com"),
        ],
    },
    about: "Computer Science graduate with experience in software development and quality assurance. \
            Passionate about creating efficient solutions and ensuring software quality. Currently working \
            in New York's hospitality sector while pursuing opportunities in technology."
        .to_string(),
    skill_groups: vec![
        SkillGroup {
            title: "Technical Skills".to_string(),
            skills: strings(&["Python", "Django", "MongoDB", "HTML", "CSS", "GitHub"]),
        },
        SkillGroup {
            title: "Professional Skills".to_string(),
            skills: strings(&[
                "Quality Assurance",
                "Project Management",
                "Team Collaboration",
                "Problem Solving",
                "Communication",
                "Time Management",
            ]),
        },
    ],
    projects: vec![Project {
        name: "Blood Bank Management System".to_string(),
        url: default_project_url(),
        description: "A comprehensive system built with Django and MongoDB to manage blood bank operations, \
                      donor records, and blood inventory tracking."
            .to_string(),
        tech: strings(&["Django", "MongoDB", "Python", "HTML/CSS"]),
    }],
    experience: vec![
        ExperienceEntry {
            title: "Hospitality Assistant".to_string(),
            company: "New York • Current".to_string(),
            description: "Managing customer service operations and utilizing organizational skills in a \
                          fast-paced environment."
                .to_string(),
        },
        ExperienceEntry {
            title: "QA Engineer".to_string(),
            company: "Swift Technologies".to_string(),
            description: "Performed comprehensive software testing and quality assurance procedures to ensure \
                          product reliability."
                .to_string(),
        },
        ExperienceEntry {
            title: "Django Developer Intern".to_string(),
            company: "Artificial Info Tech".to_string(),
            description: "Developed web applications using Django framework and contributed to database \
                          management."
                .to_string(),
        },
    ],
});

impl Default for Content {
    fn default() -> Self {
        BUILTIN.clone()
    }
}
