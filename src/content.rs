use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::motion::MotionConfig;

pub const DEFAULT_PROJECT_IMAGE: &str = "/default-project-image.jpg";
pub const DEFAULT_PROJECT_TITLE: &str = "Project Title";
pub const DEFAULT_PROJECT_DESCRIPTION: &str = "This is a brief description of the project.";

static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| load_or_default("projects.json"));
static TECHS: LazyLock<Vec<Tech>> = LazyLock::new(|| load_or_default("techs.json"));
static CERTIFICATES: LazyLock<Vec<Certificate>> =
    LazyLock::new(|| load_or_default("certificates.json"));
static PROFILE: LazyLock<Profile> = LazyLock::new(|| load_or_default("site.json"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

/// A scrollable region of the page and its navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
}

pub const SECTIONS: [Section; 5] = [
    Section {
        id: "home",
        title: "Home",
    },
    Section {
        id: "certificates",
        title: "Certificates",
    },
    Section {
        id: "projects",
        title: "Projects",
    },
    Section {
        id: "techstack",
        title: "Tech Stack",
    },
    Section {
        id: "contact",
        title: "Contact",
    },
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl Project {
    pub fn title(&self) -> &str {
        non_empty(&self.title).unwrap_or(DEFAULT_PROJECT_TITLE)
    }

    pub fn image(&self) -> &str {
        non_empty(&self.image).unwrap_or(DEFAULT_PROJECT_IMAGE)
    }

    pub fn description(&self) -> &str {
        non_empty(&self.description).unwrap_or(DEFAULT_PROJECT_DESCRIPTION)
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tech {
    pub name: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub src: String,
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Linkedin,
    Twitter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub kind: SocialKind,
    pub href: String,
}

/// Owner details and site-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub owner: String,
    pub first_name: String,
    pub tagline: String,
    pub tagline_highlight: String,
    pub tagline_tail: String,
    pub email: String,
    pub background_video: String,
    pub socials: Vec<Social>,
    pub motion: MotionConfig,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse {file}: {reason}")]
    ParseError { file: String, reason: String },
}

pub fn load<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|e| ContentError::ParseError {
        file: name.to_string(),
        reason: e.to_string(),
    })
}

fn load_or_default<T: DeserializeOwned + Default>(name: &str) -> T {
    load(name).unwrap_or_else(|e| {
        log::error!("{e}");
        T::default()
    })
}

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn techs() -> &'static [Tech] {
    &TECHS
}

pub fn certificates() -> &'static [Certificate] {
    &CERTIFICATES
}

pub fn profile() -> &'static Profile {
    &PROFILE
}

/// Splits `items` into rows of `size`, the last row possibly shorter.
pub fn rows<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    items.chunks(size.max(1)).map(|c| c.to_vec()).collect()
}
