//! Load-once portfolio data store, read-only for the process lifetime.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::portfolio::models::{AboutProfile, Project, Resume};

/// The static portfolio content backing every answer. Loaded at startup from
/// three JSON files in the data directory and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PortfolioStore {
    about: AboutProfile,
    resume: Resume,
    projects: Vec<Project>,
}

impl PortfolioStore {
    /// Builds a store from already-parsed records, enforcing unique project ids.
    pub fn new(about: AboutProfile, resume: Resume, projects: Vec<Project>) -> Result<Self> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id.as_str()) {
                bail!("Duplicate project id '{}' in projects data", project.id);
            }
        }
        Ok(Self {
            about,
            resume,
            projects,
        })
    }

    /// Reads `about.json`, `resume.json`, and `projects.json` from `data_dir`.
    pub fn load(data_dir: &str) -> Result<Self> {
        let dir = Path::new(data_dir);
        let about = read_json(&dir.join("about.json"))?;
        let resume = read_json(&dir.join("resume.json"))?;
        let projects = read_json(&dir.join("projects.json"))?;
        Self::new(about, resume, projects)
    }

    pub fn about(&self) -> &AboutProfile {
        &self.about
    }

    pub fn resume(&self) -> &Resume {
        &self.resume
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Looks up a project by id. Absence is a defined outcome, not an error.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}
