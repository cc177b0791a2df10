// System prompts and prompt composition for the two endpoints.
// Follows the per-module prompts.rs convention; handlers own no prompt text.

use anyhow::{Context, Result};
use serde_json::json;

use crate::portfolio::models::Project;
use crate::portfolio::store::PortfolioStore;

/// System instructions for the general chat endpoint.
pub const CHAT_SYSTEM: &str = "You are an AI assistant representing a portfolio website. \
    Answer questions about the portfolio owner's background, projects, skills, and experience \
    based ONLY on the provided portfolio data. Be professional, technical, and precise.";

/// System instructions for the project Q&A endpoint.
pub const PROJECT_QA_SYSTEM: &str = "You are an AI assistant specialized in answering technical \
    questions about specific software projects. Explain projects like a senior engineer—focusing \
    on architecture, technical decisions, challenges, and implementation details.";

/// Composes the chat system text: instructions plus the full serialized store.
pub fn chat_system(store: &PortfolioStore) -> Result<String> {
    let data = serde_json::to_string_pretty(&json!({
        "about": store.about(),
        "projects": store.projects(),
        "resume": store.resume(),
    }))
    .context("Failed to serialize portfolio data")?;
    Ok(format!("{CHAT_SYSTEM}\n\nPortfolio Data:\n{data}"))
}

/// Composes the project-Q&A system text over the in-scope projects only:
/// the single matching project when an id was given, else the whole list.
pub fn project_qa_system(projects: &[&Project]) -> Result<String> {
    let data =
        serde_json::to_string_pretty(projects).context("Failed to serialize project data")?;
    Ok(format!("{PROJECT_QA_SYSTEM}\n\nProjects:\n{data}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::models::{AboutProfile, Resume, SkillGroups};

    fn make_store() -> PortfolioStore {
        let about = AboutProfile {
            name: "Ada Example".to_string(),
            title: "Backend Engineer".to_string(),
            location: "Berlin".to_string(),
            bio: "Builds servers.".to_string(),
            email: None,
            skills: SkillGroups::default(),
            education: vec![],
            interests: vec![],
            linkedin: None,
            github: None,
            leetcode: None,
            code360: None,
        };
        let project = Project {
            id: "demo".to_string(),
            title: "Demo".to_string(),
            description: "A demo.".to_string(),
            technologies: vec!["Rust".to_string()],
            features: vec![],
            github: None,
            live: None,
            category: "web".to_string(),
            year: None,
            company: None,
            domain: None,
        };
        PortfolioStore::new(about, Resume::default(), vec![project]).unwrap()
    }

    #[test]
    fn test_chat_system_embeds_all_three_sections() {
        let store = make_store();
        let system = chat_system(&store).unwrap();
        assert!(system.starts_with(CHAT_SYSTEM));
        assert!(system.contains("Portfolio Data:"));
        assert!(system.contains("\"about\""));
        assert!(system.contains("\"projects\""));
        assert!(system.contains("\"resume\""));
        assert!(system.contains("Ada Example"));
    }

    #[test]
    fn test_project_qa_system_embeds_scoped_projects() {
        let store = make_store();
        let scoped: Vec<&Project> = vec![store.project("demo").unwrap()];
        let system = project_qa_system(&scoped).unwrap();
        assert!(system.starts_with(PROJECT_QA_SYSTEM));
        assert!(system.contains("Projects:"));
        assert!(system.contains("\"id\": \"demo\""));
    }
}
