//! Keyword responder — the deterministic, credential-free fallback.
//!
//! Pure functions of (question, data store, optional project id). Rules are
//! ordered substring checks over the lowercased question; the first matching
//! rule wins and ties go to list order, not specificity. Missing optional
//! fields render as "N/A" or are omitted, never fail.

use crate::portfolio::models::Project;
use crate::portfolio::store::PortfolioStore;

const PROJECT_NOT_FOUND_TEXT: &str = "I couldn't find that project in my portfolio data.";

/// Answers a general portfolio question without any provider call.
pub fn chat_reply(question: &str, store: &PortfolioStore) -> String {
    let q = question.to_lowercase();
    let about = store.about();

    if ["hi", "hello", "hey", "greetings"]
        .iter()
        .any(|g| q.starts_with(g))
    {
        return format!(
            "Hello! I'm the portfolio assistant. I can tell you about {}'s skills, \
             experience, projects, and background. What would you like to know?",
            about.name
        );
    }

    if q.contains("skill") || q.contains("technology") || q.contains("tech stack") {
        let skills = &about.skills;
        return format!(
            "Here are my key skills:\n\n**Languages:** {}\n\n**Frameworks:** {}\n\n\
             **Tools:** {}\n\n**AI/ML:** {}\n\n\
             Would you like more details about any specific skill?",
            join_or_na(&skills.languages),
            join_or_na(&skills.frameworks),
            join_or_na(&skills.tools),
            join_or_na(&skills.ai_ml),
        );
    }

    if q.contains("experience") || q.contains("work") || q.contains("job") || q.contains("company")
    {
        let entries: Vec<String> = store
            .resume()
            .experience
            .iter()
            .map(|e| {
                format!(
                    "• **{}** at {}\n  {}\n  {}",
                    e.position, e.company, e.duration, e.description
                )
            })
            .collect();
        let listing = if entries.is_empty() {
            "No experience listed".to_string()
        } else {
            entries.join("\n\n")
        };
        return format!("Here's my work experience:\n\n{listing}");
    }

    if q.contains("education")
        || q.contains("degree")
        || q.contains("university")
        || q.contains("college")
    {
        let entries: Vec<String> = store
            .resume()
            .education
            .iter()
            .map(|e| format!("• **{}** at {}\n  {}", e.degree, e.institution, e.duration))
            .collect();
        let listing = if entries.is_empty() {
            "No education listed".to_string()
        } else {
            entries.join("\n\n")
        };
        return format!("Here's my education:\n\n{listing}");
    }

    if q.contains("project") || q.contains("built") || q.contains("made") {
        return format!(
            "Here are my projects:\n\n{}",
            all_projects_listing(store.projects())
        );
    }

    if q.contains("contact") || q.contains("email") || q.contains("reach") {
        let email = about
            .email
            .as_deref()
            .unwrap_or("the email listed in the contact section");
        return format!(
            "You can reach me through the contact form on this website, or via email at {email}."
        );
    }

    "I can help you learn more about my portfolio! Ask me about:\n\n\
     • My **skills** and technologies\n\
     • My **experience** and work history\n\
     • My **projects** and what I've built\n\
     • My **education** background\n\
     • How to **contact** me\n\n\
     What would you like to know?"
        .to_string()
}

/// Answers a project question. With an id the answer is scoped to that single
/// project; without one it covers the whole collection.
pub fn project_reply(question: &str, project_id: Option<&str>, store: &PortfolioStore) -> String {
    let q = question.to_lowercase();

    let project = match project_id {
        Some(id) => match store.project(id) {
            Some(p) => Some(p),
            None => return PROJECT_NOT_FOUND_TEXT.to_string(),
        },
        None => None,
    };

    if let Some(project) = project {
        // "tech" also covers "technology" / "technologies"
        if q.contains("tech")
            || q.contains("stack")
            || q.contains("built with")
            || q.contains("languages")
        {
            let stack = if project.technologies.is_empty() {
                "No technologies listed".to_string()
            } else {
                bullet_list(&project.technologies)
            };
            let github = project
                .github
                .as_deref()
                .map(|g| format!("\n\nGitHub: {g}"))
                .unwrap_or_default();
            return format!("**{}** was built using:\n\n{stack}{github}", project.title);
        }

        if q.contains("what is") || q.contains("about") || q.contains("description") {
            let description = if project.description.is_empty() {
                "No description available."
            } else {
                project.description.as_str()
            };
            return format!("**{}**\n\n{description}", project.title);
        }

        if q.contains("feature") || q.contains("what does") || q.contains("can do") {
            if project.features.is_empty() {
                return format!("No feature information available for {}.", project.title);
            }
            return format!(
                "**Features of {}:**\n\n{}",
                project.title,
                bullet_list(&project.features)
            );
        }

        if q.contains("company")
            || q.contains("work")
            || q.contains("where")
            || q.contains("workplace")
        {
            let year = project.year.as_deref().unwrap_or("N/A");
            return match &project.company {
                Some(company) => {
                    let domain = project
                        .domain
                        .as_deref()
                        .map(|d| format!("\n\nDomain: {d}"))
                        .unwrap_or_default();
                    format!(
                        "**{}** was built at **{company}** ({year}).{domain}",
                        project.title
                    )
                }
                None => format!("**{}** was built in {year}.", project.title),
            };
        }

        return project_summary(project);
    }

    if q.contains("all project") || q.contains("list") || q.contains("show me") {
        return format!(
            "Here are all my projects:\n\n{}",
            all_projects_listing(store.projects())
        );
    }

    "I can answer questions about specific projects. Try asking:\n\n\
     • \"Tell me about [project name]\"\n\
     • \"What technologies were used in [project name]?\"\n\
     • \"What features does [project name] have?\"\n\
     • \"Where did you build [project name]?\"\n\n\
     Or ask about all my projects!"
        .to_string()
}

fn join_or_na(items: &[String]) -> String {
    if items.is_empty() {
        "N/A".to_string()
    } else {
        items.join(", ")
    }
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn all_projects_listing(projects: &[Project]) -> String {
    projects
        .iter()
        .map(|p| {
            let github = p
                .github
                .as_deref()
                .map(|g| format!("\nGitHub: {g}"))
                .unwrap_or_default();
            format!(
                "**{}**\n{}\nTech: {}{}",
                p.title,
                p.description,
                join_or_na(&p.technologies),
                github
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

/// Full single-project summary, the default when no rule matches.
fn project_summary(project: &Project) -> String {
    let mut summary = format!("**{}**\n\n{}", project.title, project.description);
    summary.push_str(&format!(
        "\n\n**Technologies:** {}",
        join_or_na(&project.technologies)
    ));
    if let Some(github) = &project.github {
        summary.push_str(&format!("\n\n**GitHub:** {github}"));
    }
    if let Some(live) = &project.live {
        summary.push_str(&format!("\n**Live:** {live}"));
    }
    if !project.features.is_empty() {
        summary.push_str(&format!(
            "\n\n**Features:**\n{}",
            bullet_list(&project.features)
        ));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::models::{
        AboutProfile, ExperienceEntry, Resume, ResumeEducationEntry, SkillGroups,
    };

    fn make_store() -> PortfolioStore {
        let about = AboutProfile {
            name: "Ada Example".to_string(),
            title: "Backend Engineer".to_string(),
            location: "Berlin".to_string(),
            bio: "Builds servers.".to_string(),
            email: Some("ada@example.com".to_string()),
            skills: SkillGroups {
                languages: vec!["Rust".to_string(), "Python".to_string()],
                frameworks: vec!["Axum".to_string()],
                tools: vec!["Docker".to_string()],
                ai_ml: vec!["PyTorch".to_string()],
            },
            education: vec![],
            interests: vec!["distributed systems".to_string()],
            linkedin: None,
            github: Some("https://github.com/ada".to_string()),
            leetcode: None,
            code360: None,
        };

        let resume = Resume {
            experience: vec![ExperienceEntry {
                position: "Senior Engineer".to_string(),
                company: "Acme".to_string(),
                duration: "2021 - Present".to_string(),
                description: "Owns the billing platform.".to_string(),
                achievements: vec!["Cut latency by 40%".to_string()],
                technologies: vec!["Rust".to_string()],
            }],
            education: vec![ResumeEducationEntry {
                degree: "B.Sc. Computer Science".to_string(),
                institution: "TU Berlin".to_string(),
                duration: "2014 - 2018".to_string(),
                score: None,
            }],
            certifications: vec![],
            achievements: vec![],
            contact: Default::default(),
        };

        let projects = vec![
            Project {
                id: "chat-server".to_string(),
                title: "Chat Server".to_string(),
                description: "A realtime chat backend.".to_string(),
                technologies: vec!["Rust".to_string(), "Tokio".to_string()],
                features: vec!["Presence tracking".to_string()],
                github: Some("https://github.com/ada/chat-server".to_string()),
                live: None,
                category: "backend".to_string(),
                year: Some("2023".to_string()),
                company: Some("Acme".to_string()),
                domain: Some("messaging".to_string()),
            },
            Project {
                id: "bare-project".to_string(),
                title: "Bare Project".to_string(),
                description: "Minimal record.".to_string(),
                technologies: vec![],
                features: vec![],
                github: None,
                live: None,
                category: "misc".to_string(),
                year: None,
                company: None,
                domain: None,
            },
        ];

        PortfolioStore::new(about, resume, projects).unwrap()
    }

    #[test]
    fn test_greeting_names_the_owner() {
        let store = make_store();
        let reply = chat_reply("Hello there!", &store);
        assert!(reply.contains("Ada Example"));
    }

    #[test]
    fn test_skill_question_lists_all_four_categories() {
        let store = make_store();
        let reply = chat_reply("What SKILLS do you have?", &store);
        assert!(reply.contains("**Languages:** Rust, Python"));
        assert!(reply.contains("**Frameworks:** Axum"));
        assert!(reply.contains("**Tools:** Docker"));
        assert!(reply.contains("**AI/ML:** PyTorch"));
    }

    #[test]
    fn test_empty_skill_category_renders_na() {
        let store = PortfolioStore::new(
            AboutProfile {
                skills: SkillGroups {
                    languages: vec!["Rust".to_string()],
                    ..Default::default()
                },
                ..make_store().about().clone()
            },
            Resume::default(),
            vec![],
        )
        .unwrap();
        let reply = chat_reply("skills?", &store);
        assert!(reply.contains("**Frameworks:** N/A"));
        assert!(reply.contains("**AI/ML:** N/A"));
    }

    #[test]
    fn test_experience_question_lists_roles() {
        let store = make_store();
        let reply = chat_reply("Where do you work?", &store);
        assert!(reply.contains("**Senior Engineer** at Acme"));
        assert!(reply.contains("2021 - Present"));
    }

    #[test]
    fn test_experience_wins_over_projects_on_work() {
        // "work" appears in both rule lists; the experience rule is earlier.
        let store = make_store();
        let reply = chat_reply("tell me about your work", &store);
        assert!(reply.starts_with("Here's my work experience"));
    }

    #[test]
    fn test_education_question_lists_degrees() {
        let store = make_store();
        let reply = chat_reply("What is your degree?", &store);
        assert!(reply.contains("**B.Sc. Computer Science** at TU Berlin"));
    }

    #[test]
    fn test_project_question_lists_projects() {
        let store = make_store();
        let reply = chat_reply("what have you built?", &store);
        assert!(reply.contains("**Chat Server**"));
        assert!(reply.contains("Tech: Rust, Tokio"));
        assert!(reply.contains("**Bare Project**"));
    }

    #[test]
    fn test_contact_question_uses_email() {
        let store = make_store();
        let reply = chat_reply("How can I reach you?", &store);
        assert!(reply.contains("ada@example.com"));
    }

    #[test]
    fn test_unmatched_question_returns_capability_menu() {
        let store = make_store();
        let reply = chat_reply("what's the weather like?", &store);
        assert!(reply.contains("Ask me about"));
    }

    #[test]
    fn test_chat_reply_is_deterministic() {
        let store = make_store();
        let first = chat_reply("skills?", &store);
        let second = chat_reply("skills?", &store);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_project_id_returns_not_found_text() {
        let store = make_store();
        let reply = project_reply("What tech did you use?", Some("nonexistent-id"), &store);
        assert_eq!(reply, PROJECT_NOT_FOUND_TEXT);
    }

    #[test]
    fn test_tech_question_lists_stack() {
        let store = make_store();
        let reply = project_reply("What technologies were used?", Some("chat-server"), &store);
        assert!(reply.contains("**Chat Server** was built using:"));
        assert!(reply.contains("• Rust"));
        assert!(reply.contains("• Tokio"));
        assert!(reply.contains("GitHub: https://github.com/ada/chat-server"));
    }

    #[test]
    fn test_tech_question_with_empty_stack_says_none_listed() {
        let store = make_store();
        let reply = project_reply("What is the tech stack?", Some("bare-project"), &store);
        assert!(reply.contains("No technologies listed"));
    }

    #[test]
    fn test_about_question_returns_description_not_tech() {
        let store = make_store();
        let reply = project_reply("What is this project about?", Some("chat-server"), &store);
        assert!(reply.contains("A realtime chat backend."));
        assert!(!reply.contains("was built using"));
    }

    #[test]
    fn test_feature_question_lists_features() {
        let store = make_store();
        let reply = project_reply("What features does it have?", Some("chat-server"), &store);
        assert!(reply.contains("**Features of Chat Server:**"));
        assert!(reply.contains("• Presence tracking"));
    }

    #[test]
    fn test_feature_question_without_features() {
        let store = make_store();
        let reply = project_reply("what does it do?", Some("bare-project"), &store);
        assert_eq!(reply, "No feature information available for Bare Project.");
    }

    #[test]
    fn test_company_question_with_company_and_domain() {
        let store = make_store();
        let reply = project_reply("Where did you build this?", Some("chat-server"), &store);
        assert!(reply.contains("was built at **Acme** (2023)"));
        assert!(reply.contains("Domain: messaging"));
    }

    #[test]
    fn test_company_question_without_company_renders_na_year() {
        let store = make_store();
        let reply = project_reply("which company?", Some("bare-project"), &store);
        assert_eq!(reply, "**Bare Project** was built in N/A.");
    }

    #[test]
    fn test_unmatched_project_question_returns_summary() {
        let store = make_store();
        let reply = project_reply("hmm?", Some("chat-server"), &store);
        assert!(reply.contains("**Chat Server**"));
        assert!(reply.contains("**Technologies:** Rust, Tokio"));
        assert!(reply.contains("**GitHub:**"));
        assert!(reply.contains("**Features:**"));
    }

    #[test]
    fn test_summary_omits_absent_optional_sections() {
        let store = make_store();
        let reply = project_reply("hmm?", Some("bare-project"), &store);
        assert!(reply.contains("**Technologies:** N/A"));
        assert!(!reply.contains("**GitHub:**"));
        assert!(!reply.contains("**Features:**"));
    }

    #[test]
    fn test_no_id_list_question_lists_all_projects() {
        let store = make_store();
        let reply = project_reply("show me everything", None, &store);
        assert!(reply.starts_with("Here are all my projects:"));
        assert!(reply.contains("**Chat Server**"));
        assert!(reply.contains("**Bare Project**"));
    }

    #[test]
    fn test_no_id_unmatched_question_returns_menu() {
        let store = make_store();
        let reply = project_reply("hello?", None, &store);
        assert!(reply.contains("I can answer questions about specific projects"));
    }

    #[test]
    fn test_project_reply_is_deterministic() {
        let store = make_store();
        let first = project_reply("What tech?", Some("chat-server"), &store);
        let second = project_reply("What tech?", Some("chat-server"), &store);
        assert_eq!(first, second);
    }
}
