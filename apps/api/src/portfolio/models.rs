//! Portfolio data records — typed mirrors of the site's static JSON content
//! files (`about.json`, `resume.json`, `projects.json`). Immutable after load.
//!
//! All textual fields are opaque strings; the only validation beyond shape is
//! optional-field presence, handled with `Option` and `#[serde(default)]`.

use serde::{Deserialize, Serialize};

/// Skill lists grouped by category, as rendered on the About page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillGroups {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub ai_ml: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationSummary {
    pub degree: String,
    pub school: String,
    pub year: String,
}

/// `about.json` — owner identity, bio, skills, and social links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutProfile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub bio: String,
    pub email: Option<String>,
    #[serde(default)]
    pub skills: SkillGroups,
    #[serde(default)]
    pub education: Vec<EducationSummary>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub leetcode: Option<String>,
    pub code360: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub position: String,
    pub company: String,
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeEducationEntry {
    pub degree: String,
    pub institution: String,
    pub duration: String,
    pub score: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// `resume.json` — experience, education, certifications, and contact info.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resume {
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<ResumeEducationEntry>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub contact: ContactInfo,
}

/// One entry of `projects.json`. `id` is the unique lookup key used by the
/// project Q&A endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub github: Option<String>,
    pub live: Option<String>,
    pub category: String,
    pub year: Option<String>,
    pub company: Option<String>,
    pub domain: Option<String>,
}
