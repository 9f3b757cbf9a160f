//! Fixed resume template and the profile that fills its static parts.

use serde::Serialize;

use crate::generation::skill_extractor::SkillSet;

/// Identity header and static sections printed on every generated resume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub projects: Vec<String>,
    pub education: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            phone: "555-555-5555".to_string(),
            email: "you@example.com".to_string(),
            website: "example.com".to_string(),
            projects: Vec::new(),
            education: Vec::new(),
        }
    }
}

impl Profile {
    /// Reads `RESUME_*` variables; unset ones keep their placeholder.
    /// List variables are `;`-separated.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Profile::default();
        let list = |key: &str| {
            lookup(key)
                .map(|raw| {
                    raw.split(';')
                        .map(str::trim)
                        .filter(|item| !item.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default()
        };

        Self {
            name: lookup("RESUME_NAME").unwrap_or(defaults.name),
            phone: lookup("RESUME_PHONE").unwrap_or(defaults.phone),
            email: lookup("RESUME_EMAIL").unwrap_or(defaults.email),
            website: lookup("RESUME_WEBSITE").unwrap_or(defaults.website),
            projects: list("RESUME_PROJECTS"),
            education: list("RESUME_EDUCATION"),
        }
    }
}

/// Fills the fixed template. Headings use `**bold**` markup, which export strips.
pub fn render_resume(profile: &Profile, skills: &SkillSet, experiences: &str) -> String {
    let bullets = |items: &[String]| {
        items
            .iter()
            .map(|item| format!("- {item}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "**Name:** {name}\n\
         **Phone:** {phone}\n\
         **Email:** {email}\n\
         **Website:** {website}\n\
         \n\
         **Professional Summary:**\n\
         (AI-generated based on job description)\n\
         \n\
         **Technical Skills:**\n\
         - {skills}\n\
         \n\
         **Professional Experience:**\n\
         {experiences}\n\
         \n\
         **Projects & Independent Initiatives:**\n\
         {projects}\n\
         \n\
         **Education & Certifications:**\n\
         {education}\n",
        name = profile.name,
        phone = profile.phone,
        email = profile.email,
        website = profile.website,
        skills = skills.joined(),
        experiences = experiences,
        projects = bullets(&profile.projects),
        education = bullets(&profile.education),
    )
}
